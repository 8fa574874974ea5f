use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::{models::Question, visibility::LATEST_QUESTIONS_LIMIT, PollStore};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexPage {
    pub latest_question_list: Vec<Question>,
}

pub fn get_index(store: &dyn PollStore, now: DateTime<Utc>) -> Result<IndexPage, Error> {
    let latest_question_list = store.latest_questions(now, LATEST_QUESTIONS_LIMIT)?;

    Ok(IndexPage {
        latest_question_list,
    })
}
