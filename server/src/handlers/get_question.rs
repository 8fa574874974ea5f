use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::{
    models::{Choice, Question, QuestionDetails},
    PollStore,
};
use errors::Error;

/// Context for the detail and results pages.
#[derive(Debug, Deserialize, Serialize)]
pub struct QuestionPage {
    pub question: Question,
    pub choices: Vec<Choice>,
    pub total_votes: i64,
    pub error_message: Option<String>,
}

impl From<QuestionDetails> for QuestionPage {
    fn from(details: QuestionDetails) -> Self {
        let total_votes = details.total_votes();
        QuestionPage {
            question: details.question,
            choices: details.choices,
            total_votes,
            error_message: None,
        }
    }
}

pub(crate) fn find_visible_question(
    store: &dyn PollStore,
    question_id: i32,
    now: DateTime<Utc>,
) -> Result<QuestionDetails, Error> {
    store
        .visible_question(question_id, now)?
        .ok_or_else(|| Error::NotFound(format!("No question found with id {}", question_id)))
}

pub fn get_question(
    store: &dyn PollStore,
    question_id: i32,
    now: DateTime<Utc>,
) -> Result<QuestionPage, Error> {
    let details = find_visible_question(store, question_id, now)?;

    Ok(details.into())
}
