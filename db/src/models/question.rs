use chrono::{DateTime, Duration, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Choice;
use crate::schema::questions;

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[diesel(table_name = questions)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

/// A question together with its choices, as shown on the detail and results pages.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct QuestionDetails {
    pub question: Question,
    pub choices: Vec<Choice>,
}

impl Question {
    pub fn create(
        conn: &mut PgConnection,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .get_result(conn)?;

        Ok(question)
    }

    /// True when `pub_date` falls within the day leading up to `now`. Future dates
    /// are never recent.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }
}

impl QuestionDetails {
    pub fn total_votes(&self) -> i64 {
        self.choices.iter().map(|choice| i64::from(choice.votes)).sum()
    }

    pub fn find_choice(&self, choice_id: i32) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == choice_id)
    }
}
