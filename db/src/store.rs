use chrono::{DateTime, Utc};
use diesel::prelude::*;

use errors::Error;

use crate::models::{Choice, Question, QuestionDetails};
use crate::schema::{choices, questions};
use crate::{get_conn, PgPool};

/// Storage used by the poll pages. Implementations must make
/// `increment_votes` a single storage-level operation so concurrent votes are
/// never lost.
pub trait PollStore: Send + Sync {
    /// Visible questions, most recent first, at most `limit` of them.
    fn latest_questions(&self, now: DateTime<Utc>, limit: i64) -> Result<Vec<Question>, Error>;

    /// The question with its choices, or `None` when it does not exist or is not
    /// visible at `now`.
    fn visible_question(
        &self,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<QuestionDetails>, Error>;

    /// Returns false when `choice_id` is not one of the question's choices.
    fn increment_votes(&self, question_id: i32, choice_id: i32) -> Result<bool, Error>;
}

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

impl PollStore for PgStore {
    fn latest_questions(&self, now: DateTime<Utc>, limit: i64) -> Result<Vec<Question>, Error> {
        let mut conn = get_conn(&self.pool)?;

        let results = questions::table
            .filter(questions::pub_date.le(now))
            .filter(questions::id.eq_any(choices::table.select(choices::question_id)))
            .order((questions::pub_date.desc(), questions::id.desc()))
            .limit(limit)
            .load::<Question>(&mut conn)?;

        Ok(results)
    }

    fn visible_question(
        &self,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<QuestionDetails>, Error> {
        let mut conn = get_conn(&self.pool)?;

        let question = questions::table
            .filter(questions::id.eq(question_id))
            .filter(questions::pub_date.le(now))
            .first::<Question>(&mut conn)
            .optional()?;

        let question = match question {
            Some(question) => question,
            None => return Ok(None),
        };

        let choices = Choice::find_by_question(&mut conn, &question)?;
        if choices.is_empty() {
            return Ok(None);
        }

        Ok(Some(QuestionDetails { question, choices }))
    }

    fn increment_votes(&self, question_id: i32, choice_id: i32) -> Result<bool, Error> {
        let mut conn = get_conn(&self.pool)?;

        Choice::increment_votes(&mut conn, question_id, choice_id)
    }
}
