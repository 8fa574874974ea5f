use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use errors::Error;

use crate::models::{Choice, Question, QuestionDetails};
use crate::store::PollStore;
use crate::visibility::{is_visible, sort_latest};

#[derive(Default)]
struct Tables {
    questions: Vec<Question>,
    choices: Vec<Choice>,
    next_question_id: i32,
    next_choice_id: i32,
}

impl Tables {
    fn choices_for(&self, question_id: i32) -> Vec<Choice> {
        self.choices
            .iter()
            .filter(|choice| choice.question_id == question_id)
            .cloned()
            .collect()
    }
}

/// A `PollStore` kept in process memory. Every operation holds one lock, so a
/// vote increment is as atomic as the SQL `UPDATE` it stands in for.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, Error> {
        self.tables.lock().map_err(|err| {
            error!("Memory store lock poisoned - {}", err);
            Error::InternalServerError("Store unavailable".into())
        })
    }

    pub fn create_question(&self, question_text: &str, pub_date: DateTime<Utc>) -> Question {
        let mut tables = self.tables.lock().unwrap_or_else(|err| err.into_inner());
        tables.next_question_id += 1;
        let question = Question {
            id: tables.next_question_id,
            question_text: question_text.to_string(),
            pub_date,
        };
        tables.questions.push(question.clone());
        question
    }

    pub fn create_choice(&self, question_id: i32, choice_text: &str, votes: i32) -> Choice {
        let mut tables = self.tables.lock().unwrap_or_else(|err| err.into_inner());
        tables.next_choice_id += 1;
        let choice = Choice {
            id: tables.next_choice_id,
            question_id,
            choice_text: choice_text.to_string(),
            votes,
        };
        tables.choices.push(choice.clone());
        choice
    }

    pub fn choice(&self, choice_id: i32) -> Option<Choice> {
        let tables = self.tables.lock().unwrap_or_else(|err| err.into_inner());
        tables.choices.iter().find(|choice| choice.id == choice_id).cloned()
    }
}

impl PollStore for MemoryStore {
    fn latest_questions(&self, now: DateTime<Utc>, limit: i64) -> Result<Vec<Question>, Error> {
        let tables = self.lock()?;

        let mut results: Vec<Question> = tables
            .questions
            .iter()
            .filter(|question| {
                let choice_count = tables
                    .choices
                    .iter()
                    .filter(|choice| choice.question_id == question.id)
                    .count();
                is_visible(question, choice_count, now)
            })
            .cloned()
            .collect();
        sort_latest(&mut results);
        results.truncate(limit.max(0) as usize);

        Ok(results)
    }

    fn visible_question(
        &self,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<QuestionDetails>, Error> {
        let tables = self.lock()?;

        let question = match tables.questions.iter().find(|q| q.id == question_id) {
            Some(question) => question.clone(),
            None => return Ok(None),
        };
        let mut choices = tables.choices_for(question_id);
        if !is_visible(&question, choices.len(), now) {
            return Ok(None);
        }
        choices.sort_by_key(|choice| choice.id);

        Ok(Some(QuestionDetails { question, choices }))
    }

    fn increment_votes(&self, question_id: i32, choice_id: i32) -> Result<bool, Error> {
        let mut tables = self.lock()?;

        match tables
            .choices
            .iter_mut()
            .find(|choice| choice.id == choice_id && choice.question_id == question_id)
        {
            Some(choice) => {
                // Postgres rejects the UPDATE with "integer out of range"; match it.
                choice.votes = choice.votes.checked_add(1).ok_or_else(|| {
                    error!("Vote count overflow on choice {}", choice_id);
                    Error::InternalServerError("Vote count overflow".into())
                })?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
