//! Rules deciding which questions the public pages may show.
//!
//! A question is visible once its `pub_date` has passed and it has at least one
//! choice. Both store implementations follow these rules; `PgStore` expresses
//! them in SQL.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::models::Question;

/// How many questions the index page lists.
pub const LATEST_QUESTIONS_LIMIT: i64 = 5;

pub fn is_visible(question: &Question, choice_count: usize, now: DateTime<Utc>) -> bool {
    question.pub_date <= now && choice_count > 0
}

/// Most recent `pub_date` first. Questions sharing a `pub_date` are ordered by
/// id, highest first.
pub fn latest_first(a: &Question, b: &Question) -> Ordering {
    b.pub_date.cmp(&a.pub_date).then_with(|| b.id.cmp(&a.id))
}

pub fn sort_latest(questions: &mut [Question]) {
    questions.sort_by(latest_first);
}
