use chrono::{DateTime, Utc};

use db::PollStore;
use errors::Error;

use super::get_question::{find_visible_question, QuestionPage};

pub const CHOICE_NOT_SELECTED: &str = "Choice was not selected";

#[derive(Debug)]
pub enum VoteOutcome {
    /// The vote was counted; the client should be sent to the results page.
    Recorded,
    /// No usable choice was submitted. The detail page is shown again with an error.
    Rejected(QuestionPage),
}

pub fn cast_vote(
    store: &dyn PollStore,
    question_id: i32,
    choice: Option<&str>,
    now: DateTime<Utc>,
) -> Result<VoteOutcome, Error> {
    let details = find_visible_question(store, question_id, now)?;

    let choice_id = choice
        .and_then(|value| value.trim().parse::<i32>().ok())
        .filter(|choice_id| details.find_choice(*choice_id).is_some());

    let recorded = match choice_id {
        Some(choice_id) => store.increment_votes(question_id, choice_id)?,
        None => false,
    };

    if !recorded {
        debug!(
            "Rejected vote on question {} with choice {:?}",
            question_id, choice
        );
        let mut page = QuestionPage::from(details);
        page.error_message = Some(CHOICE_NOT_SELECTED.to_string());
        return Ok(VoteOutcome::Rejected(page));
    }

    info!(
        "Recorded vote on question {} for choice {:?}",
        question_id, choice_id
    );

    Ok(VoteOutcome::Recorded)
}
