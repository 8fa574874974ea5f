use actix_web::{
    http::header::LOCATION,
    web::{block, Bytes, Data, Path},
    HttpResponse,
};
use chrono::Utc;
use tera::Tera;

use db::PollStore;
use errors::Error;

use super::results_path;
use crate::handlers::{cast_vote, VoteOutcome};
use crate::templates::{self, render};

/// Value of the last `choice` field in a urlencoded body. A repeated field takes
/// its last value, and a body that does not parse has no choice.
fn last_choice(body: &[u8]) -> Option<String> {
    serde_urlencoded::from_bytes::<Vec<(String, String)>>(body)
        .ok()?
        .into_iter()
        .filter(|(name, _)| name == "choice")
        .map(|(_, value)| value)
        .last()
}

pub async fn vote(
    store: Data<dyn PollStore>,
    tera: Data<Tera>,
    question_id: Path<i32>,
    body: Bytes,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let choice = last_choice(&body);
    let store = store.into_inner();
    let now = Utc::now();

    let outcome = block(move || cast_vote(store.as_ref(), question_id, choice.as_deref(), now))
        .await??;

    match outcome {
        VoteOutcome::Recorded => Ok(HttpResponse::Found()
            .insert_header((LOCATION, results_path(question_id)))
            .finish()),
        VoteOutcome::Rejected(page) => render(&tera, templates::DETAIL, &page),
    }
}
