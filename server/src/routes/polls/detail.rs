use actix_web::{
    web::{block, Data, Path},
    HttpResponse,
};
use chrono::Utc;
use tera::Tera;

use db::PollStore;
use errors::Error;

use crate::handlers::get_question;
use crate::templates::{self, render};

pub async fn detail(
    store: Data<dyn PollStore>,
    tera: Data<Tera>,
    question_id: Path<i32>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let store = store.into_inner();
    let now = Utc::now();

    let page = block(move || get_question(store.as_ref(), question_id, now)).await??;

    render(&tera, templates::DETAIL, &page)
}
