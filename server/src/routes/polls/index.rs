use actix_web::{
    web::{block, Data},
    HttpResponse,
};
use chrono::Utc;
use tera::Tera;

use db::PollStore;
use errors::Error;

use crate::handlers::get_index;
use crate::templates::{self, render};

pub async fn index(store: Data<dyn PollStore>, tera: Data<Tera>) -> Result<HttpResponse, Error> {
    let store = store.into_inner();
    let now = Utc::now();

    let page = block(move || get_index(store.as_ref(), now)).await??;

    render(&tera, templates::INDEX, &page)
}
