use actix_web::web;

use errors::Error;

pub mod polls;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(polls::index)))
        .service(web::resource("/{id}").route(web::get().to(polls::detail)))
        .service(web::resource("/{id}/results/").route(web::get().to(polls::results)))
        .service(web::resource("/{id}/vote/").route(web::post().to(polls::vote)))
        .default_service(web::route().to(not_found));
}

async fn not_found() -> Result<&'static str, Error> {
    Err(Error::NotFound("Page not found".into()))
}
