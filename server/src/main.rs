#[macro_use]
extern crate log;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

mod config;
mod handlers;
mod routes;
#[cfg(test)]
mod tests;
mod templates;

use crate::config::{Config, DEFAULT_LOG_FILTER};
use crate::routes::routes;
use db::{PgStore, PollStore};

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let config = Config::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    let pool = db::new_pool(&config.database_url)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    let store: Arc<dyn PollStore> = Arc::new(PgStore::new(pool));
    let store = Data::from(store);

    let tera = templates::load().map_err(|err| {
        error!("Failed to load templates - {:?}", err);
        io::Error::new(io::ErrorKind::Other, err.to_string())
    })?;
    let tera = Data::new(tera);

    info!("Listening on {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .app_data(tera.clone())
            .configure(routes)
    })
    .bind(config.bind_address)?
    .run()
    .await
}
