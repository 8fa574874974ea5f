#[macro_use]
extern crate log;

use actix_web::{
    error::{BlockingError, ResponseError},
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::Display;
use diesel::result::Error as DBError;
use r2d2::Error as PoolError;

#[derive(Debug, Display, PartialEq)]
pub enum Error {
    InternalServerError(String),
    NotFound(String),
    PoolError(String),
    BlockingError(String),
}

impl std::error::Error for Error {}

// User-friendly error messages
#[derive(Debug)]
pub struct ErrorResponse {
    pub errors: Vec<String>,
}

impl ErrorResponse {
    fn to_html(&self, title: &str) -> String {
        let items: String = self
            .errors
            .iter()
            .map(|message| format!("<p>{}</p>", escape(message)))
            .collect();
        format!(
            "<!DOCTYPE html><html><head><title>{title}</title></head><body><h1>{title}</h1>{items}</body></html>",
            title = title,
            items = items
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Error::NotFound(message) => HttpResponse::NotFound()
                .insert_header(ContentType::html())
                .body(ErrorResponse::from(message).to_html("Not Found")),
            _ => HttpResponse::new(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl From<&String> for ErrorResponse {
    fn from(error: &String) -> Self {
        ErrorResponse {
            errors: vec![error.into()],
        }
    }
}

// Convert DBErrors to our Error type
impl From<DBError> for Error {
    fn from(error: DBError) -> Error {
        match error {
            DBError::DatabaseError(kind, info) => {
                error!("Database error {:?} - {}", kind, info.message());
                Error::InternalServerError("Unknown database error".into())
            }
            DBError::NotFound => Error::NotFound("Record not found".into()),
            _ => {
                error!("Database error - {}", error);
                Error::InternalServerError("Unknown database error".into())
            }
        }
    }
}

// Convert PoolError to our Error type
impl From<PoolError> for Error {
    fn from(error: PoolError) -> Error {
        Error::PoolError(error.to_string())
    }
}

impl From<BlockingError> for Error {
    fn from(error: BlockingError) -> Error {
        error!("Blocking task failed - {}", error);
        Error::BlockingError("Thread blocking error".into())
    }
}
