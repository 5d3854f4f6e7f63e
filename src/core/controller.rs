use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use crate::books::domain::BookService;
use crate::core::bookshop::BookshopError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) service: Arc<dyn BookService>,
}

impl AppState {
    pub fn new(service: Box<dyn BookService>) -> AppState {
        AppState {
            service: Arc::from(service),
        }
    }
}

// MessageResponse is the wire form of every non-entity response body.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> MessageResponse {
        MessageResponse { message: message.to_string() }
    }
}

#[derive(Debug)]
pub(crate) struct ServerError {
    status: StatusCode,
    message: String,
}

impl ServerError {
    pub fn bad_request(message: &str) -> ServerError {
        ServerError { status: StatusCode::BAD_REQUEST, message: message.to_string() }
    }

    pub fn not_found(message: &str) -> ServerError {
        ServerError { status: StatusCode::NOT_FOUND, message: message.to_string() }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageResponse::new(self.message.as_str()))).into_response()
    }
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ServerError::bad_request(format!("{}", err).as_str())
}

impl From<BookshopError> for ServerError {
    fn from(err: BookshopError) -> Self {
        match err {
            BookshopError::Database { .. } => {
                ServerError { status: StatusCode::INTERNAL_SERVER_ERROR, message: format!("{}", err) }
            }
            BookshopError::DuplicateKey { ref message } => {
                ServerError { status: StatusCode::BAD_REQUEST, message: message.to_string() }
            }
            BookshopError::NotFound { ref message } => {
                ServerError { status: StatusCode::NOT_FOUND, message: message.to_string() }
            }
            BookshopError::Validation { ref message, .. } => {
                ServerError { status: StatusCode::BAD_REQUEST, message: message.to_string() }
            }
            BookshopError::Runtime { .. } => {
                ServerError { status: StatusCode::INTERNAL_SERVER_ERROR, message: format!("{}", err) }
            }
        }
    }
}
