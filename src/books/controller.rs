use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;

use crate::books::dto::{BookDto, SaveBookRequest, UpdateBookRequest};
use crate::core::controller::{json_to_server_error, AppState, MessageResponse, ServerError};

pub(crate) fn books_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/books",
               get(get_books).post(save_book))
        .route("/api/v1/books/:book_id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .with_state(state)
}

pub(crate) async fn get_books(
    State(state): State<AppState>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let books = state.service.get_books().await?;
    Ok(Json(books))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<BookDto>, ServerError> {
    // a non-numeric id can never match a stored book
    let book = match book_id.parse::<i64>() {
        Ok(id) => state.service.get_book(id).await?,
        Err(_) => None,
    };
    match book {
        Some(book) => Ok(Json(book)),
        None => Err(ServerError::not_found(
            format!("Book with ID {} not found in the database", book_id).as_str())),
    }
}

pub(crate) async fn save_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<BookDto>), ServerError> {
    let req: SaveBookRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let book = state.service.save_book(&req).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Json<Value>) -> Result<StatusCode, ServerError> {
    let req: UpdateBookRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let affected = match book_id.parse::<i64>() {
        Ok(id) => state.service.update_book(id, &req).await?,
        Err(_) => 0,
    };
    if affected == 1 {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::bad_request(
            format!("Book with ID {} does not exist so cannot be updated", book_id).as_str()))
    }
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<MessageResponse>, ServerError> {
    // the affected count is not inspected, removing an unknown id still
    // reports success
    let _ = state.service.delete_book(book_id.as_str()).await?;
    Ok(Json(MessageResponse::new(
        format!("Book with ID {} has been deleted", book_id).as_str())))
}
