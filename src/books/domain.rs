pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, SaveBookRequest, UpdateBookRequest};
use crate::core::bookshop::BookshopResult;

#[async_trait]
pub(crate) trait BookService: Sync + Send {
    async fn get_books(&self) -> BookshopResult<Vec<BookDto>>;
    async fn get_book(&self, book_id: i64) -> BookshopResult<Option<BookDto>>;
    async fn save_book(&self, book: &SaveBookRequest) -> BookshopResult<BookDto>;
    async fn update_book(&self, book_id: i64, update: &UpdateBookRequest) -> BookshopResult<u64>;
    async fn delete_book(&self, book_id: &str) -> BookshopResult<u64>;
}
