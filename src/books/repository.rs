pub mod sql_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::{BookEntity, BookUpdate};
use crate::core::bookshop::BookshopResult;


#[async_trait]
pub(crate) trait BookRepository: Sync + Send {
    // lists all stored books
    async fn find_all(&self) -> BookshopResult<Vec<BookEntity>>;

    // finds a book by its id
    async fn find_by_id(&self, book_id: i64) -> BookshopResult<Option<BookEntity>>;

    // stores a new book
    async fn insert(&self, entity: &BookEntity) -> BookshopResult<u64>;

    // applies partial changes to a book, returning the affected count
    async fn update_by_id(&self, book_id: i64, update: &BookUpdate) -> BookshopResult<u64>;

    // removes a book, returning the affected count
    async fn delete_by_id(&self, book_id: i64) -> BookshopResult<u64>;
}
