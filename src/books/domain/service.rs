use async_trait::async_trait;
use crate::books::domain::model::{BookEntity, BookUpdate};
use crate::books::domain::BookService;
use crate::books::dto::{BookDto, SaveBookRequest, UpdateBookRequest};
use crate::books::repository::BookRepository;
use crate::core::bookshop::{BookshopError, BookshopResult};
use crate::core::domain::Configuration;

pub(crate) struct BookServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl BookServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl BookService for BookServiceImpl {
    async fn get_books(&self) -> BookshopResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    // a missing book is not an error here, absence travels as data
    async fn get_book(&self, book_id: i64) -> BookshopResult<Option<BookDto>> {
        let book = self.book_repository.find_by_id(book_id).await?;
        Ok(book.as_ref().map(BookDto::from))
    }

    async fn save_book(&self, book: &SaveBookRequest) -> BookshopResult<BookDto> {
        let book_id = book.book_id.ok_or_else(|| BookshopError::validation(
            "Book ID is required", None))?;
        if self.book_repository.find_by_id(book_id).await?.is_some() {
            return Err(BookshopError::duplicate_key(
                format!("Book with ID {} already exists in the database", book_id).as_str()));
        }
        let entity = BookEntity::new(
            book_id, book.title.as_str(), book.author.as_str(), book.description.clone());
        let _ = self.book_repository.insert(&entity).await?;
        Ok(BookDto::from(&entity))
    }

    async fn update_book(&self, book_id: i64, update: &UpdateBookRequest) -> BookshopResult<u64> {
        self.book_repository.update_by_id(book_id, &BookUpdate::from(update)).await
    }

    async fn delete_book(&self, book_id: &str) -> BookshopResult<u64> {
        let book_id: i64 = book_id.parse().map_err(|_| BookshopError::validation(
            "Book ID is invalid", None))?;
        self.book_repository.delete_by_id(book_id).await
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            description: other.description.clone(),
        }
    }
}

impl From<&UpdateBookRequest> for BookUpdate {
    fn from(other: &UpdateBookRequest) -> Self {
        Self {
            title: other.title.clone(),
            author: other.author.clone(),
            description: other.description.clone(),
        }
    }
}
