use crate::books::domain::service::BookServiceImpl;
use crate::books::domain::BookService;
use crate::books::repository::sql_book_repository::SqlBookRepository;
use crate::books::repository::BookRepository;
use crate::core::bookshop::BookshopResult;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::sql::{build_db_pool, create_books_table, MEMORY_DATABASE_URL};

pub(crate) async fn create_book_repository(config: &Configuration, store: RepositoryStore) -> BookshopResult<Box<dyn BookRepository>> {
    match store {
        RepositoryStore::Relational => {
            let pool = build_db_pool(config.database_url().as_str()).await?;
            Ok(Box::new(SqlBookRepository::new(pool)))
        }
        RepositoryStore::InMemory => {
            let pool = build_db_pool(MEMORY_DATABASE_URL).await?;
            create_books_table(&pool).await?;
            Ok(Box::new(SqlBookRepository::new(pool)))
        }
    }
}

pub(crate) async fn create_book_service(config: &Configuration, store: RepositoryStore) -> BookshopResult<Box<dyn BookService>> {
    let book_repository = create_book_repository(config, store).await?;
    Ok(Box::new(BookServiceImpl::new(config, book_repository)))
}
