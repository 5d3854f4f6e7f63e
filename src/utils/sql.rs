use std::sync::Once;

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

use crate::core::bookshop::{BookshopError, BookshopResult};

pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

static INSTALL_DRIVERS: Once = Once::new();

pub(crate) async fn build_db_pool(database_url: &str) -> BookshopResult<AnyPool> {
    INSTALL_DRIVERS.call_once(sqlx::any::install_default_drivers);
    let options = if database_url.contains(":memory:") {
        // every pooled connection to an in-memory sqlite database opens its
        // own empty store, so the pool must hold exactly one connection and
        // never recycle it.
        AnyPoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        AnyPoolOptions::new().max_connections(5)
    };
    options.connect(database_url).await.map_err(BookshopError::from)
}

pub(crate) async fn create_books_table(pool: &AnyPool) -> BookshopResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS books (book_id BIGINT PRIMARY KEY, title TEXT NOT NULL, author TEXT NOT NULL, description TEXT)")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(BookshopError::from)
}
