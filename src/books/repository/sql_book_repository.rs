use async_trait::async_trait;
use sqlx::AnyPool;

use crate::books::domain::model::{BookEntity, BookUpdate};
use crate::books::repository::BookRepository;
use crate::core::bookshop::{BookshopError, BookshopResult};

#[derive(Debug)]
pub struct SqlBookRepository {
    pool: AnyPool,
}

impl SqlBookRepository {
    pub(crate) fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for SqlBookRepository {
    async fn find_all(&self) -> BookshopResult<Vec<BookEntity>> {
        sqlx::query_as::<_, (i64, String, String, Option<String>)>(
            "SELECT book_id, title, author, description FROM books ORDER BY book_id")
            .fetch_all(&self.pool)
            .await
            .map_err(BookshopError::from)
            .map(|rows| rows.iter().map(map_to_book).collect())
    }

    async fn find_by_id(&self, book_id: i64) -> BookshopResult<Option<BookEntity>> {
        sqlx::query_as::<_, (i64, String, String, Option<String>)>(
            "SELECT book_id, title, author, description FROM books WHERE book_id = $1")
            .bind(book_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(BookshopError::from)
            .map(|row| row.as_ref().map(map_to_book))
    }

    async fn insert(&self, entity: &BookEntity) -> BookshopResult<u64> {
        let res = match entity.description {
            // the column list is assembled per statement so absent values
            // never reach the driver as typed nulls
            Some(ref description) => {
                sqlx::query(
                    "INSERT INTO books (book_id, title, author, description) VALUES ($1, $2, $3, $4)")
                    .bind(entity.book_id)
                    .bind(entity.title.clone())
                    .bind(entity.author.clone())
                    .bind(description.clone())
                    .execute(&self.pool)
                    .await
            }
            None => {
                sqlx::query(
                    "INSERT INTO books (book_id, title, author) VALUES ($1, $2, $3)")
                    .bind(entity.book_id)
                    .bind(entity.title.clone())
                    .bind(entity.author.clone())
                    .execute(&self.pool)
                    .await
            }
        };
        res.map(|done| done.rows_affected()).map_err(BookshopError::from)
    }

    async fn update_by_id(&self, book_id: i64, update: &BookUpdate) -> BookshopResult<u64> {
        let mut set_expr: Vec<String> = Vec::new();
        let mut binds = 0;
        if update.title.is_some() {
            binds += 1;
            set_expr.push(format!("title = ${}", binds));
        }
        if update.author.is_some() {
            binds += 1;
            set_expr.push(format!("author = ${}", binds));
        }
        if update.description.is_some() {
            binds += 1;
            set_expr.push(format!("description = ${}", binds));
        }
        if set_expr.is_empty() {
            // a matched row still counts as affected when no field changes
            set_expr.push("book_id = book_id".to_string());
        }
        let sql = format!("UPDATE books SET {} WHERE book_id = ${}",
                          set_expr.join(", "), binds + 1);
        let mut query = sqlx::query(sql.as_str());
        if let Some(ref title) = update.title {
            query = query.bind(title.clone());
        }
        if let Some(ref author) = update.author {
            query = query.bind(author.clone());
        }
        if let Some(ref description) = update.description {
            query = query.bind(description.clone());
        }
        query.bind(book_id)
            .execute(&self.pool)
            .await
            .map(|done| done.rows_affected())
            .map_err(BookshopError::from)
    }

    async fn delete_by_id(&self, book_id: i64) -> BookshopResult<u64> {
        sqlx::query("DELETE FROM books WHERE book_id = $1")
            .bind(book_id)
            .execute(&self.pool)
            .await
            .map(|done| done.rows_affected())
            .map_err(BookshopError::from)
    }
}

fn map_to_book(row: &(i64, String, String, Option<String>)) -> BookEntity {
    BookEntity {
        book_id: row.0,
        title: row.1.to_string(),
        author: row.2.to_string(),
        description: row.3.clone(),
    }
}
