use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum BookshopError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl BookshopError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> BookshopError {
        BookshopError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str) -> BookshopError {
        BookshopError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> BookshopError {
        BookshopError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> BookshopError {
        BookshopError::Validation { message: message.to_string(), reason_code }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> BookshopError {
        BookshopError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<sqlx::Error> for BookshopError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                BookshopError::duplicate_key(
                    format!("duplicate key {:?}", db_err).as_str())
            }
            sqlx::Error::RowNotFound => {
                BookshopError::not_found("sql row not found")
            }
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut => {
                BookshopError::database(
                    format!("sql connection error {:?}", err).as_str(), None, true)
            }
            other => {
                BookshopError::database(
                    format!("sql database error {:?}", other).as_str(), None, false)
            }
        }
    }
}

impl Display for BookshopError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BookshopError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            BookshopError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            BookshopError::NotFound { message } => {
                write!(f, "{}", message)
            }
            BookshopError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            BookshopError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for bookshop operations.
pub type BookshopResult<T> = Result<T, BookshopError>;
