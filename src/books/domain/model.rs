// BookEntity abstracts a book record in the bookshop and the caller assigns
// its identifier when the book is created.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct BookEntity {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
}

impl BookEntity {
    pub fn new(book_id: i64, title: &str, author: &str, description: Option<String>) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            description,
        }
    }
}

// BookUpdate carries partial changes for a stored book; absent fields leave
// the stored column untouched.
#[derive(Debug, PartialEq, Default)]
pub(crate) struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
}
