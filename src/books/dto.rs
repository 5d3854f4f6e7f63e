use serde::{Deserialize, Serialize};

// BookDto is the wire form of a book record.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookDto {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
}

// SaveBookRequest carries the fields accepted when creating a book. The
// identifier is optional at decode time and validated by the service.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaveBookRequest {
    pub book_id: Option<i64>,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
}

// UpdateBookRequest carries the partial changes accepted when updating a
// book; the identifier itself is not updatable.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::dto::{BookDto, SaveBookRequest, UpdateBookRequest};

    #[tokio::test]
    async fn test_should_serialize_book_dto() {
        let book = BookDto {
            book_id: 3,
            title: "Fantastic Mr. Fox".to_string(),
            author: "Roald Dahl".to_string(),
            description: None,
        };
        let val = serde_json::to_value(&book).expect("should serialize book");
        assert_eq!(json!({"bookId": 3, "title": "Fantastic Mr. Fox", "author": "Roald Dahl", "description": null}), val);
    }

    #[tokio::test]
    async fn test_should_deserialize_save_request_without_id() {
        let req: SaveBookRequest = serde_json::from_value(
            json!({"title": "Fantastic Mr. Fox", "author": "Roald Dahl"})).expect("should decode request");
        assert_eq!(None, req.book_id);
        assert_eq!("Fantastic Mr. Fox", req.title.as_str());
    }

    #[tokio::test]
    async fn test_should_deserialize_partial_update_request() {
        let req: UpdateBookRequest = serde_json::from_value(
            json!({"title": "The Twits"})).expect("should decode request");
        assert_eq!(Some("The Twits".to_string()), req.title);
        assert_eq!(None, req.author);
        assert_eq!(None, req.description);
    }
}
