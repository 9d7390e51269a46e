use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, REASON_NOT_A_NUMBER};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: i32,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, publication_year: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publication_year,
        }
    }

    /// Builds a request from raw console input; the year must parse as an integer.
    pub fn parse(title: &str, author: &str, isbn: &str, year: &str) -> Result<Self, CommandError> {
        let publication_year = year.trim().parse::<i32>().map_err(|_| LibraryError::validation(
            "publication year must be an integer", Some(REASON_NOT_A_NUMBER.to_string())))?;
        Ok(Self::new(title, author, isbn, publication_year))
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: Book,
}

impl AddBookCommandResponse {
    pub fn new(book: Book) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(req.title.as_str(), req.author.as_str(), req.isbn.as_str(), req.publication_year)
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
