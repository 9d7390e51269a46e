use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct BookAvailabilityCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl BookAvailabilityCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BookAvailabilityCommandRequest {
    pub isbn: String,
}

impl BookAvailabilityCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookAvailabilityCommandResponse {
    pub available: bool,
}

impl BookAvailabilityCommandResponse {
    pub fn new(available: bool) -> Self {
        Self {
            available,
        }
    }
}

#[async_trait]
impl Command<BookAvailabilityCommandRequest, BookAvailabilityCommandResponse> for BookAvailabilityCommand {
    async fn execute(&self, req: BookAvailabilityCommandRequest) -> Result<BookAvailabilityCommandResponse, CommandError> {
        self.catalog_service.is_book_available(req.isbn.as_str()).await
            .map_err(CommandError::from).map(BookAvailabilityCommandResponse::new)
    }
}
