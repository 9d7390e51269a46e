use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub title: String,
}

impl SearchBooksCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<Book>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        self.catalog_service.search_books_by_title(req.title.as_str()).await
            .map_err(CommandError::from).map(SearchBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_run_search_books() {
        let config = Configuration { events_via: GatewayPublisherVia::Memory, ..Configuration::new("test") };
        let svc = factory::create_catalog_service(&config);
        let add_cmd = AddBookCommand::new(svc.clone());
        let search_cmd = SearchBooksCommand::new(svc);

        for (title, isbn) in [("Clean Code", "ISBN-001"), ("Clean Architecture", "ISBN-002"), ("Dune", "ISBN-003")] {
            let _ = add_cmd.execute(AddBookCommandRequest::new(title, "Author", isbn, 2000))
                .await.expect("should add book");
        }
        let res = search_cmd.execute(SearchBooksCommandRequest::new("clean")).await.expect("should search");
        assert_eq!(2, res.books.len());
        let res = search_cmd.execute(SearchBooksCommandRequest::new("  ")).await.expect("should search");
        assert!(res.books.is_empty());
    }
}
