use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct LoanBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl LoanBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoanBookCommandRequest {
    pub isbn: String,
}

impl LoanBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoanBookCommandResponse {
    pub book: Book,
}

impl LoanBookCommandResponse {
    pub fn new(book: Book) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<LoanBookCommandRequest, LoanBookCommandResponse> for LoanBookCommand {
    async fn execute(&self, req: LoanBookCommandRequest) -> Result<LoanBookCommandResponse, CommandError> {
        self.catalog_service.loan_book(req.isbn.as_str()).await
            .map_err(CommandError::from).map(LoanBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::loan_book_cmd::{LoanBookCommand, LoanBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_run_loan_book() {
        let config = Configuration { events_via: GatewayPublisherVia::Memory, ..Configuration::new("test") };
        let svc = factory::create_catalog_service(&config);
        let add_cmd = AddBookCommand::new(svc.clone());
        let loan_cmd = LoanBookCommand::new(svc);

        let _ = add_cmd.execute(AddBookCommandRequest::new("Dune", "Frank Herbert", "ISBN-7", 1965))
            .await.expect("should add book");
        let res = loan_cmd.execute(LoanBookCommandRequest::new("isbn-7")).await.expect("should loan book");
        assert!(res.book.is_loaned());

        let again = loan_cmd.execute(LoanBookCommandRequest::new("ISBN-7")).await;
        assert!(matches!(again, Err(CommandError::StateConflict { .. })));
        let missing = loan_cmd.execute(LoanBookCommandRequest::new("ISBN-8")).await;
        assert!(matches!(missing, Err(CommandError::NotFound { .. })));
    }
}
