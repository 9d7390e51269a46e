use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use crate::books::domain::model::Book;
use crate::catalog::domain::manager::LibraryManager;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, BOOK_ADDED, BOOK_LOANED, BOOK_REMOVED, BOOK_RETURNED};
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

const EVENT_GROUP: &str = "catalog";

pub struct CatalogServiceImpl {
    branch_id: String,
    manager: Mutex<LibraryManager>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, manager: LibraryManager,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            manager: Mutex::new(manager),
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // The catalog change is already applied; a failed publish is logged and swallowed.
    async fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = match event {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(err.into()),
        };
        if let Err(err) = res {
            warn!(error = %err, "failed to publish catalog event");
        }
    }
}

// Mutations hold the manager lock until their event is published; events keep mutation order.
#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, title: &str, author: &str, isbn: &str, publication_year: i32) -> LibraryResult<Book> {
        let mut manager = self.manager.lock().await;
        let book = manager.add_book(title, author, isbn, publication_year)?;
        info!(isbn = book.isbn(), title = book.title(), "book added");
        self.publish(DomainEvent::added(
            BOOK_ADDED, EVENT_GROUP, book.isbn(), &self.metadata(), &book)).await;
        Ok(book)
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<bool> {
        let mut manager = self.manager.lock().await;
        match manager.take_book_by_isbn(isbn) {
            Some(book) => {
                info!(isbn = book.isbn(), "book removed");
                self.publish(DomainEvent::deleted(
                    BOOK_REMOVED, EVENT_GROUP, book.isbn(), &self.metadata(), &book)).await;
                Ok(true)
            }
            None => {
                debug!(isbn, "nothing to remove");
                Ok(false)
            }
        }
    }

    async fn search_books_by_title(&self, partial: &str) -> LibraryResult<Vec<Book>> {
        let res = self.manager.lock().await.search_books_by_title(partial);
        debug!(query = partial, matches = res.len(), "searched catalog");
        Ok(res)
    }

    async fn list_books(&self) -> LibraryResult<Vec<Book>> {
        Ok(self.manager.lock().await.list_all_books())
    }

    async fn is_book_available(&self, isbn: &str) -> LibraryResult<bool> {
        Ok(self.manager.lock().await.is_book_available(isbn))
    }

    async fn loan_book(&self, isbn: &str) -> LibraryResult<Book> {
        let mut manager = self.manager.lock().await;
        let book = manager.loan_book(isbn)?;
        info!(isbn = book.isbn(), "book loaned");
        self.publish(DomainEvent::updated(
            BOOK_LOANED, EVENT_GROUP, book.isbn(), &self.metadata(), &book)).await;
        Ok(book)
    }

    async fn return_book(&self, isbn: &str) -> LibraryResult<Book> {
        let mut manager = self.manager.lock().await;
        let book = manager.return_book(isbn)?;
        info!(isbn = book.isbn(), "book returned");
        self.publish(DomainEvent::updated(
            BOOK_RETURNED, EVENT_GROUP, book.isbn(), &self.metadata(), &book)).await;
        Ok(book)
    }
}
