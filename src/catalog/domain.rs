pub mod manager;
pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::Book;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, title: &str, author: &str, isbn: &str, publication_year: i32) -> LibraryResult<Book>;
    async fn remove_book(&self, isbn: &str) -> LibraryResult<bool>;
    async fn search_books_by_title(&self, partial: &str) -> LibraryResult<Vec<Book>>;
    async fn list_books(&self) -> LibraryResult<Vec<Book>>;
    async fn is_book_available(&self, isbn: &str) -> LibraryResult<bool>;
    async fn loan_book(&self, isbn: &str) -> LibraryResult<Book>;
    async fn return_book(&self, isbn: &str) -> LibraryResult<Book>;
}
