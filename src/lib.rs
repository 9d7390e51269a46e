//! In-memory library catalog: books, loans, and the console menu that drives them.

pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod utils;
