use crate::books::domain::model::{validate_year, Book};
use crate::core::library::{LibraryError, LibraryResult};

/// Owns the catalog: an insertion-ordered list of books with unique (case-insensitive) isbns.
///
/// Every query hands back a freshly allocated `Vec<Book>`, so callers can never reach the
/// books held here.
#[derive(Debug, Default)]
pub struct LibraryManager {
    books: Vec<Book>,
}

impl LibraryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn add_book(&mut self, title: &str, author: &str, isbn: &str, publication_year: i32) -> LibraryResult<Book> {
        validate_year(publication_year)?;
        if is_blank(isbn) {
            return Err(LibraryError::required("isbn"));
        }
        let normalized = isbn.trim();
        if self.position(normalized).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("a book with isbn {} already exists", normalized).as_str()));
        }
        let book = Book::new(title, author, normalized, publication_year)?;
        self.books.push(book.clone());
        Ok(book)
    }

    pub fn remove_book_by_isbn(&mut self, isbn: &str) -> bool {
        self.take_book_by_isbn(isbn).is_some()
    }

    /// Removes the matching book and hands it back, so callers see the stored isbn.
    pub fn take_book_by_isbn(&mut self, isbn: &str) -> Option<Book> {
        self.position(isbn).map(|ndx| self.books.remove(ndx))
    }

    pub fn search_books_by_title(&self, partial: &str) -> Vec<Book> {
        if is_blank(partial) {
            return vec![];
        }
        let query = partial.trim();
        self.books.iter().filter(|b| b.title_contains(query)).cloned().collect()
    }

    pub fn list_all_books(&self) -> Vec<Book> {
        self.books.clone()
    }

    pub fn is_book_available(&self, isbn: &str) -> bool {
        self.position(isbn)
            .and_then(|ndx| self.books.get(ndx))
            .map_or(false, |b| !b.is_loaned())
    }

    pub fn find_book_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.position(isbn).and_then(|ndx| self.books.get(ndx)).cloned()
    }

    pub fn loan_book(&mut self, isbn: &str) -> LibraryResult<Book> {
        let book = self.get_mut_or_not_found(isbn)?;
        book.loan()?;
        Ok(book.clone())
    }

    pub fn return_book(&mut self, isbn: &str) -> LibraryResult<Book> {
        let book = self.get_mut_or_not_found(isbn)?;
        book.return_loan()?;
        Ok(book.clone())
    }

    fn position(&self, isbn: &str) -> Option<usize> {
        if is_blank(isbn) {
            return None;
        }
        self.books.iter().position(|b| b.matches_isbn(isbn))
    }

    fn get_mut_or_not_found(&mut self, isbn: &str) -> LibraryResult<&mut Book> {
        let not_found = || LibraryError::not_found(
            format!("no book found with isbn {}", isbn.trim()).as_str());
        match self.position(isbn) {
            Some(ndx) => self.books.get_mut(ndx).ok_or_else(not_found),
            None => Err(not_found()),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::manager::LibraryManager;
    use crate::core::library::{LibraryError, REASON_REQUIRED};
    use crate::utils::date::current_year;

    fn seeded() -> LibraryManager {
        let mut manager = LibraryManager::new();
        manager.add_book("Clean Code", "Robert C. Martin", "ISBN-001", 2008).expect("should add book");
        manager.add_book("The Clean Coder", "Robert C. Martin", "ISBN-002", 2011).expect("should add book");
        manager.add_book("Refactoring", "Martin Fowler", "ISBN-003", 1999).expect("should add book");
        manager
    }

    #[tokio::test]
    async fn test_should_add_book_with_trimmed_isbn() {
        let mut manager = LibraryManager::new();
        let added = manager.add_book("Clean Code", "Robert C. Martin", "  ISBN-001  ", 2008).expect("should add book");
        assert_eq!("ISBN-001", added.isbn());

        let all = manager.list_all_books();
        assert_eq!(1, all.len());
        assert_eq!("ISBN-001", all[0].isbn());
        assert!(!all[0].is_loaned());
    }

    #[tokio::test]
    async fn test_should_keep_insertion_order() {
        let titles: Vec<String> = seeded().list_all_books().iter().map(|b| b.title().to_string()).collect();
        assert_eq!(vec!["Clean Code", "The Clean Coder", "Refactoring"], titles);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_isbn_ignoring_case_and_whitespace() {
        let mut manager = seeded();
        let err = manager.add_book("Other", "Someone", "  isbn-001 ", 2015).expect_err("should reject duplicate");
        assert!(matches!(err, LibraryError::DuplicateKey { .. }));
        assert_eq!(3, manager.len());
    }

    #[tokio::test]
    async fn test_should_reject_blank_isbn() {
        let mut manager = LibraryManager::new();
        for isbn in ["", "   "] {
            let err = manager.add_book("Clean Code", "Robert C. Martin", isbn, 2008).expect_err("should reject isbn");
            assert_eq!(Some(REASON_REQUIRED), err.reason_code());
        }
        assert!(manager.is_empty());
    }

    #[tokio::test]
    async fn test_should_propagate_book_validation() {
        let mut manager = LibraryManager::new();
        assert!(matches!(manager.add_book(" ", "a", "ISBN-1", 2000), Err(LibraryError::Validation { .. })));
        assert!(matches!(manager.add_book("t", "", "ISBN-1", 2000), Err(LibraryError::Validation { .. })));
        assert!(manager.is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_future_year_regardless_of_other_fields() {
        let mut manager = seeded();
        let future = current_year() + 1;
        assert!(manager.add_book("Clean Code", "Robert C. Martin", "ISBN-100", future).expect_err("future").is_out_of_range());
        assert!(manager.add_book("", "", "", future).expect_err("future").is_out_of_range());
        assert!(manager.add_book("Clean Code", "Robert C. Martin", "ISBN-001", future).expect_err("future").is_out_of_range());
        assert_eq!(3, manager.len());
    }

    #[tokio::test]
    async fn test_should_remove_book_by_isbn() {
        let mut manager = seeded();
        assert!(manager.remove_book_by_isbn(" isbn-002"));
        assert_eq!(2, manager.len());
        assert!(!manager.remove_book_by_isbn("ISBN-002"));
        assert!(!manager.remove_book_by_isbn("  "));
        assert!(!manager.remove_book_by_isbn("missing"));
        assert_eq!(2, manager.len());
    }

    #[tokio::test]
    async fn test_should_take_book_with_stored_isbn() {
        let mut manager = seeded();
        let taken = manager.take_book_by_isbn("  isbn-003 ").expect("should take book");
        assert_eq!("ISBN-003", taken.isbn());
        assert_eq!("Refactoring", taken.title());
        assert_eq!(2, manager.len());
        assert!(manager.take_book_by_isbn("ISBN-003").is_none());
        assert!(manager.take_book_by_isbn("").is_none());
    }

    #[tokio::test]
    async fn test_should_search_by_title_ignoring_case() {
        let manager = seeded();
        let res = manager.search_books_by_title("CLEAN");
        assert_eq!(2, res.len());
        assert_eq!("Clean Code", res[0].title());
        assert_eq!("The Clean Coder", res[1].title());
        assert_eq!(1, manager.search_books_by_title("  factor ").len());
        assert!(manager.search_books_by_title("haskell").is_empty());
    }

    #[tokio::test]
    async fn test_should_return_empty_for_blank_query() {
        let manager = seeded();
        assert!(manager.search_books_by_title("").is_empty());
        assert!(manager.search_books_by_title("   ").is_empty());
    }

    #[tokio::test]
    async fn test_should_return_independent_copies() {
        let manager = seeded();
        let mut all = manager.list_all_books();
        all.clear();
        let mut found = manager.search_books_by_title("clean");
        found[0].loan().expect("should loan copy");
        found.pop();

        assert_eq!(3, manager.list_all_books().len());
        assert_eq!(2, manager.search_books_by_title("clean").len());
        assert!(manager.is_book_available("ISBN-001"));
    }

    #[tokio::test]
    async fn test_should_check_availability() {
        let mut manager = seeded();
        assert!(manager.is_book_available("isbn-001"));
        assert!(!manager.is_book_available(""));
        assert!(!manager.is_book_available("   "));
        assert!(!manager.is_book_available("unknown"));
        manager.loan_book("ISBN-001").expect("should loan");
        assert!(!manager.is_book_available("ISBN-001"));
    }

    #[tokio::test]
    async fn test_should_cycle_loan_and_return() {
        let mut manager = LibraryManager::new();
        manager.add_book("Clean Code", "Robert C. Martin", "  ISBN-001  ", 2008).expect("should add book");

        let loaned = manager.loan_book("isbn-001").expect("should loan");
        assert!(loaned.is_loaned());
        assert!(!manager.is_book_available("ISBN-001"));

        assert!(matches!(manager.loan_book("ISBN-001"), Err(LibraryError::StateConflict { .. })));
        assert!(!manager.is_book_available("ISBN-001"));

        let returned = manager.return_book("ISBN-001").expect("should return");
        assert!(!returned.is_loaned());
        assert!(manager.is_book_available("ISBN-001"));

        assert!(matches!(manager.return_book("ISBN-001"), Err(LibraryError::StateConflict { .. })));
        assert!(manager.is_book_available("ISBN-001"));
    }

    #[tokio::test]
    async fn test_should_fail_loan_and_return_for_unknown_isbn() {
        let mut manager = seeded();
        assert!(matches!(manager.loan_book("missing"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(manager.return_book("missing"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(manager.loan_book(" "), Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_find_book_by_isbn() {
        let manager = seeded();
        let book = manager.find_book_by_isbn("isbn-003").expect("should find book");
        assert_eq!("Refactoring", book.title());
        assert!(manager.find_book_by_isbn("isbn-999").is_none());
    }
}
