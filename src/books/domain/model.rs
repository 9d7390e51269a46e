use std::fmt;
use std::fmt::{Display, Formatter};
use serde::Serialize;
use crate::core::library::{LibraryError, LibraryResult, LoanStatus};
use crate::utils::date::current_year;

// Book abstracts one catalog item. Title, author, isbn and publication year are fixed at
// construction; only the loan status changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    publication_year: i32,
    loan_status: LoanStatus,
}

impl Book {
    pub fn new(title: &str, author: &str, isbn: &str, publication_year: i32) -> LibraryResult<Self> {
        let publication_year = validate_year(publication_year)?;
        Ok(Self {
            title: validate_required(title, "title")?,
            author: validate_required(author, "author")?,
            isbn: validate_required(isbn, "isbn")?,
            publication_year,
            loan_status: LoanStatus::Available,
        })
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    pub fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn loan_status(&self) -> LoanStatus {
        self.loan_status
    }

    pub fn is_loaned(&self) -> bool {
        self.loan_status == LoanStatus::Loaned
    }

    pub fn loan(&mut self) -> LibraryResult<()> {
        self.loan_status = self.loan_status.loan()?;
        Ok(())
    }

    pub fn return_loan(&mut self) -> LibraryResult<()> {
        self.loan_status = self.loan_status.give_back()?;
        Ok(())
    }

    /// Case-insensitive comparison against the trimmed `isbn`.
    pub fn matches_isbn(&self, isbn: &str) -> bool {
        self.isbn.to_lowercase() == isbn.trim().to_lowercase()
    }

    /// Case-insensitive substring test; the caller trims the query.
    pub fn title_contains(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query.to_lowercase().as_str())
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {} | {} | {}",
               self.title, self.author, self.isbn, self.publication_year, self.loan_status)
    }
}

fn validate_required(value: &str, field: &str) -> LibraryResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LibraryError::required(field));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn validate_year(year: i32) -> LibraryResult<i32> {
    let current = current_year();
    if year < 0 || year > current {
        return Err(LibraryError::out_of_range(
            format!("publication year must be between 0 and {}", current).as_str()));
    }
    Ok(year)
}
