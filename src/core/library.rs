use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

/// Reason code attached to a validation error for an empty or whitespace-only field.
pub const REASON_REQUIRED: &str = "required";
/// Reason code attached to a validation error for a year outside `0..=current_year`.
pub const REASON_OUT_OF_RANGE: &str = "out_of_range";
/// Reason code attached to a validation error for a year that is not an integer.
pub const REASON_NOT_A_NUMBER: &str = "not_a_number";

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The requested loan transition does not apply to the book's current status,
    // e.g. loaning a book that is already out.
    StateConflict {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn required(field: &str) -> LibraryError {
        LibraryError::validation(
            format!("{} is required", field).as_str(), Some(REASON_REQUIRED.to_string()))
    }

    pub fn out_of_range(message: &str) -> LibraryError {
        LibraryError::validation(message, Some(REASON_OUT_OF_RANGE.to_string()))
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn state_conflict(message: &str) -> LibraryError {
        LibraryError::StateConflict { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn reason_code(&self) -> Option<&str> {
        match self {
            LibraryError::Validation { reason_code, .. } => { reason_code.as_deref() }
            LibraryError::Runtime { reason_code, .. } => { reason_code.as_deref() }
            _ => { None }
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        self.reason_code() == Some(REASON_OUT_OF_RANGE)
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::StateConflict { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                match reason_code {
                    Some(code) => write!(f, "{} ({})", message, code),
                    None => write!(f, "{}", message),
                }
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Loan state of a single book. Only `Available -> Loaned` and `Loaned -> Available`
/// are legal transitions.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum LoanStatus {
    #[default]
    Available,
    Loaned,
}

impl LoanStatus {
    pub fn loan(self) -> LibraryResult<LoanStatus> {
        match self {
            LoanStatus::Available => Ok(LoanStatus::Loaned),
            LoanStatus::Loaned => Err(LibraryError::state_conflict("book is already loaned")),
        }
    }

    pub fn give_back(self) -> LibraryResult<LoanStatus> {
        match self {
            LoanStatus::Loaned => Ok(LoanStatus::Available),
            LoanStatus::Available => Err(LibraryError::state_conflict("book is not loaned")),
        }
    }
}

impl From<String> for LoanStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Loaned" => LoanStatus::Loaned,
            _ => LoanStatus::Available,
        }
    }
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanStatus::Available => write!(f, "Available"),
            LoanStatus::Loaned => write!(f, "Loaned"),
        }
    }
}
