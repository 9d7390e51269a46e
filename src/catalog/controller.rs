use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};
use crate::books::domain::model::Book;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::book_availability_cmd::{BookAvailabilityCommand, BookAvailabilityCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::loan_book_cmd::{LoanBookCommand, LoanBookCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

const MENU: &str = "=== Library Catalog ===
1) Add book
2) Remove book by ISBN
3) Search books by title
4) List all books
5) Check availability by ISBN
6) Loan book
7) Return book
0) Exit
";

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuOption {
    AddBook,
    RemoveBook,
    SearchBooks,
    ListBooks,
    CheckAvailability,
    LoanBook,
    ReturnBook,
    Exit,
    Invalid,
}

impl From<&str> for MenuOption {
    fn from(s: &str) -> Self {
        match s.trim() {
            "1" => MenuOption::AddBook,
            "2" => MenuOption::RemoveBook,
            "3" => MenuOption::SearchBooks,
            "4" => MenuOption::ListBooks,
            "5" => MenuOption::CheckAvailability,
            "6" => MenuOption::LoanBook,
            "7" => MenuOption::ReturnBook,
            "0" => MenuOption::Exit,
            _ => MenuOption::Invalid,
        }
    }
}

/// Text menu over any async line reader and writer. Command failures are printed and the
/// loop continues; only I/O failures on the menu prompt end it with an error.
pub struct ConsoleController<R, W> {
    reader: R,
    writer: W,
    add_cmd: AddBookCommand,
    remove_cmd: RemoveBookCommand,
    search_cmd: SearchBooksCommand,
    list_cmd: ListBooksCommand,
    availability_cmd: BookAvailabilityCommand,
    loan_cmd: LoanBookCommand,
    return_cmd: ReturnBookCommand,
    pause_after_action: bool,
    clear_screen: bool,
}

impl<R, W> ConsoleController<R, W>
    where R: AsyncBufRead + Unpin + Send, W: AsyncWrite + Unpin + Send {
    pub fn new(config: &Configuration, catalog_service: Arc<dyn CatalogService>, reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            add_cmd: AddBookCommand::new(catalog_service.clone()),
            remove_cmd: RemoveBookCommand::new(catalog_service.clone()),
            search_cmd: SearchBooksCommand::new(catalog_service.clone()),
            list_cmd: ListBooksCommand::new(catalog_service.clone()),
            availability_cmd: BookAvailabilityCommand::new(catalog_service.clone()),
            loan_cmd: LoanBookCommand::new(catalog_service.clone()),
            return_cmd: ReturnBookCommand::new(catalog_service),
            pause_after_action: config.pause_after_action,
            clear_screen: config.clear_screen,
        }
    }

    pub async fn run(&mut self) -> LibraryResult<()> {
        loop {
            if self.clear_screen {
                self.write(CLEAR_SCREEN).await?;
            }
            self.write(MENU).await?;
            self.write("\nSelect an option: ").await?;

            // end of input behaves like Exit
            let option = match self.read_line().await? {
                Some(line) => MenuOption::from(line.as_str()),
                None => MenuOption::Exit,
            };
            debug!(?option, "menu option selected");
            if option == MenuOption::Exit {
                break;
            }

            if let Err(err) = self.dispatch(option).await {
                warn!(error = ?err, "catalog operation failed");
                self.write(format!("\nError: {}\n", err).as_str()).await?;
            }
            self.pause().await?;
        }
        info!("catalog console closed");
        Ok(())
    }

    async fn dispatch(&mut self, option: MenuOption) -> Result<(), CommandError> {
        match option {
            MenuOption::AddBook => self.add_book_flow().await,
            MenuOption::RemoveBook => self.remove_book_flow().await,
            MenuOption::SearchBooks => self.search_books_flow().await,
            MenuOption::ListBooks => self.list_books_flow().await,
            MenuOption::CheckAvailability => self.availability_flow().await,
            MenuOption::LoanBook => self.loan_book_flow().await,
            MenuOption::ReturnBook => self.return_book_flow().await,
            MenuOption::Invalid => Ok(self.write("Invalid option.\n").await?),
            MenuOption::Exit => Ok(()),
        }
    }

    async fn add_book_flow(&mut self) -> Result<(), CommandError> {
        let title = self.prompt("Title: ").await?;
        let author = self.prompt("Author: ").await?;
        let isbn = self.prompt("ISBN: ").await?;
        let year = self.prompt("Publication year: ").await?;

        let req = AddBookCommandRequest::parse(title.as_str(), author.as_str(), isbn.as_str(), year.as_str())?;
        let _ = self.add_cmd.execute(req).await?;
        Ok(self.write("\nBook added.\n").await?)
    }

    async fn remove_book_flow(&mut self) -> Result<(), CommandError> {
        let isbn = self.prompt("ISBN to remove: ").await?;
        let res = self.remove_cmd.execute(RemoveBookCommandRequest::new(isbn.as_str())).await?;
        let msg = if res.removed { "\nBook removed.\n" } else { "\nBook not found.\n" };
        Ok(self.write(msg).await?)
    }

    async fn search_books_flow(&mut self) -> Result<(), CommandError> {
        let partial = self.prompt("Title (partial): ").await?;
        let res = self.search_cmd.execute(SearchBooksCommandRequest::new(partial.as_str())).await?;
        self.write(format!("\nResults: {}\n", res.books.len()).as_str()).await?;
        Ok(self.write_books(&res.books).await?)
    }

    async fn list_books_flow(&mut self) -> Result<(), CommandError> {
        let res = self.list_cmd.execute(ListBooksCommandRequest::new()).await?;
        if res.books.is_empty() {
            return Ok(self.write("\n(No books registered)\n").await?);
        }
        self.write("\nAll books:\n").await?;
        Ok(self.write_books(&res.books).await?)
    }

    async fn availability_flow(&mut self) -> Result<(), CommandError> {
        let isbn = self.prompt("ISBN: ").await?;
        let res = self.availability_cmd.execute(BookAvailabilityCommandRequest::new(isbn.as_str())).await?;
        let msg = if res.available { "\nAvailable\n" } else { "\nNot available (missing or loaned)\n" };
        Ok(self.write(msg).await?)
    }

    async fn loan_book_flow(&mut self) -> Result<(), CommandError> {
        let isbn = self.prompt("ISBN to loan: ").await?;
        let _ = self.loan_cmd.execute(LoanBookCommandRequest::new(isbn.as_str())).await?;
        Ok(self.write("\nBook loaned.\n").await?)
    }

    async fn return_book_flow(&mut self) -> Result<(), CommandError> {
        let isbn = self.prompt("ISBN to return: ").await?;
        let _ = self.return_cmd.execute(ReturnBookCommandRequest::new(isbn.as_str())).await?;
        Ok(self.write("\nBook returned.\n").await?)
    }

    async fn write_books(&mut self, books: &[Book]) -> LibraryResult<()> {
        for book in books {
            self.write(format!("- {}\n", book).as_str()).await?;
        }
        Ok(())
    }

    async fn pause(&mut self) -> LibraryResult<()> {
        if self.pause_after_action {
            self.write("\nPress Enter to continue...\n").await?;
            let _ = self.read_line().await?;
        }
        Ok(())
    }

    async fn prompt(&mut self, label: &str) -> LibraryResult<String> {
        self.write(label).await?;
        Ok(self.read_line().await?.unwrap_or_default())
    }

    // None at end of input; bytes that are not UTF-8 decode lossily
    async fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn write(&mut self, text: &str) -> LibraryResult<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}
