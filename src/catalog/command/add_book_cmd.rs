use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::gateway::observer::ObserverFailure;

pub struct AddBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl AddBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    #[serde(flatten)]
    pub book: BookDto,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, identifier: &str) -> Self {
        Self {
            book: BookDto::new(title, author, identifier),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
    pub observers_notified: usize,
    pub observer_failures: Vec<String>,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto, observers_notified: usize, failures: &[ObserverFailure]) -> Self {
        Self {
            book,
            observers_notified,
            observer_failures: failures.iter().map(|f| format!("{}: {}", f.observer, f.message)).collect(),
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.book.builder().build();
        let report = self.library_service.add_book(book.clone()).map_err(CommandError::from)?;
        Ok(AddBookCommandResponse::new(BookDto::from(&book), report.notified, &report.failures))
    }
}
