use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    library_service: Arc<dyn LibraryService>,
}

impl SearchBooksCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

// Without filters the whole catalog is listed; with both, a book must match both.
#[derive(Debug, Default, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl SearchBooksCommandRequest {
    pub fn new(title: Option<&str>, author: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            author: author.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = match (req.title.as_deref(), req.author.as_deref()) {
            (Some(title), Some(author)) => self.library_service.search_by_title(title)
                .into_iter().filter(|b| b.author().contains(author)).collect(),
            (Some(title), None) => self.library_service.search_by_title(title),
            (None, Some(author)) => self.library_service.search_by_author(author),
            (None, None) => self.library_service.list_books(),
        };
        Ok(SearchBooksCommandResponse::new(books.iter().map(BookDto::from).collect()))
    }
}
