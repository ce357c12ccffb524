use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl GetBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub identifier: String,
}

impl GetBookCommandRequest {
    pub fn new(identifier: String) -> Self {
        Self {
            identifier,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        match self.library_service.search_by_identifier(req.identifier.as_str()) {
            Some(book) => Ok(GetBookCommandResponse::new(BookDto::from(&book))),
            None => Err(CommandError::NotFound {
                message: format!("book {} not found", req.identifier),
            }),
        }
    }
}
