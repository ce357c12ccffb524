use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::loans::dto::LoanDto;

pub struct LoanBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl LoanBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoanBookCommandRequest {
    identifier: String,
    borrower: String,
}

impl LoanBookCommandRequest {
    pub fn new(identifier: String, borrower: String) -> Self {
        Self {
            identifier,
            borrower,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoanBookCommandResponse {
    pub loan: LoanDto,
}

impl LoanBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<LoanBookCommandRequest, LoanBookCommandResponse> for LoanBookCommand {
    async fn execute(&self, req: LoanBookCommandRequest) -> Result<LoanBookCommandResponse, CommandError> {
        self.library_service.loan_book(req.identifier.as_str(), req.borrower.as_str())
            .map_err(CommandError::from).map(|loan| LoanBookCommandResponse::new(LoanDto::from(&loan)))
    }
}
