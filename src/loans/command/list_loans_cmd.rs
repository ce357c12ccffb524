use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::loans::dto::LoanDto;

pub struct ListLoansCommand {
    library_service: Arc<dyn LibraryService>,
}

impl ListLoansCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListLoansCommandRequest {
    pub borrower: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListLoansCommandResponse {
    pub loans: Vec<LoanDto>,
}

#[async_trait]
impl Command<ListLoansCommandRequest, ListLoansCommandResponse> for ListLoansCommand {
    async fn execute(&self, req: ListLoansCommandRequest) -> Result<ListLoansCommandResponse, CommandError> {
        let loans = self.library_service.active_loans().iter()
            .filter(|l| req.borrower.as_ref().map_or(true, |b| &l.borrower == b))
            .map(LoanDto::from)
            .collect();
        Ok(ListLoansCommandResponse { loans })
    }
}
