use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::loans::dto::LoanDto;

pub struct ReturnBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl ReturnBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    identifier: String,
    borrower: String,
}

impl ReturnBookCommandRequest {
    pub fn new(identifier: String, borrower: String) -> Self {
        Self {
            identifier,
            borrower,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub loan: LoanDto,
}

impl ReturnBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.library_service.return_book(req.identifier.as_str(), req.borrower.as_str())
            .map_err(CommandError::from).map(|loan| ReturnBookCommandResponse::new(LoanDto::from(&loan)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::LibraryService;
    use crate::catalog::domain::service::LibraryManager;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::memory::notifier::MemoryNotifier;
    use crate::loans::command::loan_book_cmd::{LoanBookCommand, LoanBookCommandRequest};
    use crate::loans::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};

    #[tokio::test]
    async fn test_should_run_loan_and_return_book() {
        let svc: Arc<dyn LibraryService> = Arc::new(LibraryManager::new(&Configuration::new("test"), Arc::new(MemoryNotifier::new())));
        let book_cmd = AddBookCommand::new(svc.clone());
        let loan_cmd = LoanBookCommand::new(svc.clone());
        let return_cmd = ReturnBookCommand::new(svc.clone());

        let _ = book_cmd.execute(AddBookCommandRequest::new("test book", "author", "isbn"))
            .await.expect("should add book");
        let loan = loan_cmd.execute(LoanBookCommandRequest::new("isbn".to_string(), "patron".to_string()))
            .await.expect("should loan book");

        let res = return_cmd.execute(ReturnBookCommandRequest::new("isbn".to_string(), "other".to_string())).await;
        assert!(matches!(res, Err(CommandError::InvalidOperation { .. })));

        let res = return_cmd.execute(ReturnBookCommandRequest::new("isbn".to_string(), "patron".to_string()))
            .await.expect("should return book");
        assert_eq!(loan.loan.loan_id, res.loan.loan_id);
        assert!(svc.active_loans().is_empty());
    }
}
