use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl RemoveBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub identifier: String,
}

impl RemoveBookCommandRequest {
    pub fn new(identifier: String) -> Self {
        Self {
            identifier,
        }
    }
}

// Removing an unknown identifier is not an error, `removed` is then empty.
#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub removed: Option<BookDto>,
}

impl RemoveBookCommandResponse {
    pub fn new(removed: Option<BookDto>) -> Self {
        Self {
            removed,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let removed = self.library_service.remove_book(req.identifier.as_str());
        Ok(RemoveBookCommandResponse::new(removed.as_ref().map(BookDto::from)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::domain::LibraryService;
    use crate::catalog::domain::service::LibraryManager;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::memory::notifier::MemoryNotifier;

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let svc: Arc<dyn LibraryService> = Arc::new(LibraryManager::new(&Configuration::new("test"), Arc::new(MemoryNotifier::new())));
        let add_cmd = AddBookCommand::new(svc.clone());
        let remove_cmd = RemoveBookCommand::new(svc.clone());

        let _ = add_cmd.execute(AddBookCommandRequest::new("test book", "author", "isbn")).await.expect("should add book");
        let res = remove_cmd.execute(RemoveBookCommandRequest::new("isbn".to_string())).await.expect("should remove book");
        assert_eq!(Some("isbn".to_string()), res.removed.map(|b| b.identifier));
        assert!(svc.search_by_identifier("isbn").is_none());

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("isbn".to_string())).await.expect("should ignore missing book");
        assert!(res.removed.is_none());
    }
}
