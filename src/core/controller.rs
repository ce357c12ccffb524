use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::LibraryService;
use crate::core::command::CommandError;

#[derive(Clone)]
pub struct AppState {
    pub library: Arc<dyn LibraryService>,
}

impl AppState {
    pub fn new(library: Arc<dyn LibraryService>) -> AppState {
        AppState {
            library,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::InvalidOperation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::DuplicateKey { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_command_errors_to_status() {
        let cases = vec![
            (CommandError::NotFound { message: "test".to_string() }, StatusCode::NOT_FOUND),
            (CommandError::InvalidOperation { message: "test".to_string(), reason_code: None }, StatusCode::BAD_REQUEST),
            (CommandError::DuplicateKey { message: "test".to_string() }, StatusCode::CONFLICT),
            (CommandError::Runtime { message: "test".to_string(), reason_code: None }, StatusCode::INTERNAL_SERVER_ERROR),
            (CommandError::Serialization { message: "test".to_string() }, StatusCode::BAD_REQUEST),
            (CommandError::Validation { message: "test".to_string(), reason_code: None }, StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            let (actual, _): ServerError = err.into();
            assert_eq!(status, actual);
        }
    }
}
