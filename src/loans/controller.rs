use axum::{
    extract::{Query, State},
    response::Json,
};
use serde_json::{Value};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::loans::command::list_loans_cmd::{ListLoansCommand, ListLoansCommandRequest, ListLoansCommandResponse};
use crate::loans::command::loan_book_cmd::{LoanBookCommand, LoanBookCommandRequest, LoanBookCommandResponse};
use crate::loans::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};

pub async fn loan_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<LoanBookCommandResponse>, ServerError> {
    let req: LoanBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = LoanBookCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub async fn return_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let req: ReturnBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ReturnBookCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

pub async fn list_loans(
    State(state): State<AppState>,
    Query(req): Query<ListLoansCommandRequest>) -> Result<Json<ListLoansCommandResponse>, ServerError> {
    let res = ListLoansCommand::new(state.library).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use axum::extract::{Query, State};
    use axum::http::StatusCode;
    use axum::response::Json;
    use serde_json::json;
    use crate::catalog::controller::add_book;
    use crate::catalog::factory::create_library_service;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::loans::command::list_loans_cmd::ListLoansCommandRequest;
    use crate::loans::controller::{list_loans, loan_book, return_book};

    #[tokio::test]
    async fn test_should_loan_and_return_over_http_handlers() {
        let config = Configuration::new("test");
        let state = AppState::new(create_library_service(&config));
        let _ = add_book(State(state.clone()), Json(json!({"title": "t", "author": "a", "identifier": "isbn"})))
            .await.expect("should add book");

        let (status, _) = loan_book(State(state.clone()), Json(json!({"identifier": "missing", "borrower": "u1"})))
            .await.expect_err("should not loan missing book");
        assert_eq!(StatusCode::NOT_FOUND, status);

        let loaned = loan_book(State(state.clone()), Json(json!({"identifier": "isbn", "borrower": "u1"})))
            .await.expect("should loan book");
        assert_eq!("u1", loaned.0.loan.borrower.as_str());

        let listed = list_loans(State(state.clone()), Query(ListLoansCommandRequest::default())).await.expect("should list");
        assert_eq!(1, listed.0.loans.len());

        let (status, _) = return_book(State(state.clone()), Json(json!({"identifier": "isbn", "borrower": "u2"})))
            .await.expect_err("should not return for other borrower");
        assert_eq!(StatusCode::BAD_REQUEST, status);

        let _ = return_book(State(state.clone()), Json(json!({"identifier": "isbn", "borrower": "u1"})))
            .await.expect("should return book");
        let listed = list_loans(State(state), Query(ListLoansCommandRequest::default())).await.expect("should list");
        assert!(listed.0.loans.is_empty());
    }
}
