use std::net::SocketAddr;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;
use library_manager::catalog::controller::{add_book, find_book_by_id, remove_book, search_books};
use library_manager::catalog::factory::create_library_service;
use library_manager::core::controller::AppState;
use library_manager::core::domain::Configuration;
use library_manager::loans::controller::{list_loans, loan_book, return_book};
use library_manager::utils::logging::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env()?;
    let addr: SocketAddr = config.listen_addr.parse()?;
    let state = AppState::new(create_library_service(&config));

    let app = Router::new()
        .route("/catalog", post(add_book).get(search_books))
        .route("/catalog/:id",
               get(find_book_by_id).delete(remove_book))
        .route("/loans", post(loan_book).get(list_loans))
        .route("/loans/return", post(return_book))
        .with_state(state);

    info!(%addr, branch = config.branch_id.as_str(), "catalog listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
