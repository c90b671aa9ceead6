pub mod health;
pub mod records;

use axum::Router;

use cadastros_core::record::{City, Person};

use crate::state::AppState;

/// Build the record route tree, mounted at the server root.
///
/// ```text
/// /cidades                 list, create
/// /cidades/{id}            get, update, delete
///
/// /pessoas                 list, create
/// /pessoas/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(records::router::<City>())
        .merge(records::router::<Person>())
}
