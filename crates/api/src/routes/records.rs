use axum::routing::get;
use axum::Router;

use cadastros_core::record::Entity;

use crate::handlers::records;
use crate::state::{AppState, StoreFor};

/// Routes for one record kind, mounted under its resource segment.
///
/// ```text
/// GET    /<resource>          -> list
/// POST   /<resource>          -> create
/// GET    /<resource>/{id}     -> get
/// PUT    /<resource>/{id}     -> update
/// DELETE /<resource>/{id}     -> delete
/// ```
pub fn router<E: Entity>() -> Router<AppState>
where
    AppState: StoreFor<E>,
{
    let collection = format!("/{}", E::RESOURCE);
    let member = format!("/{}/{{id}}", E::RESOURCE);

    Router::new()
        .route(&collection, get(records::list::<E>).post(records::create::<E>))
        .route(
            &member,
            get(records::get::<E>)
                .put(records::update::<E>)
                .delete(records::delete::<E>),
        )
}
