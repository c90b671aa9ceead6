use std::sync::Arc;

use cadastros_core::record::{City, Entity, Person};

use crate::config::ServerConfig;
use crate::store::Store;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub cities: Arc<Store<City>>,
    pub people: Arc<Store<Person>>,
}

impl AppState {
    /// Empty stores.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            cities: Arc::new(Store::new()),
            people: Arc::new(Store::new()),
        }
    }
}

/// Access to the store holding records of kind `E`, so record handlers can
/// be written once for every kind.
pub trait StoreFor<E: Entity> {
    fn store(&self) -> &Store<E>;
}

impl StoreFor<City> for AppState {
    fn store(&self) -> &Store<City> {
        &self.cities
    }
}

impl StoreFor<Person> for AppState {
    fn store(&self) -> &Store<Person> {
        &self.people
    }
}
