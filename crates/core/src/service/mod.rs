//! The record service seam.
//!
//! Screens persist through [`RecordService`]. Every call makes exactly one
//! round trip and resolves with either the payload or a [`RequestError`];
//! callers branch on the result, nothing is retried.

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::environment::LIMITE_DE_LINHAS;
use crate::error::CoreError;
use crate::record::Entity;
use crate::types::DbId;

pub use memory::MemoryRecordService;

/// A failed service call.
///
/// Transport failures, error statuses and decoding problems all collapse
/// into one kind carrying a message fit for an alert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<CoreError> for RequestError {
    fn from(err: CoreError) -> Self {
        Self::new(err.to_string())
    }
}

/// Listing parameters. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub filter: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            filter: String::new(),
        }
    }
}

impl ListQuery {
    pub fn new(page: u32, filter: impl Into<String>) -> Self {
        Self {
            page,
            filter: filter.into(),
        }
    }
}

/// One page of records plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<E> {
    pub items: Vec<E>,
    pub total_count: u64,
}

impl<E> Page<E> {
    /// Number of pages needed for `total_count` at `page_size` rows each.
    pub fn page_count(&self, page_size: u32) -> u64 {
        page_count(self.total_count, page_size)
    }
}

pub fn page_count(total: u64, page_size: u32) -> u64 {
    let size = u64::from(page_size.max(1));
    total.div_ceil(size)
}

/// Default rows per page when a service is not configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = LIMITE_DE_LINHAS;

/// Per-entity persistence operations.
#[async_trait]
pub trait RecordService<E: Entity>: Send + Sync {
    async fn get_by_id(&self, id: DbId) -> Result<E, RequestError>;

    async fn list(&self, query: &ListQuery) -> Result<Page<E>, RequestError>;

    /// Create a record and return its assigned id.
    async fn create(&self, draft: &E::Draft) -> Result<DbId, RequestError>;

    /// Replace every field of record `id` with `record`'s.
    async fn update_by_id(&self, id: DbId, record: &E) -> Result<(), RequestError>;

    async fn delete_by_id(&self, id: DbId) -> Result<(), RequestError>;
}

#[async_trait]
impl<E: Entity, S: RecordService<E> + ?Sized> RecordService<E> for Arc<S> {
    async fn get_by_id(&self, id: DbId) -> Result<E, RequestError> {
        (**self).get_by_id(id).await
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<E>, RequestError> {
        (**self).list(query).await
    }

    async fn create(&self, draft: &E::Draft) -> Result<DbId, RequestError> {
        (**self).create(draft).await
    }

    async fn update_by_id(&self, id: DbId, record: &E) -> Result<(), RequestError> {
        (**self).update_by_id(id, record).await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), RequestError> {
        (**self).delete_by_id(id).await
    }
}
