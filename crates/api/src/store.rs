//! Shared in-memory record store.

use tokio::sync::RwLock;

use cadastros_core::error::CoreError;
use cadastros_core::record::Entity;
use cadastros_core::store::RecordTable;
use cadastros_core::types::DbId;

use crate::query::ListParams;

/// Records of one kind behind an async read/write lock.
#[derive(Debug)]
pub struct Store<E: Entity> {
    table: RwLock<RecordTable<E>>,
}

impl<E: Entity> Default for Store<E> {
    fn default() -> Self {
        Self {
            table: RwLock::new(RecordTable::new()),
        }
    }
}

impl<E: Entity> Store<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matching records for one page, plus the total number of matches.
    pub async fn list(&self, params: &ListParams) -> (Vec<E>, u64) {
        self.table
            .read()
            .await
            .page(params.page, params.limit, &params.filter)
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<E, CoreError> {
        self.table.read().await.get(id).cloned()
    }

    pub async fn create(&self, draft: E::Draft) -> E {
        self.table.write().await.insert(draft)
    }

    pub async fn update(&self, id: DbId, draft: E::Draft) -> Result<E, CoreError> {
        self.table.write().await.replace(id, draft)
    }

    pub async fn delete(&self, id: DbId) -> Result<E, CoreError> {
        self.table.write().await.remove(id)
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.is_empty()
    }
}
