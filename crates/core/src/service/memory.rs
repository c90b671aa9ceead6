//! In-process record service backed by a [`RecordTable`].
//!
//! Used by tests and demos. Counts calls per operation and can be told to
//! fail the next call, so screens can be driven down their error paths.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{ListQuery, Page, RecordService, RequestError, DEFAULT_PAGE_SIZE};
use crate::record::Entity;
use crate::store::RecordTable;
use crate::types::DbId;

/// Number of calls made per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceCalls {
    pub get_by_id: usize,
    pub list: usize,
    pub create: usize,
    pub update_by_id: usize,
    pub delete_by_id: usize,
}

impl ServiceCalls {
    pub fn total(&self) -> usize {
        self.get_by_id + self.list + self.create + self.update_by_id + self.delete_by_id
    }
}

#[derive(Debug)]
struct MemoryState<E: Entity> {
    table: RecordTable<E>,
    calls: ServiceCalls,
    fail_next: Option<String>,
}

#[derive(Debug)]
pub struct MemoryRecordService<E: Entity> {
    state: Mutex<MemoryState<E>>,
    page_size: u32,
}

impl<E: Entity> Default for MemoryRecordService<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> MemoryRecordService<E> {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                table: RecordTable::new(),
                calls: ServiceCalls::default(),
                fail_next: None,
            }),
            page_size,
        }
    }

    /// Insert records directly, bypassing the call counters.
    pub fn seed(&self, drafts: impl IntoIterator<Item = E::Draft>) -> Vec<E> {
        let mut state = self.lock();
        drafts.into_iter().map(|d| state.table.insert(d)).collect()
    }

    /// Make the next call fail with `message`.
    pub fn fail_next(&self, message: impl Into<String>) {
        self.lock().fail_next = Some(message.into());
    }

    pub fn calls(&self) -> ServiceCalls {
        self.lock().calls
    }

    /// Current stored copy of a record, bypassing the call counters.
    pub fn snapshot(&self, id: DbId) -> Option<E> {
        self.lock().table.get(id).ok().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().table.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState<E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Count the call and consume a pending injected failure.
    fn begin(&self, count: impl FnOnce(&mut ServiceCalls)) -> Result<MutexGuard<'_, MemoryState<E>>, RequestError> {
        let mut state = self.lock();
        count(&mut state.calls);
        match state.fail_next.take() {
            Some(message) => Err(RequestError::new(message)),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl<E: Entity> RecordService<E> for MemoryRecordService<E> {
    async fn get_by_id(&self, id: DbId) -> Result<E, RequestError> {
        let state = self.begin(|c| c.get_by_id += 1)?;
        Ok(state.table.get(id)?.clone())
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<E>, RequestError> {
        let state = self.begin(|c| c.list += 1)?;
        let (items, total_count) = state.table.page(query.page, self.page_size, &query.filter);
        Ok(Page { items, total_count })
    }

    async fn create(&self, draft: &E::Draft) -> Result<DbId, RequestError> {
        let mut state = self.begin(|c| c.create += 1)?;
        let record = state.table.insert(draft.clone());
        tracing::debug!(entity = E::NAME, id = record.id(), "Record created in memory");
        Ok(record.id())
    }

    async fn update_by_id(&self, id: DbId, record: &E) -> Result<(), RequestError> {
        let mut state = self.begin(|c| c.update_by_id += 1)?;
        state.table.replace(id, record.clone().into_draft())?;
        Ok(())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), RequestError> {
        let mut state = self.begin(|c| c.delete_by_id += 1)?;
        state.table.remove(id)?;
        Ok(())
    }
}
