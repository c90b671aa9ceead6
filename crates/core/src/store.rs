//! In-memory record table.
//!
//! Plain data structure behind both the in-process record service and the
//! API server's store. Callers provide the locking.

use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::record::Entity;
use crate::types::DbId;

/// Records of one kind keyed by id, with sequential id assignment.
#[derive(Debug, Clone)]
pub struct RecordTable<E: Entity> {
    records: BTreeMap<DbId, E>,
    next_id: DbId,
}

impl<E: Entity> Default for RecordTable<E> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<E: Entity> RecordTable<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Store a new record and return it with its assigned id.
    pub fn insert(&mut self, draft: E::Draft) -> E {
        let id = self.next_id;
        self.next_id += 1;
        let record = E::from_draft(id, draft);
        self.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: DbId) -> Result<&E, CoreError> {
        self.records.get(&id).ok_or(CoreError::NotFound {
            entity: E::NAME,
            id,
        })
    }

    /// Replace every field of an existing record. The stored id is always
    /// `id`, whatever the payload carries.
    pub fn replace(&mut self, id: DbId, draft: E::Draft) -> Result<E, CoreError> {
        let slot = self.records.get_mut(&id).ok_or(CoreError::NotFound {
            entity: E::NAME,
            id,
        })?;
        *slot = E::from_draft(id, draft);
        Ok(slot.clone())
    }

    pub fn remove(&mut self, id: DbId) -> Result<E, CoreError> {
        self.records.remove(&id).ok_or(CoreError::NotFound {
            entity: E::NAME,
            id,
        })
    }

    /// One page of records matching `filter`, plus the total match count.
    ///
    /// `page` is 1-based; page 0 is treated as page 1. A `limit` of 0
    /// returns every match.
    pub fn page(&self, page: u32, limit: u32, filter: &str) -> (Vec<E>, u64) {
        let matching: Vec<&E> = self
            .records
            .values()
            .filter(|r| r.matches_filter(filter))
            .collect();
        let total = matching.len() as u64;

        if limit == 0 {
            return (matching.into_iter().cloned().collect(), total);
        }

        let skip = (page.max(1) as usize - 1) * limit as usize;
        let items = matching
            .into_iter()
            .skip(skip)
            .take(limit as usize)
            .cloned()
            .collect();
        (items, total)
    }
}
