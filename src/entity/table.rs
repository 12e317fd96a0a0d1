//! Table implementation
//!
//! BTreeMap-backed keyed table with its own id sequence.

use std::collections::btree_map::Values;
use std::collections::BTreeMap;

/// Keyed records of one kind plus the next id to hand out
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: BTreeMap<u32, T>,
    next_id: u32,
}

impl<T> Table<T> {
    /// Create an empty table whose first id is 1
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Return the current counter value, then advance it
    ///
    /// Ids are never reused, even if the caller never inserts under the id.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Counter value the next call to `next_id` will return
    pub fn peek_next_id(&self) -> u32 {
        self.next_id
    }

    /// Insert a full record under `id`
    pub fn put(&mut self, id: u32, record: T) {
        self.rows.insert(id, record);
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Records in ascending id (insertion) order
    pub fn iter(&self) -> Values<'_, u32, T> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}
