// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! In-memory log store
//!
//! The store is the sole owner of the activity collection. Records are kept
//! most-recent-first and are never modified once inserted; readers always get
//! an owned snapshot. Appends take the write lock, so concurrent writers are
//! serialized and "insert at head" holds under contention.

use crate::error::{CoreError, CoreResult};
use crate::model::{ActivityLog, ActivityLogInput, LogId};
use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

#[derive(Debug, Default)]
struct Inner {
    /// Most recent first
    logs: VecDeque<ActivityLog>,
    ids: HashSet<LogId>,
}

/// Ordered, append-only collection of activity logs
#[derive(Debug, Default)]
pub struct LogStore {
    inner: RwLock<Inner>,
}

impl LogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with records that already carry ids, given most-recent-first.
    pub fn from_records(records: impl IntoIterator<Item = ActivityLog>) -> CoreResult<Self> {
        let mut inner = Inner::default();
        for record in records {
            if !inner.ids.insert(record.id.clone()) {
                return Err(CoreError::DuplicateId(record.id.to_string()));
            }
            inner.logs.push_back(record);
        }

        tracing::debug!(count = inner.logs.len(), "Seeded log store");
        Ok(Self {
            inner: RwLock::new(inner),
        })
    }

    /// Store a submission at the head of the collection.
    ///
    /// Assigns a fresh id and keeps the submitted timestamp, stamping the
    /// current time when none was given. Input is not validated here; see
    /// [`ActivityLogInput::validate`].
    pub fn append(&self, entry: ActivityLogInput) -> ActivityLog {
        let mut inner = self.inner.write();

        let mut id = LogId::new();
        while inner.ids.contains(&id) {
            id = LogId::new();
        }

        let log = ActivityLog::from_input(id.clone(), entry, Utc::now());
        inner.ids.insert(id);
        inner.logs.push_front(log.clone());

        tracing::info!(
            id = %log.id,
            platform = %log.platform,
            activity_type = %log.activity_type,
            "Appended activity log"
        );
        log
    }

    /// Snapshot of every record, most recent first
    pub fn all(&self) -> Vec<ActivityLog> {
        self.inner.read().logs.iter().cloned().collect()
    }

    /// Look up a record by id
    pub fn get(&self, id: &LogId) -> Option<ActivityLog> {
        self.inner
            .read()
            .logs
            .iter()
            .find(|log| &log.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().logs.is_empty()
    }

    /// Get storage statistics
    pub fn stats(&self) -> StoreStats {
        let inner = self.inner.read();
        StoreStats {
            log_count: inner.logs.len(),
            author_count: inner
                .logs
                .iter()
                .map(|log| log.user_id.as_str())
                .collect::<HashSet<_>>()
                .len(),
        }
    }
}

/// Storage statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub log_count: usize,
    pub author_count: usize,
}
