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

//! One dashboard session's view of the AI summary.

use crate::service::SummaryService;
use opsboard_core::{ActivityLog, Summary};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Holds the latest summary and allows one pending request at a time
pub struct InsightSession {
    service: Arc<SummaryService>,
    in_flight: AtomicBool,
    current: RwLock<Option<Summary>>,
}

/// Clears the in-flight flag on completion or cancellation
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl InsightSession {
    pub fn new(service: Arc<SummaryService>) -> Self {
        Self {
            service,
            in_flight: AtomicBool::new(false),
            current: RwLock::new(None),
        }
    }

    /// Generate a summary and make it current.
    ///
    /// Returns `None` without contacting the service when a request is
    /// already pending. Dropping the returned future abandons the request and
    /// keeps the previous summary.
    pub async fn generate(&self, logs: &[ActivityLog]) -> Option<Summary> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Summary request already pending");
            return None;
        }
        let _guard = InFlightGuard(&self.in_flight);

        let summary = self.service.summarize(logs).await;
        *self.current.write() = Some(summary.clone());
        Some(summary)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Latest summary, if one was generated
    pub fn current(&self) -> Option<Summary> {
        self.current.read().clone()
    }
}
