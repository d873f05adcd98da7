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

//! Opsboard Core
//!
//! Activity log records, the in-memory log store and the pure views the
//! dashboard, chart and export are built from.

pub mod demo;
pub mod error;
pub mod model;
pub mod store;
pub mod views;

pub use error::{CoreError, CoreResult};
pub use model::{
    ActivityLog, ActivityLogInput, ActivityType, LogId, Metrics, Platform, PlatformStyle, Role,
    Status, Summary, User,
};
pub use store::{LogStore, StoreStats};
pub use views::{
    count_by_platform, dashboard_stats, filter_today, format_compact, recent, render_export_text,
    DashboardStats, PlatformCount,
};
