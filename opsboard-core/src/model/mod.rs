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

//! Domain model: activity logs, users, summaries and their enumerations.

pub mod activity;
pub mod enums;
pub mod summary;
pub mod user;

pub use activity::{ActivityLog, ActivityLogInput, LogId, Metrics};
pub use enums::{ActivityType, Platform, PlatformStyle, Status};
pub use summary::Summary;
pub use user::{Role, User};
