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

//! Activity log records
//!
//! An [`ActivityLog`] is created exactly once, when the store accepts an
//! [`ActivityLogInput`], and is never modified afterwards.

use crate::error::{CoreError, CoreResult};
use crate::model::enums::{ActivityType, Platform, Status};
use crate::model::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an activity log
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogId(pub String);

impl LogId {
    /// Generate a new unique ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LogId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for LogId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for LogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Engagement numbers reported with an activity. Absent fields were not reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(mut self, views: u64) -> Self {
        self.views = Some(views);
        self
    }

    pub fn likes(mut self, likes: u64) -> Self {
        self.likes = Some(likes);
        self
    }

    pub fn shares(mut self, shares: u64) -> Self {
        self.shares = Some(shares);
        self
    }

    pub fn comments(mut self, comments: u64) -> Self {
        self.comments = Some(comments);
        self
    }

    /// True when no field was reported.
    pub fn is_empty(&self) -> bool {
        self.views.is_none()
            && self.likes.is_none()
            && self.shares.is_none()
            && self.comments.is_none()
    }

    /// True when views or likes carry a nonzero value.
    pub fn has_reach(&self) -> bool {
        self.views.unwrap_or(0) > 0 || self.likes.unwrap_or(0) > 0
    }
}

/// A stored activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: LogId,
    pub user_id: String,
    /// Denormalized author name for display
    pub user_name: String,
    pub platform: Platform,
    pub activity_type: ActivityType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub status: Status,
    pub timestamp: DateTime<Utc>,
}

impl ActivityLog {
    /// Build the stored record from a submission. Used by the log store only.
    pub(crate) fn from_input(id: LogId, input: ActivityLogInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: input.user_id,
            user_name: input.user_name,
            platform: input.platform,
            activity_type: input.activity_type,
            description: input.description,
            metrics: input.metrics,
            link: input.link,
            status: input.status,
            timestamp: input.timestamp.unwrap_or(now),
        }
    }
}

/// A submitted activity, not yet stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogInput {
    pub user_id: String,
    pub user_name: String,
    pub platform: Platform,
    pub activity_type: ActivityType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub status: Status,
    /// Stamped by the store when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ActivityLogInput {
    /// Start a submission authored by `user`
    pub fn new(
        user: &User,
        platform: Platform,
        activity_type: ActivityType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            platform,
            activity_type,
            description: description.into(),
            metrics: None,
            link: None,
            status: Status::default(),
            timestamp: None,
        }
    }

    pub fn metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Check the submission and normalize optional fields.
    ///
    /// The description and both author fields must be non-blank. A blank link
    /// becomes `None`, as does a metrics block with no reported field.
    pub fn validate(mut self) -> CoreResult<Self> {
        if self.description.trim().is_empty() {
            return Err(CoreError::validation("description must not be empty"));
        }
        if self.user_id.trim().is_empty() {
            return Err(CoreError::validation("user id must not be empty"));
        }
        if self.user_name.trim().is_empty() {
            return Err(CoreError::validation("user name must not be empty"));
        }

        self.link = self
            .link
            .map(|link| link.trim().to_string())
            .filter(|link| !link.is_empty());
        self.metrics = self.metrics.filter(|metrics| !metrics.is_empty());

        Ok(self)
    }
}
