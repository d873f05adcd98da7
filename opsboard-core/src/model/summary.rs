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

use serde::{Deserialize, Serialize};

/// Natural-language digest of a day's activity.
///
/// Regenerated on every request and never persisted. All three keys are
/// required when parsing a generated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// At most a few sentences
    pub summary: String,
    pub key_achievements: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Summary {
    pub fn new(
        summary: impl Into<String>,
        key_achievements: Vec<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            key_achievements,
            suggestions,
        }
    }
}
