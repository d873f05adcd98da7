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

//! Core error types

use thiserror::Error;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the domain model and the log store
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed activity input, rejected before it reaches the store
    #[error("Validation error: {0}")]
    Validation(String),

    /// A seeded record reuses an id already present in the store
    #[error("Duplicate activity id: {0}")]
    DuplicateId(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    /// Whether the error was caused by caller input
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}
