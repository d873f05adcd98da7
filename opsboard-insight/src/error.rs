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

//! Error types for summary generation

use crate::llm_client::LLMError;
use std::time::Duration;
use thiserror::Error;

/// Result alias for summary operations
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Why a summary could not be produced.
///
/// These never reach callers of [`crate::SummaryService::summarize`]; they are
/// logged and replaced by the fixed error fallback there.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("LLM error: {0}")]
    Llm(#[from] LLMError),

    #[error("Failed to parse summary: {0}")]
    Parse(String),

    #[error("Summary request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Configuration error: {0}")]
    Config(String),
}
