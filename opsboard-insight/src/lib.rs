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

//! # Opsboard Insight
//!
//! AI daily summaries for activity logs.
//!
//! ## Features
//!
//! - **Provider-neutral client trait**: Gemini by default, OpenAI as an alternative
//! - **Never-failing summaries**: fixed fallbacks for empty input and errors
//! - **Result caching**: optional, keyed by the projected payload and model
//! - **Session guard**: at most one pending summary per dashboard session
//!
//! ## Example
//!
//! ```rust,ignore
//! use opsboard_insight::{InsightConfig, SummaryService};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = InsightConfig {
//!         api_key: std::env::var("GEMINI_API_KEY").ok(),
//!         ..Default::default()
//!     };
//!     let service = SummaryService::from_config(&config).unwrap();
//!
//!     let summary = service.summarize(&logs).await;
//!     println!("{}", opsboard_insight::render_brief_text(&summary));
//! }
//! ```

pub mod brief;
pub mod cache;
pub mod config;
pub mod error;
pub mod llm_client;
pub mod service;
pub mod session;

#[cfg(test)]
mod testing;

pub use brief::render_brief_text;
pub use cache::{CacheKey, CacheStats, SummaryCache};
pub use config::{InsightConfig, Provider};
pub use error::{SummaryError, SummaryResult};
pub use llm_client::{
    build_client, GeminiClient, GenerationRequest, LLMClient, LLMError, LLMResponse,
    OpenAIClient, TokenUsage,
};
pub use service::{error_summary, no_activity_summary, SummaryOutcome, SummaryService};
pub use session::InsightSession;
