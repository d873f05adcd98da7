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

//! Stub LLM client shared by unit tests

use crate::llm_client::{GenerationRequest, LLMClient, LLMError, LLMResponse, TokenUsage};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use opsboard_core::{demo::demo_logs, ActivityLog};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub enum StubReply {
    Text(String),
    RateLimited,
}

pub struct StubClient {
    reply: StubReply,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerationRequest>>,
}

impl StubClient {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request.lock().clone()
    }
}

#[async_trait]
impl LLMClient for StubClient {
    async fn generate(&self, request: GenerationRequest) -> Result<LLMResponse, LLMError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock() = Some(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.reply {
            StubReply::Text(content) => Ok(LLMResponse {
                content: content.clone(),
                usage: TokenUsage::default(),
                model: request.model,
            }),
            StubReply::RateLimited => Err(LLMError::RateLimitExceeded),
        }
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

pub fn sample_logs() -> Vec<ActivityLog> {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    demo_logs(date, &Utc)
}
