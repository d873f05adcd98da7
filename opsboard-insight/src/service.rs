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

//! Daily summary requests
//!
//! [`SummaryService`] turns a slice of activity logs into a [`Summary`]. It
//! never fails from the caller's point of view: empty input short-circuits to
//! a fixed "no activity" summary without contacting the model, and any
//! failure along the way is logged and replaced by a fixed error summary.
//! Each call makes at most one request and never retries.

use crate::cache::SummaryCache;
use crate::config::InsightConfig;
use crate::error::{SummaryError, SummaryResult};
use crate::llm_client::{build_client, GenerationRequest, LLMClient};
use opsboard_core::{ActivityLog, ActivityType, Metrics, Platform, Status, Summary};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

const NO_ACTIVITY_SUMMARY: &str = "未找到所选期间的活动日志。";
const NO_ACTIVITY_SUGGESTION: &str = "鼓励团队记录他们的日常工作。";
const ERROR_SUMMARY: &str = "由于错误，无法生成AI摘要。";
const ERROR_SUGGESTION: &str = "请检查API配置。";

/// Summary returned when there is nothing to summarize
pub fn no_activity_summary() -> Summary {
    Summary::new(
        NO_ACTIVITY_SUMMARY,
        Vec::new(),
        vec![NO_ACTIVITY_SUGGESTION.to_string()],
    )
}

/// Summary returned when generation failed
pub fn error_summary() -> Summary {
    Summary::new(ERROR_SUMMARY, Vec::new(), vec![ERROR_SUGGESTION.to_string()])
}

/// Terminal state of one summarize call
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    /// Empty input; the model was not contacted
    Skipped,
    Succeeded(Summary),
    /// Generation failed and the error summary stands in
    RecoveredFallback { reason: String },
}

impl SummaryOutcome {
    pub fn into_summary(self) -> Summary {
        match self {
            SummaryOutcome::Skipped => no_activity_summary(),
            SummaryOutcome::Succeeded(summary) => summary,
            SummaryOutcome::RecoveredFallback { .. } => error_summary(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        !matches!(self, SummaryOutcome::Succeeded(_))
    }
}

/// The fields of a log the model gets to see.
#[derive(Serialize)]
struct LogDigest<'a> {
    platform: Platform,
    #[serde(rename = "type")]
    activity_type: ActivityType,
    description: &'a str,
    metrics: Option<&'a Metrics>,
    user: &'a str,
    status: Status,
}

impl<'a> From<&'a ActivityLog> for LogDigest<'a> {
    fn from(log: &'a ActivityLog) -> Self {
        Self {
            platform: log.platform,
            activity_type: log.activity_type,
            description: &log.description,
            metrics: log.metrics.as_ref(),
            user: &log.user_name,
            status: log.status,
        }
    }
}

/// JSON array of log digests, in input order
pub fn project_logs(logs: &[ActivityLog]) -> SummaryResult<String> {
    let digests: Vec<LogDigest<'_>> = logs.iter().map(LogDigest::from).collect();
    serde_json::to_string(&digests).map_err(|e| SummaryError::Parse(e.to_string()))
}

/// Instruction sent with the projected logs
pub fn build_prompt(payload: &str) -> String {
    format!(
        "你是一位资深的海外社交媒体运营经理，正在分析团队的每日日报。\n\
         以下是今天的原始活动数据：\n\
         {payload}\n\
         \n\
         请提供一个JSON格式的结构化摘要（请使用中文回答），包含以下字段：\n\
         - summary: 一个简洁的段落（最多3句话），总结团队今天的整体重心和产出。\n\
         - keyAchievements: 一个字符串数组，列出具体的胜利、高表现的内容或高互动量。\n\
         - suggestions: 一个字符串数组，基于数据提出的可操作建议或错失的机会。\n"
    )
}

/// Schema the model's JSON answer must satisfy
pub fn summary_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "summary": { "type": "string" },
            "keyAchievements": { "type": "array", "items": { "type": "string" } },
            "suggestions": { "type": "array", "items": { "type": "string" } }
        },
        "required": ["summary", "keyAchievements", "suggestions"],
        "additionalProperties": false
    })
}

fn parse_summary(content: &str) -> SummaryResult<Summary> {
    if content.trim().is_empty() {
        return Err(SummaryError::Parse("No response from AI".to_string()));
    }
    serde_json::from_str(content).map_err(|e| SummaryError::Parse(e.to_string()))
}

/// Produces daily summaries through an [`LLMClient`]
pub struct SummaryService {
    client: Arc<dyn LLMClient>,
    timeout: Duration,
    cache: Option<SummaryCache>,
}

impl SummaryService {
    pub fn new(client: Arc<dyn LLMClient>) -> Self {
        Self {
            client,
            timeout: Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECS),
            cache: None,
        }
    }

    /// Build the configured client, timeout and cache
    pub fn from_config(config: &InsightConfig) -> SummaryResult<Self> {
        let mut service = Self::new(build_client(config)?).with_timeout(config.timeout());
        if let Some(ttl) = config.cache_ttl() {
            service = service.with_cache(SummaryCache::new(ttl));
        }
        Ok(service)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache(mut self, cache: SummaryCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn cache(&self) -> Option<&SummaryCache> {
        self.cache.as_ref()
    }

    /// Summarize `logs`. Always yields a summary.
    pub async fn summarize(&self, logs: &[ActivityLog]) -> Summary {
        self.summarize_with_outcome(logs).await.into_summary()
    }

    pub async fn summarize_with_outcome(&self, logs: &[ActivityLog]) -> SummaryOutcome {
        if logs.is_empty() {
            tracing::debug!("No logs to summarize, skipping model call");
            return SummaryOutcome::Skipped;
        }

        match self.try_summarize(logs).await {
            Ok(summary) => SummaryOutcome::Succeeded(summary),
            Err(e) => {
                tracing::error!(error = %e, "Error generating summary");
                SummaryOutcome::RecoveredFallback {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Summarize `logs`, surfacing the failure instead of falling back.
    ///
    /// Empty input still short-circuits to the "no activity" summary.
    pub async fn try_summarize(&self, logs: &[ActivityLog]) -> SummaryResult<Summary> {
        if logs.is_empty() {
            return Ok(no_activity_summary());
        }

        let payload = project_logs(logs)?;
        let model = self.client.model_name().to_string();
        tracing::info!(logs = logs.len(), model = %model, "Requesting daily summary");
        tracing::debug!(payload_bytes = payload.len(), "Projected activity payload");

        let cache_key = self
            .cache
            .as_ref()
            .map(|cache| cache.compute_key(&payload, &model));
        if let (Some(cache), Some(key)) = (&self.cache, &cache_key) {
            if let Some(summary) = cache.get(key).await {
                tracing::debug!("Summary served from cache");
                return Ok(summary);
            }
        }

        let request = GenerationRequest {
            model,
            prompt: build_prompt(&payload),
            response_schema: summary_schema(),
        };

        let response = tokio::time::timeout(self.timeout, self.client.generate(request))
            .await
            .map_err(|_| SummaryError::Timeout(self.timeout))??;
        tracing::debug!(
            total_tokens = response.usage.total_tokens,
            "Summary response received"
        );

        let summary = parse_summary(&response.content)?;

        if let (Some(cache), Some(key)) = (&self.cache, cache_key) {
            cache.set(key, summary.clone()).await;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SummaryCache;
    use crate::testing::{sample_logs, StubClient, StubReply};

    const VALID: &str = r#"{"summary":"S","keyAchievements":["A"],"suggestions":["B"]}"#;

    #[tokio::test]
    async fn test_empty_input_skips_model() {
        let client = Arc::new(StubClient::new(StubReply::Text(VALID.to_string())));
        let service = SummaryService::new(client.clone());

        let outcome = service.summarize_with_outcome(&[]).await;
        assert_eq!(outcome, SummaryOutcome::Skipped);

        let summary = service.summarize(&[]).await;
        assert_eq!(summary.summary, "未找到所选期间的活动日志。");
        assert!(summary.key_achievements.is_empty());
        assert_eq!(summary.suggestions, vec!["鼓励团队记录他们的日常工作。"]);
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_valid_response_is_parsed() {
        let client = Arc::new(StubClient::new(StubReply::Text(VALID.to_string())));
        let service = SummaryService::new(client.clone());

        let summary = service.summarize(&sample_logs()).await;
        assert_eq!(
            summary,
            Summary::new("S", vec!["A".to_string()], vec!["B".to_string()])
        );
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_request_carries_projection_and_schema() {
        let client = Arc::new(StubClient::new(StubReply::Text(VALID.to_string())));
        let service = SummaryService::new(client.clone());
        service.summarize(&sample_logs()).await;

        let request = client.last_request().unwrap();
        assert_eq!(request.model, "stub-model");
        assert_eq!(request.response_schema["required"][1], "keyAchievements");
        assert!(request.prompt.contains(r#""type":"Reel""#));
        assert!(request.prompt.contains(r#""user":"Sarah Chen""#));
        assert!(request.prompt.contains(r#""metrics":null"#));
        assert!(!request.prompt.contains(r#""id""#));
        assert!(!request.prompt.contains("timestamp"));
    }

    #[tokio::test]
    async fn test_malformed_response_falls_back() {
        for reply in [
            StubReply::Text("not json".to_string()),
            StubReply::Text(String::new()),
            StubReply::Text(r#"{"summary":"S","suggestions":[]}"#.to_string()),
        ] {
            let service = SummaryService::new(Arc::new(StubClient::new(reply)));
            let outcome = service.summarize_with_outcome(&sample_logs()).await;
            assert!(matches!(outcome, SummaryOutcome::RecoveredFallback { .. }));
            assert_eq!(outcome.into_summary(), error_summary());
        }
    }

    #[tokio::test]
    async fn test_transport_error_falls_back() {
        let service = SummaryService::new(Arc::new(StubClient::new(StubReply::RateLimited)));

        let err = service.try_summarize(&sample_logs()).await.unwrap_err();
        assert!(matches!(err, SummaryError::Llm(_)));

        let summary = service.summarize(&sample_logs()).await;
        assert_eq!(summary.summary, "由于错误，无法生成AI摘要。");
        assert_eq!(summary.suggestions, vec!["请检查API配置。"]);
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let client = StubClient::new(StubReply::Text(VALID.to_string()))
            .with_delay(Duration::from_millis(500));
        let service =
            SummaryService::new(Arc::new(client)).with_timeout(Duration::from_millis(20));

        let err = service.try_summarize(&sample_logs()).await.unwrap_err();
        assert!(matches!(err, SummaryError::Timeout(_)));
        assert_eq!(service.summarize(&sample_logs()).await, error_summary());
    }

    #[tokio::test]
    async fn test_cache_serves_repeat_request() {
        let client = Arc::new(StubClient::new(StubReply::Text(VALID.to_string())));
        let service = SummaryService::new(client.clone())
            .with_cache(SummaryCache::new(Duration::from_secs(60)));

        let first = service.summarize(&sample_logs()).await;
        let second = service.summarize(&sample_logs()).await;
        assert_eq!(first, second);
        assert_eq!(client.calls(), 1);
        assert_eq!(service.cache().map(|c| c.stats().hits), Some(1));
    }

    #[tokio::test]
    async fn test_fallbacks_are_not_cached() {
        let client = Arc::new(StubClient::new(StubReply::Text("oops".to_string())));
        let service = SummaryService::new(client.clone())
            .with_cache(SummaryCache::new(Duration::from_secs(60)));

        service.summarize(&sample_logs()).await;
        service.summarize(&sample_logs()).await;
        assert_eq!(client.calls(), 2);
    }
}
