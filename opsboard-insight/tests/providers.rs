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

//! Provider clients against a local mock HTTP server

use chrono::{NaiveDate, Utc};
use mockito::Matcher;
use opsboard_core::demo::demo_logs;
use opsboard_insight::{
    error_summary, GeminiClient, GenerationRequest, InsightConfig, LLMClient, LLMError,
    OpenAIClient, Provider, SummaryError, SummaryService,
};
use serde_json::json;

const SUMMARY_JSON: &str = r#"{"summary":"今天以短视频为主。","keyAchievements":["TikTok 12.5K 观看"],"suggestions":["发布 LinkedIn 草稿"]}"#;

fn request(model: &str) -> GenerationRequest {
    GenerationRequest {
        model: model.to_string(),
        prompt: "总结今天的活动".to_string(),
        response_schema: json!({
            "type": "object",
            "properties": { "summary": { "type": "string" } },
            "required": ["summary"],
            "additionalProperties": false
        }),
    }
}

fn gemini_body(parts: &[&str]) -> String {
    let parts: Vec<_> = parts.iter().map(|text| json!({ "text": text })).collect();
    json!({
        "candidates": [{ "content": { "role": "model", "parts": parts } }],
        "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 40, "totalTokenCount": 160 }
    })
    .to_string()
}

#[tokio::test]
async fn test_gemini_sends_schema_and_joins_parts() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": { "type": "OBJECT", "required": ["summary"] }
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body(&[r#"{"summary":"#, r#""ok"}"#]))
        .create_async()
        .await;

    let client = GeminiClient::new("test-key".to_string(), "gemini-2.5-flash".to_string())
        .with_base_url(server.url());
    let response = client.generate(request("gemini-2.5-flash")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.content, r#"{"summary":"ok"}"#);
    assert_eq!(response.usage.total_tokens, 160);
}

#[tokio::test]
async fn test_gemini_keeps_key_out_of_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/m:generateContent")
        .match_query(Matcher::Missing)
        .match_header("x-goog-api-key", "SECRET-KEY-123")
        .with_status(200)
        .with_body(gemini_body(&["{}"]))
        .create_async()
        .await;

    let client = GeminiClient::new("SECRET-KEY-123".to_string(), "m".to_string())
        .with_base_url(server.url());
    client.generate(request("m")).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_transport_error_does_not_reveal_key() {
    let client = GeminiClient::new("SECRET-KEY-123".to_string(), "m".to_string())
        .with_base_url("http://127.0.0.1:1".to_string());

    let err = client.generate(request("m")).await.unwrap_err();
    assert!(matches!(err, LLMError::Http(_)));

    let message = SummaryError::from(err).to_string();
    assert!(!message.contains("SECRET-KEY-123"), "{message}");
    assert!(!message.contains("127.0.0.1"), "{message}");
}

#[tokio::test]
async fn test_gemini_without_text_is_a_parse_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .with_status(200)
        .with_body(json!({ "candidates": [] }).to_string())
        .create_async()
        .await;

    let client = GeminiClient::new("k".to_string(), "gemini-2.5-flash".to_string())
        .with_base_url(server.url());
    let response = client.generate(request("gemini-2.5-flash")).await.unwrap();
    assert!(response.content.is_empty());

    let config = InsightConfig {
        api_key: Some("k".to_string()),
        base_url: Some(server.url()),
        ..Default::default()
    };
    let service = SummaryService::from_config(&config).unwrap();
    let err = service.try_summarize(&logs()).await.unwrap_err();
    assert!(matches!(err, SummaryError::Parse(_)));
}

#[tokio::test]
async fn test_gemini_maps_status_codes() {
    let mut server = mockito::Server::new_async().await;
    let client = GeminiClient::new("k".to_string(), "m".to_string()).with_base_url(server.url());

    let mut mocks = Vec::new();
    for (status, model) in [(401, "unauthorized"), (429, "limited"), (500, "broken")] {
        mocks.push(
            server
                .mock("POST", format!("/models/{}:generateContent", model).as_str())
                        .with_status(status)
                .with_body("upstream said no")
                .create_async()
                .await,
        );
    }

    let err = client.generate(request("unauthorized")).await.unwrap_err();
    assert!(matches!(err, LLMError::Unauthorized));

    let err = client.generate(request("limited")).await.unwrap_err();
    assert!(matches!(err, LLMError::RateLimitExceeded));

    match client.generate(request("broken")).await.unwrap_err() {
        LLMError::ApiError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream said no");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_openai_sends_strict_json_schema() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "strict": true,
                    "schema": { "type": "object", "additionalProperties": false }
                }
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "choices": [{ "message": { "role": "assistant", "content": r#"{"summary":"ok"}"# } }],
                "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = OpenAIClient::new("sk-test".to_string(), "gpt-4o-mini".to_string())
        .with_base_url(server.url());
    let response = client.generate(request("gpt-4o-mini")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.content, r#"{"summary":"ok"}"#);
    assert_eq!(response.usage.prompt_tokens, 10);
}

#[tokio::test]
async fn test_openai_maps_rate_limit() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .create_async()
        .await;

    let client =
        OpenAIClient::new("sk".to_string(), "gpt-4o-mini".to_string()).with_base_url(server.url());
    let err = client.generate(request("gpt-4o-mini")).await.unwrap_err();
    assert!(matches!(err, LLMError::RateLimitExceeded));
}

fn logs() -> Vec<opsboard_core::ActivityLog> {
    demo_logs(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), &Utc)
}

#[tokio::test]
async fn test_service_end_to_end_with_gemini() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::Regex("发布了新产品发布会的幕后花絮视频".to_string()))
        .with_status(200)
        .with_body(gemini_body(&[SUMMARY_JSON]))
        .expect(1)
        .create_async()
        .await;

    let config = InsightConfig {
        provider: Provider::Gemini,
        api_key: Some("test-key".to_string()),
        base_url: Some(server.url()),
        ..Default::default()
    };
    let service = SummaryService::from_config(&config).unwrap();
    let summary = service.summarize(&logs()).await;

    mock.assert_async().await;
    assert_eq!(summary.summary, "今天以短视频为主。");
    assert_eq!(summary.key_achievements, vec!["TikTok 12.5K 观看"]);
}

#[tokio::test]
async fn test_service_recovers_from_provider_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .with_status(429)
        .create_async()
        .await;

    let config = InsightConfig {
        api_key: Some("test-key".to_string()),
        base_url: Some(server.url()),
        ..Default::default()
    };
    let service = SummaryService::from_config(&config).unwrap();

    assert_eq!(service.summarize(&logs()).await, error_summary());
}
