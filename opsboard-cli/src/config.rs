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

//! Configuration management

use anyhow::Result;
use opsboard_insight::{InsightConfig, Provider};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OpsboardConfig {
    #[serde(default)]
    pub llm: InsightConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Entries in the dashboard "recent activity" panel
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_recent_limit() -> usize {
    3
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
        }
    }
}

/// API key variable for `provider`, first set one wins
fn api_key_vars(provider: Provider) -> &'static [&'static str] {
    match provider {
        Provider::Gemini => &["GEMINI_API_KEY", "API_KEY"],
        Provider::OpenAI => &["OPENAI_API_KEY"],
    }
}

impl OpsboardConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Supported environment variables:
    /// - OPSBOARD_LLM_PROVIDER: `gemini` (default) or `openai`
    /// - OPSBOARD_MODEL: Model id (default: provider specific)
    /// - OPSBOARD_LLM_BASE_URL: Provider endpoint override
    /// - OPSBOARD_LLM_TIMEOUT: Request timeout in seconds (default: 30)
    /// - OPSBOARD_CACHE_TTL: Summary cache TTL in seconds (default: 0, disabled)
    /// - GEMINI_API_KEY / API_KEY: Gemini API key
    /// - OPENAI_API_KEY: OpenAI API key
    pub fn from_env() -> Self {
        Self::from_lookup(&|name: &str| std::env::var(name).ok())
    }

    /// Load configuration with priority: file > env > defaults
    pub fn load(config_file: Option<PathBuf>) -> Result<Self> {
        match config_file {
            Some(path) if path.exists() => {
                tracing::info!("Loading configuration from file: {:?}", path);
                let config = Self::from_file(&path)?;

                // Fill in what the file left unset from environment variables
                Ok(Self::merge_with_env(config, &|name: &str| {
                    std::env::var(name).ok()
                }))
            }
            Some(path) => {
                tracing::warn!("Config file not found: {:?}, using environment", path);
                Ok(Self::from_env())
            }
            None => Ok(Self::from_env()),
        }
    }

    fn from_lookup(env: &dyn Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(provider) = env("OPSBOARD_LLM_PROVIDER") {
            match provider.parse() {
                Ok(provider) => config.llm.provider = provider,
                Err(e) => tracing::warn!("Ignoring OPSBOARD_LLM_PROVIDER: {}", e),
            }
        }

        if let Some(model) = env("OPSBOARD_MODEL") {
            config.llm.model = Some(model);
        }

        if let Some(base_url) = env("OPSBOARD_LLM_BASE_URL") {
            config.llm.base_url = Some(base_url);
        }

        if let Some(timeout) = env("OPSBOARD_LLM_TIMEOUT") {
            if let Ok(val) = timeout.parse() {
                config.llm.timeout_secs = val;
            }
        }

        if let Some(ttl) = env("OPSBOARD_CACHE_TTL") {
            if let Ok(val) = ttl.parse() {
                config.llm.cache_ttl_secs = val;
            }
        }

        config.llm.api_key = api_key_vars(config.llm.provider)
            .iter()
            .find_map(|name| env(*name));

        config
    }

    /// Apply environment values for every field the file did not set.
    fn merge_with_env(mut config: Self, env: &dyn Fn(&str) -> Option<String>) -> Self {
        let set = |name: &str| env(name).is_some();
        let defaults = InsightConfig::default();

        // The provider decides which key variable applies, so resolve it first
        if config.llm.provider == defaults.provider && set("OPSBOARD_LLM_PROVIDER") {
            config.llm.provider = Self::from_lookup(env).llm.provider;
        }

        let env_config = Self::from_lookup(&|name: &str| match name {
            "OPSBOARD_LLM_PROVIDER" => Some(config.llm.provider.to_string()),
            other => env(other),
        });

        if config.llm.model.is_none() {
            config.llm.model = env_config.llm.model;
        }
        if config.llm.base_url.is_none() {
            config.llm.base_url = env_config.llm.base_url;
        }
        if config.llm.api_key.is_none() {
            config.llm.api_key = env_config.llm.api_key;
        }
        if config.llm.timeout_secs == defaults.timeout_secs && set("OPSBOARD_LLM_TIMEOUT") {
            config.llm.timeout_secs = env_config.llm.timeout_secs;
        }
        if config.llm.cache_ttl_secs == defaults.cache_ttl_secs && set("OPSBOARD_CACHE_TTL") {
            config.llm.cache_ttl_secs = env_config.llm.cache_ttl_secs;
        }

        config
    }
}
