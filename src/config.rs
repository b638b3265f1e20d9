// src/config.rs
//! Completion API configuration, loaded once at process start

use anyhow::{Context, Result};
use tracing::info;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_seconds: u64,
}

impl ApiConfig {
    /// Load the completion API credential and endpoint from the environment
    pub fn load() -> Result<Self> {
        let api_key = std::env::var("DEEPSEEK_API_KEY")
            .context("DEEPSEEK_API_KEY environment variable not set")?;

        let api_url = std::env::var("DEEPSEEK_API_URL")
            .unwrap_or_else(|_| "https://api.deepseek.com".to_string());

        let model =
            std::env::var("DEEPSEEK_MODEL").unwrap_or_else(|_| "deepseek-chat".to_string());

        info!("Completion API endpoint: {}", api_url);

        Ok(Self {
            api_url,
            api_key,
            model,
            timeout_seconds: 180,
        })
    }
}
