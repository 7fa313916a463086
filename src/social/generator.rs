//! Anthropic Messages API client for drafting platform-specific content.
//!
//! Synchronous (blocking) by design: generation is the only network call in
//! the tool and it happens once per invocation, from the CLI layer.

use crate::model::{Entry, Platform};
use crate::platforms::{profile, PlatformProfile};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const API_BASE: &str = "https://api.anthropic.com/v1";
const API_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const MAX_TOKENS: u32 = 1024;

const SYSTEM_PROMPT: &str = "You are an expert social media content creator. You write platform-specific \
content that is engaging, on-brand, and optimized for each platform's audience \
and format conventions. Write ONLY the post content. Do not include explanations, \
alternatives, or meta-commentary. The output should be ready to copy-paste.";

/// Errors that can occur when generating content.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("API key not set or invalid. Set your key: export ANTHROPIC_API_KEY=sk-ant-...")]
    NoApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Client for the Messages API.
pub struct Generator {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl Generator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: API_BASE.to_string(),
        }
    }

    /// Build a client from `ANTHROPIC_API_KEY`, honoring the `SOCIAL_MODEL`
    /// model override.
    pub fn from_env() -> Result<Self, GeneratorError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| GeneratorError::NoApiKey)?;
        let mut generator = Self::new(api_key);
        if let Ok(model) = std::env::var("SOCIAL_MODEL") {
            generator.model = model;
        }
        Ok(generator)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Generate content for a topic on one platform.
    ///
    /// If the first reply exceeds the platform's length limit, retries once
    /// with a shorten prompt. A failed retry is swallowed and the over-length
    /// original is returned.
    pub fn generate(
        &self,
        topic: &str,
        platform: Platform,
        extra: &str,
    ) -> Result<String, GeneratorError> {
        let profile = profile(platform);
        let prompt = build_prompt(topic, profile, extra);
        let mut content = self.complete(&prompt)?;

        if content.chars().count() > profile.max_length {
            let retry = shorten_prompt(&content, profile.max_length);
            if let Ok(shorter) = self.complete(&retry) {
                content = shorter;
            }
        }

        Ok(content)
    }

    /// Generate a fresh version of an existing entry, optionally steering
    /// with feedback on the previous version.
    pub fn regenerate(&self, original: &Entry, feedback: &str) -> Result<String, GeneratorError> {
        let extra = if feedback.is_empty() {
            String::new()
        } else {
            format!(
                "The previous version was:\n{}\n\nFeedback: {}",
                original.content, feedback
            )
        };
        self.generate(&original.topic, original.platform, &extra)
    }

    fn complete(&self, prompt: &str) -> Result<String, GeneratorError> {
        let request = ApiRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            system: SYSTEM_PROMPT,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .headers(self.build_headers()?)
            .json(&request)
            .send()
            .map_err(|e| GeneratorError::Network(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(GeneratorError::NoApiKey);
        }
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(GeneratorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ApiResponse = response
            .json()
            .map_err(|e| GeneratorError::Parse(e.to_string()))?;
        parsed
            .content
            .into_iter()
            .find_map(|block| block.text)
            .ok_or_else(|| GeneratorError::Parse("response contained no text block".to_string()))
    }

    fn build_headers(&self) -> Result<HeaderMap, GeneratorError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key).map_err(|_| GeneratorError::NoApiKey)?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));
        Ok(headers)
    }
}

/// Prompt for a first draft, embedding the platform's constraints.
pub fn build_prompt(topic: &str, profile: &PlatformProfile, extra: &str) -> String {
    let mut prompt = format!(
        "Create a {} post about the following topic:\n\n\
         Topic: {}\n\n\
         Platform constraints:\n\
         - Maximum length: {} characters\n\
         - Tone: {}\n\
         - Hashtag style: {}\n\
         - Format description: {}\n\n\
         Example format:\n{}",
        profile.name,
        topic,
        profile.max_length,
        profile.tone,
        profile.hashtag_style,
        profile.description,
        profile.example_format,
    );
    if !extra.is_empty() {
        prompt.push_str(&format!("\n\nAdditional instructions: {}", extra));
    }
    prompt
}

fn shorten_prompt(content: &str, max_length: usize) -> String {
    format!(
        "The previous response was {} characters. It MUST be under {} characters. \
         Rewrite it shorter while keeping the key message:\n\n{}",
        content.chars().count(),
        max_length,
        content
    )
}

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Platform;

    #[test]
    fn prompt_includes_platform_constraints() {
        let prompt = build_prompt("Python tips", profile(Platform::Twitter), "");
        assert!(prompt.contains("Twitter / X"));
        assert!(prompt.contains("280"));
        assert!(prompt.contains("concise and engaging"));
        assert!(prompt.contains("Python tips"));
    }

    #[test]
    fn prompt_includes_extra_instructions() {
        let prompt = build_prompt(
            "AI trends",
            profile(Platform::Linkedin),
            "Include statistics",
        );
        assert!(prompt.contains("Include statistics"));
    }

    #[test]
    fn prompt_omits_extra_section_when_empty() {
        let prompt = build_prompt("AI trends", profile(Platform::Linkedin), "");
        assert!(!prompt.contains("Additional instructions"));
    }

    #[test]
    fn shorten_prompt_states_the_limit() {
        let prompt = shorten_prompt("x".repeat(300).as_str(), 280);
        assert!(prompt.contains("300 characters"));
        assert!(prompt.contains("under 280"));
    }

    #[test]
    fn builders_override_model_and_endpoint() {
        let generator = Generator::new("sk-test")
            .with_model("test-model")
            .with_base_url("http://localhost:1");
        assert_eq!(generator.model, "test-model");
        assert_eq!(generator.base_url, "http://localhost:1");
    }

    #[test]
    fn response_parsing_takes_first_text_block() {
        let raw = r#"{"content":[{"type":"text","text":"Generated tweet! #Python"}]}"#;
        let parsed: ApiResponse = serde_json::from_str(raw).unwrap();
        let text = parsed.content.into_iter().find_map(|b| b.text).unwrap();
        assert_eq!(text, "Generated tweet! #Python");
    }
}
