//! Google Translate client with two interchangeable endpoints.
//!
//! - [`Engine::Google`] calls `translate_a/single` with the `gtx` client and
//!   reads the segment array it returns.
//! - [`Engine::GoogleX`] calls `translate_a/t` with the `dict-chrome-ex`
//!   client, whose body is a short nested array (or a `sentences` object on
//!   older deployments).
//!
//! One request per call, no retries.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::Translate;
use crate::config::TranslatorConfig;
use crate::error::{TranslationError, TranslationResult};

/// Tag of the engine used when none is given.
pub const DEFAULT_ENGINE_TAG: &str = "vitalets";

// =============================================================================
// Engine selector
// =============================================================================

/// Recognized translation engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    #[default]
    Google,
    GoogleX,
}

impl Engine {
    pub const ALL: [Engine; 2] = [Engine::Google, Engine::GoogleX];

    /// Tag accepted on the command line.
    pub fn tag(&self) -> &'static str {
        match self {
            Engine::Google => "vitalets",
            Engine::GoogleX => "google-x",
        }
    }

    /// One-line description for usage text.
    pub fn description(&self) -> &'static str {
        match self {
            Engine::Google => "translate.googleapis.com gtx endpoint (default)",
            Engine::GoogleX => "clients5.google.com dict-chrome-ex endpoint",
        }
    }

    /// Resolve an engine tag. Tags match exactly.
    pub fn from_tag(tag: &str) -> TranslationResult<Self> {
        Engine::ALL
            .into_iter()
            .find(|e| e.tag() == tag)
            .ok_or_else(|| TranslationError::UnsupportedEngine(tag.to_string()))
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Engine {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Engine::from_tag(s)
    }
}

// =============================================================================
// Client
// =============================================================================

/// HTTP client for one engine.
#[derive(Clone)]
pub struct GoogleTranslator {
    engine: Engine,
    config: TranslatorConfig,
    client: reqwest::Client,
}

impl GoogleTranslator {
    pub fn new(engine: Engine, config: TranslatorConfig) -> Self {
        Self {
            engine,
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Client configured from the environment.
    pub fn from_env(engine: Engine) -> Self {
        Self::new(engine, TranslatorConfig::from_env())
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// Endpoint URL and query string for `text`.
    fn request_parts<'a>(&'a self, text: &'a str) -> (&'a str, Vec<(&'static str, &'a str)>) {
        let sl = self.config.source_lang.as_str();
        let tl = self.config.target_lang.as_str();

        match self.engine {
            Engine::Google => (
                self.config.google_url.as_str(),
                vec![("client", "gtx"), ("sl", sl), ("tl", tl), ("dt", "t"), ("q", text)],
            ),
            Engine::GoogleX => (
                self.config.google_x_url.as_str(),
                vec![("client", "dict-chrome-ex"), ("sl", sl), ("tl", tl), ("q", text)],
            ),
        }
    }

    async fn call_api(&self, text: &str) -> TranslationResult<String> {
        let (url, query) = self.request_parts(text);

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|e| TranslationError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::RequestFailed(e.to_string()))?;

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslationError::RateLimited);
        }
        if !status.is_success() {
            let snippet: String = body.chars().take(200).collect();
            return Err(TranslationError::ApiError(format!("HTTP {}: {}", status, snippet)));
        }

        match self.engine {
            Engine::Google => parse_google_response(&body),
            Engine::GoogleX => parse_google_x_response(&body),
        }
    }
}

impl Translate for GoogleTranslator {
    async fn translate(&self, text: &str) -> TranslationResult<String> {
        self.call_api(text).await
    }
}

// =============================================================================
// Response parsing
// =============================================================================

fn parse_json(body: &str) -> TranslationResult<Value> {
    serde_json::from_str(body).map_err(|e| TranslationError::InvalidResponse(e.to_string()))
}

fn non_empty(text: String) -> TranslationResult<String> {
    if text.trim().is_empty() {
        Err(TranslationError::InvalidResponse("Empty translation".to_string()))
    } else {
        Ok(text)
    }
}

/// Join the translated segments of a `translate_a/single` body.
///
/// Shape: `[[["Name","名称",null,null,10], ...], null, "zh-CN", ...]`
pub fn parse_google_response(body: &str) -> TranslationResult<String> {
    let value = parse_json(body)?;

    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::InvalidResponse("Missing segment array".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(Value::as_str))
        .collect();

    non_empty(text)
}

/// Extract the translation from a `translate_a/t` body.
///
/// Accepts `["Name"]`, `[["Name","zh-CN"]]` and
/// `{"sentences":[{"trans":"Name"}]}`.
pub fn parse_google_x_response(body: &str) -> TranslationResult<String> {
    let value = parse_json(body)?;

    if let Some(sentences) = value.get("sentences").and_then(Value::as_array) {
        let text: String = sentences
            .iter()
            .filter_map(|s| s.get("trans").and_then(Value::as_str))
            .collect();
        return non_empty(text);
    }

    let first = value
        .get(0)
        .ok_or_else(|| TranslationError::InvalidResponse("Empty response".to_string()))?;

    let text = match first {
        Value::String(s) => Some(s.clone()),
        Value::Array(inner) => inner.first().and_then(Value::as_str).map(String::from),
        _ => None,
    }
    .ok_or_else(|| TranslationError::InvalidResponse(format!("Unexpected shape: {}", first)))?;

    non_empty(text)
}
