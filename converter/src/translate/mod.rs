//! Header translation.
//!
//! Column headers containing Chinese characters are sent, one at a time, to a
//! [`Translate`] implementation and turned into lowercase identifiers
//! (`"Customer Name"` → `"customer_name"`). Everything else passes through.
//! Failures are logged and the original header is kept.
//!
//! ```rust,ignore
//! use xlsx2json::translate::{translate_headers, Engine, GoogleTranslator};
//!
//! let translator = GoogleTranslator::from_env(Engine::Google);
//! let headers = translate_headers(&translator, &["客户名称".to_string()]).await;
//! ```

pub mod google;

use once_cell::sync::Lazy;
use regex::Regex;
use std::future::Future;

use crate::config::TranslatorConfig;
use crate::error::TranslationResult;
use crate::logs::{log_info_indent, log_warning};

pub use google::{
    parse_google_response, parse_google_x_response, Engine, GoogleTranslator, DEFAULT_ENGINE_TAG,
};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A fallible text translator.
pub trait Translate {
    /// Translate `text`, returning the service's raw output.
    fn translate(&self, text: &str) -> impl Future<Output = TranslationResult<String>>;
}

/// True if `text` contains a CJK Unified Ideograph (U+4E00..=U+9FFF).
pub fn needs_translation(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// Turn translated text into an identifier: whitespace runs become `_`,
/// then everything is lowercased.
pub fn to_identifier(text: &str) -> String {
    WHITESPACE.replace_all(text, "_").to_lowercase()
}

/// Translate a single header, falling back to the original on failure.
pub async fn translate_header<T: Translate>(translator: &T, header: &str) -> String {
    if !needs_translation(header) {
        return header.to_string();
    }

    match translator.translate(header).await {
        Ok(text) => to_identifier(&text),
        Err(e) => {
            log_warning(format!("Translation failed for \"{}\": {}", header, e));
            header.to_string()
        }
    }
}

/// Translate every header in order, one request at a time.
pub async fn translate_headers<T: Translate>(translator: &T, headers: &[String]) -> Vec<String> {
    let mut translated = Vec::with_capacity(headers.len());

    for header in headers {
        let result = translate_header(translator, header).await;
        if &result != header {
            log_info_indent(format!("{} → {}", header, result), 1);
        }
        translated.push(result);
    }

    translated
}

/// Translate headers with the engine named by `tag`.
///
/// The tag is resolved once. An unknown tag is logged and every header is
/// returned unchanged.
pub async fn translate_headers_with_engine(
    headers: &[String],
    tag: &str,
    config: TranslatorConfig,
) -> Vec<String> {
    match Engine::from_tag(tag) {
        Ok(engine) => translate_headers(&GoogleTranslator::new(engine, config), headers).await,
        Err(e) => {
            log_warning(format!("{}; headers left untranslated", e));
            headers.to_vec()
        }
    }
}
