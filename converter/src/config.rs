//! Translator configuration.
//!
//! Defaults target Chinese to English. Each field can be overridden from the
//! environment (a `.env` file is honoured):
//!
//! | Variable                  | Default                                            |
//! |---------------------------|----------------------------------------------------|
//! | `XLSX2JSON_SOURCE_LANG`   | `zh-CN`                                            |
//! | `XLSX2JSON_TARGET_LANG`   | `en`                                               |
//! | `XLSX2JSON_GOOGLE_URL`    | `https://translate.googleapis.com/translate_a/single` |
//! | `XLSX2JSON_GOOGLE_X_URL`  | `https://clients5.google.com/translate_a/t`        |

use std::env;

pub const DEFAULT_SOURCE_LANG: &str = "zh-CN";
pub const DEFAULT_TARGET_LANG: &str = "en";
pub const DEFAULT_GOOGLE_URL: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_GOOGLE_X_URL: &str = "https://clients5.google.com/translate_a/t";

/// Settings shared by both translation engines.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatorConfig {
    pub source_lang: String,
    pub target_lang: String,
    pub google_url: String,
    pub google_x_url: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            source_lang: DEFAULT_SOURCE_LANG.to_string(),
            target_lang: DEFAULT_TARGET_LANG.to_string(),
            google_url: DEFAULT_GOOGLE_URL.to_string(),
            google_x_url: DEFAULT_GOOGLE_X_URL.to_string(),
        }
    }
}

impl TranslatorConfig {
    /// Defaults overridden by environment variables.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let pick = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Self {
            source_lang: pick("XLSX2JSON_SOURCE_LANG", defaults.source_lang),
            target_lang: pick("XLSX2JSON_TARGET_LANG", defaults.target_lang),
            google_url: pick("XLSX2JSON_GOOGLE_URL", defaults.google_url),
            google_x_url: pick("XLSX2JSON_GOOGLE_X_URL", defaults.google_x_url),
        }
    }
}
