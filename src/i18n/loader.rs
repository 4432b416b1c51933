//! Translation loader and i18n management
//!
//! This module provides the core internationalization functionality including
//! translation loading, language detection, and message formatting.

use std::collections::HashMap;
use std::path::Path;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{debug, info, warn};
use crate::config::I18nConfig;
use crate::models::Reply;
use crate::utils::errors::{CleaningBotError, Result};
use crate::utils::format::format_number;

/// Catalogs compiled into the binary
const BUILTIN_CATALOGS: &[(&str, &str)] = &[
    ("ru", include_str!("../../translations/ru.json")),
    ("en", include_str!("../../translations/en.json")),
];

/// Main internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    /// Loaded translations by language code
    translations: HashMap<String, Map<String, Value>>,
    /// Default language code
    default_language: String,
    /// Supported language codes
    supported_languages: Vec<String>,
    translations_dir: Option<String>,
}

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

impl I18n {
    /// Create an I18n instance with the built-in catalogs loaded
    pub fn new(config: &I18nConfig) -> Result<Self> {
        let mut i18n = Self {
            translations: HashMap::new(),
            default_language: config.default_language.clone(),
            supported_languages: config.supported_languages.clone(),
            translations_dir: config.translations_dir.clone(),
        };

        for (lang_code, content) in BUILTIN_CATALOGS {
            if i18n.is_language_supported(lang_code) {
                i18n.insert_catalog(lang_code, content)?;
            }
        }

        Ok(i18n)
    }

    /// Replace built-in catalogs with `<lang>.json` files from the configured directory
    pub async fn load_translations(&mut self) -> Result<()> {
        let Some(dir) = self.translations_dir.clone() else {
            debug!("No translations directory configured, using built-in catalogs");
            return Ok(());
        };
        let translations_dir = Path::new(&dir);

        if !translations_dir.is_dir() {
            return Err(CleaningBotError::Config(
                format!("Translations directory not found: {}", translations_dir.display())
            ));
        }

        let supported_languages = self.supported_languages.clone();
        for lang_code in &supported_languages {
            let file_path = translations_dir.join(format!("{}.json", lang_code));

            if file_path.exists() {
                let content = fs::read_to_string(&file_path).await?;
                self.insert_catalog(lang_code, &content)?;
                info!("Loaded translations for language: {}", lang_code);
            } else {
                warn!("Translation file not found: {}", file_path.display());
            }
        }

        if !self.translations.contains_key(&self.default_language) {
            return Err(CleaningBotError::Config(
                format!("No translations available for default language {}", self.default_language)
            ));
        }

        Ok(())
    }

    fn insert_catalog(&mut self, lang_code: &str, content: &str) -> Result<()> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(map) => {
                debug!("Loaded {} top-level translation keys for {}", map.len(), lang_code);
                self.translations.insert(lang_code.to_string(), map);
                Ok(())
            }
            _ => Err(CleaningBotError::Config(
                format!("Invalid translation file format for {}", lang_code)
            )),
        }
    }

    /// Get a translated message
    pub fn t(&self, key: &str, lang: &str, params: Option<&TranslationParams>) -> String {
        let effective_lang = self.get_effective_language(lang);

        let translation = self
            .get_translation_value(key, &effective_lang)
            .or_else(|| self.get_translation_value(key, &self.default_language));

        match translation {
            Some(Value::String(text)) => self.format_message(&text, params),
            Some(other) => self.format_message(&other.to_string(), params),
            None => {
                warn!("Translation key '{}' not found in any language", key);
                key.to_string()
            }
        }
    }

    /// Render a dialogue reply as user-facing text
    pub fn render(&self, reply: &Reply, lang: &str) -> String {
        match reply {
            Reply::Welcome => self.t("replies.welcome", lang, None),
            Reply::AreaPrompt => self.t("replies.area_prompt", lang, None),
            Reply::AreaAccepted { area } => {
                let mut params = TranslationParams::new();
                params.insert("area".to_string(), format_number(*area));
                self.t("replies.area_accepted", lang, Some(&params))
            }
            Reply::InvalidNumber => self.t("replies.invalid_number", lang, None),
            Reply::AreaRequired => self.t("replies.area_required", lang, None),
            Reply::Cost { service, area, cost } => {
                let mut params = TranslationParams::new();
                params.insert("service".to_string(), self.t(&format!("services.{}", service.key()), lang, None));
                params.insert("area".to_string(), format_number(*area));
                params.insert("cost".to_string(), format_number(*cost));
                self.t("replies.cost", lang, Some(&params))
            }
            Reply::Stopped => self.t("replies.stopped", lang, None),
        }
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|l| l == lang)
    }

    /// Get the effective language (fallback to default if not supported)
    fn get_effective_language(&self, lang: &str) -> String {
        if self.is_language_supported(lang) && self.translations.contains_key(lang) {
            lang.to_string()
        } else {
            self.default_language.clone()
        }
    }

    /// Get translation value from nested JSON structure
    fn get_translation_value(&self, key: &str, lang: &str) -> Option<Value> {
        let translations = self.translations.get(lang)?;

        // Nested keys like "replies.welcome"
        let mut parts = key.split('.');
        let mut current = translations.get(parts.next()?)?;
        for part in parts {
            current = current.get(part)?;
        }

        Some(current.clone())
    }

    /// Format message with parameters
    fn format_message(&self, template: &str, params: Option<&TranslationParams>) -> String {
        if let Some(params) = params {
            let mut result = template.to_string();
            for (key, value) in params {
                let placeholder = format!("{{{}}}", key);
                result = result.replace(&placeholder, value);
            }
            result
        } else {
            template.to_string()
        }
    }

    /// Detect user language from Telegram language code
    pub fn detect_user_language(&self, telegram_lang: Option<&str>) -> String {
        if let Some(lang) = telegram_lang {
            // "en-US" -> "en"
            let lang_code = lang.split('-').next().unwrap_or(lang);

            if self.is_language_supported(lang_code) && self.translations.contains_key(lang_code) {
                return lang_code.to_string();
            }
        }

        self.default_language.clone()
    }
}
