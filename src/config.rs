use serde::{Deserialize, Serialize};

use crate::{
    Error, LanguagePreferences,
    request::{ACCEPT_LANGUAGE, HeaderSource},
    util::strip_region,
};

/// Locale negotiation settings.
///
/// ```json
/// {
///   "header": "accept-language",
///   "supported-locales": ["en-US", "nb-NO", "se"],
///   "default-locale": "en-US"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub header: String,
    pub supported_locales: Vec<String>,
    pub default_locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            header: ACCEPT_LANGUAGE.to_string(),
            supported_locales: Vec::new(),
            default_locale: "en-US".to_string(),
        }
    }
}

impl Config {
    pub fn from_json_str(txt: &str) -> Result<Config, Error> {
        let jd = &mut serde_json::Deserializer::from_str(txt);
        let config: Config = serde_path_to_error::deserialize(jd)?;
        Ok(config)
    }

    /// Reads the configured header from `source`.
    pub fn preferences<S: HeaderSource + ?Sized>(&self, source: &S) -> LanguagePreferences {
        LanguagePreferences::new(source.header(&self.header))
    }

    /// Picks the supported locale that best fits `preferences`.
    ///
    /// An exact match wins. Otherwise the first supported locale sharing the
    /// most preferred compatible language code is used, and failing that the
    /// default locale.
    pub fn select_locale(&self, preferences: &LanguagePreferences) -> String {
        if let Some(locale) = preferences.preferred_from(&self.supported_locales) {
            return locale;
        }

        let compatible = preferences
            .compatible_from(&self.supported_locales)
            .and_then(|code| {
                self.supported_locales
                    .iter()
                    .find(|locale| strip_region(locale) == code)
            });

        match compatible {
            Some(locale) => locale.clone(),
            None => {
                tracing::debug!(
                    "No supported locale for {:?}, using {}",
                    preferences.languages(),
                    self.default_locale
                );
                self.default_locale.clone()
            }
        }
    }
}
