use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Error;

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z]{2})(?:-([a-zA-Z]{2}))?$").unwrap());

/// A two-letter language code with an optional two-letter region, stored in
/// normalized form (`en`, `en-US`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lowercase primary language code.
    pub fn language(&self) -> &str {
        &self.0[..2]
    }

    /// The uppercase region code, if the tag has one.
    pub fn region(&self) -> Option<&str> {
        self.0.get(3..)
    }

    /// The tag with its region removed.
    pub fn code(&self) -> LanguageTag {
        LanguageTag(self.language().to_string())
    }
}

impl FromStr for LanguageTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = TAG_RE
            .captures(s)
            .ok_or_else(|| Error::InvalidTag(s.to_string()))?;

        let mut tag = caps[1].to_ascii_lowercase();
        if let Some(region) = caps.get(2) {
            tag.push('-');
            tag.push_str(&region.as_str().to_ascii_uppercase());
        }
        Ok(LanguageTag(tag))
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.0
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_normalizes_case() {
        let tag: LanguageTag = "EN-us".parse().unwrap();
        assert_eq!(tag.as_str(), "en-US");
        assert_eq!(tag.language(), "en");
        assert_eq!(tag.region(), Some("US"));
        assert_eq!(tag.code().as_str(), "en");
    }

    #[test]
    fn test_tag_without_region() {
        let tag: LanguageTag = "Nl".parse().unwrap();
        assert_eq!(tag.to_string(), "nl");
        assert_eq!(tag.region(), None);
    }

    #[test]
    fn test_tag_rejects_malformed() {
        for input in ["", "eng", "en-", "en-USA", "en_US", "zh-Hant", "*"] {
            assert!(
                matches!(input.parse::<LanguageTag>(), Err(Error::InvalidTag(_))),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_tag_serde_as_string() {
        let tag: LanguageTag = serde_json::from_str(r#""pt-br""#).unwrap();
        assert_eq!(tag.as_str(), "pt-BR");
        assert_eq!(serde_json::to_string(&tag).unwrap(), r#""pt-BR""#);
        assert!(serde_json::from_str::<LanguageTag>(r#""portuguese""#).is_err());
    }
}
