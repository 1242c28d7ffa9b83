use once_cell::unsync::OnceCell;
use unic_langid::LanguageIdentifier;

use crate::{matcher, request::HeaderSource, util::strip_region_from};

/// The language preferences of a single request.
///
/// The header is parsed on first use and the result kept for the lifetime of
/// the value. Region-stripped codes are derived lazily from the parsed list
/// and recomputed after [`set_languages`](Self::set_languages).
#[derive(Debug, Clone, Default)]
pub struct LanguagePreferences {
    header: Option<String>,
    languages: OnceCell<Vec<String>>,
    codes: OnceCell<Vec<String>>,
}

impl LanguagePreferences {
    pub fn new<'a>(header: impl Into<Option<&'a str>>) -> Self {
        Self {
            header: header.into().map(str::to_string),
            ..Default::default()
        }
    }

    /// Reads the `Accept-Language` header from `source`.
    pub fn from_source<S: HeaderSource + ?Sized>(source: &S) -> Self {
        Self::new(source.accept_language())
    }

    /// The raw header value this value was created from.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Language tags ordered by preference, e.g. `["nl-NL", "nl-BE", "en-US", "en"]`.
    pub fn languages(&self) -> &[String] {
        self.languages
            .get_or_init(|| crate::parse(self.header.as_deref()))
    }

    /// Replaces the parsed preferences, ignoring whatever the client sent.
    pub fn set_languages<I>(&mut self, languages: I)
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let languages = languages
            .into_iter()
            .map(|language| language.to_string())
            .collect::<Vec<_>>();
        tracing::debug!("Overriding preferred languages: {:?}", languages);

        self.languages = OnceCell::with_value(languages);
        self.codes = OnceCell::new();
    }

    /// Language codes without regions, in order of preference, e.g. `["nl", "en"]`.
    pub fn codes(&self) -> &[String] {
        self.codes
            .get_or_init(|| strip_region_from(self.languages()))
    }

    pub fn is_empty(&self) -> bool {
        self.languages().is_empty()
    }

    /// The most preferred language that appears exactly in `candidates`.
    pub fn preferred_from<I>(&self, candidates: I) -> Option<String>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        matcher::preferred_from(self.languages(), candidates)
    }

    /// The most preferred language code found in `candidates`, ignoring regions.
    ///
    /// Useful with a fixed set of supported locales such as `["en", "nl"]`.
    pub fn compatible_from<I>(&self, candidates: I) -> Option<String>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        matcher::compatible_from(self.codes(), candidates)
    }

    /// The preferences as locale identifiers. Entries that are not valid
    /// identifiers (possible after [`set_languages`](Self::set_languages)) are
    /// skipped.
    pub fn language_identifiers(&self) -> Vec<LanguageIdentifier> {
        self.languages()
            .iter()
            .filter_map(|language| language.parse::<LanguageIdentifier>().ok())
            .collect()
    }
}

impl From<&str> for LanguagePreferences {
    fn from(header: &str) -> Self {
        Self::new(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unic_langid::langid;

    const EXAMPLE: &str = "en;q=0.3, nl-NL, nl-BE;q=0.9, en-US;q=0.5";

    #[test]
    fn test_languages_and_codes() {
        let prefs = LanguagePreferences::new(EXAMPLE);
        assert_eq!(prefs.languages(), ["nl-NL", "nl-BE", "en-US", "en"]);
        assert_eq!(prefs.codes(), ["nl", "en"]);
        assert_eq!(prefs.header(), Some(EXAMPLE));
    }

    #[test]
    fn test_matchers_on_example() {
        let prefs = LanguagePreferences::new(EXAMPLE);
        assert_eq!(
            prefs.preferred_from(["it", "fr", "nl", "nl-NL"]),
            Some("nl-NL".to_string())
        );
        assert_eq!(prefs.compatible_from(["nl", "it"]), Some("nl".to_string()));
        assert_eq!(prefs.preferred_from(["it", "fr"]), None);
        assert_eq!(prefs.compatible_from(["it", "fr"]), None);
    }

    #[test]
    fn test_missing_header() {
        let prefs = LanguagePreferences::new(None);
        assert!(prefs.is_empty());
        assert!(prefs.codes().is_empty());
        assert_eq!(prefs.preferred_from(["en"]), None);
        assert_eq!(prefs.compatible_from(["en"]), None);
    }

    #[test]
    fn test_set_languages_resets_codes() {
        let mut prefs = LanguagePreferences::from(EXAMPLE);
        assert_eq!(prefs.codes(), ["nl", "en"]);

        prefs.set_languages(["de-AT", "fr"]);
        assert_eq!(prefs.languages(), ["de-AT", "fr"]);
        assert_eq!(prefs.codes(), ["de", "fr"]);
        assert_eq!(prefs.compatible_from(["fr-FR", "de"]), Some("de".to_string()));
        assert_eq!(prefs.preferred_from(["nl-NL"]), None);
    }

    #[test]
    fn test_set_languages_before_first_access() {
        let mut prefs = LanguagePreferences::new("nl");
        prefs.set_languages(Vec::<String>::new());
        assert!(prefs.is_empty());
    }

    #[test]
    fn test_language_identifiers() {
        let mut prefs = LanguagePreferences::new("se, nb-NO;q=0.5");
        assert_eq!(
            prefs.language_identifiers(),
            vec![langid!("se"), langid!("nb-NO")]
        );

        prefs.set_languages(["sma", "not a locale", "fi"]);
        assert_eq!(
            prefs.language_identifiers(),
            vec![langid!("sma"), langid!("fi")]
        );
    }
}
