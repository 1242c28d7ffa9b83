use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, LanguageTag};

// language[-region][;q=quality], followed by the end of the header or a comma
static ENTRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([a-zA-Z]{2}(?:-[a-zA-Z]{2})?)(?:;q=([01](?:\.[0-9])?))?\s*(?:$|,)").unwrap()
});

/// Parses an `Accept-Language` header value into normalized language tags,
/// highest quality first. Entries of equal quality keep their header order.
///
/// Fragments that are not a two-letter language (with an optional two-letter
/// region) are skipped. An absent or unusable header gives an empty list.
///
/// ```
/// let tags = http_accept_language::parse("en;q=0.3, nl-NL, nl-be;q=0.9, en-US;q=0.5");
/// assert_eq!(tags, ["nl-NL", "nl-BE", "en-US", "en"]);
/// ```
pub fn parse<'a>(header: impl Into<Option<&'a str>>) -> Vec<String> {
    or_empty(try_parse(header))
}

/// Like [`parse`], for raw header bytes. Invalid UTF-8 gives an empty list.
pub fn parse_bytes(header: &[u8]) -> Vec<String> {
    or_empty(try_parse_bytes(header))
}

fn or_empty(result: Result<Vec<String>, Error>) -> Vec<String> {
    match result {
        Ok(languages) => {
            tracing::trace!("Accept-Language parsed: {:?}", languages);
            languages
        }
        Err(e) => {
            tracing::debug!("Accept-Language ignored: {}", e);
            Vec::new()
        }
    }
}

/// The fallible form of [`parse`], reporting why nothing usable was found.
pub fn try_parse<'a>(header: impl Into<Option<&'a str>>) -> Result<Vec<String>, Error> {
    let header = header.into().ok_or(Error::MissingHeader)?;

    let mut entries = ENTRY_RE
        .captures_iter(header)
        .map(|caps| {
            // both captures are constrained by ENTRY_RE, so neither parse fails
            let quality = caps
                .get(2)
                .and_then(|q| q.as_str().parse::<f64>().ok())
                .unwrap_or(1.0);
            Ok((caps[1].parse::<LanguageTag>()?, quality))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    if entries.is_empty() {
        return Err(Error::NoLanguages);
    }

    // sort_by is stable, so ties keep header order
    entries.sort_by(|(_, a), (_, b)| (1.0 - a).total_cmp(&(1.0 - b)));

    Ok(entries.into_iter().map(|(tag, _)| tag.into()).collect())
}

pub fn try_parse_bytes(header: &[u8]) -> Result<Vec<String>, Error> {
    try_parse(std::str::from_utf8(header)?)
}
