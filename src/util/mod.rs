use indexmap::IndexSet;

// Public API functions - for external users of this crate

/// Removes the region from a language tag: `nl-NL` becomes `nl`.
pub fn strip_region(language: &str) -> &str {
    match language.split_once('-') {
        Some((code, _)) => code,
        None => language,
    }
}

/// Strips the region from every language, keeping the first occurrence of
/// each resulting code.
pub fn strip_region_from<I>(languages: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: ToString,
{
    stripped_set(languages).into_iter().collect()
}

pub(crate) fn stripped_set<I>(languages: I) -> IndexSet<String>
where
    I: IntoIterator,
    I::Item: ToString,
{
    languages
        .into_iter()
        .map(|language| strip_region(&language.to_string()).to_string())
        .collect()
}
