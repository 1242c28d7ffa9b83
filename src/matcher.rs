use std::collections::HashSet;

use crate::util::stripped_set;

/// Returns the first of `languages` that appears verbatim among `candidates`.
///
/// The result follows the order of `languages`, not of `candidates`, and the
/// comparison is exact: `nl-NL` does not match `nl`.
pub fn preferred_from<I>(languages: &[String], candidates: I) -> Option<String>
where
    I: IntoIterator,
    I::Item: ToString,
{
    let candidates = candidates
        .into_iter()
        .map(|candidate| candidate.to_string())
        .collect::<HashSet<_>>();

    languages
        .iter()
        .find(|language| candidates.contains(language.as_str()))
        .cloned()
}

/// Returns the first of `codes` that matches a candidate once regions are
/// ignored.
pub fn compatible_from<I>(codes: &[String], candidates: I) -> Option<String>
where
    I: IntoIterator,
    I::Item: ToString,
{
    let candidates = stripped_set(candidates);

    codes
        .iter()
        .find(|code| candidates.contains(code.as_str()))
        .cloned()
}
