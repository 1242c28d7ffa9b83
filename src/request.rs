use std::{collections::HashMap, hash::BuildHasher};

pub const ACCEPT_LANGUAGE: &str = "accept-language";

/// Header lookup for whatever represents the current request.
///
/// Names are matched ignoring ASCII case. The CGI/Rack environment spelling
/// (`HTTP_ACCEPT_LANGUAGE`) matches `accept-language` as well.
pub trait HeaderSource {
    fn header(&self, name: &str) -> Option<&str>;

    fn accept_language(&self) -> Option<&str> {
        self.header(ACCEPT_LANGUAGE)
    }
}

/// How closely `key` spells the header `name`: `Some(0)` for the header name
/// itself in any case, `Some(1)` for the CGI form, `None` otherwise.
fn header_name_rank(key: &str, name: &str) -> Option<u8> {
    if key.eq_ignore_ascii_case(name) {
        return Some(0);
    }

    let rest = key.strip_prefix("HTTP_")?;
    let cgi = rest.len() == name.len()
        && rest.bytes().zip(name.bytes()).all(|(a, b)| {
            let a = if a == b'_' { b'-' } else { a };
            a.eq_ignore_ascii_case(&b)
        });
    cgi.then_some(1)
}

fn header_name_matches(key: &str, name: &str) -> bool {
    header_name_rank(key, name).is_some()
}

// Several spellings in one map: plain header names beat the CGI form, then the
// lexically smallest key wins.
impl<V, S> HeaderSource for HashMap<String, V, S>
where
    V: AsRef<str>,
    S: BuildHasher,
{
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
            .or_else(|| {
                self.iter()
                    .filter_map(|(key, value)| {
                        header_name_rank(key, name).map(|rank| (rank, key, value))
                    })
                    .min_by(|(a, a_key, _), (b, b_key, _)| a.cmp(b).then(a_key.cmp(b_key)))
                    .map(|(_, _, value)| value)
            })
            .map(|value| value.as_ref())
    }
}

impl<K, V> HeaderSource for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| header_name_matches(key.as_ref(), name))
            .map(|(_, value)| value.as_ref())
    }
}

impl<K, V> HeaderSource for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn header(&self, name: &str) -> Option<&str> {
        self.as_slice().header(name)
    }
}
