//! Lenient parsing of the HTTP `Accept-Language` header.
//!
//! ```
//! use http_accept_language::LanguagePreferences;
//!
//! let prefs = LanguagePreferences::new("en;q=0.3, nl-NL, nl-be;q=0.9, en-US;q=0.5");
//! assert_eq!(prefs.languages(), ["nl-NL", "nl-BE", "en-US", "en"]);
//! assert_eq!(prefs.codes(), ["nl", "en"]);
//! assert_eq!(prefs.preferred_from(["it", "fr", "nl", "nl-NL"]).as_deref(), Some("nl-NL"));
//! assert_eq!(prefs.compatible_from(["nl", "it"]).as_deref(), Some("nl"));
//! ```

pub mod config;
pub mod matcher;
pub mod request;
pub mod util;

mod error;
mod parser;
mod preferences;
mod tag;

pub use config::Config;
pub use error::Error;
pub use parser::{parse, parse_bytes, try_parse, try_parse_bytes};
pub use preferences::LanguagePreferences;
pub use request::{ACCEPT_LANGUAGE, HeaderSource};
pub use tag::LanguageTag;
pub use util::{strip_region, strip_region_from};
