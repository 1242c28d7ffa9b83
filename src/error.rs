#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no Accept-Language header value")]
    MissingHeader,
    #[error("{0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("no language entries found in header")]
    NoLanguages,
    #[error("invalid language tag `{0}`")]
    InvalidTag(String),
    #[error("{0}")]
    Config(#[from] serde_path_to_error::Error<serde_json::Error>),
}
