//! Unified error types for the theme store.
//!
//! Unrecognized role names are deliberately not errors: they surface as a
//! `false`/`None` from the store, which treats them as "nothing to do".
//! Everything here represents an actual failure.

use std::fmt;

// ---------------------------------------------------------------------------
// StorageError
// ---------------------------------------------------------------------------

/// Errors from the durable key-value store.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    /// Stored blob exists but is not the expected structure.
    Parse(String),
    /// Key contains characters unsafe for the backing store.
    InvalidKey(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "storage io: {e}"),
            Self::Parse(msg) => write!(f, "malformed stored data: {msg}"),
            Self::InvalidKey(msg) => write!(f, "invalid storage key: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors from the remote color endpoint.
#[derive(Debug)]
pub enum ApiError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the endpoint.
    Status(u16, String),
    /// Response body was not the expected JSON shape.
    Json(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status(code, body) => write!(f, "status {code}: {body}"),
            Self::Json(msg) => write!(f, "unexpected response body: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// TinctError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for the CLI surface.
#[derive(Debug)]
pub enum TinctError {
    Config(ConfigError),
    Storage(StorageError),
    Api(ApiError),
    /// A role name the binding table does not recognize.
    UnknownRole(String),
    /// User-supplied input (e.g. a JSON color map) that cannot be parsed.
    InvalidInput(String),
}

impl fmt::Display for TinctError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Storage(e) => write!(f, "storage: {e}"),
            Self::Api(e) => write!(f, "api: {e}"),
            Self::UnknownRole(name) => write!(f, "unknown color role: {name}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for TinctError {}

impl From<ConfigError> for TinctError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StorageError> for TinctError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

impl From<ApiError> for TinctError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let s = StorageError::from(io_err).to_string();
        assert!(s.starts_with("storage io:"), "got: {s}");
        assert!(s.contains("missing"));

        assert_eq!(
            StorageError::Parse("not a json object".into()).to_string(),
            "malformed stored data: not a json object"
        );
        assert_eq!(
            StorageError::InvalidKey("bad/key".into()).to_string(),
            "invalid storage key: bad/key"
        );
    }

    #[test]
    fn api_error_status_display() {
        let e = ApiError::Status(503, "overloaded".into());
        assert_eq!(e.to_string(), "status 503: overloaded");
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn top_level_error_wraps_sources() {
        let e = TinctError::from(StorageError::Parse("truncated".into()));
        assert!(e.to_string().starts_with("storage:"), "got: {e}");
        assert_eq!(
            TinctError::UnknownRole("accent".into()).to_string(),
            "unknown color role: accent"
        );
    }
}
