// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Specific error types for photo API requests.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API rejected the credential (HTTP 401 or 403).
    AccessDenied,

    /// The requested photo does not exist (HTTP 404).
    NotFound,

    /// Any other non-success HTTP status.
    Status(u16),

    /// The request could not be sent or the connection failed.
    Transport(String),

    /// The response body could not be decoded as the expected JSON shape.
    Decode(String),

    /// No API credential was configured at startup.
    MissingCredential,
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::AccessDenied | ApiError::MissingCredential => "gallery-error-access-denied",
            ApiError::NotFound => "detail-not-found",
            ApiError::Status(_) | ApiError::Transport(_) | ApiError::Decode(_) => {
                "gallery-error-fetch"
            }
        }
    }

    /// Whether this error permanently stops gallery pagination.
    ///
    /// Only authorization failures are terminal; transport and decode
    /// errors leave pagination free to continue on the next scroll.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApiError::AccessDenied | ApiError::MissingCredential)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::AccessDenied => write!(f, "Access denied by the API"),
            ApiError::NotFound => write!(f, "Photo not found"),
            ApiError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            ApiError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ApiError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            ApiError::MissingCredential => write!(f, "No API access key configured"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
