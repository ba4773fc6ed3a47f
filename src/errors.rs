use thiserror::Error;

use crate::enums::ErrorType;

/// All errors that can occur when using the cielo24 client.
#[derive(Error, Debug)]
pub enum Cielo24Error {
    /// A wire token could not be converted into a value of the target type.
    #[error("cannot parse {token:?} as {type_name}")]
    Format {
        token: String,
        type_name: &'static str,
    },

    /// A raw `key=value` option names a key the options type does not have.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// A required parameter was missing or empty.
    #[error("invalid argument `{name}`: {message}")]
    Argument {
        name: &'static str,
        message: &'static str,
    },

    /// The API answered with an `ErrorType`/`ErrorComment` payload.
    #[error("{raw_type}: {message}")]
    Api {
        /// `None` when the server sent an error type this client does not know.
        error_type: Option<ErrorType>,
        raw_type: String,
        message: String,
    },

    /// A non-2xx response without a recognizable error payload.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// A transport-level HTTP error from reqwest.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// An I/O error, typically from reading a local media file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Cielo24Error {
    pub(crate) fn format(token: impl Into<String>, type_name: &'static str) -> Self {
        Self::Format {
            token: token.into(),
            type_name,
        }
    }

    /// An [`Argument`](Self::Argument) error for a missing or empty
    /// parameter named `name`.
    pub fn required(name: &'static str) -> Self {
        Self::Argument {
            name,
            message: "value cannot be empty",
        }
    }
}

/// A convenience alias for `Result<T, Cielo24Error>`.
pub type Result<T> = std::result::Result<T, Cielo24Error>;
