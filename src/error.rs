// SPDX-License-Identifier: MPL-2.0
use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The request never produced an HTTP response (DNS, refused, timeout).
    #[error("Network Error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The response body did not match the expected shape.
    #[error("Decode Error: {0}")]
    Decode(String),

    #[error("Validation Error: {0}")]
    Validation(ValidationError),
}

/// Local form checks that stop a request before it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    /// A project must belong to a module.
    #[error("no module selected")]
    MissingModulo,
}

impl ValidationError {
    /// Returns the i18n message key for this validation failure.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::MissingModulo => "projetos-select-modulo",
        }
    }
}

impl Error {
    /// Text suitable for showing to the user after a failed operation.
    ///
    /// HTTP failures expose the server-provided detail; everything else
    /// falls back to the display form.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Error::Status { detail, .. } if !detail.is_empty() => detail.clone(),
            Error::Status { status, .. } => format!("HTTP {status}"),
            Error::Network(msg) | Error::Decode(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
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

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Error::Status {
                status: status.as_u16(),
                detail: String::new(),
            }
        } else {
            Error::Network(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
