use thiserror::Error;

/// Errors raised by the form model. Recovered locally by the caller: a failed
/// update or validation leaves the form value untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("unrecognized form field '{0}'")]
    InvalidField(String),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("fechaFin is earlier than fechaInicio")]
    DateRangeInverted,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("'{field}' must not be negative")]
    NegativeAmount { field: String },
}

/// Errors from the HTTP service clients. Surfaced once to the caller; there
/// is no automatic retry and no offline queue.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request to {context} failed: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{context} returned status {status}: {message}")]
    Status {
        context: &'static str,
        status: u16,
        message: String,
    },
}
