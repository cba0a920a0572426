use thiserror::Error;

/// Errors raised while adapting external data into a sequence.
///
/// Operators themselves never fail; only the adapters that parse or convert
/// their input return these.
#[derive(Error, Debug)]
pub enum Error {
    /// The pattern handed to a regex adapter did not compile
    #[cfg(feature = "regex")]
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The value handed to an object adapter was not a record
    #[error("expected a record, found {0}")]
    NotARecord(&'static str),

    /// The value handed to an object adapter could not be serialized
    #[cfg(feature = "serde")]
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
