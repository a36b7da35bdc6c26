//! Result and Error types for stools-xs

/// Type alias for Result<T, xs::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `stools-xs` crate
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("key \"{key}\" not found on universe {universe}")]
    KeyNotFound { key: String, universe: String },

    #[error("no uncertainty stored for \"{key}\" on universe {universe}")]
    UncertaintyUnavailable { key: String, universe: String },

    #[error("expected value/uncertainty pairs for \"{key}\", found {length} values")]
    OddLengthPairs { key: String, length: usize },
}
