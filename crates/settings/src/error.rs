//! Result and Error types for stools-settings

/// Type alias for Result<T, settings::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `stools-settings` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to (de)serialise")]
    FailedSerde(#[from] serde_json::Error),

    #[error("setting \"{0}\" is not recognised")]
    UnknownSetting(String),

    #[error("setting \"{key}\" expects {expected}, found {found}")]
    InvalidSettingType {
        key: String,
        expected: &'static str,
        found: String,
    },
}
