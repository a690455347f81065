use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid value: {message}")]
    InvalidValue { message: String },

    #[cfg(feature = "json")]
    #[error("failed to parse limits JSON: {message}")]
    JsonParse { message: String },

    #[cfg(feature = "json")]
    #[error("failed to write limits JSON: {message}")]
    JsonWrite { message: String },
}
