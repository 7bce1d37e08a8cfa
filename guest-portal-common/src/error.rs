use thiserror::Error;

/// All possible error types that may occur while preparing or interpreting
/// portal API payloads
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GpError {
    #[error("All fields are required. Missing `{0}`")]
    EmptyField(&'static str),
    #[error("Unexpected server response. Missing `{0}`")]
    MissingField(&'static str),
    #[error("Invalid user type `{0}`")]
    InvalidUserType(String),
}

/// Generic [Result][std::result::Result] type where the error is always [GpError]
pub type GpResult<T> = std::result::Result<T, GpError>;
