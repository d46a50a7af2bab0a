use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unrecognized recurrence: {0}")]
    Unrecognized(String),
    #[error("Number out of range: {0}")]
    NumberOutOfRange(String),
}
