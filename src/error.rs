use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TangleError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
