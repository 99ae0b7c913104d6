use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not a numeric address: {0}")]
    InvalidAddressFormat(String),
}
