use thiserror::Error;

use crate::core::types::Species;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("No behavior profile registered for species: {0:?}")]
    MissingProfile(Species),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
