use aco_core::AcoError;
use aco_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColonyError {
    #[error("colony configuration error: {0}")]
    Config(#[from] AcoError),

    #[error("instance error: {0}")]
    Model(#[from] ModelError),
}

pub type ColonyResult<T> = Result<T, ColonyError>;
