use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Domain error: {0}")]
    DomainError(String),
}
