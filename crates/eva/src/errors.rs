use thiserror::Error;

/// Errors from driving a walk simulation.
///
/// The model functions themselves are total and never fail; only aggregate
/// inputs handed to the simulation driver are validated.
#[derive(Error, Debug)]
pub enum EvaError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
}
