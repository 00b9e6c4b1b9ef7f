use thiserror::Error;

/// Errors raised while setting up the UI world. Ticking the router never fails.
#[derive(Error, Debug)]
pub enum VruiError {
    /// A configuration value was out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// An entity referenced during setup doesn't exist
    #[error("The entity does not exist")]
    NoSuchEntity(#[from] hecs::NoSuchEntity),
    /// An entity was missing a component required for this operation
    #[error(transparent)]
    ComponentError(#[from] hecs::ComponentError),
    /// Configuration could not be parsed
    #[error("There was a problem parsing the configuration")]
    Json(#[from] serde_json::Error),
    /// Something else went wrong
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// vrui result type
pub type VruiResult<T> = std::result::Result<T, VruiError>;
