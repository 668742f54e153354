use thiserror::Error;

#[derive(Error, Debug)]
pub enum LockError {
    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Registry file not found: {0}")]
    RegistryFileNotFound(String),

    #[error("Unknown lock domain: {0}")]
    UnknownDomain(String),

    #[error("Root error: {0}")]
    Root(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LockError>;
