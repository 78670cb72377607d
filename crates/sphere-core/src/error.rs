use thiserror::Error;

/// Rejected scene configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("node count must be at least 1")]
    NoNodes,
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("connection distance must be positive and finite, got {0}")]
    InvalidConnectionDistance(f32),
    #[error("burst particle count {requested} exceeds capacity {capacity}")]
    BurstTooLarge { requested: usize, capacity: usize },
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid scene configuration: {0}")]
    Config(#[from] ConfigError),
}
