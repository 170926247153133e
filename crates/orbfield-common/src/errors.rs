use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid particle count: {0}")]
    InvalidParticleCount(i64),

    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("icon encode error: {0}")]
    Encode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum OrbfieldError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
