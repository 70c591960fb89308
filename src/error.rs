use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create the window")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create a renderer")]
    Renderer(#[from] pixels::Error),

    #[error("failed to load the image {}", path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: AssetError,
    },

    #[error("bad settings in {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to decode QOI data: {0}")]
    Decode(#[from] qoi::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(String),
}
