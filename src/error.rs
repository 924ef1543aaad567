//! Renderer and configuration errors.

use std::io;
use std::path::PathBuf;

/// Errors surfaced by [`crate::Renderer`] operations.
///
/// Cropping, clamping and escape translation never fail; only the sink can.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Sink rejected output: {0}")]
    Sink(#[from] io::Error),

    #[error("Renderer has already ended")]
    Ended,
}

/// Errors that can occur while loading renderer options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not determine the user config directory")]
    NoConfigDir,
}

impl From<RenderError> for io::Error {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Sink(e) => e,
            RenderError::Ended => {
                io::Error::new(io::ErrorKind::BrokenPipe, "Renderer has already ended")
            }
        }
    }
}
