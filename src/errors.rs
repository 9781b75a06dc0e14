use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshError {
    /// A caller supplied value is out of range or malformed, e.g. a NACA code that is not four
    /// ASCII digits. Always raised before any geometry is computed.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The geometry cannot be turned into a valid closed solid, typically because a triangle has
    /// collapsed to a line or a point.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl MeshError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MeshError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MeshError>;
