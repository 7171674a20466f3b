use std::path::PathBuf;

/// Errors raised by the raster canvas and the built-in frame sinks.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid font data")]
    Font(#[from] ab_glyph::InvalidFont),
    #[error("failed to create output directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write frame to {path:?}")]
    WriteFrame {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
