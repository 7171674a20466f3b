use std::convert::Infallible;

use crate::render::RenderError;
use crate::tracks::SourceError;

/// Error type covering the collaborators that ship with this crate.
///
/// Use it as the error parameter of
/// [`FrameAnnotator::annotate`](crate::FrameAnnotator::annotate) when the
/// annotator is assembled from built-in sources, canvases and sinks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
