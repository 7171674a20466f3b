//! FrameAnnotator for drawing vision annotations over tracked frames.

mod config;
mod frame_annotator;
mod result;

pub use config::AnnotatorConfig;
pub use frame_annotator::FrameAnnotator;
pub use result::FrameResult;
