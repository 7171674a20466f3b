//! Vision-eye annotations for tracked video frames.
//!
//! For every tracked object in a frame, [`FrameAnnotator`] draws its bounding
//! box labeled with the class name in a color tied to the track identity, and
//! a link from a fixed vision point to the object. Detection and tracking are
//! plugged in through [`TrackSource`]; drawing and output go through
//! [`Canvas`].

pub mod annotator;
pub mod error;
pub mod geometry;
pub mod render;
pub mod tracks;

pub use annotator::{AnnotatorConfig, FrameAnnotator, FrameResult};
pub use error::Error;
pub use geometry::{Rect, VisionPoint};
pub use render::{
    Canvas, FrameSink, IdentityPalette, ImageDirSink, MemorySink, NullSink, Palette, RasterCanvas,
    RenderError, VisionStyle,
};
pub use tracks::{
    ClassFilter, ClassNames, IntoTracks, ReplaySource, SourceError, Track, TrackBuilder,
    TrackSource,
};
