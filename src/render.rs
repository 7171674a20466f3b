//! Colors, drawing and frame output.
//!
//! The annotator only talks to the [`Canvas`] and [`Palette`] traits. The
//! [`RasterCanvas`] here is the default canvas, drawing with `imageproc` and
//! handing finished frames to a [`FrameSink`].

mod canvas;
mod error;
mod palette;
mod raster;
mod sink;

pub use canvas::Canvas;
pub use error::RenderError;
pub use palette::{IdentityPalette, Palette};
pub use raster::{RasterCanvas, VisionStyle};
pub use sink::{FrameSink, ImageDirSink, MemorySink, NullSink};
