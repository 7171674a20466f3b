use image::{Rgb, RgbImage};

use crate::geometry::{Rect, VisionPoint};

/// Drawing capability used by the annotator.
///
/// All calls are synchronous and operate on the frame passed in. Where a
/// vision link attaches on the box is up to the implementation; the built-in
/// [`RasterCanvas`](super::RasterCanvas) uses [`Rect::anchor`].
pub trait Canvas {
    /// Error type for drawing or output failures.
    type Error;

    /// Draw `bbox` outlined in `color` with `label` attached to it.
    fn draw_labeled_box(
        &mut self,
        frame: &mut RgbImage,
        bbox: &Rect,
        label: &str,
        color: Rgb<u8>,
        stroke_width: u32,
    ) -> Result<(), Self::Error>;

    /// Draw the link from `vision_point` to `bbox`, plus a marker at
    /// `vision_point` itself.
    fn draw_vision_link(
        &mut self,
        frame: &mut RgbImage,
        bbox: &Rect,
        vision_point: VisionPoint,
        stroke_width: u32,
    ) -> Result<(), Self::Error>;

    /// Hand a finished frame to the output (display, recorder, ...).
    fn emit(&mut self, frame: &RgbImage) -> Result<(), Self::Error>;
}
