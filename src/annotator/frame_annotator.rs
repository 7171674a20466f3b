//! FrameAnnotator combining a track source with a canvas.

use image::RgbImage;

use super::{AnnotatorConfig, FrameResult};
use crate::geometry::VisionPoint;
use crate::render::{Canvas, IdentityPalette, Palette};
use crate::tracks::{ClassNames, TrackSource};

/// Draws a labeled box and a vision link for every track of a frame.
///
/// The annotator owns its collaborators: a `TrackSource` providing the
/// tracks, a `Canvas` doing the drawing and output, and a `Palette` choosing
/// a color per track identity. Nothing is carried from one frame to the next
/// except the configuration.
pub struct FrameAnnotator<S, C, P = IdentityPalette> {
    source: S,
    canvas: C,
    palette: P,
    names: ClassNames,
    config: AnnotatorConfig,
}

impl<S, C> FrameAnnotator<S, C, IdentityPalette>
where
    S: TrackSource,
    C: Canvas,
{
    /// Create a new annotator with the default palette and configuration.
    pub fn new(source: S, canvas: C, names: ClassNames) -> Self {
        Self::with_config(source, canvas, names, AnnotatorConfig::default())
    }

    /// Create a new annotator with the default palette and the given configuration.
    pub fn with_config(source: S, canvas: C, names: ClassNames, config: AnnotatorConfig) -> Self {
        Self {
            source,
            canvas,
            palette: IdentityPalette,
            names,
            config,
        }
    }
}

impl<S, C, P> FrameAnnotator<S, C, P>
where
    S: TrackSource,
    C: Canvas,
    P: Palette,
{
    /// Replace the palette, keeping everything else.
    pub fn with_palette<Q: Palette>(self, palette: Q) -> FrameAnnotator<S, C, Q> {
        FrameAnnotator {
            source: self.source,
            canvas: self.canvas,
            palette,
            names: self.names,
            config: self.config,
        }
    }

    /// Move the point vision links are drawn from.
    ///
    /// No range check is made: points off the frame are valid and give
    /// links that enter from outside the image.
    pub fn set_vision_point(&mut self, point: impl Into<VisionPoint>) {
        self.config.vision_point = point.into();
    }

    /// Set the stroke width, or `None` to derive it from each frame's size.
    pub fn set_line_width(&mut self, line_width: Option<u32>) {
        self.config.line_width = line_width;
    }

    /// Enable or disable logging of each frame result.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.config.verbose = verbose;
    }

    /// Current vision point.
    pub fn vision_point(&self) -> VisionPoint {
        self.config.vision_point
    }

    /// Current configuration.
    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Annotate one frame.
    ///
    /// Tracks are drawn in the order the source returns them. Each track gets
    /// a labeled box in its identity color followed by a vision link; the
    /// finished frame is emitted once, after all drawing.
    ///
    /// Source and canvas errors are returned as-is through `E`. A failure
    /// aborts the call and may leave the frame partly drawn.
    ///
    /// # Returns
    /// The annotated frame with the number of tracks drawn on it.
    pub fn annotate<E>(&mut self, mut frame: RgbImage) -> Result<FrameResult, E>
    where
        E: From<S::Error> + From<C::Error>,
    {
        let tracks = self.source.tracks(&frame)?;
        let stroke_width = self.config.stroke_width_for(frame.width(), frame.height());
        let vision_point = self.config.vision_point;
        log::debug!(
            "annotating {} tracks, vision point ({}, {}), stroke {stroke_width}",
            tracks.len(),
            vision_point.x,
            vision_point.y
        );

        for track in &tracks {
            let color = self.palette.color_for(track.track_id);
            let label = self.names.name_of(track.class_id);
            self.canvas
                .draw_labeled_box(&mut frame, &track.bbox, &label, color, stroke_width)?;
            self.canvas
                .draw_vision_link(&mut frame, &track.bbox, vision_point, stroke_width)?;
        }

        self.canvas.emit(&frame)?;

        let result = FrameResult {
            frame,
            total_tracks: tracks.len(),
            verbose: self.config.verbose,
        };
        if result.verbose {
            log::info!("VisionEye: {result}");
        }
        Ok(result)
    }

    /// Get a reference to the underlying track source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying track source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the underlying canvas.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Get a mutable reference to the underlying canvas.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Get a reference to the palette.
    pub fn palette(&self) -> &P {
        &self.palette
    }

    /// Get a reference to the class name table.
    pub fn names(&self) -> &ClassNames {
        &self.names
    }

    /// Split the annotator back into its collaborators.
    pub fn into_parts(self) -> (S, C, P) {
        (self.source, self.canvas, self.palette)
    }
}
