use crate::geometry::VisionPoint;

/// Configuration for the FrameAnnotator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnotatorConfig {
    /// Pixel every vision link starts from
    pub vision_point: VisionPoint,
    /// Stroke width; `None` derives it from the frame size
    pub line_width: Option<u32>,
    /// Log each frame result at info level
    pub verbose: bool,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            vision_point: VisionPoint::default(),
            line_width: None,
            verbose: true,
        }
    }
}

impl AnnotatorConfig {
    /// Set the point vision links start from.
    pub fn with_vision_point(mut self, point: impl Into<VisionPoint>) -> Self {
        self.vision_point = point.into();
        self
    }

    /// Use a fixed stroke width instead of the frame-derived one.
    pub fn with_line_width(mut self, line_width: u32) -> Self {
        self.line_width = Some(line_width);
        self
    }

    /// Enable or disable logging of each frame result.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Stroke width to use for a frame of `width` x `height` pixels.
    ///
    /// Automatic width grows with the frame: `max(round((w + h + 3) / 2 * 0.003), 2)`,
    /// with halves rounded to even.
    pub fn stroke_width_for(&self, width: u32, height: u32) -> u32 {
        match self.line_width {
            Some(line_width) => line_width.max(1),
            None => {
                let extent = (f64::from(width) + f64::from(height) + 3.0) / 2.0;
                ((extent * 0.003).round_ties_even() as u32).max(2)
            }
        }
    }
}
