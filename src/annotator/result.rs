use std::fmt;

use image::RgbImage;

/// Output of one annotation pass.
#[derive(Debug, Clone)]
pub struct FrameResult {
    /// The annotated frame
    pub frame: RgbImage,
    /// Number of tracks annotated in this frame
    pub total_tracks: usize,
    /// Whether the annotator was configured to log results
    pub verbose: bool,
}

impl FrameResult {
    pub fn into_frame(self) -> RgbImage {
        self.frame
    }
}

impl fmt::Display for FrameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameResult(total_tracks={})", self.total_tracks)
    }
}
