//! Builder for creating Track objects from various box layouts.

use crate::geometry::Rect;

use super::Track;

/// Builder for creating `Track` objects from various tracker output formats.
#[derive(Debug, Clone, Default)]
pub struct TrackBuilder {
    bbox: Rect,
    class_id: u32,
    track_id: u64,
}

impl TrackBuilder {
    /// Create a new track builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.bbox = Rect::from_tlbr(x1, y1, x2, y2);
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.bbox = Rect::from_xywh(cx, cy, w, h);
        self
    }

    /// Set bounding box in TLWH format (left, top, width, height).
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.bbox = Rect::new(x, y, w, h);
        self
    }

    /// Set the detector class index.
    pub fn class_id(mut self, class_id: u32) -> Self {
        self.class_id = class_id;
        self
    }

    /// Set the tracker identity.
    pub fn track_id(mut self, track_id: u64) -> Self {
        self.track_id = track_id;
        self
    }

    /// Build the final `Track`.
    pub fn build(self) -> Track {
        Track::new(self.class_id, self.track_id, self.bbox)
    }
}
