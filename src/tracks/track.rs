use crate::geometry::Rect;

/// One tracked object in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    /// Class index in the detector's taxonomy
    pub class_id: u32,
    /// Identity assigned by the tracker, stable across frames
    pub track_id: u64,
    /// Bounding box in pixel coordinates
    pub bbox: Rect,
}

impl Track {
    pub fn new(class_id: u32, track_id: u64, bbox: Rect) -> Self {
        Self {
            class_id,
            track_id,
            bbox,
        }
    }

    /// Create a track from a TLBR box (x1, y1, x2, y2).
    pub fn from_tlbr(class_id: u32, track_id: u64, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(class_id, track_id, Rect::from_tlbr(x1, y1, x2, y2))
    }
}
