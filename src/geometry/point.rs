/// Fixed pixel from which vision links are drawn.
///
/// Any coordinate is accepted, including negative values and points outside
/// the frame; links to an off-canvas point are simply clipped when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisionPoint {
    pub x: i32,
    pub y: i32,
}

impl VisionPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for VisionPoint {
    fn default() -> Self {
        Self::new(20, 20)
    }
}

impl From<(i32, i32)> for VisionPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<VisionPoint> for (i32, i32) {
    fn from(point: VisionPoint) -> Self {
        (point.x, point.y)
    }
}
