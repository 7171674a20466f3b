mod point;
mod rect;

pub use point::VisionPoint;
pub use rect::Rect;
