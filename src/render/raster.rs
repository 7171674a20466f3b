//! `imageproc`-backed canvas.

use std::path::Path;

use ab_glyph::{FontArc, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut,
    draw_polygon_mut, draw_text_mut, text_size,
};
use imageproc::point::Point;
use imageproc::rect::Rect as PixelRect;

use super::{Canvas, FrameSink, NullSink, RenderError};
use crate::geometry::{Rect, VisionPoint};

/// DejaVu Sans, see `assets/fonts/DejaVuSans-LICENSE`.
static DEFAULT_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

const LABEL_PADDING: u32 = 2;
const MIN_LABEL_SCALE: f32 = 12.0;

/// Colors of the vision link construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisionStyle {
    /// Line and the dot on the tracked object
    pub link_color: Rgb<u8>,
    /// Dot on the vision point
    pub pin_color: Rgb<u8>,
}

impl Default for VisionStyle {
    fn default() -> Self {
        Self {
            link_color: Rgb([11, 219, 235]),
            pin_color: Rgb([255, 0, 255]),
        }
    }
}

/// Canvas drawing directly into `RgbImage` frames.
///
/// Labels are rendered with the bundled DejaVu Sans unless another font is
/// set. Geometry far outside the frame is clipped before rasterizing.
pub struct RasterCanvas<K = NullSink> {
    sink: K,
    font: Option<FontArc>,
    style: VisionStyle,
}

impl RasterCanvas<NullSink> {
    /// Canvas that draws but does not output frames anywhere.
    pub fn headless() -> Self {
        Self::new(NullSink)
    }
}

impl<K: FrameSink> RasterCanvas<K> {
    /// Canvas with the bundled label font and default colors.
    pub fn new(sink: K) -> Self {
        let font = match FontArc::try_from_slice(DEFAULT_FONT) {
            Ok(font) => Some(font),
            Err(err) => {
                log::warn!("bundled label font unusable ({err}), labels will have no text");
                None
            }
        };
        Self {
            sink,
            font,
            style: VisionStyle::default(),
        }
    }

    /// Replace the label font.
    pub fn with_font(mut self, font: FontArc) -> Self {
        self.font = Some(font);
        self
    }

    /// Load a TrueType/OpenType font from raw bytes.
    pub fn with_font_bytes(self, data: Vec<u8>) -> Result<Self, RenderError> {
        let font = FontArc::try_from_vec(data)?;
        Ok(self.with_font(font))
    }

    /// Load a TrueType/OpenType font from a file.
    pub fn with_font_file(self, path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let data = std::fs::read(path)?;
        self.with_font_bytes(data)
    }

    /// Replace the vision link colors.
    pub fn with_style(mut self, style: VisionStyle) -> Self {
        self.style = style;
        self
    }

    /// Current vision link colors.
    pub fn style(&self) -> &VisionStyle {
        &self.style
    }

    /// Whether label text is rendered.
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Get a reference to the frame sink.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Get a mutable reference to the frame sink.
    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    /// Unwrap the canvas, returning the frame sink.
    pub fn into_sink(self) -> K {
        self.sink
    }

    fn draw_label(
        &self,
        frame: &mut RgbImage,
        x1: i32,
        y1: i32,
        label: &str,
        color: Rgb<u8>,
        stroke_width: u32,
    ) {
        if label.is_empty() {
            return;
        }

        let scale = PxScale::from((5.5 * stroke_width as f32).max(MIN_LABEL_SCALE));
        let (text_w, text_h) = match &self.font {
            Some(font) => text_size(scale, font, label),
            // Rough advance of half the em size per character.
            None => (
                (label.chars().count() as f32 * scale.x * 0.5).ceil() as u32,
                scale.y.ceil() as u32,
            ),
        };

        let strip_w = text_w.max(1) + 2 * LABEL_PADDING;
        let strip_h = text_h.max(1) + 2 * LABEL_PADDING;
        // Above the box when there is room, otherwise tucked inside its top edge.
        let top = if y1 >= strip_h as i32 {
            y1 - strip_h as i32
        } else {
            y1
        };
        draw_filled_rect_mut(frame, PixelRect::at(x1, top).of_size(strip_w, strip_h), color);

        if let Some(font) = &self.font {
            draw_text_mut(
                frame,
                text_color_for(color),
                x1 + LABEL_PADDING as i32,
                top + LABEL_PADDING as i32,
                scale,
                font,
                label,
            );
        }
    }
}

impl<K: FrameSink> Canvas for RasterCanvas<K> {
    type Error = K::Error;

    fn draw_labeled_box(
        &mut self,
        frame: &mut RgbImage,
        bbox: &Rect,
        label: &str,
        color: Rgb<u8>,
        stroke_width: u32,
    ) -> Result<(), Self::Error> {
        let [x1, y1, x2, y2] = bbox.to_pixels();
        log::trace!("box [{x1}, {y1}, {x2}, {y2}] {label:?}");

        // Nested 1px outlines, growing inward from the box edge.
        let width = i64::from(x2) - i64::from(x1) + 1;
        let height = i64::from(y2) - i64::from(y1) + 1;
        for t in 0..i64::from(stroke_width.max(1)) {
            let w = width - 2 * t;
            let h = height - 2 * t;
            if w <= 0 || h <= 0 {
                break;
            }
            let ring = PixelRect::at(x1 + t as i32, y1 + t as i32).of_size(w as u32, h as u32);
            draw_hollow_rect_mut(frame, ring, color);
        }

        self.draw_label(frame, x1, y1, label, color, stroke_width);
        Ok(())
    }

    fn draw_vision_link(
        &mut self,
        frame: &mut RgbImage,
        bbox: &Rect,
        vision_point: VisionPoint,
        stroke_width: u32,
    ) -> Result<(), Self::Error> {
        let stroke = stroke_width.max(1);
        let anchor = bbox.anchor();
        log::trace!("link {vision_point:?} -> {anchor:?}");

        draw_thick_line(frame, vision_point, anchor, stroke, self.style.link_color);

        let radius = 2 * stroke as i32;
        draw_dot(frame, anchor, radius, self.style.link_color);
        draw_dot(frame, vision_point, radius, self.style.pin_color);
        Ok(())
    }

    fn emit(&mut self, frame: &RgbImage) -> Result<(), Self::Error> {
        self.sink.emit(frame)
    }
}

/// Line of `stroke` pixels thickness, drawn as a filled quad.
///
/// The segment is clipped to the frame (padded by the stroke) in `f64` first,
/// so endpoints anywhere in the `i32` range rasterize like nearby ones.
fn draw_thick_line(
    frame: &mut RgbImage,
    from: VisionPoint,
    to: VisionPoint,
    stroke: u32,
    color: Rgb<u8>,
) {
    if from == to {
        return;
    }
    let pad = f64::from(stroke);
    let bounds = [
        -pad,
        -pad,
        f64::from(frame.width()) + pad,
        f64::from(frame.height()) + pad,
    ];
    let start = (f64::from(from.x), f64::from(from.y));
    let end = (f64::from(to.x), f64::from(to.y));
    let Some(((x0, y0), (x1, y1))) = clip_segment(start, end, bounds) else {
        return;
    };

    if stroke <= 1 {
        draw_line_segment_mut(frame, (x0 as f32, y0 as f32), (x1 as f32, y1 as f32), color);
        return;
    }

    // Direction of the unclipped segment; the clipped one may be a single point.
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let len = dx.hypot(dy);
    let half = f64::from(stroke) / 2.0;
    // Normal of length >= 1 keeps the quad's first and last vertices distinct.
    let (nx, ny) = (-dy / len * half, dx / len * half);
    let corner = |x: f64, y: f64| Point::new(x.round() as i32, y.round() as i32);
    let quad = [
        corner(x0 + nx, y0 + ny),
        corner(x1 + nx, y1 + ny),
        corner(x1 - nx, y1 - ny),
        corner(x0 - nx, y0 - ny),
    ];
    draw_polygon_mut(frame, &quad, color);
}

/// Liang-Barsky clipping of `start..end` against `[x_min, y_min, x_max, y_max]`.
fn clip_segment(
    start: (f64, f64),
    end: (f64, f64),
    [x_min, y_min, x_max, y_max]: [f64; 4],
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    let edges = [
        (-dx, start.0 - x_min),
        (dx, x_max - start.0),
        (-dy, start.1 - y_min),
        (dy, y_max - start.1),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((
        (start.0 + t0 * dx, start.1 + t0 * dy),
        (start.0 + t1 * dx, start.1 + t1 * dy),
    ))
}

/// Filled circle, skipped when it cannot touch the frame.
fn draw_dot(frame: &mut RgbImage, center: VisionPoint, radius: i32, color: Rgb<u8>) {
    let (x, y, r) = (i64::from(center.x), i64::from(center.y), i64::from(radius));
    let (w, h) = (i64::from(frame.width()), i64::from(frame.height()));
    if x < -r || y < -r || x > w + r || y > h + r {
        return;
    }
    draw_filled_circle_mut(frame, (center.x, center.y), radius, color);
}

/// Black text on light label colors, white otherwise.
fn text_color_for(background: Rgb<u8>) -> Rgb<u8> {
    let [r, g, b] = background.0;
    let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
    if luma > 160.0 {
        Rgb([0, 0, 0])
    } else {
        Rgb([255, 255, 255])
    }
}
