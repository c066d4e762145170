use tiny_skia::{FillRule, IntSize, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::error::{RenderError, Result};
use crate::math::{Point2, TOLERANCE};

use super::{Canvas, Color};

/// Opaque RGB image backed by a [`tiny_skia::Pixmap`].
///
/// Shapes are rasterized without anti-aliasing so every pixel holds exactly
/// one of the colors painted onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pixmap: Pixmap,
}

impl Framebuffer {
    /// Creates a black framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the image is too large.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidDimensions { width, height })?;
        pixmap.fill(tiny_skia::Color::BLACK);
        Ok(Self { pixmap })
    }

    /// Copies an RGB8 buffer, e.g. a decoded video frame.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or `rgb` does not hold
    /// exactly `width * height * 3` bytes.
    pub fn from_rgb8(width: u32, height: u32, rgb: &[u8]) -> Result<Self> {
        let size =
            IntSize::from_wh(width, height).ok_or(RenderError::InvalidDimensions { width, height })?;
        let expected = width as usize * height as usize * 3;
        if rgb.len() != expected {
            return Err(RenderError::BufferSize {
                expected,
                actual: rgb.len(),
            }
            .into());
        }
        let rgba = rgb
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], u8::MAX])
            .collect();
        let pixmap =
            Pixmap::from_vec(rgba, size).ok_or(RenderError::InvalidDimensions { width, height })?;
        Ok(Self { pixmap })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Returns the color at `(x, y)`, or `None` outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let px = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgb(px.red(), px.green(), px.blue()))
    }

    /// Fills the whole image with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, u8::MAX));
    }

    /// Counts the pixels currently holding `color`.
    #[must_use]
    pub fn count_color(&self, color: Color) -> usize {
        self.pixmap
            .pixels()
            .iter()
            .filter(|px| {
                let px = px.demultiply();
                Color::rgb(px.red(), px.green(), px.blue()) == color
            })
            .count()
    }

    /// Returns the image as packed RGB8 bytes.
    #[must_use]
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|px| {
                let px = px.demultiply();
                [px.red(), px.green(), px.blue()]
            })
            .collect()
    }

    /// The underlying pixmap, e.g. for `save_png`.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, u8::MAX);
    paint.anti_alias = false;
    paint
}

#[allow(clippy::cast_possible_truncation)]
fn px(v: f64) -> f32 {
    v as f32
}

impl Canvas for Framebuffer {
    fn fill_polygon(&mut self, polygon: &[Point2], color: Color) {
        let Some((first, rest)) = polygon.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(px(first.x), px(first.y));
        for p in rest {
            pb.line_to(px(p.x), px(p.y));
        }
        pb.close();

        if let Some(path) = pb.finish() {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::EvenOdd,
                Transform::identity(),
                None,
            );
        }
    }

    fn draw_line(&mut self, from: &Point2, to: &Point2, width: f64, color: Color) {
        if (to - from).norm() < TOLERANCE {
            self.fill_circle(from, width * 0.5, color);
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(px(from.x), px(from.y));
        pb.line_to(px(to.x), px(to.y));

        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: px(width),
                line_cap: LineCap::Round,
                ..Default::default()
            };
            self.pixmap.stroke_path(
                &path,
                &paint(color),
                &stroke,
                Transform::identity(),
                None,
            );
        }
    }

    fn fill_circle(&mut self, center: &Point2, radius: f64, color: Color) {
        if let Some(path) = PathBuilder::from_circle(px(center.x), px(center.y), px(radius)) {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }
}
