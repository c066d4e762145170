mod color;
mod framebuffer;
mod style;

pub use color::Color;
pub use framebuffer::Framebuffer;
pub use style::{OutlineStyle, VertexMarkers, DEFAULT_MARKER_RADIUS, DEFAULT_OUTLINE_WIDTH};

use crate::math::Point2;

/// Drawing surface the overlay paints onto.
///
/// Implemented by [`Framebuffer`] and by adapters around external image
/// libraries. Implementations clip to their own bounds and silently skip
/// shapes with non-finite coordinates.
pub trait Canvas {
    /// Fills the closed polygon `polygon` with `color`.
    fn fill_polygon(&mut self, polygon: &[Point2], color: Color);

    /// Draws a segment of the given `width` with round caps.
    fn draw_line(&mut self, from: &Point2, to: &Point2, width: f64, color: Color);

    /// Fills a disc of `radius` centered at `center`.
    fn fill_circle(&mut self, center: &Point2, radius: f64, color: Color);
}

/// Strokes the closed loop `polygon[0] → … → polygon[n-1] → polygon[0]`.
pub fn stroke_closed<C: Canvas + ?Sized>(canvas: &mut C, polygon: &[Point2], style: &OutlineStyle) {
    let n = polygon.len();
    for i in 0..n {
        let j = (i + 1) % n;
        canvas.draw_line(&polygon[i], &polygon[j], style.width(), style.color());
    }
}
