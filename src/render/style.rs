use crate::error::{ConfigError, Result};

use super::Color;

/// Outline width used around every drawn face, in pixels.
pub const DEFAULT_OUTLINE_WIDTH: f64 = 7.0;

/// Radius of the optional corner markers, in pixels.
pub const DEFAULT_MARKER_RADIUS: f64 = 8.0;

/// Style parameters for the closed outline drawn around each face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineStyle {
    width: f64,
    color: Color,
}

impl OutlineStyle {
    /// Creates a new black outline style.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is below one pixel or not finite.
    pub fn new(width: f64) -> Result<Self> {
        if !width.is_finite() || width < 1.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "outline width",
                value: width,
                reason: "must be at least one pixel and finite",
            }
            .into());
        }
        Ok(Self {
            width,
            color: Color::BLACK,
        })
    }

    /// Sets the outline color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns the outline width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns half the outline width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    /// Returns the outline color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_OUTLINE_WIDTH,
            color: Color::BLACK,
        }
    }
}

/// Filled circles drawn on each projected cube corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexMarkers {
    radius: f64,
    color: Color,
}

impl VertexMarkers {
    /// Creates red corner markers of the given radius.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not positive and finite.
    pub fn new(radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "vertex marker radius",
                value: radius,
                reason: "must be positive and finite",
            }
            .into());
        }
        Ok(Self {
            radius,
            color: Color::RED,
        })
    }

    /// Sets the marker color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for VertexMarkers {
    fn default() -> Self {
        Self {
            radius: DEFAULT_MARKER_RADIUS,
            color: Color::RED,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_with_valid_width() {
        let style = OutlineStyle::new(2.0).unwrap();
        assert!((style.width() - 2.0).abs() < f64::EPSILON);
        assert!((style.half_width() - 1.0).abs() < f64::EPSILON);
        assert_eq!(style.color(), Color::BLACK);
    }

    #[test]
    fn new_with_zero_width_fails() {
        assert!(OutlineStyle::new(0.0).is_err());
    }

    #[test]
    fn new_with_negative_width_fails() {
        assert!(OutlineStyle::new(-1.0).is_err());
    }

    #[test]
    fn new_with_sub_pixel_width_fails() {
        assert!(OutlineStyle::new(0.5).is_err());
        assert!(OutlineStyle::new(1.0).is_ok());
    }

    #[test]
    fn new_with_nan_width_fails() {
        assert!(OutlineStyle::new(f64::NAN).is_err());
    }

    #[test]
    fn default_outline_is_seven_pixels_black() {
        let style = OutlineStyle::default();
        assert!((style.width() - 7.0).abs() < f64::EPSILON);
        assert_eq!(style.color(), Color::BLACK);
    }

    #[test]
    fn vertex_markers_reject_zero_radius() {
        assert!(VertexMarkers::new(0.0).is_err());
        let markers = VertexMarkers::new(3.0).unwrap().with_color(Color::BLUE);
        assert_eq!(markers.color(), Color::BLUE);
    }
}
