use crate::cube::FacePalette;
use crate::render::{OutlineStyle, VertexMarkers};
use crate::resolve::EdgeTolerance;

/// Parameters controlling how the cube overlay is resolved and painted.
///
/// Every field is a validated type, so any `OverlayConfig` is usable as is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayConfig {
    edge_tolerance: EdgeTolerance,
    outline: OutlineStyle,
    palette: FacePalette,
    vertex_markers: Option<VertexMarkers>,
}

impl OverlayConfig {
    /// Creates the default configuration: exact edge matching, 7 px black
    /// outlines, the standard palette and no corner markers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shared-edge matching tolerance.
    #[must_use]
    pub fn with_edge_tolerance(mut self, tolerance: EdgeTolerance) -> Self {
        self.edge_tolerance = tolerance;
        self
    }

    /// Sets the face outline style.
    #[must_use]
    pub fn with_outline(mut self, outline: OutlineStyle) -> Self {
        self.outline = outline;
        self
    }

    /// Sets the face colors.
    #[must_use]
    pub fn with_palette(mut self, palette: FacePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Draws a marker on each projected corner after the cube.
    #[must_use]
    pub fn with_vertex_markers(mut self, markers: VertexMarkers) -> Self {
        self.vertex_markers = Some(markers);
        self
    }

    #[must_use]
    pub fn edge_tolerance(&self) -> EdgeTolerance {
        self.edge_tolerance
    }

    #[must_use]
    pub fn outline(&self) -> &OutlineStyle {
        &self.outline
    }

    #[must_use]
    pub fn palette(&self) -> &FacePalette {
        &self.palette
    }

    #[must_use]
    pub fn vertex_markers(&self) -> Option<&VertexMarkers> {
        self.vertex_markers.as_ref()
    }
}
