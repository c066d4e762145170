//! Per-frame orchestration.
//!
//! A frame runs four stages in a fixed order:
//!
//! ```text
//! CubePoints ──AssembleFaces──▶ AssembledCube
//!            ──ResolvePositions──▶ PositionedCube
//!            ──ResolveVisibility──▶ ResolvedCube
//!            ──DrawCube──▶ canvas
//! ```
//!
//! Each stage consumes the previous stage's output, so stages cannot run out
//! of order. Every intermediate type can also be built directly from prepared
//! faces to exercise a single stage in isolation.

mod overlay;
mod stages;

pub use overlay::CubeOverlay;
pub use stages::{
    AssembleFaces, AssembledCube, DrawCube, PositionedCube, ResolvedCube, Stage,
};

use crate::config::OverlayConfig;
use crate::cube::{CubeFaces, CubePoints, Face, Position, FACE_COUNT};
use crate::math::Point2;
use crate::render::Color;
use crate::resolve::{ResolvePositions, ResolveVisibility};

/// Snapshot of one face after a frame has been resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceRenderState {
    pub corners: [Point2; 4],
    pub centroid: Point2,
    pub color: Color,
    pub position: Position,
    pub is_shown: bool,
    pub should_draw: bool,
}

impl From<&Face> for FaceRenderState {
    fn from(face: &Face) -> Self {
        Self {
            corners: *face.contour(),
            centroid: face.centroid(),
            color: face.color(),
            position: face.position(),
            is_shown: face.is_shown(),
            should_draw: face.should_draw(),
        }
    }
}

/// Resolves a frame without any persistent state.
///
/// Builds fresh faces from `config`'s palette, runs assembly, position and
/// visibility resolution, and returns the five face states in drawing order.
#[must_use]
pub fn resolve_frame(points: &CubePoints, config: &OverlayConfig) -> [FaceRenderState; FACE_COUNT] {
    let mut faces = CubeFaces::new(config.palette());
    let resolved = run_resolution(&mut faces, points, config);
    snapshot(resolved.faces())
}

/// Runs every stage up to, but not including, drawing.
pub(crate) fn run_resolution<'a>(
    faces: &'a mut CubeFaces,
    points: &CubePoints,
    config: &OverlayConfig,
) -> ResolvedCube<'a> {
    let assembled = AssembleFaces::new(points).execute(faces);
    let positioned = ResolvePositions::new()
        .with_tolerance(config.edge_tolerance())
        .execute(assembled);
    ResolveVisibility::new().execute(positioned)
}

pub(crate) fn snapshot(faces: &CubeFaces) -> [FaceRenderState; FACE_COUNT] {
    faces.faces().each_ref().map(FaceRenderState::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cube::TOP_FACE_INDEX;
    use crate::render::Framebuffer;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    /// A cube seen from the front and above: the front wall fills the lower
    /// half, the top recedes upward, and the side walls are hidden behind
    /// the front and the top.
    fn front_view() -> CubePoints {
        CubePoints::new([
            p(100.0, 300.0),
            p(300.0, 300.0),
            p(280.0, 220.0),
            p(120.0, 220.0),
            p(100.0, 100.0),
            p(300.0, 100.0),
            p(280.0, 40.0),
            p(120.0, 40.0),
        ])
    }

    /// Cube rotated so the right wall is visible beside the front.
    fn rotated_view() -> CubePoints {
        CubePoints::new([
            p(100.0, 300.0),
            p(250.0, 320.0),
            p(340.0, 260.0),
            p(200.0, 245.0),
            p(100.0, 120.0),
            p(250.0, 140.0),
            p(340.0, 80.0),
            p(200.0, 65.0),
        ])
    }

    #[test]
    fn front_view_shows_only_front_and_top() {
        let states = resolve_frame(&front_view(), &OverlayConfig::default());
        let positions: Vec<Position> = states.iter().map(|s| s.position).collect();
        assert_eq!(
            positions,
            vec![
                Position::Front,
                Position::Right,
                Position::Back,
                Position::Left,
                Position::Top
            ]
        );
        let drawn: Vec<bool> = states.iter().map(|s| s.should_draw).collect();
        assert_eq!(drawn, vec![true, false, false, false, true]);
    }

    #[test]
    fn rotated_view_reveals_right_wall() {
        let states = resolve_frame(&rotated_view(), &OverlayConfig::default());
        assert_eq!(states[0].position, Position::Front);
        assert_eq!(states[1].position, Position::Right);
        assert!(states[1].is_shown);
        assert_eq!(states[3].position, Position::Left);
        assert!(!states[3].is_shown);
        assert_eq!(states[2].position, Position::Back);
        assert!(!states[2].should_draw);
    }

    #[test]
    fn exactly_one_front_and_one_top() {
        for points in [front_view(), rotated_view()] {
            let states = resolve_frame(&points, &OverlayConfig::default());
            let count = |pos| states.iter().filter(|s| s.position == pos).count();
            assert_eq!(count(Position::Front), 1);
            assert_eq!(count(Position::Top), 1);
            assert!(count(Position::Left) <= 1);
            assert!(count(Position::Right) <= 1);
            assert_eq!(count(Position::Nothing), 0);
        }
    }

    #[test]
    fn collapsed_cube_resolves_without_fault() {
        let q = p(50.0, 50.0);
        let states = resolve_frame(&CubePoints::new([q; 8]), &OverlayConfig::default());
        for state in &states {
            assert_eq!(state.centroid, q);
        }
        assert_eq!(states[0].position, Position::Front);
        assert!(states[TOP_FACE_INDEX].should_draw);
    }

    #[test]
    fn stages_run_independently() {
        let config = OverlayConfig::default();
        let mut faces = CubeFaces::new(config.palette());
        let points = front_view();

        let assembled = AssembleFaces::new(&points).execute(&mut faces);
        assert_eq!(assembled.stage(), Stage::Assemble);
        assert!(assembled
            .faces()
            .lateral()
            .iter()
            .all(|f| f.position() == Position::Nothing));

        let positioned = ResolvePositions::new().execute(assembled);
        assert_eq!(positioned.stage(), Stage::ResolvePositions);
        assert_eq!(positioned.front(), Some(0));
        assert_eq!(positioned.front_contour().len(), 4);
        assert!(positioned.faces().iter().all(|f| !f.is_shown()));

        let resolved = ResolveVisibility::new().execute(positioned);
        assert_eq!(resolved.stage(), Stage::ResolveVisibility);
        assert!(resolved.faces().faces()[0].is_shown());

        let draw = DrawCube::new(config.outline());
        assert_eq!(draw.stage(), Stage::Draw);
        assert!(Stage::ResolveVisibility < draw.stage());
    }

    #[test]
    fn draw_stage_keeps_resolved_visibility() {
        let config = OverlayConfig::default();
        let mut faces = CubeFaces::new(&crate::cube::FacePalette::default());
        let mut resolved = run_resolution(&mut faces, &rotated_view(), &config);
        let before = snapshot(resolved.faces());

        let mut fb = Framebuffer::new(400, 400).unwrap();
        let drawn = DrawCube::new(config.outline()).execute(&mut resolved, &mut fb);

        assert_eq!(snapshot(resolved.faces()), before);
        assert_eq!(drawn, before.iter().filter(|s| s.should_draw).count());
        assert_eq!(drawn, 3);
    }

    #[test]
    fn visibility_stage_without_front_shows_sides() {
        let mut faces = CubeFaces::new(&crate::cube::FacePalette::default());
        faces.rewrite(&front_view());
        faces.lateral_mut()[1].set_position(Position::Left);
        faces.lateral_mut()[3].set_position(Position::Right);

        let positioned = PositionedCube::new(&mut faces, None);
        assert!(positioned.front_contour().is_empty());

        let resolved = ResolveVisibility::new().execute(positioned);
        let lateral = resolved.faces().lateral();
        assert!(lateral[1].is_shown());
        assert!(lateral[3].is_shown());
        assert!(!lateral[0].is_shown());
    }
}
