//! Per-frame face labelling: which lateral face is the front, which are its
//! neighbours, and which of them the camera can actually see.

pub mod position;
pub mod visibility;

pub use position::{EdgeTolerance, ResolvePositions};
pub use visibility::{is_face_shown, ResolveVisibility};
