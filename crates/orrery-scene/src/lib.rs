//! Scene core for the orrery: the static body table, the display-space
//! rescaling of raw astronomical magnitudes, per-frame transform
//! construction, and camera view state.
//!
//! Nothing in this crate touches the GPU. Per-frame output is emitted
//! through the [`frame::DrawSink`] trait so the transform pipeline can
//! be exercised against a recording sink in tests.

pub mod bodies;
pub mod camera;
pub mod frame;
pub mod transform;

pub use bodies::{Body, BodyRole, CelestialBody, BODIES, BODY_COUNT};
pub use camera::{CameraCommand, ProjectionState, ViewState};
pub use frame::{draw_bodies, DrawSink, Uniform};
pub use transform::{
    display_params, model_matrix, normal_matrix, satellite_matrix, satellite_params,
    DisplayParams,
};
