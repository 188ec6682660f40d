//! Camera view state and the discrete movement commands that mutate it.

use glam::{Mat4, Vec3};

/// How far back the camera starts so the whole system is in frame.
/// The pose is otherwise identity (no initial rotation).
const START_DISTANCE: f32 = 30.0;

/// The camera's pose in world space. Note this is the pose itself,
/// not the view matrix; scene geometry is expressed in camera space,
/// so the pose is inverted on the way to the GPU.
///
/// Created once at startup and mutated in place for the life of the
/// process by discrete translations. No bounds are enforced.
#[derive(Clone, Copy, Debug)]
pub struct ViewState {
    pose: Mat4,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            pose: Mat4::from_translation(Vec3::new(0.0, 0.0, START_DISTANCE)),
        }
    }

    /// Compose a translation on the right: the delta moves the camera
    /// along its own local axes, not world axes.
    pub fn apply_translation(&mut self, delta: Vec3) {
        self.pose *= Mat4::from_translation(delta);
    }

    /// World pose, for normal-matrix construction.
    pub fn pose(&self) -> Mat4 {
        self.pose
    }

    /// The matrix actually uploaded as the view uniform: the inverse
    /// of the stored pose.
    pub fn view_matrix(&self) -> Mat4 {
        self.pose.inverse()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// The six recognized movement commands. Magnitudes are asymmetric on
/// purpose: 0.1 units along the view axis, a full unit laterally and
/// vertically, matching the original program's tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraCommand {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl CameraCommand {
    /// Translation delta in the camera's local frame.
    pub fn delta(self) -> Vec3 {
        match self {
            Self::Forward => Vec3::new(0.0, 0.0, -0.1),
            Self::Back => Vec3::new(0.0, 0.0, 0.1),
            Self::Left => Vec3::new(-1.0, 0.0, 0.0),
            Self::Right => Vec3::new(1.0, 0.0, 0.0),
            Self::Up => Vec3::new(0.0, 1.0, 0.0),
            Self::Down => Vec3::new(0.0, -1.0, 0.0),
        }
    }
}

/// Perspective projection, fixed at startup and rebuilt on resize.
/// Read-only to the scene core.
#[derive(Clone, Copy, Debug)]
pub struct ProjectionState {
    matrix: Mat4,
}

impl ProjectionState {
    pub fn perspective(aspect: f32) -> Self {
        Self {
            matrix: Mat4::perspective_rh(45.0_f32.to_radians(), aspect.max(1e-6), 0.1, 1000.0),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}
