//! Display-space rescaling and per-body transform construction.
//!
//! The rescaling curves are ad hoc monotone compressions chosen so
//! that astronomically large ratios between raw magnitudes land in a
//! visually tractable range. They carry no physical meaning; the
//! constants are part of the system's observable behavior and must
//! not be tuned casually.

use glam::{Mat4, Vec3};

use crate::bodies::{BodyRole, CelestialBody};

/// Per-frame display-space scalars derived from a body's raw
/// attributes. Recomputed every frame, never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayParams {
    /// Uniform scale applied to the unit sphere.
    pub size: f64,
    /// Orbital radius in world units.
    pub distance: f64,
    /// Orbital angular rate in radians per second.
    pub speed: f64,
}

/// Display scalars for a primary body.
///
/// The central body is pinned to the origin: distance and speed are
/// forced to zero regardless of its raw attributes, so it neither
/// orbits itself nor feeds a near-1 distance into the log curve.
pub fn display_params(body: &CelestialBody) -> DisplayParams {
    let size = body.size.ln().powi(2) / 200.0;
    let (distance, speed) = match body.role {
        BodyRole::Central => (0.0, 0.0),
        _ => (
            body.distance.ln().powi(2) / 2.0 - 5.0,
            body.speed.ln() / 3.0,
        ),
    };
    DisplayParams {
        size,
        distance,
        speed,
    }
}

/// Display scalars for a satellite, which follows a different curve
/// from primaries: linear distance, un-squared log size, doubled raw
/// speed (applied retrograde by [`satellite_matrix`]).
pub fn satellite_params(body: &CelestialBody) -> DisplayParams {
    DisplayParams {
        size: body.size.ln() / 20.0,
        distance: body.distance * 5.0,
        speed: body.speed * 2.0,
    }
}

/// Orbital rotation about the vertical world axis at time `t`.
pub fn orbit_rotation(params: &DisplayParams, t: f64) -> Mat4 {
    Mat4::from_rotation_y((params.speed * t) as f32)
}

/// Model matrix for a primary body at time `t`.
///
/// Composition order is load-bearing: rotate, then translate along
/// local Z, then scale. Rotation first makes the translation act as
/// an orbital radius around the vertical axis; scale last keeps body
/// size from stretching that radius.
pub fn model_matrix(params: &DisplayParams, t: f64) -> Mat4 {
    orbit_rotation(params, t)
        * Mat4::from_translation(Vec3::new(0.0, 0.0, params.distance as f32))
        * Mat4::from_scale(Vec3::splat(params.size as f32))
}

/// Model matrix for a satellite at time `t`.
///
/// Starts from the parent's rotation-only frame (post rotation, pre
/// the parent's own translate/scale), then applies the satellite's
/// own rotate/translate/scale with the rotation sign negated, giving
/// retrograde-looking motion inside the parent's orbital plane.
pub fn satellite_matrix(parent: &DisplayParams, sat: &DisplayParams, t: f64) -> Mat4 {
    orbit_rotation(parent, t)
        * Mat4::from_rotation_y((-sat.speed * t) as f32)
        * Mat4::from_translation(Vec3::new(0.0, 0.0, sat.distance as f32))
        * Mat4::from_scale(Vec3::splat(sat.size as f32))
}

/// Normal matrix: inverse-transpose of the model-view product, so
/// surface normals stay perpendicular to transformed surfaces even
/// under non-uniform model scaling.
///
/// `camera_pose` is the camera's world pose, not the view matrix; it
/// is inverted here.
pub fn normal_matrix(camera_pose: Mat4, model: Mat4) -> Mat4 {
    (camera_pose.inverse() * model).inverse().transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{Body, BodyRole, BODIES};
    use std::f64::consts::{E, FRAC_PI_2};

    const EPS: f32 = 1e-5;

    #[test]
    fn model_at_t0_is_translate_then_scale() {
        let params = DisplayParams {
            size: 0.4,
            distance: 7.0,
            speed: 1.3,
        };
        let expected = Mat4::from_translation(Vec3::new(0.0, 0.0, 7.0))
            * Mat4::from_scale(Vec3::splat(0.4));
        assert!(model_matrix(&params, 0.0).abs_diff_eq(expected, EPS));
    }

    #[test]
    fn central_body_never_leaves_the_origin() {
        let sun = &BODIES[0];
        assert_eq!(sun.role, BodyRole::Central);

        let params = display_params(sun);
        assert_eq!(params.distance, 0.0);
        assert_eq!(params.speed, 0.0);

        for t in [0.0, 1.0, 17.5, 4000.0] {
            let model = model_matrix(&params, t);
            let expected = Mat4::from_scale(Vec3::splat(params.size as f32));
            assert!(model.abs_diff_eq(expected, EPS), "t = {t}");
            assert_eq!(model.w_axis.truncate(), glam::Vec3::ZERO, "t = {t}");
        }
    }

    #[test]
    fn visual_size_is_monotonic_above_one() {
        let sizes = [1.5, 2.0, 10.0, 1e3, 1e6, 1e9];
        let mut previous = f64::NEG_INFINITY;
        for raw in sizes {
            let body = CelestialBody {
                body: Body::Mercury,
                size: raw,
                distance: 10.0,
                speed: 10.0,
                role: BodyRole::Standard,
            };
            let visual = display_params(&body).size;
            assert!(visual > previous, "size {raw} -> {visual}");
            previous = visual;
        }
    }

    #[test]
    fn normal_matrix_preserves_tangent_orthogonality() {
        // Non-uniform model so the raw model matrix would visibly
        // break normal orthogonality.
        let model = Mat4::from_rotation_z(0.7) * Mat4::from_scale(Vec3::new(2.0, 1.0, 0.25));
        let pose = Mat4::from_translation(Vec3::new(3.0, -1.0, 8.0)) * Mat4::from_rotation_y(0.4);

        let normal = normal_matrix(pose, model);
        let view = pose.inverse();

        // Top face of a cube: normal +Y, tangents X and Z.
        let n = Vec3::Y;
        for tangent in [Vec3::X, Vec3::Z] {
            let moved_tangent = (view * model).transform_vector3(tangent);
            let moved_normal = normal.transform_vector3(n);
            let cos = moved_normal.normalize().dot(moved_tangent.normalize());
            assert!(cos.abs() < 1e-5, "residual {cos}");
        }
    }

    #[test]
    fn composition_order_is_rotate_translate_scale() {
        let params = DisplayParams {
            size: 3.0,
            distance: 6.0,
            speed: 0.9,
        };
        let t = 2.25;
        let angle = (params.speed * t) as f32;

        let expected = Mat4::from_rotation_y(angle)
            * Mat4::from_translation(Vec3::new(0.0, 0.0, 6.0))
            * Mat4::from_scale(Vec3::splat(3.0));
        let model = model_matrix(&params, t);
        assert!(model.abs_diff_eq(expected, EPS));

        // Swapping translate before rotate would leave the same
        // matrix only for zero angle; make sure we notice.
        let swapped = Mat4::from_translation(Vec3::new(0.0, 0.0, 6.0))
            * Mat4::from_rotation_y(angle)
            * Mat4::from_scale(Vec3::splat(3.0));
        assert!(!model.abs_diff_eq(swapped, EPS));

        // Scale last: the orbital radius is independent of body size.
        let radius = model.w_axis.truncate().length();
        assert!((radius - 6.0).abs() < 1e-4, "radius {radius}");
    }

    #[test]
    fn all_e_central_body_reduces_to_scale_one_two_hundredth() {
        let body = CelestialBody {
            body: Body::Sun,
            size: E,
            distance: E,
            speed: E,
            role: BodyRole::Central,
        };
        let params = display_params(&body);
        let model = model_matrix(&params, 0.0);
        assert!(model.abs_diff_eq(Mat4::from_scale(Vec3::splat(1.0 / 200.0)), 1e-7));
    }

    #[test]
    fn satellite_orbits_in_the_parents_rotated_frame() {
        let sat = DisplayParams {
            size: 1.0,
            distance: 2.0,
            speed: 0.0,
        };

        // Parent at rest: satellite sits on +Z.
        let resting = DisplayParams {
            size: 1.0,
            distance: 4.0,
            speed: 0.0,
        };
        let at_rest = satellite_matrix(&resting, &sat, 1.0).w_axis.truncate();
        assert!(at_rest.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), EPS));

        // Parent rotated 90 degrees: the whole orbital plane follows.
        let turning = DisplayParams {
            speed: FRAC_PI_2,
            ..resting
        };
        let turned = satellite_matrix(&turning, &sat, 1.0).w_axis.truncate();
        assert!(turned.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn satellite_curve_differs_from_primary_curve() {
        let moon = BODIES
            .iter()
            .find(|b| b.body == Body::Moon)
            .copied()
            .unwrap();
        let params = satellite_params(&moon);

        assert!((params.size - moon.size.ln() / 20.0).abs() < 1e-12);
        assert!((params.distance - moon.distance * 5.0).abs() < 1e-12);
        assert!((params.speed - moon.speed * 2.0).abs() < 1e-12);
    }
}
