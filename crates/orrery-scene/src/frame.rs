//! The per-frame body walk.
//!
//! Positions are a pure function of elapsed time and the static body
//! table; there is no persisted simulation state, which makes a frame
//! trivially reproducible for a given `t`.

use glam::Mat4;

use crate::bodies::{satellite_of, BodyRole, CelestialBody};
use crate::transform::{
    display_params, model_matrix, normal_matrix, satellite_matrix, satellite_params,
};

/// The named shader matrices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Uniform {
    Model,
    Normal,
    View,
    Projection,
}

/// Where per-body uniform uploads and draw calls land. The renderer
/// backs this with the GPU queue; tests substitute a recording fake.
///
/// A sink that has no binding for a given uniform ignores the upload
/// rather than treating it as an error.
pub trait DrawSink {
    fn set_matrix(&mut self, uniform: Uniform, value: Mat4);

    /// Issue one indexed draw of the shared sphere mesh with the
    /// uniforms uploaded since the previous draw.
    fn draw(&mut self);
}

/// Walk the body table once for time `t`, emitting model and normal
/// matrices plus one draw per body into `sink`.
///
/// Satellites are skipped by the main iteration and drawn immediately
/// after their parent, composed on the parent's rotation-only frame.
/// `camera_pose` is the camera's world pose, needed for the normal
/// matrices; view/projection uniforms are managed outside this walk.
pub fn draw_bodies(bodies: &[CelestialBody], camera_pose: Mat4, t: f64, sink: &mut dyn DrawSink) {
    for (index, body) in bodies.iter().enumerate() {
        if matches!(body.role, BodyRole::Satellite { .. }) {
            continue;
        }

        let params = display_params(body);
        submit(camera_pose, model_matrix(&params, t), sink);

        if let Some(sat_index) = satellite_of(bodies, index) {
            let sat = satellite_params(&bodies[sat_index]);
            submit(camera_pose, satellite_matrix(&params, &sat, t), sink);
        }
    }
}

fn submit(camera_pose: Mat4, model: Mat4, sink: &mut dyn DrawSink) {
    sink.set_matrix(Uniform::Model, model);
    sink.set_matrix(Uniform::Normal, normal_matrix(camera_pose, model));
    sink.draw();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{Body, BODIES};
    use glam::Vec3;

    #[derive(Debug, PartialEq)]
    enum Event {
        Set(Uniform, Mat4),
        Draw,
    }

    #[derive(Default)]
    struct RecordingSink {
        events: Vec<Event>,
    }

    impl DrawSink for RecordingSink {
        fn set_matrix(&mut self, uniform: Uniform, value: Mat4) {
            self.events.push(Event::Set(uniform, value));
        }

        fn draw(&mut self) {
            self.events.push(Event::Draw);
        }
    }

    fn record(t: f64) -> RecordingSink {
        let mut sink = RecordingSink::default();
        draw_bodies(&BODIES, Mat4::from_translation(Vec3::new(0.0, 0.0, 30.0)), t, &mut sink);
        sink
    }

    #[test]
    fn one_draw_per_body_in_table_order() {
        let sink = record(3.0);
        let draws = sink.events.iter().filter(|e| **e == Event::Draw).count();
        assert_eq!(draws, BODIES.len());
    }

    #[test]
    fn every_draw_is_preceded_by_model_then_normal() {
        let sink = record(1.5);
        for chunk in sink.events.chunks(3) {
            assert!(matches!(chunk[0], Event::Set(Uniform::Model, _)));
            assert!(matches!(chunk[1], Event::Set(Uniform::Normal, _)));
            assert_eq!(chunk[2], Event::Draw);
        }
    }

    #[test]
    fn satellite_is_drawn_right_after_its_parent() {
        let t = 2.0;
        let sink = record(t);

        let models: Vec<Mat4> = sink
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Set(Uniform::Model, m) => Some(*m),
                _ => None,
            })
            .collect();
        assert_eq!(models.len(), BODIES.len());

        // Table order with the Moon folded in behind Earth: Sun,
        // Mercury, Venus, Earth, Moon, Mars, ...
        let earth = BODIES.iter().find(|b| b.body == Body::Earth).unwrap();
        let moon = BODIES.iter().find(|b| b.body == Body::Moon).unwrap();
        let earth_params = display_params(earth);

        assert!(models[3].abs_diff_eq(model_matrix(&earth_params, t), 1e-6));
        assert!(models[4].abs_diff_eq(
            satellite_matrix(&earth_params, &satellite_params(moon), t),
            1e-6
        ));
    }

    #[test]
    fn central_body_model_is_pure_scale() {
        let sink = record(42.0);
        let first_model = sink
            .events
            .iter()
            .find_map(|e| match e {
                Event::Set(Uniform::Model, m) => Some(*m),
                _ => None,
            })
            .unwrap();

        let sun = display_params(&BODIES[0]);
        assert!(first_model.abs_diff_eq(Mat4::from_scale(Vec3::splat(sun.size as f32)), 1e-6));
    }
}
