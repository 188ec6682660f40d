//! Static celestial body table.
//!
//! Raw magnitudes are real-world figures (NASA fact sheets): radii in
//! km, orbital radii in 10^6 km, orbital speeds in km/s. The renderer
//! never uses them directly; they pass through the display rescaling
//! in [`crate::transform`] to compress their huge dynamic range into
//! something that fits on screen.
//!
//! Every size/distance/speed must be strictly positive: the rescaling
//! takes logarithms and the table is trusted, not runtime-checked.

/// Body identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }
}

/// How a body participates in the orbit system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyRole {
    /// Sits at the system origin; exempt from orbital motion.
    Central,
    /// Orbits the central body in the world frame.
    Standard,
    /// Orbits in the rotated frame of the body at `parent` in the
    /// table; skipped by the main per-frame iteration and drawn as an
    /// attachment to its parent instead.
    Satellite { parent: usize },
}

#[derive(Clone, Copy, Debug)]
pub struct CelestialBody {
    pub body: Body,
    /// Mean radius (km)
    pub size: f64,
    /// Orbital radius (10^6 km)
    pub distance: f64,
    /// Mean orbital speed (km/s)
    pub speed: f64,
    pub role: BodyRole,
}

pub const BODY_COUNT: usize = 10;

/// The fixed ten-body system. Table order is draw order. The Sun's
/// distance/speed are placeholders near 1; its `Central` role zeroes
/// both before any log can blow up on them.
pub const BODIES: [CelestialBody; BODY_COUNT] = [
    CelestialBody {
        body: Body::Sun,
        size: 696_000.0,
        distance: 1.0,
        speed: 1.0,
        role: BodyRole::Central,
    },
    CelestialBody {
        body: Body::Mercury,
        size: 2_439.7,
        distance: 57.9,
        speed: 47.4,
        role: BodyRole::Standard,
    },
    CelestialBody {
        body: Body::Venus,
        size: 6_051.8,
        distance: 108.2,
        speed: 35.0,
        role: BodyRole::Standard,
    },
    CelestialBody {
        body: Body::Earth,
        size: 6_371.0,
        distance: 149.6,
        speed: 29.8,
        role: BodyRole::Standard,
    },
    CelestialBody {
        body: Body::Moon,
        size: 1_737.4,
        distance: 0.384,
        speed: 1.0,
        role: BodyRole::Satellite { parent: 3 },
    },
    CelestialBody {
        body: Body::Mars,
        size: 3_389.5,
        distance: 228.0,
        speed: 24.1,
        role: BodyRole::Standard,
    },
    CelestialBody {
        body: Body::Jupiter,
        size: 69_911.0,
        distance: 778.5,
        speed: 13.1,
        role: BodyRole::Standard,
    },
    CelestialBody {
        body: Body::Saturn,
        size: 58_232.0,
        distance: 1_432.0,
        speed: 9.7,
        role: BodyRole::Standard,
    },
    CelestialBody {
        body: Body::Uranus,
        size: 25_362.0,
        distance: 2_867.0,
        speed: 6.8,
        role: BodyRole::Standard,
    },
    CelestialBody {
        body: Body::Neptune,
        size: 24_622.0,
        distance: 4_515.0,
        speed: 5.4,
        role: BodyRole::Standard,
    },
];

/// Index of the body orbiting `parent`, if any. The table carries at
/// most one satellite per parent.
pub fn satellite_of(bodies: &[CelestialBody], parent: usize) -> Option<usize> {
    bodies
        .iter()
        .position(|b| b.role == BodyRole::Satellite { parent })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_exactly_one_central_body() {
        let centrals = BODIES
            .iter()
            .filter(|b| b.role == BodyRole::Central)
            .count();
        assert_eq!(centrals, 1);
    }

    #[test]
    fn satellite_parents_are_valid_non_satellites() {
        for body in &BODIES {
            if let BodyRole::Satellite { parent } = body.role {
                assert!(parent < BODIES.len());
                assert!(!matches!(BODIES[parent].role, BodyRole::Satellite { .. }));
            }
        }
    }

    #[test]
    fn all_raw_attributes_are_positive() {
        for body in &BODIES {
            assert!(body.size > 0.0, "{} size", body.body.name());
            assert!(body.distance > 0.0, "{} distance", body.body.name());
            assert!(body.speed > 0.0, "{} speed", body.body.name());
        }
    }

    #[test]
    fn moon_is_earths_satellite() {
        let earth = BODIES
            .iter()
            .position(|b| b.body == Body::Earth)
            .unwrap();
        let moon = satellite_of(&BODIES, earth).unwrap();
        assert_eq!(BODIES[moon].body, Body::Moon);

        let mars = BODIES.iter().position(|b| b.body == Body::Mars).unwrap();
        assert_eq!(satellite_of(&BODIES, mars), None);
    }
}
