//! Static configuration for the celestial bodies.
//!
//! Radii and gravitational parameters are real solar-system values; orbits
//! are circular rails at each body's mean motion, all phases zero at the
//! launch epoch. Terrain and atmosphere parameters are physical body
//! attributes consumed by collision (and by renderers, out of scope here).

use std::f64::consts::TAU;

use bevy::math::DVec2;

/// Identifier for the bodies in the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
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

impl BodyId {
    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Moon => "Moon",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
        }
    }
}

/// How a body's center moves.
#[derive(Clone, Copy, Debug)]
pub enum OrbitMode {
    /// Constant position, zero center velocity.
    Fixed { pos: DVec2 },
    /// Closed-form ellipse around an earlier body in declaration order.
    ///
    /// This is kinematic, not dynamic: the body rides the curve regardless
    /// of any gravity. Equal axes give a circular orbit.
    Rails {
        /// Index of the body the ellipse is centered on; must be declared
        /// before this body (validated by the registry).
        parent: usize,
        /// Semi-major axis A (m), along x
        semi_major: f64,
        /// Semi-minor axis B (m), along y
        semi_minor: f64,
        /// Angular rate ω (rad/s)
        angular_rate: f64,
        /// Phase offset at the epoch (rad)
        phase: f64,
    },
}

/// Immutable physical and orbital configuration of one body.
#[derive(Clone, Debug)]
pub struct BodyConfig {
    pub id: BodyId,
    /// Spherical radius (m)
    pub radius: f64,
    /// Standard gravitational parameter μ = GM (m³/s²)
    pub mu: f64,
    /// Terrain amplitude (m); ≤ 0 means a smooth sphere
    pub terrain_amp: f64,
    /// Fundamental terrain wavelength (m), floored at 1
    pub terrain_wavelength: f64,
    /// Atmosphere shell thickness (m), floored at 0; never affects physics
    pub atm_thickness: f64,
    /// Force a perfect sphere even with nonzero terrain amplitude
    pub smooth_surface: bool,
    pub orbit: OrbitMode,
}

impl BodyConfig {
    /// New airless, smooth-sphere body; terrain and atmosphere are opt-in.
    pub fn new(id: BodyId, radius: f64, mu: f64, orbit: OrbitMode) -> Self {
        Self {
            id,
            radius,
            mu,
            terrain_amp: 0.0,
            terrain_wavelength: 1.0,
            atm_thickness: 0.0,
            smooth_surface: false,
            orbit,
        }
    }

    /// Add band-limited terrain. Wavelength floors at 1 m.
    pub fn with_terrain(mut self, amp: f64, wavelength: f64) -> Self {
        self.terrain_amp = amp;
        self.terrain_wavelength = wavelength.max(1.0);
        self
    }

    /// Add an atmosphere shell (rendering attribute). Thickness floors at 0.
    pub fn with_atmosphere(mut self, thickness: f64) -> Self {
        self.atm_thickness = thickness.max(0.0);
        self
    }

    /// Keep the surface a perfect sphere regardless of terrain amplitude.
    pub fn smooth(mut self) -> Self {
        self.smooth_surface = true;
        self
    }

    /// Orbital period (s), for rails orbits with a nonzero rate.
    pub fn orbit_period(&self) -> Option<f64> {
        match self.orbit {
            OrbitMode::Rails { angular_rate, .. } if angular_rate != 0.0 => {
                Some(TAU / angular_rate)
            }
            _ => None,
        }
    }
}

/// The stock Sun-centric system: eight planets on circular rails around a
/// fixed Sun, plus the Moon around Earth (the one depth-2 chain).
///
/// Earth is flagged smooth: with its dense atmosphere the surface stays an
/// unperturbed sphere even though a terrain amplitude is configured.
pub fn solar_system() -> Vec<BodyConfig> {
    const SUN: usize = 0;
    const EARTH: usize = 3;

    /// Circular rails around `parent` with radius `a` meters at `omega` rad/s.
    fn rails(parent: usize, a: f64, omega: f64) -> OrbitMode {
        OrbitMode::Rails {
            parent,
            semi_major: a,
            semi_minor: a,
            angular_rate: omega,
            phase: 0.0,
        }
    }

    vec![
        BodyConfig::new(
            BodyId::Sun,
            696_340_000.0,
            1.32712440018e20,
            OrbitMode::Fixed { pos: DVec2::ZERO },
        )
        .with_atmosphere(13_115_806.0),
        BodyConfig::new(
            BodyId::Mercury,
            2_439_700.0,
            2.2032e13,
            rails(SUN, 57_909_227_000.0, 8.266772328741615e-7),
        )
        .with_terrain(800.0, 5000.0),
        BodyConfig::new(
            BodyId::Venus,
            6_051_800.0,
            3.24859e14,
            rails(SUN, 108_209_475_000.0, 3.2363920127827824e-7),
        )
        .with_terrain(500.0, 5000.0),
        BodyConfig::new(
            BodyId::Earth,
            6_371_000.0,
            3.986004418e14,
            rails(SUN, 149_597_870_700.0, 1.9909865927683785e-7),
        )
        .with_terrain(1000.0, 5000.0)
        .with_atmosphere(120_000.0)
        .smooth(),
        BodyConfig::new(
            BodyId::Moon,
            1_737_400.0,
            4.9048695e12,
            rails(EARTH, 384_400_000.0, 2.6616995272150692e-6),
        )
        .with_terrain(800.0, 5000.0),
        BodyConfig::new(
            BodyId::Mars,
            3_389_500.0,
            4.282837e13,
            rails(SUN, 227_939_200_000.0, 1.0585759726109988e-7),
        )
        .with_terrain(1200.0, 8000.0),
        BodyConfig::new(
            BodyId::Jupiter,
            69_911_000.0,
            1.26686534e17,
            rails(SUN, 778_299_000_000.0, 1.678489516693838e-8),
        ),
        BodyConfig::new(
            BodyId::Saturn,
            58_232_000.0,
            3.7931187e16,
            rails(SUN, 1_433_449_370_000.0, 6.759045002001111e-9),
        ),
        BodyConfig::new(
            BodyId::Uranus,
            25_362_000.0,
            5.793939e15,
            rails(SUN, 2_872_466_000_000.0, 2.3699235521267574e-9),
        ),
        BodyConfig::new(
            BodyId::Neptune,
            24_622_000.0,
            6.836529e15,
            rails(SUN, 4_495_060_000_000.0, 1.2082282836802472e-9),
        ),
    ]
}
