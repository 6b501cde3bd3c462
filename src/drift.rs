//! Slow background particles shared by every page.
//!
//! Generation is a pure function of the particle index so the server-rendered
//! markup and the hydrated client agree without passing any state across.

pub const PARTICLE_COUNT: usize = 20;

/// Deterministic value in [0, 1) for `seed`: the fractional part of `sin(seed) * 10000`.
pub fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10000.0;
    x - x.floor()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftParticle {
    pub id: usize,
    /// Horizontal position, percent of the container.
    pub x: f64,
    /// Vertical position, percent of the container.
    pub y: f64,
    /// Diameter in px, 2..6.
    pub size: f64,
    /// Seconds per rise-and-return cycle, 15..35.
    pub duration: f64,
    /// Seconds before the first cycle, 0..5.
    pub delay: f64,
    /// Sideways sway at the top of the cycle in px, -25..25.
    pub move_x: f64,
}

impl DriftParticle {
    pub fn new(id: usize) -> Self {
        let i = id as f64;
        Self {
            id,
            x: seeded_random(i * 1.1) * 100.0,
            y: seeded_random(i * 2.3) * 100.0,
            size: seeded_random(i * 3.7) * 4.0 + 2.0,
            duration: seeded_random(i * 5.1) * 20.0 + 15.0,
            delay: seeded_random(i * 7.3) * 5.0,
            move_x: seeded_random(i * 9.7) * 50.0 - 25.0,
        }
    }
}

pub fn particles(count: usize) -> Vec<DriftParticle> {
    (0..count).map(DriftParticle::new).collect()
}
