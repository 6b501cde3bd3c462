//! Cursor-reactive dot field.
//!
//! A [`DotField`] owns one generation of grid points plus the spring state
//! that smooths each point's reaction to the pointer. The UI drives it once
//! per animation frame with [`DotField::step`] and reads [`DotField::frames`]
//! to render; a container resize calls [`DotField::regenerate`], which swaps
//! the whole point set.

pub mod force;
pub mod grid;
pub mod oscillator;
pub mod spring;

pub use force::{force, Force, Pointer};
pub use grid::{generate, Point, PointId, Vec2};
pub use oscillator::Breath;
pub use spring::{Spring, SpringConfig};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub spacing: f64,
    pub dot_size: f64,
    pub repulsion_radius: f64,
    pub repulsion_strength: f64,
    pub position_spring: SpringConfig,
    pub opacity_spring: SpringConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            spacing: 20.0,
            dot_size: 3.0,
            repulsion_radius: 100.0,
            repulsion_strength: 25.0,
            position_spring: SpringConfig::POSITION,
            opacity_spring: SpringConfig::OPACITY,
        }
    }
}

/// Render state of one dot for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotFrame {
    pub id: PointId,
    pub left: f64,
    pub top: f64,
    pub dx: f64,
    pub dy: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone)]
struct DotState {
    breath: Breath,
    x: Spring,
    y: Spring,
    floor: Spring,
}

impl DotState {
    fn new(point: &Point, index: usize, config: &FieldConfig) -> Self {
        let breath = Breath::new(point.base_opacity(), index);
        Self {
            breath,
            x: Spring::new(config.position_spring, 0.0),
            y: Spring::new(config.position_spring, 0.0),
            floor: Spring::new(config.opacity_spring, breath.min),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DotField {
    config: FieldConfig,
    rng: ChaCha8Rng,
    size: (f64, f64),
    points: Vec<Point>,
    states: Vec<DotState>,
    elapsed: f64,
}

impl DotField {
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            size: (0.0, 0.0),
            points: Vec::new(),
            states: Vec::new(),
            elapsed: 0.0,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    /// Replaces the point set for a container of `width` x `height`.
    ///
    /// Spring state starts fresh; nothing from the previous generation survives.
    pub fn regenerate(&mut self, width: f64, height: f64) {
        let points = generate(width, height, self.config.spacing, &mut self.rng);
        let states = points
            .iter()
            .enumerate()
            .map(|(i, p)| DotState::new(p, i, &self.config))
            .collect();
        self.size = (width, height);
        self.points = points;
        self.states = states;
    }

    /// Advances time by `dt` seconds and pulls every dot toward its target for `pointer`.
    pub fn step(&mut self, dt: f64, pointer: Pointer) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        let FieldConfig {
            repulsion_radius,
            repulsion_strength,
            ..
        } = self.config;
        for (point, state) in self.points.iter().zip(self.states.iter_mut()) {
            let f = force(point, pointer, repulsion_radius, repulsion_strength);
            state.x.follow(f.dx, dt);
            state.y.follow(f.dy, dt);
            state
                .floor
                .follow((state.breath.min + f.opacity_boost).min(1.0), dt);
        }
    }

    pub fn frames(&self) -> Vec<DotFrame> {
        self.points
            .iter()
            .zip(self.states.iter())
            .map(|(point, state)| DotFrame {
                id: point.id(),
                left: point.base().x,
                top: point.base().y,
                dx: state.x.value(),
                dy: state.y.value(),
                opacity: state.breath.opacity(state.floor.value(), self.elapsed),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn field() -> DotField {
        let mut field = DotField::new(FieldConfig::default(), 1234);
        field.regenerate(600.0, 240.0);
        field
    }

    #[test]
    fn test_empty_before_measurement() {
        let mut field = DotField::new(FieldConfig::default(), 1);
        field.step(FRAME, Pointer::at(10.0, 10.0));
        assert!(field.is_empty());
        assert!(field.frames().is_empty());
        field.regenerate(0.0, 0.0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_regenerate_replaces_points() {
        let mut field = field();
        let before = field.points().to_vec();
        assert!(!before.is_empty());
        field.regenerate(100.0, 60.0);
        assert_eq!(field.size(), (100.0, 60.0));
        assert!(field.points().iter().all(|p| p.base().x <= 100.0 && p.base().y <= 60.0));
        assert_eq!(field.frames().len(), field.len());
    }

    #[test]
    fn test_same_seed_same_field() {
        assert_eq!(field().points(), field().points());
    }

    #[test]
    fn test_base_positions_fixed_under_pointer() {
        let mut field = field();
        let before = field.points().to_vec();
        for i in 0..120 {
            field.step(FRAME, Pointer::at(i as f64 * 5.0, 120.0));
        }
        assert_eq!(field.points(), &before[..]);
        for (frame, point) in field.frames().iter().zip(before.iter()) {
            assert_eq!((frame.left, frame.top), (point.base().x, point.base().y));
        }
    }

    #[test]
    fn test_away_pointer_keeps_dots_still() {
        let mut field = field();
        for _ in 0..60 {
            field.step(FRAME, Pointer::AWAY);
        }
        assert!(field.frames().iter().all(|f| f.dx == 0.0 && f.dy == 0.0));
    }

    #[test]
    fn test_dots_near_pointer_move_away_and_settle() {
        let mut field = field();
        let pointer = Pointer::at(300.0, 120.0);
        for _ in 0..300 {
            field.step(FRAME, pointer);
        }
        let strength = FieldConfig::default().repulsion_strength;
        for (frame, point) in field.frames().iter().zip(field.points()) {
            let expected = force(point, pointer, 100.0, strength);
            assert!((frame.dx - expected.dx).abs() < 0.05);
            assert!((frame.dy - expected.dy).abs() < 0.05);
            assert!(frame.dx.hypot(frame.dy) <= strength + 1e-9);
        }
    }

    #[test]
    fn test_opacity_always_in_unit_range() {
        let mut field = field();
        let pointers = [
            Pointer::AWAY,
            Pointer::at(300.0, 120.0),
            Pointer::at(0.0, 0.0),
            Pointer::at(-50.0, 900.0),
        ];
        for i in 0..400 {
            field.step(FRAME * (1 + i % 3) as f64, pointers[i % pointers.len()]);
            assert!(field
                .frames()
                .iter()
                .all(|f| (0.0..=1.0).contains(&f.opacity)));
        }
    }

    #[test]
    fn test_pointer_brightens_nearby_dots() {
        let mut quiet = field();
        let mut lit = field();
        for _ in 0..240 {
            quiet.step(FRAME, Pointer::AWAY);
            lit.step(FRAME, Pointer::at(300.0, 120.0));
        }
        let near = |f: &DotFrame| (f.left - 300.0).hypot(f.top - 120.0) < 60.0;
        let brighter = quiet
            .frames()
            .iter()
            .zip(lit.frames().iter())
            .filter(|(q, _)| near(q))
            .all(|(q, l)| l.opacity >= q.opacity);
        assert!(brighter);
    }
}
