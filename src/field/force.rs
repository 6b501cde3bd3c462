use super::grid::{Point, Vec2};

/// The opacity halo reaches this much farther than the push radius.
pub const HALO_MULTIPLIER: f64 = 1.5;
/// Opacity added at the pointer's exact position.
pub const HALO_BOOST: f64 = 0.6;

/// Tracked pointer position in field coordinates.
///
/// Any non-finite coordinate means the pointer is outside the tracked region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub const AWAY: Pointer = Pointer {
        x: f64::INFINITY,
        y: f64::INFINITY,
    };

    pub const fn at(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_present(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::AWAY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Force {
    pub dx: f64,
    pub dy: f64,
    pub opacity_boost: f64,
}

impl Force {
    pub const ZERO: Force = Force {
        dx: 0.0,
        dy: 0.0,
        opacity_boost: 0.0,
    };

    pub fn magnitude(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// Repulsion and brightening of `point` for the current pointer.
///
/// Points inside `radius` are pushed straight away from the pointer by
/// `(1 - d / radius) * strength`; points inside `radius * 1.5` get an opacity
/// boost falling linearly from 0.6 to 0.
pub fn force(point: &Point, pointer: Pointer, radius: f64, strength: f64) -> Force {
    force_at(point.base(), pointer, radius, strength)
}

pub fn force_at(base: Vec2, pointer: Pointer, radius: f64, strength: f64) -> Force {
    if !pointer.is_present() || radius.is_nan() || radius <= 0.0 {
        return Force::ZERO;
    }

    let away = Vec2::new(base.x - pointer.x, base.y - pointer.y);
    let distance = away.length();

    let (dx, dy) = if distance < radius {
        let magnitude = (1.0 - distance / radius) * strength;
        let angle = away.y.atan2(away.x);
        (angle.cos() * magnitude, angle.sin() * magnitude)
    } else {
        (0.0, 0.0)
    };

    let halo = radius * HALO_MULTIPLIER;
    let opacity_boost = if distance < halo {
        (1.0 - distance / halo) * HALO_BOOST
    } else {
        0.0
    };

    Force {
        dx,
        dy,
        opacity_boost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f64 = 100.0;
    const STRENGTH: f64 = 25.0;

    fn at(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn test_away_pointer_has_no_effect() {
        for pointer in [
            Pointer::AWAY,
            Pointer::at(f64::NAN, 10.0),
            Pointer::at(10.0, f64::NEG_INFINITY),
        ] {
            assert_eq!(force_at(at(10.0, 10.0), pointer, RADIUS, STRENGTH), Force::ZERO);
        }
    }

    #[test]
    fn test_zero_outside_radius() {
        let f = force_at(at(0.0, 0.0), Pointer::at(100.0, 0.0), RADIUS, STRENGTH);
        assert_eq!((f.dx, f.dy), (0.0, 0.0));
        let f = force_at(at(0.0, 0.0), Pointer::at(300.0, 400.0), RADIUS, STRENGTH);
        assert_eq!(f, Force::ZERO);
    }

    #[test]
    fn test_pushes_away_from_pointer() {
        let f = force_at(at(50.0, 0.0), Pointer::at(0.0, 0.0), RADIUS, STRENGTH);
        assert!((f.dx - 12.5).abs() < 1e-9);
        assert!(f.dy.abs() < 1e-9);

        let f = force_at(at(0.0, 0.0), Pointer::at(0.0, 50.0), RADIUS, STRENGTH);
        assert!(f.dx.abs() < 1e-9);
        assert!((f.dy + 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_magnitude_decays_with_distance() {
        let mut last = f64::INFINITY;
        for d in [0.5, 10.0, 30.0, 60.0, 99.0] {
            let m = force_at(at(d, 0.0), Pointer::at(0.0, 0.0), RADIUS, STRENGTH).magnitude();
            assert!(m <= last, "{m} > {last} at {d}");
            assert!(m <= STRENGTH);
            last = m;
        }
    }

    #[test]
    fn test_halo_extends_past_push_radius() {
        let f = force_at(at(120.0, 0.0), Pointer::at(0.0, 0.0), RADIUS, STRENGTH);
        assert_eq!((f.dx, f.dy), (0.0, 0.0));
        assert!((f.opacity_boost - (1.0 - 120.0 / 150.0) * 0.6).abs() < 1e-9);

        let f = force_at(at(150.0, 0.0), Pointer::at(0.0, 0.0), RADIUS, STRENGTH);
        assert_eq!(f.opacity_boost, 0.0);

        let f = force_at(at(0.0, 0.0), Pointer::at(0.0, 0.0), RADIUS, STRENGTH);
        assert!((f.opacity_boost - HALO_BOOST).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_radius_is_inert() {
        assert_eq!(force_at(at(0.0, 0.0), Pointer::at(0.0, 0.0), 0.0, STRENGTH), Force::ZERO);
        assert_eq!(force_at(at(0.0, 0.0), Pointer::at(0.0, 0.0), f64::NAN, STRENGTH), Force::ZERO);
    }
}
