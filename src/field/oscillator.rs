const MIN_MULTIPLIER: f64 = 0.4;
const MAX_MULTIPLIER: f64 = 1.2;
const MIN_FLOOR: f64 = 0.2;
const PERIOD_BASE: f64 = 1.2;
const PERIOD_STEP: f64 = 0.3;
const DELAY_STEP: f64 = 0.03;
const DELAY_CYCLE: f64 = 2.0;

/// `cubic-bezier(0.4, 0, 0.2, 1)`, the standard ease-in-out curve.
pub const STANDARD_EASE: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

/// CSS-style cubic bezier easing with fixed end points (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        // B(t) = 3(1-t)^2 t a1 + 3(1-t) t^2 a2 + t^3
        ((((1.0 - 3.0 * a2 + 3.0 * a1) * t) + (3.0 * a2 - 6.0 * a1)) * t + 3.0 * a1) * t
    }

    fn slope(a1: f64, a2: f64, t: f64) -> f64 {
        3.0 * (1.0 - 3.0 * a2 + 3.0 * a1) * t * t + 2.0 * (3.0 * a2 - 6.0 * a1) * t + 3.0 * a1
    }

    /// Solves for the curve parameter whose x equals `x`.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return t;
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        // newton stalled, fall back to bisection
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let v = Self::sample(self.x1, self.x2, t);
            if (v - x).abs() < 1e-7 {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    pub fn ease(&self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        if p == 0.0 || p == 1.0 {
            return p;
        }
        Self::sample(self.y1, self.y2, self.solve_t(p))
    }
}

/// Idle "breathing" of one dot's opacity between a floor and a ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breath {
    pub min: f64,
    pub max: f64,
    pub period: f64,
    pub delay: f64,
}

impl Breath {
    /// Breath for the dot at `index` in its generation with the given baseline opacity.
    pub fn new(base_opacity: f64, index: usize) -> Self {
        Self {
            min: (base_opacity * MIN_MULTIPLIER).max(MIN_FLOOR),
            max: (base_opacity * MAX_MULTIPLIER).min(1.0),
            period: PERIOD_BASE + (index % 4) as f64 * PERIOD_STEP,
            delay: (index as f64 * DELAY_STEP) % DELAY_CYCLE,
        }
    }

    /// Position on the `[low, high, low]` keyframe loop at `elapsed` seconds, in [0, 1].
    ///
    /// Rests at 0 until the start delay has passed, then rises to 1 at half
    /// period and falls back, each half eased, repeating forever.
    pub fn wave(&self, elapsed: f64) -> f64 {
        let t = elapsed - self.delay;
        if !t.is_finite() || t <= 0.0 || self.period <= 0.0 {
            return 0.0;
        }
        let phase = (t % self.period) / self.period;
        if phase < 0.5 {
            STANDARD_EASE.ease(phase * 2.0)
        } else {
            1.0 - STANDARD_EASE.ease((phase - 0.5) * 2.0)
        }
    }

    /// Opacity at `elapsed` when the low end of the loop has been lifted to `low`.
    pub fn opacity(&self, low: f64, elapsed: f64) -> f64 {
        let high = self.max.max(low);
        (low + (high - low) * self.wave(elapsed)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bezier_endpoints_and_monotone() {
        assert_eq!(STANDARD_EASE.ease(0.0), 0.0);
        assert_eq!(STANDARD_EASE.ease(1.0), 1.0);
        let mut last = 0.0;
        for i in 1..100 {
            let v = STANDARD_EASE.ease(i as f64 / 100.0);
            assert!(v >= last);
            last = v;
        }
        // symmetric-ish standard curve passes near the middle
        let mid = STANDARD_EASE.ease(0.5);
        assert!(mid > 0.6 && mid < 0.9, "{mid}");
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let linear = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
        for i in 0..=10 {
            let p = i as f64 / 10.0;
            assert!((linear.ease(p) - p).abs() < 1e-6);
        }
    }

    #[test]
    fn test_breath_bounds() {
        let b = Breath::new(0.6, 0);
        assert!((b.min - 0.24).abs() < 1e-12);
        assert!((b.max - 0.72).abs() < 1e-12);

        let faint = Breath::new(0.1, 0);
        assert_eq!(faint.min, 0.2);

        let hidden = Breath::new(0.0, 0);
        assert_eq!((hidden.min, hidden.max), (0.2, 0.0));
    }

    #[test]
    fn test_period_and_delay_stagger() {
        assert!((Breath::new(0.4, 0).period - 1.2).abs() < 1e-12);
        assert!((Breath::new(0.4, 3).period - 2.1).abs() < 1e-12);
        assert!((Breath::new(0.4, 4).period - 1.2).abs() < 1e-12);
        assert!((Breath::new(0.4, 10).delay - 0.3).abs() < 1e-12);
        assert!((Breath::new(0.4, 70).delay - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_wave_shape() {
        let b = Breath::new(0.5, 10);
        assert_eq!(b.wave(0.0), 0.0);
        assert_eq!(b.wave(b.delay), 0.0);
        assert!((b.wave(b.delay + b.period / 2.0) - 1.0).abs() < 1e-6);
        assert!(b.wave(b.delay + b.period * 0.999) < 0.01);
        // repeats
        let t = b.delay + 0.37;
        assert!((b.wave(t) - b.wave(t + b.period * 5.0)).abs() < 1e-6);
    }

    #[test]
    fn test_opacity_clamped_and_lifted() {
        let b = Breath::new(0.6, 1);
        for i in 0..200 {
            let t = i as f64 * 0.05;
            for low in [0.0, b.min, 0.9, 1.0, 1.5] {
                let o = b.opacity(low, t);
                assert!((0.0..=1.0).contains(&o));
            }
        }
        // a boosted floor above the ceiling holds steady
        assert_eq!(b.opacity(0.95, 10.0), 0.95);
    }
}
