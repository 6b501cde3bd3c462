/// Longest integration step; frames are split into sub-steps no longer than this.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;
/// Longest frame the spring will integrate. Anything longer (a tab coming back
/// from the background) is treated as this long.
const MAX_FRAME: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from target under which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Dot displacement: stiff and heavily damped.
    pub const POSITION: SpringConfig = SpringConfig {
        stiffness: 200.0,
        damping: 35.0,
        mass: 0.3,
        rest_delta: 0.01,
        rest_speed: 0.01,
    };

    /// Dot opacity: softer so brightening lags the pointer slightly.
    pub const OPACITY: SpringConfig = SpringConfig {
        stiffness: 120.0,
        damping: 30.0,
        mass: 1.0,
        rest_delta: 0.001,
        rest_speed: 0.001,
    };

    /// `damping / (2 * sqrt(stiffness * mass))`; at or above 1 the spring never overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::POSITION
    }
}

/// Damped harmonic oscillator chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Replaces the target; only the latest target matters.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advances the spring by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if !(dt > 0.0) || self.is_at_rest() {
            return;
        }
        let dt = dt.min(MAX_FRAME);
        let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0);
        let h = dt / substeps;
        let SpringConfig {
            stiffness,
            damping,
            mass,
            rest_delta,
            rest_speed,
        } = self.config;

        for _ in 0..substeps as u32 {
            let displacement = self.value - self.target;
            let accel = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;

            if (self.value - self.target).abs() < rest_delta && self.velocity.abs() < rest_speed {
                self.value = self.target;
                self.velocity = 0.0;
                break;
            }
        }
    }

    /// Sets target and advances in one call.
    pub fn follow(&mut self, target: f64, dt: f64) -> f64 {
        self.set_target(target);
        self.step(dt);
        self.value
    }
}
