use super::SpringConfig;

/// Longest integration step, in seconds. Frames are split into steps of at
/// most this length so that the integration stays stable for stiff springs.
const MAX_STEP: f64 = 0.001;
/// Longest time advanced in one call, in seconds. The default spring is long
/// settled by then.
const MAX_DT: f64 = 5.0;

/// A damped spring pulling a scalar toward a target, integrated with
/// semi-implicit Euler.
///
/// Retargeting keeps the current velocity, so a pointer moving across the
/// dock doesn't make the icons jerk.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
    bounds: Option<(f64, f64)>,
}

impl Spring {
    /// A spring at rest at `position`.
    pub fn new(config: SpringConfig, position: f64) -> Self {
        Self {
            config,
            position,
            velocity: 0.0,
            target: position,
            bounds: None,
        }
    }

    /// Keep the position within `[lower, upper]`, hitting a bound kills the
    /// velocity.
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        let upper = upper.max(lower);
        self.bounds = Some((lower, upper));
        self.position = self.position.clamp(lower, upper);
        self.target = self.target.clamp(lower, upper);
        self
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = match self.bounds {
            Some((lower, upper)) => target.clamp(lower, upper),
            None => target,
        };
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.position).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advance the spring by `dt` seconds and return the new position.
    ///
    /// Once settled the spring snaps onto its target and stops moving.
    /// Undefined or infinite durations leave the spring untouched.
    pub fn step(&mut self, dt: f64) -> f64 {
        if !(dt > 0.0) || !dt.is_finite() {
            return self.position;
        }
        let dt = dt.min(MAX_DT);

        let SpringConfig {
            mass,
            stiffness,
            damping,
            ..
        } = self.config;
        let steps = (dt / MAX_STEP).ceil().max(1.0) as u32;
        let h = dt / steps as f64;
        for _ in 0..steps {
            let force = -stiffness * (self.position - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
            if let Some((lower, upper)) = self.bounds {
                if self.position < lower || self.position > upper {
                    self.position = self.position.clamp(lower, upper);
                    self.velocity = 0.0;
                }
            }
            if self.is_settled() {
                break;
            }
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}
