use serde::{Deserialize, Serialize};

pub const DEFAULT_MAGNIFICATION: f64 = 60.0;
pub const DEFAULT_DISTANCE: f64 = 140.0;
pub const DEFAULT_MIN_SIZE: f64 = 40.0;

/// How the dock and its icons react to the pointer.
///
/// Every field has a default so that a content file can set only what it
/// wants to tune, e.g. `magnification: 65`.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct DockConfig {
    /// Size of an icon when the pointer is right over its center.
    pub magnification: f64,
    /// Horizontal range within which the pointer affects an icon's size.
    pub distance: f64,
    /// Size of an icon at rest.
    pub min_size: f64,
    pub direction: Direction,
    pub spring: SpringConfig,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            magnification: DEFAULT_MAGNIFICATION,
            distance: DEFAULT_DISTANCE,
            min_size: DEFAULT_MIN_SIZE,
            direction: Direction::default(),
            spring: SpringConfig::default(),
        }
    }
}

impl DockConfig {
    /// Size an icon wants to reach when its center is `distance` away from
    /// the pointer.
    pub fn size_target(&self, distance: f64) -> f64 {
        super::profile::interpolate(
            &[-self.distance, 0.0, self.distance],
            &[self.min_size, self.magnification, self.min_size],
            distance,
        )
    }

    pub fn clamp_size(&self, size: f64) -> f64 {
        size.clamp(self.min_size, self.magnification.max(self.min_size))
    }

    /// Returns why this configuration can't drive a dock, if it can't.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.min_size > 0.0) {
            return Err(format!("min_size must be positive, got {}", self.min_size));
        }
        if !(self.magnification >= self.min_size) {
            return Err(format!(
                "magnification ({}) must be at least min_size ({})",
                self.magnification, self.min_size
            ));
        }
        if !(self.distance > 0.0) {
            return Err(format!("distance must be positive, got {}", self.distance));
        }
        self.spring.validate()
    }
}

/// Cross-axis anchoring of the icons inside the dock.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Middle,
    #[default]
    Bottom,
}

impl Direction {
    pub fn class(&self) -> &'static str {
        match self {
            Direction::Top => "items-start",
            Direction::Middle => "items-center",
            Direction::Bottom => "items-end",
        }
    }
}

/// Constants of the second-order filter the rendered size goes through.
///
/// The defaults give an overdamped spring that settles in about 250ms.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct SpringConfig {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    /// The spring is at rest once it is closer than this to its target...
    pub rest_delta: f64,
    /// ...and slower than this, in units per second.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 0.1,
            stiffness: 150.0,
            damping: 12.0,
            rest_delta: 0.01,
            rest_speed: 0.1,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.mass > 0.0) || !(self.stiffness > 0.0) {
            return Err(format!(
                "spring mass and stiffness must be positive, got {} and {}",
                self.mass, self.stiffness
            ));
        }
        if !(self.damping >= 0.0) {
            return Err(format!("spring damping can't be negative, got {}", self.damping));
        }
        Ok(())
    }

    /// 1.0 means critically damped, more means overdamped.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}
