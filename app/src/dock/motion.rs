use super::{DockConfig, IconGeometry, Pointer, Spring};

/// Size state of one dock icon, independent from the DOM.
#[derive(Clone, Debug)]
pub struct IconMotion {
    config: DockConfig,
    spring: Spring,
    animating: bool,
}

impl IconMotion {
    /// An icon at rest at its minimum size.
    pub fn new(config: DockConfig) -> Self {
        let spring = Spring::new(config.spring, config.min_size)
            .with_bounds(config.min_size, config.magnification);
        Self {
            config,
            spring,
            animating: false,
        }
    }

    /// Point the icon toward the size it should have for this pointer and
    /// geometry, returns that size.
    pub fn retarget(&mut self, pointer: Pointer, geometry: Option<IconGeometry>) -> f64 {
        let target = self.config.size_target(pointer.distance_to(geometry));
        self.spring.set_target(target);
        target
    }

    /// Mark the frame loop as running, returns `false` if it already was.
    pub fn start_animating(&mut self) -> bool {
        !std::mem::replace(&mut self.animating, true)
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Advance the animation by `dt` seconds, returns the size to render.
    ///
    /// The frame loop is considered stopped once the spring settles.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let size = self.spring.step(dt);
        if self.spring.is_settled() {
            self.animating = false;
        }
        self.config.clamp_size(size)
    }

    pub fn size(&self) -> f64 {
        self.config.clamp_size(self.spring.position())
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animating_until_settled() {
        let mut motion = IconMotion::new(DockConfig::default());
        assert!(!motion.is_animating());
        assert!(motion.start_animating());
        assert!(!motion.start_animating());

        motion.retarget(Pointer::At(20.0), IconGeometry::new(0.0, 40.0));
        motion.advance(1.0 / 60.0);
        assert!(motion.is_animating());
        for _ in 0..120 {
            motion.advance(1.0 / 60.0);
        }
        assert!(motion.is_settled());
        assert!(!motion.is_animating());
        assert!(motion.start_animating());
    }
}
