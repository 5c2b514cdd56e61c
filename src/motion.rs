//! Spring-smoothed values for pointer- and scroll-linked animation.

/// Longest frame we integrate; longer gaps (background tabs) are clamped.
const MAX_FRAME: f64 = 0.1;
const MAX_SUBSTEP: f64 = 1.0 / 240.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target below which the spring may settle.
    pub rest_delta: f64,
    /// Speed below which the spring may settle.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Timeline fill length.
    pub const BEAM: Self = Self {
        stiffness: 200.0,
        damping: 30.0,
        mass: 1.0,
        rest_delta: 0.01,
        rest_speed: 0.01,
    };
    /// Timeline fill opacity.
    pub const FADE: Self = Self {
        stiffness: 150.0,
        damping: 20.0,
        mass: 1.0,
        rest_delta: 0.001,
        rest_speed: 0.001,
    };
    /// Page scroll progress bar.
    pub const PROGRESS: Self = Self {
        stiffness: 100.0,
        damping: 30.0,
        mass: 1.0,
        rest_delta: 0.001,
        rest_speed: 0.001,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::BEAM
    }
}

/// A damped spring chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            target: initial,
            config,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jumps to `value` and stops.
    pub fn set_immediate(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_animating(&self) -> bool {
        self.value != self.target || self.velocity != 0.0
    }

    /// Advances the simulation by `dt` seconds and returns the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        if !self.is_animating() || dt <= 0.0 {
            return self.value;
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

        for _ in 0..substeps as usize {
            let displacement = self.value - self.target;
            let accel = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }

        if (self.value - self.target).abs() < rest_delta && self.velocity.abs() < rest_speed {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

/// Pointer-linked highlight along the experience timeline.
///
/// The length follows the pointer while it is inside the timeline. Leaving
/// only fades the beam out; the length stays where it was so that coming back
/// grows the beam from its last position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineFill {
    length: Spring,
    opacity: Spring,
}

impl Default for TimelineFill {
    fn default() -> Self {
        Self {
            length: Spring::new(0.0, SpringConfig::BEAM),
            opacity: Spring::new(0.0, SpringConfig::FADE),
        }
    }
}

impl TimelineFill {
    pub fn pointer_move(&mut self, pointer_y: f64, container_top: f64, container_height: f64) {
        let relative = (pointer_y - container_top).clamp(0.0, container_height.max(0.0));
        self.length.set_target(relative);
        self.opacity.set_target(1.0);
    }

    pub fn pointer_leave(&mut self) {
        self.opacity.set_target(0.0);
    }

    pub fn step(&mut self, dt: f64) {
        self.length.step(dt);
        self.opacity.step(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.length.is_animating() || self.opacity.is_animating()
    }

    pub fn length(&self) -> f64 {
        self.length.value()
    }

    /// Opacity clamped to `[0, 1]`; the spring itself may overshoot.
    pub fn opacity(&self) -> f64 {
        self.opacity.value().clamp(0.0, 1.0)
    }
}

/// One-shot latch for reveal-on-scroll: once visible, always revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new(revealed: bool) -> Self {
        Self { revealed }
    }

    pub fn observe(&mut self, visible: bool) -> bool {
        self.revealed |= visible;
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}
