//! Spring physics
//!
//! RK4-integrated damped springs drive the overlay's translate while the menu
//! is becoming active. Rest thresholds are part of the configuration because
//! the menu handoff needs much tighter settling than a scroll would.

/// Spring parameters plus the thresholds that define "at rest"
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Displacement from target below which the spring may settle
    pub rest_displacement: f32,
    /// Absolute velocity below which the spring may settle
    pub rest_speed: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_displacement: 0.001,
            rest_speed: 0.001,
        }
    }

    /// The menu entrance spring: fast, slightly underdamped, settles tight
    pub fn menu() -> Self {
        Self::new(500.0, 33.0, 1.03)
    }

    /// A soft spring for non-critical motion
    pub fn gentle() -> Self {
        Self {
            rest_displacement: 0.01,
            rest_speed: 0.01,
            ..Self::new(120.0, 14.0, 1.0)
        }
    }

    pub fn with_rest_thresholds(mut self, displacement: f32, speed: f32) -> Self {
        self.rest_displacement = displacement;
        self.rest_speed = speed;
        self
    }

    /// Damping at which the spring stops oscillating
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::menu()
    }
}

/// A damped spring animating a single value toward its target
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Seed the spring with an existing velocity (used when re-targeting)
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Retarget mid-flight; velocity carries over so motion stays continuous
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Within the configured rest thresholds of the target
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_displacement
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Advance the simulation by `dt` seconds using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}
