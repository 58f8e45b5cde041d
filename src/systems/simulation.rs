//! Animation system
//!
//! Advances the hypercube each frame:
//! - Delta time calculation
//! - Rotation of the configured planes
//! - Focal distance pulsing

use std::f64::consts::TAU;
use std::time::Instant;

use hcube_core::HypercubeEngine;
use crate::config::HypercubeConfig;

/// What the renderer needs from one simulation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Seconds applied this frame (after capping)
    pub dt: f64,
    /// Focal distance to project with
    pub focal_distance: f64,
}

/// Drives rotation and focal distance from wall-clock time
pub struct SimulationSystem {
    last_frame: Instant,
    /// Seconds of animation applied so far
    elapsed: f64,
    rotation_speed: f64,
    focal_distance: f64,
    pulse_amplitude: f64,
    pulse_frequency: f64,
    max_frame_delta: f64,
}

impl SimulationSystem {
    /// Create a simulation system from config
    ///
    /// A non-positive or non-finite `max_frame_delta` falls back to the
    /// default cap with a warning.
    pub fn new(config: &HypercubeConfig) -> Self {
        let max_frame_delta = if config.max_frame_delta.is_finite() && config.max_frame_delta > 0.0 {
            config.max_frame_delta
        } else {
            let fallback = HypercubeConfig::default().max_frame_delta;
            log::warn!(
                "max_frame_delta {} is not a positive number; using {}",
                config.max_frame_delta,
                fallback
            );
            fallback
        };

        Self {
            last_frame: Instant::now(),
            elapsed: 0.0,
            rotation_speed: config.rotation_speed,
            focal_distance: config.focal_distance,
            pulse_amplitude: config.focal_pulse_amplitude,
            pulse_frequency: config.focal_pulse_frequency,
            max_frame_delta,
        }
    }

    /// Run one frame using the time since the previous call
    pub fn update(&mut self, engine: &mut HypercubeEngine) -> FrameState {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f64();
        self.last_frame = now;

        self.step(engine, raw_dt)
    }

    /// Run one frame with an explicit delta time
    ///
    /// `dt` is capped at `max_frame_delta` so a stalled window does not jump
    /// the rotation.
    pub fn step(&mut self, engine: &mut HypercubeEngine, dt: f64) -> FrameState {
        let dt = dt.max(0.0).min(self.max_frame_delta);
        self.elapsed += dt;

        engine.rotate(dt * self.rotation_speed);

        FrameState {
            dt,
            focal_distance: self.focal_distance_at(self.elapsed),
        }
    }

    /// Focal distance after `t` seconds of animation
    pub fn focal_distance_at(&self, t: f64) -> f64 {
        self.focal_distance + self.pulse_amplitude * (TAU * self.pulse_frequency * t).sin()
    }

    /// Seconds of animation applied so far
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
