//! Simulation clock - the single owner of live orbital state
//!
//! The rendering loop drives `advance()` once per frame with real elapsed
//! time (variable timestep, so motion stays continuous across frame-rate
//! dips). A separate slow timer calls `sample()` to surface derived values
//! for the numeric readout; the two cadences never touch each other.

use crate::consts::{DEFAULT_ANGLE, DEFAULT_RADIUS, DEFAULT_SPEED};
use crate::wrap_angle;

use super::kinematics::{KinematicState, compute_state};

/// Mutable orbital state plus the play/pause flag.
///
/// Fields are private on purpose: every reader and writer goes through the
/// accessors, which keeps the write path serialized in one place.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    /// Authoritative angle (radians, kept in [0, 2π))
    angle: f32,
    /// Tangential speed (m/s), mutated only by explicit user input
    speed: f32,
    /// Orbit radius (m), mutated only by explicit user input
    radius: f32,
    playing: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            angle: DEFAULT_ANGLE,
            speed: DEFAULT_SPEED,
            radius: DEFAULT_RADIUS,
            playing: false,
        }
    }
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Replace the stored angle. Callers clamp/convert at the input surface;
    /// the clock only normalizes into [0, 2π).
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = wrap_angle(angle);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Restore defaults and stop playback. Valid from either state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance the angle by ω·dt and wrap into [0, 2π).
    ///
    /// Guaranteed no-op while paused - the angle is preserved exactly so
    /// user edits made in the paused state survive stray frame callbacks.
    pub fn advance(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        let angular_speed = self.speed / self.radius;
        self.angle = wrap_angle(self.angle + angular_speed * dt);
    }

    /// Snapshot of the derived state for display consumers.
    ///
    /// Called on the slow readout cadence, decoupled from the frame loop.
    /// While playing, the caller pushes the sampled angle back into the
    /// angle control so sliders track live motion.
    pub fn sample(&self) -> KinematicState {
        compute_state(self.angle, self.speed, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_advance_one_second() {
        let mut clock = SimulationClock::new();
        clock.play();
        clock.advance(1.0);
        // Defaults: v = 5, R = 10 -> ω = 0.5 rad/s
        assert!((clock.angle() - 0.5).abs() < EPS);
    }

    #[test]
    fn test_advance_full_period_wraps_to_start() {
        let mut clock = SimulationClock::new();
        clock.set_angle(1.0);
        clock.play();
        let period = clock.sample().period;
        clock.advance(period);
        assert!((clock.angle() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_advance_while_paused_is_exact_noop() {
        let mut clock = SimulationClock::new();
        clock.set_angle(2.345);
        let before = clock.angle();
        clock.advance(1000.0);
        assert_eq!(clock.angle(), before);
    }

    #[test]
    fn test_angle_stays_wrapped() {
        let mut clock = SimulationClock::new();
        clock.play();
        for _ in 0..2000 {
            clock.advance(0.1);
        }
        assert!(clock.angle() >= 0.0);
        assert!(clock.angle() < TAU);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut clock = SimulationClock::new();
        clock.set_angle(3.0);
        clock.set_speed(12.0);
        clock.set_radius(25.0);
        clock.play();
        clock.reset();

        assert_eq!(clock.angle(), 0.0);
        assert_eq!(clock.speed(), 5.0);
        assert_eq!(clock.radius(), 10.0);
        assert!(!clock.is_playing());
    }

    #[test]
    fn test_toggle_transitions() {
        let mut clock = SimulationClock::new();
        assert!(!clock.is_playing());
        clock.toggle();
        assert!(clock.is_playing());
        clock.toggle();
        assert!(!clock.is_playing());
        // play/pause are idempotent
        clock.pause();
        assert!(!clock.is_playing());
        clock.play();
        clock.play();
        assert!(clock.is_playing());
    }

    #[test]
    fn test_sample_reflects_current_scalars() {
        let mut clock = SimulationClock::new();
        clock.set_speed(8.0);
        clock.set_radius(16.0);
        let s = clock.sample();
        assert!((s.accel_magnitude - 4.0).abs() < EPS);
        assert!((s.angular_speed - 0.5).abs() < EPS);
    }

    #[test]
    fn test_sample_does_not_mutate() {
        let mut clock = SimulationClock::new();
        clock.set_angle(1.5);
        let _ = clock.sample();
        let _ = clock.sample();
        assert!((clock.angle() - 1.5).abs() < 1e-6);
        assert!(!clock.is_playing());
    }
}
