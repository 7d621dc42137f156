//! Orbit Lab - interactive centripetal acceleration visualizer
//!
//! Core modules:
//! - `sim`: Closed-form orbital kinematics and the simulation clock
//! - `renderer`: WebGPU rendering pipeline (orbit, vectors, starfield)
//! - `settings`: View mode / quality preferences

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings, ViewMode};

use glam::Vec3;

/// Simulation parameter bounds and UI constants
pub mod consts {
    /// Tangential speed slider range (m/s)
    pub const MIN_SPEED: f32 = 1.0;
    pub const MAX_SPEED: f32 = 15.0;
    pub const DEFAULT_SPEED: f32 = 5.0;

    /// Orbit radius slider range (m)
    pub const MIN_RADIUS: f32 = 5.0;
    pub const MAX_RADIUS: f32 = 30.0;
    pub const DEFAULT_RADIUS: f32 = 10.0;

    /// Starting angle (radians from +X)
    pub const DEFAULT_ANGLE: f32 = 0.0;

    /// Readout refresh interval - numeric text doesn't need 60 Hz
    pub const READOUT_INTERVAL_MS: i32 = 100;

    /// Visual scaling for velocity/acceleration arrows
    pub const ARROW_LENGTH_SCALE: f32 = 2.0;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(mut angle: f32) -> f32 {
    use std::f32::consts::TAU;
    while angle >= TAU {
        angle -= TAU;
    }
    while angle < 0.0 {
        angle += TAU;
    }
    angle
}

/// Point on a circle of the given radius in the XZ plane (y = 0),
/// angle measured counterclockwise from +X as seen from above.
#[inline]
pub fn orbit_point(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-6);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < 1e-6);
        assert!(wrap_angle(3.0 * TAU) < 1e-5);
    }

    #[test]
    fn test_degrees_round_trip() {
        // Slider values travel degrees -> radians -> degrees
        for deg in [0.0_f32, 1.0, 45.0, 90.0, 179.5, 270.0, 359.0] {
            let back = deg.to_radians().to_degrees();
            assert!((back - deg).abs() < 1e-3, "round trip failed for {deg}");
        }
    }

    #[test]
    fn test_orbit_point_stays_planar() {
        let p = orbit_point(10.0, 1.234);
        assert_eq!(p.y, 0.0);
        assert!((p.length() - 10.0).abs() < 1e-4);
    }
}
