//! Closed-form kinematics of uniform circular motion
//!
//! Everything derives analytically from three scalars:
//! angle θ (radians from +X), tangential speed v (m/s), radius R (m).
//! The orbit lies in the XZ plane; +Y is up, θ increases counterclockwise
//! as seen from +Y.

use glam::Vec3;

use crate::orbit_point;

/// Derived physical state of the orbiting body.
///
/// A pure projection of (angle, speed, radius) - recomputed on demand,
/// never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    /// Body position on the orbit circle (y = 0)
    pub position: Vec3,
    /// Tangent velocity vector, |velocity| = speed
    pub velocity: Vec3,
    /// Center-seeking acceleration vector, |acceleration| = v²/R
    pub acceleration: Vec3,
    /// Centripetal acceleration magnitude a = v²/R
    pub accel_magnitude: f32,
    /// Orbital period T = 2πR/v (seconds)
    pub period: f32,
    /// Angular speed ω = v/R (rad/s)
    pub angular_speed: f32,
}

/// Compute the full kinematic state for one point on the orbit.
///
/// Total and deterministic for radius ≠ 0. A zero or negative radius is not
/// guarded here: it propagates as Inf/NaN components, and the input surface
/// keeps radius inside its positive bounds. No hidden state - safe to call
/// from any number of readers.
pub fn compute_state(angle: f32, speed: f32, radius: f32) -> KinematicState {
    let position = orbit_point(radius, angle);

    // Tangent to the circle: derivative of position w.r.t. angle, scaled to
    // magnitude `speed`. Always 90° ahead of the radius vector.
    let velocity = Vec3::new(-speed * angle.sin(), 0.0, speed * angle.cos());

    let accel_magnitude = speed * speed / radius;

    // Anti-parallel to the radius vector (center-seeking)
    let acceleration = Vec3::new(
        -accel_magnitude * angle.cos(),
        0.0,
        -accel_magnitude * angle.sin(),
    );

    let period = std::f32::consts::TAU * radius / speed;
    let angular_speed = speed / radius;

    KinematicState {
        position,
        velocity,
        acceleration,
        accel_magnitude,
        period,
        angular_speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    const EPS: f32 = 1e-3;

    #[test]
    fn test_state_at_angle_zero() {
        let s = compute_state(0.0, 5.0, 10.0);
        assert!((s.position - Vec3::new(10.0, 0.0, 0.0)).length() < EPS);
        assert!((s.velocity - Vec3::new(0.0, 0.0, 5.0)).length() < EPS);
        assert!((s.accel_magnitude - 2.5).abs() < EPS);
        assert!((s.acceleration - Vec3::new(-2.5, 0.0, 0.0)).length() < EPS);
        assert!((s.period - 4.0 * PI).abs() < EPS);
        assert!((s.angular_speed - 0.5).abs() < EPS);
    }

    #[test]
    fn test_state_at_quarter_turn() {
        let s = compute_state(FRAC_PI_2, 5.0, 10.0);
        assert!((s.position - Vec3::new(0.0, 0.0, 10.0)).length() < EPS);
        assert!((s.velocity - Vec3::new(-5.0, 0.0, 0.0)).length() < EPS);
        assert!((s.acceleration - Vec3::new(0.0, 0.0, -2.5)).length() < EPS);
    }

    #[test]
    fn test_zero_radius_degenerates() {
        let s = compute_state(0.0, 5.0, 0.0);
        assert!(s.accel_magnitude.is_infinite());
        assert!(s.angular_speed.is_infinite());
    }

    proptest! {
        #[test]
        fn velocity_magnitude_equals_speed(
            angle in 0.0f32..TAU,
            speed in 1.0f32..15.0,
            radius in 5.0f32..30.0,
        ) {
            let s = compute_state(angle, speed, radius);
            prop_assert!((s.velocity.length() - speed).abs() < EPS);
        }

        #[test]
        fn acceleration_points_at_center(
            angle in 0.0f32..TAU,
            speed in 1.0f32..15.0,
            radius in 5.0f32..30.0,
        ) {
            let s = compute_state(angle, speed, radius);
            let dot = s.acceleration.normalize().dot(s.position.normalize());
            prop_assert!((dot + 1.0).abs() < EPS);
            prop_assert!((s.acceleration.length() - speed * speed / radius).abs() < EPS);
        }

        #[test]
        fn velocity_is_tangent(
            angle in 0.0f32..TAU,
            speed in 1.0f32..15.0,
            radius in 5.0f32..30.0,
        ) {
            let s = compute_state(angle, speed, radius);
            // Normalize magnitudes out before comparing against tolerance
            let dot = s.velocity.dot(s.position) / (speed * radius);
            prop_assert!(dot.abs() < EPS);
        }

        #[test]
        fn motion_stays_planar(
            angle in 0.0f32..TAU,
            speed in 1.0f32..15.0,
            radius in 5.0f32..30.0,
        ) {
            let s = compute_state(angle, speed, radius);
            prop_assert_eq!(s.position.y, 0.0);
            prop_assert_eq!(s.velocity.y, 0.0);
            prop_assert_eq!(s.acceleration.y, 0.0);
        }
    }
}
