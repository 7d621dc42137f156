//! Camera with smooth 2D/3D mode transitions
//!
//! 3D is a free-ish perspective anchored at an angled position; 2D locks
//! straight above the orbit plane. Switching modes eases the eye toward the
//! new anchor instead of snapping.

use glam::{Mat4, Vec3};

use crate::settings::ViewMode;

/// Perspective anchor for the 3D view
const EYE_3D: Vec3 = Vec3::new(15.0, 10.0, 15.0);
/// Top-down anchor for the 2D view
const EYE_2D: Vec3 = Vec3::new(0.0, 35.0, 0.0);

/// Vertical field of view (radians)
const FOV_Y: f32 = 50.0 * std::f32::consts::PI / 180.0;
/// Transition stiffness - higher converges faster
const EASE_RATE: f32 = 6.0;

#[derive(Debug, Clone)]
pub struct Camera {
    mode: ViewMode,
    eye: Vec3,
}

impl Camera {
    pub fn new(mode: ViewMode) -> Self {
        Self {
            mode,
            eye: Self::anchor(mode),
        }
    }

    fn anchor(mode: ViewMode) -> Vec3 {
        match mode {
            ViewMode::TwoD => EYE_2D,
            ViewMode::ThreeD => EYE_3D,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch presentation mode; the eye eases toward the new anchor over
    /// subsequent `update()` calls.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Ease the eye toward the active anchor. Frame-rate independent.
    pub fn update(&mut self, dt: f32) {
        let target = Self::anchor(self.mode);
        let t = 1.0 - (-EASE_RATE * dt).exp();
        self.eye = self.eye.lerp(target, t);
    }

    /// Combined view-projection matrix, always looking at the orbit center.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        // +Y up degenerates straight overhead; blend toward -Z as the eye
        // nears the top-down anchor (keeps +X to the right in 2D view)
        let horizontal = (self.eye.x * self.eye.x + self.eye.z * self.eye.z).sqrt();
        let blend = (1.0 - horizontal / 10.0).clamp(0.0, 1.0);
        let up = Vec3::Y.lerp(Vec3::NEG_Z, blend).normalize();

        let view = Mat4::look_at_rh(self.eye, Vec3::ZERO, up);
        let proj = Mat4::perspective_rh(FOV_Y, aspect, 0.1, 500.0);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_converges() {
        let mut camera = Camera::new(ViewMode::ThreeD);
        camera.set_mode(ViewMode::TwoD);
        for _ in 0..600 {
            camera.update(1.0 / 60.0);
        }
        assert!((camera.eye - EYE_2D).length() < 0.01);
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let camera = Camera::new(ViewMode::TwoD);
        let clip = camera.view_proj(16.0 / 9.0) * Vec3::ZERO.extend(1.0);
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        assert!(ndc_x.abs() < 1e-4);
        assert!(ndc_y.abs() < 1e-4);
    }

    #[test]
    fn test_top_down_keeps_plus_x_to_the_right() {
        let camera = Camera::new(ViewMode::TwoD);
        let vp = camera.view_proj(1.0);
        let clip = vp * Vec3::new(10.0, 0.0, 0.0).extend(1.0);
        assert!(clip.x / clip.w > 0.0);
    }
}
