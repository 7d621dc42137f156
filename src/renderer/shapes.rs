//! Scene geometry builders
//!
//! All shapes are emitted as world-space triangle lists in or around the
//! orbit (XZ) plane; the pipeline projects them through the camera.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use super::vertex::SceneVertex;
use crate::orbit_point;

/// Radial width of the orbit ring band (m)
const RING_WIDTH: f32 = 0.15;
/// Width of line-like quads (m)
const LINE_WIDTH: f32 = 0.08;
/// Seed for the background starfield - fixed so the sky never flickers
const STARFIELD_SEED: u64 = 0x0bab5;

/// Push one quad lying in the XZ plane along a->b with the given width.
fn push_flat_quad(out: &mut Vec<SceneVertex>, a: Vec3, b: Vec3, width: f32, color: [f32; 4]) {
    let dir = b - a;
    let len = dir.length();
    if len < 1e-6 {
        return;
    }
    let dir = dir / len;
    // In-plane perpendicular (rotate 90° about +Y)
    let perp = Vec3::new(-dir.z, 0.0, dir.x) * (width / 2.0);

    let v1 = a + perp;
    let v2 = a - perp;
    let v3 = b + perp;
    let v4 = b - perp;

    out.push(SceneVertex::new(v1, color));
    out.push(SceneVertex::new(v2, color));
    out.push(SceneVertex::new(v3, color));

    out.push(SceneVertex::new(v3, color));
    out.push(SceneVertex::new(v2, color));
    out.push(SceneVertex::new(v4, color));
}

/// The orbit circle as a thin flat band in the XZ plane.
pub fn orbit_ring(radius: f32, color: [f32; 4], segments: u32) -> Vec<SceneVertex> {
    let inner = radius - RING_WIDTH / 2.0;
    let outer = radius + RING_WIDTH / 2.0;
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let inner1 = orbit_point(inner, theta1);
        let outer1 = orbit_point(outer, theta1);
        let inner2 = orbit_point(inner, theta2);
        let outer2 = orbit_point(outer, theta2);

        vertices.push(SceneVertex::new(inner1, color));
        vertices.push(SceneVertex::new(outer1, color));
        vertices.push(SceneVertex::new(inner2, color));

        vertices.push(SceneVertex::new(inner2, color));
        vertices.push(SceneVertex::new(outer1, color));
        vertices.push(SceneVertex::new(outer2, color));
    }

    vertices
}

/// Filled disc in the XZ plane (the orbiting body).
pub fn disc(center: Vec3, radius: f32, color: [f32; 4], segments: u32) -> Vec<SceneVertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        vertices.push(SceneVertex::new(center, color));
        vertices.push(SceneVertex::new(center + orbit_point(radius, theta1), color));
        vertices.push(SceneVertex::new(center + orbit_point(radius, theta2), color));
    }

    vertices
}

/// Arrow from `origin` along `vector`, drawn in the XZ plane.
///
/// The head takes a fixed fraction of the length so short arrows stay
/// readable without swallowing the shaft.
pub fn arrow(origin: Vec3, vector: Vec3, color: [f32; 4]) -> Vec<SceneVertex> {
    let len = vector.length();
    if len < 1e-4 {
        return Vec::new();
    }
    let dir = vector / len;
    let head_len = (len * 0.25).min(1.2);
    let head_width = head_len * 0.7;
    let tip = origin + vector;
    let neck = tip - dir * head_len;

    let mut vertices = Vec::with_capacity(9);
    push_flat_quad(&mut vertices, origin, neck, LINE_WIDTH * 2.0, color);

    let perp = Vec3::new(-dir.z, 0.0, dir.x) * (head_width / 2.0);
    vertices.push(SceneVertex::new(neck + perp, color));
    vertices.push(SceneVertex::new(neck - perp, color));
    vertices.push(SceneVertex::new(tip, color));

    vertices
}

/// Arc marking the angle θ, swept from +X toward the body at a fraction of
/// the orbit radius.
pub fn angle_arc(angle: f32, orbit_radius: f32, color: [f32; 4]) -> Vec<SceneVertex> {
    let arc_radius = (orbit_radius * 0.3).min(3.0);
    let segments = ((angle / TAU * 48.0) as u32).max(1);
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let t1 = i as f32 / segments as f32;
        let t2 = (i + 1) as f32 / segments as f32;
        let a = orbit_point(arc_radius, t1 * angle);
        let b = orbit_point(arc_radius, t2 * angle);
        push_flat_quad(&mut vertices, a, b, LINE_WIDTH, color);
    }

    vertices
}

/// Line from the orbit center out to the body.
pub fn radius_line(angle: f32, radius: f32, color: [f32; 4]) -> Vec<SceneVertex> {
    let mut vertices = Vec::with_capacity(6);
    push_flat_quad(
        &mut vertices,
        Vec3::ZERO,
        orbit_point(radius, angle),
        LINE_WIDTH,
        color,
    );
    vertices
}

/// Square grid on the orbit plane, with the two axes drawn brighter.
pub fn grid(
    half_extent: f32,
    step: f32,
    color: [f32; 4],
    axis_color: [f32; 4],
) -> Vec<SceneVertex> {
    let n = (half_extent / step) as i32;
    let mut vertices = Vec::with_capacity((2 * n.unsigned_abs() as usize + 1) * 12);

    for i in -n..=n {
        let offset = i as f32 * step;
        let c = if i == 0 { axis_color } else { color };
        // Lines parallel to X and to Z
        push_flat_quad(
            &mut vertices,
            Vec3::new(-half_extent, 0.0, offset),
            Vec3::new(half_extent, 0.0, offset),
            LINE_WIDTH / 2.0,
            c,
        );
        push_flat_quad(
            &mut vertices,
            Vec3::new(offset, 0.0, -half_extent),
            Vec3::new(offset, 0.0, half_extent),
            LINE_WIDTH / 2.0,
            c,
        );
    }

    vertices
}

/// Deterministic background starfield on a spherical shell around the scene.
///
/// Each star is two crossed quads so it stays visible from any camera angle.
pub fn starfield(count: usize, color: [f32; 4]) -> Vec<SceneVertex> {
    let mut rng = Pcg32::seed_from_u64(STARFIELD_SEED);
    let mut vertices = Vec::with_capacity(count * 12);

    for _ in 0..count {
        // Uniform direction: rejection-sample the unit ball, push to the shell
        let dir = loop {
            let v = Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            );
            let len = v.length();
            if len > 1e-3 && len <= 1.0 {
                break v / len;
            }
        };
        let distance = rng.random_range(80.0..160.0);
        let pos = dir * distance;
        let size = rng.random_range(0.1..0.45);
        let alpha = color[3] * rng.random_range(0.3..1.0);
        let c = [color[0], color[1], color[2], alpha];

        let sx = Vec3::X * size;
        let sy = Vec3::Y * size;
        let sz = Vec3::Z * size;

        // Quad in XZ
        vertices.push(SceneVertex::new(pos - sx - sz, c));
        vertices.push(SceneVertex::new(pos + sx - sz, c));
        vertices.push(SceneVertex::new(pos - sx + sz, c));
        vertices.push(SceneVertex::new(pos - sx + sz, c));
        vertices.push(SceneVertex::new(pos + sx - sz, c));
        vertices.push(SceneVertex::new(pos + sx + sz, c));

        // Quad in XY
        vertices.push(SceneVertex::new(pos - sx - sy, c));
        vertices.push(SceneVertex::new(pos + sx - sy, c));
        vertices.push(SceneVertex::new(pos - sx + sy, c));
        vertices.push(SceneVertex::new(pos - sx + sy, c));
        vertices.push(SceneVertex::new(pos + sx - sy, c));
        vertices.push(SceneVertex::new(pos + sx + sy, c));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_orbit_ring_stays_in_plane() {
        let ring = orbit_ring(10.0, WHITE, 64);
        assert_eq!(ring.len(), 64 * 6);
        assert!(ring.iter().all(|v| v.pos.y == 0.0));
        for v in &ring {
            let r = v.pos.length();
            assert!(r > 10.0 - RING_WIDTH && r < 10.0 + RING_WIDTH);
        }
    }

    #[test]
    fn test_arrow_reaches_tip() {
        let verts = arrow(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 5.0), WHITE);
        let tip = Vec3::new(10.0, 0.0, 5.0);
        assert!(verts.iter().any(|v| (v.pos - tip).length() < 1e-4));
    }

    #[test]
    fn test_degenerate_arrow_is_empty() {
        assert!(arrow(Vec3::ZERO, Vec3::ZERO, WHITE).is_empty());
    }

    #[test]
    fn test_angle_arc_spans_angle() {
        let verts = angle_arc(FRAC_PI_2, 10.0, WHITE);
        assert!(!verts.is_empty());
        // All arc vertices stay within ~arc radius of the center
        assert!(verts.iter().all(|v| v.pos.length() < 3.5));
        // Something lands near the end of the sweep (+Z side)
        assert!(verts.iter().any(|v| v.pos.z > 2.0));
    }

    #[test]
    fn test_starfield_is_deterministic() {
        let a = starfield(100, WHITE);
        let b = starfield(100, WHITE);
        assert_eq!(a.len(), b.len());
        for (va, vb) in a.iter().zip(&b) {
            assert_eq!(va.pos, vb.pos);
        }
    }

    #[test]
    fn test_starfield_sits_outside_scene() {
        for v in starfield(200, WHITE) {
            assert!(v.pos.length() > 70.0);
        }
    }
}
