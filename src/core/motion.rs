//! Pure elapsed-time animation functions.
//!
//! Every function derives a transform (or color) from the monotonically
//! increasing elapsed-time value the scene host reads once per frame. No
//! state is read or written, so replaying the same time sequence yields
//! identical results and the animators can be tested without a rendering
//! surface.

use crate::core::scene::{Vec3, VisualElement};

/// Transform produced for one visual element on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f64,
}

/// Spin accumulated per second for a shape with speed 1.0.
const SPIN_RATE: f64 = 60.0;

/// Slow shared yaw applied to a whole group of floating shapes.
pub fn group_sway(t: f64) -> f64 {
    (t * 0.1).sin() * 0.1
}

/// Camera yaw when the scene host has interactive orbiting enabled.
pub fn orbit_yaw(t: f64) -> f64 {
    t * 0.05
}

/// Floating cube/sphere transform: spin proportional to the element's speed
/// with a vertical bob around the base position.
pub fn float_transform(elem: &VisualElement, t: f64) -> Transform {
    let spin = t * elem.speed * SPIN_RATE;
    Transform {
        position: Vec3 {
            y: elem.position.y + (t * elem.speed * 10.0).sin() * 2.0,
            ..elem.position
        },
        rotation: Vec3 {
            x: elem.rotation.x + spin,
            y: elem.rotation.y + spin * 0.8,
            z: elem.rotation.z,
        },
        scale: elem.scale,
    }
}

/// Shared yaw for the decorative frame group.
pub fn frame_group_yaw(t: f64) -> f64 {
    t * 0.1
}

/// Per-slot drift for the three decorative frames. Each slot wobbles on its
/// own pair of rotation axes and drifts along a single positional axis.
pub fn frame_transform(slot: usize, base: Vec3, t: f64) -> Transform {
    let (position, rotation) = match slot % 3 {
        0 => (
            Vec3 {
                y: base.y + (t * 0.4).sin() * 0.5,
                ..base
            },
            Vec3::new((t * 0.5).sin() * 0.2, 0.0, (t * 0.3).cos() * 0.1),
        ),
        1 => (
            Vec3 {
                x: base.x + (t * 0.3).cos() * 0.8,
                ..base
            },
            Vec3::new(0.0, (t * 0.6).cos() * 0.3, (t * 0.4).sin() * 0.15),
        ),
        _ => (
            Vec3 {
                z: base.z + (t * 0.2).sin() * 0.3,
                ..base
            },
            Vec3::new((t * 0.7).cos() * 0.25, (t * 0.5).sin() * 0.2, 0.0),
        ),
    };
    Transform {
        position,
        rotation,
        scale: 1.0,
    }
}

/// Slow sway of the whole dashboard group.
pub fn dashboard_sway(t: f64) -> f64 {
    (t * 0.3).sin() * 0.2
}

/// Dashboard bar bob and spin; `i` is the bar's registration order.
/// Returns `(y, spin)`.
pub fn bar_transform(i: usize, base_y: f64, t: f64) -> (f64, f64) {
    let y = base_y + (t * 1.5 + i as f64).sin() * 0.2;
    let spin = t * 0.5 + i as f64;
    (y, spin)
}

/// One sample of the animated backdrop gradient at normalized coordinates
/// `(u, v)`. Two travelling waves modulate a three-color mix; every channel
/// is clamped to `[0, 1]`.
pub fn backdrop_color(u: f64, v: f64, t: f64) -> [f64; 3] {
    let wave1 = (u * 10.0 + t * 0.5).sin() * 0.1;
    let wave2 = (v * 8.0 + t * 0.3).cos() * 0.1;

    let blue = [0.2, 0.4, 1.0];
    let purple = [0.8, 0.2, 1.0];
    let teal = [0.1, 0.9, 0.8];

    let mixer = ((u + v + t * 0.2).sin() * 0.5 + 0.5 + wave1 + wave2).clamp(0.0, 1.0);
    let wash = ((t * 0.1).sin() * 0.2 + 0.1).clamp(0.0, 1.0);

    let mut out = [0.0; 3];
    for (c, channel) in out.iter_mut().enumerate() {
        let base = blue[c] + (purple[c] - blue[c]) * mixer;
        *channel = (base + (teal[c] - base) * wash).clamp(0.0, 1.0);
    }
    out
}
