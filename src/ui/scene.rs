//! Canvas scene host for the decorative animated backgrounds.
//!
//! Owns one rendering surface, a fixed perspective camera and the per-frame
//! repaint loop. Layers are stepped and painted from the pure functions in
//! [`crate::core::motion`] and [`crate::core::scene`]; an unbound canvas
//! handle skips the frame and self-heals on the next one.

use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use crate::core::motion::{
    backdrop_color, bar_transform, dashboard_sway, float_transform, frame_group_yaw,
    frame_transform, group_sway, orbit_yaw,
};
#[cfg(not(feature = "ssr"))]
use crate::core::scene::{ParticleField, ShapeKind, Vec3, VisualElement};
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;

/// Decorative layers a scene can paint, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneLayer {
    /// Animated three-color gradient wash
    Backdrop,
    /// Drifting recycled particle field
    Particles,
    /// Floating wireframe cubes and translucent spheres
    Shapes,
    /// Wireframe frames with ring and diamond accents
    Frames,
    /// Bar chart with bobbing indicator spheres
    Dashboard,
}

/// Scene host: a `<canvas>` that repaints its layers on every animation
/// frame. `interactive` enables a slow automatic orbit of the camera.
#[component]
pub fn SceneCanvas(
    /// Layers painted every frame, in order
    layers: &'static [SceneLayer],
    /// Wrapper classes; the canvas fills the wrapper
    #[prop(default = "absolute inset-0 -z-10")]
    class: &'static str,
    /// Slowly orbit the camera around the scene
    #[prop(default = false)]
    interactive: bool,
) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    #[cfg(not(feature = "ssr"))]
    spawn_render_loop(canvas_ref, layers, interactive);
    #[cfg(feature = "ssr")]
    let _ = (layers, interactive);

    view! {
        <div class=class aria-hidden="true">
            <canvas node_ref=canvas_ref class="block w-full h-full"></canvas>
        </div>
    }
}

#[cfg(not(feature = "ssr"))]
const PARTICLE_COUNT: usize = 100;
#[cfg(not(feature = "ssr"))]
const PARTICLE_SPEED: f64 = 0.5;
#[cfg(not(feature = "ssr"))]
const SHAPE_COUNT: usize = 15;

#[cfg(not(feature = "ssr"))]
const CAMERA_Z: f64 = 10.0;
#[cfg(not(feature = "ssr"))]
const CAMERA_FOV_DEG: f64 = 75.0;

#[cfg(not(feature = "ssr"))]
const PRIMARY: (u8, u8, u8) = (59, 130, 246);
#[cfg(not(feature = "ssr"))]
const ACCENT: (u8, u8, u8) = (139, 92, 246);
#[cfg(not(feature = "ssr"))]
const INDIGO: (u8, u8, u8) = (79, 70, 229);
#[cfg(not(feature = "ssr"))]
const VIOLET: (u8, u8, u8) = (124, 58, 237);
#[cfg(not(feature = "ssr"))]
const AMBER: (u8, u8, u8) = (245, 158, 11);
#[cfg(not(feature = "ssr"))]
const EMERALD: (u8, u8, u8) = (16, 185, 129);
#[cfg(not(feature = "ssr"))]
const SLATE: (u8, u8, u8) = (51, 65, 85);

/// Start the requestAnimationFrame loop for one scene. The canvas handle and
/// the frame callback are exclusively owned here; cleanup cancels the
/// pending frame request and drops the callback.
#[cfg(not(feature = "ssr"))]
fn spawn_render_loop(
    canvas_ref: NodeRef<html::Canvas>,
    layers: &'static [SceneLayer],
    interactive: bool,
) {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(performance) = window.performance() else {
        return;
    };
    let start = performance.now();

    let mut rand = || js_sys::Math::random();
    let world = world_bounds(1.6);
    let field = Rc::new(RefCell::new(ParticleField::new(
        PARTICLE_COUNT,
        world,
        PARTICLE_SPEED,
        &mut rand,
    )));
    let shapes: Rc<Vec<VisualElement>> = Rc::new(
        (0..SHAPE_COUNT)
            .map(|_| VisualElement::float_shape(world, &mut rand))
            .collect(),
    );

    // the callback holds a handle to itself so it can reschedule
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

    let frame_for_tick = frame.clone();
    let raf_for_tick = raf_id.clone();
    let field_for_tick = field.clone();
    let shapes_for_tick = shapes.clone();

    *frame.borrow_mut() = Some(Closure::new(move || {
        let elapsed = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| (p.now() - start) / 1000.0)
            .unwrap_or(0.0);

        // missing render target: skip this frame, try again on the next
        if let Some(canvas) = canvas_ref.get_untracked() {
            render_frame(
                &canvas,
                layers,
                interactive,
                elapsed,
                &mut field_for_tick.borrow_mut(),
                &shapes_for_tick,
            );
        }

        if let Some(window) = web_sys::window() {
            if let Some(cb) = frame_for_tick.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_for_tick.borrow_mut() = Some(id);
                }
            }
        }
    }));

    if let Some(cb) = frame.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            *raf_id.borrow_mut() = Some(id);
        }
    }

    let cleanup_state = send_wrapper::SendWrapper::new((raf_id, frame));
    on_cleanup(move || {
        let (raf_id, frame) = &*cleanup_state;
        if let Some(id) = raf_id.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // dropping the callback breaks its self-referential cycle
        frame.borrow_mut().take();
    });
}

/// World-unit bounds visible at the z = 0 plane for a given aspect ratio.
#[cfg(not(feature = "ssr"))]
fn world_bounds(aspect: f64) -> (f64, f64) {
    let h = 2.0 * (CAMERA_FOV_DEG.to_radians() / 2.0).tan() * CAMERA_Z;
    (h * aspect, h)
}

/// Project a camera-space point to screen pixels after orbiting the world
/// by `yaw`. Returns `(x, y, px_per_unit)`, or `None` behind the camera.
#[cfg(not(feature = "ssr"))]
fn project(p: Vec3, yaw: f64, width: f64, height: f64) -> Option<(f64, f64, f64)> {
    let (sin_y, cos_y) = yaw.sin_cos();
    let x = p.x * cos_y - p.z * sin_y;
    let z = p.x * sin_y + p.z * cos_y;
    let depth = CAMERA_Z - z;
    if depth <= 0.1 {
        return None;
    }
    let focal = (height / 2.0) / (CAMERA_FOV_DEG.to_radians() / 2.0).tan();
    let sx = width / 2.0 + x * focal / depth;
    let sy = height / 2.0 - p.y * focal / depth;
    Some((sx, sy, focal / depth))
}

#[cfg(not(feature = "ssr"))]
fn rgba((r, g, b): (u8, u8, u8), a: f64) -> String {
    format!("rgba({r}, {g}, {b}, {a})")
}

#[cfg(not(feature = "ssr"))]
fn render_frame(
    canvas: &web_sys::HtmlCanvasElement,
    layers: &[SceneLayer],
    interactive: bool,
    t: f64,
    field: &mut ParticleField,
    shapes: &[VisualElement],
) {
    let width = canvas.client_width() as f64;
    let height = canvas.client_height() as f64;
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    if canvas.width() != width as u32 {
        canvas.set_width(width as u32);
    }
    if canvas.height() != height as u32 {
        canvas.set_height(height as u32);
    }

    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
    else {
        return;
    };

    ctx.clear_rect(0.0, 0.0, width, height);

    let yaw = if interactive { orbit_yaw(t) } else { 0.0 };

    for layer in layers {
        match layer {
            SceneLayer::Backdrop => paint_backdrop(&ctx, width, height, t),
            SceneLayer::Particles => paint_particles(&ctx, field, yaw, width, height, t),
            SceneLayer::Shapes => paint_shapes(&ctx, shapes, yaw, width, height, t),
            SceneLayer::Frames => paint_frames(&ctx, yaw, width, height, t),
            SceneLayer::Dashboard => paint_dashboard(&ctx, yaw, width, height, t),
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn paint_backdrop(ctx: &web_sys::CanvasRenderingContext2d, width: f64, height: f64, t: f64) {
    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
    for (stop, v) in [(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)] {
        let [r, g, b] = backdrop_color(0.5, v, t);
        let _ = gradient.add_color_stop(
            stop as f32,
            &format!(
                "rgba({}, {}, {}, 0.1)",
                (r * 255.0) as u8,
                (g * 255.0) as u8,
                (b * 255.0) as u8
            ),
        );
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, width, height);
}

#[cfg(not(feature = "ssr"))]
fn paint_particles(
    ctx: &web_sys::CanvasRenderingContext2d,
    field: &mut ParticleField,
    yaw: f64,
    width: f64,
    height: f64,
    t: f64,
) {
    field.set_bounds(world_bounds(width / height));
    let mut rand = || js_sys::Math::random();
    field.step(t, &mut rand);

    ctx.set_fill_style_str(&rgba(PRIMARY, 0.6));
    for p in field.particles() {
        if let Some((sx, sy, scale)) = project(p.position, yaw, width, height) {
            let r = (3.0 * scale * 0.05).clamp(0.4, 2.5);
            ctx.begin_path();
            let _ = ctx.arc(sx, sy, r, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn paint_shapes(
    ctx: &web_sys::CanvasRenderingContext2d,
    shapes: &[VisualElement],
    yaw: f64,
    width: f64,
    height: f64,
    t: f64,
) {
    let sway = group_sway(t);
    for elem in shapes {
        let tf = float_transform(elem, t);
        let Some((sx, sy, scale)) = project(tf.position, yaw + sway, width, height) else {
            continue;
        };
        let size = tf.scale * scale;
        let angle = tf.rotation.x + tf.rotation.y;

        ctx.save();
        let _ = ctx.translate(sx, sy);
        let _ = ctx.rotate(angle);
        match elem.kind {
            ShapeKind::Cube | ShapeKind::Frame => {
                ctx.set_stroke_style_str(&rgba(PRIMARY, 0.6));
                ctx.set_line_width(1.0);
                ctx.stroke_rect(-size / 2.0, -size / 2.0, size, size);
            }
            ShapeKind::Sphere | ShapeKind::Particle => {
                ctx.set_fill_style_str(&rgba(ACCENT, 0.4));
                ctx.begin_path();
                let _ = ctx.arc(0.0, 0.0, size * 0.4, 0.0, std::f64::consts::TAU);
                ctx.fill();
            }
        }
        ctx.restore();
    }
}

#[cfg(not(feature = "ssr"))]
const FRAME_SLOTS: [(Vec3, f64); 3] = [
    (
        Vec3 {
            x: -3.0,
            y: 2.0,
            z: -8.0,
        },
        4.0,
    ),
    (
        Vec3 {
            x: 4.0,
            y: -1.0,
            z: -6.0,
        },
        2.5,
    ),
    (
        Vec3 {
            x: 0.0,
            y: -3.0,
            z: -10.0,
        },
        1.8,
    ),
];

#[cfg(not(feature = "ssr"))]
fn paint_frames(
    ctx: &web_sys::CanvasRenderingContext2d,
    yaw: f64,
    width: f64,
    height: f64,
    t: f64,
) {
    let group = yaw + frame_group_yaw(t);

    for (slot, (base, size)) in FRAME_SLOTS.iter().copied().enumerate() {
        let tf = frame_transform(slot, base, t);
        let Some((sx, sy, scale)) = project(tf.position, group, width, height) else {
            continue;
        };
        let px = size * scale;
        ctx.save();
        let _ = ctx.translate(sx, sy);
        let _ = ctx.rotate(tf.rotation.z + tf.rotation.x * 0.5 + tf.rotation.y * 0.5);
        ctx.set_stroke_style_str(&rgba(INDIGO, 0.6));
        ctx.set_line_width((px * 0.025).max(1.0));
        ctx.stroke_rect(-px / 2.0, -px / 2.0, px, px);
        ctx.restore();
    }

    // torus accent
    if let Some((sx, sy, scale)) = project(Vec3::new(-6.0, 0.0, -12.0), group, width, height) {
        ctx.set_stroke_style_str(&rgba(VIOLET, 0.4));
        ctx.set_line_width(2.0);
        ctx.begin_path();
        let _ = ctx.arc(sx, sy, 0.8 * scale, 0.0, std::f64::consts::TAU);
        ctx.stroke();
    }

    // octahedron accent
    if let Some((sx, sy, scale)) = project(Vec3::new(6.0, 2.0, -15.0), group, width, height) {
        let r = 0.5 * scale;
        ctx.save();
        let _ = ctx.translate(sx, sy);
        let _ = ctx.rotate(std::f64::consts::FRAC_PI_4);
        ctx.set_stroke_style_str(&rgba(INDIGO, 0.5));
        ctx.set_line_width(1.5);
        ctx.stroke_rect(-r / 2.0, -r / 2.0, r, r);
        ctx.restore();
    }
}

#[cfg(not(feature = "ssr"))]
const BARS: [(f64, f64, f64, (u8, u8, u8)); 4] = [
    (-3.0, 2.0, 85.0, PRIMARY),
    (-1.0, 1.5, 92.0, ACCENT),
    (1.0, 2.2, 78.0, AMBER),
    (3.0, 1.8, 95.0, EMERALD),
];

#[cfg(not(feature = "ssr"))]
fn paint_dashboard(
    ctx: &web_sys::CanvasRenderingContext2d,
    yaw: f64,
    width: f64,
    height: f64,
    t: f64,
) {
    let group = yaw + dashboard_sway(t);

    // dashboard panel behind the bars
    if let Some((sx, sy, scale)) = project(Vec3::new(0.0, 0.0, -1.0), group, width, height) {
        let (pw, ph) = (8.0 * scale, 5.0 * scale);
        ctx.set_fill_style_str(&rgba(SLATE, 0.25));
        ctx.fill_rect(sx - pw / 2.0, sy - ph / 2.0, pw, ph);
    }

    // connecting lines between neighboring data points
    ctx.set_stroke_style_str(&rgba(PRIMARY, 0.6));
    ctx.set_line_width(1.0);
    for pair in BARS.windows(2) {
        let (x0, y0, _, _) = pair[0];
        let (x1, y1, _, _) = pair[1];
        if let (Some(a), Some(b)) = (
            project(Vec3::new(x0, y0, 0.0), group, width, height),
            project(Vec3::new(x1, y1, 0.0), group, width, height),
        ) {
            ctx.begin_path();
            ctx.move_to(a.0, a.1);
            ctx.line_to(b.0, b.1);
            ctx.stroke();
        }
    }

    for (i, (x, base_y, value, color)) in BARS.iter().copied().enumerate() {
        let (y, spin) = bar_transform(i, base_y, t);
        let bar_h = value / 50.0;
        let Some((sx, sy, scale)) = project(Vec3::new(x, y, 0.0), group, width, height) else {
            continue;
        };

        // column
        let w = 0.6 * scale;
        let h = bar_h * scale;
        ctx.set_fill_style_str(&rgba(color, 0.8));
        ctx.fill_rect(sx - w / 2.0, sy - h / 2.0, w, h);

        // indicator orbiting above the column
        let ix = sx + spin.cos() * 0.15 * scale;
        let iy = sy - h / 2.0 - 0.5 * scale;
        ctx.begin_path();
        let _ = ctx.arc(ix, iy, 0.2 * scale, 0.0, std::f64::consts::TAU);
        ctx.fill();

        // base platform
        ctx.set_fill_style_str(&rgba(SLATE, 0.6));
        ctx.fill_rect(
            sx - 0.4 * scale,
            sy + h / 2.0 + 0.05 * scale,
            0.8 * scale,
            0.1 * scale,
        );
    }
}
