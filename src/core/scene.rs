//! Visual elements and the recycled particle field behind the page sections.
//!
//! Everything here is framework-free: elements are spawned once when a scene
//! mounts, read every frame, and dropped on unmount. Randomness is injected
//! as a uniform sampler so spawning stays deterministic under test; the UI
//! passes `js_sys::Math::random`.

use std::f64::consts::PI;

/// Depth at which a particle has drifted past the camera and gets recycled.
pub const NEAR_LIMIT: f64 = 10.0;

/// Depth a recycled particle respawns at.
pub const FAR_PLANE: f64 = -50.0;

/// Minimal 3-component vector for camera-space math.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Shape drawn for a visual element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Cube,
    Sphere,
    Particle,
    Frame,
}

/// Uniform sampler in `[0, 1)` injected by the caller.
pub type Sampler<'a> = &'a mut dyn FnMut() -> f64;

/// One decorative element, created at mount and read every frame.
/// There is no identity beyond its slot in the owning scene's array.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualElement {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f64,
    pub speed: f64,
    pub kind: ShapeKind,
}

impl VisualElement {
    /// Spawn a floating cube or sphere inside the viewport-derived bounds
    /// (half cubes, half spheres on average).
    pub fn float_shape(bounds: (f64, f64), rand: Sampler) -> Self {
        Self {
            position: Vec3::new(
                (rand() - 0.5) * bounds.0 * 2.0,
                (rand() - 0.5) * bounds.1 * 2.0,
                -rand() * 10.0 - 5.0,
            ),
            rotation: Vec3::new(rand() * PI, rand() * PI, rand() * PI),
            scale: rand() * 0.5 + 0.2,
            speed: rand() * 0.02 + 0.01,
            kind: if rand() > 0.5 {
                ShapeKind::Cube
            } else {
                ShapeKind::Sphere
            },
        }
    }
}

/// One recycled particle. Velocity is fixed at spawn; the field scales it by
/// its speed factor on every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// The drifting particle backdrop. The field exclusively owns its particles;
/// the per-frame step is the only writer.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: (f64, f64),
    speed: f64,
}

impl ParticleField {
    /// Spawn `count` particles spread over four times the viewport bounds,
    /// biased toward the far depth range.
    pub fn new(count: usize, bounds: (f64, f64), speed: f64, rand: Sampler) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                position: Vec3::new(
                    (rand() - 0.5) * bounds.0 * 4.0,
                    (rand() - 0.5) * bounds.1 * 4.0,
                    -rand() * 50.0 - 10.0,
                ),
                velocity: Vec3::new(
                    (rand() - 0.5) * 0.02,
                    (rand() - 0.5) * 0.02,
                    rand() * 0.01 + 0.005,
                ),
            })
            .collect();
        Self {
            particles,
            bounds,
            speed,
        }
    }

    /// Build a field from explicit particles.
    pub fn with_particles(particles: Vec<Particle>, bounds: (f64, f64), speed: f64) -> Self {
        Self {
            particles,
            bounds,
            speed,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> (f64, f64) {
        self.bounds
    }

    /// Update the viewport-derived bounds (e.g. after a resize).
    pub fn set_bounds(&mut self, bounds: (f64, f64)) {
        self.bounds = bounds;
    }

    /// Advance every particle one frame at elapsed time `t`: velocity scaled
    /// by the speed factor, a small trigonometric drift, recycling past the
    /// near limit, and modular wraparound at the screen edges.
    pub fn step(&mut self, t: f64, rand: Sampler) {
        let (w, h) = self.bounds;
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.position.x += p.velocity.x * self.speed;
            p.position.y += p.velocity.y * self.speed;
            p.position.z += p.velocity.z * self.speed;

            // wave drift
            p.position.x += (t + i as f64 * 0.1).sin() * 0.01;
            p.position.y += (t * 0.8 + i as f64 * 0.15).cos() * 0.01;

            // recycle particles that drift past the camera
            if p.position.z > NEAR_LIMIT {
                p.position.x = (rand() - 0.5) * w * 4.0;
                p.position.y = (rand() - 0.5) * h * 4.0;
                p.position.z = FAR_PLANE;
            }

            // wrap around screen edges
            if p.position.x > w * 2.0 {
                p.position.x = -w * 2.0;
            }
            if p.position.x < -w * 2.0 {
                p.position.x = w * 2.0;
            }
            if p.position.y > h * 2.0 {
                p.position.y = -h * 2.0;
            }
            if p.position.y < -h * 2.0 {
                p.position.y = h * 2.0;
            }
        }
    }
}
