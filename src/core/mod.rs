//! Core content data and animation logic for the landing page

#[cfg(feature = "ssr")]
pub mod config;
pub mod demo;
pub mod motion;
pub mod notify;
pub mod reveal;
pub mod scene;
pub mod signup;
#[cfg(test)]
mod tests;

pub use demo::{DEMO_STEPS, DemoPlayer, DemoStep, StepStatus, TICKET};
pub use notify::{Notice, NoticeKind};
pub use scene::{ParticleField, ShapeKind, Vec3, VisualElement};
pub use signup::{FieldError, SignupForm};
