pub mod features;
pub mod hero;
pub mod icon;
pub mod live_demo;
pub mod notifications;
pub mod observer;
pub mod pages;
pub mod scene;
pub mod signup;

pub use icon::{Icon, icons};
pub use notifications::{NotificationManager, use_notifications};
pub use scene::{SceneCanvas, SceneLayer};
