//! One-way visibility flags for scroll-triggered section animations.
//!
//! A section reveals the first time it intersects the viewport and stays
//! revealed for the rest of the mount; card grids then reveal their cards on
//! a fixed stagger. The reducer here is independent of any windowing API -
//! the observer wiring lives in `ui::observer`.

/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom root-margin bias so sections reveal slightly before fully
/// entering the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Delay between consecutive card reveals in a grid.
pub const CARD_STAGGER_MS: u32 = 150;

/// A one-way visibility flag: set once when the section first intersects
/// the viewport, never reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionReveal {
    visible: bool,
}

impl SectionReveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one intersection event. Returns `true` only on the first
    /// false-to-true transition; later events, including leaving and
    /// re-entering the viewport, are ignored.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if is_intersecting && !self.visible {
            self.visible = true;
            true
        } else {
            false
        }
    }
}

/// Reveal delays for a grid of `count` cards, spaced `step_ms` apart.
pub fn stagger_delays(count: usize, step_ms: u32) -> Vec<u32> {
    (0..count).map(|i| i as u32 * step_ms).collect()
}
