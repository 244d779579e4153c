//! Carousel state types and configuration.

use std::time::Duration;

use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use tracing::instrument;

/// Which player slot a character selection applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Side {
    /// First player, shown on the left.
    #[default]
    #[display("Player 1")]
    Left,
    /// Second player, shown on the right.
    #[display("Player 2")]
    Right,
}

impl Side {
    /// Both sides, left first.
    pub fn all() -> [Side; 2] {
        [Self::Left, Self::Right]
    }
}

/// Direction the cards slide during a transition.
///
/// Advancing slides cards to the left, retreating slides them to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum SlideDirection {
    /// No transition in flight.
    #[default]
    #[display("none")]
    None,
    /// Cards slide left (advance).
    #[display("left")]
    Left,
    /// Cards slide right (retreat).
    #[display("right")]
    Right,
}

/// Coarse phase of the carousel state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CarouselPhase {
    /// No transition in flight; navigation is accepted.
    Idle,
    /// A transition is settling; navigation is rejected.
    Transitioning,
}

/// A navigation step that was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Navigation {
    /// Moved to the next item.
    Advanced,
    /// Moved to the previous item.
    Retreated,
}

/// Visual and interaction state owned by one carousel session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct CarouselState {
    /// Index of the centred item; always within the roster.
    pub(crate) selected_index: usize,
    /// Whether a pointer drag is active.
    pub(crate) is_dragging: bool,
    /// Pointer position where the active drag began.
    pub(crate) drag_origin: i32,
    /// Signed distance from the drag origin.
    pub(crate) drag_offset: i32,
    /// Whether a transition is settling.
    pub(crate) is_animating: bool,
    /// Direction of the transition in flight.
    pub(crate) slide_direction: SlideDirection,
}

impl CarouselState {
    /// Returns the state machine phase.
    #[instrument(skip(self))]
    pub fn phase(&self) -> CarouselPhase {
        if self.is_animating {
            CarouselPhase::Transitioning
        } else {
            CarouselPhase::Idle
        }
    }

    pub(crate) fn clear_drag(&mut self) {
        self.is_dragging = false;
        self.drag_origin = 0;
        self.drag_offset = 0;
    }
}

/// Timing and gesture tunables for the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct CarouselConfig {
    /// How long a transition stays in flight.
    settle_delay: Duration,
    /// Drag offsets strictly beyond this distance navigate.
    drag_threshold: i32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(300), 6)
    }
}
