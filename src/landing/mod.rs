//! Landing view state.

mod state;

pub use state::{GameMode, LandingState, MultiplayerOption, SlotMarker};
