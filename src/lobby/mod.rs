//! Storefront lobby: landing screen plus modal dialogs driven by one controller.

mod controller;
mod layout;
mod screen;
mod screens;

pub use controller::{DialogKind, StorefrontController};
pub use layout::{centered_rect, shift_within};
pub use screen::{Screen, ScreenTransition};
pub use screens::{CardDetailDialog, CharacterSelectDialog, LandingControl, LandingScreen};
