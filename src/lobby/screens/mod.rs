//! Screen implementations for the storefront state machine.

mod card_detail;
mod character_select;
mod landing;

pub use card_detail::CardDetailDialog;
pub use character_select::CharacterSelectDialog;
pub use landing::{LandingControl, LandingScreen};
