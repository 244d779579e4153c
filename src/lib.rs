//! Chess 2 storefront library - landing view, catalog and character carousel
//!
//! A terminal rendition of the Chess 2 storefront mock-up. Nothing here plays
//! chess, talks to a network or takes payment; purchases only post a notice.
//!
//! # Architecture
//!
//! - **Catalog**: characters and card sets, built in or loaded from TOML
//! - **Carousel**: the character picker's selection state machine
//! - **Landing**: cross-component selection state (mode, picks, dialogs)
//! - **Lobby**: ratatui screens and the controller event loop
//!
//! # Example
//!
//! ```no_run
//! use chess_two::{CarouselSession, Catalog, CarouselConfig, Side, event_channel};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let catalog = Catalog::builtin();
//! let (tx, _rx) = event_channel();
//! let mut session = CarouselSession::open(
//!     Side::Left,
//!     catalog.characters().clone(),
//!     CarouselConfig::default(),
//!     tx,
//! );
//! session.advance();
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod carousel;
mod catalog;
mod events;
mod landing;
mod lobby;
mod settings;
mod tui;

// Crate-level exports - Catalog
pub use catalog::{
    CATALOG_ENV_VAR, CardOffer, Catalog, CatalogError, ChessRole, PieceRole, Roster,
    SelectableItem,
};

// Crate-level exports - Carousel
pub use carousel::{
    CarouselConfig, CarouselPhase, CarouselSession, CarouselState, Navigation, SettleTask, Side,
    SlideDirection,
};

// Crate-level exports - Events
pub use events::{EventReceiver, EventSender, SettleTicket, StorefrontEvent, event_channel};

// Crate-level exports - Landing view
pub use landing::{GameMode, LandingState, MultiplayerOption, SlotMarker};

// Crate-level exports - Lobby screens and controller
pub use lobby::{
    CardDetailDialog, CharacterSelectDialog, DialogKind, LandingControl, LandingScreen, Screen,
    ScreenTransition, StorefrontController, centered_rect, shift_within,
};

// Crate-level exports - Settings
pub use settings::{SettingsError, StorefrontSettings};

// Crate-level exports - Terminal entry point
pub use tui::{init_file_tracing, run_tui};
