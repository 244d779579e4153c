//! Screen trait and transition type for the storefront state machine.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;

use crate::{Catalog, Side};

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] and
/// [`Screen::handle_mouse`] to drive the
/// [`StorefrontController`](crate::StorefrontController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen, no state change.
    Stay,
    /// Show the detail dialog for a card.
    OpenCardDetail {
        /// Id of the card to show.
        card_id: u32,
    },
    /// Show the character carousel for a side.
    OpenCharacterSelect {
        /// Side the pick applies to.
        side: Side,
    },
    /// Stand-in purchase of the card shown in the detail dialog.
    PurchaseSelected,
    /// Close whichever dialog is open.
    CloseDialog,
    /// Exit the storefront cleanly.
    Quit,
}

/// Trait implemented by the landing screen and each dialog.
///
/// Each screen owns its own state, renders its UI, and handles input events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, catalog: &Catalog);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, catalog: &Catalog) -> ScreenTransition;

    /// Handles a mouse event. Screens without pointer support stay put.
    fn handle_mouse(&mut self, _mouse: MouseEvent, _catalog: &Catalog) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
