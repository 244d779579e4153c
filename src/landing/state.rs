//! Landing view selection state: mode toggles, dialogs and per-side picks.

use derive_getters::Getters;
use derive_more::Display;
use tracing::{debug, info, instrument};

use crate::{CardOffer, SelectableItem, Side};

/// How the next game would be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum GameMode {
    /// Two players on one machine.
    #[default]
    #[display("Local play")]
    Local,
    /// Online play (decorative).
    #[display("Multiplayer")]
    Multiplayer,
}

/// Multiplayer sub-option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum MultiplayerOption {
    /// Match against a random opponent.
    #[default]
    #[display("random")]
    Random,
    /// Invite a specific opponent.
    #[display("private")]
    Private,
}

impl MultiplayerOption {
    /// Both options in display order.
    pub fn all() -> [MultiplayerOption; 2] {
        [Self::Random, Self::Private]
    }
}

/// What a local-play slot shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotMarker {
    /// A character was picked for this side.
    Character(SelectableItem),
    /// No pick yet, but this is the active local side.
    Active,
    /// Nothing to show.
    Empty,
}

/// Cross-component state owned by the landing view.
///
/// Each toggle is an independent cell. The only coupling is by construction:
/// choosing a multiplayer option switches to multiplayer mode and choosing a
/// local slot switches to local mode.
#[derive(Debug, Clone, Default, Getters)]
pub struct LandingState {
    mode: GameMode,
    multiplayer_option: MultiplayerOption,
    local_side: Side,
    selected_card: Option<CardOffer>,
    card_detail_open: bool,
    character_select: Option<Side>,
    left_pick: Option<SelectableItem>,
    right_pick: Option<SelectableItem>,
    notice: Option<String>,
}

impl LandingState {
    /// Creates the initial landing state: local mode, left side, nothing open.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a local-play slot and opens the character picker for it.
    #[instrument(skip(self))]
    pub fn choose_local_side(&mut self, side: Side) {
        info!(side = %side, "Local slot chosen");
        self.mode = GameMode::Local;
        self.local_side = side;
        self.open_character_select(side);
    }

    /// Selects a multiplayer sub-option.
    #[instrument(skip(self))]
    pub fn choose_multiplayer(&mut self, option: MultiplayerOption) {
        info!(option = %option, "Multiplayer option chosen");
        self.mode = GameMode::Multiplayer;
        self.multiplayer_option = option;
    }

    /// Whether `option` is the highlighted multiplayer choice.
    #[instrument(skip(self))]
    pub fn is_multiplayer_selected(&self, option: MultiplayerOption) -> bool {
        self.mode == GameMode::Multiplayer && self.multiplayer_option == option
    }

    /// Selects `card` and shows its detail dialog.
    #[instrument(skip(self, card), fields(card_id = card.id()))]
    pub fn open_card_detail(&mut self, card: CardOffer) {
        debug!("Opening card detail");
        self.selected_card = Some(card);
        self.card_detail_open = true;
    }

    /// Hides the detail dialog. The selected card is kept.
    #[instrument(skip(self))]
    pub fn close_card_detail(&mut self) {
        self.card_detail_open = false;
    }

    /// Marks the character picker for `side` as open.
    #[instrument(skip(self))]
    pub fn open_character_select(&mut self, side: Side) {
        self.character_select = Some(side);
    }

    /// Marks the character picker as closed.
    #[instrument(skip(self))]
    pub fn close_character_select(&mut self) {
        self.character_select = None;
    }

    /// Stores the committed character for `side`, replacing any earlier pick.
    #[instrument(skip(self, item), fields(item_id = %item.id()))]
    pub fn record_pick(&mut self, side: Side, item: SelectableItem) {
        info!(side = %side, "Recording character pick");
        match side {
            Side::Left => self.left_pick = Some(item),
            Side::Right => self.right_pick = Some(item),
        }
    }

    /// The character picked for `side`, if any.
    #[instrument(skip(self))]
    pub fn pick(&self, side: Side) -> Option<&SelectableItem> {
        match side {
            Side::Left => self.left_pick.as_ref(),
            Side::Right => self.right_pick.as_ref(),
        }
    }

    /// What the local-play slot for `side` should display.
    #[instrument(skip(self))]
    pub fn slot_marker(&self, side: Side) -> SlotMarker {
        if let Some(item) = self.pick(side) {
            return SlotMarker::Character(item.clone());
        }
        if self.mode == GameMode::Local && self.local_side == side {
            SlotMarker::Active
        } else {
            SlotMarker::Empty
        }
    }

    /// Stand-in for adding `card` to a cart. Only sets a notice.
    #[instrument(skip(self, card), fields(card_id = card.id()))]
    pub fn add_to_cart(&mut self, card: &CardOffer) -> &str {
        let message = format!("Add {} to cart for {}", card.title(), card.price());
        self.post_notice(message)
    }

    /// Stand-in for purchasing the selected card. Only sets a notice.
    ///
    /// Returns `None` when no card is selected.
    #[instrument(skip(self))]
    pub fn purchase_selected(&mut self) -> Option<&str> {
        let card = self.selected_card.as_ref()?;
        let message = format!("Purchase {} for {}", card.title(), card.price());
        Some(self.post_notice(message))
    }

    /// Clears the current notice.
    #[instrument(skip(self))]
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn post_notice(&mut self, message: String) -> &str {
        info!(notice = %message, "Notice posted");
        self.notice.insert(message).as_str()
    }
}
