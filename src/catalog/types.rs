//! Catalog domain types: characters and purchasable card sets.

use derive_getters::Getters;
use derive_new::new;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, instrument};

/// A character that can be picked from the selection carousel.
///
/// Identity is by [`SelectableItem::id`]; everything else is display data.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SelectableItem {
    /// Stable identifier (e.g. `"zeus"`).
    id: String,
    /// Name shown on the carousel card.
    display_name: String,
    /// Reference to the portrait asset. Unused by the terminal renderer.
    #[serde(default)]
    image_ref: String,
    /// Theme colour, any value accepted by ratatui's colour parser.
    theme_color: String,
}

impl SelectableItem {
    /// Creates a new selectable item.
    #[instrument(skip_all)]
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        image_ref: impl Into<String>,
        theme_color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            image_ref: image_ref.into(),
            theme_color: theme_color.into(),
        }
    }

    /// Returns the first character of the display name, used as an avatar.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn initial(&self) -> String {
        self.display_name
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default()
    }

    /// Resolves the theme colour, falling back to white when unparseable.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn color(&self) -> Color {
        parse_color(&self.theme_color)
    }
}

/// The chess role a themed piece stands in for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum ChessRole {
    /// King.
    King,
    /// Queen.
    Queen,
    /// Rook.
    Rook,
    /// Bishop.
    Bishop,
    /// Knight.
    Knight,
    /// Pawn.
    Pawn,
}

/// One themed piece in a card set.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct PieceRole {
    /// Mythological figure the piece depicts.
    name: String,
    /// Flavour text.
    description: String,
    /// Chess role the piece plays.
    role: ChessRole,
}

/// A purchasable chess set shown in the storefront list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CardOffer {
    /// Unique card id.
    id: u32,
    /// Title text (e.g. `"JACKED"`).
    title: String,
    /// Optional title artwork; the terminal shows the text title regardless.
    #[serde(default)]
    title_image: Option<String>,
    /// Display price, already formatted (e.g. `"£5.99"` or `"Free"`).
    price: String,
    /// Banner colour.
    #[serde(default = "default_card_color")]
    theme_color: String,
    /// Long description shown in the detail dialog.
    description: String,
    /// Pieces included in the set.
    #[serde(default)]
    piece_roles: Vec<PieceRole>,
}

#[instrument]
fn default_card_color() -> String {
    "gray".to_string()
}

impl CardOffer {
    /// Creates a new card offer.
    #[instrument(skip(title, price, description, piece_roles))]
    pub fn new(
        id: u32,
        title: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
        piece_roles: Vec<PieceRole>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            title_image: None,
            price: price.into(),
            theme_color: default_card_color(),
            description: description.into(),
            piece_roles,
        }
    }

    /// Sets the title artwork reference.
    #[instrument(skip(self, title_image))]
    pub fn with_title_image(mut self, title_image: impl Into<String>) -> Self {
        self.title_image = Some(title_image.into());
        self
    }

    /// Sets the banner colour.
    #[instrument(skip(self, theme_color))]
    pub fn with_theme_color(mut self, theme_color: impl Into<String>) -> Self {
        self.theme_color = theme_color.into();
        self
    }

    /// Returns `true` if the set costs nothing.
    #[instrument(skip(self), fields(id = self.id))]
    pub fn is_free(&self) -> bool {
        self.price.eq_ignore_ascii_case("free")
    }

    /// Resolves the banner colour, falling back to white when unparseable.
    #[instrument(skip(self), fields(id = self.id))]
    pub fn color(&self) -> Color {
        parse_color(&self.theme_color)
    }
}

fn parse_color(raw: &str) -> Color {
    raw.parse::<Color>().unwrap_or_else(|_| {
        debug!(raw, "Unparseable theme colour, using white");
        Color::White
    })
}
