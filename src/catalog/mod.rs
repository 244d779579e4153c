//! Storefront catalog: characters and card sets, built in or loaded from TOML.

mod builtin;
mod error;
mod roster;
mod types;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

pub use error::CatalogError;
pub use roster::Roster;
pub use types::{CardOffer, ChessRole, PieceRole, SelectableItem};

/// Environment variable naming a catalog file to load.
pub const CATALOG_ENV_VAR: &str = "CHESS_TWO_CATALOG";

/// Everything the storefront displays for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Catalog {
    characters: Roster,
    cards: Vec<CardOffer>,
}

/// On-disk shape of a catalog file before validation.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    characters: Vec<SelectableItem>,
    #[serde(default)]
    cards: Vec<CardOffer>,
}

impl Catalog {
    /// Builds a catalog, validating characters and card ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the roster is empty, character ids repeat,
    /// or card ids repeat.
    #[instrument(skip_all, fields(characters = characters.len(), cards = cards.len()))]
    pub fn new(
        characters: Vec<SelectableItem>,
        cards: Vec<CardOffer>,
    ) -> Result<Self, CatalogError> {
        let characters = Roster::new(characters)?;

        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(*card.id()) {
                return Err(CatalogError::new(format!("Duplicate card id: {}", card.id())));
            }
        }

        Ok(Self { characters, cards })
    }

    /// Returns the built-in catalog.
    #[instrument]
    pub fn builtin() -> Self {
        debug!("Using built-in catalog");
        Self {
            characters: Roster::trusted(builtin::characters()),
            cards: builtin::cards(),
        }
    }

    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on malformed TOML or invalid contents.
    #[instrument(skip(content), fields(bytes = content.len()))]
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.characters, file.cards)
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!("Loading catalog from file");
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::new(format!(
                "Failed to read catalog file {}: {}",
                path.display(),
                e
            ))
        })?;
        let catalog = Self::from_toml_str(&content)?;
        info!(
            characters = catalog.characters.len(),
            cards = catalog.cards.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Loads the catalog for a session.
    ///
    /// Resolution order:
    /// 1. `explicit`, when given
    /// 2. `$CHESS_TWO_CATALOG`
    /// 3. `$XDG_CONFIG_HOME/chess_two/catalog.toml`, if it exists
    /// 4. the built-in catalog
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if a resolved file cannot be loaded.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, CatalogError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var(CATALOG_ENV_VAR) {
            debug!(path = %path, "Using {} env var", CATALOG_ENV_VAR);
            return Self::from_file(path);
        }

        if let Some(path) = Self::default_path()
            && path.is_file()
        {
            debug!(path = %path.display(), "Using XDG_CONFIG_HOME catalog");
            return Self::from_file(path);
        }

        Ok(Self::builtin())
    }

    /// Returns `$XDG_CONFIG_HOME/chess_two/catalog.toml` when the variable is set.
    #[instrument]
    pub fn default_path() -> Option<PathBuf> {
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(|xdg| PathBuf::from(xdg).join("chess_two").join("catalog.toml"))
    }

    /// Looks up a card by id.
    #[instrument(skip(self))]
    pub fn card(&self, id: u32) -> Option<&CardOffer> {
        self.cards.iter().find(|c| *c.id() == id)
    }
}
