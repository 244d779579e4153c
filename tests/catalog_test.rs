//! Tests for catalog loading and validation.

use std::io::Write;

use chess_two::{Catalog, ChessRole, Roster, SelectableItem};
use ratatui::style::Color;
use strum::IntoEnumIterator;
use tempfile::NamedTempFile;

const SMALL_CATALOG: &str = r##"
[[characters]]
id = "odin"
display_name = "Odin"
theme_color = "#1e3a8a"

[[characters]]
id = "thor"
display_name = "Thor"
image_ref = "/characters/thor.png"
theme_color = "yellow"

[[cards]]
id = 7
title = "NORSE"
price = "£3.49"
description = "A test set"

[[cards.piece_roles]]
name = "Odin"
role = "King"
description = "The Allfather."

[[cards.piece_roles]]
name = "Sleipnir"
role = "Knight"
description = "Eight legs."
"##;

#[test]
fn test_builtin_catalog_contents() {
    let catalog = Catalog::builtin();

    assert_eq!(catalog.characters().len(), 6);
    let ids: Vec<&str> = catalog
        .characters()
        .items()
        .iter()
        .map(|c| c.id().as_str())
        .collect();
    assert_eq!(ids, ["zeus", "athena", "ares", "apollo", "hades", "poseidon"]);

    assert_eq!(catalog.cards().len(), 4);
    for card in catalog.cards() {
        assert_eq!(card.piece_roles().len(), 6, "Card {} piece count", card.id());
        let roles: Vec<ChessRole> = card.piece_roles().iter().map(|p| *p.role()).collect();
        let expected: Vec<ChessRole> = ChessRole::iter().collect();
        assert_eq!(roles, expected);
    }
}

#[test]
fn test_builtin_card_prices() {
    let catalog = Catalog::builtin();
    let jacked = catalog.card(3).expect("Card 3 exists");
    assert_eq!(jacked.title(), "JACKED");
    assert_eq!(jacked.price(), "£5.99");
    assert!(!jacked.is_free());
    assert!(catalog.card(1).expect("Card 1 exists").is_free());
    assert!(catalog.card(99).is_none());
}

#[test]
fn test_load_catalog_from_toml_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(SMALL_CATALOG.as_bytes())
        .expect("Failed to write catalog");

    let catalog = Catalog::from_file(file.path()).expect("Catalog should load");
    assert_eq!(catalog.characters().len(), 2);
    let thor = catalog.characters().find("thor").expect("Thor present");
    assert_eq!(thor.image_ref(), "/characters/thor.png");
    assert_eq!(thor.color(), Color::Yellow);

    let card = catalog.card(7).expect("Card 7 present");
    assert_eq!(card.theme_color(), "gray", "Missing colour takes the default");
    assert_eq!(card.title_image(), &None);
    assert_eq!(*card.piece_roles()[1].role(), ChessRole::Knight);
}

#[test]
fn test_load_prefers_explicit_path() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(SMALL_CATALOG.as_bytes())
        .expect("Failed to write catalog");

    let catalog = Catalog::load(Some(file.path())).expect("Catalog should load");
    assert_eq!(catalog.characters().len(), 2);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = Catalog::from_file(dir.path().join("absent.toml"));
    let err = result.expect_err("Missing file should fail");
    assert!(err.message.contains("Failed to read catalog file"));
}

#[test]
fn test_empty_roster_rejected() {
    let result = Catalog::from_toml_str("characters = []\n");
    assert!(result.is_err());
    assert!(Roster::new(Vec::new()).is_err());
}

#[test]
fn test_duplicate_ids_rejected() {
    let items = vec![
        SelectableItem::new("zeus", "Zeus", "", "blue"),
        SelectableItem::new("zeus", "Zeus again", "", "red"),
    ];
    assert!(Roster::new(items).is_err());

    let builtin = Catalog::builtin();
    let mut cards = builtin.cards().clone();
    cards.push(cards[0].clone());
    let result = Catalog::new(builtin.characters().items().to_vec(), cards);
    assert!(result.is_err());
}

#[test]
fn test_malformed_toml_rejected() {
    assert!(Catalog::from_toml_str("characters = [ {").is_err());
}

#[test]
fn test_roster_wraps_indices() {
    let roster = Catalog::builtin().characters().clone();
    assert_eq!(roster.wrapped(6).id(), "zeus");
    assert_eq!(roster.wrapped(13).id(), "athena");
    assert_eq!(roster.get(2).map(|c| c.id().as_str()), Some("ares"));
    assert!(roster.get(6).is_none());
    assert!(!roster.is_empty());
}

#[test]
fn test_item_avatar_and_colour() {
    let item = SelectableItem::new("hades", "Hades", "", "#ff0000");
    assert_eq!(item.initial(), "H");
    assert_eq!(item.color(), Color::Rgb(0xff, 0, 0));

    let odd = SelectableItem::new("x", "", "", "not-a-colour");
    assert_eq!(odd.initial(), "");
    assert_eq!(odd.color(), Color::White);
}

#[test]
fn test_role_names_parse() {
    assert_eq!("Knight".parse::<ChessRole>().ok(), Some(ChessRole::Knight));
    assert_eq!(ChessRole::Queen.to_string(), "Queen");
    assert!("Jester".parse::<ChessRole>().is_err());
}
