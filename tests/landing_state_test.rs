//! Tests for the landing view's cross-component selection state.

use chess_two::{
    Catalog, GameMode, LandingState, MultiplayerOption, SelectableItem, Side, SlotMarker,
};

#[test]
fn test_initial_state() {
    let state = LandingState::new();
    assert_eq!(*state.mode(), GameMode::Local);
    assert_eq!(*state.local_side(), Side::Left);
    assert_eq!(state.selected_card(), &None);
    assert!(!*state.card_detail_open());
    assert_eq!(state.character_select(), &None);
    assert_eq!(state.notice(), &None);
    assert_eq!(state.slot_marker(Side::Left), SlotMarker::Active);
    assert_eq!(state.slot_marker(Side::Right), SlotMarker::Empty);
}

#[test]
fn test_choosing_local_slot_opens_picker() {
    let mut state = LandingState::new();
    state.choose_multiplayer(MultiplayerOption::Private);
    state.choose_local_side(Side::Right);

    assert_eq!(*state.mode(), GameMode::Local);
    assert_eq!(*state.local_side(), Side::Right);
    assert_eq!(state.character_select(), &Some(Side::Right));
    assert!(!state.is_multiplayer_selected(MultiplayerOption::Private));

    state.close_character_select();
    assert_eq!(state.character_select(), &None);
}

#[test]
fn test_multiplayer_toggle() {
    let mut state = LandingState::new();
    state.choose_multiplayer(MultiplayerOption::Private);

    assert_eq!(*state.mode(), GameMode::Multiplayer);
    assert!(state.is_multiplayer_selected(MultiplayerOption::Private));
    assert!(!state.is_multiplayer_selected(MultiplayerOption::Random));
    assert_eq!(state.slot_marker(Side::Left), SlotMarker::Empty);
}

#[test]
fn test_card_kept_after_detail_closes() {
    let catalog = Catalog::builtin();
    let card = catalog.card(2).expect("Card 2 exists").clone();
    let mut state = LandingState::new();

    state.open_card_detail(card.clone());
    assert!(*state.card_detail_open());
    state.close_card_detail();

    assert!(!*state.card_detail_open());
    assert_eq!(state.selected_card(), &Some(card));
}

#[test]
fn test_notices() {
    let catalog = Catalog::builtin();
    let mut state = LandingState::new();

    assert_eq!(state.purchase_selected(), None);

    let jacked = catalog.card(3).expect("Card 3 exists");
    assert_eq!(state.add_to_cart(jacked), "Add JACKED to cart for £5.99");

    state.open_card_detail(catalog.card(4).expect("Card 4 exists").clone());
    assert_eq!(state.purchase_selected(), Some("Purchase DIVINE for £7.99"));
    assert_eq!(state.notice().as_deref(), Some("Purchase DIVINE for £7.99"));

    state.dismiss_notice();
    assert_eq!(state.notice(), &None);
}

#[test]
fn test_picks_replace_and_show_in_slots() {
    let mut state = LandingState::new();
    let zeus = SelectableItem::new("zeus", "Zeus", "", "#3b82f6");
    let hades = SelectableItem::new("hades", "Hades", "", "#6b21a8");

    state.record_pick(Side::Right, zeus.clone());
    assert_eq!(state.pick(Side::Right), Some(&zeus));
    assert_eq!(state.pick(Side::Left), None);
    assert_eq!(state.slot_marker(Side::Right), SlotMarker::Character(zeus));

    state.record_pick(Side::Right, hades.clone());
    assert_eq!(state.slot_marker(Side::Right), SlotMarker::Character(hades));
}
