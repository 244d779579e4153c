//! Tests for the character carousel selection state machine.

use std::time::Duration;

use chess_two::{
    CarouselConfig, CarouselPhase, CarouselSession, EventReceiver, Navigation, Roster,
    SelectableItem, Side, SlideDirection, StorefrontEvent, event_channel,
};

/// Builds a roster of `n` items with ids `item0..itemN`.
fn roster(n: usize) -> Roster {
    let items = (0..n)
        .map(|i| SelectableItem::new(format!("item{i}"), format!("Item {i}"), "", "white"))
        .collect();
    Roster::new(items).expect("Valid roster")
}

fn open(n: usize) -> (CarouselSession, EventReceiver) {
    let (tx, rx) = event_channel();
    let session = CarouselSession::open(Side::Left, roster(n), CarouselConfig::default(), tx);
    (session, rx)
}

/// Opens a session whose drag threshold is `threshold` columns.
fn open_with_threshold(n: usize, threshold: i32) -> (CarouselSession, EventReceiver) {
    let (tx, rx) = event_channel();
    let config = CarouselConfig::new(Duration::from_millis(300), threshold);
    let session = CarouselSession::open(Side::Left, roster(n), config, tx);
    (session, rx)
}

/// Waits for the pending settle notification and feeds it back.
async fn settle(session: &mut CarouselSession, rx: &mut EventReceiver) {
    match rx.recv().await {
        Some(StorefrontEvent::Settled { side, ticket }) => {
            assert_eq!(side, session.side());
            assert!(session.handle_settled(ticket), "Settle should be accepted");
        }
        other => panic!("Expected settle event, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_opens_idle_at_first_item() {
    let (session, _rx) = open(4);
    assert!(session.is_open());
    assert_eq!(session.selected_index(), 0);
    assert_eq!(session.phase(), CarouselPhase::Idle);
    assert_eq!(*session.state().slide_direction(), SlideDirection::None);
    assert!(session.pending_ticket().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_index_stays_in_range_for_any_sequence() {
    for n in 1..=7 {
        let (mut session, mut rx) = open(n);
        let mut seed: u32 = 17 + n as u32;
        for _ in 0..40 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let accepted = if seed & 0x100 == 0 {
                session.advance()
            } else {
                session.retreat()
            };
            assert!(accepted, "Idle session should accept navigation");
            assert!(session.selected_index() < n);
            settle(&mut session, &mut rx).await;
            assert!(session.selected_index() < n);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_advance_wraps_at_end_and_retreat_wraps_at_start() {
    let (mut session, mut rx) = open(3);

    assert!(session.retreat());
    assert_eq!(session.selected_index(), 2);
    settle(&mut session, &mut rx).await;

    assert!(session.advance());
    assert_eq!(session.selected_index(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_advance_then_retreat_restores_index() {
    let (mut session, mut rx) = open(5);

    assert!(session.advance());
    settle(&mut session, &mut rx).await;
    assert!(session.advance());
    settle(&mut session, &mut rx).await;
    let before = session.selected_index();

    assert!(session.advance());
    settle(&mut session, &mut rx).await;
    assert!(session.retreat());
    settle(&mut session, &mut rx).await;

    assert_eq!(session.selected_index(), before);
}

#[tokio::test(start_paused = true)]
async fn test_navigation_while_transitioning_is_noop() {
    let (mut session, mut rx) = open(6);

    assert!(session.advance());
    assert_eq!(session.phase(), CarouselPhase::Transitioning);
    assert_eq!(*session.state().slide_direction(), SlideDirection::Left);
    let ticket = session.pending_ticket();

    assert!(!session.advance());
    assert!(!session.retreat());
    assert_eq!(session.selected_index(), 1);
    assert_eq!(*session.state().slide_direction(), SlideDirection::Left);
    assert_eq!(session.pending_ticket(), ticket);

    settle(&mut session, &mut rx).await;
    assert_eq!(session.phase(), CarouselPhase::Idle);
    assert_eq!(*session.state().slide_direction(), SlideDirection::None);
}

#[tokio::test(start_paused = true)]
async fn test_retreat_slides_right() {
    let (mut session, _rx) = open(6);
    assert!(session.retreat());
    assert_eq!(*session.state().slide_direction(), SlideDirection::Right);
}

#[tokio::test(start_paused = true)]
async fn test_settles_after_configured_delay() {
    let (tx, mut rx) = event_channel();
    let config = CarouselConfig::new(Duration::from_millis(300), 50);
    let mut session = CarouselSession::open(Side::Right, roster(3), config, tx);

    let start = tokio::time::Instant::now();
    assert!(session.advance());
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(299)).await;
    assert!(rx.try_recv().is_err(), "Settle must not fire early");

    match rx.recv().await {
        Some(StorefrontEvent::Settled { side, ticket }) => {
            assert!(start.elapsed() >= Duration::from_millis(300));
            assert_eq!(side, Side::Right);
            assert!(session.handle_settled(ticket));
        }
        other => panic!("Expected settle event, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_drag_past_threshold_navigates_once() {
    // Rightward drag retreats.
    let (mut session, _rx) = open_with_threshold(6, 50);
    assert!(session.begin_drag(100));
    assert!(session.update_drag(151));
    assert_eq!(*session.state().drag_offset(), 51);
    assert_eq!(session.end_drag(), Some(Navigation::Retreated));
    assert_eq!(session.selected_index(), 5);
    assert!(!*session.state().is_dragging());

    // Leftward drag advances.
    let (mut session, _rx) = open_with_threshold(6, 50);
    session.begin_drag(100);
    session.update_drag(49);
    assert_eq!(session.end_drag(), Some(Navigation::Advanced));
    assert_eq!(session.selected_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_drag_within_threshold_does_nothing() {
    for end in [149, 51, 150, 50] {
        let (mut session, _rx) = open_with_threshold(6, 50);
        session.begin_drag(100);
        session.update_drag(end);
        assert_eq!(session.end_drag(), None, "Offset {} should not navigate", end - 100);
        assert_eq!(session.selected_index(), 0);
        assert_eq!(session.phase(), CarouselPhase::Idle);
        assert!(session.pending_ticket().is_none());
        assert_eq!(*session.state().drag_offset(), 0);
    }
}

#[tokio::test(start_paused = true)]
async fn test_default_threshold_is_six_columns() {
    assert_eq!(*CarouselConfig::default().drag_threshold(), 6);

    let (mut session, _rx) = open(6);
    session.begin_drag(40);
    session.update_drag(34);
    assert_eq!(session.end_drag(), None);

    session.begin_drag(40);
    session.update_drag(33);
    assert_eq!(session.end_drag(), Some(Navigation::Advanced));
    assert_eq!(session.selected_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_drag_guards() {
    let (mut session, _rx) = open(3);

    assert!(!session.update_drag(10), "No drag active yet");
    assert_eq!(session.end_drag(), None);

    assert!(session.begin_drag(10));
    assert!(!session.begin_drag(90), "Drag already active");
    session.update_drag(90);
    assert_eq!(*session.state().drag_offset(), 80);
}

#[tokio::test(start_paused = true)]
async fn test_drag_release_while_transitioning_only_clears_drag() {
    let (mut session, _rx) = open(4);
    assert!(session.advance());

    session.begin_drag(0);
    session.update_drag(-80);
    assert_eq!(session.end_drag(), None);
    assert_eq!(session.selected_index(), 1);
    assert!(!*session.state().is_dragging());
}

#[tokio::test(start_paused = true)]
async fn test_wheel_scenario_three_items() {
    let (tx, mut rx) = event_channel();
    let items = vec![
        SelectableItem::new("a", "A", "", "red"),
        SelectableItem::new("b", "B", "", "green"),
        SelectableItem::new("c", "C", "", "blue"),
    ];
    let mut session = CarouselSession::open(
        Side::Left,
        Roster::new(items).expect("Valid roster"),
        CarouselConfig::default(),
        tx,
    );

    assert_eq!(session.scroll(1), Some(Navigation::Advanced));
    settle(&mut session, &mut rx).await;
    assert_eq!(session.scroll(3), Some(Navigation::Advanced));
    settle(&mut session, &mut rx).await;
    assert_eq!(session.selected_index(), 2);
    assert_eq!(session.current_item().id(), "c");

    assert_eq!(session.scroll(-1), Some(Navigation::Retreated));
    settle(&mut session, &mut rx).await;
    assert_eq!(session.selected_index(), 1);
    assert_eq!(session.current_item().id(), "b");

    assert_eq!(session.scroll(0), None);
}

#[tokio::test(start_paused = true)]
async fn test_commit_emits_selected_item_and_closes() {
    let (mut session, mut rx) = open(6);
    for _ in 0..3 {
        assert!(session.advance());
        settle(&mut session, &mut rx).await;
    }
    assert_eq!(session.selected_index(), 3);

    let committed = session.commit_selection().expect("Commit should succeed");
    assert_eq!(committed.id(), "item3");
    assert!(!session.is_open(), "Commit signals close");

    match rx.try_recv() {
        Ok(StorefrontEvent::CharacterCommitted { side, item }) => {
            assert_eq!(side, Side::Left);
            assert_eq!(item.id(), "item3");
        }
        other => panic!("Expected commit event, got {other:?}"),
    }
    assert!(rx.try_recv().is_err(), "Exactly one event is emitted");
}

#[tokio::test(start_paused = true)]
async fn test_commit_is_single_shot() {
    let (mut session, mut rx) = open(2);
    assert!(session.commit_selection().is_some());
    assert!(session.commit_selection().is_none());
    assert!(!session.advance(), "Closed session ignores navigation");

    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_close_cancels_pending_settle() {
    let (mut session, mut rx) = open(4);
    assert!(session.advance());
    let ticket = session.pending_ticket().expect("Pending settle");

    session.close();
    tokio::time::advance(Duration::from_secs(1)).await;
    tokio::task::yield_now().await;

    assert!(rx.try_recv().is_err(), "Cancelled timer must not fire");
    assert!(!session.handle_settled(ticket));
    assert!(session.commit_selection().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_reset_returns_to_first_item_and_ignores_old_ticket() {
    let (mut session, mut rx) = open(5);
    assert!(session.advance());
    settle(&mut session, &mut rx).await;
    assert!(session.advance());
    let stale = session.pending_ticket().expect("Pending settle");

    session.reset();
    assert_eq!(session.selected_index(), 0);
    assert_eq!(session.phase(), CarouselPhase::Idle);
    assert!(session.is_open());
    assert!(!session.handle_settled(stale));

    // A reset session can commit again.
    let item = session.commit_selection().expect("Re-armed commit");
    assert_eq!(item.id(), "item0");
}

#[tokio::test(start_paused = true)]
async fn test_neighbours_wrap() {
    let (session, _rx) = open(4);
    assert_eq!(session.previous_item().id(), "item3");
    assert_eq!(session.current_item().id(), "item0");
    assert_eq!(session.next_item().id(), "item1");

    let (mut single, mut rx) = open(1);
    assert_eq!(single.previous_item(), single.current_item());
    assert!(single.advance());
    assert_eq!(single.selected_index(), 0);
    settle(&mut single, &mut rx).await;
}
