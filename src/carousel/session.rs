//! Carousel session: the selection state machine behind the character picker.

use tracing::{debug, info, instrument, warn};

use crate::carousel::state::{CarouselConfig, CarouselPhase, CarouselState, Navigation, Side, SlideDirection};
use crate::carousel::timer::SettleTask;
use crate::{EventSender, Roster, SelectableItem, SettleTicket, StorefrontEvent};

/// Single-shot reporter for the committed item.
#[derive(Debug)]
struct CommitSink {
    side: Side,
    events: EventSender,
}

impl CommitSink {
    fn emit(self, item: SelectableItem) {
        if self
            .events
            .send(StorefrontEvent::CharacterCommitted {
                side: self.side,
                item,
            })
            .is_err()
        {
            warn!(side = %self.side, "Event channel closed; commit dropped");
        }
    }
}

/// One open instance of the character carousel.
///
/// The session moves between [`CarouselPhase::Idle`] and
/// [`CarouselPhase::Transitioning`]. Every accepted navigation schedules a
/// [`SettleTask`]; the host feeds the resulting
/// [`StorefrontEvent::Settled`] back through [`CarouselSession::handle_settled`].
/// Dropping or closing the session cancels the pending task, and any
/// notification that still arrives afterwards is ignored.
///
/// Navigation spawns a tokio task, so a runtime must be active.
#[derive(Debug)]
pub struct CarouselSession {
    side: Side,
    roster: Roster,
    config: CarouselConfig,
    state: CarouselState,
    events: EventSender,
    sink: Option<CommitSink>,
    pending: Option<SettleTask>,
    open: bool,
}

impl CarouselSession {
    /// Opens a session for `side`, starting at the first item.
    #[instrument(skip(roster, events), fields(items = roster.len()))]
    pub fn open(side: Side, roster: Roster, config: CarouselConfig, events: EventSender) -> Self {
        info!(side = %side, "Opening carousel session");
        let mut session = Self {
            side,
            roster,
            config,
            state: CarouselState::default(),
            events,
            sink: None,
            pending: None,
            open: false,
        };
        session.reset();
        session
    }

    /// Returns the session to its initial state: first item, idle, no drag.
    ///
    /// Cancels any pending settle and re-arms the commit sink, so a reset
    /// session can commit again.
    #[instrument(skip(self), fields(side = %self.side))]
    pub fn reset(&mut self) {
        debug!("Resetting carousel session");
        self.pending = None;
        self.state = CarouselState::default();
        self.sink = Some(CommitSink {
            side: self.side,
            events: self.events.clone(),
        });
        self.open = true;
    }

    /// Tears the session down. Later input and notifications are ignored.
    #[instrument(skip(self), fields(side = %self.side))]
    pub fn close(&mut self) {
        if self.open {
            debug!("Closing carousel session");
        }
        self.open = false;
        self.pending = None;
        self.sink = None;
        self.state.clear_drag();
    }

    /// Whether the session still accepts input.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Side this session selects for.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Items being browsed.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Active configuration.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Current interaction state.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Index of the centred item.
    pub fn selected_index(&self) -> usize {
        self.state.selected_index
    }

    /// Current phase.
    pub fn phase(&self) -> CarouselPhase {
        self.state.phase()
    }

    /// Ticket of the transition currently settling, if any.
    pub fn pending_ticket(&self) -> Option<SettleTicket> {
        self.pending.as_ref().map(SettleTask::ticket)
    }

    /// Moves to the next item, wrapping at the end.
    ///
    /// Returns `false` without touching state while a transition is settling.
    #[instrument(skip(self), fields(side = %self.side, index = self.state.selected_index))]
    pub fn advance(&mut self) -> bool {
        self.navigate(SlideDirection::Left)
    }

    /// Moves to the previous item, wrapping at the start.
    ///
    /// Returns `false` without touching state while a transition is settling.
    #[instrument(skip(self), fields(side = %self.side, index = self.state.selected_index))]
    pub fn retreat(&mut self) -> bool {
        self.navigate(SlideDirection::Right)
    }

    fn navigate(&mut self, direction: SlideDirection) -> bool {
        if !self.open {
            debug!("Navigation on closed session ignored");
            return false;
        }
        if self.state.is_animating {
            debug!(direction = %direction, "Navigation rejected while transitioning");
            return false;
        }

        let len = self.roster.len();
        let current = self.state.selected_index;
        let next = match direction {
            SlideDirection::Left => (current + 1) % len,
            SlideDirection::Right => (current + len - 1) % len,
            SlideDirection::None => return false,
        };

        self.state.selected_index = next;
        self.state.slide_direction = direction;
        self.state.is_animating = true;

        let ticket = SettleTicket::next();
        self.pending = Some(SettleTask::spawn(
            self.side,
            ticket,
            *self.config.settle_delay(),
            self.events.clone(),
        ));

        debug!(from = current, to = next, ticket = %ticket, "Transition started");
        true
    }

    /// Ends the transition identified by `ticket`.
    ///
    /// Returns `false` for stale tickets or closed sessions.
    #[instrument(skip(self), fields(side = %self.side))]
    pub fn handle_settled(&mut self, ticket: SettleTicket) -> bool {
        if !self.open {
            debug!("Settle for closed session ignored");
            return false;
        }
        if self.pending_ticket() != Some(ticket) {
            debug!(pending = ?self.pending_ticket(), "Stale settle ignored");
            return false;
        }

        self.pending = None;
        self.state.is_animating = false;
        self.state.slide_direction = SlideDirection::None;
        debug!(index = self.state.selected_index, "Transition settled");
        true
    }

    /// Starts a drag at `pointer_x`. Ignored if a drag is already active.
    #[instrument(skip(self), fields(side = %self.side))]
    pub fn begin_drag(&mut self, pointer_x: i32) -> bool {
        if !self.open || self.state.is_dragging {
            return false;
        }
        self.state.is_dragging = true;
        self.state.drag_origin = pointer_x;
        self.state.drag_offset = 0;
        true
    }

    /// Tracks the pointer during a drag.
    #[instrument(skip(self), fields(side = %self.side))]
    pub fn update_drag(&mut self, pointer_x: i32) -> bool {
        if !self.state.is_dragging {
            return false;
        }
        self.state.drag_offset = pointer_x - self.state.drag_origin;
        true
    }

    /// Releases the drag, navigating if the offset passed the threshold.
    ///
    /// A rightward drag retreats and a leftward drag advances, like pulling
    /// the strip of cards. Drag state is always cleared.
    #[instrument(skip(self), fields(side = %self.side, offset = self.state.drag_offset))]
    pub fn end_drag(&mut self) -> Option<Navigation> {
        let was_dragging = self.state.is_dragging;
        let offset = self.state.drag_offset;
        self.state.clear_drag();

        if !was_dragging || !self.open {
            return None;
        }

        let threshold = *self.config.drag_threshold();
        if offset > threshold {
            self.retreat().then_some(Navigation::Retreated)
        } else if offset < -threshold {
            self.advance().then_some(Navigation::Advanced)
        } else {
            debug!("Drag released under threshold");
            None
        }
    }

    /// Navigates by wheel delta: positive advances, negative retreats.
    #[instrument(skip(self), fields(side = %self.side))]
    pub fn scroll(&mut self, delta: i32) -> Option<Navigation> {
        match delta.signum() {
            1 => self.advance().then_some(Navigation::Advanced),
            -1 => self.retreat().then_some(Navigation::Retreated),
            _ => None,
        }
    }

    /// Reports the centred item to the host and closes the session.
    ///
    /// Emits at most once per open session; returns the committed item.
    #[instrument(skip(self), fields(side = %self.side, index = self.state.selected_index))]
    pub fn commit_selection(&mut self) -> Option<SelectableItem> {
        if !self.open {
            debug!("Commit on closed session ignored");
            return None;
        }
        let sink = self.sink.take()?;
        let item = self.current_item().clone();
        info!(item_id = %item.id(), "Character committed");
        sink.emit(item.clone());
        self.close();
        Some(item)
    }

    /// The centred item.
    pub fn current_item(&self) -> &SelectableItem {
        self.roster.wrapped(self.state.selected_index)
    }

    /// The item to the left of centre.
    pub fn previous_item(&self) -> &SelectableItem {
        let len = self.roster.len();
        self.roster.wrapped(self.state.selected_index + len - 1)
    }

    /// The item to the right of centre.
    pub fn next_item(&self) -> &SelectableItem {
        self.roster.wrapped(self.state.selected_index + 1)
    }
}
