//! Events delivered to the lobby controller from carousel sessions.

use std::sync::atomic::{AtomicU64, Ordering};

use derive_more::Display;
use tokio::sync::mpsc;

use crate::{SelectableItem, Side};

/// Sending half of the controller's event channel.
pub type EventSender = mpsc::UnboundedSender<StorefrontEvent>;

/// Receiving half of the controller's event channel.
pub type EventReceiver = mpsc::UnboundedReceiver<StorefrontEvent>;

/// Creates the controller's event channel.
pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one scheduled settle notification.
///
/// Tickets are unique for the lifetime of the process, so a notification that
/// was already queued when its session closed can never match a later session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("#{_0}")]
pub struct SettleTicket(u64);

impl SettleTicket {
    /// Issues a fresh ticket.
    pub fn next() -> Self {
        Self(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }
}

/// Something a carousel session reports back to its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorefrontEvent {
    /// The settle delay for a transition elapsed.
    Settled {
        /// Side the carousel session was opened for.
        side: Side,
        /// Ticket of the transition that settled.
        ticket: SettleTicket,
    },
    /// The user committed a character choice.
    CharacterCommitted {
        /// Side the choice applies to.
        side: Side,
        /// The chosen character, copied at commit time.
        item: SelectableItem,
    },
}
