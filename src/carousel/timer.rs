//! Cancellable settle timer.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, instrument, trace};

use crate::{EventSender, SettleTicket, Side, StorefrontEvent};

/// A scheduled settle notification. Aborts the timer on drop.
#[derive(Debug)]
pub struct SettleTask {
    ticket: SettleTicket,
    handle: JoinHandle<()>,
}

impl SettleTask {
    /// Schedules a [`StorefrontEvent::Settled`] for `ticket` after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(events))]
    pub fn spawn(side: Side, ticket: SettleTicket, delay: Duration, events: EventSender) -> Self {
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            trace!(side = %side, ticket = %ticket, "Settle delay elapsed");
            if events
                .send(StorefrontEvent::Settled { side, ticket })
                .is_err()
            {
                debug!(ticket = %ticket, "Event channel closed before settle");
            }
        });
        Self { ticket, handle }
    }

    /// Ticket this task will report.
    pub fn ticket(&self) -> SettleTicket {
        self.ticket
    }
}

impl Drop for SettleTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!(ticket = %self.ticket, "Cancelling pending settle");
        }
        self.handle.abort();
    }
}
