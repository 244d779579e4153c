//! Storefront controller: the event loop driving the landing screen and its dialogs.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::{Frame, Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument, warn};

use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::screens::{CardDetailDialog, CharacterSelectDialog, LandingScreen};
use crate::{
    CarouselConfig, CarouselSession, Catalog, EventReceiver, EventSender, Side, StorefrontEvent,
    event_channel,
};

/// Modal dialog currently shown over the landing screen.
#[derive(Debug)]
enum ActiveDialog {
    CardDetail(CardDetailDialog),
    CharacterSelect(CharacterSelectDialog),
}

/// Which dialog is open, for callers that only need to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// The card detail dialog.
    CardDetail,
    /// The character carousel for a side.
    CharacterSelect(Side),
}

/// Controller that owns the landing screen, at most one dialog, and the
/// event channel carousel sessions report on.
///
/// Call [`StorefrontController::run`] to start the event loop.
#[derive(Debug)]
pub struct StorefrontController {
    catalog: Catalog,
    carousel_config: CarouselConfig,
    landing: LandingScreen,
    dialog: Option<ActiveDialog>,
    events_tx: EventSender,
    events_rx: EventReceiver,
}

impl StorefrontController {
    /// Creates a new controller for the given catalog.
    #[instrument(skip(catalog))]
    pub fn new(catalog: Catalog, carousel_config: CarouselConfig) -> Self {
        info!("Creating StorefrontController");
        let (events_tx, events_rx) = event_channel();
        Self {
            landing: LandingScreen::new(&catalog),
            catalog,
            carousel_config,
            dialog: None,
            events_tx,
            events_rx,
        }
    }

    /// The catalog on display.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The landing screen and its selection state.
    pub fn landing(&self) -> &LandingScreen {
        &self.landing
    }

    /// Which dialog is open, if any.
    pub fn open_dialog(&self) -> Option<DialogKind> {
        self.dialog.as_ref().map(|dialog| match dialog {
            ActiveDialog::CardDetail(_) => DialogKind::CardDetail,
            ActiveDialog::CharacterSelect(d) => DialogKind::CharacterSelect(d.session().side()),
        })
    }

    /// The open carousel session, if the character dialog is showing.
    pub fn carousel(&self) -> Option<&CarouselSession> {
        match &self.dialog {
            Some(ActiveDialog::CharacterSelect(d)) => Some(d.session()),
            _ => None,
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting storefront event loop");

        loop {
            self.drain_events();

            terminal.draw(|f| self.render(f))?;

            // Short poll keeps settle notifications flowing between inputs.
            if event::poll(Duration::from_millis(16))? && !self.dispatch(event::read()?) {
                info!("Storefront quitting");
                return Ok(());
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Renders the landing screen and any open dialog on top.
    #[instrument(skip(self, frame))]
    pub fn render(&self, frame: &mut Frame) {
        self.landing.render(frame, &self.catalog);
        match &self.dialog {
            Some(ActiveDialog::CardDetail(d)) => d.render(frame, &self.catalog),
            Some(ActiveDialog::CharacterSelect(d)) => d.render(frame, &self.catalog),
            None => {}
        }
    }

    /// Routes one terminal event. Returns `false` when the user quit.
    #[instrument(skip(self, event))]
    pub fn dispatch(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => true,
        }
    }

    /// Routes a key press to the dialog, or the landing screen when none is open.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let transition = match &mut self.dialog {
            Some(ActiveDialog::CardDetail(d)) => d.handle_key(key, &self.catalog),
            Some(ActiveDialog::CharacterSelect(d)) => d.handle_key(key, &self.catalog),
            None => self.landing.handle_key(key, &self.catalog),
        };
        self.apply_transition(transition)
    }

    /// Routes a mouse event to the dialog, or the landing screen when none is open.
    #[instrument(skip(self, mouse))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        let transition = match &mut self.dialog {
            Some(ActiveDialog::CardDetail(d)) => d.handle_mouse(mouse, &self.catalog),
            Some(ActiveDialog::CharacterSelect(d)) => d.handle_mouse(mouse, &self.catalog),
            None => self.landing.handle_mouse(mouse, &self.catalog),
        };
        self.apply_transition(transition)
    }

    /// Handles every event already queued. Returns how many were handled.
    #[instrument(skip(self))]
    pub fn drain_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Waits for the next event and handles it.
    #[instrument(skip(self))]
    pub async fn process_next_event(&mut self) -> Option<StorefrontEvent> {
        let event = self.events_rx.recv().await?;
        self.handle_event(event.clone());
        Some(event)
    }

    /// Applies one carousel event.
    #[instrument(skip(self))]
    fn handle_event(&mut self, event: StorefrontEvent) {
        match event {
            StorefrontEvent::Settled { side, ticket } => match &mut self.dialog {
                Some(ActiveDialog::CharacterSelect(d)) if d.session().side() == side => {
                    d.session_mut().handle_settled(ticket);
                }
                _ => debug!(side = %side, ticket = %ticket, "Settle with no matching session"),
            },
            StorefrontEvent::CharacterCommitted { side, item } => {
                self.landing.state_mut().record_pick(side, item);
            }
        }
    }

    /// Applies a screen transition. Returns `false` to quit.
    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition) -> bool {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => {}

            ScreenTransition::OpenCardDetail { card_id } => match self.catalog.card(card_id) {
                Some(card) => {
                    info!(card_id, "Opening card detail dialog");
                    self.replace_dialog(ActiveDialog::CardDetail(CardDetailDialog::new(
                        card.clone(),
                    )));
                }
                None => warn!(card_id, "Card not found in catalog"),
            },

            ScreenTransition::OpenCharacterSelect { side } => {
                info!(side = %side, "Opening character select dialog");
                let session = CarouselSession::open(
                    side,
                    self.catalog.characters().clone(),
                    self.carousel_config,
                    self.events_tx.clone(),
                );
                self.replace_dialog(ActiveDialog::CharacterSelect(CharacterSelectDialog::new(
                    session,
                )));
            }

            ScreenTransition::PurchaseSelected => {
                if self.landing.state_mut().purchase_selected().is_none() {
                    warn!("Purchase requested with no card selected");
                }
            }

            ScreenTransition::CloseDialog => self.close_dialog(),

            ScreenTransition::Quit => {
                self.close_dialog();
                return false;
            }
        }
        true
    }

    fn replace_dialog(&mut self, dialog: ActiveDialog) {
        self.close_dialog();
        match &dialog {
            ActiveDialog::CardDetail(_) => {}
            ActiveDialog::CharacterSelect(d) => {
                self.landing
                    .state_mut()
                    .open_character_select(d.session().side());
            }
        }
        self.dialog = Some(dialog);
    }

    /// Closes the open dialog, tearing down any carousel session.
    #[instrument(skip(self))]
    fn close_dialog(&mut self) {
        match self.dialog.take() {
            Some(ActiveDialog::CardDetail(_)) => {
                self.landing.state_mut().close_card_detail();
            }
            Some(ActiveDialog::CharacterSelect(mut d)) => {
                d.session_mut().close();
                self.landing.state_mut().close_character_select();
            }
            None => {}
        }
    }
}
