//! Landing screen: game mode toggles on the left, card storefront on the right.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};
use unicode_width::UnicodeWidthStr;

use crate::lobby::layout::HitMap;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::{Catalog, GameMode, LandingState, MultiplayerOption, Side, SlotMarker};

/// A focusable control on the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingControl {
    /// Local-play character slot.
    LocalSlot(Side),
    /// Multiplayer sub-option toggle.
    Multiplayer(MultiplayerOption),
    /// A card in the storefront list, by id.
    Card(u32),
}

impl LandingControl {
    fn is_card(self) -> bool {
        matches!(self, Self::Card(_))
    }
}

/// Button drawn on each card row.
const CART_LABEL: &str = "[c] cart";

/// Lines per card row: banner, title, description, spacer.
const CARD_ROW_HEIGHT: u16 = 4;

/// What a click on the landing screen lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LandingTarget {
    Control(LandingControl),
    Cart(u32),
}

/// State for the landing screen.
#[derive(Debug)]
pub struct LandingScreen {
    state: LandingState,
    controls: Vec<LandingControl>,
    focus: usize,
    hits: HitMap<LandingTarget>,
}

impl LandingScreen {
    /// Creates the landing screen for the given catalog.
    #[instrument(skip(catalog), fields(cards = catalog.cards().len()))]
    pub fn new(catalog: &Catalog) -> Self {
        let mut controls: Vec<LandingControl> =
            Side::all().into_iter().map(LandingControl::LocalSlot).collect();
        controls.extend(
            MultiplayerOption::all()
                .into_iter()
                .map(LandingControl::Multiplayer),
        );
        controls.extend(catalog.cards().iter().map(|c| LandingControl::Card(*c.id())));
        debug!(controls = controls.len(), "Initializing LandingScreen");
        Self {
            state: LandingState::new(),
            controls,
            focus: 0,
            hits: HitMap::default(),
        }
    }

    /// Selection state shared with the dialogs.
    pub fn state(&self) -> &LandingState {
        &self.state
    }

    /// Mutable selection state, for the controller.
    pub fn state_mut(&mut self) -> &mut LandingState {
        &mut self.state
    }

    /// The control that currently has focus.
    pub fn focused(&self) -> LandingControl {
        self.controls[self.focus.min(self.controls.len() - 1)]
    }

    /// Moves focus down, wrapping.
    #[instrument(skip(self))]
    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.controls.len();
    }

    /// Moves focus up, wrapping.
    #[instrument(skip(self))]
    fn focus_previous(&mut self) {
        let len = self.controls.len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Moves focus through the card list only, wrapping.
    ///
    /// From the mode panel, focus lands on the first or last card.
    #[instrument(skip(self))]
    fn focus_card(&mut self, forward: bool) {
        let cards: Vec<usize> = self
            .controls
            .iter()
            .enumerate()
            .filter(|(_, control)| control.is_card())
            .map(|(index, _)| index)
            .collect();
        let (Some(&first), Some(&last)) = (cards.first(), cards.last()) else {
            return;
        };

        self.focus = match cards.iter().position(|&index| index == self.focus) {
            Some(pos) if forward => cards[(pos + 1) % cards.len()],
            Some(pos) => cards[(pos + cards.len() - 1) % cards.len()],
            None if forward => first,
            None => last,
        };
    }

    /// Moves focus onto `control` if it is on screen.
    fn focus_on(&mut self, control: LandingControl) {
        if let Some(index) = self.controls.iter().position(|c| *c == control) {
            self.focus = index;
        }
    }

    /// Focuses and activates whatever was drawn under the pointer.
    #[instrument(skip(self, catalog))]
    fn click(&mut self, column: u16, row: u16, catalog: &Catalog) -> ScreenTransition {
        match self.hits.hit(column, row) {
            Some(LandingTarget::Control(control)) => {
                debug!(control = ?control, "Control clicked");
                self.focus_on(control);
                self.activate(catalog)
            }
            Some(LandingTarget::Cart(card_id)) => {
                self.focus_on(LandingControl::Card(card_id));
                self.add_focused_to_cart(catalog);
                ScreenTransition::Stay
            }
            None => ScreenTransition::Stay,
        }
    }

    /// Jumps between the mode panel and the card list.
    #[instrument(skip(self))]
    fn focus_other_panel(&mut self) {
        let target = if self.focused().is_card() {
            Some(0)
        } else {
            self.controls.iter().position(|c| c.is_card())
        };
        if let Some(index) = target {
            self.focus = index;
        }
    }

    /// Activates the focused control.
    #[instrument(skip(self, catalog))]
    fn activate(&mut self, catalog: &Catalog) -> ScreenTransition {
        match self.focused() {
            LandingControl::LocalSlot(side) => {
                self.state.choose_local_side(side);
                ScreenTransition::OpenCharacterSelect { side }
            }
            LandingControl::Multiplayer(option) => {
                self.state.choose_multiplayer(option);
                ScreenTransition::Stay
            }
            LandingControl::Card(card_id) => match catalog.card(card_id) {
                Some(card) => {
                    info!(card_id, "Opening card detail");
                    self.state.open_card_detail(card.clone());
                    ScreenTransition::OpenCardDetail { card_id }
                }
                None => ScreenTransition::Stay,
            },
        }
    }

    /// Stand-in add-to-cart for the focused card.
    #[instrument(skip(self, catalog))]
    fn add_focused_to_cart(&mut self, catalog: &Catalog) {
        if let LandingControl::Card(card_id) = self.focused()
            && let Some(card) = catalog.card(card_id)
        {
            self.state.add_to_cart(card);
        }
    }

    fn focus_style(&self, control: LandingControl) -> Style {
        if self.focused() == control {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn slot_span(&self, side: Side) -> Span<'static> {
        let selected = *self.state.mode() == GameMode::Local;
        let border = if selected { Color::LightBlue } else { Color::DarkGray };
        match self.state.slot_marker(side) {
            SlotMarker::Character(item) => Span::styled(
                format!("[ {} ]", item.initial()),
                Style::default().fg(item.color()).add_modifier(Modifier::BOLD),
            ),
            SlotMarker::Active => Span::styled("[ • ]", Style::default().fg(Color::LightBlue)),
            SlotMarker::Empty => Span::styled("[   ]", Style::default().fg(border)),
        }
    }

    fn render_modes(&self, frame: &mut Frame, area: Rect) {
        let marker = |control: LandingControl| {
            if self.focused() == control { "> " } else { "  " }
        };

        let mut lines = vec![
            Line::from(Span::styled(
                "Local play",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    marker(LandingControl::LocalSlot(Side::Left)),
                    self.focus_style(LandingControl::LocalSlot(Side::Left)),
                ),
                self.slot_span(Side::Left),
                Span::raw("  vs  "),
                self.slot_span(Side::Right),
                Span::styled(
                    if self.focused() == LandingControl::LocalSlot(Side::Right) { " <" } else { "" },
                    self.focus_style(LandingControl::LocalSlot(Side::Right)),
                ),
            ]),
        ];
        for side in Side::all() {
            if let Some(item) = self.state.pick(side) {
                lines.push(Line::from(format!("  {}: {}", side, item.display_name())));
            }
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Multiplayer",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for option in MultiplayerOption::all() {
            let control = LandingControl::Multiplayer(option);
            let check = if self.state.is_multiplayer_selected(option) { "[•]" } else { "[ ]" };
            lines.push(Line::from(Span::styled(
                format!("{}{} {}", marker(control), check, option),
                self.focus_style(control),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Mode: {}", self.state.mode()));
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(lines).block(block), area);

        let line_rect = |line: usize, offset: u16, width: u16| {
            let y = inner
                .y
                .saturating_add(u16::try_from(line).unwrap_or(u16::MAX));
            Rect::new(inner.x.saturating_add(offset), y, width, 1).intersection(inner)
        };
        // Slot line: "> " marker, "[ X ]", "  vs  ", "[ X ]", " <" marker.
        self.hits.insert(
            line_rect(1, 0, 7),
            LandingTarget::Control(LandingControl::LocalSlot(Side::Left)),
        );
        self.hits.insert(
            line_rect(1, 13, 7),
            LandingTarget::Control(LandingControl::LocalSlot(Side::Right)),
        );
        let picks = Side::all()
            .into_iter()
            .filter(|side| self.state.pick(*side).is_some())
            .count();
        for (i, option) in MultiplayerOption::all().into_iter().enumerate() {
            self.hits.insert(
                line_rect(picks + 4 + i, 0, inner.width),
                LandingTarget::Control(LandingControl::Multiplayer(option)),
            );
        }
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect, catalog: &Catalog) {
        let items: Vec<ListItem> = catalog
            .cards()
            .iter()
            .map(|card| {
                let banner = Line::from(Span::styled(
                    "▀".repeat(usize::from(area.width.saturating_sub(6))),
                    Style::default().fg(card.color()),
                ));
                let price_color = if card.is_free() {
                    Color::Green
                } else {
                    Color::Yellow
                };
                let title = Line::from(vec![
                    Span::styled(
                        card.title().clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("   "),
                    Span::styled(card.price().clone(), Style::default().fg(price_color)),
                    Span::raw("   "),
                    Span::styled(CART_LABEL, Style::default().fg(Color::DarkGray)),
                ]);
                let description = Line::from(Span::styled(
                    card.description().clone(),
                    Style::default().fg(Color::Gray),
                ));
                ListItem::new(vec![banner, title, description, Line::default()])
            })
            .collect();

        let block = Block::default().borders(Borders::ALL).title("Game Cards");
        let inner = block.inner(area);
        let highlight = "> ";
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol(highlight);

        let mut list_state = ListState::default();
        if let LandingControl::Card(card_id) = self.focused() {
            list_state.select(catalog.cards().iter().position(|c| *c.id() == card_id));
        }
        frame.render_stateful_widget(list, area, &mut list_state);

        // Rows are indented by the highlight symbol only while one is selected.
        let indent = if list_state.selected().is_some() {
            highlight.width()
        } else {
            0
        };
        let as_u16 = |n: usize| u16::try_from(n).unwrap_or(u16::MAX);
        let visible = catalog.cards().iter().skip(list_state.offset());
        for (row, card) in visible.enumerate() {
            let y = inner
                .y
                .saturating_add(as_u16(row).saturating_mul(CARD_ROW_HEIGHT));
            if y >= inner.bottom() {
                break;
            }
            let card_id = *card.id();
            let item = Rect::new(inner.x, y, inner.width, CARD_ROW_HEIGHT).intersection(inner);
            self.hits
                .insert(item, LandingTarget::Control(LandingControl::Card(card_id)));

            let cart_offset = indent + card.title().width() + 3 + card.price().width() + 3;
            let cart = Rect::new(
                inner.x.saturating_add(as_u16(cart_offset)),
                y.saturating_add(1),
                as_u16(CART_LABEL.width()),
                1,
            )
            .intersection(inner);
            self.hits.insert(cart, LandingTarget::Cart(card_id));
        }
    }
}

impl Screen for LandingScreen {
    #[instrument(skip(self, frame, catalog))]
    fn render(&self, frame: &mut Frame, catalog: &Catalog) {
        self.hits.clear();
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("CHESS 2")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
            .split(chunks[1]);
        self.render_modes(frame, body[0]);
        self.render_cards(frame, body[1], catalog);

        let notice_text = self.state.notice().as_deref().unwrap_or("");
        let notice = Paragraph::new(notice_text)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Notice"));
        frame.render_widget(notice, chunks[2]);

        let help = Paragraph::new(
            "↑↓: Navigate | Tab: Switch panel | Enter / click: Select | c: Add to cart | x: Dismiss | q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, catalog))]
    fn handle_key(&mut self, key: KeyEvent, catalog: &Catalog) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.focus_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.focus_next();
                ScreenTransition::Stay
            }
            KeyCode::Tab => {
                self.focus_other_panel();
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(catalog),
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.add_focused_to_cart(catalog);
                ScreenTransition::Stay
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                self.state.dismiss_notice();
                ScreenTransition::Stay
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, mouse, catalog))]
    fn handle_mouse(&mut self, mouse: MouseEvent, catalog: &Catalog) -> ScreenTransition {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.focus_card(true),
            MouseEventKind::ScrollUp => self.focus_card(false),
            MouseEventKind::Down(MouseButton::Left) => {
                return self.click(mouse.column, mouse.row, catalog);
            }
            _ => {}
        }
        ScreenTransition::Stay
    }
}
