//! Character selection dialog: renders a carousel session and feeds it input.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::lobby::layout::{HitMap, centered_rect, shift_within};
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::{CarouselSession, Catalog, SelectableItem, SlideDirection};

/// A clickable part of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CarouselButton {
    Previous,
    Next,
    Select,
}

/// State for the character selection dialog.
#[derive(Debug)]
pub struct CharacterSelectDialog {
    session: CarouselSession,
    hits: HitMap<CarouselButton>,
}

impl CharacterSelectDialog {
    /// Wraps an open carousel session.
    #[instrument(skip(session), fields(side = %session.side()))]
    pub fn new(session: CarouselSession) -> Self {
        debug!("Initializing CharacterSelectDialog");
        Self {
            session,
            hits: HitMap::default(),
        }
    }

    /// The carousel session behind this dialog.
    pub fn session(&self) -> &CarouselSession {
        &self.session
    }

    /// Mutable access, used to route settle notifications.
    pub fn session_mut(&mut self) -> &mut CarouselSession {
        &mut self.session
    }

    /// Maps the session's open flag to a transition.
    fn after_input(&self) -> ScreenTransition {
        if self.session.is_open() {
            ScreenTransition::Stay
        } else {
            ScreenTransition::CloseDialog
        }
    }

    /// Treats a release that stayed within the drag threshold as a click.
    #[instrument(skip(self))]
    fn release(&mut self, column: u16, row: u16) {
        let was_dragging = self.session.state().is_dragging;
        let offset = self.session.state().drag_offset;
        if self.session.end_drag().is_some() || !was_dragging {
            return;
        }
        if offset.abs() > *self.session.config().drag_threshold() {
            return;
        }

        match self.hits.hit(column, row) {
            Some(CarouselButton::Previous) => {
                self.session.retreat();
            }
            Some(CarouselButton::Next) => {
                self.session.advance();
            }
            Some(CarouselButton::Select) => {
                if let Some(item) = self.session.commit_selection() {
                    info!(item_id = %item.id(), "Character selected by click");
                }
            }
            None => {}
        }
    }

    fn render_card(frame: &mut Frame, area: Rect, item: &SelectableItem, focused: bool) {
        let color = item.color();
        let (border_type, name_style) = if focused {
            (
                BorderType::Thick,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        } else {
            (BorderType::Rounded, Style::default().fg(Color::DarkGray))
        };

        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(item.display_name().clone(), name_style)),
            Line::default(),
            Line::from(Span::styled(
                format!("( {} )", item.initial()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ];
        if focused {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "[ Select ]",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::REVERSED),
            )));
        }

        let card = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(card, area);
    }

    fn render_strip(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(10),
                Constraint::Length(5),
            ])
            .split(area);

        let arrow_style = if self.session.state().is_animating {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new("\n\n‹").style(arrow_style).alignment(Alignment::Center),
            columns[0],
        );
        frame.render_widget(
            Paragraph::new("\n\n›").style(arrow_style).alignment(Alignment::Center),
            columns[2],
        );
        self.hits.insert(columns[0], CarouselButton::Previous);
        self.hits.insert(columns[2], CarouselButton::Next);

        let track = columns[1];
        let strip = centered_rect(track, 90, 100);
        let strip = if self.session.state().is_dragging {
            shift_within(strip, self.session.state().drag_offset, track)
        } else {
            strip
        };

        if self.session.roster().len() > 1 {
            let cards = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(28),
                    Constraint::Percentage(44),
                    Constraint::Percentage(28),
                ])
                .split(strip);
            let side_card = |rect: Rect| Rect {
                y: rect.y + rect.height / 8,
                height: rect.height - rect.height / 4,
                ..rect
            };
            Self::render_card(frame, side_card(cards[0]), self.session.previous_item(), false);
            Self::render_card(frame, cards[1], self.session.current_item(), true);
            Self::render_card(frame, side_card(cards[2]), self.session.next_item(), false);
            self.hits.insert(side_card(cards[0]), CarouselButton::Previous);
            self.hits.insert(cards[1], CarouselButton::Select);
            self.hits.insert(side_card(cards[2]), CarouselButton::Next);
        } else {
            let centre = centered_rect(strip, 44, 100);
            Self::render_card(frame, centre, self.session.current_item(), true);
            self.hits.insert(centre, CarouselButton::Select);
        }
    }
}

impl Screen for CharacterSelectDialog {
    #[instrument(skip(self, frame, _catalog))]
    fn render(&self, frame: &mut Frame, _catalog: &Catalog) {
        self.hits.clear();
        let area = centered_rect(frame.area(), 90, 90);
        frame.render_widget(Clear, area);

        let slide = match self.session.state().slide_direction {
            SlideDirection::Left => " «",
            SlideDirection::Right => " »",
            SlideDirection::None => "",
        };
        let outer = Block::default()
            .borders(Borders::ALL)
            .title(format!("Character Selection{}", slide));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .split(inner);

        let heading = Paragraph::new(format!("Select Character for {}", self.session.side()))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[0]);

        self.render_strip(frame, chunks[1]);

        let hint = Paragraph::new("Use mouse wheel or drag to scroll through characters")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[2]);

        let help = Paragraph::new("←→ / click arrows: Browse | Enter / click card: Select | Esc: Cancel")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _catalog))]
    fn handle_key(&mut self, key: KeyEvent, _catalog: &Catalog) -> ScreenTransition {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.session.retreat();
                ScreenTransition::Stay
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.session.advance();
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(item) = self.session.commit_selection() {
                    info!(item_id = %item.id(), "Character selected");
                }
                self.after_input()
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("Character selection cancelled");
                self.session.close();
                ScreenTransition::CloseDialog
            }
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, mouse, _catalog))]
    fn handle_mouse(&mut self, mouse: MouseEvent, _catalog: &Catalog) -> ScreenTransition {
        let x = i32::from(mouse.column);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.session.begin_drag(x);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.session.update_drag(x);
            }
            MouseEventKind::Up(MouseButton::Left) => self.release(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => {
                self.session.scroll(1);
            }
            MouseEventKind::ScrollUp => {
                self.session.scroll(-1);
            }
            _ => {}
        }
        self.after_input()
    }
}
