//! Card detail dialog: the full description and piece roster of one card set.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};
use tracing::{debug, info, instrument};
use unicode_width::UnicodeWidthStr;

use crate::lobby::layout::centered_rect;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::{CardOffer, Catalog};

/// State for the card detail dialog.
#[derive(Debug, Getters)]
pub struct CardDetailDialog {
    card: CardOffer,
}

impl CardDetailDialog {
    /// Creates a detail dialog for `card`.
    #[instrument(skip(card), fields(card_id = card.id()))]
    pub fn new(card: CardOffer) -> Self {
        debug!("Initializing CardDetailDialog");
        Self { card }
    }
}

impl Screen for CardDetailDialog {
    #[instrument(skip(self, frame, _catalog))]
    fn render(&self, frame: &mut Frame, _catalog: &Catalog) {
        let area = centered_rect(frame.area(), 90, 90);
        frame.render_widget(Clear, area);

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.card.color()))
            .title("Card Details");
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(inner);

        let title_width = u16::try_from(self.card.title().width()).unwrap_or(u16::MAX);
        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(title_width.saturating_add(2)), Constraint::Length(12)])
            .split(chunks[0]);

        let title_text = match self.card.title_image() {
            Some(image) => format!("{}  ({})", self.card.title(), image),
            None => self.card.title().clone(),
        };
        let title = Paragraph::new(title_text)
            .style(
                Style::default()
                    .fg(Color::Rgb(0x8e, 0xbe, 0xd3))
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, header[0]);

        let price = Paragraph::new(self.card.price().as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(price, header[1]);

        let description = Paragraph::new(self.card.description().as_str()).wrap(Wrap { trim: true });
        frame.render_widget(description, chunks[1]);

        let header_row = Row::new(vec![
            Cell::from("Piece").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Role").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        ])
        .style(Style::default().fg(Color::Yellow));

        let rows: Vec<Row> = self
            .card
            .piece_roles()
            .iter()
            .map(|piece| {
                Row::new(vec![
                    Cell::from(piece.name().as_str())
                        .style(Style::default().fg(Color::Rgb(0x8e, 0xbe, 0xd3))),
                    Cell::from(piece.role().to_string()),
                    Cell::from(piece.description().as_str()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(15),
            Constraint::Percentage(10),
            Constraint::Percentage(75),
        ];
        let table = Table::new(rows, widths)
            .header(header_row)
            .block(Block::default().borders(Borders::ALL).title("Chess Pieces"));
        frame.render_widget(table, chunks[2]);

        let help = Paragraph::new("Enter / p: Add to Cart | Esc: Close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _catalog))]
    fn handle_key(&mut self, key: KeyEvent, _catalog: &Catalog) -> ScreenTransition {
        match key.code {
            KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => {
                info!(card_id = self.card.id(), "Purchase requested");
                ScreenTransition::PurchaseSelected
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("Closing card detail");
                ScreenTransition::CloseDialog
            }
            _ => ScreenTransition::Stay,
        }
    }
}
