//! Card pane: the one visible card

use crate::cards::Card;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Fill `area` with the card's colour and centre its label
pub fn render_card_pane(frame: &mut Frame, area: Rect, card: &Card) {
    let background = card.style().background;
    let fill = Style::default().bg(DEFAULT_THEME.card_background(background));
    frame.render_widget(Block::default().style(fill), area);

    // Vertically centre a single label row
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    let label = Paragraph::new(card.label())
        .alignment(Alignment::Center)
        .style(
            fill.fg(DEFAULT_THEME.card_label(background))
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(label, rows[1]);
}
