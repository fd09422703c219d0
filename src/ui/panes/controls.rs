//! Button bar: one activation control per registered card
//!
//! Buttons are laid out left to right in registry order and centred as a
//! group, with a one-cell gap between them. When they do not fit, the bar is
//! split into equal slots instead and labels are truncated.
//!
//! Rendering returns a [`ControlHit`] per button. The app keeps the latest set
//! and resolves mouse clicks against it, so the control-to-card mapping is a
//! plain table rebuilt every frame.

use crate::cards::CardRegistry;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BUTTON_GAP: u16 = 1;

/// Where a button was drawn and which card it selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlHit {
    pub area: Rect,
    pub card_id: String,
}

impl ControlHit {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }
}

/// Data needed to render the button bar
pub struct ControlsRenderData<'a> {
    pub registry: &'a CardRegistry,
    /// Index of the card currently shown
    pub active: usize,
    /// Index of the button with keyboard focus
    pub focused: usize,
}

/// Text on the button that selects a card with this label
pub fn button_label(card_label: &str) -> String {
    format!("Show {}", card_label)
}

/// Compute button areas for the given label widths
pub fn layout_buttons(area: Rect, label_widths: &[u16]) -> Vec<Rect> {
    let count = label_widths.len() as u16;
    if count == 0 || area.width == 0 {
        return Vec::new();
    }

    // Borders plus one cell of padding on each side
    let widths: Vec<u16> = label_widths.iter().map(|w| w.saturating_add(4)).collect();
    let total = widths.iter().map(|&w| u32::from(w)).sum::<u32>()
        + u32::from(BUTTON_GAP) * u32::from(count - 1);

    if total <= u32::from(area.width) {
        let mut x = area.x + (area.width - total as u16) / 2;
        widths
            .iter()
            .map(|&width| {
                let rect = Rect::new(x, area.y, width, area.height);
                x = x.saturating_add(width.saturating_add(BUTTON_GAP));
                rect
            })
            .collect()
    } else {
        let slot = (area.width / count).max(1);
        (0..count)
            .map(|i| {
                let x = area.x + (i * slot).min(area.width - 1);
                let width = slot.min(area.right() - x);
                Rect::new(x, area.y, width, area.height)
            })
            .collect()
    }
}

/// Render the button bar and return the hit area of every button drawn
pub fn render_controls(
    frame: &mut Frame,
    area: Rect,
    data: ControlsRenderData,
) -> Vec<ControlHit> {
    let labels: Vec<String> = data
        .registry
        .all()
        .map(|card| button_label(card.label()))
        .collect();
    let widths: Vec<u16> = labels
        .iter()
        .map(|label| label.chars().count().min(u16::MAX as usize) as u16)
        .collect();
    let areas = layout_buttons(area, &widths);

    let mut hits = Vec::with_capacity(areas.len());
    for (index, ((card, label), rect)) in data
        .registry
        .all()
        .zip(labels)
        .zip(areas)
        .enumerate()
    {
        let is_active = index == data.active;
        let is_focused = index == data.focused;

        let border_style = if is_focused {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD)
        } else if is_active {
            Style::default().fg(DEFAULT_THEME.success)
        } else {
            Style::default().fg(DEFAULT_THEME.border_normal)
        };

        let mut text_style = Style::default().fg(DEFAULT_THEME.button_fg);
        if is_focused {
            text_style = text_style.bg(DEFAULT_THEME.button_focused_bg);
        }
        if is_active {
            text_style = text_style.fg(DEFAULT_THEME.success).add_modifier(Modifier::BOLD);
        }

        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(text_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(button, rect);

        hits.push(ControlHit {
            area: rect,
            card_id: card.id().to_string(),
        });
    }

    hits
}
