//! Window frame: a bordered block with a title, centred in the terminal

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rect of `width` x `height` centred in `area`, clamped to fit inside it
pub fn centered_window(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the frame and return its inner area
pub fn render_window(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_window_fits() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_window(60, 18, area), Rect::new(20, 11, 60, 18));
    }

    #[test]
    fn test_centered_window_clamps() {
        let area = Rect::new(2, 1, 40, 10);
        assert_eq!(centered_window(60, 18, area), area);
    }
}
