//! Main TUI application state and logic

use super::panes::{self, ControlHit, ControlsRenderData};
use crate::selection::SelectionController;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

pub const WINDOW_TITLE: &str = "CardLayout Example";

/// Nominal window size in cells, clamped to the terminal
pub const WINDOW_WIDTH: u16 = 60;
pub const WINDOW_HEIGHT: u16 = 18;

/// Height of the button bar (bordered buttons)
const CONTROLS_HEIGHT: u16 = 3;

/// The main application state
pub struct App<'a> {
    /// Which card is visible
    pub selection: SelectionController<'a>,

    /// Index of the button with keyboard focus
    pub focused_control: usize,

    /// Button hit areas from the last render
    pub controls: Vec<ControlHit>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,
}

impl<'a> App<'a> {
    pub fn new(selection: SelectionController<'a>) -> Self {
        let focused_control = selection.current_index();
        App {
            selection,
            focused_control,
            controls: Vec::new(),
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
        }
    }

    /// Run the TUI application until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(
            event = "ui.app.started",
            cards = self.selection.registry().len(),
            initial = self.selection.current()
        );

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                let event = event::read()?;
                self.handle_event(event);
            }
        }

        info!(event = "ui.app.stopped", last = self.selection.current());
        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Window area on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let window = panes::centered_window(WINDOW_WIDTH, WINDOW_HEIGHT, main_chunks[0]);
        let inner = panes::render_window(frame, window, WINDOW_TITLE);

        // Card panel (centre) | buttons (south)
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(CONTROLS_HEIGHT)])
            .split(inner);

        panes::render_card_pane(frame, rows[0], self.selection.current_card());

        self.controls = panes::render_controls(
            frame,
            rows[1],
            ControlsRenderData {
                registry: self.selection.registry(),
                active: self.selection.current_index(),
                focused: self.focused_control,
            },
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.selection.current_index(),
            self.selection.registry().len(),
            self.status_is_error,
        );
    }

    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            // Resize needs no state change; the next draw uses the new size
            _ => {}
        }
    }

    /// Card id of the button drawn at this cell, if any
    pub fn control_at(&self, column: u16, row: u16) -> Option<&str> {
        self.controls
            .iter()
            .find(|hit| hit.contains(column, row))
            .map(|hit| hit.card_id.as_str())
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let card_count = self.selection.registry().len();

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            // Number keys press the n-th button directly
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as u8 - b'1') as usize;
                match self.selection.registry().get_index(index) {
                    Some(card) => {
                        self.focused_control = index;
                        self.activate(card.id());
                    }
                    None => self.set_status(format!("No card {}", index + 1), false),
                }
            }
            KeyCode::Tab => {
                self.focused_control = (self.focused_control + 1) % card_count;
            }
            KeyCode::BackTab => {
                self.focused_control = (self.focused_control + card_count - 1) % card_count;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(card) = self.selection.registry().get_index(self.focused_control) {
                    self.activate(card.id());
                }
            }
            KeyCode::Right => {
                let card = self.selection.next();
                self.shown(card.id(), "next");
            }
            KeyCode::Left => {
                let card = self.selection.previous();
                self.shown(card.id(), "previous");
            }
            KeyCode::Home => {
                let card = self.selection.first();
                self.shown(card.id(), "first");
            }
            KeyCode::End => {
                let card = self.selection.last();
                self.shown(card.id(), "last");
            }
            _ => {}
        }
    }

    /// Handle mouse events; only left clicks on buttons do anything
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let Some(card_id) = self.control_at(mouse.column, mouse.row).map(str::to_owned) else {
            return;
        };
        if let Some(index) = self.selection.registry().index_of(&card_id) {
            self.focused_control = index;
        }
        self.activate(&card_id);
    }

    /// Show the card bound to an activated button
    fn activate(&mut self, card_id: &str) {
        match self.selection.select(card_id) {
            Ok(card) => self.shown(card.id(), "button"),
            Err(e) => {
                warn!(event = "ui.card.select_failed", card = e.id(), error = %e);
                self.set_status(format!("Cannot show card: {}", e), true);
            }
        }
    }

    fn shown(&mut self, card_id: &str, via: &str) {
        info!(event = "ui.card.selected", card = card_id, via = via);
        self.set_status(format!("Showing {}", card_id), false);
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = message;
        self.status_is_error = is_error;
    }
}
