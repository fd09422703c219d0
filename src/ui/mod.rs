//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, event loop, button focus and click routing
//! - **[`panes`]** — stateless render functions for the window frame, the card
//!   panel, the button bar and the status line
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`SelectionController`] and call [`App::run`] to start the event loop.
//!
//! [`SelectionController`]: crate::selection::SelectionController
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
