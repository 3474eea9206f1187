//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`maze`]: the grid with cars drawn over it
//! - [`cars`]: active cars with heading, value, position and pause state
//! - [`functions`]: the function table
//! - [`terminal`]: accumulated program output
//! - [`status`]: status bar with keybindings and execution state
//! - `utils`: shared block styling, scrolling and value formatting
//!
//! Each pane module exports a stateless `render_*` function. Scroll offsets are
//! owned by [`crate::ui::App`] and passed in by reference.

mod utils;

pub mod cars;
pub mod functions;
pub mod maze;
pub mod status;
pub mod terminal;

// Re-export render functions for convenience
pub use cars::render_cars_pane;
pub use functions::render_functions_pane;
pub use maze::{render_maze_pane, MazeRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use terminal::render_terminal_pane;
