//! Front ends for the interpreter.
//!
//! - **[`app`]**: ratatui stepper with play/pause, single steps, history rewind and
//!   an input prompt in the status bar
//! - **[`cli`]**: blocking runner over plain reader/writer streams
//! - **[`panes`]**: stateless render functions for each visible pane (maze, output,
//!   cars, functions, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! [`App`] takes a loaded [`Interpreter`]; [`App::run`] starts the event loop.
//!
//! [`Interpreter`]: crate::interpreter::engine::Interpreter
//! [`App::run`]: app::App::run

pub mod app;
pub mod cli;
pub mod panes;
pub mod theme;

pub use app::App;
