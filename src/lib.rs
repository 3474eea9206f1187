//! # Introduction
//!
//! Maze is a two-dimensional esoteric language. A program is a grid of two
//! character cells plus a table of named functions. Cars spawn on `^^` cells,
//! drive through the grid one cell per tick and carry a single value, which the
//! cells they land on print, replace, transform or branch on.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Loader → Grid + Functions → Interpreter (tick) → CLI / TUI
//! ```
//!
//! 1. [`parser`]: splits the source into grid rows and function definitions,
//!    decodes cell tokens and pre-parses function commands.
//! 2. [`interpreter`]: the grid, the cars and the two-pass tick engine.
//! 3. [`memory`]: the dynamically typed [`memory::value::Value`] a car carries.
//! 4. [`snapshot`]: output log and the bounded step-back history.
//! 5. [`ui`]: the blocking runner and the ratatui stepper; not part of the stable
//!    library API.

pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod snapshot;
pub mod ui;
