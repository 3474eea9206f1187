//! Maze interpreter execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the [`engine::Interpreter`] and its tick loop
//! - [`car`]: execution threads and their state
//! - [`grid`]: the rectangular board of tokens
//! - [`functions`]: named commands callable from the grid
//! - [`constants`]: reserved tokens and limits
//! - [`errors`]: runtime error types
//!
//! # Execution Model
//!
//! Each tick runs two passes over the cars as they stood when the tick began.
//! The first pass moves every car one cell (turning away from walls and edges
//! first), the second executes the instruction under each car. Cars created
//! during a tick join after it, and cars destroyed during a tick are removed
//! after it.
//!
//! An input cell (`<<`) stops the whole simulation until
//! [`engine::Interpreter::resolve_input`] supplies a value.

pub mod car;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod functions;
pub mod grid;
