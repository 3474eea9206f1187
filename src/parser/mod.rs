//! Maze source parser
//!
//! This module transforms maze source text into the structures the engine runs:
//! - [`loader`]: source text → [`loader::Program`] (grid rows and function definitions)
//! - [`command`]: function command strings → [`ast::Command`] trees
//! - [`ast`]: headings, operators, commands, and grid [`ast::Instruction`]s
//!
//! # Source Format
//!
//! ```text
//! // comment
//! ^^,..,AB,>>      grid row: comma-separated two-character tokens
//! AB -> +=1        function definition
//! ```
//!
//! # Parser Implementation
//!
//! Hand-written and line-oriented. Nothing in here returns an error: malformed
//! rows are still rows, and malformed commands parse to no-ops.

pub mod ast;
pub mod command;
pub mod loader;
