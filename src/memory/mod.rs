//! Car memory model
//!
//! Every car carries exactly one register, a tagged [`value::Value`]. Function
//! commands read and rewrite it; `>>` prints it and `<<` overwrites it with
//! user input.
//!
//! # Typing
//!
//! Values are dynamically typed but the rules are closed: there is no implicit
//! conversion between text and numbers, and the only numeric promotion is
//! integer to float when the other operand (or the result) needs it.

pub mod value;
