//! Function table: two-letter names bound to command strings

use crate::parser::ast::Command;
use crate::parser::command::parse_command;
use rustc_hash::FxHashMap;

/// A defined function: its source text and the command parsed from it
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub source: String,
    pub command: Command,
}

#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    entries: FxHashMap<String, Function>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `source`, replacing any earlier definition
    pub fn define(&mut self, name: &str, source: &str) {
        let function = Function {
            source: source.to_string(),
            command: parse_command(source),
        };
        self.entries.insert(name.to_string(), function);
    }

    pub fn get(&self, name: &str) -> Option<&Function> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Definitions sorted by name
    pub fn sorted(&self) -> Vec<(&str, &Function)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(name, function)| (name.as_str(), function))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
