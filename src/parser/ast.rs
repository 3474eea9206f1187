// Syntax tree definitions for maze programs

use crate::interpreter::constants::{ERASE, HOLE, INPUT, PRINT, SIGNAL, SPAWN, SPLIT, WALL};
use crate::memory::value::Value;
use std::fmt;

/// Direction a car is travelling in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heading {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Heading {
    /// Parse the letter used by `%L`, `%R`, `%U` and `%D`
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Heading::Up),
            'D' => Some(Heading::Down),
            'L' => Some(Heading::Left),
            'R' => Some(Heading::Right),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Heading::Up => 'U',
            Heading::Down => 'D',
            Heading::Left => 'L',
            Heading::Right => 'R',
        }
    }

    /// Row and column delta of one step in this heading
    pub fn offset(self) -> (i64, i64) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
            Heading::Right => (0, 1),
        }
    }

    /// Headings tried, in order, when this one is blocked
    pub fn fallbacks(self) -> [Heading; 3] {
        match self {
            Heading::Up => [Heading::Right, Heading::Left, Heading::Down],
            Heading::Down => [Heading::Left, Heading::Right, Heading::Up],
            Heading::Left => [Heading::Up, Heading::Down, Heading::Right],
            Heading::Right => [Heading::Down, Heading::Up, Heading::Left],
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Compound assignment operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+=",
            ArithOp::Sub => "-=",
            ArithOp::Mul => "*=",
            ArithOp::Div => "/=",
        }
    }
}

/// Comparison operators usable in an `IF` condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

impl CompareOp {
    /// Operators in the order a condition is matched against them.
    /// Two-character operators come first so `>=` is not read as `>`.
    pub const MATCH_ORDER: [CompareOp; 6] = [
        CompareOp::Eq,
        CompareOp::Ne,
        CompareOp::Ge,
        CompareOp::Le,
        CompareOp::Gt,
        CompareOp::Lt,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Ge => ">=",
            CompareOp::Le => "<=",
        }
    }
}

/// Condition of an `IF` command
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `**`: true while any live car stands on a signal cell
    Signal,
    /// `<op><literal>` compared against the car's value
    Compare(CompareOp, Value),
    /// Unrecognised condition text; always false
    Invalid,
}

/// A parsed function command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `=<literal>`
    Assign(Value),
    /// `+=`, `-=`, `*=`, `/=` followed by a literal
    Update(ArithOp, Value),
    /// `%L`, `%R`, `%U`, `%D`
    Steer(Heading),
    /// `IF <condition> THEN <command> ELSE <command>`
    Branch {
        condition: Condition,
        then_branch: Box<Command>,
        else_branch: Box<Command>,
    },
    /// Anything unrecognised
    Nop,
}

/// Meaning of a grid token, as seen by a car landing on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Wall,
    Spawn,
    Hole,
    Print,
    Input,
    Split,
    Erase,
    Signal,
    Steer(Heading),
    /// Two-digit numeral: pause for this many ticks
    Pause(u32),
    /// Two-letter alphabetic token: call the function of that name
    Call(String),
    /// Plain path or any other inert token
    Path,
}

impl Instruction {
    /// Classify a grid token
    pub fn decode(token: &str) -> Self {
        match token {
            WALL => return Instruction::Wall,
            SPAWN => return Instruction::Spawn,
            HOLE => return Instruction::Hole,
            PRINT => return Instruction::Print,
            INPUT => return Instruction::Input,
            SPLIT => return Instruction::Split,
            ERASE => return Instruction::Erase,
            SIGNAL => return Instruction::Signal,
            _ => {}
        }

        let chars: Vec<char> = token.chars().collect();
        match chars.as_slice() {
            ['%', letter] => match Heading::from_letter(*letter) {
                Some(heading) => Instruction::Steer(heading),
                None => Instruction::Path,
            },
            [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
                let ticks = a.to_digit(10).unwrap_or(0) * 10 + b.to_digit(10).unwrap_or(0);
                Instruction::Pause(ticks)
            }
            [a, b] if a.is_alphabetic() && b.is_alphabetic() => {
                Instruction::Call(token.to_string())
            }
            _ => Instruction::Path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_reserved_tokens() {
        assert_eq!(Instruction::decode("##"), Instruction::Wall);
        assert_eq!(Instruction::decode("^^"), Instruction::Spawn);
        assert_eq!(Instruction::decode("()"), Instruction::Hole);
        assert_eq!(Instruction::decode("<>"), Instruction::Split);
        assert_eq!(Instruction::decode("**"), Instruction::Signal);
        assert_eq!(Instruction::decode("%L"), Instruction::Steer(Heading::Left));
        assert_eq!(Instruction::decode("%U"), Instruction::Steer(Heading::Up));
    }

    #[test]
    fn test_decode_numerals_and_calls() {
        assert_eq!(Instruction::decode("05"), Instruction::Pause(5));
        assert_eq!(Instruction::decode("42"), Instruction::Pause(42));
        assert_eq!(Instruction::decode("AB"), Instruction::Call("AB".to_string()));
        assert_eq!(Instruction::decode("xy"), Instruction::Call("xy".to_string()));
    }

    #[test]
    fn test_decode_inert_tokens() {
        assert_eq!(Instruction::decode(".."), Instruction::Path);
        assert_eq!(Instruction::decode("%X"), Instruction::Path);
        assert_eq!(Instruction::decode("A1"), Instruction::Path);
        assert_eq!(Instruction::decode("ABC"), Instruction::Path);
        assert_eq!(Instruction::decode(""), Instruction::Path);
    }

    #[test]
    fn test_fallbacks_never_include_self() {
        for heading in [Heading::Up, Heading::Down, Heading::Left, Heading::Right] {
            assert!(!heading.fallbacks().contains(&heading));
        }
        assert_eq!(
            Heading::Down.fallbacks(),
            [Heading::Left, Heading::Right, Heading::Up]
        );
    }
}
