//! Runtime value representation
//!
//! This module defines the [`Value`] enum held in every car's register and used as
//! the operand of function commands.
//!
//! # Value Types
//!
//! - [`Value::Int`]: 64-bit signed integer
//! - [`Value::Float`]: 64-bit float
//! - [`Value::Text`]: UTF-8 string
//!
//! # Literals
//!
//! [`Value::parse_literal`] never fails. Quoted text becomes [`Value::Text`] with
//! `\n` expanded, anything containing a `.` is tried as a float, anything else as
//! an integer, and whatever does not parse is kept verbatim as text.
//!
//! # Arithmetic
//!
//! Integers stay integers under `+`, `-` and `*` (overflow falls back to float),
//! division always yields a float, and dividing by zero yields `Int(0)`. Text
//! supports concatenation and repetition; every other mix is a
//! [`RuntimeError::TypeMismatch`].

use crate::interpreter::constants::MAX_TEXT_LEN;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::{ArithOp, CompareOp};
use std::cmp::Ordering;
use std::fmt;

/// Runtime values in the interpreter
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Default for Value {
    fn default() -> Self {
        Value::Int(0)
    }
}

impl Value {
    /// Parse a literal as written in a command or typed at an input prompt
    pub fn parse_literal(raw: &str) -> Value {
        let text = raw.trim();

        let quoted = (text.starts_with('"') && text.ends_with('"'))
            || (text.starts_with('\'') && text.ends_with('\''));
        if quoted && !text.is_empty() {
            // A lone quote character is both the opening and closing quote
            let inner = if text.len() >= 2 { &text[1..text.len() - 1] } else { "" };
            return Value::Text(inner.replace("\\n", "\n"));
        }

        if text.contains('.') {
            if let Ok(f) = text.parse::<f64>() {
                return Value::Float(f);
            }
        } else if let Ok(n) = text.parse::<i64>() {
            return Value::Int(n);
        }

        Value::Text(text.to_string())
    }

    /// Name of the variant, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
        }
    }

    /// Get the numeric value as a float, returns None for text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Text(_) => None,
        }
    }

    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if this value is numerically zero
    pub fn is_zero(&self) -> bool {
        self.as_f64().is_some_and(|f| f == 0.0)
    }

    /// Apply a compound assignment operator with `self` on the left
    pub fn apply(&self, op: ArithOp, rhs: &Value) -> Result<Value, RuntimeError> {
        if op == ArithOp::Div && rhs.is_zero() {
            return Ok(Value::Int(0));
        }

        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(int_arith(op, *a, *b)),
            (Value::Text(a), Value::Text(b)) if op == ArithOp::Add => {
                check_text_len(a.len() + b.len())?;
                Ok(Value::Text(format!("{}{}", a, b)))
            }
            (Value::Text(s), Value::Int(n)) | (Value::Int(n), Value::Text(s))
                if op == ArithOp::Mul =>
            {
                repeat_text(s, *n)
            }
            _ => match (self.as_f64(), rhs.as_f64()) {
                (Some(a), Some(b)) => Ok(Value::Float(float_arith(op, a, b))),
                _ => Err(RuntimeError::TypeMismatch {
                    op: op.symbol(),
                    lhs: self.type_name(),
                    rhs: rhs.type_name(),
                }),
            },
        }
    }

    /// Evaluate `self <op> rhs`
    ///
    /// Equality across incompatible types is simply false; ordering across them
    /// is an error.
    pub fn compare(&self, op: CompareOp, rhs: &Value) -> Result<bool, RuntimeError> {
        match op {
            CompareOp::Eq => return Ok(self.loosely_equals(rhs)),
            CompareOp::Ne => return Ok(!self.loosely_equals(rhs)),
            _ => {}
        }

        let ordering = match (self, rhs) {
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            _ => match (self.as_f64(), rhs.as_f64()) {
                (Some(a), Some(b)) => a.partial_cmp(&b),
                _ => {
                    return Err(RuntimeError::Incomparable {
                        op: op.symbol(),
                        lhs: self.type_name(),
                        rhs: rhs.type_name(),
                    })
                }
            },
        };

        // NaN compares false under every ordering
        let Some(ordering) = ordering else {
            return Ok(false);
        };

        Ok(match op {
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Ge => ordering != Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
        })
    }

    fn loosely_equals(&self, rhs: &Value) -> bool {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => match (self.as_f64(), rhs.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

fn int_arith(op: ArithOp, a: i64, b: i64) -> Value {
    let exact = match op {
        ArithOp::Add => a.checked_add(b),
        ArithOp::Sub => a.checked_sub(b),
        ArithOp::Mul => a.checked_mul(b),
        ArithOp::Div => None,
    };
    match exact {
        Some(n) => Value::Int(n),
        None => Value::Float(float_arith(op, a as f64, b as f64)),
    }
}

fn float_arith(op: ArithOp, a: f64, b: f64) -> f64 {
    match op {
        ArithOp::Add => a + b,
        ArithOp::Sub => a - b,
        ArithOp::Mul => a * b,
        ArithOp::Div => a / b,
    }
}

fn repeat_text(text: &str, count: i64) -> Result<Value, RuntimeError> {
    let count = usize::try_from(count).unwrap_or(0);
    let len = text.len().saturating_mul(count);
    check_text_len(len)?;
    Ok(Value::Text(text.repeat(count)))
}

fn check_text_len(len: usize) -> Result<(), RuntimeError> {
    if len > MAX_TEXT_LEN {
        return Err(RuntimeError::TextTooLong {
            len,
            limit: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

/// Shortest round-trip decimal, switching to a signed two-digit exponent
/// outside `[1e-4, 1e16)`: `6.0`, `0.0001`, `1e+16`, `1.5e-05`.
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }

    let magnitude = x.abs();
    if x.is_finite() && magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", x);
        if let Some((mantissa, exponent)) = sci.split_once('e') {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            return format!("{}e{}{:0>2}", mantissa, sign, digits);
        }
    }

    // Debug keeps the trailing ".0" on integral floats
    format!("{:?}", x)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literals() {
        assert_eq!(Value::parse_literal("42"), Value::Int(42));
        assert_eq!(Value::parse_literal("  -7 "), Value::Int(-7));
        assert_eq!(Value::parse_literal("2.5"), Value::Float(2.5));
        assert_eq!(Value::parse_literal("abc"), Value::Text("abc".to_string()));
        assert_eq!(Value::parse_literal("1.2.3"), Value::Text("1.2.3".to_string()));
        assert_eq!(Value::parse_literal(""), Value::Text(String::new()));
    }

    #[test]
    fn test_parse_quoted_text() {
        assert_eq!(
            Value::parse_literal(r#""Hello""#),
            Value::Text("Hello".to_string())
        );
        assert_eq!(
            Value::parse_literal(r"'a\nb'"),
            Value::Text("a\nb".to_string())
        );
        assert_eq!(Value::parse_literal("\"12\""), Value::Text("12".to_string()));
        assert_eq!(Value::parse_literal("\""), Value::Text(String::new()));
        // Mismatched quotes are not a quoted literal
        assert_eq!(Value::parse_literal("\"x'"), Value::Text("\"x'".to_string()));
    }

    #[test]
    fn test_integer_arithmetic() {
        let ten = Value::Int(10);
        assert_eq!(ten.apply(ArithOp::Add, &Value::Int(5)), Ok(Value::Int(15)));
        assert_eq!(ten.apply(ArithOp::Sub, &Value::Int(3)), Ok(Value::Int(7)));
        assert_eq!(ten.apply(ArithOp::Mul, &Value::Int(2)), Ok(Value::Int(20)));
        assert_eq!(ten.apply(ArithOp::Div, &Value::Int(4)), Ok(Value::Float(2.5)));
    }

    #[test]
    fn test_division_by_zero_yields_int_zero() {
        assert_eq!(
            Value::Int(9).apply(ArithOp::Div, &Value::Int(0)),
            Ok(Value::Int(0))
        );
        assert_eq!(
            Value::Float(1.5).apply(ArithOp::Div, &Value::Float(0.0)),
            Ok(Value::Int(0))
        );
        assert_eq!(
            Value::from("abc").apply(ArithOp::Div, &Value::Int(0)),
            Ok(Value::Int(0))
        );
    }

    #[test]
    fn test_overflow_falls_back_to_float() {
        let result = Value::Int(i64::MAX).apply(ArithOp::Add, &Value::Int(1));
        assert!(matches!(result, Ok(Value::Float(_))));
    }

    #[test]
    fn test_mixed_numeric_promotes_to_float() {
        assert_eq!(
            Value::Int(1).apply(ArithOp::Add, &Value::Float(0.5)),
            Ok(Value::Float(1.5))
        );
    }

    #[test]
    fn test_text_arithmetic() {
        assert_eq!(
            Value::from("ab").apply(ArithOp::Add, &Value::from("cd")),
            Ok(Value::from("abcd"))
        );
        assert_eq!(
            Value::from("ab").apply(ArithOp::Mul, &Value::Int(3)),
            Ok(Value::from("ababab"))
        );
        assert_eq!(
            Value::Int(2).apply(ArithOp::Mul, &Value::from("x")),
            Ok(Value::from("xx"))
        );
        assert_eq!(
            Value::from("x").apply(ArithOp::Mul, &Value::Int(-1)),
            Ok(Value::from(""))
        );
    }

    #[test]
    fn test_type_mismatch() {
        let err = Value::from("a").apply(ArithOp::Add, &Value::Int(1));
        assert!(matches!(err, Err(RuntimeError::TypeMismatch { op: "+=", .. })));

        let err = Value::from("a").apply(ArithOp::Mul, &Value::Int(i64::MAX));
        assert!(matches!(err, Err(RuntimeError::TextTooLong { .. })));
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(Value::Int(1).compare(CompareOp::Eq, &Value::Float(1.0)), Ok(true));
        assert_eq!(Value::Int(3).compare(CompareOp::Gt, &Value::Int(2)), Ok(true));
        assert_eq!(Value::Int(3).compare(CompareOp::Le, &Value::Float(2.5)), Ok(false));
        assert_eq!(
            Value::from("apple").compare(CompareOp::Lt, &Value::from("banana")),
            Ok(true)
        );
        assert_eq!(Value::from("1").compare(CompareOp::Eq, &Value::Int(1)), Ok(false));
        assert_eq!(Value::from("1").compare(CompareOp::Ne, &Value::Int(1)), Ok(true));
        assert!(Value::from("1").compare(CompareOp::Gt, &Value::Int(1)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Float(6.0).to_string(), "6.0");
        assert_eq!(Value::Float(0.1).to_string(), "0.1");
        assert_eq!(Value::Float(f64::NAN).to_string(), "nan");
        assert_eq!(Value::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::from("hi\n").to_string(), "hi\n");
    }

    #[test]
    fn test_display_float_exponents() {
        assert_eq!(Value::Float(1e16).to_string(), "1e+16");
        assert_eq!(Value::Float(1e-5).to_string(), "1e-05");
        assert_eq!(Value::Float(1.5e-7).to_string(), "1.5e-07");
        assert_eq!(Value::Float(-1.234e20).to_string(), "-1.234e+20");
        assert_eq!(Value::Float(1e300).to_string(), "1e+300");
        // Fixed notation just inside the range
        assert_eq!(Value::Float(0.0001).to_string(), "0.0001");
        assert_eq!(Value::Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Value::Float(-0.0).to_string(), "-0.0");
    }
}
