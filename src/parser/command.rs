//! Parser for the function command language
//!
//! A function body is a single command:
//!
//! ```text
//! =<literal>                              assignment
//! +=<literal>  -=<literal>  *=<literal>  /=<literal>
//! %L  %R  %U  %D                          heading force
//! IF <condition> THEN <command> ELSE <command>
//! ```
//!
//! Conditions are `**` (signal check) or a comparison operator followed by a
//! literal. The condition and the `THEN` branch are matched as short as possible,
//! so a nested `IF` only nests cleanly inside the `ELSE` branch.
//!
//! Parsing never fails: text that is not a command becomes [`Command::Nop`] and a
//! condition that is not understood becomes [`Condition::Invalid`].

use super::ast::{ArithOp, Command, CompareOp, Condition, Heading};
use crate::interpreter::constants::SIGNAL;
use crate::memory::value::Value;

const ARITH_OPS: [ArithOp; 4] = [ArithOp::Add, ArithOp::Sub, ArithOp::Mul, ArithOp::Div];

/// Parse a command string
pub fn parse_command(text: &str) -> Command {
    let text = text.trim();

    if text.starts_with("IF") {
        return parse_branch(text).unwrap_or(Command::Nop);
    }

    if let Some(literal) = text.strip_prefix('=') {
        return Command::Assign(Value::parse_literal(literal));
    }

    for op in ARITH_OPS {
        if let Some(literal) = text.strip_prefix(op.symbol()) {
            return Command::Update(op, Value::parse_literal(literal));
        }
    }

    let mut chars = text.chars();
    if let (Some('%'), Some(letter), None) = (chars.next(), chars.next(), chars.next()) {
        if let Some(heading) = Heading::from_letter(letter) {
            return Command::Steer(heading);
        }
    }

    Command::Nop
}

/// Parse an `IF` condition
pub fn parse_condition(text: &str) -> Condition {
    let text = text.trim();

    if text == SIGNAL {
        return Condition::Signal;
    }

    for op in CompareOp::MATCH_ORDER {
        if let Some(literal) = text.strip_prefix(op.symbol()) {
            return Condition::Compare(op, Value::parse_literal(literal));
        }
    }

    Condition::Invalid
}

fn parse_branch(text: &str) -> Option<Command> {
    let rest = text.strip_prefix("IF")?;

    let cond_start = skip_whitespace(rest, 0);
    if cond_start == 0 || cond_start == rest.len() {
        return None;
    }

    let (cond_end, then_start) = find_keyword(rest, "THEN", after_first_char(rest, cond_start))?;
    if then_start == rest.len() {
        return None;
    }

    let (then_end, else_start) = find_keyword(rest, "ELSE", after_first_char(rest, then_start))?;
    if else_start == rest.len() {
        return None;
    }

    Some(Command::Branch {
        condition: parse_condition(&rest[cond_start..cond_end]),
        then_branch: Box::new(parse_command(&rest[then_start..then_end])),
        else_branch: Box::new(parse_command(&rest[else_start..])),
    })
}

/// Find the first `<whitespace>KEYWORD<whitespace>` starting at or after `from`.
///
/// Returns the byte offset where the leading whitespace starts and the offset of
/// the first non-whitespace character after the keyword.
fn find_keyword(text: &str, keyword: &str, from: usize) -> Option<(usize, usize)> {
    for (i, c) in text.char_indices() {
        if i < from || !c.is_whitespace() {
            continue;
        }

        let word_start = skip_whitespace(text, i);
        if !text[word_start..].starts_with(keyword) {
            continue;
        }

        let word_end = word_start + keyword.len();
        let followed_by_space = text[word_end..]
            .chars()
            .next()
            .is_some_and(char::is_whitespace);
        if followed_by_space {
            return Some((i, skip_whitespace(text, word_end)));
        }
    }
    None
}

fn skip_whitespace(text: &str, from: usize) -> usize {
    text[from..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(text.len(), |(i, _)| from + i)
}

fn after_first_char(text: &str, at: usize) -> usize {
    at + text[at..].chars().next().map_or(0, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_and_updates() {
        assert_eq!(parse_command("=5"), Command::Assign(Value::Int(5)));
        assert_eq!(
            parse_command(r#"="Hello""#),
            Command::Assign(Value::Text("Hello".to_string()))
        );
        assert_eq!(
            parse_command("+=2.5"),
            Command::Update(ArithOp::Add, Value::Float(2.5))
        );
        assert_eq!(
            parse_command("  -=30 "),
            Command::Update(ArithOp::Sub, Value::Int(30))
        );
        assert_eq!(parse_command("*=3"), Command::Update(ArithOp::Mul, Value::Int(3)));
        assert_eq!(parse_command("/=2"), Command::Update(ArithOp::Div, Value::Int(2)));
    }

    #[test]
    fn test_double_equals_is_an_assignment() {
        assert_eq!(
            parse_command("==5"),
            Command::Assign(Value::Text("=5".to_string()))
        );
    }

    #[test]
    fn test_steer() {
        assert_eq!(parse_command("%L"), Command::Steer(Heading::Left));
        assert_eq!(parse_command("%D"), Command::Steer(Heading::Down));
        assert_eq!(parse_command("%Q"), Command::Nop);
        assert_eq!(parse_command("%LL"), Command::Nop);
    }

    #[test]
    fn test_unrecognised_is_nop() {
        assert_eq!(parse_command(""), Command::Nop);
        assert_eq!(parse_command("print"), Command::Nop);
        assert_eq!(parse_command("IF ==1 THEN =2"), Command::Nop);
        assert_eq!(parse_command("IFFY"), Command::Nop);
    }

    #[test]
    fn test_simple_branch() {
        let command = parse_command("IF ** THEN =1 ELSE =0");
        assert_eq!(
            command,
            Command::Branch {
                condition: Condition::Signal,
                then_branch: Box::new(Command::Assign(Value::Int(1))),
                else_branch: Box::new(Command::Assign(Value::Int(0))),
            }
        );
    }

    #[test]
    fn test_nested_branch_in_else() {
        let command = parse_command("IF >=10 THEN %R ELSE IF <0 THEN %L ELSE +=1");
        let Command::Branch {
            condition,
            then_branch,
            else_branch,
        } = command
        else {
            panic!("Expected branch");
        };
        assert_eq!(condition, Condition::Compare(CompareOp::Ge, Value::Int(10)));
        assert_eq!(*then_branch, Command::Steer(Heading::Right));
        assert!(matches!(
            *else_branch,
            Command::Branch {
                condition: Condition::Compare(CompareOp::Lt, Value::Int(0)),
                ..
            }
        ));
    }

    #[test]
    fn test_branch_with_spaced_text_literal() {
        let command = parse_command(r#"IF == "a b" THEN ="yes" ELSE ="no""#);
        assert!(matches!(
            command,
            Command::Branch {
                condition: Condition::Compare(CompareOp::Eq, Value::Text(ref s)),
                ..
            } if s == "a b"
        ));
    }

    #[test]
    fn test_conditions() {
        assert_eq!(parse_condition("**"), Condition::Signal);
        assert_eq!(
            parse_condition("!=3"),
            Condition::Compare(CompareOp::Ne, Value::Int(3))
        );
        assert_eq!(
            parse_condition("<=1.5"),
            Condition::Compare(CompareOp::Le, Value::Float(1.5))
        );
        assert_eq!(
            parse_condition(">x"),
            Condition::Compare(CompareOp::Gt, Value::Text("x".to_string()))
        );
        assert_eq!(parse_condition("~5"), Condition::Invalid);
    }
}
