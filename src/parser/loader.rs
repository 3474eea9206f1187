//! Source loader: turns program text into a grid and a function table
//!
//! Loading is line-oriented and never fails:
//!
//! 1. everything from `//` onward is dropped and the line is trimmed
//! 2. blank lines are skipped
//! 3. a line containing `->` defines a function (`NAME -> command`)
//! 4. any other line is a grid row of comma-separated tokens
//!
//! Rows are padded with walls to a common width by [`Grid::from_rows`].

use crate::interpreter::constants::{CELL_SEPARATOR, COMMENT_MARKER, FUNCTION_ARROW};
use crate::interpreter::functions::FunctionTable;
use crate::interpreter::grid::Grid;

/// A loaded program
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub grid: Grid,
    pub functions: FunctionTable,
}

impl Program {
    pub fn parse(source: &str) -> Self {
        let mut rows = Vec::new();
        let mut functions = FunctionTable::new();

        for line in source.lines() {
            let line = strip_comment(line).trim();
            if line.is_empty() {
                continue;
            }

            if let Some((name, command)) = line.split_once(FUNCTION_ARROW) {
                functions.define(name.trim(), command.trim());
            } else {
                rows.push(
                    line.split(CELL_SEPARATOR)
                        .map(|token| token.trim().to_string())
                        .collect(),
                );
            }
        }

        Program {
            grid: Grid::from_rows(rows),
            functions,
        }
    }
}

fn strip_comment(line: &str) -> &str {
    line.split_once(COMMENT_MARKER)
        .map_or(line, |(code, _)| code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_and_functions() {
        let source = r#"
        ##,##,##
        ##,^^,## // This is a comment
        ##,AA,##

        AA-> ="Hello" // Function comment
        BB-> -=30
        "#;

        let program = Program::parse(source);

        assert_eq!(program.grid.height(), 3);
        assert_eq!(program.grid.rows()[0], vec!["##", "##", "##"]);
        assert_eq!(program.grid.rows()[1], vec!["##", "^^", "##"]);
        assert_eq!(program.grid.rows()[2], vec!["##", "AA", "##"]);

        assert_eq!(program.functions.len(), 2);
        assert_eq!(program.functions.get("AA").unwrap().source, r#"="Hello""#);
        assert_eq!(program.functions.get("BB").unwrap().source, "-=30");
    }

    #[test]
    fn test_rows_are_padded_with_walls() {
        let program = Program::parse("^^,..,..\n..\n..,()");

        assert_eq!(program.grid.width(), 3);
        for row in program.grid.rows() {
            assert_eq!(row.len(), 3);
        }
        assert_eq!(program.grid.rows()[1], vec!["..", "##", "##"]);
        assert_eq!(program.grid.rows()[2], vec!["..", "()", "##"]);
    }

    #[test]
    fn test_later_definition_wins() {
        let program = Program::parse("AA -> =1\nAA -> =2");
        assert_eq!(program.functions.len(), 1);
        assert_eq!(program.functions.get("AA").unwrap().source, "=2");
    }

    #[test]
    fn test_comment_only_and_empty_sources() {
        assert!(Program::parse("").grid.is_empty());
        assert!(Program::parse("// nothing here\n\n   ").grid.is_empty());
    }

    #[test]
    fn test_comment_marker_cuts_quoted_text() {
        let program = Program::parse(r#"AA -> ="http://x""#);
        assert_eq!(program.functions.get("AA").unwrap().source, r#"="http:"#);
    }

    #[test]
    fn test_spawn_points_in_row_major_order() {
        let program = Program::parse("..,^^\n^^,^^");
        let spawns: Vec<_> = program.grid.spawn_points().collect();
        assert_eq!(spawns, vec![(0, 1), (1, 0), (1, 1)]);
    }
}
