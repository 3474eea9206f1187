//! Headless runner: ticks the interpreter to completion on plain streams

use crate::interpreter::engine::Interpreter;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const INPUT_PROMPT: &str = "\n[INPUT REQUIRED] Enter value for car: ";
pub const FINISHED_MESSAGE: &str = "\n[Maze Execution Finished]\n";

/// Run until no cars remain, prompting on `out` and reading one line from
/// `input` whenever a car waits on an input cell.
///
/// End of input answers every pending prompt with `0`.
pub fn run_blocking<R: BufRead, W: Write>(
    interpreter: &mut Interpreter,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    while interpreter.is_running() {
        if let Some(car) = interpreter.awaiting_car() {
            write!(out, "{}", INPUT_PROMPT)?;
            out.flush()?;

            let mut line = String::new();
            let answer = if input.read_line(&mut line)? == 0 {
                debug!(car = %car, "input exhausted, answering 0");
                "0"
            } else {
                line.trim_end_matches(['\r', '\n'])
            };
            interpreter.resolve_input(answer);
            continue;
        }

        for text in interpreter.step() {
            write!(out, "{}", text)?;
        }
        out.flush()?;
    }

    info!(ticks = interpreter.ticks(), "maze finished");
    write!(out, "{}", FINISHED_MESSAGE)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(source: &str, stdin: &str) -> String {
        let mut interpreter = Interpreter::from_source(source);
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        run_blocking(&mut interpreter, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_prints_and_finishes() {
        let output = run("^^\nPR\n>>\n()\n\nPR -> = 42", "");
        assert_eq!(output, format!("42{}", FINISHED_MESSAGE));
    }

    #[test]
    fn test_empty_program_finishes_immediately() {
        assert_eq!(run("", ""), FINISHED_MESSAGE);
    }

    #[test]
    fn test_input_line_is_delivered() {
        let output = run("^^\n<<\n>>\n()", "hello\n");
        assert_eq!(output, format!("{}hello{}", INPUT_PROMPT, FINISHED_MESSAGE));
    }

    #[test]
    fn test_crlf_is_stripped() {
        let output = run("^^\n<<\n>>\n()", "12\r\n");
        assert_eq!(output, format!("{}12{}", INPUT_PROMPT, FINISHED_MESSAGE));
    }

    #[test]
    fn test_end_of_input_answers_zero() {
        let output = run("^^\n<<\n>>\n()", "");
        assert_eq!(output, format!("{}0{}", INPUT_PROMPT, FINISHED_MESSAGE));
    }
}
