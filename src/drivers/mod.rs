//! Driver layer: per-program orchestration.
//!
//! ## Files
//! - `pet_demo.rs` — program A: banner, companion slot resolution, owner
//!   session (prompt, name classification, derived value, report).
//! - `flower_demo.rs` — program B: prompt, greeting, name classification.
//!
//! ## Principles
//! - Drivers are generic over `BufRead`/`Write` so tests run them against
//!   in-memory buffers; the binaries pass locked stdin/stdout.
//! - Classify input against the known literals as an explicit enum, then
//!   branch on the enum. Adding a category is a data change.
//! - Drivers return the program's exit code; errors propagate via
//!   `anyhow::Result` and terminate the process non-zero.

pub mod flower_demo;
pub mod pet_demo;

use std::io::{self, BufRead};

/// Reads one line of console input. Strips only the line terminator;
/// comparisons against the known literals stay exact, with no trimming.
pub(crate) fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::read_line;
    use std::io::Cursor;

    #[test]
    fn read_line_strips_terminator_only() {
        let mut input = Cursor::new("  Hanami \n");
        assert_eq!(read_line(&mut input).expect("read"), "  Hanami ");
    }

    #[test]
    fn read_line_handles_crlf_and_missing_newline() {
        let mut input = Cursor::new("Rose\r\n");
        assert_eq!(read_line(&mut input).expect("read"), "Rose");

        let mut input = Cursor::new("Lily");
        assert_eq!(read_line(&mut input).expect("read"), "Lily");
    }
}
