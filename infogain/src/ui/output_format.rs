//! Colored status messages for stderr.
//!
//! Color is applied only when the caller says the stream supports it, so
//! piped output and test captures stay plain.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Prints an error message, in red when `supports_color` is set.
pub fn print_error_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), message.red())
    } else {
        writeln!(writer, "Error: {}", message)
    }
}

/// Prints an informational heading, in bold when `supports_color` is set.
pub fn print_info_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", message.bold())
    } else {
        writeln!(writer, "{}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_error_without_color() {
        let mut buf = Vec::new();
        print_error_message(&mut buf, "missing file", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: missing file\n");
    }

    #[test]
    fn colored_error_has_escape_codes() {
        let mut buf = Vec::new();
        print_error_message(&mut buf, "missing file", true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("missing file"));
    }
}
