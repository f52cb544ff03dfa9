//! Interactive fallback for values missing from both flags and config.

use std::io::{self, BufRead, Write};

/// Ask until the user enters a non-empty line that `parse` accepts.
///
/// The prompt and any complaints go to `output` so stdout stays clean for
/// the rendered art. Only the line ending is stripped; spaces are kept since
/// they are meaningful in a message. Returns `UnexpectedEof` if input closes.
pub fn ask<T, R, W, F>(input: &mut R, output: &mut W, prompt: &str, parse: F) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a value was entered",
            ));
        }
        let line = line.trim_end_matches(['\n', '\r']);

        if line.is_empty() {
            writeln!(output, "Input cannot be empty. Please provide a valid input.")?;
            continue;
        }

        match parse(line) {
            Ok(value) => return Ok(value),
            Err(msg) => writeln!(output, "Invalid input. {}", msg)?,
        }
    }
}
