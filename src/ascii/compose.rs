//! Glyph compositor: fill the light cells of a bitmap with a repeating message.

use std::fmt;

use super::bitmap::{Bitmap, Cell};
use crate::error::{Error, Result};

/// A non-empty message, indexed by character and wrapped cyclically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    chars: Vec<char>,
}

impl Message {
    /// Build a message, rejecting the empty string.
    pub fn new(text: &str) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Err(Error::invalid("message must not be empty"));
        }
        Ok(Self { chars })
    }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the message has no characters (never true once constructed).
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at position `i`, wrapping around the end of the message.
    #[inline]
    pub fn char_at(&self, i: usize) -> char {
        self.chars[i % self.chars.len()]
    }
}

/// Rendered text rows, one per bitmap row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsciiArt {
    rows: Vec<String>,
}

impl AsciiArt {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// The rows joined by `\n`, without a trailing newline.
    pub fn into_text(self) -> String {
        self.rows.join("\n")
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

/// Compose a bitmap with a message string.
///
/// Fails with `InvalidInput` when `message` is empty.
pub fn compose(bitmap: &Bitmap, message: &str) -> Result<AsciiArt> {
    let message = Message::new(message)?;
    Ok(compose_message(bitmap, &message))
}

/// Compose a bitmap with an already-validated message.
///
/// One cursor runs across the whole bitmap: each light cell takes the next
/// message character and advances it, each dark cell emits a space and leaves
/// it alone. The cursor is not reset between rows, so the text flows on from
/// where the previous row stopped.
pub fn compose_message(bitmap: &Bitmap, message: &Message) -> AsciiArt {
    let mut cursor = 0usize;

    let rows = bitmap
        .rows()
        .iter()
        .map(|row| {
            let mut line = String::with_capacity(row.len());
            for cell in row {
                match cell {
                    Cell::Light => {
                        line.push(message.char_at(cursor));
                        cursor += 1;
                    }
                    Cell::Dark => line.push(' '),
                }
            }
            line
        })
        .collect();

    log::debug!(
        "Composed {} light cells ({} passes over a {}-char message)",
        cursor,
        cursor.div_ceil(message.len()),
        message.len()
    );

    AsciiArt { rows }
}
