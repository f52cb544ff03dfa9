//! Binary light/dark grid produced by thresholding an intensity image.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Character used for a light cell in the bitmap's text form.
pub const LIGHT_CHAR: char = '*';

/// Character used for a dark cell in the bitmap's text form.
pub const DARK_CHAR: char = ' ';

/// One bitmap cell.
///
/// `Light` is foreground (message characters go here), `Dark` is background
/// and always renders as a blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Light,
    Dark,
}

impl Cell {
    /// Classify an intensity: strictly below `threshold` is dark.
    #[inline]
    pub fn classify(intensity: u8, threshold: u8) -> Self {
        if intensity < threshold {
            Cell::Dark
        } else {
            Cell::Light
        }
    }

    pub fn is_light(self) -> bool {
        matches!(self, Cell::Light)
    }

    /// Character for this cell in the bitmap's text form.
    pub fn as_char(self) -> char {
        match self {
            Cell::Light => LIGHT_CHAR,
            Cell::Dark => DARK_CHAR,
        }
    }
}

/// Rows of cells, each trimmed of trailing dark cells.
///
/// Rows keep their own length; a row without any light cell is empty. Column
/// positions within a row match the source image left to right.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitmap {
    rows: Vec<Vec<Cell>>,
}

impl Bitmap {
    /// Build a bitmap from rows, trimming trailing dark cells from each.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|mut row| {
                trim_trailing_dark(&mut row);
                row
            })
            .collect();
        Self { rows }
    }

    /// Threshold a row-major intensity buffer of `width` columns.
    ///
    /// # Arguments
    /// * `gray` - Intensity values, one per pixel, row-major
    /// * `width` - Pixels per row
    /// * `threshold` - Intensities below this are dark
    pub fn from_intensities(gray: &[u8], width: usize, threshold: u8) -> Self {
        if width == 0 {
            return Self::default();
        }

        let rows = gray
            .chunks(width)
            .map(|line| {
                line.iter()
                    .map(|&v| Cell::classify(v, threshold))
                    .collect::<Vec<_>>()
            })
            .collect();

        Self::from_rows(rows)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows (the height of the rasterized image).
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Total number of light cells across all rows.
    pub fn light_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|c| c.is_light()).count())
            .sum()
    }
}

fn trim_trailing_dark(row: &mut Vec<Cell>) {
    let keep = row
        .iter()
        .rposition(|c| c.is_light())
        .map_or(0, |last| last + 1);
    row.truncate(keep);
}

/// Text form: `*` for light, space for dark, rows joined by `\n`.
impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Bitmap {
    type Err = Error;

    /// Parse the text form. Only `*` and space are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split('\n')
            .enumerate()
            .map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .map(|(x, ch)| match ch {
                        LIGHT_CHAR => Ok(Cell::Light),
                        DARK_CHAR => Ok(Cell::Dark),
                        other => Err(Error::invalid(format!(
                            "unexpected bitmap character {:?} at row {}, column {}",
                            other, y, x
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Cell::{Dark, Light};

    #[test]
    fn test_classify_threshold_boundary() {
        assert_eq!(Cell::classify(100, 100), Light);
        assert_eq!(Cell::classify(99, 100), Dark);
        assert_eq!(Cell::classify(0, 0), Light);
        assert_eq!(Cell::classify(255, 255), Light);
    }

    #[test]
    fn test_trailing_dark_trimmed() {
        let bitmap = Bitmap::from_rows(vec![vec![Dark, Light, Dark, Dark]]);
        assert_eq!(bitmap.rows(), &[vec![Dark, Light]]);
    }

    #[test]
    fn test_leading_and_inner_dark_kept() {
        let bitmap = Bitmap::from_rows(vec![vec![Dark, Light, Dark, Light]]);
        assert_eq!(bitmap.rows()[0].len(), 4);
    }

    #[test]
    fn test_all_dark_rows_become_empty() {
        let bitmap = Bitmap::from_intensities(&[0; 6], 3, 50);
        assert_eq!(bitmap.height(), 2);
        assert!(bitmap.rows().iter().all(|row| row.is_empty()));
        assert_eq!(bitmap.to_string(), "\n");
    }

    #[test]
    fn test_from_intensities_rows_independent_lengths() {
        let gray = [200, 0, 0, 0, 0, 200, 200, 200, 0];
        let bitmap = Bitmap::from_intensities(&gray, 3, 128);
        let lens: Vec<usize> = bitmap.rows().iter().map(Vec::len).collect();
        assert_eq!(lens, vec![1, 3, 2]);
        assert_eq!(bitmap.light_count(), 4);
    }

    #[test]
    fn test_display_text_form() {
        let bitmap = Bitmap::from_intensities(&[10, 200, 200, 10], 2, 100);
        assert_eq!(bitmap.to_string(), " *\n*");
    }

    #[test]
    fn test_parse_text_form() {
        let bitmap: Bitmap = " **  \n\n*".parse().unwrap();
        assert_eq!(bitmap.height(), 3);
        assert_eq!(bitmap.rows()[0], vec![Dark, Light, Light]);
        assert!(bitmap.rows()[1].is_empty());
        assert_eq!(bitmap.to_string(), " **\n\n*");
    }

    #[test]
    fn test_parse_rejects_other_characters() {
        let err = "*x*".parse::<Bitmap>().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_zero_width_is_empty() {
        assert_eq!(Bitmap::from_intensities(&[], 0, 10).height(), 0);
    }
}
