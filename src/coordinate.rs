//! Board coordinates in the familiar `<Column><Row>` notation, e.g. `A1` or `J10`.
//!
//! A coordinate carries no board bounds of its own; whether it lies on a
//! particular board is decided by [`Board::is_coordinate_in_bounds`].
//!
//! [`Board::is_coordinate_in_bounds`]: crate::Board::is_coordinate_in_bounds

use core::fmt;
use core::str::FromStr;

use crate::common::CoordinateError;
use crate::ship::Orientation;

/// First column label.
pub const FIRST_COLUMN: char = 'A';
/// Last column label; boards never grow past 26 columns.
pub const LAST_COLUMN: char = 'Z';

/// A cell on a player's board: a column letter and a 1-based row number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    column: char,
    row: u32,
}

impl Coordinate {
    /// Build a coordinate from its parts. Always succeeds; bounds are board-relative.
    pub const fn new(column: char, row: u32) -> Self {
        Self { column, row }
    }

    /// Build a coordinate from a zero-based column index and a 1-based row.
    /// Returns `None` if the index does not map to a character.
    pub fn from_index(column_index: u32, row: u32) -> Option<Self> {
        let column = char::from_u32((FIRST_COLUMN as u32).checked_add(column_index)?)?;
        Some(Self { column, row })
    }

    /// Column letter.
    pub fn column(&self) -> char {
        self.column
    }

    /// Row number, starting at 1.
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column offset from `A`, or `None` for columns before `A`.
    pub fn column_index(&self) -> Option<u32> {
        (self.column as u32).checked_sub(FIRST_COLUMN as u32)
    }

    /// The coordinate `steps` cells further along `orientation`: columns grow
    /// for horizontal runs, rows grow for vertical ones.
    pub fn shifted(&self, orientation: Orientation, steps: usize) -> Option<Self> {
        let steps = u32::try_from(steps).ok()?;
        match orientation {
            Orientation::Horizontal => {
                let column = char::from_u32((self.column as u32).checked_add(steps)?)?;
                Some(Self { column, row: self.row })
            }
            Orientation::Vertical => Some(Self {
                column: self.column,
                row: self.row.checked_add(steps)?,
            }),
        }
    }

    /// Parse text such as `"b7"` or `" J10 "`.
    ///
    /// The text is trimmed and upper-cased, then must be a letter `A`-`Z`
    /// followed by a positive row number, three characters at most.
    pub fn parse(text: &str) -> Result<Self, CoordinateError> {
        Self::try_parse(text).ok_or_else(|| CoordinateError::InvalidFormat(text.to_string()))
    }

    /// Like [`Coordinate::parse`], but reports failure as `None`.
    pub fn try_parse(text: &str) -> Option<Self> {
        let text = text.trim().to_uppercase();
        let len = text.chars().count();
        if !(2..=3).contains(&len) {
            return None;
        }

        let mut chars = text.chars();
        let column = chars.next()?;
        if !column.is_ascii_uppercase() {
            return None;
        }

        let digits = chars.as_str();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let row: u32 = digits.parse().ok()?;
        if row == 0 {
            return None;
        }
        Some(Self { column, row })
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}
