//! Cell location parsing and formatting.
//!
//! Provides bidirectional conversion between textual cell references
//! (e.g. "A0", "F12") and zero-indexed (row, column) coordinates. The
//! textual form is a single column letter followed by the row number.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// A location of a cell by row and column indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellLocation {
    pub row: usize,
    pub column: usize,
}

impl CellLocation {
    pub fn new(row: usize, column: usize) -> CellLocation {
        CellLocation { row, column }
    }

    /// Construct a location from a column letter ('A' = 0, 'B' = 1, ...).
    /// The letter must be an uppercase ASCII letter.
    pub fn from_letter(row: usize, column: char) -> CellLocation {
        CellLocation {
            row,
            column: (column as u8 - b'A') as usize,
        }
    }

    /// Parse a textual cell reference. Returns None if the input is not
    /// a column letter followed by a row number.
    pub fn maybe_reference(name: &str) -> Option<CellLocation> {
        let caps = reference_re().captures(name)?;
        let column = (caps["letter"].as_bytes()[0] - b'A') as usize;
        let row = caps["row"].parse::<usize>().ok()?;
        Some(CellLocation::new(row, column))
    }
}

fn reference_re() -> &'static Regex {
    static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();
    REFERENCE_RE.get_or_init(|| {
        Regex::new(r"^(?<letter>[A-Z])(?<row>[0-9]+)$")
            .expect("cell reference regex must compile")
    })
}

impl fmt::Display for CellLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.column as u8) as char, self.row)
    }
}
