use std::collections::HashMap;

use tally_engine::formula::{Expression, parse};
use tally_engine::location::CellLocation;

use super::state::Sheet;
use crate::error::{Result, SheetError};

/// Configuration for constructing [`Sheet`] instances.
///
/// Built-ins registered here are copied into each constructed sheet, so
/// registering more afterwards never affects sheets already built.
#[derive(Clone)]
pub struct SheetBuilder {
    builtins: HashMap<String, Expression>,
    default: Expression,
}

impl SheetBuilder {
    /// A builder whose sheets use the given default expression for unset
    /// cells.
    pub fn new(default: Expression) -> SheetBuilder {
        SheetBuilder {
            builtins: HashMap::new(),
            default,
        }
    }

    /// Register a built-in expression under an identifier, available to
    /// every formula in sheets constructed from here on.
    ///
    /// # Panics
    ///
    /// Panics if the identifier reads as a cell reference such as "A0":
    /// a built-in must never shadow a coordinate.
    pub fn include_builtin(
        mut self,
        identifier: impl Into<String>,
        expression: Expression,
    ) -> SheetBuilder {
        let identifier = identifier.into();
        assert!(
            CellLocation::maybe_reference(&identifier).is_none(),
            "built-in identifier {identifier:?} reads as a cell reference"
        );
        self.builtins.insert(identifier, expression);
        self
    }

    /// Construct an empty sheet of the given dimensions.
    pub fn empty(&self, rows: usize, columns: usize) -> Sheet {
        Sheet::new(self.builtins.clone(), &self.default, rows, columns)
    }

    /// Decode a sheet from its text encoding.
    ///
    /// One line per row; fields within a row are separated by `|`. The
    /// widest row fixes the column count; short rows are backfilled with
    /// the default expression, as is any field that fails to parse.
    /// Evaluation failures (unknown identifiers, cycles) propagate.
    pub fn load(&self, content: &str) -> Result<Sheet> {
        let lines: Vec<&str> = content.lines().collect();
        if lines.is_empty() {
            return Err(SheetError::EmptyContent);
        }
        let rows = lines.len();
        let columns = lines
            .iter()
            .map(|line| line.split('|').count())
            .max()
            .unwrap_or(0);

        let mut sheet = self.empty(rows, columns);
        for (row, line) in lines.iter().enumerate() {
            let mut fields = line.split('|');
            for column in 0..columns {
                let expression = match fields.next() {
                    Some(field) => {
                        parse(field).unwrap_or_else(|_| self.default.clone())
                    }
                    None => self.default.clone(),
                };
                sheet.update_at(CellLocation::new(row, column), expression)?;
            }
        }
        Ok(sheet)
    }
}
