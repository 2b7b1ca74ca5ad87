use tally_engine::error::EvalError;
use tally_engine::formula::{Expression, evaluate, parse};
use tally_engine::location::CellLocation;

use super::state::Sheet;
use crate::error::{Result, SheetError};

impl Sheet {
    /// Parse and install new cell text.
    ///
    /// The previous formula is kept when the text fails to parse or the
    /// new expression stops any cell in the sheet from evaluating
    /// (a type error, an unknown identifier, or a circular reference).
    pub fn update(&mut self, row: usize, column: usize, input: &str) -> Result<()> {
        let expression =
            parse(input).map_err(|_| SheetError::UnableToParse(input.to_string()))?;
        self.install(CellLocation::new(row, column), expression)
    }

    /// Install an already-built expression at a location, with the same
    /// validate-and-roll-back protocol as the text path.
    pub fn update_at(
        &mut self,
        location: CellLocation,
        expression: Expression,
    ) -> Result<()> {
        self.install(location, expression)
    }

    /// Tentatively install, re-validate the whole sheet, and roll back
    /// if any cell stops evaluating.
    fn install(&mut self, location: CellLocation, expression: Expression) -> Result<()> {
        if !self.cells.contains_key(&location) {
            return Err(SheetError::OutOfBounds(location));
        }
        let previous = self.cells.insert(location, expression);
        if let Err(error) = self.validate() {
            match previous {
                Some(expression) => {
                    self.cells.insert(location, expression);
                }
                None => {
                    self.cells.remove(&location);
                }
            }
            return Err(error.into());
        }
        Ok(())
    }

    fn validate(&self) -> std::result::Result<(), EvalError> {
        let state = self.state();
        for expression in self.cells.values() {
            evaluate(expression, &state)?;
        }
        Ok(())
    }
}
