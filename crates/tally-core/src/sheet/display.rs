use std::collections::HashMap;

use tally_engine::formula::{Expression, parse};
use tally_engine::location::CellLocation;

use crate::error::{Result, SheetError};
use crate::view::{SheetView, ViewElement};

/// A sheet that stores and renders formulas without ever evaluating
/// them. Both views show the stored formula text.
pub struct DisplaySheet {
    rows: usize,
    columns: usize,
    cells: HashMap<CellLocation, Expression>,
}

impl DisplaySheet {
    /// Construct a display sheet with every cell holding the default
    /// expression.
    pub fn new(default: &Expression, rows: usize, columns: usize) -> DisplaySheet {
        let mut cells = HashMap::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                cells.insert(CellLocation::new(row, column), default.clone());
            }
        }
        DisplaySheet {
            rows,
            columns,
            cells,
        }
    }

    /// Parse and store new cell text. No evaluation happens, so any
    /// parseable formula is accepted.
    pub fn update(&mut self, row: usize, column: usize, input: &str) -> Result<()> {
        let location = CellLocation::new(row, column);
        if !self.cells.contains_key(&location) {
            return Err(SheetError::OutOfBounds(location));
        }
        let expression =
            parse(input).map_err(|_| SheetError::UnableToParse(input.to_string()))?;
        self.cells.insert(location, expression);
        Ok(())
    }

    fn render_at(&self, row: usize, column: usize) -> ViewElement {
        let content = self
            .cells
            .get(&CellLocation::new(row, column))
            .map(Expression::render)
            .unwrap_or_default();
        ViewElement::plain(content)
    }
}

impl SheetView for DisplaySheet {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn value_at(&self, row: usize, column: usize) -> ViewElement {
        self.render_at(row, column)
    }

    fn formula_at(&self, row: usize, column: usize) -> ViewElement {
        self.render_at(row, column)
    }
}
