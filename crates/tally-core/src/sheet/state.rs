use std::collections::HashMap;

use tally_engine::error::EvalError;
use tally_engine::formula::{Expression, State, evaluate};
use tally_engine::location::CellLocation;

use crate::view::{SheetView, ViewElement};

/// An evaluating spreadsheet grid.
///
/// Every in-bounds location always holds an expression; unset cells hold
/// the default expression the sheet was built with. Values are recomputed
/// from the stored formulas on every query; there is no cached value
/// state. Built-ins are frozen in at construction time.
pub struct Sheet {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) cells: HashMap<CellLocation, Expression>,
    pub(crate) builtins: HashMap<String, Expression>,
}

impl Sheet {
    pub(crate) fn new(
        builtins: HashMap<String, Expression>,
        default: &Expression,
        rows: usize,
        columns: usize,
    ) -> Sheet {
        let mut cells = HashMap::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                cells.insert(CellLocation::new(row, column), default.clone());
            }
        }
        Sheet {
            rows,
            columns,
            cells,
            builtins,
        }
    }

    /// The stored formula at a location, or None outside the sheet.
    pub fn formula(&self, location: CellLocation) -> Option<&Expression> {
        self.cells.get(&location)
    }

    /// Evaluate the formula at a location against the current sheet
    /// state. Locations outside the sheet evaluate as empty.
    pub fn value(&self, location: CellLocation) -> Result<Expression, EvalError> {
        match self.cells.get(&location) {
            Some(expression) => evaluate(expression, &self.state()),
            None => Ok(Expression::Nothing),
        }
    }

    /// Identifier bindings for one evaluation pass: every coordinate in
    /// text form plus every built-in. Built-in identifiers are never
    /// valid coordinates, so the two halves cannot collide.
    pub(crate) fn state(&self) -> State {
        let mut state: State = self
            .cells
            .iter()
            .map(|(location, expression)| (location.to_string(), expression.clone()))
            .collect();
        for (name, expression) in &self.builtins {
            state.insert(name.clone(), expression.clone());
        }
        state
    }
}

impl SheetView for Sheet {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn value_at(&self, row: usize, column: usize) -> ViewElement {
        match self.value(CellLocation::new(row, column)) {
            Ok(value) => ViewElement::plain(value.render()),
            Err(error) => ViewElement::plain(error.to_string()),
        }
    }

    fn formula_at(&self, row: usize, column: usize) -> ViewElement {
        let content = self
            .formula(CellLocation::new(row, column))
            .map(Expression::render)
            .unwrap_or_default();
        ViewElement::plain(content)
    }
}

#[cfg(test)]
mod tests {
    use crate::sheet::SheetBuilder;
    use crate::view::SheetView;
    use tally_engine::formula::{Expression, factory};
    use tally_engine::location::CellLocation;

    fn builder() -> SheetBuilder {
        SheetBuilder::new(factory::empty())
    }

    #[test]
    fn test_new_sheet_is_populated_with_the_default_expression() {
        let sheet = builder().empty(2, 3);
        for row in 0..2 {
            for column in 0..3 {
                let location = CellLocation::new(row, column);
                assert_eq!(sheet.formula(location), Some(&Expression::Nothing));
                assert_eq!(sheet.value_at(row, column).content, "");
                assert_eq!(sheet.formula_at(row, column).content, "");
            }
        }
    }

    #[test]
    fn test_dimensions() {
        let sheet = builder().empty(5, 7);
        assert_eq!(sheet.rows(), 5);
        assert_eq!(sheet.columns(), 7);
    }

    #[test]
    fn test_value_recomputes_from_current_state() {
        let mut sheet = builder().empty(2, 2);
        sheet.update(0, 0, "2").unwrap();
        sheet.update(1, 0, "A0 * 10").unwrap();
        assert_eq!(sheet.value_at(1, 0).content, "20");

        // Changing the referenced cell changes the dependent's value.
        sheet.update(0, 0, "7").unwrap();
        assert_eq!(sheet.value_at(1, 0).content, "70");
    }

    #[test]
    fn test_builtins_resolve_during_evaluation() {
        let mut sheet = builder()
            .include_builtin("life", factory::constant(42))
            .empty(2, 2);
        sheet.update(1, 1, "life").unwrap();
        assert_eq!(sheet.formula_at(1, 1).content, "life");
        assert_eq!(sheet.value_at(1, 1).content, "42");
    }

    #[test]
    fn test_encode_joins_rows_and_columns() {
        let mut sheet = builder().empty(2, 2);
        sheet.update(0, 0, "1 + 2").unwrap();
        sheet.update(1, 1, "A0").unwrap();
        assert_eq!(sheet.encode(), "1 + 2|\n|A0\n");
    }
}
