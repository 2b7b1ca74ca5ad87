//! Rendering contract between sheets and their front ends.

/// How a single cell should be rendered: its text plus background and
/// foreground colour names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewElement {
    pub content: String,
    pub background: String,
    pub foreground: String,
}

impl ViewElement {
    pub fn new(
        content: impl Into<String>,
        background: impl Into<String>,
        foreground: impl Into<String>,
    ) -> ViewElement {
        ViewElement {
            content: content.into(),
            background: background.into(),
            foreground: foreground.into(),
        }
    }

    /// A cell with the default styling.
    pub fn plain(content: impl Into<String>) -> ViewElement {
        ViewElement::new(content, "white", "black")
    }
}

/// Read access to a sheet for rendering and encoding.
pub trait SheetView {
    /// The number of rows in the sheet.
    fn rows(&self) -> usize;

    /// The number of columns in the sheet.
    fn columns(&self) -> usize;

    /// The value to render at the cell position.
    fn value_at(&self, row: usize, column: usize) -> ViewElement;

    /// The formula to render at the cell position.
    fn formula_at(&self, row: usize, column: usize) -> ViewElement;

    /// Encode the sheet as text: one line per row, formula fields
    /// separated by `|`.
    fn encode(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows());
        for row in 0..self.rows() {
            let fields: Vec<String> = (0..self.columns())
                .map(|column| self.formula_at(row, column).content)
                .collect();
            lines.push(fields.join("|"));
        }
        lines.join("\n") + "\n"
    }
}
