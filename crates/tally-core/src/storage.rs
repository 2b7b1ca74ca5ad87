//! Sheet text format file I/O.
//!
//! The format itself lives in [`SheetView::encode`] and
//! [`SheetBuilder::load`]; this module is the thin file plumbing over
//! them.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::sheet::{Sheet, SheetBuilder};
use crate::view::SheetView;

/// Write a sheet's text encoding to a file.
pub fn save_sheet(path: &Path, sheet: &impl SheetView) -> Result<()> {
    fs::write(path, sheet.encode())?;
    Ok(())
}

/// Load a sheet from a file using the builder's built-ins and default
/// expression.
pub fn load_sheet(path: &Path, builder: &SheetBuilder) -> Result<Sheet> {
    builder.load(&fs::read_to_string(path)?)
}
