//! Error types for the sheet layer.

use thiserror::Error;

use tally_engine::error::EvalError;
use tally_engine::location::CellLocation;

/// Errors surfaced by sheet updates and storage.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The cell text could not be parsed as a formula.
    #[error("Unable to parse: {0}")]
    UnableToParse(String),

    /// Installing the expression broke evaluation somewhere in the
    /// sheet; the previous formula was kept.
    #[error("{0}")]
    Eval(#[from] EvalError),

    #[error("location {0} is outside the sheet")]
    OutOfBounds(CellLocation),

    #[error("sheet text is empty")]
    EmptyContent,
}

pub type Result<T> = std::result::Result<T, SheetError>;
