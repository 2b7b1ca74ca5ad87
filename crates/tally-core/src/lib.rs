//! tally-core - UI-agnostic sheet model and storage.

pub mod error;
pub mod sheet;
pub mod storage;
pub mod view;

pub use error::{Result, SheetError};
pub use sheet::{DisplaySheet, Sheet, SheetBuilder};
pub use view::{SheetView, ViewElement};

pub use tally_engine::location::CellLocation;
