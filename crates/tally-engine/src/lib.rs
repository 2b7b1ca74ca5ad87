//! tally_engine - Formula language and evaluation engine.

pub mod error;
pub mod formula;
pub mod location;

pub use error::{EvalError, InvalidExpression, ParseError};
pub use formula::{Expression, Operator, State, Token, evaluate, parse, tokenize};
pub use location::CellLocation;
