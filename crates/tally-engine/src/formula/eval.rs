//! Expression evaluation with reference resolution.
//!
//! References are resolved against a snapshot of the whole sheet. A
//! chain that revisits an identifier still being resolved is reported as
//! a circular reference; detection uses an explicit resolving set rather
//! than call-stack depth.

use std::collections::{HashMap, HashSet};

use super::ast::Expression;
use crate::error::EvalError;

/// Snapshot of identifier bindings for one evaluation pass.
pub type State = HashMap<String, Expression>;

/// Evaluate an expression against the given state.
///
/// The result is a `Constant` for anything numeric, or `Nothing` when
/// the expression (or the cell it resolves to) is empty.
pub fn evaluate(expression: &Expression, state: &State) -> Result<Expression, EvalError> {
    let mut resolving = HashSet::new();
    evaluate_inner(expression, state, &mut resolving)
}

fn evaluate_inner(
    expression: &Expression,
    state: &State,
    resolving: &mut HashSet<String>,
) -> Result<Expression, EvalError> {
    match expression {
        Expression::Nothing => Ok(Expression::Nothing),
        Expression::Constant(value) => Ok(Expression::Constant(*value)),
        Expression::Reference(identifier) => {
            if !resolving.insert(identifier.clone()) {
                return Err(EvalError::CircularReference(identifier.clone()));
            }
            let target = state
                .get(identifier)
                .ok_or_else(|| EvalError::UnknownIdentifier(identifier.clone()))?;
            let value = evaluate_inner(target, state, resolving)?;
            resolving.remove(identifier);
            Ok(value)
        }
        Expression::Operation(operator, arguments) => {
            let mut values = Vec::with_capacity(arguments.len());
            for argument in arguments {
                // Empty operands count as zero.
                values.push(match evaluate_inner(argument, state, resolving)? {
                    Expression::Nothing => 0,
                    value => value.number()?,
                });
            }
            Ok(Expression::Constant(operator.perform(&values)?))
        }
    }
}
