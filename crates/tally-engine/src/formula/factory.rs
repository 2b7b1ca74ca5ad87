//! Construction of expression nodes.
//!
//! Both the parser and programmatic sheet population build nodes through
//! these functions, so the operator catalogue is validated in one place.

use super::ast::Expression;
use super::ops::Operator;
use crate::error::InvalidExpression;

/// A constant expression holding the given value.
pub fn constant(value: i64) -> Expression {
    Expression::Constant(value)
}

/// A reference expression holding the given identifier.
pub fn reference(identifier: impl Into<String>) -> Expression {
    Expression::Reference(identifier.into())
}

/// The empty expression.
pub fn empty() -> Expression {
    Expression::Nothing
}

/// An operation node for the named operator.
///
/// Fails if the name is outside the fixed catalogue or no arguments are
/// given.
pub fn operator(
    name: &str,
    arguments: Vec<Expression>,
) -> Result<Expression, InvalidExpression> {
    if arguments.is_empty() {
        return Err(InvalidExpression::NoArguments(name.to_string()));
    }
    let operator = Operator::from_name(name)
        .ok_or_else(|| InvalidExpression::UnknownOperator(name.to_string()))?;
    Ok(Expression::Operation(operator, arguments))
}

#[cfg(test)]
mod tests {
    use super::{constant, empty, operator, reference};
    use crate::error::InvalidExpression;
    use crate::formula::{Expression, Operator};

    #[test]
    fn test_leaf_constructors() {
        assert_eq!(constant(42), Expression::Constant(42));
        assert_eq!(reference("A0"), Expression::Reference("A0".to_string()));
        assert_eq!(empty(), Expression::Nothing);
    }

    #[test]
    fn test_operator_dispatches_every_catalogue_name() {
        for (name, expected) in [
            ("+", Operator::Plus),
            ("-", Operator::Minus),
            ("*", Operator::Times),
            ("/", Operator::Divide),
            ("<", Operator::Less),
            ("=", Operator::Equal),
            (",", Operator::List),
            ("MEAN", Operator::Mean),
            ("MEDIAN", Operator::Median),
            ("", Operator::Identity),
        ] {
            let built = operator(name, vec![constant(1)]).unwrap();
            assert_eq!(built, Expression::Operation(expected, vec![constant(1)]));
        }
    }

    #[test]
    fn test_operator_rejects_unknown_names() {
        assert!(matches!(
            operator("SUM", vec![constant(1)]),
            Err(InvalidExpression::UnknownOperator(name)) if name == "SUM"
        ));
        // Case matters: the catalogue names are uppercase.
        assert!(matches!(
            operator("mean", vec![constant(1)]),
            Err(InvalidExpression::UnknownOperator(_))
        ));
    }

    #[test]
    fn test_operator_rejects_zero_arguments() {
        assert!(matches!(
            operator("+", vec![]),
            Err(InvalidExpression::NoArguments(_))
        ));
    }
}
