//! The expression tree.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::ops::Operator;
use crate::error::EvalError;

/// A formula expression node.
///
/// The language is closed over these four variants; rendering and
/// evaluation match exhaustively rather than dispatching through an open
/// hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    /// A placeholder for an empty cell.
    Nothing,
    /// An integer literal.
    Constant(i64),
    /// A reference to another cell or a built-in, by identifier.
    Reference(String),
    /// An operator or function applied to one or more sub-expressions.
    Operation(Operator, Vec<Expression>),
}

impl Expression {
    /// Identifiers this expression directly requires, unioned across all
    /// sub-expressions but not followed through the referenced cells.
    pub fn dependencies(&self) -> HashSet<String> {
        let mut deps = HashSet::new();
        self.collect_dependencies(&mut deps);
        deps
    }

    fn collect_dependencies(&self, deps: &mut HashSet<String>) {
        match self {
            Expression::Nothing | Expression::Constant(_) => {}
            Expression::Reference(identifier) => {
                deps.insert(identifier.clone());
            }
            Expression::Operation(_, arguments) => {
                for argument in arguments {
                    argument.collect_dependencies(deps);
                }
            }
        }
    }

    /// The canonical formula text of this expression, usable both for
    /// display and as re-parseable input.
    pub fn render(&self) -> String {
        match self {
            Expression::Nothing => String::new(),
            Expression::Constant(value) => value.to_string(),
            Expression::Reference(identifier) => identifier.clone(),
            Expression::Operation(operator, arguments) => {
                let rendered: Vec<String> =
                    arguments.iter().map(Expression::render).collect();
                if operator.is_function() {
                    format!("{}({})", operator.name(), rendered.join(", "))
                } else {
                    rendered.join(&format!(" {} ", operator.name()))
                }
            }
        }
    }

    /// The numeric value of this expression. Fails unless the expression
    /// has already been reduced to a constant.
    pub fn number(&self) -> Result<i64, EvalError> {
        match self {
            Expression::Constant(value) => Ok(*value),
            _ => Err(EvalError::NotANumber),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::Expression;
    use crate::error::EvalError;
    use crate::formula::factory;
    use std::collections::HashSet;

    #[test]
    fn test_render_leaves() {
        assert_eq!(factory::empty().render(), "");
        assert_eq!(factory::constant(24).render(), "24");
        assert_eq!(factory::reference("A0").render(), "A0");
    }

    #[test]
    fn test_render_infix_operation() {
        let plus = factory::operator(
            "+",
            vec![
                factory::reference("A1"),
                factory::reference("A2"),
                factory::constant(4),
            ],
        )
        .unwrap();
        assert_eq!(plus.render(), "A1 + A2 + 4");
    }

    #[test]
    fn test_render_function_operation() {
        let mean = factory::operator(
            "MEAN",
            vec![
                factory::reference("A1"),
                factory::reference("A2"),
                factory::constant(4),
            ],
        )
        .unwrap();
        assert_eq!(mean.render(), "MEAN(A1, A2, 4)");

        let identity =
            factory::operator("", vec![factory::constant(2)]).unwrap();
        assert_eq!(identity.render(), "(2)");
    }

    #[test]
    fn test_dependencies_union_across_subexpressions() {
        let minus = factory::operator(
            "-",
            vec![factory::reference("A1"), factory::reference("A2")],
        )
        .unwrap();
        let plus =
            factory::operator("+", vec![minus, factory::reference("B1")]).unwrap();
        let expected: HashSet<String> = ["A1", "A2", "B1"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(plus.dependencies(), expected);
    }

    #[test]
    fn test_leaves_have_no_dependencies() {
        assert!(factory::empty().dependencies().is_empty());
        assert!(factory::constant(24).dependencies().is_empty());
    }

    #[test]
    fn test_reference_depends_on_its_identifier() {
        let reference = factory::reference("A0");
        assert_eq!(
            reference.dependencies(),
            HashSet::from(["A0".to_string()])
        );
    }

    #[test]
    fn test_number_requires_a_constant() {
        assert_eq!(factory::constant(24).number().unwrap(), 24);
        assert!(matches!(
            factory::empty().number(),
            Err(EvalError::NotANumber)
        ));
        assert!(matches!(
            factory::reference("A0").number(),
            Err(EvalError::NotANumber)
        ));
        let operation =
            factory::operator("+", vec![factory::constant(1)]).unwrap();
        assert!(matches!(operation.number(), Err(EvalError::NotANumber)));
    }

    #[test]
    fn test_display_matches_render() {
        let expression = Expression::Reference("A0".to_string());
        assert_eq!(expression.to_string(), expression.render());
    }
}
