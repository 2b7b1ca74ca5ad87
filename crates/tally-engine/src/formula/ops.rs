//! The operator catalogue and its reduction semantics.

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// An operator or function in the formula language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
    Less,
    Equal,
    /// The comma operator: a sequence that takes the value of its last
    /// element.
    List,
    Mean,
    Median,
    /// The empty-name "()" operator: takes the value of its first
    /// element.
    Identity,
}

impl Operator {
    /// Look up an operator by its name in formula text.
    pub fn from_name(name: &str) -> Option<Operator> {
        match name {
            "+" => Some(Operator::Plus),
            "-" => Some(Operator::Minus),
            "*" => Some(Operator::Times),
            "/" => Some(Operator::Divide),
            "<" => Some(Operator::Less),
            "=" => Some(Operator::Equal),
            "," => Some(Operator::List),
            "MEAN" => Some(Operator::Mean),
            "MEDIAN" => Some(Operator::Median),
            "" => Some(Operator::Identity),
            _ => None,
        }
    }

    /// The operator's name in formula text. The identity function has
    /// the empty name.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Times => "*",
            Operator::Divide => "/",
            Operator::Less => "<",
            Operator::Equal => "=",
            Operator::List => ",",
            Operator::Mean => "MEAN",
            Operator::Median => "MEDIAN",
            Operator::Identity => "",
        }
    }

    /// Whether the operator renders as `NAME(args...)` rather than infix.
    pub fn is_function(&self) -> bool {
        matches!(
            self,
            Operator::Mean | Operator::Median | Operator::Identity
        )
    }

    /// Reduce argument values to the operation's result.
    ///
    /// Callers supply at least one value; the expression factory rejects
    /// zero-argument operations.
    pub fn perform(&self, values: &[i64]) -> Result<i64, EvalError> {
        debug_assert!(!values.is_empty());
        match self {
            Operator::Plus => Ok(values.iter().sum()),
            Operator::Minus => Ok(values[0] - values[1..].iter().sum::<i64>()),
            Operator::Times => Ok(values.iter().product()),
            Operator::Divide => {
                let mut result = values[0];
                for value in &values[1..] {
                    if *value == 0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    result /= value;
                }
                Ok(result)
            }
            Operator::Less => {
                Ok(i64::from(values.windows(2).all(|pair| pair[0] < pair[1])))
            }
            Operator::Equal => {
                Ok(i64::from(values.windows(2).all(|pair| pair[0] == pair[1])))
            }
            Operator::List => Ok(values[values.len() - 1]),
            Operator::Mean => {
                Ok(values.iter().sum::<i64>() / values.len() as i64)
            }
            Operator::Median => {
                let mut sorted = values.to_vec();
                sorted.sort_unstable();
                let mid = sorted.len() / 2;
                if sorted.len() % 2 == 0 {
                    Ok((sorted[mid - 1] + sorted[mid]) / 2)
                } else {
                    Ok(sorted[mid])
                }
            }
            Operator::Identity => Ok(values[0]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Operator;
    use crate::error::EvalError;

    #[test]
    fn test_plus_sums_all_arguments() {
        assert_eq!(Operator::Plus.perform(&[3, 20, 12, 100]).unwrap(), 135);
        assert_eq!(Operator::Plus.perform(&[7]).unwrap(), 7);
    }

    #[test]
    fn test_minus_subtracts_the_rest_from_the_first() {
        assert_eq!(Operator::Minus.perform(&[10, 3, 2]).unwrap(), 5);
        // A single argument is returned unchanged.
        assert_eq!(Operator::Minus.perform(&[7]).unwrap(), 7);
        assert_eq!(Operator::Minus.perform(&[0, 42]).unwrap(), -42);
    }

    #[test]
    fn test_times_multiplies() {
        assert_eq!(Operator::Times.perform(&[2, 3, 4]).unwrap(), 24);
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(Operator::Divide.perform(&[7, 2]).unwrap(), 3);
        assert_eq!(Operator::Divide.perform(&[-7, 2]).unwrap(), -3);
        assert_eq!(Operator::Divide.perform(&[100, 5, 2]).unwrap(), 10);
    }

    #[test]
    fn test_divide_by_zero_fails() {
        assert!(matches!(
            Operator::Divide.perform(&[7, 0]),
            Err(EvalError::DivisionByZero)
        ));
    }

    #[test]
    fn test_less_requires_strict_increase() {
        assert_eq!(Operator::Less.perform(&[1, 2, 3]).unwrap(), 1);
        assert_eq!(Operator::Less.perform(&[1, 2, 2]).unwrap(), 0);
        assert_eq!(Operator::Less.perform(&[5]).unwrap(), 1);
    }

    #[test]
    fn test_equal_requires_all_equal() {
        assert_eq!(Operator::Equal.perform(&[2, 2, 2]).unwrap(), 1);
        assert_eq!(Operator::Equal.perform(&[2, 2, 3]).unwrap(), 0);
        assert_eq!(Operator::Equal.perform(&[9]).unwrap(), 1);
    }

    #[test]
    fn test_list_takes_the_last_value() {
        assert_eq!(Operator::List.perform(&[1, 2, 3]).unwrap(), 3);
    }

    #[test]
    fn test_identity_takes_the_first_value() {
        assert_eq!(Operator::Identity.perform(&[4, 9]).unwrap(), 4);
    }

    #[test]
    fn test_mean_truncates() {
        assert_eq!(Operator::Mean.perform(&[2, 4, 6]).unwrap(), 4);
        assert_eq!(Operator::Mean.perform(&[2, 4, 5]).unwrap(), 3);
    }

    #[test]
    fn test_median_of_odd_and_even_lengths() {
        assert_eq!(Operator::Median.perform(&[9, 20, 6, 13, 7]).unwrap(), 9);
        assert_eq!(Operator::Median.perform(&[2, 4]).unwrap(), 3);
        assert_eq!(Operator::Median.perform(&[11]).unwrap(), 11);
    }

    #[test]
    fn test_names_round_trip() {
        for operator in [
            Operator::Plus,
            Operator::Minus,
            Operator::Times,
            Operator::Divide,
            Operator::Less,
            Operator::Equal,
            Operator::List,
            Operator::Mean,
            Operator::Median,
            Operator::Identity,
        ] {
            assert_eq!(Operator::from_name(operator.name()), Some(operator));
        }
        assert_eq!(Operator::from_name("SUM"), None);
    }
}
