//! Precedence parsing of formula text.
//!
//! Operators are tried loosest first through [`OPERATORS`]; every
//! occurrence of the loosest operator present in a token run is folded
//! into a single n-ary node, so `3 + 20 + 12` parses as one addition
//! with three operands rather than nested pairs.

use super::ast::Expression;
use super::factory;
use super::token::{OPERATORS, Token, tokenize};
use crate::error::ParseError;

/// Parse formula text into an expression tree.
///
/// Empty (or all-whitespace) input is the empty expression.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(factory::empty());
    }
    let tokens = tokenize(input)?;
    parse_tokens(&tokens)
}

fn parse_tokens(tokens: &[Token]) -> Result<Expression, ParseError> {
    match tokens {
        [] => Err(ParseError::UnbalancedOperators),
        [Token::Constant(value)] => Ok(factory::constant(*value)),
        [Token::Reference(identifier)] => Ok(factory::reference(identifier.clone())),
        [Token::Function { name, contents }] => parse_function(name, contents),
        [Token::Op('-'), rest @ ..] => {
            // Unary minus is subtraction from the empty expression.
            let operand = parse_tokens(rest)?;
            Ok(factory::operator("-", vec![factory::empty(), operand])?)
        }
        _ => parse_operators(tokens),
    }
}

/// Parse a function token by re-parsing its raw contents: split on
/// top-level commas, parse each piece, and hand the argument list to the
/// factory under the function's name.
fn parse_function(name: &str, contents: &str) -> Result<Expression, ParseError> {
    let mut arguments = Vec::new();
    for piece in split_top_level(contents) {
        arguments.push(parse(piece)?);
    }
    Ok(factory::operator(name, arguments)?)
}

/// Split on commas not nested inside parentheses.
fn split_top_level(contents: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, c) in contents.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(&contents[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    pieces.push(&contents[start..]);
    pieces
}

/// Parse an operand/operator run. The run must alternate operand,
/// operator, operand, ... (odd length); it is split at every occurrence
/// of the loosest operator present at an operator position.
fn parse_operators(tokens: &[Token]) -> Result<Expression, ParseError> {
    if tokens.len() % 2 == 0 {
        return Err(ParseError::UnbalancedOperators);
    }
    for op in OPERATORS {
        let present = tokens
            .iter()
            .skip(1)
            .step_by(2)
            .any(|token| matches!(token, Token::Op(c) if *c == op));
        if !present {
            continue;
        }
        let mut arguments = Vec::new();
        for segment in tokens.split(|token| matches!(token, Token::Op(c) if *c == op)) {
            arguments.push(parse_tokens(segment)?);
        }
        return Ok(factory::operator(&op.to_string(), arguments)?);
    }
    Err(ParseError::UnbalancedOperators)
}
