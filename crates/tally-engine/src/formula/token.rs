//! Tokenizing of formula text.
//!
//! Only the top layer of the input is tokenized: a parenthesized group
//! becomes a single function token holding its raw interior, which the
//! parser re-tokenizes in its own pass.

use crate::error::ParseError;

/// Operator characters, loosest-binding first.
pub const OPERATORS: [char; 7] = [',', '=', '<', '+', '-', '*', '/'];

/// A token of formula text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A single operator character from [`OPERATORS`].
    Op(char),
    /// An integer literal.
    Constant(i64),
    /// A bare identifier.
    Reference(String),
    /// A parenthesized group: the name before the `(` (possibly empty)
    /// and the raw, untokenized text between the matching parentheses.
    Function { name: String, contents: String },
}

/// Split formula text into a flat token sequence.
///
/// Whitespace is dropped everywhere and never terminates a token.
/// Operator characters at nesting depth zero always stand alone, so
/// adjacent operators and a leading operator each produce their own
/// token. Unbalanced parentheses are an error.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut atom = String::new();
    let mut contents = String::new();
    let mut depth = 0usize;

    for c in input.chars() {
        match c {
            '(' => {
                depth += 1;
                if depth > 1 {
                    contents.push(c);
                }
            }
            ')' => {
                if depth == 0 {
                    return Err(ParseError::UnmatchedClose(input.to_string()));
                }
                depth -= 1;
                if depth == 0 {
                    tokens.push(Token::Function {
                        name: std::mem::take(&mut atom),
                        contents: std::mem::take(&mut contents),
                    });
                } else {
                    contents.push(c);
                }
            }
            _ if c.is_whitespace() => {}
            _ if depth > 0 => contents.push(c),
            _ if OPERATORS.contains(&c) => {
                flush_atom(&mut atom, &mut tokens);
                tokens.push(Token::Op(c));
            }
            _ => atom.push(c),
        }
    }

    if depth != 0 {
        return Err(ParseError::UnmatchedOpen(input.to_string()));
    }
    flush_atom(&mut atom, &mut tokens);
    Ok(tokens)
}

/// Classify and emit the buffered atom, if any. Anything that reads as
/// an `i64` is a constant; everything else is a reference.
fn flush_atom(atom: &mut String, tokens: &mut Vec<Token>) {
    if atom.is_empty() {
        return;
    }
    let text = std::mem::take(atom);
    match text.parse::<i64>() {
        Ok(value) => tokens.push(Token::Constant(value)),
        Err(_) => tokens.push(Token::Reference(text)),
    }
}
