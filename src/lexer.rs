//! Token classification for postfix expressions.
//!
//! A token is a single whitespace-delimited word: either a decimal
//! integer operand or one of the four arithmetic operators. Anything
//! else is an invalid symbol.

use nom::{
    branch::alt,
    character::complete::{char, digit1},
    combinator::{all_consuming, opt, recognize, value},
    sequence::preceded,
    IResult,
};
use std::fmt;
use thiserror::Error;

/// An arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        };
        f.write_str(symbol)
    }
}

/// One classified token of a postfix expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A decimal integer operand.
    Operand(i32),
    /// One of `+ - * /`.
    Operator(Op),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("leading zero in integer literal `{0}`")]
    LeadingZero(String),
    #[error("integer literal `{0}` does not fit in 32 bits")]
    OutOfRange(String),
    #[error("invalid symbol `{0}`")]
    InvalidSymbol(String),
}

/// Recognizes an optional minus sign followed by one or more digits.
fn integer(input: &str) -> IResult<&str, &str> {
    recognize(preceded(opt(char('-')), digit1))(input)
}

/// Recognizes exactly one operator character.
fn operator(input: &str) -> IResult<&str, Op> {
    alt((
        value(Op::Add, char('+')),
        value(Op::Sub, char('-')),
        value(Op::Mul, char('*')),
        value(Op::Div, char('/')),
    ))(input)
}

impl Token {
    /// Classifies a single whitespace-free token.
    ///
    /// Integer spellings are tried first, so a bare `-` is the
    /// subtraction operator while `-5` is an operand. A digit sequence
    /// with an unnecessary leading zero (`012`, `-012`) is malformed,
    /// not an operand and not an invalid symbol.
    pub fn classify(raw: &str) -> Result<Token, LexError> {
        if all_consuming(integer)(raw).is_ok() {
            let digits = raw.strip_prefix('-').unwrap_or(raw);
            if digits.len() > 1 && digits.starts_with('0') {
                return Err(LexError::LeadingZero(raw.to_string()));
            }
            let parsed = raw
                .parse()
                .map_err(|_| LexError::OutOfRange(raw.to_string()))?;
            return Ok(Token::Operand(parsed));
        }
        match all_consuming(operator)(raw) {
            Ok((_, op)) => Ok(Token::Operator(op)),
            Err(_) => Err(LexError::InvalidSymbol(raw.to_string())),
        }
    }
}
