//! Source text in, tokens, syntax trees or values out. Every failure from
//! any stage is reported through [`Error`].

use crate::config::Config;
use crate::lexer::LexerError;
use crate::tokens::{self, Token, TokenizerError};
use crate::types::{Program, Value};
use crate::{evaluator, reader};
use std::fmt;

pub type Result<T = Value> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Read(reader::Error),
    Eval(evaluator::Error),
}

/// Coarse classification of an [`Error`], for callers that only care which
/// kind of failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnclosedString,
    MalformedExpression,
    NestingTooDeep,
    Arity,
    UnknownOperator,
    DivisionByZero,
    TypeMismatch,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use crate::reader::Error as R;
        match self {
            Error::Read(R::Tokenizer(TokenizerError::UnclosedString { .. })) => {
                ErrorKind::UnclosedString
            }
            Error::Read(R::Lexer(LexerError::NotABoolean(_))) => ErrorKind::Internal,
            Error::Read(R::UnclosedExpression { .. }) => ErrorKind::MalformedExpression,
            Error::Read(R::UnexpectedCloseParen { .. }) => ErrorKind::MalformedExpression,
            Error::Read(R::NestingTooDeep { .. }) => ErrorKind::NestingTooDeep,
            Error::Eval(evaluator::Error::BadArgCount(_)) => ErrorKind::Arity,
            Error::Eval(evaluator::Error::UnknownOperator(_))
            | Error::Eval(evaluator::Error::MissingOperator) => ErrorKind::UnknownOperator,
            Error::Eval(evaluator::Error::DivideByZero) => ErrorKind::DivisionByZero,
            Error::Eval(evaluator::Error::TypeMismatch(_)) => ErrorKind::TypeMismatch,
            Error::Eval(evaluator::Error::NestingTooDeep { .. }) => ErrorKind::NestingTooDeep,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read(e) => write!(f, "read error: {}", e),
            Error::Eval(e) => write!(f, "eval error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<reader::Error> for Error {
    fn from(e: reader::Error) -> Self {
        Error::Read(e)
    }
}

impl From<TokenizerError> for Error {
    fn from(e: TokenizerError) -> Self {
        Error::Read(reader::Error::Tokenizer(e))
    }
}

impl From<evaluator::Error> for Error {
    fn from(e: evaluator::Error) -> Self {
        Error::Eval(e)
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Ok(tokens::tokenize(source)?)
}

pub fn parse(source: &str) -> Result<Program> {
    parse_with(source, &Config::default())
}

pub fn parse_with(source: &str, config: &Config) -> Result<Program> {
    Ok(reader::parse_with(source, config)?)
}

pub fn interpret(source: &str) -> Result {
    interpret_with(source, &Config::default())
}

pub fn interpret_with(source: &str, config: &Config) -> Result {
    let program = parse_with(source, config)?;
    let value = evaluator::interpret_with(&program, config)?;
    log::debug!("interpreted {:?} to {}", source, value);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_each_stage() {
        let kind = |source: &str| interpret(source).unwrap_err().kind();
        assert_eq!(kind("\"abc"), ErrorKind::UnclosedString);
        assert_eq!(kind("(+ 1"), ErrorKind::MalformedExpression);
        assert_eq!(kind("1)"), ErrorKind::MalformedExpression);
        assert_eq!(kind("(- 1)"), ErrorKind::Arity);
        assert_eq!(kind("(and true false)"), ErrorKind::UnknownOperator);
        assert_eq!(kind("()"), ErrorKind::UnknownOperator);
        assert_eq!(kind("(/ 4 (- 2 2))"), ErrorKind::DivisionByZero);
        assert_eq!(kind("(* \"2\" 3)"), ErrorKind::TypeMismatch);
        assert_eq!(
            interpret_with("((1))", &Config::with_max_depth(1))
                .unwrap_err()
                .kind(),
            ErrorKind::NestingTooDeep
        );
    }

    #[test]
    fn errors_display_their_stage() {
        assert_eq!(
            interpret("(/ 1 0)").unwrap_err().to_string(),
            "eval error: cannot divide by zero!"
        );
        assert_eq!(
            tokenize("\"abc").unwrap_err().to_string(),
            "read error: tokenizer failed: unclosed string literal starting at character 0"
        );
    }
}
