// Classification of content tokens. Integer literals win over strings, strings
// over booleans, and anything left over is a symbol.

use crate::types::{Atom, Integer, Symbol};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    NotABoolean(String),
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexerError::NotABoolean(token) => write!(f, "'{}' is not a boolean literal", token),
        }
    }
}

/// True iff the token survives a round trip through `Integer`, so leading
/// zeros, a leading `+` and `-0` are all rejected.
pub fn is_integer_literal(token: &str) -> bool {
    integer_value(token).is_some()
}

fn integer_value(token: &str) -> Option<Integer> {
    token
        .parse::<Integer>()
        .ok()
        .filter(|n| n.to_string() == token)
}

pub fn is_string_literal(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('"') && token.ends_with('"')
}

pub fn is_boolean_literal(token: &str) -> bool {
    token == "true" || token == "false"
}

pub fn to_boolean(token: &str) -> Result<bool, LexerError> {
    match token {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(LexerError::NotABoolean(token.into())),
    }
}

pub fn to_atom(token: &str) -> Result<Atom, LexerError> {
    if let Some(n) = integer_value(token) {
        return Ok(Atom::Integer(n));
    }
    if is_string_literal(token) {
        return Ok(Atom::String(token[1..token.len() - 1].into()));
    }
    if is_boolean_literal(token) {
        return to_boolean(token).map(Atom::Boolean);
    }
    Ok(Atom::Symbol(Symbol::from(token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BuiltinOp;

    #[test]
    fn integers_round_trip() {
        for token in &["0", "7", "-12", "9223372036854775807", "-9223372036854775808"] {
            assert!(is_integer_literal(token), "{}", token);
        }
        for token in &["", "007", "+5", "-0", "1.5", "12a", "-", "9223372036854775808"] {
            assert!(!is_integer_literal(token), "{}", token);
        }
    }

    #[test]
    fn string_literals_need_both_quotes() {
        assert!(is_string_literal(r#""""#));
        assert!(is_string_literal(r#""a b""#));
        assert!(!is_string_literal(r#"""#));
        assert!(!is_string_literal(r#""abc"#));
        assert!(!is_string_literal("abc"));
    }

    #[test]
    fn booleans() {
        assert!(is_boolean_literal("true"));
        assert!(is_boolean_literal("false"));
        assert!(!is_boolean_literal("True"));
        assert_eq!(to_boolean("true"), Ok(true));
        assert_eq!(to_boolean("false"), Ok(false));
        assert_eq!(
            to_boolean("nope"),
            Err(LexerError::NotABoolean("nope".into()))
        );
    }

    #[test]
    fn atoms_by_precedence() {
        assert_eq!(to_atom("42"), Ok(Atom::Integer(42)));
        assert_eq!(to_atom("-3"), Ok(Atom::Integer(-3)));
        assert_eq!(to_atom(r#""42""#), Ok(Atom::String("42".into())));
        assert_eq!(to_atom(r#""true""#), Ok(Atom::String("true".into())));
        assert_eq!(to_atom("false"), Ok(Atom::Boolean(false)));
        assert_eq!(
            to_atom("+"),
            Ok(Atom::Symbol(Symbol::Builtin(BuiltinOp::Add)))
        );
        assert_eq!(
            to_atom("007"),
            Ok(Atom::Symbol(Symbol::User("007".into())))
        );
        assert_eq!(
            to_atom("Append"),
            Ok(Atom::Symbol(Symbol::User("Append".into())))
        );
    }

    #[test]
    fn every_rendered_integer_is_an_integer_atom() {
        let samples = (-1000..1000).chain(vec![i64::MAX, i64::MIN, i64::MAX / 3]);
        for n in samples {
            assert_eq!(to_atom(&n.to_string()), Ok(Atom::Integer(n)));
        }
    }
}
