use crate::types::{Atom, Expression, Node, Program, Symbol, Value};
use itertools::Itertools;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// Strings are quoted so the output reads back as the same atom.
    ReadableRepresentation,
    Directly,
}

// The reader takes everything between the quotes verbatim, so quoting is
// all a readable string needs.
fn print_string(s: &str, mode: PrintMode) -> String {
    match mode {
        PrintMode::ReadableRepresentation => format!("\"{}\"", s),
        PrintMode::Directly => s.to_string(),
    }
}

pub fn pr_str(value: &Value, mode: PrintMode) -> String {
    match value {
        Value::Nil => String::from("nil"),
        Value::Integer(n) => n.to_string(),
        Value::String(s) => print_string(s, mode),
        Value::Boolean(b) => b.to_string(),
        Value::Symbol(s) => s.as_str().to_string(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", pr_str(self, PrintMode::ReadableRepresentation))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Integer(n) => write!(f, "{}", n),
            Atom::String(s) => write!(f, "\"{}\"", s),
            Atom::Boolean(b) => write!(f, "{}", b),
            Atom::Symbol(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Atom(atom) => write!(f, "{}", atom),
            Node::Expression(expression) => write!(f, "{}", expression),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.iter().join(" "))
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}
