extern crate derive_more;
use derive_more::{Deref, DerefMut};
use std::fmt;
use std::fmt::Formatter;
use std::ops::{RangeFrom, RangeInclusive};

pub type Integer = i64;

/// The closed set of operators the evaluator can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BuiltinOp {
    pub fn from_symbol(name: &str) -> Option<Self> {
        match name {
            "+" => Some(BuiltinOp::Add),
            "-" => Some(BuiltinOp::Sub),
            "*" => Some(BuiltinOp::Mul),
            "/" => Some(BuiltinOp::Div),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuiltinOp::Add => "+",
            BuiltinOp::Sub => "-",
            BuiltinOp::Mul => "*",
            BuiltinOp::Div => "/",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Builtin(BuiltinOp),
    User(String),
}

impl Symbol {
    pub fn as_str(&self) -> &str {
        match self {
            Symbol::Builtin(op) => op.as_str(),
            Symbol::User(name) => name,
        }
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        match BuiltinOp::from_symbol(name) {
            Some(op) => Symbol::Builtin(op),
            None => Symbol::User(name.into()),
        }
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A leaf of the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    Integer(Integer),
    String(String),
    Boolean(bool),
    Symbol(Symbol),
}

impl Atom {
    pub fn symbol(name: &str) -> Self {
        Atom::Symbol(Symbol::from(name))
    }
}

/// A symbolic expression: either an atom or a parenthesised expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Atom(Atom),
    Expression(Expression),
}

/// `(head arg1 ... argN)`
#[derive(Deref, DerefMut, Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression(pub Vec<Node>);

impl Expression {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn head(&self) -> Option<&Node> {
        self.0.first()
    }

    pub fn arguments(&self) -> &[Node] {
        self.0.get(1..).unwrap_or(&[])
    }
}

/// The top-level nodes parsed from one source text, in source order.
#[derive(Deref, DerefMut, Debug, Clone, Default, PartialEq, Eq)]
pub struct Program(pub Vec<Node>);

impl Program {
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl From<Atom> for Node {
    fn from(atom: Atom) -> Self {
        Node::Atom(atom)
    }
}

impl From<Expression> for Node {
    fn from(expression: Expression) -> Self {
        Node::Expression(expression)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Nil,
    Integer(Integer),
    String(String),
    Boolean(bool),
    Symbol(Symbol),
}

impl From<&Atom> for Value {
    fn from(atom: &Atom) -> Self {
        match atom {
            Atom::Integer(n) => Value::Integer(*n),
            Atom::String(s) => Value::String(s.clone()),
            Atom::Boolean(b) => Value::Boolean(*b),
            Atom::Symbol(s) => Value::Symbol(s.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMismatch {
    NotAnInt(Value),
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TypeMismatch::NotAnInt(value) => write!(f, "expected an integer, got {}", value),
        }
    }
}

impl Value {
    pub(crate) fn as_int(&self) -> Result<Integer, TypeMismatch> {
        match self {
            Value::Integer(x) => Ok(*x),
            _ => Err(TypeMismatch::NotAnInt(self.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arity {
    Between(RangeInclusive<usize>),
    AtLeast(RangeFrom<usize>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadArgCount {
    pub name: &'static str,
    pub expected: Arity,
    pub got: usize,
}

impl fmt::Display for BadArgCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "When evaluating {} expected {} arguments, but received {} arguments",
            self.name, self.expected, self.got
        )
    }
}

impl Arity {
    pub(crate) const fn exactly(n: usize) -> Self {
        Self::Between(n..=n)
    }

    pub(crate) const fn at_least(n: usize) -> Self {
        Self::AtLeast(n..)
    }

    pub(crate) fn contains(&self, n: usize) -> bool {
        match self {
            Self::Between(range) => range.contains(&n),
            Self::AtLeast(range) => range.contains(&n),
        }
    }

    pub(crate) fn validate_for(&self, n: usize, name: &'static str) -> Result<(), BadArgCount> {
        match self.contains(n) {
            true => Ok(()),
            false => Err(BadArgCount {
                name,
                expected: self.clone(),
                got: n,
            }),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Between(r) => write!(f, "exactly {}", r.start()),
            Arity::AtLeast(r) => write!(f, "at least {}", r.start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_symbols_are_interned() {
        assert_eq!(Symbol::from("*"), Symbol::Builtin(BuiltinOp::Mul));
        assert_eq!(Symbol::from("and"), Symbol::User("and".into()));
        assert_eq!(Symbol::from("/").as_str(), "/");
        assert_eq!(Symbol::from("and").as_str(), "and");
    }

    #[test]
    fn expression_head_and_arguments() {
        let empty = Expression::new();
        assert_eq!(empty.head(), None);
        assert!(empty.arguments().is_empty());

        let call = Expression(vec![
            Atom::symbol("+").into(),
            Atom::Integer(1).into(),
            Atom::Integer(2).into(),
        ]);
        assert_eq!(call.head(), Some(&Node::Atom(Atom::symbol("+"))));
        assert_eq!(call.arguments().len(), 2);
    }

    #[test]
    fn arity_validation() {
        assert!(Arity::exactly(2).validate_for(2, "-").is_ok());
        let err = Arity::exactly(2).validate_for(3, "-").unwrap_err();
        assert_eq!(err.got, 3);
        assert_eq!(
            err.to_string(),
            "When evaluating - expected exactly 2 arguments, but received 3 arguments"
        );
        assert!(Arity::at_least(0).validate_for(0, "+").is_ok());
    }
}
