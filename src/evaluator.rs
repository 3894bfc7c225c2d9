use crate::config::Config;
use crate::core::PrimitiveFn;
use crate::environment::{Environment, UnknownSymbol};
use crate::types::{self, Atom, Expression, Node, Program, Value};

use itertools::Itertools;
use std::fmt;

pub type Result<T = Value> = std::result::Result<T, Error>;
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The head of an expression does not name a builtin. Holds the head as
    /// written.
    UnknownOperator(String),
    MissingOperator,
    BadArgCount(types::BadArgCount),
    DivideByZero,
    TypeMismatch(types::TypeMismatch),
    NestingTooDeep { limit: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownOperator(s) => write!(f, "'{}' is not a known operator", s),
            Error::MissingOperator => write!(f, "cannot apply an empty expression"),
            Error::BadArgCount(e) => write!(f, "{}", e),
            Error::DivideByZero => write!(f, "cannot divide by zero!"),
            Error::TypeMismatch(e) => write!(f, "type mismatch: {}", e),
            Error::NestingTooDeep { limit } => {
                write!(f, "expressions nested deeper than {} levels", limit)
            }
        }
    }
}

impl From<types::TypeMismatch> for Error {
    fn from(t: types::TypeMismatch) -> Self {
        Self::TypeMismatch(t)
    }
}

impl From<types::BadArgCount> for Error {
    fn from(e: types::BadArgCount) -> Self {
        Self::BadArgCount(e)
    }
}

pub(crate) struct Context {
    env: Environment,
    max_depth: usize,
}

impl Context {
    fn new(config: &Config) -> Self {
        Self {
            env: Environment::default(),
            max_depth: config.max_depth,
        }
    }
}

/// Evaluate every top-level node in order; the last value is the result.
/// An empty program evaluates to `Nil`.
pub fn interpret(program: &Program) -> Result {
    interpret_with(program, &Config::default())
}

/// Like [`interpret`], but nesting is bounded by `config.max_depth` rather
/// than the default. Programs built by hand are checked the same way as
/// programs from the reader.
pub fn interpret_with(program: &Program, config: &Config) -> Result {
    let ctx = Context::new(config);
    let mut result = Value::Nil;
    for node in program.iter() {
        result = EVAL(node, &ctx, 0)?;
        log::debug!("top-level node evaluated to {}", result);
    }
    Ok(result)
}

pub fn eval(node: &Node) -> Result {
    EVAL(node, &Context::new(&Config::default()), 0)
}

// `depth` counts the expressions enclosing `ast`.
#[allow(non_snake_case)]
pub(crate) fn EVAL(ast: &Node, ctx: &Context, depth: usize) -> Result {
    match ast {
        Node::Atom(atom) => Ok(Value::from(atom)),
        Node::Expression(_) if depth >= ctx.max_depth => Err(Error::NestingTooDeep {
            limit: ctx.max_depth,
        }),
        Node::Expression(expression) => apply(expression, ctx, depth + 1),
    }
}

fn apply(expression: &Expression, ctx: &Context, depth: usize) -> Result {
    let head = expression.head().ok_or(Error::MissingOperator)?;
    log::trace!("apply {} at depth {}", head, depth);
    // Arguments are evaluated before the head is looked at.
    let args = evaluate_sequence_elementwise(expression.arguments(), ctx, depth)?;
    let func = lookup_operator(head, &ctx.env)?;
    call_primitive(func, &args)
}

fn lookup_operator(head: &Node, env: &Environment) -> Result<&'static PrimitiveFn> {
    match head {
        Node::Atom(Atom::Symbol(symbol)) => env
            .fetch(symbol)
            .map_err(|UnknownSymbol(name)| Error::UnknownOperator(name)),
        other => Err(Error::UnknownOperator(other.to_string())),
    }
}

pub(crate) fn evaluate_sequence_elementwise(
    seq: &[Node],
    ctx: &Context,
    depth: usize,
) -> Result<Vec<Value>> {
    seq.iter().map(|node| EVAL(node, ctx, depth)).collect()
}

pub(crate) fn pretty_print_args(args: &[Value]) -> String {
    match args.len() {
        0 => "no args".into(),
        1 => args[0].to_string(),
        _ => format!("\n\t{}", args.iter().join("\n\t")),
    }
}

pub fn call_primitive(func: &PrimitiveFn, args: &[Value]) -> Result {
    func.arity.validate_for(args.len(), func.name())?;
    log::trace!("Call {} with {}", func.name(), pretty_print_args(args));
    let result = (func.fn_ptr)(args);
    match &result {
        Ok(val) => log::trace!("Call to {} resulted in {}", func.name(), val),
        Err(e) => log::trace!("Call to {} failed: {}", func.name(), e),
    }
    result
}
