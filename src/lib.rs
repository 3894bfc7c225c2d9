pub mod cmdline;
pub mod config;
pub mod core;
pub mod environment;
pub mod evaluator;
pub mod interpreter;
pub mod lexer;
pub mod printer;
pub mod reader;
pub mod tokens;
pub mod types;

#[macro_use]
extern crate lazy_static;

pub use config::Config;
pub use interpreter::{interpret, parse, tokenize, Error, ErrorKind};
pub use types::{Atom, BuiltinOp, Expression, Node, Program, Symbol, Value};
