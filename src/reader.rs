use crate::config::Config;
use crate::lexer::{self, LexerError};
use crate::tokens::{tokenize, Token, TokenizerError};
use crate::types::{Expression, Node, Program};
use std::fmt;

pub type Result<T = Program> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Tokenizer(TokenizerError),
    Lexer(LexerError),
    /// The `(` at `open_index` has no matching `)`.
    UnclosedExpression { open_index: usize },
    UnexpectedCloseParen { index: usize },
    NestingTooDeep { limit: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Tokenizer(e) => write!(f, "{}", e),
            Error::Lexer(e) => write!(f, "lexer failed: {}", e),
            Error::UnclosedExpression { open_index } => write!(
                f,
                "malformed expression: '(' at token {} is never closed",
                open_index
            ),
            Error::UnexpectedCloseParen { index } => {
                write!(f, "malformed expression: unmatched ')' at token {}", index)
            }
            Error::NestingTooDeep { limit } => {
                write!(f, "expressions nested deeper than {} levels", limit)
            }
        }
    }
}

impl From<TokenizerError> for Error {
    fn from(e: TokenizerError) -> Self {
        Error::Tokenizer(e)
    }
}

impl From<LexerError> for Error {
    fn from(e: LexerError) -> Self {
        Error::Lexer(e)
    }
}

pub fn parse(input: &str) -> Result {
    parse_with(input, &Config::default())
}

pub fn parse_with(input: &str, config: &Config) -> Result {
    let tokens = tokenize(input)?;
    Reader::new(&tokens, config).parse_program()
}

// Recursive descent over a token slice. Nothing is consumed: each parse_*
// method takes the index to start at and returns the index of the last token
// it used.
struct Reader<'t, 'a> {
    tokens: &'t [Token<'a>],
    max_depth: usize,
}

impl<'t, 'a> Reader<'t, 'a> {
    fn new(tokens: &'t [Token<'a>], config: &Config) -> Self {
        Self {
            tokens,
            max_depth: config.max_depth,
        }
    }

    fn parse_program(&self) -> Result {
        let mut program = Program::new();
        let mut i = 0;
        while i < self.tokens.len() {
            let (node, last) = self.parse_symbolic_expression(i, 0)?;
            log::trace!("top-level node {} from tokens {}..={}", node, i, last);
            program.push(node);
            i = last + 1;
        }
        log::debug!("parsed {} top-level nodes", program.len());
        Ok(program)
    }

    fn parse_symbolic_expression(&self, i: usize, depth: usize) -> Result<(Node, usize)> {
        match self.tokens.get(i) {
            Some(&"(") => self
                .parse_expression(i, depth + 1)
                .map(|(expression, last)| (Node::Expression(expression), last)),
            Some(&")") => Err(Error::UnexpectedCloseParen { index: i }),
            _ => self.parse_atom(i).map(|node| (node, i)),
        }
    }

    fn parse_expression(&self, open_index: usize, depth: usize) -> Result<(Expression, usize)> {
        if depth > self.max_depth {
            return Err(Error::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        let mut expression = Expression::new();
        let mut i = open_index + 1;
        loop {
            match self.tokens.get(i) {
                Some(&")") => return Ok((expression, i)),
                Some(_) => {
                    let (node, last) = self.parse_symbolic_expression(i, depth)?;
                    expression.push(node);
                    i = last + 1;
                }
                None => return Err(Error::UnclosedExpression { open_index }),
            }
        }
    }

    fn parse_atom(&self, i: usize) -> Result<Node> {
        let token = self
            .tokens
            .get(i)
            .ok_or(Error::UnclosedExpression { open_index: i })?;
        Ok(Node::Atom(lexer::to_atom(token)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Atom;

    fn int(n: i64) -> Node {
        Atom::Integer(n).into()
    }

    fn sym(name: &str) -> Node {
        Atom::symbol(name).into()
    }

    fn expr(nodes: Vec<Node>) -> Node {
        Expression(nodes).into()
    }

    #[test]
    fn nested_expression() {
        assert_eq!(
            parse("(+ 1 (+ 2 3))").unwrap(),
            Program(vec![expr(vec![
                sym("+"),
                int(1),
                expr(vec![sym("+"), int(2), int(3)])
            ])])
        );
    }

    #[test]
    fn unknown_operator_still_parses() {
        assert_eq!(
            parse("(and true false)").unwrap(),
            Program(vec![expr(vec![
                sym("and"),
                Atom::Boolean(true).into(),
                Atom::Boolean(false).into()
            ])])
        );
    }

    #[test]
    fn strings_lose_their_quotes() {
        assert_eq!(
            parse(r#"(append "hello world" " michael!")"#).unwrap(),
            Program(vec![expr(vec![
                sym("append"),
                Atom::String("hello world".into()).into(),
                Atom::String(" michael!".into()).into()
            ])])
        );
    }

    #[test]
    fn empty_program() {
        assert_eq!(parse("").unwrap(), Program::new());
        assert_eq!(parse("  ").unwrap(), Program::new());
    }

    #[test]
    fn bare_atoms_and_several_top_level_nodes() {
        assert_eq!(
            parse("1 (- 3 2) x").unwrap(),
            Program(vec![int(1), expr(vec![sym("-"), int(3), int(2)]), sym("x")])
        );
    }

    #[test]
    fn empty_expressions() {
        assert_eq!(
            parse("(())").unwrap(),
            Program(vec![expr(vec![expr(vec![])])])
        );
    }

    #[test]
    fn unclosed_expression() {
        assert_eq!(
            parse("(+ 1 (+ 2 3)"),
            Err(Error::UnclosedExpression { open_index: 0 })
        );
        assert_eq!(
            parse("(+ 1 (+ 2 3"),
            Err(Error::UnclosedExpression { open_index: 3 })
        );
        assert_eq!(parse("("), Err(Error::UnclosedExpression { open_index: 0 }));
    }

    #[test]
    fn unmatched_close_paren() {
        assert_eq!(parse(")"), Err(Error::UnexpectedCloseParen { index: 0 }));
        assert_eq!(
            parse("(+ 1 2))"),
            Err(Error::UnexpectedCloseParen { index: 5 })
        );
    }

    #[test]
    fn tokenizer_errors_surface() {
        assert_eq!(
            parse(r#"(append "abc)"#),
            Err(Error::Tokenizer(TokenizerError::UnclosedString { position: 8 }))
        );
    }

    #[test]
    fn nesting_limit() {
        let config = Config::with_max_depth(3);
        assert!(parse_with("(((1)))", &config).is_ok());
        assert_eq!(
            parse_with("((((1))))", &config),
            Err(Error::NestingTooDeep { limit: 3 })
        );
    }

    #[test]
    fn deep_input_fails_instead_of_overflowing() {
        let depth = 100_000;
        let source = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(
            parse(&source),
            Err(Error::NestingTooDeep {
                limit: crate::config::DEFAULT_MAX_DEPTH
            })
        );
    }
}
