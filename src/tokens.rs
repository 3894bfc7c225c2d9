use std::fmt;
use std::iter;

/// A token is a slice of the source text. Classification into literals and
/// symbols happens later, in the lexer.
pub type Token<'a> = &'a str;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    /// `position` is the character index of the opening quote.
    UnclosedString { position: usize },
}

impl fmt::Display for TokenizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizerError::UnclosedString { position } => write!(
                f,
                "tokenizer failed: unclosed string literal starting at character {}",
                position
            ),
        }
    }
}

// One character of input, or the synthetic marker after the last one.
enum Scanned {
    Char { position: usize, offset: usize, c: char },
    End { offset: usize },
}

#[derive(Clone, Copy)]
enum ScanState {
    Normal,
    InString { start: usize, position: usize },
}

struct Scanner<'a> {
    input: &'a str,
    tokens: Vec<Token<'a>>,
    // Byte offset where the current unterminated token began
    pending: Option<usize>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: Vec::new(),
            pending: None,
        }
    }

    fn flush(&mut self, end: usize) {
        if let Some(start) = self.pending.take() {
            self.emit(start, end);
        }
    }

    fn emit(&mut self, start: usize, end: usize) {
        let token = &self.input[start..end];
        log::trace!("token {:?}", token);
        self.tokens.push(token);
    }

    fn step(&mut self, state: ScanState, item: Scanned) -> Result<ScanState, TokenizerError> {
        use ScanState::*;
        match (state, item) {
            (Normal, Scanned::End { offset }) => {
                self.flush(offset);
                Ok(Normal)
            }
            (Normal, Scanned::Char { offset, c, .. }) if c.is_whitespace() => {
                self.flush(offset);
                Ok(Normal)
            }
            (Normal, Scanned::Char { offset, c: '(', .. })
            | (Normal, Scanned::Char { offset, c: ')', .. }) => {
                self.flush(offset);
                self.emit(offset, offset + 1);
                Ok(Normal)
            }
            (Normal, Scanned::Char { position, offset, c: '"' }) => {
                // The opening quote joins whatever is already accumulated.
                let start = self.pending.take().unwrap_or(offset);
                Ok(InString { start, position })
            }
            (Normal, Scanned::Char { offset, .. }) => {
                self.pending.get_or_insert(offset);
                Ok(Normal)
            }
            (InString { start, .. }, Scanned::Char { offset, c: '"', .. }) => {
                self.emit(start, offset + 1);
                Ok(Normal)
            }
            (InString { position, .. }, Scanned::Char { c: '\n', .. })
            | (InString { position, .. }, Scanned::End { .. }) => {
                Err(TokenizerError::UnclosedString { position })
            }
            (in_string, Scanned::Char { .. }) => Ok(in_string),
        }
    }
}

/// Split `input` into parentheses, quoted string literals (quotes included)
/// and whitespace-delimited content tokens.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizerError> {
    let characters = input
        .char_indices()
        .enumerate()
        .map(|(position, (offset, c))| Scanned::Char { position, offset, c })
        .chain(iter::once(Scanned::End {
            offset: input.len(),
        }));

    let mut scanner = Scanner::new(input);
    let mut state = ScanState::Normal;
    for item in characters {
        state = scanner.step(state, item)?;
    }
    log::debug!("tokenized {} tokens", scanner.tokens.len());
    Ok(scanner.tokens)
}
