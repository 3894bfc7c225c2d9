/// Limits applied while reading source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Deepest parenthesis nesting the reader accepts. Recursive descent
    /// uses one stack frame per level, so untrusted input must be bounded.
    pub max_depth: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 256;

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}
