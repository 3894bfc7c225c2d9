use crate::core::{self, PrimitiveFn};
use crate::types::Symbol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSymbol(pub String);

/// Read-only view of the builtin operators. There are no user bindings, so
/// every environment shares the same process-wide table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment;

impl Environment {
    pub fn get(&self, key: &Symbol) -> Option<&'static PrimitiveFn> {
        match key {
            Symbol::Builtin(op) => core::CORE.get(op).copied(),
            Symbol::User(_) => None,
        }
    }

    pub fn fetch(&self, key: &Symbol) -> Result<&'static PrimitiveFn, UnknownSymbol> {
        self.get(key)
            .ok_or_else(|| UnknownSymbol(key.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BuiltinOp;

    #[test]
    fn builtins_resolve() {
        let env = Environment::default();
        let div = env.fetch(&Symbol::from("/")).unwrap();
        assert_eq!(div.op, BuiltinOp::Div);
        assert_eq!(div.name(), "/");
    }

    #[test]
    fn user_symbols_do_not() {
        let env = Environment::default();
        assert_eq!(
            env.fetch(&Symbol::from("append")).unwrap_err(),
            UnknownSymbol("append".into())
        );
    }
}
