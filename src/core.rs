use crate::evaluator;
use crate::types::{Arity, BadArgCount, BuiltinOp, Integer, Value};
use std::collections::HashMap;

pub struct PrimitiveFn {
    pub op: BuiltinOp,
    pub arity: Arity,
    pub fn_ptr: fn(&[Value]) -> evaluator::Result,
}

impl PrimitiveFn {
    pub fn name(&self) -> &'static str {
        self.op.as_str()
    }
}

impl std::fmt::Debug for PrimitiveFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "primitive function #<{}>", self.name())
    }
}

// The evaluator checks arity before calling, so this only guards direct calls.
fn wrong_arity(func: &PrimitiveFn, got: usize) -> evaluator::Error {
    evaluator::Error::BadArgCount(BadArgCount {
        name: func.name(),
        expected: func.arity.clone(),
        got,
    })
}

fn grab_ints(args: &[Value]) -> evaluator::Result<Vec<Integer>> {
    let type_check: Result<Vec<_>, _> = args.iter().map(Value::as_int).collect();
    type_check.map_err(evaluator::Error::TypeMismatch)
}

const SUM: PrimitiveFn = PrimitiveFn {
    op: BuiltinOp::Add,
    fn_ptr: sum_,
    arity: Arity::at_least(0),
};

fn sum_(args: &[Value]) -> evaluator::Result {
    let value = grab_ints(args)?
        .iter()
        .fold(0 as Integer, |acc, &x| acc.wrapping_add(x));
    Ok(Value::Integer(value))
}

const SUB: PrimitiveFn = PrimitiveFn {
    op: BuiltinOp::Sub,
    fn_ptr: sub_,
    arity: Arity::exactly(2),
};

fn sub_(args: &[Value]) -> evaluator::Result {
    match grab_ints(args)?.as_slice() {
        [x, y] => Ok(Value::Integer(x.wrapping_sub(*y))),
        other => Err(wrong_arity(&SUB, other.len())),
    }
}

const MUL: PrimitiveFn = PrimitiveFn {
    op: BuiltinOp::Mul,
    fn_ptr: mul_,
    arity: Arity::at_least(0),
};

fn mul_(args: &[Value]) -> evaluator::Result {
    let value = grab_ints(args)?
        .iter()
        .fold(1 as Integer, |acc, &x| acc.wrapping_mul(x));
    Ok(Value::Integer(value))
}

const DIV: PrimitiveFn = PrimitiveFn {
    op: BuiltinOp::Div,
    fn_ptr: div_,
    arity: Arity::exactly(2),
};

fn div_(args: &[Value]) -> evaluator::Result {
    match grab_ints(args)?.as_slice() {
        [_, 0] => Err(evaluator::Error::DivideByZero),
        [x, y] => Ok(Value::Integer(x.wrapping_div(*y))),
        other => Err(wrong_arity(&DIV, other.len())),
    }
}

static PRIMITIVES: [PrimitiveFn; 4] = [SUM, SUB, MUL, DIV];

type Namespace = HashMap<BuiltinOp, &'static PrimitiveFn>;
lazy_static! {
    pub static ref CORE: Namespace = {
        let mut map = Namespace::new();
        for func in PRIMITIVES.iter() {
            map.insert(func.op, func);
        }
        map
    };
}
