//! Unary operator implementations for the evaluator.

use merl_ir::UnaryOp;
use merl_runtime::{Error, EvalResult, Value};

/// Apply a unary operation to an evaluated operand.
pub fn apply_unary(op: UnaryOp, value: &Value) -> EvalResult {
    match (op, value) {
        (UnaryOp::Plus, Value::Int(n)) => Ok(Value::int(*n)),
        (UnaryOp::Minus, Value::Int(n)) => Ok(Value::int(n.wrapping_neg())),
        (UnaryOp::Plus | UnaryOp::Minus, other) => Err(Error::not_number(other)),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Not, other) => Err(Error::not_boolean(other)),
    }
}
