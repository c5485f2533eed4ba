//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the operator set is fixed, so pattern
//! matching is preferred over trait objects for exhaustiveness checking.
//! Both operands arrive fully evaluated; `and`/`or` do not short-circuit.

use merl_ir::BinOp;
use merl_runtime::{Error, EvalResult, Value};

use crate::concurrency::send;

/// Apply a binary operation to two evaluated operands.
pub fn apply_binary(op: BinOp, lhs: Value, rhs: Value) -> EvalResult {
    match op {
        BinOp::And => {
            let (a, b) = both_bools(&lhs, &rhs)?;
            Ok(Value::Bool(a && b))
        }
        BinOp::Or => {
            let (a, b) = both_bools(&lhs, &rhs)?;
            Ok(Value::Bool(a || b))
        }
        BinOp::Add => {
            let (a, b) = both_ints(&lhs, &rhs)?;
            Ok(Value::int(a.wrapping_add(b)))
        }
        BinOp::Sub => {
            let (a, b) = both_ints(&lhs, &rhs)?;
            Ok(Value::int(a.wrapping_sub(b)))
        }
        BinOp::Mul => {
            let (a, b) = both_ints(&lhs, &rhs)?;
            Ok(Value::int(a.wrapping_mul(b)))
        }
        BinOp::Div => {
            let (a, b) = both_ints(&lhs, &rhs)?;
            if b == 0 {
                return Err(Error::DivisionByZero);
            }
            Ok(Value::int(a.wrapping_div(b)))
        }
        BinOp::Rem => {
            let (a, b) = both_ints(&lhs, &rhs)?;
            if b == 0 {
                return Err(Error::DivisionByZero);
            }
            Ok(Value::int(a.wrapping_rem(b)))
        }
        BinOp::Lt => {
            let (a, b) = both_ints(&lhs, &rhs)?;
            Ok(Value::Bool(a < b))
        }
        BinOp::LtEq => {
            let (a, b) = both_ints(&lhs, &rhs)?;
            Ok(Value::Bool(a <= b))
        }
        BinOp::Gt => {
            let (a, b) = both_ints(&lhs, &rhs)?;
            Ok(Value::Bool(a > b))
        }
        BinOp::GtEq => {
            let (a, b) = both_ints(&lhs, &rhs)?;
            Ok(Value::Bool(a >= b))
        }
        BinOp::Eq => Ok(Value::Bool(lhs == rhs)),
        BinOp::NotEq => Ok(Value::Bool(lhs != rhs)),
        BinOp::Append => match lhs {
            Value::List(items) => Ok(list_append(&items, rhs)),
            Value::Str(s) => string_append(&s, &rhs),
            other => Err(Error::custom(format!("unexpected value: {other}"))),
        },
        BinOp::Send => send(&lhs, rhs),
        // `=` is intercepted by the evaluator before operand evaluation
        BinOp::Match => unreachable!("match dispatches into the matcher"),
    }
}

/// Concatenate two lists, or append a non-list element to a list.
fn list_append(items: &[Value], rhs: Value) -> Value {
    let mut result = items.to_vec();
    match rhs {
        Value::List(more) => result.extend(more.iter().cloned()),
        other => result.push(other),
    }
    Value::list(result)
}

/// Concatenate two strings.
fn string_append(lhs: &str, rhs: &Value) -> EvalResult {
    match rhs {
        Value::Str(rhs) => Ok(Value::string(format!("{lhs}{}", &**rhs))),
        other => Err(Error::not_string(other)),
    }
}

fn both_ints(lhs: &Value, rhs: &Value) -> Result<(i64, i64), Error> {
    Ok((as_int(lhs)?, as_int(rhs)?))
}

fn as_int(value: &Value) -> Result<i64, Error> {
    match value {
        Value::Int(n) => Ok(*n),
        other => Err(Error::not_number(other)),
    }
}

fn both_bools(lhs: &Value, rhs: &Value) -> Result<(bool, bool), Error> {
    Ok((as_bool(lhs)?, as_bool(rhs)?))
}

pub(crate) fn as_bool(value: &Value) -> Result<bool, Error> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(Error::not_boolean(other)),
    }
}
