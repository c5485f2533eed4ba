//! Bidirectional unification of patterns against expressions and values.
//!
//! `match_exprs` backs the `=` operator: either side may bind, so each
//! side is tried as the key in turn. `match_value` backs the positions
//! where the subject is already evaluated: `case` scrutinees, `receive`
//! messages, and closure arguments.

use merl_ir::Expr;
use merl_runtime::{Env, Error, Pid, Value};

use crate::eval::eval;

/// The `=` operation: unify `lhs` with `rhs`, binding unbound variables
/// on either side.
///
/// Two-pass direction: first treat `lhs` as the key (for `Var = expr`),
/// then `rhs` (for `expr = Var`). Whatever is not a placeholder, a
/// variable, or a container is evaluated exactly once along the way.
pub fn match_exprs(lhs: &Expr, rhs: &Expr, env: &Env, pid: &Pid) -> Result<(), Error> {
    // first pass: lhs as the key
    match lhs {
        Expr::Dummy => return Ok(()),
        Expr::Var(name) => {
            if matches!(rhs, Expr::Dummy) {
                return Ok(());
            }
            let value = eval(rhs, env, pid)?;
            return env.try_set(name, value);
        }
        _ => {}
    }
    let lhs_val = match lhs {
        Expr::List(_) | Expr::Tuple(_) => None,
        _ => Some(eval(lhs, env, pid)?),
    };

    // second pass: rhs as the key
    match rhs {
        Expr::Dummy => return Ok(()),
        Expr::Var(name) => {
            let value = match lhs_val {
                Some(value) => value,
                None => eval(lhs, env, pid)?,
            };
            return env.try_set(name, value);
        }
        _ => {}
    }
    let rhs_val = match rhs {
        Expr::List(_) | Expr::Tuple(_) => None,
        _ => Some(eval(rhs, env, pid)?),
    };

    // tie-break
    match (lhs_val, rhs_val) {
        // both sides are containers: recurse pairwise if the kinds agree
        (None, None) => match (lhs, rhs) {
            (Expr::List(l), Expr::List(r)) | (Expr::Tuple(l), Expr::Tuple(r)) => {
                if l.len() != r.len() {
                    return Err(Error::no_match(lhs, rhs));
                }
                for (a, b) in l.iter().zip(r) {
                    match_exprs(a, b, env, pid)?;
                }
                Ok(())
            }
            _ => Err(Error::no_match(lhs, rhs)),
        },
        // a container pattern against an evaluated value
        (None, Some(value)) => match_value(lhs, &value, env, pid),
        (Some(value), None) => match_value(rhs, &value, env, pid),
        // both sides are plain values: direct equality
        (Some(a), Some(b)) => {
            if a == b {
                Ok(())
            } else {
                Err(Error::no_match(a, b))
            }
        }
    }
}

/// Unify a pattern against an already-evaluated value, binding the
/// pattern's variables.
pub fn match_value(pattern: &Expr, value: &Value, env: &Env, pid: &Pid) -> Result<(), Error> {
    match pattern {
        Expr::Dummy => Ok(()),
        Expr::Var(name) => env.try_set(name, value.clone()),
        Expr::Tuple(patterns) => match value {
            Value::Tuple(values) => match_values(patterns, values, pattern, value, env, pid),
            _ => Err(Error::no_match(pattern, value)),
        },
        Expr::List(patterns) => match value {
            Value::List(values) => match_values(patterns, values, pattern, value, env, pid),
            _ => Err(Error::no_match(pattern, value)),
        },
        _ => {
            let evaluated = eval(pattern, env, pid)?;
            if evaluated == *value {
                Ok(())
            } else {
                Err(Error::no_match(evaluated, value))
            }
        }
    }
}

fn match_values(
    patterns: &[Expr],
    values: &[Value],
    pattern: &Expr,
    value: &Value,
    env: &Env,
    pid: &Pid,
) -> Result<(), Error> {
    if patterns.len() != values.len() {
        return Err(Error::no_match(pattern, value));
    }
    for (p, v) in patterns.iter().zip(values) {
        match_value(p, v, env, pid)?;
    }
    Ok(())
}
