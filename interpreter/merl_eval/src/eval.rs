//! The evaluator: a tree walker over `(expression, environment)`.
//!
//! The outer loop realizes tail-call iteration: constructs whose result is
//! another expression (brackets, taken branches, receive continuations,
//! closure-call bodies) rebind `expr`/`env` and continue instead of
//! recursing, so deep self-recursion runs in constant host stack.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use merl_ir::{BinOp, Expr};
use merl_parse::Reader;
use merl_runtime::{Env, Error, EvalResult, Pid, Value};

use crate::control::{eval_case, eval_if};
use crate::matcher::match_exprs;
use crate::operators::apply_binary;
use crate::unary_operators::apply_unary;
use crate::{concurrency, control};

/// Evaluate an expression.
pub fn eval(expr: &Expr, env: &Env, pid: &Pid) -> EvalResult {
    let mut expr = expr.clone();
    let mut env = env.clone();
    loop {
        match expr {
            Expr::Var(name) => return env.get(&name),
            // the anonymous placeholder never reads
            Expr::Dummy => return Err(Error::Unbound("_".to_string())),
            // a bare atom may transparently resolve to a binding
            Expr::Atom(name) => {
                if let Ok(value) = env.get(&name) {
                    return Ok(value);
                }
                return Ok(Value::atom(name));
            }
            Expr::Int(n) => return Ok(Value::int(n)),
            Expr::Bool(b) => return Ok(Value::Bool(b)),
            Expr::Str(s) => return Ok(Value::string(s)),
            Expr::Tuple(items) => return Ok(Value::tuple(eval_all(&items, &env, pid)?)),
            Expr::List(items) => return Ok(Value::list(eval_all(&items, &env, pid)?)),
            Expr::Unary { op, rhs } => {
                let value = eval(&rhs, &env, pid)?;
                return apply_unary(op, &value);
            }
            // `=` dispatches into the matcher before either side is
            // evaluated as a whole
            Expr::Binary {
                op: BinOp::Match,
                lhs,
                rhs,
            } => {
                match_exprs(&lhs, &rhs, &env, pid)?;
                return Ok(Value::Bool(true));
            }
            Expr::Binary { op, lhs, rhs } => {
                let lhs = eval(&lhs, &env, pid)?;
                let rhs = eval(&rhs, &env, pid)?;
                return apply_binary(op, lhs, rhs);
            }
            Expr::Bracket(inner) => expr = *inner,
            Expr::If(branches) => {
                (expr, env) = eval_if(&branches, &env, pid)?;
            }
            Expr::Case { subject, branches } => {
                (expr, env) = eval_case(&subject, &branches, &env, pid)?;
            }
            Expr::TryRecover { body, recover } => {
                // the error is discarded; bindings made before it stay
                return match eval_block(&body, &env, pid) {
                    Ok(value) => Ok(value),
                    Err(_) => eval_block(&recover, &env, pid),
                };
            }
            Expr::Define(def) => {
                let closure = Value::closure(env.clone(), def.clone());
                if let Some(name) = &def.name {
                    if env.contains_local(name) {
                        return Err(Error::custom(format!("{name} already exists")));
                    }
                    env.insert(name.clone(), closure.clone());
                }
                return Ok(closure);
            }
            Expr::Call { callable, args } => {
                let args = eval_all(&args, &env, pid)?;
                let callee = eval(&callable, &env, pid)?;
                match callee {
                    Value::Closure(closure) => {
                        (expr, env) = control::call(&closure, &args, pid)?;
                    }
                    Value::Native(native, _) => return native(&args, &env, pid),
                    _ => return Err(Error::NotFunction(callable.to_string())),
                }
            }
            Expr::Receive { branches, after } => {
                (expr, env) = concurrency::receive(&branches, after.as_deref(), &env, pid)?;
            }
        }
    }
}

/// Evaluate a block of expressions, returning the value of the last one.
pub fn eval_block(exprs: &[Expr], env: &Env, pid: &Pid) -> EvalResult {
    let (last, env) = partial_eval(exprs, env, pid)?;
    eval(&last, &env, pid)
}

/// Evaluate a list of expressions left to right; the first error
/// short-circuits.
pub(crate) fn eval_all(exprs: &[Expr], env: &Env, pid: &Pid) -> Result<Vec<Value>, Error> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        values.push(eval(expr, env, pid)?);
    }
    Ok(values)
}

/// Evaluate all but the last expression for their effects and hand the
/// last one back for tail replacement.
///
/// An empty block (only possible for an empty source file) yields `ok`.
pub(crate) fn partial_eval(
    exprs: &[Expr],
    env: &Env,
    pid: &Pid,
) -> Result<(Expr, Env), Error> {
    match exprs.split_last() {
        None => Ok((Expr::Atom("ok".to_string()), env.clone())),
        Some((last, init)) => {
            for expr in init {
                eval(expr, env, pid)?;
            }
            Ok((last.clone(), env.clone()))
        }
    }
}

/// Parse the code string and evaluate it.
pub fn parse_eval(code: &str, env: &Env, pid: &Pid) -> EvalResult {
    let exprs = merl_parse::parse(code).map_err(|err| Error::custom(err.to_string()))?;
    eval_block(&exprs, env, pid)
}

/// Evaluate a file, one expression sequence at a time, into the given
/// environment. Returns the value of the last sequence (`ok` for an
/// empty file).
pub fn eval_file(path: impl AsRef<Path>, env: &Env, pid: &Pid) -> EvalResult {
    let file = File::open(path.as_ref()).map_err(|err| Error::custom(err.to_string()))?;
    let mut reader = Reader::new(BufReader::new(file));

    let mut result = Value::atom("ok");
    loop {
        let code = reader
            .next_sequence()
            .map_err(|err| Error::custom(err.to_string()))?;
        match code {
            None => return Ok(result),
            Some(code) => result = parse_eval(&code, env, pid)?,
        }
    }
}
