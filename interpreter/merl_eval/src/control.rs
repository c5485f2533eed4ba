//! Control flow: closure dispatch, `if`, and `case`.

use merl_ir::{CondBranch, Expr, PatternBranch};
use merl_runtime::{Closure, Env, Error, Pid};

use crate::eval::{eval, partial_eval};
use crate::matcher::match_value;
use crate::operators::as_bool;
use crate::Value;

/// The continuation of a tail-replacing construct: the expression to feed
/// back into the evaluator loop, and the environment to do it in.
pub(crate) type TailStep = (Expr, Env);

/// Call a closure with evaluated arguments.
///
/// Branches are tried in order: each gets a fresh child of the captured
/// environment, the argument patterns are matched pairwise, and the
/// guards must all come out `true`. The branch body is handed back as a
/// tail step so calls do not consume host stack.
pub(crate) fn call(closure: &Closure, args: &[Value], pid: &Pid) -> Result<TailStep, Error> {
    for branch in &closure.def.branches {
        let env = closure.env.branch();
        if branch.params.len() != args.len() {
            continue;
        }
        if !match_params(&branch.params, args, &env, pid) {
            continue;
        }
        if eval_all_true(&branch.guards, &env, pid)? {
            return partial_eval(&branch.body, &env, pid);
        }
    }
    Err(Error::NoFunBranch)
}

/// Match argument patterns pairwise; any failure makes the branch fail.
fn match_params(params: &[Expr], args: &[Value], env: &Env, pid: &Pid) -> bool {
    params
        .iter()
        .zip(args)
        .all(|(param, arg)| match_value(param, arg, env, pid).is_ok())
}

/// Evaluate an `if` block.
pub(crate) fn eval_if(
    branches: &[CondBranch],
    env: &Env,
    pid: &Pid,
) -> Result<TailStep, Error> {
    for branch in branches {
        // literal booleans and placeholders are decided without evaluation
        if is_trueish(&branch.cond) {
            return partial_eval(&branch.body, env, pid);
        }
        if eval_is_true(&branch.cond, env, pid)? {
            return partial_eval(&branch.body, env, pid);
        }
    }
    Err(Error::NoTrueBranch)
}

/// Evaluate a `case` block: the scrutinee once, then the branches in
/// order, each under a fresh child environment so bindings do not leak
/// between branches.
pub(crate) fn eval_case(
    subject: &Expr,
    branches: &[PatternBranch],
    env: &Env,
    pid: &Pid,
) -> Result<TailStep, Error> {
    let value = eval(subject, env, pid)?;
    for branch in branches {
        let branch_env = env.branch();
        if match_value(&branch.pattern, &value, &branch_env, pid).is_err() {
            continue;
        }
        if eval_all_true(&branch.guards, &branch_env, pid)? {
            return partial_eval(&branch.body, &branch_env, pid);
        }
    }
    Err(Error::NoTrueBranch)
}

/// Is the expression true-ish without evaluation (a `true` literal or the
/// placeholder)?
fn is_trueish(expr: &Expr) -> bool {
    match expr {
        Expr::Dummy => true,
        Expr::Bool(b) => *b,
        _ => false,
    }
}

/// Evaluate guard expressions left to right, short-circuiting on the
/// first non-true. A non-boolean guard value is an error.
pub(crate) fn eval_all_true(exprs: &[Expr], env: &Env, pid: &Pid) -> Result<bool, Error> {
    for expr in exprs {
        if !eval_is_true(expr, env, pid)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Evaluate an expression and require a boolean.
fn eval_is_true(expr: &Expr, env: &Env, pid: &Pid) -> Result<bool, Error> {
    let value = eval(expr, env, pid)?;
    as_bool(&value)
}
