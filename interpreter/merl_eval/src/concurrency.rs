//! Concurrency primitives: `send`, `spawn`, and selective `receive`.

use std::thread;
use std::time::{Duration, Instant};

use merl_ir::{CondBranch, Expr, PatternBranch};
use merl_runtime::{Env, Error, EvalResult, Pid, Value};

use crate::control::{eval_all_true, TailStep};
use crate::eval::{eval, partial_eval};
use crate::matcher::match_value;

/// Send `msg` to the pid on the left of `!`. Never blocks; returns the
/// message.
pub(crate) fn send(to: &Value, msg: Value) -> EvalResult {
    match to {
        Value::Pid(pid) => {
            pid.send(msg.clone());
            Ok(msg)
        }
        other => Err(Error::custom(format!("{other} is not a pid"))),
    }
}

/// `spawn/1`: run a zero-argument closure in a new process.
///
/// The new process gets a fresh pid and shares the closure's captured
/// environment. Its mailbox closes when the invocation returns or errors;
/// nothing propagates back to the spawner, but an uncaught error is
/// logged by the host runtime.
pub(crate) fn spawn(arg: &Value) -> EvalResult {
    let Value::Closure(closure) = arg else {
        return Err(Error::NotFunction(arg.to_string()));
    };

    let pid = Pid::new();
    let closure = closure.clone();
    let child = pid.clone();
    thread::Builder::new()
        .name(format!("merl-{}", pid.id()))
        .spawn(move || {
            let result = match crate::control::call(&closure, &[], &child) {
                Ok((expr, env)) => eval(&expr, &env, &child),
                Err(err) => Err(err),
            };
            if let Err(err) = result {
                tracing::warn!("process {child} terminated: {err}");
            }
            child.close();
        })
        .map_err(|err| Error::custom(err.to_string()))?;

    Ok(Value::Pid(pid))
}

/// Run a `receive` block.
///
/// The timeout expression is evaluated once up front into a deadline
/// (`infinity` or a missing `after` branch waits forever). Each incoming
/// message is tried against the branches in order under a fresh child
/// environment; a message no branch accepts is consumed and discarded,
/// and the wait resumes.
pub(crate) fn receive(
    branches: &[PatternBranch],
    after: Option<&CondBranch>,
    env: &Env,
    pid: &Pid,
) -> Result<TailStep, Error> {
    // (after body, deadline); `None` waits forever
    let timeout: Option<(&[Expr], Instant)> = match after {
        None => None,
        Some(branch) => match eval(&branch.cond, env, pid)? {
            Value::Int(ms) => {
                let ms = u64::try_from(ms).unwrap_or(0);
                Some((&branch.body, Instant::now() + Duration::from_millis(ms)))
            }
            Value::Atom(name) if name.as_str() == "infinity" => None,
            other => return Err(Error::not_number(&other)),
        },
    };

    loop {
        let msg = match timeout {
            Some((after_body, deadline)) => match pid.recv_deadline(deadline) {
                Some(msg) => msg,
                None => return partial_eval(after_body, env, pid),
            },
            None => match pid.recv() {
                Some(msg) => msg,
                // the channel cannot disconnect while this handle lives
                None => continue,
            },
        };

        for branch in branches {
            let branch_env = env.branch();
            if match_value(&branch.pattern, &msg, &branch_env, pid).is_err() {
                continue;
            }
            // a guard error fails the branch, like a failed match
            if let Ok(true) = eval_all_true(&branch.guards, &branch_env, pid) {
                return partial_eval(&branch.body, &branch_env, pid);
            }
        }
        // no branch accepted the message: drop it and keep waiting
    }
}
