//! Built-in functions and the root environment.

use std::io::Write;
use std::thread;
use std::time::Duration;

use merl_runtime::{Env, Error, EvalResult, Pid, Value};

use crate::concurrency;
use crate::eval::eval_file;

/// A fresh root environment with the built-ins bound.
pub fn root_env() -> Env {
    let env = Env::empty();
    for (name, native) in BUILTINS {
        env.insert(*name, Value::Native(*native, *name));
    }
    env
}

type Builtin = fn(&[Value], &Env, &Pid) -> EvalResult;

const BUILTINS: &[(&str, Builtin)] = &[
    ("error", error),
    ("exit", exit),
    ("include", include),
    ("is_atom", is_atom),
    ("is_bool", is_bool),
    ("is_int", is_int),
    ("is_list", is_list),
    ("is_str", is_str),
    ("is_tuple", is_tuple),
    ("last", last),
    ("len", len),
    ("nth", nth),
    ("print", print),
    ("rest", rest),
    ("rev", rev),
    ("self", self_),
    ("sleep", sleep),
    ("spawn", spawn),
    ("split", split),
    ("str", str_),
];

/// Single-argument extraction; anything else is `WrongNumberArgs`.
fn one_arg(args: &[Value]) -> Result<&Value, Error> {
    match args {
        [arg] => Ok(arg),
        _ => Err(Error::WrongNumberArgs),
    }
}

/// `print/1`: write the string representation to stdout without a
/// newline; returns the printed text as a string.
fn print(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    let arg = one_arg(args)?;
    let text = match arg {
        Value::Str(s) => s.to_string(),
        other => other.to_string(),
    };
    print!("{text}");
    let _ = std::io::stdout().flush();
    Ok(Value::string(text))
}

/// `str/1`: identity for strings, the printed form otherwise.
fn str_(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    let arg = one_arg(args)?;
    match arg {
        Value::Str(_) => Ok(arg.clone()),
        other => Ok(Value::string(other.to_string())),
    }
}

/// `split/1`: a string as a list of single-character strings.
fn split(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    match one_arg(args)? {
        Value::Str(s) => Ok(Value::list(
            s.chars().map(|c| Value::string(c.to_string())).collect(),
        )),
        other => Err(Error::not_string(other)),
    }
}

/// `len/1`: list length.
#[allow(clippy::cast_possible_wrap)]
fn len(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    match one_arg(args)? {
        Value::List(items) => Ok(Value::int(items.len() as i64)),
        other => Err(Error::not_list(other)),
    }
}

/// `last/1`: the last element of a list.
fn last(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    match one_arg(args)? {
        Value::List(items) => items.last().cloned().ok_or(Error::EmptyList),
        other => Err(Error::not_list(other)),
    }
}

/// `rest/1`: all elements but the last.
fn rest(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    match one_arg(args)? {
        Value::List(items) => match items.split_last() {
            None => Err(Error::EmptyList),
            Some((_, init)) => Ok(Value::list(init.to_vec())),
        },
        other => Err(Error::not_list(other)),
    }
}

/// `rev/1`: the list reversed.
fn rev(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    match one_arg(args)? {
        Value::List(items) => Ok(Value::list(items.iter().rev().cloned().collect())),
        other => Err(Error::not_list(other)),
    }
}

/// `nth/2`: 1-based indexing; out-of-range, zero, and negative indices
/// are invalid.
fn nth(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    let [list, index] = args else {
        return Err(Error::WrongNumberArgs);
    };
    let Value::List(items) = list else {
        return Err(Error::not_list(list));
    };
    let Value::Int(index) = index else {
        return Err(Error::not_number(index));
    };
    usize::try_from(*index)
        .ok()
        .filter(|i| *i >= 1)
        .and_then(|i| items.get(i - 1))
        .cloned()
        .ok_or_else(|| Error::custom("invalid index"))
}

fn is_atom(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    Ok(Value::Bool(matches!(one_arg(args)?, Value::Atom(_))))
}

fn is_bool(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    Ok(Value::Bool(matches!(one_arg(args)?, Value::Bool(_))))
}

fn is_int(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    Ok(Value::Bool(matches!(one_arg(args)?, Value::Int(_))))
}

fn is_list(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    Ok(Value::Bool(matches!(one_arg(args)?, Value::List(_))))
}

fn is_str(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    Ok(Value::Bool(matches!(one_arg(args)?, Value::Str(_))))
}

fn is_tuple(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    Ok(Value::Bool(matches!(one_arg(args)?, Value::Tuple(_))))
}

/// `self/0`: the current process id.
fn self_(args: &[Value], _env: &Env, pid: &Pid) -> EvalResult {
    if !args.is_empty() {
        return Err(Error::WrongNumberArgs);
    }
    Ok(Value::Pid(pid.clone()))
}

/// `sleep/1`: suspend the current process for the given milliseconds;
/// returns the argument.
fn sleep(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    match one_arg(args)? {
        Value::Int(ms) => {
            thread::sleep(Duration::from_millis(u64::try_from(*ms).unwrap_or(0)));
            Ok(Value::int(*ms))
        }
        other => Err(Error::not_number(other)),
    }
}

/// `spawn/1`: see [`concurrency::spawn`].
fn spawn(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    concurrency::spawn(one_arg(args)?)
}

/// `exit/1`: raise the `Exit` error with the argument as reason.
fn exit(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    Err(Error::Exit(one_arg(args)?.to_string()))
}

/// `error/1`: raise a custom error with the given message.
fn error(args: &[Value], _env: &Env, _pid: &Pid) -> EvalResult {
    match one_arg(args)? {
        Value::Str(message) => Err(Error::Custom(message.to_string())),
        other => Err(Error::not_string(other)),
    }
}

/// `include/1`: evaluate a source file into the caller's environment and
/// return the value of its last expression.
fn include(args: &[Value], env: &Env, pid: &Pid) -> EvalResult {
    match one_arg(args)? {
        Value::Str(path) => eval_file(path.as_str(), env, pid),
        other => Err(Error::not_string(other)),
    }
}
