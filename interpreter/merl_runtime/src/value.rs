//! Runtime values for the merl interpreter.
//!
//! A value is exactly one of the tags below. Heap variants go through the
//! [`Heap`] wrapper so cloning a value is always cheap, and construction
//! goes through the factory methods.

use std::fmt;

use merl_ir::Definition;

use crate::env::Env;
use crate::error::EvalResult;
use crate::heap::Heap;
use crate::pid::Pid;

/// Signature of a built-in callable.
///
/// Built-ins receive the evaluated argument list, the caller's environment
/// (only `include` uses it), and the caller's process id.
pub type NativeFn = fn(&[Value], &Env, &Pid) -> EvalResult;

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    /// Signed integer.
    Int(i64),
    /// Boolean.
    Bool(bool),
    /// Atom: interned symbolic name, equal only to same-named atoms.
    Atom(Heap<String>),
    /// String.
    Str(Heap<String>),
    /// Tuple: fixed arity, heterogeneous.
    Tuple(Heap<Vec<Value>>),
    /// List: heterogeneous.
    List(Heap<Vec<Value>>),
    /// Process identifier.
    Pid(Pid),
    /// Function value capturing its definition environment.
    Closure(Closure),
    /// Built-in callable, distinct from closures. The second field is the
    /// built-in's name.
    Native(NativeFn, &'static str),
}

/// A function value: the definition plus the environment it closed over.
///
/// The environment is captured by sharing, so bindings added to an
/// enclosing frame after the definition are visible on later calls.
#[derive(Clone, Debug)]
pub struct Closure {
    pub env: Env,
    pub def: Heap<Definition>,
}

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn atom(name: impl Into<String>) -> Self {
        Value::Atom(Heap::new(name.into()))
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    #[inline]
    pub fn closure(env: Env, def: Definition) -> Self {
        Value::Closure(Closure {
            env,
            def: Heap::new(def),
        })
    }
}

/// Structural deep equality.
///
/// Tags must match; contents compare component-wise. Atoms equal only
/// same-named atoms, booleans never equal integers, pids are compared by
/// mailbox identity, closures by captured-environment identity plus
/// definition equality, and built-ins by name.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Atom(a), Value::Atom(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) | (Value::List(a), Value::List(b)) => a == b,
            (Value::Pid(a), Value::Pid(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => {
                Env::ptr_eq(&a.env, &b.env) && a.def == b.def
            }
            (Value::Native(_, a), Value::Native(_, b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Atom(name) => write!(f, "{name}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Tuple(items) => {
                write!(f, "{{")?;
                write_csv(f, items)?;
                write!(f, "}}")
            }
            Value::List(items) => {
                write!(f, "[")?;
                write_csv(f, items)?;
                write!(f, "]")
            }
            Value::Pid(pid) => write!(f, "{pid}"),
            Value::Closure(closure) => write!(f, "{}", closure.def),
            Value::Native(_, name) => write!(f, "<builtin {name}>"),
        }
    }
}

fn write_csv(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
