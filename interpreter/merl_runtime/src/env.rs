//! Environments: lexically scoped name-to-value bindings with
//! single-assignment semantics.
//!
//! An environment is a chain of frames. Lookup walks from the innermost
//! frame outward; `try_set` writes only into the innermost frame and a
//! rebinding must be structurally equal to the existing value. Frames are
//! shared (a closure keeps its definition chain alive), so the handle is a
//! reference-counted lock around the frame.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

use merl_ir::Expr;

use crate::error::{Error, EvalResult};
use crate::value::Value;

/// A shared handle to one frame of an environment chain.
///
/// Cloning the handle shares the frame. `Arc` + `RwLock` because closures
/// carry their chain across `spawn` thread boundaries; within one process
/// access is effectively single-threaded.
#[derive(Clone)]
pub struct Env {
    frame: Arc<RwLock<Frame>>,
}

struct Frame {
    bindings: FxHashMap<String, Value>,
    parent: Option<Env>,
}

impl Env {
    /// Create an empty root environment.
    pub fn empty() -> Self {
        Env {
            frame: Arc::new(RwLock::new(Frame {
                bindings: FxHashMap::default(),
                parent: None,
            })),
        }
    }

    /// Create a child environment with this one as the parent.
    #[must_use]
    pub fn branch(&self) -> Self {
        Env {
            frame: Arc::new(RwLock::new(Frame {
                bindings: FxHashMap::default(),
                parent: Some(self.clone()),
            })),
        }
    }

    /// Look a name up, walking the chain outward.
    pub fn get(&self, name: &str) -> EvalResult {
        let mut current = self.clone();
        loop {
            let parent = {
                let frame = current.frame.read();
                if let Some(value) = frame.bindings.get(name) {
                    return Ok(value.clone());
                }
                frame.parent.clone()
            };
            match parent {
                Some(parent) => current = parent,
                None => return Err(Error::Unbound(name.to_string())),
            }
        }
    }

    /// Try to bind a name in the innermost frame.
    ///
    /// If the name is already bound there, the existing value must be
    /// structurally equal to the proposed one; a mismatch is `NoMatch`.
    pub fn try_set(&self, name: &str, value: Value) -> Result<(), Error> {
        let mut frame = self.frame.write();
        if let Some(prev) = frame.bindings.get(name) {
            if *prev != value {
                return Err(Error::no_match(name, &value));
            }
            return Ok(());
        }
        frame.bindings.insert(name.to_string(), value);
        Ok(())
    }

    /// Insert a binding unconditionally (built-ins, named definitions).
    pub fn insert(&self, name: impl Into<String>, value: Value) {
        self.frame.write().bindings.insert(name.into(), value);
    }

    /// Is the name bound in the innermost frame (parents not consulted)?
    pub fn contains_local(&self, name: &str) -> bool {
        self.frame.read().bindings.contains_key(name)
    }

    /// Do two handles refer to the same frame?
    pub fn ptr_eq(a: &Env, b: &Env) -> bool {
        Arc::ptr_eq(&a.frame, &b.frame)
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = self.frame.read();
        write!(
            f,
            "Env({} bindings{})",
            frame.bindings.len(),
            if frame.parent.is_some() {
                ", has parent"
            } else {
                ""
            }
        )
    }
}

/// Extract the environment key from an expression.
///
/// Variables and atoms are accepted interchangeably (a bare atom may
/// transparently resolve to a binding, which is what lets built-in names
/// act as callables). Anything else is not a valid name.
pub fn name_of(expr: &Expr) -> Result<&str, Error> {
    match expr {
        Expr::Var(name) | Expr::Atom(name) => Ok(name),
        other => Err(Error::NotName(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn set_and_get_across_frames() {
        let parent = Env::empty();

        assert_eq!(
            parent.get("X"),
            Err(Error::Unbound("X".to_string()))
        );

        parent.try_set("X", Value::int(1)).unwrap();
        assert_eq!(parent.get("X"), Ok(Value::int(1)));
        parent.try_set("Y", Value::int(2)).unwrap();
        assert_eq!(parent.get("Y"), Ok(Value::int(2)));

        let child = parent.branch();

        // shadowing in the child frame
        child.try_set("Y", Value::int(3)).unwrap();
        assert_eq!(child.get("Y"), Ok(Value::int(3)));
        assert_eq!(parent.get("Y"), Ok(Value::int(2)));

        child.try_set("Z", Value::int(4)).unwrap();
        assert_eq!(child.get("Z"), Ok(Value::int(4)));

        // the child sees the parent's bindings
        assert_eq!(child.get("X"), Ok(Value::int(1)));

        // the parent does not see the child's
        assert_eq!(
            parent.get("Z"),
            Err(Error::Unbound("Z".to_string()))
        );
    }

    #[test]
    fn rebinding_requires_structural_equality() {
        let env = Env::empty();
        env.try_set("X", Value::int(1)).unwrap();
        // re-asserting the same value is fine
        env.try_set("X", Value::int(1)).unwrap();
        // a different value is not
        assert_eq!(
            env.try_set("X", Value::int(2)),
            Err(Error::no_match("X", Value::int(2)))
        );
        assert_eq!(env.get("X"), Ok(Value::int(1)));
    }

    #[test]
    fn names_are_variables_or_atoms() {
        assert_eq!(name_of(&Expr::Var("X".into())).unwrap(), "X");
        assert_eq!(name_of(&Expr::Atom("foo".into())).unwrap(), "foo");
        assert_eq!(
            name_of(&Expr::Int(1)),
            Err(Error::NotName("1".to_string()))
        );
    }

    #[test]
    fn closures_share_frames() {
        let env = Env::empty();
        let handle = env.clone();
        env.try_set("X", Value::int(7)).unwrap();
        // a binding made after the handle was taken is visible through it
        assert_eq!(handle.get("X"), Ok(Value::int(7)));
        assert!(Env::ptr_eq(&env, &handle));
        assert!(!Env::ptr_eq(&env, &env.branch()));
    }
}
