//! merl runtime - values, environments, processes, and errors.
//!
//! The leaf layer under the evaluator: the tagged [`Value`] sum with its
//! structural equality and printed forms, the single-assignment [`Env`]
//! chain, the [`Pid`] mailbox handle, and the flat [`Error`] taxonomy the
//! evaluator surfaces.

mod env;
mod error;
mod heap;
mod pid;
mod value;

pub use env::{name_of, Env};
pub use error::{Error, EvalResult};
pub use heap::Heap;
pub use pid::Pid;
pub use value::{Closure, NativeFn, Value};
