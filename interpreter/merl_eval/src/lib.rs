//! merl eval - the tree-walking evaluator for merl.
//!
//! # Architecture
//!
//! - [`eval`]: the `(expression, environment)` loop with tail replacement
//! - [`matcher`]: bidirectional unification behind `=`, `case`,
//!   `receive`, and closure dispatch
//! - `operators` / `unary_operators`: direct enum-based operator dispatch
//! - `control`: closure calls, `if`, `case`
//! - `concurrency`: `spawn`, `send`, selective `receive` with timeout
//! - [`builtins`]: the root environment
//!
//! Value and error types are re-exported from `merl_runtime` for
//! convenience.

mod builtins;
mod concurrency;
mod control;
mod eval;
mod matcher;
mod operators;
mod unary_operators;

pub use builtins::root_env;
pub use eval::{eval, eval_block, eval_file, parse_eval};
pub use matcher::{match_exprs, match_value};
pub use operators::apply_binary;
pub use unary_operators::apply_unary;

// Re-export the runtime types every embedder needs
pub use merl_runtime::{Closure, Env, Error, EvalResult, Heap, NativeFn, Pid, Value};
