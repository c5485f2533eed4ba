//! merlc - the merl interpreter CLI.
//!
//! With no arguments the binary starts a REPL; with arguments it
//! evaluates each file in order against one shared environment and exits
//! non-zero on the first error.

mod repl;
pub mod tracing_setup;

use merl_eval::{eval_file, root_env, Error, Pid};

pub use repl::repl;

/// Evaluate the given files in order against a fresh shared environment.
///
/// Returns the first error, if any.
pub fn run_files(paths: &[String]) -> Result<(), Error> {
    let env = root_env();
    let pid = Pid::new();

    let mut result = Ok(());
    for path in paths {
        if let Err(err) = eval_file(path, &env, &pid) {
            result = Err(err);
            break;
        }
    }

    pid.close();
    result
}
