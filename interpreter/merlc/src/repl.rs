//! The interactive read-eval-print loop.

use std::io::{self, Write};

use merl_eval::{parse_eval, root_env, Pid};
use merl_parse::Reader;

/// Run the REPL against a persistent environment and process id until
/// the input ends.
pub fn repl() {
    let env = root_env();
    let pid = Pid::new();
    let mut reader = Reader::new(io::stdin().lock());

    println!("Press ^C to exit.");
    println!();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        match reader.next_sequence() {
            Ok(None) => break,
            Ok(Some(code)) => match parse_eval(&code, &env, &pid) {
                Ok(value) => println!("{value}"),
                Err(err) => println!("ERROR: {err}"),
            },
            Err(err) => {
                println!("ERROR: {err}");
                break;
            }
        }
    }

    pid.close();
}
