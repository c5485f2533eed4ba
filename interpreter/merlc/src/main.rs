//! merl CLI entry point.

fn main() {
    merlc::tracing_setup::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        merlc::repl();
        return;
    }

    match args[0].as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("merl {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {}
    }

    if let Err(err) = merlc::run_files(&args) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("merl - an Erlang-flavored expression language");
    println!();
    println!("Usage:");
    println!("  merl              start the REPL");
    println!("  merl <file>...    evaluate source files in order");
    println!();
    println!("Environment:");
    println!("  MERL_LOG          log filter (RUST_LOG syntax), default: warn");
}
