use std::{fs, io, process};

use clap::Parser;
use sprig::{interpreter::evaluator::core::Settings, run_with_settings};

/// sprig runs small imperative scripts, starting at their `main()` function.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sprig to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Logs resolution and execution details to stderr. `RUST_LOG` selects
    /// the filter when set.
    #[arg(short, long)]
    verbose: bool,

    /// Function calls nested deeper than this fail with an error.
    #[arg(long, default_value_t = Settings::default().max_call_depth)]
    max_call_depth: usize,

    contents: String,
}

fn main() {
    let args = Args::parse();

    if args.verbose || std::env::var("RUST_LOG").is_ok() {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::EnvFilter::from_default_env()
        } else {
            tracing_subscriber::EnvFilter::new("sprig=debug")
        };
        tracing_subscriber::fmt().with_env_filter(filter)
                                 .with_writer(io::stderr)
                                 .init();
    }

    let (script, module) = if args.file {
        let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                                                          eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                                    &args.contents);
                                                          process::exit(1);
                                                      });
        (script, args.contents)
    } else {
        (args.contents, "main".to_string())
    };

    let settings = Settings { max_call_depth: args.max_call_depth };
    if let Err(e) = run_with_settings(&script, &module, io::stdout().lock(), settings) {
        eprintln!("{e}");
        process::exit(1);
    }
}
