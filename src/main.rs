use std::{
    fs,
    io::{self, BufRead, Write},
    time::Instant,
};

use clap::Parser;
use funcalc::{
    Config, DivisionPolicy, Session,
    config::{DEFAULT_MAX_CALL_DEPTH, DEFAULT_MAX_NESTING_DEPTH},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// funcalc evaluates a small expression language with first-class functions.
///
/// Statements end with `.`, for example `f = fun(a, b) -> a * b end. f(6, 7).`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells funcalc to treat the contents as a path to a script file.
    #[arg(short, long)]
    file: bool,

    /// Make division by zero an error instead of producing infinity or NaN.
    #[arg(long)]
    strict_division: bool,

    /// Maximum expression nesting accepted by the parser.
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    max_nesting_depth: usize,

    /// Maximum number of simultaneously active function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Script to evaluate. Starts an interactive session when omitted.
    contents: Option<String>,
}

impl Args {
    fn config(&self) -> Config {
        let division = if self.strict_division {
            DivisionPolicy::Strict
        } else {
            DivisionPolicy::Ieee
        };

        Config::default().with_max_nesting_depth(self.max_nesting_depth)
                         .with_max_call_depth(self.max_call_depth)
                         .with_division(division)
    }
}

/// Installs a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();

    let args = Args::parse();
    let mut session = Session::with_config(args.config());

    let Some(contents) = args.contents else {
        repl(&mut session);
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                         std::process::exit(1);
                                     })
    } else {
        contents
    };

    match session.run(&script) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Reads one request per line until `exit` or end of input.
fn repl(session: &mut Session) {
    println!("funcalc {}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let line = line.trim();

        if line == "exit" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let start = Instant::now();
        match session.run(line) {
            Ok(value) => {
                println!("result: {value} ({:.6} sec)", start.elapsed().as_secs_f64());
            },
            Err(e) => println!("error: {e}"),
        }
    }
}
