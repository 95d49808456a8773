use std::io::{self, BufRead, Write};

use clap::{ArgAction, Parser};
use reckon::{Config, TrailingInput, evaluate_expression_with};
use tracing_subscriber::EnvFilter;

/// reckon evaluates arithmetic expressions over real numbers.
///
/// Without an expression argument it reads one expression per line from
/// standard input until end of input, `quit` or `exit`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Rejects input left over after a complete expression instead of
    /// ignoring it.
    #[arg(short, long)]
    strict: bool,

    /// Maximum nesting of groups and negations accepted by the parser; the
    /// evaluator derives its tree limit from it.
    #[arg(long, default_value_t = reckon::config::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Number of digits printed after the decimal point.
    #[arg(short, long, default_value_t = 6)]
    precision: usize,

    /// Increases log verbosity; repeat for more detail. `RUST_LOG` takes
    /// precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Expression to evaluate once.
    expression: Option<String>,
}

impl Args {
    fn config(&self) -> Config {
        let trailing_input = if self.strict {
            TrailingInput::Reject
        } else {
            TrailingInput::Ignore
        };
        Config::default().with_trailing_input(trailing_input)
                         .with_max_depth(self.max_depth)
    }
}

fn main() {
    let args = Args::parse();

    let default_directive = directive_for_verbosity(args.verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                      EnvFilter::new(default_directive)
                                                  });
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let config = args.config();

    if let Some(expression) = &args.expression {
        report(expression, &config, args.precision);
        return;
    }

    if let Err(e) = repl(&config, args.precision) {
        eprintln!("Failed to read from standard input: {e}");
    }
}

fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "reckon=warn",
        1 => "reckon=debug",
        _ => "reckon=trace",
    }
}

/// Reads and evaluates one expression per line until the user is done.
fn repl(config: &Config, precision: usize) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;
        let text = line.trim();

        match text {
            "" => {},
            "quit" | "exit" => return Ok(()),
            _ => report(text, config, precision),
        }
    }
}

/// Prints `<text> = <value>` on success, or the diagnostic on failure.
fn report(text: &str, config: &Config, precision: usize) {
    match evaluate_expression_with(text, config) {
        Ok(value) => println!("{text} = {value:.precision$}"),
        Err(e) => eprintln!("{e}"),
    }
}
