//! RPN CLI - command-line REPL for the calculator engine
//!
//! This is a thin wrapper around rpn-core: it maps typed words onto engine
//! inputs and prints what the display shows.

mod repl;

use clap::Parser;
use rpn_core::{Base, Interpreter};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rpn", version, about = "Interactive multi-base RPN calculator")]
struct Args {
    /// Starting number base (2, 8, 10, 16 or bin, oct, dec, hex)
    #[arg(short, long, env = "RPN_BASE", default_value = "10")]
    base: Base,

    /// Evaluate a line and exit instead of starting the REPL (repeatable)
    #[arg(short, long, value_name = "LINE")]
    eval: Vec<String>,

    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.eval.is_empty() {
        return repl::run_repl(args.base, !args.no_banner);
    }

    let mut interp = Interpreter::with_base(args.base);
    for line in &args.eval {
        interp.execute(line)?;
    }
    println!("{}", interp.engine.display());
    Ok(())
}
