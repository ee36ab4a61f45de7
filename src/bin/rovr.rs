//! rovr - reports redundant profile configuration overrides.
//!
//! Walks a directory tree and, in every folder with an `application.yaml`,
//! reports keys of `application-*.yaml` files that repeat the base value.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use redundant_overrides::check::{Checker, Options, DEFAULT_VALUE_WIDTH};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(
    name = "rovr",
    version,
    about = "Find duplicated key values between base application.yaml and profile-specific application-*.yaml files."
)]
struct Cli {
    /// Root folder to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Maximum width of a rendered duplicate value
    #[arg(long, default_value_t = DEFAULT_VALUE_WIDTH)]
    value_width: usize,

    /// Emit debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let checker = Checker::new(Options::default().with_value_width(cli.value_width));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = checker.execute(&cli.root, &mut out);
    let _ = out.flush();
    ExitCode::from(code)
}
