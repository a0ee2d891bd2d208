use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod etext;

use config::Config;
use error::EtextError;

#[derive(Parser)]
#[command(name = "ungutenberg")]
#[command(about = "Convert a Project Gutenberg etext to learnable text, one paragraph per line")]
#[command(version)]
struct Cli {
    /// Project Gutenberg etext to extract
    #[arg(value_name = "TEXT_FILE")]
    text_file: Option<PathBuf>,

    /// Fail when the START or END marker is missing instead of reading to the edge of the file
    #[arg(long)]
    strict: bool,

    /// TOML file overriding the marker prefixes
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<EtextError>() {
            Some(e) if matches!(e, EtextError::Usage { .. }) => {
                eprintln!("{}", e);
                e.exit_code()
            }
            Some(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                e.exit_code()
            }
            None => {
                eprintln!("{} {:#}", "error:".red().bold(), err);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = cli.text_file.ok_or_else(|| EtextError::Usage {
        program: env!("CARGO_PKG_NAME").to_string(),
    })?;

    let config = Config::load_or_default(cli.config.as_deref())?;
    let markers = config.markers();
    let policy = config.policy(cli.strict);

    let lines = etext::extract_file(&path, &markers, policy)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match etext::emit::write_lines(&mut out, &lines) {
        Ok(()) => Ok(()),
        // Downstream closed the pipe (e.g. `| head`); nothing left to report
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(EtextError::Output(e).into()),
    }
}
