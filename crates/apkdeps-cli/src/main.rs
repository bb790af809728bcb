use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use apkdeps::output::{describe_parameters, render_report, root_note, write_report};
use apkdeps::{ApkdepsOptions, SettingsOverrides, load_settings, run_main};
use apkdeps_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "apkdeps",
    about = "apkdeps: dependency graphs for Alpine packages",
    version
)]
pub struct Cli {
    /// Settings file (defaults to pr2.toml in the current directory)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: SettingsOverrides,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let settings = load_settings(args.config.as_deref())?;
    let opts = ApkdepsOptions::from_settings(settings, args.overrides)?;
    eprint!("{}", describe_parameters(&opts));

    let report = run_main(&opts)?;
    if let Some(note) = root_note(&opts, &report.summary.root) {
        eprintln!("{note}");
    }

    print!("{}", render_report(&report));
    write_report(&report, &opts)?;

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> ExitCode {
    let args = Cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            ExitCode::FAILURE
        }
    }
}
