//! Skiff CLI - run a WASI binary under the Skiff host.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use skiff_core::prelude::*;
use skiff_wasi::run;

/// Minimal WASI preview1 runner
#[derive(Parser)]
#[command(name = "skiff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the WASM binary image
    image: PathBuf,

    /// Arguments passed to the guest program
    #[arg(trailing_var_arg = true)]
    args: Vec<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    // A missing image path must exit 1, not clap's default usage-error code;
    // --help and --version still exit cleanly.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("skiff={}", log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match execute(cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> anyhow::Result<i32> {
    let engine = SkiffEngine::default_engine()
        .context("Failed to create engine")?
        .into_shared();

    let loader = ModuleLoader::new(engine.clone());
    let module = loader
        .load_file(&cli.image)
        .context("Failed to load image")?;

    tracing::info!(
        image = %cli.image.display(),
        args = cli.args.len(),
        "Executing image"
    );

    run::run(&engine, &module, cli.args).context("Execution failed")
}
