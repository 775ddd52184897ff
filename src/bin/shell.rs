//! ColumnKV Shell Binary
//!
//! Runs shell commands against a fresh in-memory database.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use columnkv::config::PrefixScan;
use columnkv::shell::Session;
use columnkv::{Config, Database};
use tracing_subscriber::{fmt, EnvFilter};

/// ColumnKV Shell
#[derive(Parser, Debug)]
#[command(name = "columnkv-shell")]
#[command(about = "Scriptable shell over an in-memory column family store")]
#[command(version)]
struct Args {
    /// Script to run (reads stdin when omitted)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Database name used in log events
    #[arg(short, long, default_value = "columnkv")]
    name: String,

    /// Scan past keys outside the prefix instead of stopping at the first one
    #[arg(long)]
    exhaustive_scan: bool,
}

fn main() {
    // Logs go to stderr so responses on stdout stay clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,columnkv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("ColumnKV Shell v{}", columnkv::VERSION);

    let prefix_scan = if args.exhaustive_scan {
        PrefixScan::Exhaustive
    } else {
        PrefixScan::Bounded
    };

    let config = Config::builder()
        .name(&args.name)
        .prefix_scan(prefix_scan)
        .build();

    let database = match Database::open(config) {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    let mut session = Session::new(database);
    let stdout = io::stdout();

    let result = match &args.script {
        Some(path) => match File::open(path) {
            Ok(file) => session.run_script(BufReader::new(file), stdout.lock()),
            Err(e) => {
                tracing::error!("Failed to open script {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => session.run_script(io::stdin().lock(), stdout.lock()),
    };

    match result {
        Ok(executed) => tracing::info!("Executed {} commands", executed),
        Err(e) => {
            tracing::error!("Shell error: {}", e);
            std::process::exit(1);
        }
    }
}
