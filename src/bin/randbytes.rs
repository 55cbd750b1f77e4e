use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use seeded_random::{OsEntropy, RandomConfig, SecureRandom};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(name = "randbytes")]
#[command(about = "Print secure random bytes from the operating system", long_about = None)]
#[command(version)]
struct Args {
    /// Number of bytes to generate
    #[arg(short = 'n', long, env = "RANDBYTES_LEN", default_value = "32")]
    len: usize,

    /// Write raw bytes instead of hex
    #[arg(long)]
    raw: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = RandomConfig::from_env().unwrap_or_else(|e| {
        error!("Failed to load configuration: {e}");
        info!("Using default configuration");
        RandomConfig::default()
    });

    let generator = match SecureRandom::from_config(OsEntropy::new(), &config) {
        Ok(generator) => generator,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let bytes = match generator.random_vec(args.len) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    let written = if args.raw {
        stdout.write_all(&bytes)
    } else {
        writeln!(stdout, "{}", hex::encode(&bytes))
    };

    match written.and_then(|()| stdout.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}
