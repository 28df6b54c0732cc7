use std::{path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use extract::config::Config;

/// Export data from Redis to JSON
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Redis DB [default: 1]
    #[arg(short, long)]
    db: Option<i64>,

    /// Redis host [default: localhost]
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// JSON output file [default: users.<unix time>.json]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Redis port [default: 6379]
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.host, args.port, args.db, args.output);

    let start = Instant::now();
    let users = extract::run(&config)
        .await
        .with_context(|| format!("Export to {} failed", config.output.display()))?;

    println!(
        "Extracted data for {users} users in {:.4} seconds.",
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
