//! nanoTorch CLI - Main Entry Point
//!
//! Smoke harness over the statically linked core library. It walks the same
//! surface the Python module exports and prints each result, so a successful
//! run doubles as a sanity check of the exported symbols.

use clap::{Parser, Subcommand};
use nanotorch_core::{add_ints, hello, version, Shape, Tensor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// nanoTorch - minimal PyTorch-style tensor library
#[derive(Parser)]
#[command(name = "nanotorch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Exercise the exported surface and print each result
    Smoke,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Smoke => smoke(),
    }
}

fn smoke() -> anyhow::Result<()> {
    tracing::info!("nanoTorch v{}", version());

    println!("nanotorch version: {}", version());
    println!("nanotorch hello(): {}", hello());
    println!("nanotorch add_ints(2,3): {}", add_ints(2, 3));

    let tensor = Tensor::zeros(Shape::new(vec![2, 3])?);
    tracing::debug!("constructed {} elements", tensor.numel());
    println!("nanotorch Tensor.zeros([2, 3]): {tensor}");

    Ok(())
}
