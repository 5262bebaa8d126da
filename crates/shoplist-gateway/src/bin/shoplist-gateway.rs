//! Shoplist Gateway Binary
//!
//! Serves a shared shopping list over HTTP.
//!
//! # Usage
//! ```bash
//! shoplist-gateway [--port 8000] [--host 127.0.0.1] [--data-file shopping_list.json] [--verbose]
//! ```

use clap::Parser;
use shoplist_gateway::{Gateway, GatewayConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shoplist Gateway - shared shopping list server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file; flags below override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Port to listen on (default: 8000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (default: 127.0.0.1)
    #[arg(long)]
    host: Option<String>,

    /// Shopping list file (default: shopping_list.json)
    #[arg(short, long, value_name = "FILE")]
    data_file: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over --verbose
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(args.verbose)
        .init();

    let mut config = match &args.config {
        Some(path) => GatewayConfig::from_file(path)?,
        None => GatewayConfig::default(),
    };
    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(data_file) = args.data_file {
        config = config.with_data_file(data_file);
    }

    print_banner(&config);

    let gateway = Gateway::new(config)?;
    gateway.start().await?;

    Ok(())
}

fn print_banner(config: &GatewayConfig) {
    println!();
    println!("Shopping list server running on {}:{}", config.host, config.port);
    println!("   data file: {}", config.data_file.display());
    println!();
    println!("HTTP Endpoints");
    println!("   ├─ POST /rpc      - add_item, list_items, mark_item, mark_all, remove_item, monthly_total");
    println!("   ├─ GET  /health   - Health check");
    println!("   └─ GET  /status   - Item count and data file");
    println!();
    println!("Press Ctrl+C to stop");
    println!();
}
