use clap::{Parser, Subcommand};
use shoplist_gateway::{GatewayClient, DEFAULT_URL};
use tracing_subscriber::EnvFilter;

mod output;

/// Shoplist CLI - client for a shared shopping list server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Server URL
    #[arg(short, long, value_name = "URL", default_value = DEFAULT_URL)]
    url: String,

    /// Log requests to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Add an item to buy
    Add {
        /// Item name
        name: String,
    },

    /// Show every item, bought or not
    List {
        /// Print the raw JSON list
        #[arg(long)]
        json: bool,
    },

    /// Mark an item as bought
    Mark {
        /// Item name
        name: String,
        /// Amount paid
        value: f64,
    },

    /// Mark every pending item as bought for the same amount
    #[command(name = "mark_all", alias = "mark-all")]
    MarkAll {
        /// Amount paid per item
        value: f64,
    },

    /// Remove an item, including its purchase history
    Remove {
        /// Item name
        name: String,
    },

    /// Total spent in a calendar month
    Total {
        /// Year, e.g. 2024
        year: i32,
        /// Month, 1-12
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_writer(std::io::stderr)
            .init();
    }

    let client = GatewayClient::new(&cli.url);
    tracing::debug!("{:?} against {}", cli.command, client.url());

    match cli.command {
        Commands::Add { name } => {
            println!("{}", client.add_item(&name).await?);
        }
        Commands::List { json } => {
            let items = client.list_items().await?;
            if json {
                println!("{}", serde_json::to_string(&items)?);
            } else {
                print!("{}", output::format_items(&items));
            }
        }
        Commands::Mark { name, value } => {
            println!("{}", client.mark_item(&name, value).await?);
        }
        Commands::MarkAll { value } => {
            println!("{}", client.mark_all(value).await?);
        }
        Commands::Remove { name } => {
            println!("{}", client.remove_item(&name).await?);
        }
        Commands::Total { year, month } => {
            let total = client.monthly_total(year, month).await?;
            println!("{}", output::format_total(total));
        }
    }

    Ok(())
}
