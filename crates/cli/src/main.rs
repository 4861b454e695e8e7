//! Order Desk CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Apply migrations from crates/api/migrations
//! od-cli migrate
//!
//! # Print the generated OpenAPI document
//! od-cli openapi --public-url https://orders.example.com
//!
//! # Insert a demo customer and order
//! od-cli seed
//! ```
//!
//! Database commands read `ORDERS_DATABASE_URL` (or `DATABASE_URL`), the same
//! variables the API server uses.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "od-cli")]
#[command(author, version, about = "Order Desk CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Print the OpenAPI document as JSON
    Openapi {
        /// Server URL advertised in the document
        #[arg(long, default_value = "http://localhost:3000")]
        public_url: String,
    },
    /// Insert a demo customer with one pending order
    Seed {
        /// Demo customer email
        #[arg(short, long, default_value = "ada@example.com")]
        email: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Openapi { public_url } => commands::openapi::print(&public_url)?,
        Commands::Seed { email } => commands::seed::demo(&email).await?,
    }
    Ok(())
}
