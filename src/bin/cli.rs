//! agrimarket CLI
//!
//! Opens a seeded in-memory catalog and runs one query against it.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use agrimarket::{Config, MarketError, MemStorage, ProductFilter, Result, Storage};

/// agrimarket CLI
#[derive(Parser, Debug)]
#[command(name = "agrimarket-cli")]
#[command(about = "Query the sample produce marketplace catalog")]
#[command(version)]
struct Args {
    /// Start from an empty store instead of the sample catalog
    #[arg(long)]
    empty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List active products, newest first
    Products {
        /// Category name, or "all"
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive text to find in title or description
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one product with its seller
    Product {
        /// Product id
        id: u32,
    },

    /// List every product owned by a seller
    Seller {
        /// Seller user id
        id: u32,
    },

    /// Look up a user by username
    User {
        /// Username
        username: String,
    },

    /// List inquiries for a product
    Contacts {
        /// Product id
        product_id: u32,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,agrimarket=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("agrimarket-cli v{}", agrimarket::VERSION);

    let config = Config::builder().seed_sample_data(!args.empty).build();

    let storage = match MemStorage::open(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open storage: {}", e);
            std::process::exit(1);
        }
    };

    match run(&storage, args.command) {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("not found");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Query failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run a command, printing its result; `Ok(false)` when a record is absent
fn run(storage: &dyn Storage, command: Commands) -> Result<bool> {
    match command {
        Commands::Products { category, search } => {
            let filter = ProductFilter::from_params(category.as_deref(), search.as_deref());
            print_json(&storage.get_products(&filter)?)
        }
        Commands::Product { id } => print_found(storage.get_product(id)?),
        Commands::Seller { id } => print_json(&storage.get_products_by_seller(id)?),
        Commands::User { username } => print_found(storage.get_user_by_username(&username)?),
        Commands::Contacts { product_id } => {
            print_json(&storage.get_contacts_by_product(product_id)?)
        }
    }
}

fn print_found<T: Serialize>(value: Option<T>) -> Result<bool> {
    match value {
        Some(value) => print_json(&value),
        None => Ok(false),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<bool> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| MarketError::Serialization(e.to_string()))?;
    println!("{}", json);
    Ok(true)
}
