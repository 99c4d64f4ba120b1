//! Cycloroof catalog CLI.
//!
//! One-shot commands over the catalog, comparison and rental data. Logging
//! goes to stderr; stdout carries the listing (or JSON with `--json`).

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use cycloroof::catalog::{parse_brand_filter, parse_fuel_filter, CatalogView};
use cycloroof::format::{format_mileage, format_price};
use cycloroof::{
    CatalogConfig, ComparisonSelection, Inventory, PriceRange, Query, RentalDuration, RentalFleet,
    SortKey,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cycloroof")]
#[command(about = "Browse, compare and rent two-wheelers", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON inventory file (overrides CYCLOROOF_INVENTORY)
    #[arg(long, global = true, value_name = "PATH")]
    inventory: Option<PathBuf>,

    /// JSON rental fleet file (overrides CYCLOROOF_RENTALS)
    #[arg(long, global = true, value_name = "PATH")]
    rentals: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, filter and sort the catalog
    #[command(alias = "b")]
    Browse(BrowseArgs),

    /// Compare up to three vehicles side by side
    #[command(alias = "c")]
    Compare {
        /// Vehicle ids in column order
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// List rental bikes with the rate for a duration
    Rentals {
        /// Hourly, Daily, Weekly or Monthly (anything else shows hourly)
        #[arg(long, short)]
        duration: Option<String>,
    },

    /// Show the brand and fuel type filter values
    Brands,
}

#[derive(Args)]
struct BrowseArgs {
    /// Case-insensitive text matched against name and brand
    #[arg(long, short, default_value = "")]
    search: String,

    #[arg(long, default_value_t = PriceRange::default().min)]
    min_price: u64,

    #[arg(long, default_value_t = PriceRange::default().max)]
    max_price: u64,

    /// Exact brand, or "all-brands"
    #[arg(long, default_value = "all-brands")]
    brand: String,

    /// Petrol, Electric, Hybrid or "all-types"
    #[arg(long, default_value = "all-types")]
    fuel: String,

    /// default, price-asc, price-desc, mileage-desc or brand-asc
    #[arg(long, default_value = "default")]
    sort: String,

    /// Print the view as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn browse(inventory: &Inventory, args: BrowseArgs) -> anyhow::Result<()> {
    let query = Query {
        search_term: args.search,
        price_range: PriceRange::new(args.min_price, args.max_price),
        brand: parse_brand_filter(&args.brand),
        fuel_type: parse_fuel_filter(&args.fuel)?,
        sort_key: args.sort.parse::<SortKey>()?,
    };
    if query.price_range.min > query.price_range.max {
        warn!(
            "Minimum price {} exceeds maximum {}; nothing can match",
            query.price_range.min, query.price_range.max
        );
    }

    let view = CatalogView::new(inventory.vehicles(), &query);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if view.is_empty() {
        println!("No bikes found");
        println!("Try adjusting your search criteria or filters");
        return Ok(());
    }
    for vehicle in &view.vehicles {
        let badge = if vehicle.is_electric() { " [EV]" } else { "" };
        println!(
            "{:>3}  {:<34} {:<10} {:>11}  {}{}",
            vehicle.id,
            vehicle.name,
            vehicle.brand,
            format_price(vehicle.price),
            format_mileage(vehicle.mileage),
            badge
        );
    }
    println!("{}", view.summary());
    Ok(())
}

fn compare(inventory: &Inventory, ids: &[String]) -> anyhow::Result<()> {
    let mut selection = ComparisonSelection::new();
    for id in ids {
        let vehicle = inventory.require(id)?;
        if !selection.add(vehicle.clone()) {
            warn!("Skipping {}: already selected or comparison is full", id);
        }
    }

    let table = selection.table();
    println!("{:<10} {}", "", table.headers.join(" | "));
    for row in &table.rows {
        println!("{:<10} {}", row.label, row.values.join(" | "));
    }
    if let (Some(cheapest), Some(efficient)) = (selection.cheapest(), selection.best_mileage()) {
        println!();
        println!("Lowest price: {cheapest}  Best mileage: {efficient}");
    }
    Ok(())
}

fn rentals(fleet: &RentalFleet, duration: Option<&str>) {
    let duration = duration.and_then(RentalDuration::from_label);
    for rental in fleet.rentals() {
        let status = if rental.available { "Available" } else { "Rented" };
        println!(
            "{:>3}  {:<22} {:<16} {:>15}  {:.1}*  {}",
            rental.id,
            rental.name,
            rental.location,
            rental.rate_or_hourly(duration).to_string(),
            rental.rating,
            status
        );
    }
    if let Some(rate) = fleet.starting_hourly_rate() {
        println!(
            "{} bikes in {} cities, starting from {}/hr",
            fleet.len(),
            fleet.locations().len(),
            format_price(rate)
        );
    }
}

fn brands(inventory: &Inventory) {
    println!("Brands: {}", inventory.brands().join(", "));
    let fuels: Vec<String> = inventory
        .fuel_types()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("Fuel types: {}", fuels.join(", "));
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = CatalogConfig::from_env().with_overrides(cli.inventory, cli.rentals);
    info!("Starting catalog with {:?}", config);

    match cli.command {
        Commands::Browse(args) => {
            let inventory = Inventory::load_or_sample(config.inventory_path.as_deref())
                .context("Failed to load inventory")?;
            browse(&inventory, args)
        }
        Commands::Compare { ids } => {
            let inventory = Inventory::load_or_sample(config.inventory_path.as_deref())
                .context("Failed to load inventory")?;
            compare(&inventory, &ids)
        }
        Commands::Rentals { duration } => {
            let fleet = RentalFleet::load_or_sample(config.rentals_path.as_deref())
                .context("Failed to load rental fleet")?;
            rentals(&fleet, duration.as_deref());
            Ok(())
        }
        Commands::Brands => {
            let inventory = Inventory::load_or_sample(config.inventory_path.as_deref())
                .context("Failed to load inventory")?;
            brands(&inventory);
            Ok(())
        }
    }
}
