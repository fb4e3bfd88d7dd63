//! Customer Pricing CLI
//!
//! Applies a customer discount rate to an amount.
//!
//! ```sh
//! # Rate from the default config (~/.config/customer-pricing/config.toml)
//! customer-pricing 100
//!
//! # Explicit rate
//! customer-pricing --rate 0.2 100
//!
//! # Show the effective configuration
//! customer-pricing --check
//!
//! # Write the effective configuration to the config path
//! customer-pricing --rate 0.1 --init
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use customer_pricing::config::AppConfig;
use customer_pricing::logging::init_tracing;
use customer_pricing::{AppError, ConfigError, Customer};

/// Apply a customer discount rate to an amount.
#[derive(Parser, Debug)]
#[command(
    name = "customer-pricing",
    version,
    about = "Apply a customer discount rate to an amount",
    long_about = "Computes `amount - rate * amount` for the given discount rate.\n\n\
                  Default config: ~/.config/customer-pricing/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "CUSTOMER_PRICING_CONFIG")]
    config: Option<PathBuf>,

    /// Discount rate, overrides `pricing.discount_rate`.
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "no_discount")]
    rate: Option<f64>,

    /// Ignore any configured discount rate.
    #[arg(long)]
    no_discount: bool,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print the effective configuration and exit.
    #[arg(long)]
    check: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long, conflicts_with = "check")]
    init: bool,

    /// Base amount to discount.
    #[arg(allow_negative_numbers = true, required_unless_present_any = ["check", "init"])]
    amount: Option<f64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(customer_pricing::default_config_path);

    let (mut config, load_error) = load_config(&config_path);
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    let (config, customer) = resolve(&cli, config)?;

    if cli.init {
        init_config(&config_path, &config)?;
        println!("Configuration written to {}", config_path.display());
        return Ok(());
    }

    if cli.check {
        println!("Configuration is valid");
        println!("   Config file   : {}", config_path.display());
        println!("   Log level     : {}", config.logging.level);
        println!("   Log format    : {}", config.logging.format);
        match config.pricing.discount_rate {
            Some(rate) => println!("   Discount rate : {}", rate),
            None => println!("   Discount rate : none"),
        }
        return Ok(());
    }

    let amount = cli.amount.unwrap_or_default();
    let discounted = customer.apply_discount(amount)?;

    info!(
        amount,
        discount_rate = ?customer.discount_rate(),
        discounted,
        "Discount applied"
    );
    println!("{}", discounted);

    Ok(())
}

/// Config at `path`, or the defaults plus the reason loading failed.
fn load_config(path: &Path) -> (AppConfig, Option<ConfigError>) {
    match AppConfig::load(path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

/// Apply the rate flags to `config` and build the customer.
///
/// `--no-discount` wins over `--rate`, which wins over `pricing.discount_rate`.
fn resolve(cli: &Cli, mut config: AppConfig) -> Result<(AppConfig, Customer), AppError> {
    if cli.no_discount {
        info!("CLI override: no discount");
        config.pricing.discount_rate = None;
    } else if let Some(rate) = cli.rate {
        info!("CLI override: discount_rate = {}", rate);
        config.pricing.discount_rate = Some(rate);
    }

    let customer = config.customer()?;
    Ok((config, customer))
}

fn init_config(path: &Path, config: &AppConfig) -> Result<(), AppError> {
    config.save(path)?;
    info!("Configuration written to {}", path.display());
    Ok(())
}
