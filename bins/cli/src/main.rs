//! Coinage CLI
//!
//! Splits monetary values evenly or by weight and looks up currencies.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use coinage_core::currency::{Allocation, CurrencyIdentifier, CurrencyRegistry};
use coinage_shared::config::LoggingConfig;
use coinage_shared::{AppConfig, Currency, Money};

/// Currency-aware money allocation
#[derive(Parser, Debug)]
#[command(name = "coinage", version, about)]
struct Cli {
    /// Print results as JSON instead of one value per line
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split an amount into equal parts
    Even {
        /// Alphabetic or numeric currency code
        currency: String,
        /// Amount to split, e.g. 15.01
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Number of parts
        parts: i64,
    },
    /// Split an amount in proportion to weights
    Proportional {
        /// Alphabetic or numeric currency code
        currency: String,
        /// Amount to split, e.g. 583
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Relative weights, one part per weight
        #[arg(required = true, allow_hyphen_values = true)]
        weights: Vec<String>,
    },
    /// Show a currency's ISO 4217 metadata
    Lookup {
        /// Alphabetic or numeric currency code
        currency: String,
    },
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let registry = CurrencyRegistry::from_config(&config.registry)?;
    debug!(?registry, "Registry ready");

    match cli.command {
        Command::Even {
            currency,
            amount,
            parts,
        } => {
            let total = parse_money(&registry, &currency, &amount)?;
            let result = Allocation::distribute_evenly(&total, parts);
            print_parts(&result, cli.json)
        }
        Command::Proportional {
            currency,
            amount,
            weights,
        } => {
            let total = parse_money(&registry, &currency, &amount)?;
            let weights = weights
                .iter()
                .map(|w| parse_amount(total.currency(), w))
                .collect::<Result<Vec<_>>>()?;
            let result = Allocation::distribute_proportionally(&total, &weights)?;
            print_parts(&result, cli.json)
        }
        Command::Lookup { currency } => {
            let currency = resolve(&registry, &currency)?;
            print_currency(currency, cli.json)
        }
    }
}

/// Logs go to stderr so stdout carries only results.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let json_layer = logging
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!logging.json).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

/// Numeric strings are ISO numeric codes; anything else is alphabetic.
fn identifier(code: &str) -> CurrencyIdentifier {
    code.trim()
        .parse::<u16>()
        .map_or_else(|_| CurrencyIdentifier::from(code), CurrencyIdentifier::from)
}

fn resolve(registry: &CurrencyRegistry, code: &str) -> Result<Currency> {
    registry
        .resolve(&identifier(code))
        .ok_or_else(|| anyhow!("Unknown currency: {code}"))
}

fn parse_amount(currency: Currency, amount: &str) -> Result<Money> {
    Money::from_str_amount(amount, currency).ok_or_else(|| anyhow!("Invalid amount: {amount}"))
}

fn parse_money(registry: &CurrencyRegistry, code: &str, amount: &str) -> Result<Money> {
    parse_amount(resolve(registry, code)?, amount)
}

fn print_parts(parts: &[Money], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(parts)?);
    } else {
        for part in parts {
            println!("{part}");
        }
    }
    Ok(())
}

fn print_currency(currency: Currency, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({
            "name": currency.name(),
            "alphabetic_code": currency.alphabetic_code(),
            "numeric_code": currency.numeric_code(),
            "minor_units": currency.minor_units(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!(
            "{} {:03} {} (minor units: {})",
            currency.alphabetic_code(),
            currency.numeric_code(),
            currency.name(),
            currency.minor_units()
        );
    }
    Ok(())
}
