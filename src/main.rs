//! emi-schedule CLI
//!
//! Compute loan repayment schedules from the command line, or serve them
//! over HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Print a schedule as a table with totals
//! emi-schedule schedule --principal 100000 --rate 10 --tenure 12
//!
//! # Same schedule in the API's JSON shape
//! emi-schedule schedule --principal 100000 --rate 10 --tenure 12 --format json
//!
//! # Serve GET /api/loan/emi
//! emi-schedule serve --config config/emi-schedule.toml
//!
//! # Generate a random loan book (for testing)
//! emi-schedule generate --count 50 --output loans.json
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use emi_schedule::amortization::schedule::AmortizationCalculator;
use emi_schedule::amortization::summary::ScheduleSummary;
use emi_schedule::server::{Server, ServerConfig};
use emi_schedule::simulation::loan_book::{generate_random_queries, LoanBookConfig};
use log::info;
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;
use std::process;

/// Reducing-balance loan amortization
#[derive(Parser)]
#[command(name = "emi-schedule", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the repayment schedule of one loan
    Schedule {
        /// Amount borrowed
        #[arg(long)]
        principal: Decimal,
        /// Annual interest rate in percent (8.5 means 8.5%)
        #[arg(long)]
        rate: Decimal,
        /// Number of monthly installments
        #[arg(long)]
        tenure: u32,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Serve schedules over HTTP
    Serve {
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the bind host
        #[arg(long)]
        host: Option<String>,
        /// Override the listen port
        #[arg(long)]
        port: Option<u16>,
        /// Override the allowed CORS origin
        #[arg(long)]
        allowed_origin: Option<String>,
    },
    /// Generate a random loan book
    Generate {
        /// Number of loans
        #[arg(long, default_value_t = 30)]
        count: usize,
        /// Longest tenure in months
        #[arg(long, default_value_t = 360)]
        max_tenure: u32,
        /// Write to file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn cmd_schedule(principal: Decimal, rate: Decimal, tenure: u32, format: OutputFormat) {
    let schedule = AmortizationCalculator::compute_schedule(principal, rate, tenure)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        });

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&schedule).unwrap_or_else(|e| {
                eprintln!("Error serializing schedule: {}", e);
                process::exit(1);
            });
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{}", schedule);
            println!("{}", ScheduleSummary::from_schedule(&schedule));
        }
    }
}

async fn cmd_serve(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    allowed_origin: Option<String>,
) {
    let mut config = match config_path {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            ServerConfig::from_file(&path).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                process::exit(1);
            })
        }
        None => {
            info!("using default configuration");
            ServerConfig::default()
        }
    };
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(origin) = allowed_origin {
        config.allowed_origin = origin;
    }

    if let Err(e) = Server::new(config).start().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn cmd_generate(count: usize, max_tenure: u32, output_path: Option<PathBuf>) {
    let config = LoanBookConfig {
        loan_count: count,
        max_tenure_months: max_tenure,
        ..Default::default()
    };
    let book = generate_random_queries(&config);

    let json = serde_json::to_string_pretty(&book).unwrap_or_else(|e| {
        eprintln!("Error serializing loan book: {}", e);
        process::exit(1);
    });

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path.display(), e);
            process::exit(1);
        });
        eprintln!("Generated {} loans → {}", book.len(), path.display());
    } else {
        println!("{}", json);
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Schedule {
            principal,
            rate,
            tenure,
            format,
        } => cmd_schedule(principal, rate, tenure, format),
        Commands::Serve {
            config,
            host,
            port,
            allowed_origin,
        } => cmd_serve(config, host, port, allowed_origin).await,
        Commands::Generate {
            count,
            max_tenure,
            output,
        } => cmd_generate(count, max_tenure, output),
    }
}
