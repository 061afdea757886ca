//! Landfill Legends CLI - disposal guidance from the terminal
//!
//! This CLI lets residents:
//! - Find out how to dispose of an item from a description or a photo
//! - List drop-off facilities near them
//! - Check their region's collection schedule and recycling policy

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use landfill_agent::EnvironmentalAgent;
use landfill_types::FacilityType;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{facilities, identify, region, LocationArgs};
use config::CliConfig;
use error::CliResult;
use output::{print_error, print_field, OutputFormat};

/// Landfill Legends CLI application
#[derive(Parser)]
#[command(name = "landfill")]
#[command(about = "Landfill Legends - find out where your waste should go", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "LANDFILL_CONFIG")]
    config: Option<String>,

    /// Region code (e.g. US-CA, US-NY, US-TX)
    #[arg(short, long, env = "LANDFILL_REGION")]
    region: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Get disposal guidance for a described item
    #[command(alias = "id")]
    Identify {
        /// Item description, e.g. "plastic bottle"
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        #[command(flatten)]
        location: LocationArgs,
    },

    /// Get disposal guidance from a photo of an item
    Scan {
        /// Path to the image file
        image: PathBuf,

        #[command(flatten)]
        location: LocationArgs,
    },

    /// List drop-off facilities in the region
    Facilities {
        /// Only facilities of this type (recycling, hazardous-waste, electronics, composting)
        #[arg(short = 't', long = "type")]
        facility_type: Option<FacilityType>,

        #[command(flatten)]
        location: LocationArgs,
    },

    /// Show details of one facility
    Facility {
        /// Facility ID, e.g. ca-001
        id: String,
    },

    /// Show the region's collection schedule
    Schedule,

    /// Show the region's disposal policy
    Policy,

    /// List regions with a dedicated policy
    Regions,

    /// List items recognized by name
    Items,

    /// Show configuration
    Config,
}

/// Effective settings after flags, environment and config file
#[derive(Serialize)]
struct EffectiveConfig<'a> {
    config_file: Option<&'a str>,
    region: &'a str,
    facility_limit: usize,
    home_location: Option<landfill_types::GeoPoint>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;
    let mut agent = EnvironmentalAgent::with_config(config.agent_config());
    if let Some(region) = &cli.region {
        agent.set_region(region.clone());
    }
    let format = cli.output;
    let home = config.home_location;

    // Execute command
    match cli.command {
        Commands::Identify {
            description,
            location,
        } => identify::describe(&agent, &description, location.resolve(home)?, format),
        Commands::Scan { image, location } => {
            identify::scan(&agent, &image, location.resolve(home)?, format)
        }
        Commands::Facilities {
            facility_type,
            location,
        } => facilities::list(&agent, facility_type, location.resolve(home)?, format),
        Commands::Facility { id } => facilities::show(&agent, &id, format),
        Commands::Schedule => region::schedule(&agent, format),
        Commands::Policy => region::policy(&agent, format),
        Commands::Regions => region::regions(&agent, format),
        Commands::Items => identify::items(format),
        Commands::Config => {
            let effective = EffectiveConfig {
                config_file: cli.config.as_deref(),
                region: agent.region(),
                facility_limit: agent.config().facility_limit,
                home_location: home,
            };
            if format != OutputFormat::Table {
                return output::print_single(&effective, format);
            }
            print_field("Config", effective.config_file.unwrap_or("(default location)"));
            print_field("Region", effective.region);
            print_field("Facility limit", &effective.facility_limit.to_string());
            print_field(
                "Home",
                &home
                    .map(|p| format!("{}, {}", p.lat, p.lng))
                    .unwrap_or_else(|| "not set".into()),
            );
            Ok(())
        }
    }
}
