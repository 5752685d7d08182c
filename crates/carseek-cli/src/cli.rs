//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use carseek_types::OutputFormat;

#[derive(Parser)]
#[command(name = "carseek")]
#[command(version)]
#[command(about = "Vehicle lookup by VIN, license plate, or brand/model/year")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Current odometer reading in km, for the maintenance-due flag
    #[arg(long, global = true)]
    pub km: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a vehicle by VIN
    Vin {
        /// Vehicle identification number (case-insensitive)
        vin: String,
    },

    /// Look up a vehicle by license plate
    Plate {
        /// License plate (case-insensitive)
        plate: String,
    },

    /// Look up maintenance info by brand, model and year
    Model {
        brand: String,
        model: String,
        year: i32,
    },

    /// List the vehicle catalog
    Catalog {
        /// Show maintenance specs instead of vehicles
        #[arg(long)]
        maintenance: bool,
    },

    /// Interactive search session (history lives for the session)
    Shell,

    /// Manage the stored password
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the maintenance-due odometer limit in km
        #[arg(long)]
        set_limit: Option<u32>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set a vehicle catalog TOML override
        #[arg(long)]
        set_vehicles: Option<PathBuf>,

        /// Set a maintenance catalog TOML override
        #[arg(long)]
        set_specs: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },

    /// Print the route table, or resolve a single path
    Routes {
        /// Path to resolve (e.g., "/search-license-plate")
        path: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AuthAction {
    /// Set the password
    Set { password: String },

    /// Check a candidate against the stored password
    Check { password: String },
}
