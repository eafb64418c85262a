use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "farmadvisor",
    version,
    about = "Irrigation, fertilizer and yield advice for small farms"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of a text report
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Field description shared by the irrigation commands. Omitted
/// categories come from the config file.
#[derive(Args, Debug, Clone)]
pub struct FieldArgs {
    /// Soil type (clay, loam, sandy)
    #[arg(long)]
    pub soil: Option<String>,

    /// Crop name (rice, wheat, maize, ...)
    #[arg(long)]
    pub crop: Option<String>,

    /// Growth stage (germination, vegetative, flowering, harvest)
    #[arg(long)]
    pub stage: Option<String>,

    /// Current volumetric soil moisture (%)
    #[arg(short, long, allow_hyphen_values = true)]
    pub moisture: f64,

    /// Air temperature (°C)
    #[arg(short, long, allow_hyphen_values = true)]
    pub temperature: f64,

    /// Probability of rain (%)
    #[arg(short, long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub rain: f64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decide whether and how much to irrigate
    Irrigate(FieldArgs),
    /// Seven-day watering timeline for a field
    Plan {
        #[command(flatten)]
        field: FieldArgs,

        /// First day of the plan (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        start: Option<String>,
    },
    /// NPK recommendation for the current growth stage
    Fertilize {
        #[arg(long)]
        crop: Option<String>,

        #[arg(long)]
        soil: Option<String>,

        /// Growth stage (short name or label such as "Vegetative Growth")
        #[arg(long)]
        stage: Option<String>,
    },
    /// Seasonal yield and cost-benefit estimate
    Yield {
        #[arg(long)]
        crop: Option<String>,

        /// Expected seasonal rainfall (mm)
        #[arg(long)]
        rainfall: f64,

        /// Irrigation level (low, medium, high)
        #[arg(long)]
        level: Option<String>,
    },
    /// Print the reference tables the advisors use
    Tables,
    /// Write a config file interactively
    Init,
}
