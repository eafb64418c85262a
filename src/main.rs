mod cli;
mod report;

use chrono::{Local, NaiveDate};
use clap::Parser;
use cli::{Cli, Commands, FieldArgs};
use farmadvisor::config::{Config, OutputFormat};
use farmadvisor::error::{AdvisorError, Result};
use farmadvisor::logic::{
    estimate_yield, recommend_npk, watering_plan, Advisor, IrrigationAdvisor,
};
use farmadvisor::models::DecisionInput;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Init = cli.command {
        Config::setup_interactive(cli.config)?;
        return Ok(());
    }

    // Load configuration
    let config = match Config::load(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Run `farmadvisor init` to create a config file.");
            std::process::exit(1);
        }
    };

    let json = cli.json || config.output.format == OutputFormat::Json;
    let output = Output {
        json,
        pretty: config.output.pretty,
    };

    match cli.command {
        Commands::Irrigate(field) => {
            let input = decision_input(&field, &config);
            info!(soil = %input.soil_type, crop = %input.crop_name, "Running irrigation decision");
            let result = IrrigationAdvisor.advise(&input);
            output.emit(&result, || report::irrigation(&result))?;
        }
        Commands::Plan { field, start } => {
            let start = parse_start(start.as_deref())?;
            let input = decision_input(&field, &config);
            info!(%start, "Building watering plan");
            let result = IrrigationAdvisor.advise(&input);
            let days = watering_plan(start, result.frequency_days, result.need_irrigation);
            output.emit(
                &serde_json::json!({ "decision": &result, "plan": &days }),
                || report::plan(&result, &days),
            )?;
        }
        Commands::Fertilize { crop, soil, stage } => {
            let crop = crop.unwrap_or_else(|| config.field.crop_name.clone());
            let soil = soil.unwrap_or_else(|| config.field.soil_type.clone());
            let stage = stage.unwrap_or_else(|| config.field.crop_stage.clone());
            info!(%crop, %soil, %stage, "Running fertilizer recommendation");
            let advice = recommend_npk(&crop, &soil, &stage);
            output.emit(&advice, || report::fertilizer(&advice))?;
        }
        Commands::Yield {
            crop,
            rainfall,
            level,
        } => {
            let crop = crop.unwrap_or_else(|| config.field.crop_name.clone());
            let level = level.unwrap_or_else(|| config.field.irrigation_level.clone());
            info!(%crop, rainfall, %level, "Running yield estimate");
            let estimate = estimate_yield(&crop, rainfall, &level);
            output.emit(&estimate, || report::yield_estimate(&estimate))?;
        }
        Commands::Tables => {
            println!("{}", report::reference_tables());
        }
        Commands::Init => {}
    }

    Ok(())
}

struct Output {
    json: bool,
    pretty: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        let rendered = if !self.json {
            text()
        } else if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{}", rendered);
        Ok(())
    }
}

fn decision_input(field: &FieldArgs, config: &Config) -> DecisionInput {
    DecisionInput::new(
        field.soil.as_deref().unwrap_or(config.field.soil_type.as_str()),
        field.crop.as_deref().unwrap_or(config.field.crop_name.as_str()),
        field.stage.as_deref().unwrap_or(config.field.crop_stage.as_str()),
        field.moisture,
        field.temperature,
        field.rain,
    )
}

fn parse_start(start: Option<&str>) -> Result<NaiveDate> {
    match start {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
            AdvisorError::InvalidInput(format!("Invalid start date '{}': {}", s, e))
        }),
        None => Ok(Local::now().date_naive()),
    }
}
