//! Rings command handler
//!
//! Places a pin (from coordinates or the current position) and prints the
//! resulting day rings.

use crate::config::Config;
use crate::coordinator::Coordinator;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::geo::GeoPoint;
use crate::locate::{provider_from_config, AcquisitionResult, Locator};
use crate::state::Parameter;
use clap::Args;
use std::sync::Arc;

/// Rings command arguments
#[derive(Args)]
pub struct RingsArgs {
    /// Latitude
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Use the current position instead of --lat/--lng
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    pub here: bool,

    /// Miles travelled per day (100-600, step 25)
    #[arg(long, short = 'm')]
    pub miles_per_day: Option<u32>,

    /// Number of days to show (1-7)
    #[arg(long, short = 'd')]
    pub days: Option<u32>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the rings command
pub async fn run(args: RingsArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    super::init_logging("warn");

    let config = Config::load()?;

    let format_name = args.format.unwrap_or_else(|| config.output.format.clone());
    let formatter = get_formatter(&format_name).ok_or_else(|| {
        Error::Config(format!(
            "Unknown format: {} (see --list-formats)",
            format_name
        ))
    })?;

    let locator = Locator::new(provider_from_config(&config)?)
        .with_timeout(config.location_timeout());
    let mut coordinator = Coordinator::new(Arc::new(locator), config.travel_parameters());

    if let Some(miles_per_day) = args.miles_per_day {
        coordinator.on_parameter_changed(Parameter::MilesPerDay, miles_per_day);
    }
    if let Some(days) = args.days {
        coordinator.on_parameter_changed(Parameter::MaxDays, days);
    }

    if args.here {
        if let AcquisitionResult::Failure(failure) = coordinator.on_locate_requested().await {
            return Err(Error::Location(format!(
                "{} ({})",
                failure.message, failure.kind
            )));
        }
    } else if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        let point = GeoPoint::new(lat, lng);
        point.validate()?;
        coordinator.on_map_click(point);
    } else {
        return Err(Error::InvalidCoordinates(
            "Specify --lat and --lng, or --here".to_string(),
        ));
    }

    let output = formatter.format(&coordinator.snapshot())?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}

fn list_formats() {
    println!("Available formats:");
    for info in available_formats() {
        println!("  {:6} {}", info.name, info.description);
    }
}
