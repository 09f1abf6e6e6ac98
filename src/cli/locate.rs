//! Locate command handler
//!
//! Runs one location request and prints the outcome.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::locate::{available_providers, provider_from_config, AcquisitionResult, Locator};
use clap::Args;
use std::time::Duration;

/// Locate command arguments
#[derive(Args)]
pub struct LocateArgs {
    /// Positioning provider (overrides location.provider)
    #[arg(long)]
    pub provider: Option<String>,

    /// Request timeout in seconds (overrides location.timeout_secs)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// List available providers
    #[arg(short = 'P', long = "list-providers")]
    pub list_providers: bool,
}

/// Run the locate command
pub async fn run(args: LocateArgs) -> Result<()> {
    if args.list_providers {
        println!("Available providers:");
        for provider in available_providers() {
            println!("  {:8} {}", provider.name, provider.description);
        }
        return Ok(());
    }

    super::init_logging("warn");

    let mut config = Config::load()?;
    if let Some(provider) = args.provider {
        config.location.provider = provider;
    }
    let timeout = args
        .timeout
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.location_timeout());

    let locator = Locator::new(provider_from_config(&config)?).with_timeout(timeout);
    let result = locator.locate().await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    match result {
        AcquisitionResult::Success(point) => {
            if !args.json {
                println!("{:.6}, {:.6}", point.lat, point.lng);
            }
            Ok(())
        }
        AcquisitionResult::Failure(failure) => Err(Error::Location(format!(
            "{} ({})",
            failure.message, failure.kind
        ))),
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_timeout_must_be_positive() {
        assert!(Cli::try_parse_from(["day-rings", "locate", "--timeout", "0"]).is_err());

        let cli = Cli::try_parse_from(["day-rings", "locate", "--timeout", "3"]).unwrap();
        match cli.command {
            Commands::Locate(args) => assert_eq!(args.timeout, Some(3)),
            _ => panic!("expected locate command"),
        }
    }
}
