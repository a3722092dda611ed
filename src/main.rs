use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use typed_uri_matcher::config::load_config;
use typed_uri_matcher::observability::logging::init_logging;
use typed_uri_matcher::RouteTable;

#[derive(Parser)]
#[command(name = "uri-match")]
#[command(about = "Resolve URIs against a route table file", long_about = None)]
struct Cli {
    /// Route table file (TOML).
    #[arg(short, long)]
    config: PathBuf,

    /// Log filter used when RUST_LOG is unset.
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value each URI resolves to
    Match {
        /// Print results as a JSON array
        #[arg(long)]
        json: bool,

        #[arg(required = true)]
        uris: Vec<String>,
    },
    /// Validate the route table and list its routes in precedence order
    Check,
}

#[derive(Serialize)]
struct MatchOutput<'a> {
    uri: &'a str,
    value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let config = load_config::<String>(&cli.config)?;
    let table = RouteTable::from_config_values(config)?;

    match cli.command {
        Commands::Match { json, uris } => {
            let results: Vec<MatchOutput<'_>> = uris
                .iter()
                .map(|uri| match table.match_str(uri) {
                    Ok(value) => MatchOutput {
                        uri: uri.as_str(),
                        value: value.map(String::as_str),
                        error: None,
                    },
                    Err(e) => MatchOutput {
                        uri: uri.as_str(),
                        value: None,
                        error: Some(e.to_string()),
                    },
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for result in &results {
                    match (&result.error, result.value) {
                        (Some(error), _) => eprintln!("{}\terror: {}", result.uri, error),
                        (None, Some(value)) => println!("{}\t{}", result.uri, value),
                        (None, None) => println!("{}\tno match", result.uri),
                    }
                }
            }

            if results.iter().any(|r| r.error.is_some()) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Check => {
            println!(
                "{} routes, default authority: {}, no match: {}",
                table.len(),
                table.default_authority().unwrap_or("-"),
                table.no_match_value().map(String::as_str).unwrap_or("-"),
            );
            for (i, route) in table.routes().iter().enumerate() {
                println!("{:>3}  {}/{}\t{}", i, route.authority, route.pattern, route.value);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
