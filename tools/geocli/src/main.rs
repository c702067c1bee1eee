#![warn(clippy::unwrap_used)]
use std::path::{Path, PathBuf};

use chinageo::{Coordinate, Error, MapSettings, Provider, Result, markers};
use clap::{Args, Parser, Subcommand};
use env_logger::{Env, TimestampPrecision};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "geocli")]
#[command(about = "Coordinate conversion for Chinese map providers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ProviderSelection {
    #[arg(short = 'p', long = "provider", env = "CHINAMAPS_PROVIDER", help = "Map provider token (amap, baidu, tencent, ...)")]
    provider: Option<Provider>,
    #[arg(short = 's', long = "settings", help = "Map settings json file to resolve the active provider from")]
    settings: Option<PathBuf>,
}

impl ProviderSelection {
    fn resolve(&self) -> Result<Provider> {
        match (&self.provider, &self.settings) {
            (Some(provider), _) => Ok(*provider),
            (None, Some(path)) => Ok(MapSettings::from_json_file(path)?.active_provider()),
            (None, None) => Err(Error::InvalidArgument("Either a provider or a settings file is required".to_string())),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(name = "convert", about = "Convert a WGS-84 coordinate for display on the provider's map")]
    Convert {
        #[command(flatten)]
        selection: ProviderSelection,
        #[arg(long = "lat", allow_negative_numbers = true, help = "Latitude in decimal degrees")]
        lat: f64,
        #[arg(long = "lng", allow_negative_numbers = true, help = "Longitude in decimal degrees")]
        lng: f64,
    },
    #[command(name = "reverse", about = "Convert a coordinate from the provider's datum back to WGS-84")]
    Reverse {
        #[command(flatten)]
        selection: ProviderSelection,
        #[arg(long = "lat", allow_negative_numbers = true, help = "Latitude in decimal degrees")]
        lat: f64,
        #[arg(long = "lng", allow_negative_numbers = true, help = "Longitude in decimal degrees")]
        lng: f64,
    },
    #[command(name = "markers", about = "Convert a json array of marker records")]
    Markers {
        #[command(flatten)]
        selection: ProviderSelection,
        #[arg(short = 'i', long = "input", help = "Input file path")]
        input_path: PathBuf,
        #[arg(short = 'o', long = "output", help = "Output file path, prints to stdout when omitted")]
        output_path: Option<PathBuf>,
        #[arg(long = "restore", help = "Convert edited markers back to WGS-84 instead")]
        restore: bool,
    },
    #[command(name = "needs-conversion", about = "Check if the provider requires converted coordinates")]
    NeedsConversion {
        #[command(flatten)]
        selection: ProviderSelection,
    },
}

fn read_markers(path: &Path) -> Result<Vec<Value>> {
    if !path.is_file() {
        return Err(Error::InvalidPath(path.to_path_buf()));
    }

    match serde_json::from_str::<Value>(&std::fs::read_to_string(path)?)? {
        Value::Array(records) => Ok(records),
        _ => Err(Error::InvalidArgument(format!(
            "Expected a json array of markers in '{}'",
            path.display()
        ))),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    match cli.command {
        Commands::Convert { selection, lat, lng } => {
            let provider = selection.resolve()?;
            let res = chinageo::convert(provider, Coordinate::latlon(lat, lng));
            println!("{}", serde_json::to_string_pretty(&res)?);
        }
        Commands::Reverse { selection, lat, lng } => {
            let provider = selection.resolve()?;
            let wgs = chinageo::to_wgs84(Coordinate::latlon(lat, lng), provider);
            println!("{}", serde_json::to_string_pretty(&wgs)?);
        }
        Commands::Markers {
            selection,
            input_path,
            output_path,
            restore,
        } => {
            let provider = selection.resolve()?;
            let records = read_markers(&input_path)?;
            log::info!("Read {} markers from '{}'", records.len(), input_path.display());

            let records = if restore {
                markers::restore_markers(provider, records)
            } else {
                markers::convert_markers(provider, records)
            };

            let output = serde_json::to_string_pretty(&records)?;
            match output_path {
                Some(path) => std::fs::write(path, output)?,
                None => println!("{output}"),
            }
        }
        Commands::NeedsConversion { selection } => {
            let provider = selection.resolve()?;
            println!("{provider}: {}", provider.needs_conversion());
        }
    }

    Ok(())
}
