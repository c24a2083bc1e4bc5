//! Prints the column configuration a grid derives from a JSON Schema.
//!
//! ```text
//! gridedit-cli <schema.json> [overrides.json] [--config grid.json]
//! ```

mod paths;

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use gridedit_lib::ColumnDefinition;
use gridedit_lib::Grid;
use gridedit_lib::GridConfig;
use gridedit_lib::error::ConfigError;
use gridedit_lib::error::GridError;
use gridedit_lib::model::DynamicOptions;
use gridedit_lib::registration::BootSequence;
use serde::Serialize;
use simplelog::{Config, LevelFilter, WriteLogger};

const USAGE: &str = "usage: gridedit-cli <schema.json> [overrides.json] [--config grid.json]";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}\n{usage}", usage = USAGE)]
    Usage(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to render report: {0}")]
    Report(#[source] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    schema: PathBuf,
    overrides: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, CliError> {
    let mut positional = Vec::new();
    let mut config = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--config needs a path".to_string()))?;
                config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("unknown option {}", flag)));
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let mut positional = positional.into_iter();
    let schema = positional
        .next()
        .ok_or_else(|| CliError::Usage("missing schema file".to_string()))?;
    let overrides = positional.next();
    if let Some(extra) = positional.next() {
        return Err(CliError::Usage(format!("unexpected argument {}", extra.display())));
    }

    Ok(Args {
        schema,
        overrides,
        config,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Serialize)]
struct Report<'a> {
    grid: String,
    config: &'a GridConfig,
    boot: BootSequence,
    columns: &'a [ColumnDefinition],
}

fn run(args: Args) -> Result<String, CliError> {
    let schema: serde_json::Value = read_json(&args.schema)?;
    let overrides: HashMap<String, DynamicOptions> = match &args.overrides {
        Some(path) => read_json(path)?,
        None => HashMap::new(),
    };
    let config = match &args.config {
        Some(path) => GridConfig::from_path(path)?,
        None => GridConfig::default(),
    };

    let grid: Grid = Grid::from_object_schema(&schema, &overrides, config)?;
    log::info!(
        "Derived {} column(s) for {} from {}",
        grid.columns().len(),
        grid.id(),
        args.schema.display()
    );

    let mut boot = BootSequence::new();
    boot.extend_with_registered();

    let report = Report {
        grid: grid.id().to_string(),
        config: grid.config(),
        boot,
        columns: grid.columns(),
    };
    serde_json::to_string_pretty(&report).map_err(CliError::Report)
}

fn init_logging() {
    let path = paths::log_file();
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}

fn main() -> ExitCode {
    init_logging();

    let result = parse_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
