//! Interpolate command implementation
//!
//! Reads an (x, y) table, interpolates it with one or more methods and
//! prints or writes the result table.

use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

use adapter_tables::{read_file, read_whitespace_table, write_table, ReadOptions, SheetRef};
use spectro_core::interpolation::{InterpolationTable, LogDomainPolicy, Method, MethodOptions, Scale};

use crate::config::SpectroConfig;
use crate::error::require_file;
use crate::{CliError, Result};

/// Arguments of `spectro interpolate`
#[derive(Args, Debug, Clone)]
pub struct InterpolateArgs {
    /// CSV or Excel file with the samples
    #[arg(short, long)]
    pub input: PathBuf,

    /// Worksheet index or name (Excel input)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Zero-based column holding x
    #[arg(long, default_value_t = 0)]
    pub x_col: usize,

    /// Zero-based column holding y
    #[arg(long, default_value_t = 1)]
    pub y_col: usize,

    /// The first row holds data, not headers
    #[arg(long)]
    pub no_header: bool,

    /// Points to interpolate at, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, conflicts_with = "at_file")]
    pub at: Vec<f64>,

    /// Text file with one point per line
    #[arg(long)]
    pub at_file: Option<PathBuf>,

    /// Interpolation methods (PiecewiseLinear, CubicSpline, Pchip, Akima1D, B-splines)
    #[arg(short, long, num_args = 1..)]
    pub method: Vec<String>,

    /// Interpolate in log-log space
    #[arg(long)]
    pub log: bool,

    /// Drop non-positive points instead of failing on log scale
    #[arg(long)]
    pub drop_invalid: bool,

    /// Write the table to a CSV or Excel file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the interpolate command
pub fn run(args: &InterpolateArgs, config: &SpectroConfig) -> Result<InterpolationTable> {
    require_file(&args.input)?;

    let points = query_points(args)?;
    let methods = methods(args, config)?;
    let scale = if args.log || config.interpolation.log_scale {
        Scale::Log
    } else {
        Scale::Linear
    };
    let policy = if args.drop_invalid {
        LogDomainPolicy::Drop
    } else {
        LogDomainPolicy::Reject
    };

    let options = ReadOptions::default()
        .with_sheet(args.sheet.as_deref().map(SheetRef::from).unwrap_or_default())
        .with_columns(args.x_col, args.y_col)
        .with_header(!args.no_header);
    let raw = read_file(&args.input, &options)?;
    let data = raw.dropna();
    if data.len() < raw.len() {
        warn!(dropped = raw.len() - data.len(), "Rows with missing values dropped");
    }

    info!(
        input = %args.input.display(),
        samples = data.len(),
        points = points.len(),
        ?scale,
        "Interpolating"
    );

    let method_options = MethodOptions::default().with_log_policy(policy);
    let mut table = InterpolationTable::new(points.clone());
    for method in methods {
        let values = data.interpolate_with(&points, method, &method_options, scale)?;
        table.push(method, values);
    }

    match &args.output {
        Some(path) => {
            write_table(path, &table)?;
            info!(output = %path.display(), "Interpolation table written");
        }
        None => println!("{}", table),
    }

    Ok(table)
}

fn query_points(args: &InterpolateArgs) -> Result<Vec<f64>> {
    let points = match &args.at_file {
        Some(path) => {
            require_file(path)?;
            read_whitespace_table(path, 1)?
                .column(0)
                .map(<[f64]>::to_vec)
                .unwrap_or_default()
        }
        None => args.at.clone(),
    };
    if points.is_empty() {
        return Err(CliError::invalid_argument(
            "no interpolation points: use --at or --at-file",
        ));
    }
    Ok(points)
}

fn methods(args: &InterpolateArgs, config: &SpectroConfig) -> Result<Vec<Method>> {
    if args.method.is_empty() {
        return Ok(vec![config.default_method()]);
    }
    args.method
        .iter()
        .map(|name| name.parse::<Method>().map_err(CliError::from))
        .collect()
}
