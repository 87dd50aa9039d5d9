//! Isocontour extraction CLI.
//!
//! Generates a synthetic scalar field, extracts one or more isocontours
//! with the parallel marching-squares engine, reports timing, and writes
//! the segments as CSV or JSON.

mod fields;
mod output;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use isoline_core::{extract_contour, LineSegment};

use fields::FieldKind;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "isoline-cli")]
#[command(about = "Extract isocontours from a synthetic 2D scalar field")]
struct Args {
    /// Grid width in samples
    #[arg(long, default_value = "100")]
    width: usize,

    /// Grid height in samples
    #[arg(long, default_value = "100")]
    height: usize,

    /// Synthetic field to generate
    #[arg(long, value_enum, default_value = "radial")]
    field: FieldKind,

    /// Explicit isolevels (repeatable); overrides --contours
    #[arg(long = "isolevel")]
    isolevels: Vec<f32>,

    /// Number of evenly spaced contour levels to sweep
    #[arg(long, default_value = "1")]
    contours: usize,

    /// Worker count for the parallel traversal (default: all cores)
    #[arg(long)]
    workers: Option<usize>,

    /// RNG seed for the binary field (default: nondeterministic)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path
    #[arg(long, default_value = "lines.csv")]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let workers = args
        .workers
        .unwrap_or_else(|| std::thread::available_parallelism().map_or(1, |n| n.get()));

    info!(
        width = args.width,
        height = args.height,
        field = ?args.field,
        workers,
        "generating scalar field"
    );

    let field = fields::generate(args.field, args.width, args.height, args.seed);

    let isolevels = if args.isolevels.is_empty() {
        fields::default_isolevels(args.field, args.width, args.contours)
    } else {
        args.isolevels.clone()
    };

    // Multi-level sweeps are a plain outer loop; each level is an
    // independent extraction over the same read-only field.
    let start = Instant::now();
    let mut segments: Vec<LineSegment> = Vec::new();
    for &isolevel in &isolevels {
        segments.extend(extract_contour(&field, isolevel, workers)?);
    }
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    info!(
        elapsed_ms,
        segments = segments.len(),
        isolevels = isolevels.len(),
        "extraction complete"
    );

    output::write(&args.output, args.format, &segments)?;
    info!(path = %args.output.display(), "segments written");

    Ok(())
}
