//! Segment serialization (CSV and JSON).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use isoline_core::LineSegment;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

/// CSV header row.
pub const CSV_HEADER: &str = "start_x,start_y,end_x,end_y";

/// Write segments to `path` in the requested format.
pub fn write(path: &Path, format: OutputFormat, segments: &[LineSegment]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Csv => write_csv(&mut writer, segments)?,
        OutputFormat::Json => serde_json::to_writer_pretty(&mut writer, segments)?,
    }

    writer.flush()?;
    Ok(())
}

fn write_csv(writer: &mut impl Write, segments: &[LineSegment]) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for segment in segments {
        writeln!(
            writer,
            "{},{},{},{}",
            segment.start.x, segment.start.y, segment.end.x, segment.end.y
        )?;
    }
    Ok(())
}
