//! sheetcharter: inspect a CSV or Excel file and extract a chart series
//!
//! Run: `sheetcharter sales.csv --x 0 --y 1 --preview`

use anyhow::{Context, Result};
use clap::Parser;
use sheetcharter::data::{
    extract_points, import_file, infer_column_types, preview_column, validate_with,
};
use sheetcharter::settings::ImportSettings;
use sheetcharter::types::SelectionRequest;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sheetcharter")]
#[command(version)]
#[command(about = "Extract chart points from CSV/Excel files", long_about = None)]
struct Cli {
    /// CSV, XLSX or XLS file to import
    file: PathBuf,

    /// Column index for the x-axis
    #[arg(long, default_value = "0")]
    x: usize,

    /// Column index for the y-axis
    #[arg(long, default_value = "1")]
    y: usize,

    /// Print a few sample values for every column
    #[arg(long)]
    preview: bool,

    /// Settings file (defaults to the platform config dir)
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => ImportSettings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => ImportSettings::load(),
    };

    let sheet = import_file(&cli.file, &settings)
        .with_context(|| format!("Failed to import {}", cli.file.display()))?;
    let grid = &sheet.data;
    let inference = infer_column_types(grid);

    println!(
        "{} ({} rows, {} columns)",
        sheet.title,
        grid.row_count(),
        inference.len()
    );
    for (index, (name, column_type)) in inference.iter().enumerate() {
        println!("  [{}] {} : {}", index, name, column_type.description());
        if cli.preview {
            let values = preview_column(grid, index, settings.preview_items);
            println!("       {}", values.join(", "));
        }
    }

    let selection = SelectionRequest::new(cli.x, cli.y);
    if let Err(reason) = validate_with(grid, &inference, selection).into_result() {
        println!("Cannot chart x={} y={}: {}", cli.x, cli.y, reason);
        return Ok(());
    }

    let points = extract_points(grid, cli.x, cli.y);
    println!("{} points:", points.len());
    for point in &points {
        println!(
            "  row {:>5}  {}  {}",
            point.source_row_index, point.x_label, point.y_value
        );
    }

    Ok(())
}
