//! Tally CLI - sheet inspection and editing tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tally_sheets::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about = "Spreadsheet JSON inspection and editing tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a sheet file
    Info {
        /// Input sheet JSON file
        input: PathBuf,
    },

    /// Print one cell's resolved value
    Get {
        /// Input sheet JSON file
        input: PathBuf,

        /// Cell identifier (e.g. B12)
        cell: String,
    },

    /// Set one cell's raw content and write the recomputed sheet back
    Set {
        /// Input sheet JSON file
        input: PathBuf,

        /// Cell identifier (e.g. B12)
        cell: String,

        /// Raw content (empty string clears the cell)
        raw: String,

        /// Output file (default: rewrite the input file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render resolved values as CSV and output to stdout or file
    #[command(alias = "csv")]
    ToCsv {
        /// Input sheet JSON file
        input: PathBuf,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => show_info(&input),
        Commands::Get { input, cell } => get_cell(&input, &cell),
        Commands::Set {
            input,
            cell,
            raw,
            output,
        } => set_cell(&input, &cell, &raw, output.as_deref()),
        Commands::ToCsv {
            input,
            output,
            delimiter,
        } => to_csv(&input, output.as_deref(), delimiter),
    }
}

/// Load a sheet file and resolve its values
fn load(input: &Path) -> Result<Spreadsheet> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;

    let mut sheet = Spreadsheet::new();
    sheet
        .load_sheet(&json)
        .with_context(|| format!("Failed to parse '{}'", input.display()))?;

    Ok(sheet)
}

fn show_info(input: &Path) -> Result<()> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;

    let mut sheet = Spreadsheet::new();
    let stats = sheet
        .load_sheet(&json)
        .with_context(|| format!("Failed to parse '{}'", input.display()))?;

    println!("File: {}", input.display());
    println!("Grid: {} rows x {} columns", sheet.rows(), sheet.cols());
    println!("Cells: {}", stats.cells);
    println!("Formulas: {}", stats.formulas);
    println!("Errors: {}", stats.errors);

    Ok(())
}

fn get_cell(input: &Path, cell: &str) -> Result<()> {
    let sheet = load(input)?;

    let addr: CellAddress = cell
        .parse()
        .with_context(|| format!("Invalid cell identifier '{}'", cell))?;

    println!("{}", sheet.cell_display(&addr));
    Ok(())
}

fn set_cell(input: &Path, cell: &str, raw: &str, output: Option<&Path>) -> Result<()> {
    let mut sheet = load(input)?;

    let addr: CellAddress = cell
        .parse()
        .with_context(|| format!("Invalid cell identifier '{}'", cell))?;

    let stats = sheet.set_cell_raw(addr, raw);
    if stats.errors > 0 {
        eprintln!("Warning: {} formula(s) resolved to ERR", stats.errors);
    }

    let out_path = output.unwrap_or(input);
    std::fs::write(out_path, sheet.export_sheet()?)
        .with_context(|| format!("Failed to write '{}'", out_path.display()))?;

    eprintln!("Wrote '{}'", out_path.display());
    Ok(())
}

fn to_csv(input: &Path, output: Option<&Path>, delimiter: char) -> Result<()> {
    let sheet = load(input)?;

    // Cover the visible grid plus anything materialized outside it
    let (mut max_row, mut max_col) = (sheet.rows(), sheet.cols() as u32);
    for (addr, _) in sheet.sheet().cells() {
        max_row = max_row.max(addr.row + 1);
        max_col = max_col.max(addr.col as u32 + 1);
    }

    let mut csv_output = String::new();
    for row in 0..max_row {
        let mut first = true;
        for col in 0..max_col {
            if !first {
                csv_output.push(delimiter);
            }
            first = false;

            let addr = CellAddress::new(row, col as u16);
            csv_output.push_str(&csv_escape(&sheet.cell_display(&addr), delimiter));
        }
        csv_output.push('\n');
    }

    if let Some(output_path) = output {
        std::fs::write(output_path, &csv_output)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!("Wrote {} rows to '{}'", max_row, output_path.display());
    } else {
        io::stdout()
            .write_all(csv_output.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

/// Quote a field if it contains the delimiter, quotes, or line breaks
fn csv_escape(text: &str, delimiter: char) -> String {
    if text.contains(delimiter) || text.contains('"') || text.contains('\n') || text.contains('\r')
    {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
