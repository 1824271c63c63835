//! nbsum - Jupyter notebook summary tool
//!
//! Loads a notebook file and prints a one-line-per-cell summary.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use nbsum_core::{extract_cells, load_notebook, NotebookError};
use std::path::PathBuf;

/// Number of source characters shown per cell line
const PREVIEW_CHARS: usize = 50;

#[derive(Parser)]
#[command(
    name = "nbsum",
    version,
    about = "Summarize the cells of a Jupyter notebook"
)]
struct Cli {
    /// Path to the .ipynb file to summarize
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("Loading notebook: {}", cli.input.display());

    let notebook = match load_notebook(&cli.input) {
        Ok(notebook) => notebook,
        Err(e @ NotebookError::NotFound(_)) => {
            eprintln!("{} {e}", "Error:".red().bold());
            eprintln!(
                "{} Check that the file path is correct and the file exists",
                "Help:".cyan().bold()
            );
            std::process::exit(1);
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to load notebook: {}", cli.input.display())
            });
        }
    };

    let cells = extract_cells(&notebook);

    println!();
    println!("Notebook loaded successfully!");
    println!("Total cells: {}", cells.len());
    println!();

    for (i, cell) in cells.iter().enumerate() {
        let cell_type = cell.cell_type.as_deref().unwrap_or("unknown");
        // First 50 chars, not bytes, so multi-byte code points never split
        let preview: String = cell.source.chars().take(PREVIEW_CHARS).collect();
        println!("Cell {} ({cell_type}): {preview}...", i + 1);
    }

    Ok(())
}
