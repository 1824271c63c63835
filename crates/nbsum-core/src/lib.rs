//! # nbsum-core
//!
//! Jupyter Notebook (.ipynb) loading and cell extraction for nbsum.
//!
//! This crate parses notebook files (nbformat 4.x) leniently and projects
//! their cells into a normalized form:
//! - Cell type tag (code, markdown, raw), kept optional
//! - Source text, collapsed from fragment lists into a single string
//! - Cell metadata, passed through unchanged
//!
//! ## Example
//!
//! ```no_run
//! use nbsum_core::{extract_cells, load_notebook};
//!
//! let notebook = load_notebook("example.ipynb")?;
//! for cell in extract_cells(&notebook) {
//!     println!("{}: {}", cell.cell_type.as_deref().unwrap_or("unknown"), cell.source);
//! }
//! # Ok::<(), nbsum_core::NotebookError>(())
//! ```

/// Error types for notebook loading and extraction
pub mod error;
/// Jupyter notebook (ipynb) loader and cell extractor
pub mod ipynb;

pub use error::{NotebookError, Result};
pub use ipynb::{
    extract_cells, load_notebook, parse_notebook_from_str, Cell, ExtractedCell, Notebook,
    SourceText, NBFORMAT_MAJOR,
};
