use crate::error::{NotebookError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Major version of the notebook interchange format this crate targets
pub const NBFORMAT_MAJOR: u32 = 4;

/// Top-level notebook document
///
/// Parsed leniently: unknown keys are ignored, a missing `cells` key is an
/// empty sequence, and cell structure is not validated beyond what the
/// fields below require.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Notebook {
    /// Major schema version (`nbformat`), if present
    #[serde(default)]
    pub nbformat: Option<u32>,
    /// Minor schema version, defaults to 0
    #[serde(default)]
    pub nbformat_minor: u32,
    /// Ordered sequence of cells
    #[serde(default)]
    pub cells: Vec<Cell>,
    /// Notebook-level metadata, passed through unchanged
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// A single notebook cell as it appears on disk
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Cell {
    /// Type tag ("code", "markdown", "raw"), `None` when absent
    #[serde(default)]
    pub cell_type: Option<String>,
    /// Source text, either a single string or a list of fragments
    #[serde(default)]
    pub source: SourceText,
    /// Cell metadata, defaults to an empty mapping
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// The two on-disk shapes of a cell's `source` field
///
/// nbformat 4 stores source either as one string or as an ordered list of
/// line fragments. Both collapse to the same concatenated string via
/// [`SourceText::join`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SourceText {
    /// Source stored as a single string
    Single(String),
    /// Source stored as an ordered list of string fragments
    Fragments(Vec<String>),
}

impl Default for SourceText {
    fn default() -> Self {
        Self::Fragments(Vec::new())
    }
}

impl SourceText {
    /// Collapse into a single string, joining fragments with no separator
    #[must_use]
    pub fn join(&self) -> String {
        match self {
            Self::Single(s) => s.clone(),
            Self::Fragments(parts) => parts.concat(),
        }
    }
}

/// Normalized projection of a cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedCell {
    /// Type tag, `None` when the cell carried none
    pub cell_type: Option<String>,
    /// Source collapsed to a single string
    pub source: String,
    /// Cell metadata, empty when the cell carried none
    pub metadata: Map<String, Value>,
}

/// Load a notebook from a file path
///
/// The path must refer to an existing file; parsing is never attempted
/// otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`NotFound`, carrying the path)
/// - The file cannot be read as UTF-8 text (I/O error)
/// - The notebook JSON is malformed or its version is not supported
#[must_use = "this function returns a parsed notebook that should be processed"]
pub fn load_notebook<P: AsRef<Path>>(path: P) -> Result<Notebook> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(NotebookError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    parse_notebook_from_str(&content)
}

/// Parse a notebook from a string
///
/// # Errors
///
/// Returns an error if the notebook JSON is malformed, the `nbformat`
/// field is missing, or the major version is not 4.
#[must_use = "this function returns a parsed notebook that should be processed"]
pub fn parse_notebook_from_str(content: &str) -> Result<Notebook> {
    let notebook: Notebook = serde_json::from_str(content)?;

    match notebook.nbformat {
        Some(NBFORMAT_MAJOR) => Ok(notebook),
        Some(major) => Err(NotebookError::UnsupportedVersion {
            major,
            minor: notebook.nbformat_minor,
        }),
        None => Err(NotebookError::InvalidFormat(
            "missing nbformat version field".to_string(),
        )),
    }
}

/// Extract all cells from a notebook in original order
///
/// Pure projection: each cell's source collapses to a single string and
/// its metadata passes through unchanged. The result has the same length
/// and order as `notebook.cells`.
#[must_use]
pub fn extract_cells(notebook: &Notebook) -> Vec<ExtractedCell> {
    notebook
        .cells
        .iter()
        .map(|cell| ExtractedCell {
            cell_type: cell.cell_type.clone(),
            source: cell.source.join(),
            metadata: cell.metadata.clone(),
        })
        .collect()
}
