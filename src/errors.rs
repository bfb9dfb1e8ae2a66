//! Error types for grid construction, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (G001-G004) for documentation lookup:
//!
//! - G001: `EmptyGrid` (Grid has no rows)
//! - G002: `EmptyRow` (A row has no cells)
//! - G003: `RaggedRows` (Rows have differing lengths)
//! - G004: `InvalidCell` (A cell is not exactly one character)
//!
//! # Examples
//!
//! ```
//! use boggle::errors::GridError;
//! use boggle::solver::Searcher;
//!
//! match Searcher::new(&[vec!["A", "B", "C"], vec!["D", "E"]]) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!         assert!(matches!(e, GridError::RaggedRows { row: 1, expected: 3, found: 2 }));
//!     }
//!     Ok(_) => unreachable!("ragged grids are rejected"),
//! }
//! ```

/// Why a raw grid could not be turned into a [`crate::grid::Grid`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid has no rows")]
    EmptyGrid,

    #[error("Row {row} has no cells")]
    EmptyRow { row: usize },

    #[error("Row {row} has {found} cells but row 0 has {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid cell \"{cell}\" at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, cell: String },
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "G001",
            GridError::EmptyRow { .. } => "G002",
            GridError::RaggedRows { .. } => "G003",
            GridError::InvalidCell { .. } => "G004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "Grid has no rows",
            GridError::EmptyRow { .. } => "A row has no cells",
            GridError::RaggedRows { .. } => "Rows have differing lengths",
            GridError::InvalidCell { .. } => "A cell is not exactly one character",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "The grid must contain at least one row. An empty grid is rejected rather than searched, so callers can tell malformed input apart from a grid that simply contains no words.",
            GridError::EmptyRow { .. } => "Every row must contain at least one cell. Empty rows are reported before any length mismatch.",
            GridError::RaggedRows { .. } => "All rows must have the same number of cells as the first row. Jagged grids are rejected, never padded.",
            GridError::InvalidCell { .. } => "Each cell holds a single letter whose uppercase form is also a single letter (so `ß`, which uppercases to \"SS\", is rejected). Substitution tiles are written as their base letter (`Q` for \"QU\", `S` for \"ST\").",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::EmptyGrid => Some("Example: pass rows such as 'CAT' 'ORE' 'DSN'"),
            GridError::EmptyRow { .. } => Some("Remove the empty row or fill it with letters"),
            GridError::RaggedRows { .. } => Some("Make every row the same length (e.g., a 4x4 grid has four rows of four letters)"),
            GridError::InvalidCell { .. } => Some("Write one letter per cell; use 'Q' rather than 'QU'"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
