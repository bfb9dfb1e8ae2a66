//! Generate error code documentation from the source of truth (the error enum).
//!
//! Codes, descriptions, details and help text are read directly from
//! `GridError` via its `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use boggle::errors::GridError;

/// One example of each `GridError` variant
fn all_grid_error_variants() -> Vec<GridError> {
    vec![
        GridError::EmptyGrid,
        GridError::EmptyRow { row: 1 },
        GridError::RaggedRows { row: 1, expected: 3, found: 2 },
        GridError::InvalidCell { row: 0, col: 2, cell: "QU".to_string() },
    ]
}

/// Render the documentation block for a single error.
fn error_section(error: &GridError) -> String {
    let mut out = format!("### {}: {}\n\n", error.code(), error.description());
    out.push_str(&format!("**Details:** {}\n\n", error.details()));

    if let Some(help_text) = error.help() {
        out.push_str(&format!("**How to fix:**\n```\n{help_text}\n```\n\n"));
    }

    out.push_str(&format!("**Example error message:**\n```\n{error}\n```\n\n"));
    out.push_str(&format!("**Detailed format:**\n```\n{}\n```\n\n", error.display_detailed()));
    out.push_str("---\n");
    out
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Grid Errors\n");
    println!("Errors raised while validating a grid, before any search runs.\n");
    for error in all_grid_error_variants() {
        println!("{}", error_section(&error));
    }

    println!("## Error Display Formats\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```");
}
