use crate::errors::GridError;
use crate::grid::Grid;
use crate::lexicon::Lexicon;
use crate::log::init_logger;
use crate::solver::Searcher;
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "G001", "WASM002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<GridError> for WasmError {
    fn from(e: GridError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(code: &str, what: &str, e: &serde_wasm_bindgen::Error) -> WasmError {
    WasmError {
        code: code.to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
}

/// Force the lazily built lookup tables so the first solve doesn't pay for them.
fn warm_static_tables() {
    let _ = &*crate::boggle_char::SUBSTITUTION_MAP;
    log::debug!("Static tables initialized");
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    warm_static_tables();
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmStats {
    cells_entered: usize,
    branches_pruned: usize,
    elapsed_ms: f64,
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    words: Vec<String>,
    stats: WasmStats,
}

/// JS entry: (grid: string[][], words: string[]) -> { words: string[], stats }
#[wasm_bindgen]
pub fn solve_board_wasm(grid: JsValue, words: JsValue) -> Result<JsValue, JsValue> {
    let rows: Vec<Vec<String>> = serde_wasm_bindgen::from_value(grid).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("grid must be string[][]: {e}"),
        description: "Invalid grid format".to_string(),
        details: "The grid parameter must be a JavaScript array of arrays of one-letter strings.".to_string(),
        help: Some("Example: [['C', 'A'], ['T', 'S']]".to_string()),
    })?;

    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Ensure you're passing a valid string array, e.g., ['cat', 'dog', 'fish']".to_string()),
    })?;

    let searcher = Searcher::new(&rows).map_err(WasmError::from)?;
    let lexicon = Lexicon::build(&words);
    let result = searcher.solve_with_stats(&lexicon);

    let wasm_result = WasmSolveResult {
        stats: WasmStats {
            cells_entered: result.stats.cells_entered,
            branches_pruned: result.stats.branches_pruned,
            elapsed_ms: result.stats.elapsed.as_secs_f64() * 1000.0,
        },
        words: result.words,
    };

    to_value(&wasm_result).map_err(|e| serialization_error("WASM002", "result", &e).into())
}

/// Parse grid text (one row per line) into `string[][]` of uppercase letters.
///
/// # Errors
/// Returns a `JsValue` error carrying the grid error code if the text is not a valid grid.
#[wasm_bindgen]
pub fn parse_grid_text(text: &str) -> Result<JsValue, JsValue> {
    let grid = Grid::parse_from_str(text).map_err(WasmError::from)?;
    let rows: Vec<Vec<String>> = grid
        .iter_rows()
        .map(|row| row.iter().map(char::to_string).collect())
        .collect();

    to_value(&rows).map_err(|e| serialization_error("WASM003", "grid", &e).into())
}

/// Parse a newline-separated word list (`word` or `word;score` lines).
///
/// Returns the surviving uppercase words as a JS array of strings.
#[wasm_bindgen]
pub fn parse_word_list(text: &str, min_score: i32) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text, min_score);
    to_value(&word_list.entries).map_err(|e| serialization_error("WASM004", "word list", &e).into())
}

/// Generate a debug report users can paste into an issue.
#[wasm_bindgen]
pub fn get_debug_info(grid_text: &str, error_message: &str, word_count: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== BOGGLE DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Grid:");
    for line in grid_text.lines() {
        let _ = writeln!(&mut report, "  {line}");
    }
    let _ = writeln!(&mut report, "Word List Size: {word_count}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {user_agent}");
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}
