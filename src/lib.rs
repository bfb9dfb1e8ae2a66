// Reusable library API, visible to both CLI and WASM builds
pub mod boggle_char;
pub mod errors;
pub mod grid;
pub mod lexicon;
pub mod log;
pub mod solver;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use errors::GridError;
pub use grid::{is_valid_grid, Grid};
pub use lexicon::Lexicon;
pub use solver::{solve_board, Searcher, SolveResult};
