//! The grid searcher: depth-first traversal with prefix pruning.
//!
//! The traversal keeps its own stack of path frames instead of recursing, so a
//! very long dictionary word on a large grid cannot exhaust the thread stack
//! (wasm32 stacks in particular are small).
//!
//! # Errors
//!
//! Only grid construction can fail, with a [`GridError`] (codes G001–G004).
//! Once a [`Searcher`] exists, [`Searcher::solve`] always succeeds.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use boggle::lexicon::Lexicon;
//! use boggle::solver::Searcher;
//!
//! let lexicon = Lexicon::build(["def", "eab", "ebc", "fed", "xyz"]);
//! let searcher = Searcher::new(&[["D", "E", "F"], ["E", "A", "B"], ["E", "B", "C"]])?;
//!
//! assert_eq!(searcher.solve(&lexicon), vec!["DEF", "EAB", "EBC", "FED"]);
//! # Ok::<(), boggle::errors::GridError>(())
//! ```
//!
//! ## Substitution Tiles
//!
//! A `Q` cell reads as "QU" and an `S` cell reads as "ST":
//!
//! ```
//! use boggle::solver::solve_board;
//!
//! let words = solve_board(&[["Q", "U"], ["A", "T"]], ["quat", "qat"])?;
//! assert_eq!(words, vec!["QUAT"]);
//! # Ok::<(), boggle::errors::GridError>(())
//! ```
//!
//! ## Telling Bad Input Apart From No Words
//!
//! ```
//! use boggle::errors::GridError;
//! use boggle::solver::solve_board;
//!
//! let ragged = solve_board(&[vec!["A", "B", "C"], vec!["D", "E"]], ["abc"]);
//! assert!(matches!(ragged, Err(GridError::RaggedRows { .. })));
//!
//! let none = solve_board(&[["A", "B"], ["C", "D"]], ["xyz"]);
//! assert_eq!(none, Ok(vec![]));
//! ```

use crate::boggle_char::{BoggleChar, MIN_WORD_LEN};
use crate::errors::GridError;
use crate::grid::{Grid, DIRECTIONS};
use crate::lexicon::Lexicon;
use instant::Instant;
use log::{debug, info};
use std::collections::HashSet;
use std::time::Duration;

/// Counters gathered during one solve call. Diagnostics only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Visits that passed the bounds/visited guard.
    pub cells_entered: usize,
    /// Visits cut short because the path was neither a word nor a prefix.
    pub branches_pruned: usize,
    /// Wall-clock time of the whole search.
    pub elapsed: Duration,
}

/// Words found on a grid plus the stats of the run that found them.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Distinct uppercase words of length ≥ 3, sorted by code point.
    pub words: Vec<String>,
    pub stats: SearchStats,
}

impl IntoIterator for SolveResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// A validated grid, ready to be searched against any number of lexicons.
///
/// The searcher holds no per-search state; the visited mask, path buffer, work
/// stack and found words are created fresh by each solve call, so `solve` takes `&self`.
#[derive(Debug, Clone)]
pub struct Searcher {
    grid: Grid,
}

/// One cell on the current path, plus how far its neighbour scan has got.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Row-major offset of the cell.
    idx: usize,
    /// Index into [`DIRECTIONS`] of the next neighbour to try.
    next_dir: usize,
    /// Length of `path` before this cell's letters were appended.
    mark: usize,
}

/// State owned by one solve call.
struct SearchCtx<'a> {
    grid: &'a Grid,
    lexicon: &'a Lexicon,
    /// Row-major; `true` exactly for the cells on the current path.
    visited: Vec<bool>,
    /// Letters along the current path, substitutions included.
    path: String,
    /// Explicit work stack, one frame per cell on the path.
    stack: Vec<Frame>,
    found: HashSet<String>,
    stats: SearchStats,
}

impl<'a> SearchCtx<'a> {
    fn new(grid: &'a Grid, lexicon: &'a Lexicon) -> Self {
        Self {
            grid,
            lexicon,
            visited: vec![false; grid.len()],
            path: String::new(),
            stack: Vec::new(),
            found: HashSet::new(),
            stats: SearchStats::default(),
        }
    }

    /// Try to extend the current path into cell `idx`.
    ///
    /// On success the cell is marked and a frame is pushed; otherwise `path` and
    /// `visited` are left exactly as they were.
    fn enter(&mut self, idx: usize) {
        if self.visited[idx] {
            return;
        }
        self.stats.cells_entered += 1;

        let mark = self.path.len();
        let letter = self.grid.cell_at(idx);
        self.path.push(letter);
        if let Some(extra) = letter.substitution() {
            self.path.push(extra);
        }

        let is_word = self.lexicon.is_word(&self.path);
        if !is_word && !self.lexicon.is_prefix(&self.path) {
            self.stats.branches_pruned += 1;
            self.path.truncate(mark);
            return;
        }

        if is_word && self.path.chars().count() >= MIN_WORD_LEN && !self.found.contains(&self.path) {
            self.found.insert(self.path.clone());
        }

        self.visited[idx] = true;
        self.stack.push(Frame { idx, next_dir: 0, mark });
    }

    /// Explore every path that starts at cell `start`.
    ///
    /// Depth-first, with the call stack replaced by `self.stack` so path length is
    /// bounded by memory only. `path`, `visited` and `stack` are empty again on return.
    fn search_from(&mut self, start: usize) {
        self.enter(start);

        while let Some(frame) = self.stack.last_mut() {
            let Some(&dir) = DIRECTIONS.get(frame.next_dir) else {
                // every neighbour tried: backtrack out of this cell
                let Frame { idx, mark, .. } = *frame;
                self.stack.pop();
                self.visited[idx] = false;
                self.path.truncate(mark);
                continue;
            };
            frame.next_dir += 1;
            let from = frame.idx;

            if let Some(next) = self.grid.neighbor_offset(from, dir) {
                self.enter(next);
            }
        }
    }
}

impl Searcher {
    /// Validate `raw` and build a searcher over it.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] for an empty grid, an empty row, ragged rows, or a
    /// cell that is not a single character.
    pub fn new<R, S>(raw: &[R]) -> Result<Searcher, GridError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        Ok(Searcher::from_grid(Grid::new::<R, S>(raw)?))
    }

    /// Build a searcher over an already-validated grid.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Searcher {
        debug!("searcher grid ({}x{}):\n{grid}", grid.rows(), grid.cols());
        Searcher { grid }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Every distinct word of `lexicon` (length ≥ 3) traceable on the grid, sorted.
    #[must_use]
    pub fn solve(&self, lexicon: &Lexicon) -> Vec<String> {
        self.solve_with_stats(lexicon).words
    }

    /// Like [`Searcher::solve`], also returning the search counters.
    #[must_use]
    pub fn solve_with_stats(&self, lexicon: &Lexicon) -> SolveResult {
        let start = Instant::now();
        let mut ctx = SearchCtx::new(&self.grid, lexicon);

        // row-major start order
        for start in 0..self.grid.len() {
            debug_assert!(ctx.path.is_empty(), "path must be empty between starting cells");
            ctx.search_from(start);
        }

        debug_assert!(ctx.visited.iter().all(|v| !v), "visited mask must be clear after a search");

        let SearchCtx { found, mut stats, .. } = ctx;
        let mut words: Vec<String> = found.into_iter().collect();
        words.sort_unstable();
        stats.elapsed = start.elapsed();

        debug!(
            "search stats: {} cells entered, {} branches pruned, {:.3}ms",
            stats.cells_entered,
            stats.branches_pruned,
            stats.elapsed.as_secs_f64() * 1000.0
        );
        info!(
            "found {} words on a {}x{} grid ({} in lexicon)",
            words.len(),
            self.grid.rows(),
            self.grid.cols(),
            lexicon.len()
        );

        SolveResult { words, stats }
    }
}

/// Build a lexicon from `words`, a searcher from `raw_grid`, and solve.
///
/// # Errors
///
/// Returns a [`GridError`] if `raw_grid` is not a valid grid.
pub fn solve_board<R, S, I, W>(raw_grid: &[R], words: I) -> Result<Vec<String>, GridError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    let searcher = Searcher::new::<R, S>(raw_grid)?;
    let lexicon = Lexicon::build(words);
    Ok(searcher.solve(&lexicon))
}
