//! The letter grid the searcher walks over.
//!
//! A [`Grid`] is always non-empty and rectangular: construction goes through
//! [`Grid::new`] (from already-split cells) or [`Grid::parse_from_str`] (from text,
//! one row per line), and both reject empty, empty-row, ragged, and malformed input
//! with a [`GridError`]. Letters are uppercased on the way in.

use std::fmt;
use std::str::FromStr;

use crate::boggle_char::BoggleChar;
use crate::errors::GridError;

/// The eight neighbour offsets (row delta, column delta).
pub(crate) const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A validated, immutable `rows × cols` grid of uppercase letters (row-major).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

/// Check the shape of a raw grid without building it.
///
/// Returns the common row length on success. Empty rows are reported before length
/// mismatches.
fn check_shape<R, S>(raw: &[R]) -> Result<usize, GridError>
where
    R: AsRef<[S]>,
{
    let Some(first) = raw.first() else {
        return Err(GridError::EmptyGrid);
    };

    if let Some(row) = raw.iter().position(|r| r.as_ref().is_empty()) {
        return Err(GridError::EmptyRow { row });
    }

    let expected = first.as_ref().len();
    for (row, r) in raw.iter().enumerate() {
        let found = r.as_ref().len();
        if found != expected {
            return Err(GridError::RaggedRows { row, expected, found });
        }
    }

    Ok(expected)
}

/// `true` iff `raw` is non-empty, has no empty row, and all rows share one length.
pub fn is_valid_grid<R, S>(raw: &[R]) -> bool
where
    R: AsRef<[S]>,
{
    check_shape::<R, S>(raw).is_ok()
}

impl Grid {
    /// Build a grid from rows of single-character cells (any case).
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the grid is empty, a row is empty, the rows differ
    /// in length, or a cell is not exactly one character (before and after
    /// uppercasing, so `"ß"` is rejected just like `"QU"`).
    pub fn new<R, S>(raw: &[R]) -> Result<Grid, GridError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let cols = check_shape::<R, S>(raw)?;
        let mut cells = Vec::with_capacity(raw.len() * cols);

        for (row, r) in raw.iter().enumerate() {
            for (col, cell) in r.as_ref().iter().enumerate() {
                let cell = cell.as_ref();
                let mut chars = cell.chars();
                let tile = match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_tile(),
                    _ => None,
                };
                let Some(tile) = tile else {
                    return Err(GridError::InvalidCell { row, col, cell: cell.to_string() });
                };
                cells.push(tile);
            }
        }

        debug_assert_eq!(cells.len(), raw.len() * cols);
        Ok(Grid { rows: raw.len(), cols, cells })
    }

    /// Parse a grid from text, one row per non-blank line.
    ///
    /// A line containing whitespace or commas is split on them into cells (`"C, A, T"`,
    /// `"C A T"`); any other line contributes one cell per character (`"CAT"`).
    ///
    /// # Errors
    ///
    /// Same as [`Grid::new`]; text with no non-blank lines is [`GridError::EmptyGrid`].
    pub fn parse_from_str(text: &str) -> Result<Grid, GridError> {
        let raw: Vec<Vec<String>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(split_row)
            .collect();

        Grid::new(&raw)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for a constructed grid; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major offset of `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    #[inline]
    pub(crate) fn cell_at(&self, offset: usize) -> char {
        self.cells[offset]
    }

    /// The letter at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.offset(row, col).map(|i| self.cells[i])
    }

    /// Offset of the cell one step from `offset` in direction `(dr, dc)`, or `None`
    /// when that step leaves the grid. All adjacency goes through here.
    #[inline]
    pub(crate) fn neighbor_offset(&self, offset: usize, (dr, dc): (isize, isize)) -> Option<usize> {
        let r = (offset / self.cols).checked_add_signed(dr)?;
        let c = (offset % self.cols).checked_add_signed(dc)?;
        self.offset(r, c)
    }

    /// In-bounds 8-neighbours of `(row, col)`, in [`DIRECTIONS`] order.
    ///
    /// Empty when `(row, col)` itself is off the grid.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let here = self.offset(row, col);
        DIRECTIONS
            .iter()
            .filter_map(move |&dir| self.neighbor_offset(here?, dir))
            .map(move |i| (i / self.cols, i % self.cols))
    }

    /// Rows of the grid as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.cols)
    }
}

/// Split one trimmed text line into cell strings.
fn split_row(line: &str) -> Vec<String> {
    if line.contains(|c: char| c.is_whitespace() || c == ',') {
        line.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|tok| !tok.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        line.chars().map(String::from).collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse_from_str(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().collect();
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
