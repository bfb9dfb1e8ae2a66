use std::collections::HashMap;
use std::sync::LazyLock;

/// Tiles that expand to two characters when appended to a path.
/// A `Q` tile reads as "QU" and an `S` tile reads as "ST".
pub(crate) const SUBSTITUTIONS: [(char, char); 2] = [('Q', 'U'), ('S', 'T')];

/// Shortest word the searcher will report, counted in characters after substitution.
pub const MIN_WORD_LEN: usize = 3;

pub(crate) static SUBSTITUTION_MAP: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| SUBSTITUTIONS.into_iter().collect());

pub(crate) trait BoggleChar {
    /// The extra character this tile contributes, if it is a substitution tile.
    fn substitution(&self) -> Option<char>;
    /// Uppercase form of a raw grid letter, or `None` when uppercasing yields more
    /// than one character (`'ß'` becomes "SS"), since such a tile could never
    /// match the uppercased lexicon.
    fn to_tile(&self) -> Option<char>;
}

impl BoggleChar for char {
    fn substitution(&self) -> Option<char> {
        SUBSTITUTION_MAP.get(self).copied()
    }

    fn to_tile(&self) -> Option<char> {
        let mut upper = self.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => Some(u),
            _ => None,
        }
    }
}
