//! `word_list`: load and preprocess the dictionary for the grid searcher
//!
//! Word lists come either from a file (native builds) or from an in-memory string
//! (the WebAssembly build fetches the file in JavaScript and hands us the text).
//!
//! Two line formats are accepted so that both plain lists and scored crossword
//! lists work:
//! - `word`: always kept.
//! - `word;score`: kept only if `score` parses and is at least `min_score`.
//!
//! Blank lines and lines starting with `#` are skipped. Entries are uppercased,
//! deduplicated, and sorted alphabetically.

/// A processed word list, ready to feed into [`crate::lexicon::Lexicon::build`].
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Uppercase words, sorted and deduplicated.
    pub entries: Vec<String>,
}

impl WordList {
    /// Parse a word list from an in-memory string. WASM-safe.
    #[must_use]
    pub fn parse_from_str(contents: &str, min_score: i32) -> WordList {
        let mut entries: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();

                if line.is_empty() || line.starts_with('#') {
                    return None;
                }

                let word = match line.split_once(';') {
                    Some((word_raw, score_raw)) => {
                        let score: i32 = score_raw.trim().parse().ok()?;
                        if score < min_score {
                            return None;
                        }
                        word_raw.trim()
                    }
                    None => line,
                };

                (!word.is_empty()).then(|| word.to_uppercase())
            })
            .collect();

        // dedup() only drops adjacent duplicates
        entries.sort();
        entries.dedup();

        WordList { entries }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        min_score: i32,
    ) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e)
            )
        })?;

        Ok(Self::parse_from_str(&data, min_score))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
