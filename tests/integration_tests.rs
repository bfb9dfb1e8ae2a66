//! Integration tests for the Boggle grid solver.
//!
//! These tests run the whole pipeline (word list → lexicon, grid text → searcher,
//! solve) and check the results against an independent per-word path checker.

use std::collections::HashSet;

use boggle::errors::GridError;
use boggle::grid::{is_valid_grid, Grid};
use boggle::lexicon::Lexicon;
use boggle::solver::{solve_board, Searcher};
use boggle::word_list::WordList;

/// Load the test word list from fixtures
fn load_test_word_list(min_score: i32) -> WordList {
    WordList::load_from_path("tests/fixtures/test_word_list.txt", min_score)
        .expect("Failed to read test word list")
}

/// Grid from `/`-separated rows, e.g. `"CAT/ORE/DSN"`
fn grid(board: &str) -> Grid {
    Grid::parse_from_str(&board.replace('/', "\n")).expect("test board should be valid")
}

/// Does some simple path on `grid` spell exactly `word` (with Q→QU, S→ST)?
///
/// Matches the word cell by cell instead of enumerating grid strings, so it
/// shares no code with the searcher.
fn traceable(grid: &Grid, word: &str) -> bool {
    fn expand(letter: char) -> String {
        match letter {
            'Q' => "QU".to_string(),
            'S' => "ST".to_string(),
            other => other.to_string(),
        }
    }

    fn walk(grid: &Grid, rest: &str, row: usize, col: usize, used: &mut Vec<(usize, usize)>) -> bool {
        let Some(letter) = grid.get(row, col) else {
            return false;
        };
        if used.contains(&(row, col)) {
            return false;
        }
        let tile = expand(letter);
        let Some(remaining) = rest.strip_prefix(tile.as_str()) else {
            return false;
        };
        if remaining.is_empty() {
            return true;
        }
        used.push((row, col));
        let found = grid
            .neighbors(row, col)
            .any(|(r, c)| walk(grid, remaining, r, c, used));
        used.pop();
        found
    }

    (0..grid.rows()).any(|r| {
        (0..grid.cols()).any(|c| walk(grid, word, r, c, &mut Vec::new()))
    })
}

/// The words of `entries` (length ≥ 3) that `traceable` accepts, sorted.
fn expected_words(grid: &Grid, entries: &[String]) -> Vec<String> {
    let mut words: Vec<String> = entries
        .iter()
        .map(|w| w.to_uppercase())
        .filter(|w| w.chars().count() >= 3 && traceable(grid, w))
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    words.sort();
    words
}

#[cfg(test)]
mod end_to_end {
    use super::*;

    #[test]
    fn test_three_by_three_example() {
        let words = solve_board(
            &[["D", "E", "F"], ["E", "A", "B"], ["E", "B", "C"]],
            ["DEF", "EAB", "EBC"],
        ).unwrap();
        assert_eq!(words, vec!["DEF", "EAB", "EBC"]);
    }

    #[test]
    fn test_fixture_board() {
        let word_list = load_test_word_list(0);
        let lexicon = Lexicon::build(&word_list.entries);
        let words = Searcher::from_grid(grid("TEA/ORN/DIE")).solve(&lexicon);

        assert_eq!(words, vec![
            "ARE", "ART", "DINE", "DINER", "DIRE", "DIRT", "DOTE", "EAR", "ERA", "ERE",
            "INERT", "NEAR", "NET", "ORE", "RID", "RIOT", "ROD", "ROE", "ROT", "ROTE",
            "TEA", "TEAR", "TEN", "TOE", "TORE", "TORN", "TRIO",
        ]);
    }

    #[test]
    fn test_fixture_board_with_score_filter() {
        let all = load_test_word_list(0);
        let filtered = load_test_word_list(50);
        assert!(filtered.len() < all.len());

        let words = Searcher::from_grid(grid("TEA/ORN/DIE"))
            .solve(&Lexicon::build(&filtered.entries));

        // DINER and ERA carry scores below 50 in the fixture
        assert!(!words.contains(&"DINER".to_string()));
        assert!(!words.contains(&"ERA".to_string()));
        assert!(words.contains(&"DINE".to_string()));
        assert_eq!(words.len(), 25);
    }

    #[test]
    fn test_four_by_four_with_q_and_s() {
        let word_list = load_test_word_list(0);
        let lexicon = Lexicon::build(&word_list.entries);
        let words = Searcher::from_grid(grid("QUIT/SEAT/RENT/STOP")).solve(&lexicon);

        assert_eq!(words, vec![
            "EAT", "ERE", "ERST", "NEAT", "NEST", "NET", "NOTE", "ONE", "QUEST", "REST",
            "TAN", "TEA", "TEN", "TENT", "TIE", "TIER", "TOE", "TON", "TONE",
        ]);
    }
}

#[cfg(test)]
mod substitution_tiles {
    use super::*;

    #[test]
    fn test_q_cell_contributes_qu() {
        let words = solve_board(&[["Q", "U"], ["A", "T"]], ["QUAT"]).unwrap();
        assert_eq!(words, vec!["QUAT"]);
    }

    #[test]
    fn test_literal_u_cell_is_not_needed_after_q() {
        // QUIT uses Q (as "QU"), I, T and never touches a U cell
        let words = solve_board(&[["Q", "I"], ["X", "T"]], ["quit", "qit"]).unwrap();
        assert_eq!(words, vec!["QUIT"]);
    }

    #[test]
    fn test_s_cell_always_reads_st() {
        let words = solve_board(&[["S", "A"], ["T", "R"]], ["star", "sat", "stat", "rat", "tar", "arts", "art"]).unwrap();
        assert_eq!(words, vec!["ART", "RAT", "STAR", "STAT", "TAR"]);
    }

    #[test]
    fn test_substituted_cell_used_once() {
        // QUQU would need the Q cell twice
        let words = solve_board(&[["Q", "A"]], ["ququ", "qua"]).unwrap();
        assert_eq!(words, vec!["QUA"]);
    }
}

#[cfg(test)]
mod boundaries {
    use super::*;

    #[test]
    fn test_two_letter_word_never_reported() {
        let words = solve_board(&[["A", "T"]], ["at"]).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn test_two_letter_prefix_still_explored() {
        let words = solve_board(&[["A", "T", "E"]], ["at", "ate"]).unwrap();
        assert_eq!(words, vec!["ATE"]);
    }

    #[test]
    fn test_single_letter_entries_ignored() {
        let words = solve_board(&[["A"]], ["a"]).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn test_single_row_and_single_column() {
        let row = solve_board(&[["C", "A", "T"]], ["cat", "tac", "act"]).unwrap();
        assert_eq!(row, vec!["CAT", "TAC"]);

        let column = solve_board(&[["C"], ["A"], ["T"]], ["cat", "tac", "act"]).unwrap();
        assert_eq!(column, vec!["CAT", "TAC"]);
    }

    #[test]
    fn test_diagonal_adjacency() {
        // C-T and A-X only touch diagonally
        let words = solve_board(&[["C", "X"], ["A", "T"]], ["cat", "act", "tax"]).unwrap();
        assert_eq!(words, vec!["ACT", "CAT", "TAX"]);
    }

    #[test]
    fn test_no_wraparound() {
        // T at the end of the row is not adjacent to C at the start
        let words = solve_board(&[["T", "X", "C", "A"]], ["cat"]).unwrap();
        assert!(words.is_empty());
    }
}

#[cfg(test)]
mod invalid_grids {
    use super::*;

    #[test]
    fn test_ragged_grid() {
        let raw = vec![vec!["A", "B", "C"], vec!["D", "E"], vec!["F", "G", "H"]];
        assert!(!is_valid_grid::<_, &str>(&raw));
        let result = solve_board(&raw, ["abc"]);
        assert_eq!(result, Err(GridError::RaggedRows { row: 1, expected: 3, found: 2 }));
    }

    #[test]
    fn test_empty_grid() {
        let raw: Vec<Vec<String>> = Vec::new();
        assert!(!is_valid_grid::<_, String>(&raw));
        assert_eq!(Searcher::new(&raw).unwrap_err(), GridError::EmptyGrid);
    }

    #[test]
    fn test_empty_row() {
        let raw = vec![vec!["A", "B"], vec![]];
        let err = Searcher::new(&raw).unwrap_err();
        assert_eq!(err, GridError::EmptyRow { row: 1 });
        assert_eq!(err.code(), "G002");
    }

    #[test]
    fn test_invalid_grid_differs_from_no_words() {
        let invalid = solve_board(&[vec!["A"], vec!["B", "C"]], ["abc"]);
        let no_words = solve_board(&[["A", "B"], ["C", "D"]], ["xyz"]);
        assert!(invalid.is_err());
        assert_eq!(no_words, Ok(Vec::new()));
    }

    #[test]
    fn test_grid_text_errors() {
        assert_eq!(Grid::parse_from_str("CAT\nDO\nPIG").unwrap_err().code(), "G003");
        assert_eq!(Grid::parse_from_str("").unwrap_err().code(), "G001");
        assert_eq!(Grid::parse_from_str("QU A\nT E").unwrap_err().code(), "G004");
    }
}

#[cfg(test)]
mod properties {
    use super::*;

    const BOARDS: &[&str] = &[
        "TEA/ORN/DIE",
        "CATS/ORES/DENT/LIAR",
        "QUIT/SEAT/RENT/STOP",
        "SAT/ERI/NOD",
        "ABC/DEF",
        "R/O/T/E",
    ];

    #[test]
    fn test_sound_and_complete_against_path_checker() {
        let word_list = load_test_word_list(0);
        let lexicon = Lexicon::build(&word_list.entries);

        for board in BOARDS {
            let g = grid(board);
            let words = Searcher::from_grid(g.clone()).solve(&lexicon);
            assert_eq!(words, expected_words(&g, &word_list.entries), "board {board}");
        }
    }

    #[test]
    fn test_results_are_dictionary_words_of_min_length() {
        let word_list = load_test_word_list(0);
        let lexicon = Lexicon::build(&word_list.entries);

        for board in BOARDS {
            for word in Searcher::from_grid(grid(board)).solve(&lexicon) {
                assert!(lexicon.is_word(&word), "{word} is not in the lexicon");
                assert!(word.chars().count() >= 3, "{word} is too short");
            }
        }
    }

    #[test]
    fn test_sorted_without_duplicates() {
        let word_list = load_test_word_list(0);
        let lexicon = Lexicon::build(&word_list.entries);

        for board in BOARDS {
            let words = Searcher::from_grid(grid(board)).solve(&lexicon);
            assert!(words.windows(2).all(|w| w[0] < w[1]), "board {board}: {words:?}");
        }
    }

    #[test]
    fn test_deterministic_across_searchers_and_calls() {
        let word_list = load_test_word_list(0);
        let lexicon = Lexicon::build(&word_list.entries);

        for board in BOARDS {
            let a = Searcher::from_grid(grid(board));
            let b = Searcher::from_grid(grid(board));
            let first = a.solve(&lexicon);
            assert_eq!(first, a.solve(&lexicon));
            assert_eq!(first, b.solve(&lexicon));
        }
    }

    #[test]
    fn test_lexicon_order_and_case_do_not_matter() {
        let word_list = load_test_word_list(0);
        let forward = Lexicon::build(&word_list.entries);
        let reversed_lower = Lexicon::build(word_list.entries.iter().rev().map(|w| w.to_lowercase()));

        let searcher = Searcher::from_grid(grid("CATS/ORES/DENT/LIAR"));
        assert_eq!(searcher.solve(&forward), searcher.solve(&reversed_lower));
    }

    #[test]
    fn test_searchers_on_separate_threads() {
        let word_list = load_test_word_list(0);
        let lexicon = std::sync::Arc::new(Lexicon::build(&word_list.entries));

        let handles: Vec<_> = BOARDS
            .iter()
            .map(|board| {
                let lexicon = std::sync::Arc::clone(&lexicon);
                let searcher = Searcher::from_grid(grid(board));
                std::thread::spawn(move || searcher.solve(&lexicon))
            })
            .collect();

        for (board, handle) in BOARDS.iter().zip(handles) {
            let threaded = handle.join().expect("search thread panicked");
            assert_eq!(threaded, Searcher::from_grid(grid(board)).solve(&lexicon));
        }
    }
}
