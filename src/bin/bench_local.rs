//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! - Loads the word list once, builds the lexicon once, then solves each board
//!   several times and reports the median.
//! - One warm-up solve per board is done (not included in timing).
//! - Printing is kept outside the timed section.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:         `cargo run --bin bench_local --release`
//! - Multiple repeats:        `cargo run --bin bench_local --release -- -r 5`
//! - Print a few words:       `cargo run --bin bench_local --release -- -p 5`

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use boggle::grid::Grid;
use boggle::lexicon::Lexicon;
use boggle::solver::Searcher;
use boggle::word_list::WordList;

/// Simple local benchmark runner: load the word list once, time several boards.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (`word` or `word;score` per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Minimum score filter
    #[arg(short = 'm', long, default_value_t = 50)]
    min_score: i32,

    /// Number of timed runs per board
    #[arg(short = 'r', long, default_value_t = 3)]
    num_repeats: usize,

    /// Print up to this many words from the last run of each board
    #[arg(short = 'p', long, default_value_t = 0)]
    print_limit: usize,
}

/// Boards to time, as grid text (rows separated by `/`).
const BOARDS: &[&str] = &[
    "CATS/ORES/DENT/LIAR",
    "QUIT/SEAT/RENT/STOP",
    "SERSP/ATGLI/NESER/SSTAE/RTINE",
    "AAAAAA/AAAAAA/AAAAAA/AAAAAA/AAAAAA/AAAAAA",
    "ETAOINSHRDLU/ETAOINSHRDLU/ETAOINSHRDLU/ETAOINSHRDLU",
];

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    eprintln!("Loading word list from: {}", cli.word_list);
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list, cli.min_score)?;
    let lexicon = Lexicon::build(&word_list.entries);
    eprintln!(
        "Loaded {} words ({} prefixes) in {:.3}s",
        lexicon.len(),
        lexicon.prefix_count(),
        t_load.elapsed().as_secs_f64()
    );

    let mut summary: Vec<(String, f64, usize)> = Vec::with_capacity(BOARDS.len());

    for (idx, board) in BOARDS.iter().enumerate() {
        let grid = Grid::parse_from_str(&board.replace('/', "\n"))?;
        let searcher = Searcher::from_grid(grid);
        eprintln!("\n[{:02}] {} ({}x{})", idx + 1, board, searcher.grid().rows(), searcher.grid().cols());

        let _warmup = searcher.solve(&lexicon);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_words: Vec<String> = Vec::new();

        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let words = searcher.solve(black_box(&lexicon));
            let solve_secs = t_solve.elapsed().as_secs_f64();

            times.push(solve_secs);
            last_words = words;

            eprintln!(
                "  run {:>2}/{:>2}: {:.4}s ({} words)",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                last_words.len()
            );
        }

        let med = median(times);

        for word in last_words.iter().take(cli.print_limit) {
            println!("{word}");
        }

        eprintln!("  → median {:.4}s over {} run(s)", med, cli.num_repeats);
        summary.push(((*board).to_string(), med, last_words.len()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<52} | {:>10} | {:>7}", "board", "median (s)", "# words");
    eprintln!("{:-<52}-+-{:-<10}-+-{:-<7}", "", "", "");
    for (board, med, num_words) in &summary {
        eprintln!("{board:<52} | {med:>10.4} | {num_words:>7}");
    }

    Ok(())
}
