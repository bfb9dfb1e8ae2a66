use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use std::time::Instant;

use boggle::errors::GridError;
use boggle::grid::Grid;
use boggle::lexicon::Lexicon;
use boggle::solver::Searcher;
use boggle::word_list::WordList;

/// Boggle grid solver: print every word traceable on the grid
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Grid rows, one argument per row (e.g., `DEF EAB EBC` or `"Q U" "A T"`)
    #[arg(required_unless_present = "grid_file", conflicts_with = "grid_file")]
    rows: Vec<String>,

    /// Read the grid from a file instead (one row per line)
    #[arg(short = 'f', long)]
    grid_file: Option<PathBuf>,

    /// Path to the word list file (`word` or `word;score` per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Minimum score filter (only applies to `word;score` lines)
    #[arg(short = 'm', long, default_value_t = 50)]
    min_score: i32,
}

/// Entry point of the Boggle CLI solver.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    boggle::log::init_logger(boggle::log::debug_requested());

    log::info!("Starting Boggle solver");

    if let Err(e) = try_main() {
        if let Some(grid_err) = e.downcast_ref::<GridError>() {
            eprintln!("Error: {}", grid_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Build the grid from the positional rows or from `--grid-file`.
/// 3. Load the word list and build the lexicon.
/// 4. Solve and print each word on stdout.
/// 5. Print timings and counts on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let grid_text = match &cli.grid_file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read grid from '{}': {}", path.display(), e)
            )
        })?,
        None => cli.rows.join("\n"),
    };
    let grid = Grid::parse_from_str(&grid_text)?;
    let searcher = Searcher::from_grid(grid);

    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list, cli.min_score)?;
    let lexicon = Lexicon::build(&word_list.entries);
    let load_secs = t_load.elapsed().as_secs_f64();

    let result = searcher.solve_with_stats(&lexicon);

    for word in &result.words {
        println!("{word}");
    }

    eprintln!(
        "Loaded {} words in {:.3}s; solved {}x{} grid in {:.3}s ({} words found, {} cells entered).",
        lexicon.len(),
        load_secs,
        searcher.grid().rows(),
        searcher.grid().cols(),
        result.stats.elapsed.as_secs_f64(),
        result.words.len(),
        result.stats.cells_entered
    );

    Ok(())
}
