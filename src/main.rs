mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, error};
use wordsearch_puzzle::{PuzzleConfig, WordSearch};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);
    debug!("Full CLI arguments parsed: {:?}", &cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> wordsearch_puzzle::Result<()> {
    let config = PuzzleConfig::builder()
        .height(cli.height)
        .width(cli.width)
        .words(cli.word_list())
        .show_answers(cli.show_answers)
        .max_attempts(cli.attempts)
        .build()?;

    let word_search = match cli.seed {
        Some(seed) => WordSearch::with_rng(config, &mut StdRng::seed_from_u64(seed)),
        None => WordSearch::new(config),
    };

    for word in word_search.unplaced_words() {
        eprintln!("Could not place {}", word);
    }

    println!("{}", word_search);

    let placed: Vec<&str> = word_search
        .placed_words()
        .iter()
        .map(|(word, _)| word.as_str())
        .collect();
    println!("Words: {}", placed.join(", "));

    Ok(())
}
