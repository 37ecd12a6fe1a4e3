use clap::Parser;
use wordsearch_puzzle::DEFAULT_MAX_ATTEMPTS;

/// Words hidden in the puzzle when none are given on the command line.
pub const DEMO_WORDS: [&str; 6] = [
    "HELLO",
    "BACKLIGHT",
    "RAPTORS",
    "COMPUTER",
    "SENATORS",
    "PYTHON",
];

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Generate a word search puzzle with words hidden in eight directions."
)]
pub struct Cli {
    /// Words to hide in the puzzle. Defaults to a small demo list.
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Number of rows (5 to 50).
    #[arg(short = 'H', long, default_value_t = 10, value_name = "ROWS")]
    pub height: usize,

    /// Number of columns (5 to 50).
    #[arg(short = 'W', long, default_value_t = 10, value_name = "COLUMNS")]
    pub width: usize,

    /// Print only the letters that belong to placed words.
    #[arg(short = 'a', long)]
    pub show_answers: bool,

    /// Seed the random generator for a reproducible puzzle.
    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Placement attempts per word before it is left out.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS, value_name = "INT")]
    pub attempts: usize,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// The words to place, falling back to [`DEMO_WORDS`].
    pub fn word_list(&self) -> Vec<String> {
        if self.words.is_empty() {
            DEMO_WORDS.iter().map(|w| w.to_string()).collect()
        } else {
            self.words.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_follow_library() {
        let cli = Cli::try_parse_from(["wordsearch"]).unwrap();

        assert_eq!((cli.height, cli.width), (10, 10));
        assert_eq!(cli.attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(!cli.show_answers);
        assert_eq!(cli.word_list(), DEMO_WORDS);
    }

    #[test]
    fn parses_words_and_options() {
        let cli = Cli::try_parse_from([
            "wordsearch", "-H", "15", "-W", "20", "-a", "--seed", "7", "-vv", "cat", "car",
        ])
        .unwrap();

        assert_eq!((cli.height, cli.width), (15, 20));
        assert!(cli.show_answers);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.word_list(), ["cat", "car"]);
    }

    #[test]
    fn non_integer_size_is_rejected() {
        assert!(Cli::try_parse_from(["wordsearch", "--height", "ten"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["wordsearch", "-q", "-v"]).is_err());
    }
}
