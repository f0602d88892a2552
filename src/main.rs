//! Wordle Likelihood - CLI
//!
//! Writes a `word,percentage` report scoring every dictionary word by the
//! positional letter frequencies of the answer list.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, BufWriter, Write};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;
use wordle_likelihood::{
    commands::{explain_word, score_dictionary},
    core::Word,
    output::{print_explanation, write_letters, write_positions, write_scores},
    scoring::{DEFAULT_SCALE_FACTOR, FrequencyTable},
    wordlists::{
        ANSWERS, DICTIONARY,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_likelihood",
    about = "Score dictionary words by positional letter frequency of Wordle answers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list: 'embedded' (default) or path to file
    #[arg(short = 'a', long, global = true, default_value = "embedded")]
    answers: String,

    /// Dictionary to score: 'embedded' (default) or path to file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Multiplier applied to raw frequency products
    #[arg(short, long, global = true, default_value_t = DEFAULT_SCALE_FACTOR)]
    scale: f64,

    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every dictionary word (default)
    Scores,

    /// Letter counts per position in the answers
    Positions,

    /// Letter counts over all positions in the answers
    Letters,

    /// Break down the score of a single word
    Explain {
        /// Word to explain
        word: String,
    },
}

/// Resolve a word list flag
///
/// - "embedded": the list compiled into the binary
/// - "<path>": one word per line
fn load_wordlist(source: &str, embedded: &[&str]) -> Result<Vec<Word>> {
    if source == "embedded" {
        return words_from_slice(embedded).context("embedded word list is malformed");
    }

    let words = load_from_file(source)?;
    debug!(path = source, words = words.len(), "loaded word list");
    Ok(words)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    // stdout carries the report
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let answers = load_wordlist(&cli.answers, ANSWERS).context("loading answers")?;

    // Default to the score report if no command given
    let command = cli.command.unwrap_or(Commands::Scores);

    match command {
        Commands::Scores => {
            let dictionary =
                load_wordlist(&cli.dictionary, DICTIONARY).context("loading dictionary")?;
            run_scores_command(&answers, &dictionary, cli.scale)
        }
        Commands::Positions => run_positions_command(&answers),
        Commands::Letters => run_letters_command(&answers),
        Commands::Explain { word } => run_explain_command(&word, &answers, cli.scale),
    }
}

fn run_scores_command(answers: &[Word], dictionary: &[Word], scale: f64) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    write_score_report(&mut out, answers, dictionary, scale)?;
    out.flush()?;
    Ok(())
}

/// Score everything first, then write; on error `out` is left untouched
fn write_score_report<W: Write>(
    out: &mut W,
    answers: &[Word],
    dictionary: &[Word],
    scale: f64,
) -> Result<()> {
    let scores = score_dictionary(answers, dictionary, scale)?;
    write_scores(out, &scores)?;
    Ok(())
}

fn run_positions_command(answers: &[Word]) -> Result<()> {
    let table = FrequencyTable::build(answers)?;

    let mut out = BufWriter::new(io::stdout().lock());
    write_positions(&mut out, &table)?;
    out.flush()?;
    Ok(())
}

fn run_letters_command(answers: &[Word]) -> Result<()> {
    let table = FrequencyTable::build(answers)?;

    let mut out = BufWriter::new(io::stdout().lock());
    write_letters(&mut out, &table)?;
    out.flush()?;
    Ok(())
}

fn run_explain_command(word: &str, answers: &[Word], scale: f64) -> Result<()> {
    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;
    let result = explain_word(&word, answers, scale)?;
    print_explanation(&result);
    Ok(())
}
