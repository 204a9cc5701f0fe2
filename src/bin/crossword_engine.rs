//! Command-line driver: build text DAWGs, query a loaded one, and run a
//! deterministic self-play regression sequence.
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crossword_engine::{
    choose_move, dawg_navigate, generate_moves, Alphabet, Bag, Board, Candidate, DawgBuilder,
    Dictionary, MatchNavigator, PermutationNavigator, Rack,
};

#[derive(Parser)]
#[command(name = "crossword-engine", about = "DAWG and move generation tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a text DAWG from one or more word list files.
    Build {
        inputs: Vec<PathBuf>,
        #[arg(long)]
        remove: Option<PathBuf>,
        #[arg(long, default_value = "none")]
        filter: String,
        output_base: PathBuf,
    },
    /// Run a deterministic self-play sequence for regression.
    Test,
    /// Report whether `word` is in the dictionary at `dawg_file`.
    Lookup { dawg_file: PathBuf, word: String },
    /// List every dictionary word matching `pattern` (`?` = any letter).
    Match { dawg_file: PathBuf, pattern: String },
    /// List every dictionary word buildable from `rack` (`?` = wildcard).
    Permute {
        dawg_file: PathBuf,
        rack: String,
        #[arg(long, default_value_t = 1)]
        min_len: usize,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:?}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

/// Maps a failure to the exit code taxonomy: 1 bad input/args, 2 I/O
/// error, 3 malformed data, 4 anything else.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<crossword_engine::Error>() {
        Some(crossword_engine::Error::ReadError { .. } | crossword_engine::Error::WriteError { .. }) => 2,
        Some(
            crossword_engine::Error::MalformedDawgLine { .. }
            | crossword_engine::Error::UnknownLetter(_)
            | crossword_engine::Error::WordTooLong(..)
            | crossword_engine::Error::EncodeStringTooLong(_)
            | crossword_engine::Error::EncodeInvalidToken(_)
            | crossword_engine::Error::InvalidTileCode(_)
            | crossword_engine::Error::InvalidLetterCode(_)
            | crossword_engine::Error::InvalidRowCount(_)
            | crossword_engine::Error::InvalidRowLength(_)
            | crossword_engine::Error::GridParseError(_),
        ) => 3,
        _ => 4,
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Command::Build {
            inputs,
            remove,
            filter,
            output_base,
        } => cmd_build(&inputs, remove.as_deref(), &filter, &output_base),
        Command::Test => cmd_test(),
        Command::Lookup { dawg_file, word } => cmd_lookup(&dawg_file, &word),
        Command::Match { dawg_file, pattern } => cmd_match(&dawg_file, &pattern),
        Command::Permute {
            dawg_file,
            rack,
            min_len,
        } => cmd_permute(&dawg_file, &rack, min_len),
    }
}

fn load_words(path: &PathBuf) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

fn cmd_build(inputs: &[PathBuf], remove: Option<&std::path::Path>, filter: &str, output_base: &PathBuf) -> Result<ExitCode> {
    if inputs.is_empty() {
        eprintln!("build requires at least one input word list");
        return Ok(ExitCode::from(1));
    }
    let alphabet = Alphabet::default();
    // scrabble: bounded length, every letter in the alphabet. common: bounded length only.
    const SCRABBLE_MAXLEN: usize = 15;
    const COMMON_MAXLEN: usize = 12;
    let keep: fn(&Alphabet, &str) -> bool = match filter {
        "scrabble" => |alphabet, word| {
            word.chars().count() <= SCRABBLE_MAXLEN && word.chars().all(|c| alphabet.bit_of(c).is_some())
        },
        "common" => |_alphabet, word| word.chars().count() <= COMMON_MAXLEN,
        "none" => |_alphabet, _word| true,
        other => {
            eprintln!("unknown filter \"{other}\", expected scrabble|common|none");
            return Ok(ExitCode::from(1));
        }
    };
    let mut words: Vec<String> = Vec::new();
    for input in inputs {
        words.extend(load_words(input)?.into_iter().filter(|w| keep(&alphabet, w)));
    }
    if let Some(remove_path) = remove {
        let drop: std::collections::HashSet<String> =
            fs::read_to_string(remove_path)
                .with_context(|| format!("reading {}", remove_path.display()))?
                .lines()
                .map(str::to_string)
                .collect();
        words.retain(|w| !drop.contains(w));
    }
    words.sort_by_key(|w| alphabet.sort_key_ci(w));
    words.dedup();

    let mut builder = DawgBuilder::new(&alphabet);
    let mut dropped = 0usize;
    for word in &words {
        if let Err(err) = builder.add_word(word) {
            log::warn!("dropping word \"{word}\": {err}");
            dropped += 1;
        }
    }
    if dropped > 0 {
        log::info!("dropped {dropped} word(s) exceeding the maximum length");
    }
    let dawg = builder.finish();

    let out_path = output_base.with_extension("text.dawg");
    let file = fs::File::create(&out_path).map_err(|source| crossword_engine::Error::WriteError {
        path: out_path.display().to_string(),
        source,
    })?;
    dawg.write_to(file)?;
    log::info!(
        "wrote {} ({} words, {} nodes)",
        out_path.display(),
        words.len(),
        dawg.num_nodes()
    );
    println!("{}", out_path.display());
    Ok(ExitCode::from(0))
}

/// A small embedded word list so `test` needs no external files.
const REGRESSION_WORDS: &[&str] = &["aldin", "aldur", "ari", "dalur", "lið", "rital", "altari"];

fn cmd_test() -> Result<ExitCode> {
    let alphabet = Alphabet::default();
    let mut builder = DawgBuilder::new(&alphabet);
    let mut words: Vec<&str> = REGRESSION_WORDS.to_vec();
    words.sort_by_key(|w| alphabet.sort_key_ci(w));
    for word in &words {
        builder.add_word(word)?;
    }
    let dawg = builder.finish();
    let dict = Dictionary::parse(&dawg.to_text())?;

    let board = Board::new(&alphabet);
    let mut bag = Bag::new(&alphabet);
    let mut rack = Rack::new();
    rack.set_tiles(&[
        alphabet.label_of('a').unwrap(),
        alphabet.label_of('r').unwrap(),
        alphabet.label_of('i').unwrap(),
    ]);

    let candidate = choose_move(&board, &rack, &bag, &dict);
    match candidate {
        Candidate::Place(mv) => {
            println!("first move: {} at ({}, {}), score {}", mv.word(), mv.row(), mv.col(), mv.score(&board));
        }
        other => bail!("expected the first move to place a word, got {:?}", other),
    }

    let moves = generate_moves(&board, &rack, &dict);
    if moves.is_empty() {
        bail!("expected at least one legal opening move for \"ari\"");
    }
    bag.return_tiles(&rack.tiles());
    println!("ok: {} candidate opening moves", moves.len());
    Ok(ExitCode::from(0))
}

fn cmd_lookup(dawg_file: &PathBuf, word: &str) -> Result<ExitCode> {
    let dict = Dictionary::load(dawg_file).map_err(map_load_err)?;
    if dict.is_word(word) {
        println!("{word}: yes");
        Ok(ExitCode::from(0))
    } else {
        println!("{word}: no");
        Ok(ExitCode::from(1))
    }
}

fn cmd_match(dawg_file: &PathBuf, pattern: &str) -> Result<ExitCode> {
    let dict = Dictionary::load(dawg_file).map_err(map_load_err)?;
    let mut policy = MatchNavigator::new(pattern);
    dawg_navigate(&dict, &mut policy);
    let mut matches = policy.into_matches();
    matches.sort();
    for word in &matches {
        println!("{word}");
    }
    Ok(ExitCode::from(0))
}

fn cmd_permute(dawg_file: &PathBuf, rack: &str, min_len: usize) -> Result<ExitCode> {
    let dict = Dictionary::load(dawg_file).map_err(map_load_err)?;
    let mut policy = PermutationNavigator::new(rack, min_len);
    dawg_navigate(&dict, &mut policy);
    let mut matches = policy.into_matches();
    matches.sort();
    for word in &matches {
        println!("{word}");
    }
    Ok(ExitCode::from(0))
}

fn map_load_err(err: crossword_engine::Error) -> anyhow::Error {
    anyhow::Error::new(err)
}
