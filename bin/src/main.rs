use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use wordle_assistant::*;

/// Helps you play Wordle by narrowing a word list down to the words that fit the feedback so far.
///
/// Feedback is entered as each guessed letter followed by '+' (right place), '*' (wrong place) or
/// '-' (not in the word), e.g. "c+r-a*n-e-".
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: PathBuf,

    /// Optional file of extra words, placed in front of the main list.
    #[arg(short = 'x', long)]
    extended_words_file: Option<PathBuf>,

    /// Where to keep the current game between runs. Without it, nothing is saved.
    #[arg(short = 's', long)]
    state_file: Option<PathBuf>,

    /// Seeds the random suggestions so runs can be repeated.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enter guesses one after another until the word is found.
    Interactive,
    /// Add a single guess to the saved game and print the remaining words.
    Guess { guess: String },
    /// Forget the saved game.
    Reset,
    /// Let the assistant play against the given word, always taking its own suggestion.
    Simulate { word: String },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();

    let words = load_words(&args.words_file, args.extended_words_file.as_deref())?;
    println!("There are {} possible words.", words.len());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = match &args.state_file {
        Some(path) => load_session(path)?,
        None => Session::new(),
    };

    match args.command {
        Command::Interactive => play_interactive_game(&mut session, &words, &mut rng)?,
        Command::Guess { guess } => {
            submit_single_guess(&mut session, guess.trim(), &words, &mut rng)
        }
        Command::Reset => {
            session.reset();
            println!("Started a new game.");
        }
        Command::Simulate { word } => simulate_game(&word, &words, &mut rng)?,
    }

    if let Some(path) = &args.state_file {
        save_session(path, &session)?;
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn load_words(
    words_file: &Path,
    extended_words_file: Option<&Path>,
) -> Result<WordList, WordleError> {
    let base = read_word_list(words_file)?;
    match extended_words_file {
        Some(path) => {
            let extended = read_word_list(path)?;
            Ok(WordList::merged([&extended, &base]))
        }
        None => Ok(base),
    }
}

fn read_word_list(path: &Path) -> Result<WordList, WordleError> {
    let mut words_reader = io::BufReader::new(File::open(path)?);
    let words = WordList::from_reader(&mut words_reader)?;
    info!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

fn load_session(path: &Path) -> Result<Session, Box<dyn Error>> {
    if !path.exists() {
        info!("No saved game at {}, starting fresh", path.display());
        return Ok(Session::new());
    }
    let snapshot: SessionSnapshot = ron::from_str(&fs::read_to_string(path)?)?;
    Ok(Session::from_snapshot(snapshot)?)
}

fn save_session(path: &Path, session: &Session) -> Result<(), Box<dyn Error>> {
    let contents = ron::ser::to_string_pretty(&session.to_snapshot(), Default::default())?;
    fs::write(path, contents)?;
    info!("Saved game to {}", path.display());
    Ok(())
}

fn submit_single_guess(session: &mut Session, guess: &str, words: &WordList, rng: &mut StdRng) {
    match session.submit_guess(guess, words, rng) {
        Ok(possible_words) => print_possible_words(session, &possible_words),
        Err(err) => {
            warn!("Rejected guess {:?}", guess);
            eprintln!("{}", err);
        }
    }
}

fn play_interactive_game(
    session: &mut Session,
    words: &WordList,
    rng: &mut StdRng,
) -> io::Result<()> {
    println!(
        "Enter each guess with its feedback, e.g. \"c+r-a*n-e-\":\n\n\
           * '+' = this letter is in the word and in the right location\n\
           * '*' = this letter is in the word, but not in this location\n\
           * '-' = this letter is not in the word\n\n\
         Enter \"reset\" to start over, or \"exit\" to stop."
    );
    if !session.history().is_empty() {
        println!("Resuming a game with {} guesses so far.", session.history().len());
        print_possible_words(session, &session.candidates(words));
    } else if let Some(word) = session.suggest(words, rng) {
        println!("Try: {}", word);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        match line.trim() {
            "exit" => return Ok(()),
            "reset" => {
                session.reset();
                println!("Started a new game.");
                if let Some(word) = session.suggest(words, rng) {
                    println!("Try: {}", word);
                }
            }
            guess => match session.submit_guess(guess, words, rng) {
                Ok(possible_words) => {
                    print_possible_words(session, &possible_words);
                    if possible_words.len() == 1 {
                        println!("That must be it!");
                        return Ok(());
                    }
                }
                Err(err) => println!("{} Try again.", err),
            },
        }
    }
}

fn simulate_game(word: &str, words: &WordList, rng: &mut StdRng) -> Result<(), WordleError> {
    let mut session = Session::new();
    let Some(mut guess) = session.suggest(words, rng) else {
        println!("The word list is empty.");
        return Ok(());
    };
    for round in 1..=words.len() {
        let feedback = get_markers_for_guess(word, &guess)?;
        println!("\t{}", feedback);
        if feedback.is_solved() {
            println!("Solved it! It took me {} guesses.", round);
            return Ok(());
        }
        if session.apply_guess(feedback, words, rng).is_empty() {
            break;
        }
        match session.suggestion() {
            Some(next) => guess = next.clone(),
            None => break,
        }
    }
    eprintln!("Error: given word not in the word list.");
    std::process::exit(1);
}

fn print_possible_words(session: &Session, possible_words: &[Arc<str>]) {
    if possible_words.is_empty() {
        println!("No words fit that feedback. Check your markers, or reset.");
        return;
    }
    println!("{} possible words:", possible_words.len());
    for word in possible_words.iter().take(20) {
        println!("\t{}", word);
    }
    if possible_words.len() > 20 {
        println!("\t...and {} more", possible_words.len() - 20);
    }
    if let Some(word) = session.suggestion() {
        println!("Try: {}", word);
    }
}
