use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The number of letters in every guess and every candidate word.
pub const WORD_LENGTH: usize = 5;

/// The feedback given for a single letter of a guess.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum Marker {
    /// The letter is in the word at this location. Written as `+`.
    Correct,
    /// The letter is in the word, but not at this location. Written as `*`.
    Present,
    /// The letter is not in the word, or not more times than it was otherwise marked. Written as
    /// `-`.
    Absent,
}

impl Marker {
    /// Parses a marker from its surface symbol.
    pub fn from_symbol(symbol: char) -> Option<Marker> {
        match symbol {
            '+' => Some(Marker::Correct),
            '*' => Some(Marker::Present),
            '-' => Some(Marker::Absent),
            _ => None,
        }
    }

    /// The surface symbol for this marker.
    pub fn symbol(self) -> char {
        match self {
            Marker::Correct => '+',
            Marker::Present => '*',
            Marker::Absent => '-',
        }
    }

    /// Whether this marker confirms that the letter occurs in the word.
    pub fn is_confirmed(self) -> bool {
        self != Marker::Absent
    }
}

/// Indicates that an error occurred while handling guesses, words, or saved state.
#[derive(Debug, Error)]
pub enum WordleError {
    /// The guess did not match the `(letter marker){5}` syntax, e.g. `c+r-a*n-e-`.
    #[error("guess {0:?} must be five lowercase letters each followed by one of '+', '*' or '-'")]
    InvalidGuessFormat(Box<str>),
    /// Indicates that a word had the wrong length. Includes the length that was given.
    #[error("words must have {len} letters, but got {0}", len = WORD_LENGTH)]
    WordLength(usize),
    /// Indicates that a given character is not a lowercase ASCII letter.
    #[error("unsupported character {0:?}")]
    UnsupportedCharacter(char),
    /// A saved snapshot could not be turned back into a valid state.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(Box<str>),
    /// Reading a word list failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A single guess along with the feedback received for each of its letters.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Guess {
    letters: [char; WORD_LENGTH],
    markers: [Marker; WORD_LENGTH],
}

impl Guess {
    /// Creates a guess from its letters and their markers.
    ///
    /// Returns [`WordleError::UnsupportedCharacter`] if any letter is not in `a..=z`.
    pub fn new(
        letters: [char; WORD_LENGTH],
        markers: [Marker; WORD_LENGTH],
    ) -> Result<Guess, WordleError> {
        if let Some(bad) = letters.iter().find(|letter| !letter.is_ascii_lowercase()) {
            return Err(WordleError::UnsupportedCharacter(*bad));
        }
        Ok(Guess { letters, markers })
    }

    /// The guessed word.
    pub fn word(&self) -> String {
        self.letters.iter().collect()
    }

    /// The letters of the guess, in order.
    pub fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// The markers of the guess, in the same order as the letters.
    pub fn markers(&self) -> &[Marker; WORD_LENGTH] {
        &self.markers
    }

    /// Iterates over `(index, letter, marker)` for each location in the guess.
    pub fn iter(&self) -> impl Iterator<Item = (usize, char, Marker)> + '_ {
        self.letters
            .iter()
            .zip(self.markers.iter())
            .enumerate()
            .map(|(index, (letter, marker))| (index, *letter, *marker))
    }

    /// Whether every letter was marked correct.
    pub fn is_solved(&self) -> bool {
        self.markers.iter().all(|marker| *marker == Marker::Correct)
    }
}

impl FromStr for Guess {
    type Err = WordleError;

    /// Parses the `(letter marker){5}` syntax, e.g. `c+r-a*n-e-`.
    fn from_str(input: &str) -> Result<Guess, WordleError> {
        let format_error = || WordleError::InvalidGuessFormat(Box::from(input));
        let chars: Vec<char> = input.chars().collect();
        if chars.len() != WORD_LENGTH * 2 {
            return Err(format_error());
        }
        let mut letters = ['a'; WORD_LENGTH];
        let mut markers = [Marker::Absent; WORD_LENGTH];
        for (index, pair) in chars.chunks_exact(2).enumerate() {
            if !pair[0].is_ascii_lowercase() {
                return Err(format_error());
            }
            letters[index] = pair[0];
            markers[index] = Marker::from_symbol(pair[1]).ok_or_else(format_error)?;
        }
        Ok(Guess { letters, markers })
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, letter, marker) in self.iter() {
            write!(f, "{}{}", letter, marker.symbol())?;
        }
        Ok(())
    }
}

/// Determines the feedback for the given `guess` when the hidden word is `objective`.
///
/// Letters in the right place are marked first. Each remaining letter is marked present only while
/// the objective still has unmatched occurrences of it, so repeated letters are handled the same
/// way Wordle handles them.
pub fn get_markers_for_guess(objective: &str, guess: &str) -> Result<Guess, WordleError> {
    let objective = to_letters(objective)?;
    let letters = to_letters(guess)?;

    let mut markers = [Marker::Absent; WORD_LENGTH];
    let mut unmatched = [0u8; 26];
    for (index, letter) in letters.iter().enumerate() {
        if objective[index] == *letter {
            markers[index] = Marker::Correct;
        } else {
            unmatched[letter_index(objective[index])] += 1;
        }
    }
    for (index, letter) in letters.iter().enumerate() {
        if markers[index] == Marker::Correct {
            continue;
        }
        let remaining = &mut unmatched[letter_index(*letter)];
        if *remaining > 0 {
            *remaining -= 1;
            markers[index] = Marker::Present;
        }
    }
    Ok(Guess { letters, markers })
}

fn to_letters(word: &str) -> Result<[char; WORD_LENGTH], WordleError> {
    let chars: Vec<char> = word.chars().collect();
    let letters: [char; WORD_LENGTH] = chars
        .as_slice()
        .try_into()
        .map_err(|_| WordleError::WordLength(chars.len()))?;
    if let Some(bad) = letters.iter().find(|letter| !letter.is_ascii_lowercase()) {
        return Err(WordleError::UnsupportedCharacter(*bad));
    }
    Ok(letters)
}

fn letter_index(letter: char) -> usize {
    (letter as u8 - b'a') as usize
}
