use crate::data::*;
use crate::restrictions::*;
use crate::results::*;
use log::debug;
use rand::Rng;
use std::result::Result;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One game's worth of progress: the accumulated constraints, the accepted guesses, and the word
/// currently suggested as the next guess.
///
/// The session owns no words. Callers pass the word list in on every call, so the same list can be
/// shared by any number of independent sessions.
///
/// ```
/// use wordle_assistant::*;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let words = WordList::from_iterator(["cobia", "crane", "slate", "cacao"]);
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut session = Session::new();
///
/// let possible_words = session.submit_guess("c+r-a*n-e-", &words, &mut rng)?;
///
/// assert_eq!(possible_words.len(), 2);
/// assert!(possible_words.contains(session.suggestion().unwrap()));
/// # Ok::<(), WordleError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    state: ConstraintState,
    history: Vec<Guess>,
    suggestion: Option<Arc<str>>,
}

impl Session {
    /// Starts a new game with nothing known.
    pub fn new() -> Session {
        Session::default()
    }

    /// The constraints accumulated so far.
    pub fn state(&self) -> &ConstraintState {
        &self.state
    }

    /// The guesses accepted so far, oldest first.
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// The word currently suggested as the next guess, if one has been chosen.
    pub fn suggestion(&self) -> Option<&Arc<str>> {
        self.suggestion.as_ref()
    }

    /// Parses a guess in `(letter marker){5}` syntax, folds it into the state, and returns the
    /// words that are still possible.
    ///
    /// If any words remain, one of them is chosen at random as the new suggestion. Otherwise the
    /// previous suggestion is kept and an empty list is returned.
    ///
    /// Returns [`WordleError::InvalidGuessFormat`] without changing the session if the guess is
    /// malformed. The input must be exactly the ten characters of the guess; callers trim it.
    pub fn submit_guess<R: Rng + ?Sized>(
        &mut self,
        input: &str,
        words: &[Arc<str>],
        rng: &mut R,
    ) -> Result<Vec<Arc<str>>, WordleError> {
        let guess: Guess = input.parse()?;
        Ok(self.apply_guess(guess, words, rng))
    }

    /// Same as [`Session::submit_guess`], for a guess that is already parsed.
    pub fn apply_guess<R: Rng + ?Sized>(
        &mut self,
        guess: Guess,
        words: &[Arc<str>],
        rng: &mut R,
    ) -> Vec<Arc<str>> {
        self.state.update(&guess);
        self.history.push(guess);
        let possible_words = filter_words(words, &self.state);
        if let Some(word) = choose_random_word(&possible_words, rng) {
            debug!("Suggesting {}", word);
            self.suggestion = Some(word);
        }
        possible_words
    }

    /// Returns the current suggestion, choosing one at random from all of `words` if there is
    /// none yet.
    pub fn suggest<R: Rng + ?Sized>(
        &mut self,
        words: &[Arc<str>],
        rng: &mut R,
    ) -> Option<Arc<str>> {
        if self.suggestion.is_none() {
            self.suggestion = choose_random_word(words, rng);
        }
        self.suggestion.clone()
    }

    /// Re-filters `words` against the current state, e.g. after restoring a session.
    pub fn candidates(&self, words: &[Arc<str>]) -> Vec<Arc<str>> {
        filter_words(words, &self.state)
    }

    /// Starts over, forgetting all guesses and the suggestion.
    pub fn reset(&mut self) {
        self.state.reset();
        self.history.clear();
        self.suggestion = None;
    }

    /// Returns a flat copy of this session, suitable for storage between requests.
    pub fn to_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.to_snapshot(),
            history: self.history.iter().map(|guess| guess.to_string()).collect(),
            suggestion: self.suggestion.as_ref().map(|word| word.to_string()),
        }
    }

    /// Restores a session from a snapshot.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Result<Session, WordleError> {
        let state = ConstraintState::try_from(snapshot.state)?;
        let history = snapshot
            .history
            .iter()
            .map(|guess| guess.parse())
            .collect::<Result<Vec<Guess>, WordleError>>()?;
        Ok(Session {
            state,
            history,
            suggestion: snapshot.suggestion.map(|word| Arc::from(word.as_str())),
        })
    }
}

/// A flat, storage-friendly copy of a [`Session`].
///
/// All fields default to empty, so an empty snapshot restores a brand-new session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SessionSnapshot {
    pub state: StateSnapshot,
    /// Accepted guesses in `(letter marker){5}` syntax, oldest first.
    pub history: Vec<String>,
    pub suggestion: Option<String>,
}
