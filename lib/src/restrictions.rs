use crate::results::{Guess, Marker, WordleError, WORD_LENGTH};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything known about the hidden word, accumulated across all guesses so far.
///
/// Create one per game with [`ConstraintState::new`], feed it each guess with
/// [`ConstraintState::update`], and test candidates with [`ConstraintState::is_consistent`].
///
/// ```
/// use wordle_assistant::*;
///
/// let mut state = ConstraintState::new();
/// state.update(&"c+r-a*n-e-".parse()?);
///
/// assert!(state.is_consistent("cobia"));
/// assert!(!state.is_consistent("chasm"));
/// # Ok::<(), WordleError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "StateSnapshot", try_from = "StateSnapshot")
)]
pub struct ConstraintState {
    /// Letters confirmed at an exact location.
    fixed_positions: [Option<char>; WORD_LENGTH],
    /// Letters known to be in the word, but not at the given location.
    forbidden_at_position: [BTreeSet<char>; WORD_LENGTH],
    /// The fewest times each letter may appear in the word.
    min_counts: BTreeMap<char, u8>,
    /// The most times each letter may appear in the word.
    max_counts: BTreeMap<char, u8>,
    /// Letters that do not appear in the word at all.
    excluded_letters: BTreeSet<char>,
}

impl ConstraintState {
    /// Creates a state where nothing is known yet.
    pub fn new() -> ConstraintState {
        ConstraintState::default()
    }

    /// Returns `true` iff no guess has contributed anything yet.
    pub fn is_empty(&self) -> bool {
        *self == ConstraintState::default()
    }

    /// Forgets everything, e.g. when starting a new game.
    pub fn reset(&mut self) {
        *self = ConstraintState::default();
    }

    /// Folds the feedback from one guess into the accumulated constraints.
    ///
    /// Markers are tallied per letter for this guess only. A letter that was marked absent and
    /// never confirmed is excluded outright. A letter that was marked absent and also confirmed
    /// occurs exactly as many times as it was confirmed, so both its minimum and maximum are set to
    /// that count, which can lower an earlier minimum if the feedback contradicts itself.
    pub fn update(&mut self, guess: &Guess) {
        let mut confirmed_counts: BTreeMap<char, u8> = BTreeMap::new();
        let mut denied_counts: BTreeMap<char, u8> = BTreeMap::new();

        for (index, letter, marker) in guess.iter() {
            match marker {
                Marker::Correct => {
                    self.fixed_positions[index] = Some(letter);
                    self.forbidden_at_position[index].remove(&letter);
                }
                Marker::Present => {
                    if self.fixed_positions[index] == Some(letter) {
                        self.fixed_positions[index] = None;
                    }
                    self.forbidden_at_position[index].insert(letter);
                }
                Marker::Absent => {}
            }
            let tally = if marker.is_confirmed() {
                &mut confirmed_counts
            } else {
                &mut denied_counts
            };
            *tally.entry(letter).or_insert(0) += 1;
        }

        for &letter in denied_counts.keys() {
            match confirmed_counts.get(&letter) {
                None => self.exclude(letter),
                Some(&count) => {
                    self.min_counts.insert(letter, count);
                    self.max_counts.insert(letter, count);
                }
            }
        }

        for (&letter, &count) in &confirmed_counts {
            self.excluded_letters.remove(&letter);
            let min_count = self.min_counts.entry(letter).or_insert(0);
            *min_count = (*min_count).max(count);
            let min_count = *min_count;
            if let Some(max_count) = self.max_counts.get_mut(&letter) {
                if *max_count < min_count {
                    *max_count = min_count;
                }
            }
        }

        debug!("Applied guess {} -> {:?}", guess, self);
    }

    /// Returns `true` iff the given word satisfies every accumulated constraint.
    pub fn is_consistent(&self, word: &str) -> bool {
        let Some(letters) = word_letters(word) else {
            return false;
        };
        let count_of = |letter: char| letters.iter().filter(|l| **l == letter).count() as u8;

        !letters
            .iter()
            .any(|letter| self.excluded_letters.contains(letter))
            && self
                .min_counts
                .iter()
                .all(|(letter, min)| count_of(*letter) >= *min)
            && self
                .max_counts
                .iter()
                .all(|(letter, max)| count_of(*letter) <= *max)
            && self
                .fixed_positions
                .iter()
                .zip(letters.iter())
                .all(|(fixed, letter)| fixed.map_or(true, |fixed| fixed == *letter))
            && self
                .forbidden_at_position
                .iter()
                .zip(letters.iter())
                .all(|(forbidden, letter)| !forbidden.contains(letter))
    }

    /// The letter known to be at each location, if any.
    pub fn fixed_positions(&self) -> &[Option<char>; WORD_LENGTH] {
        &self.fixed_positions
    }

    /// Letters known to be in the word but not at the given location.
    ///
    /// Panics if `index >= WORD_LENGTH`.
    pub fn forbidden_at(&self, index: usize) -> &BTreeSet<char> {
        &self.forbidden_at_position[index]
    }

    /// The minimum number of times the letter must appear, if known.
    pub fn min_count(&self, letter: char) -> Option<u8> {
        self.min_counts.get(&letter).copied()
    }

    /// The maximum number of times the letter may appear, if known.
    pub fn max_count(&self, letter: char) -> Option<u8> {
        self.max_counts.get(&letter).copied()
    }

    /// Letters known to be absent from the word.
    pub fn excluded_letters(&self) -> &BTreeSet<char> {
        &self.excluded_letters
    }

    /// Letters known to be somewhere in the word.
    pub fn required_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.min_counts.keys().copied()
    }

    /// The alphabet, minus any excluded letters.
    pub fn available_letters(&self) -> String {
        ('a'..='z')
            .filter(|letter| !self.excluded_letters.contains(letter))
            .collect()
    }

    /// Returns a flat copy of the accumulated constraints, suitable for storage.
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            fixed_positions: self.fixed_positions,
            forbidden_at_position: self
                .forbidden_at_position
                .clone()
                .map(|letters| letters.into_iter().collect()),
            min_counts: self.min_counts.clone(),
            max_counts: self.max_counts.clone(),
            excluded_letters: self.excluded_letters.iter().copied().collect(),
        }
    }

    fn exclude(&mut self, letter: char) {
        self.excluded_letters.insert(letter);
        self.min_counts.remove(&letter);
        self.max_counts.remove(&letter);
        for fixed in &mut self.fixed_positions {
            if *fixed == Some(letter) {
                *fixed = None;
            }
        }
    }
}

/// A flat, storage-friendly copy of a [`ConstraintState`].
///
/// Every field defaults to empty, so a missing snapshot or a snapshot missing some fields restores
/// to a state that knows correspondingly less.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct StateSnapshot {
    pub fixed_positions: [Option<char>; WORD_LENGTH],
    pub forbidden_at_position: [Vec<char>; WORD_LENGTH],
    pub min_counts: BTreeMap<char, u8>,
    pub max_counts: BTreeMap<char, u8>,
    pub excluded_letters: Vec<char>,
}

impl From<ConstraintState> for StateSnapshot {
    fn from(state: ConstraintState) -> StateSnapshot {
        state.to_snapshot()
    }
}

impl TryFrom<StateSnapshot> for ConstraintState {
    type Error = WordleError;

    /// Restores a state, rejecting snapshots that could not have come from a valid state.
    fn try_from(snapshot: StateSnapshot) -> Result<ConstraintState, WordleError> {
        let all_letters = snapshot
            .fixed_positions
            .iter()
            .flatten()
            .chain(snapshot.forbidden_at_position.iter().flatten())
            .chain(snapshot.min_counts.keys())
            .chain(snapshot.max_counts.keys())
            .chain(snapshot.excluded_letters.iter());
        for letter in all_letters {
            if !letter.is_ascii_lowercase() {
                return Err(WordleError::InvalidSnapshot(
                    format!("unsupported letter {:?}", letter).into(),
                ));
            }
        }
        for (letter, max) in &snapshot.max_counts {
            let min = snapshot.min_counts.get(letter).copied().unwrap_or(0);
            if *max < min {
                return Err(WordleError::InvalidSnapshot(
                    format!("max count {} for {:?} is below min count {}", max, letter, min)
                        .into(),
                ));
            }
        }
        Ok(ConstraintState {
            fixed_positions: snapshot.fixed_positions,
            forbidden_at_position: snapshot
                .forbidden_at_position
                .map(|letters| letters.into_iter().collect()),
            min_counts: snapshot.min_counts,
            max_counts: snapshot.max_counts,
            excluded_letters: snapshot.excluded_letters.into_iter().collect(),
        })
    }
}

fn word_letters(word: &str) -> Option<[char; WORD_LENGTH]> {
    let mut letters = ['\0'; WORD_LENGTH];
    let mut chars = word.chars();
    for slot in &mut letters {
        *slot = chars.next()?;
    }
    if chars.next().is_some() {
        return None;
    }
    Some(letters)
}
