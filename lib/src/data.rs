use crate::restrictions::ConstraintState;
use crate::results::{WordleError, WORD_LENGTH};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

/// An ordered list of candidate words.
///
/// The list is never modified after construction. Words of any length may be present; only words
/// of [`WORD_LENGTH`] letters can ever be returned by a filter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Arc<str>>,
}

impl WordList {
    /// Constructs a new `WordList` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to lower
    /// case, and blank lines are skipped.
    pub fn from_reader<R: BufRead>(word_reader: &mut R) -> Result<Self, WordleError> {
        let mut words = Vec::new();
        for maybe_line in word_reader.lines() {
            if let Some(word) = normalize(&maybe_line?) {
                words.push(word);
            }
        }
        Ok(WordList { words })
    }

    /// Constructs a new `WordList` from the given words.
    ///
    /// Each word is trimmed and converted to lower case, and blank words are skipped.
    pub fn from_iterator<S, I>(words: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        WordList {
            words: words
                .into_iter()
                .filter_map(|word| normalize(word.as_ref()))
                .collect(),
        }
    }

    /// Concatenates the given lists, keeping their order.
    ///
    /// Typically used to put an optional extended dictionary in front of the base one.
    pub fn merged<'a, I>(lists: I) -> Self
    where
        I: IntoIterator<Item = &'a WordList>,
    {
        WordList {
            words: lists
                .into_iter()
                .flat_map(|list| list.words.iter().cloned())
                .collect(),
        }
    }

    /// Returns the words that are consistent with the given state, in list order.
    pub fn filter(&self, state: &ConstraintState) -> Vec<Arc<str>> {
        filter_words(&self.words, state)
    }

    /// Picks a word uniformly at random, or `None` if the list is empty.
    pub fn choose_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Arc<str>> {
        choose_random_word(&self.words, rng)
    }
}

impl Deref for WordList {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

/// Gets the words of the expected length that are consistent with the given state.
///
/// The output keeps the relative order of `words`. An empty result is not an error: it means the
/// feedback so far rules out every word in the list.
pub fn filter_words(words: &[Arc<str>], state: &ConstraintState) -> Vec<Arc<str>> {
    let possible_words: Vec<Arc<str>> = words
        .iter()
        .filter(|word| is_candidate(word, state))
        .cloned()
        .collect();
    debug!(
        "Filtered {} words down to {}",
        words.len(),
        possible_words.len()
    );
    possible_words
}

/// Same as [`filter_words`], but splits the work across threads.
pub fn par_filter_words(words: &[Arc<str>], state: &ConstraintState) -> Vec<Arc<str>> {
    words
        .par_iter()
        .filter(|word| is_candidate(word, state))
        .cloned()
        .collect()
}

/// Picks one of the given words uniformly at random.
pub fn choose_random_word<R: Rng + ?Sized>(words: &[Arc<str>], rng: &mut R) -> Option<Arc<str>> {
    words.choose(rng).cloned()
}

fn is_candidate(word: &str, state: &ConstraintState) -> bool {
    word.chars().count() == WORD_LENGTH && state.is_consistent(word)
}

fn normalize(word: &str) -> Option<Arc<str>> {
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    Some(Arc::from(word.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::Guess;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Crane\t").as_deref(), Some("crane"));
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn filter_skips_words_of_other_lengths() {
        let list = WordList::from_iterator(["cobia", "cob", "cobias"]);

        assert_eq!(
            list.filter(&ConstraintState::new()),
            vec![Arc::<str>::from("cobia")]
        );
    }

    #[test]
    fn par_filter_matches_filter() -> Result<(), WordleError> {
        let list = WordList::from_iterator([
            "crane", "slate", "trace", "cobia", "cacao", "chasm", "cloud", "civic",
        ]);
        let mut state = ConstraintState::new();
        state.update(&"c+r-a*n-e-".parse::<Guess>()?);

        assert_eq!(par_filter_words(&list, &state), filter_words(&list, &state));
        Ok(())
    }
}
