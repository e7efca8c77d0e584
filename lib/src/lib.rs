#![cfg_attr(feature = "unstable", feature(test))]

//! Narrows a dictionary of five-letter words down to the ones still consistent with the feedback
//! from a game of Wordle.
//!
//! Feedback is written as each letter of the guess followed by a marker: `+` if the letter is in
//! the right place, `*` if it is in the word but somewhere else, and `-` if it is not in the word.
//! For example, guessing "crane" against the hidden word "cobia" gives `c+r-a*n-e-`.
//!
//! ```
//! use wordle_assistant::*;
//!
//! let words = WordList::from_iterator(["crane", "slate", "trace", "cobia", "chasm"]);
//! let mut state = ConstraintState::new();
//!
//! state.update(&"c+r-a*n-e-".parse()?);
//!
//! assert_eq!(words.filter(&state).len(), 1);
//! # Ok::<(), WordleError>(())
//! ```

mod data;
mod engine;
mod restrictions;
mod results;

pub use data::*;
pub use engine::*;
pub use restrictions::*;
pub use results::*;
