use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use wordle_assistant::*;

fn create_word_list() -> WordList {
    WordList::from_iterator([
        "crane", "slate", "trace", "cobia", "cacao", "chasm", "civic", "cocoa",
    ])
}

/// Plays against a known objective, always guessing the current suggestion.
fn play(objective: &str, words: &WordList, rng: &mut StdRng) -> Result<Vec<String>, WordleError> {
    let mut session = Session::new();
    let mut guesses = Vec::new();
    let mut guess = session.suggest(words, rng).unwrap();
    for _ in 0..words.len() {
        let feedback = get_markers_for_guess(objective, &guess)?;
        guesses.push(feedback.word());
        if feedback.is_solved() {
            return Ok(guesses);
        }
        let possible_words = session.submit_guess(&feedback.to_string(), words, rng)?;
        assert!(possible_words.contains(&Arc::from(objective)));
        guess = session.suggestion().unwrap().clone();
    }
    panic!("never guessed {}", objective);
}

#[test]
fn every_word_is_eventually_found() -> Result<(), WordleError> {
    let words = create_word_list();
    let mut rng = StdRng::seed_from_u64(2024);

    for objective in words.iter() {
        let guesses = play(objective, &words, &mut rng)?;
        assert_eq!(guesses.last().map(String::as_str), Some(&**objective));
    }
    Ok(())
}

#[test]
fn resumed_session_continues_where_it_left_off() -> Result<(), WordleError> {
    let words = create_word_list();
    let mut rng = StdRng::seed_from_u64(5);
    let mut session = Session::new();
    session.submit_guess("c+r-a*n-e-", &words, &mut rng)?;

    let mut resumed = Session::from_snapshot(session.to_snapshot())?;
    let expected = session.submit_guess("c+o*c+o-a*", &words, &mut rng.clone())?;
    let actual = resumed.submit_guess("c+o*c+o-a*", &words, &mut rng)?;

    assert_eq!(actual, expected);
    assert_eq!(actual, vec![Arc::<str>::from("cacao")]);
    assert_eq!(resumed, session);
    Ok(())
}

#[test]
fn empty_snapshot_is_a_new_session() -> Result<(), WordleError> {
    let session = Session::from_snapshot(SessionSnapshot::default())?;

    assert_eq!(session, Session::new());
    assert!(session.state().is_empty());
    Ok(())
}

#[test]
fn contradictory_feedback_returns_no_words() -> Result<(), WordleError> {
    let words = create_word_list();
    let mut rng = StdRng::seed_from_u64(5);
    let mut session = Session::new();

    session.submit_guess("c-r-a-n-e-", &words, &mut rng)?;
    let possible_words = session.submit_guess("c+o+c+o+a+", &words, &mut rng)?;

    assert_eq!(possible_words, vec![Arc::<str>::from("cocoa")]);

    let possible_words = session.submit_guess("c+o+c+o+a-", &words, &mut rng)?;
    assert!(possible_words.is_empty());
    Ok(())
}
