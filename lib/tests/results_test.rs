#[macro_use]
extern crate assert_matches;

use wordle_assistant::*;

fn markers(input: &str) -> Vec<Marker> {
    input
        .chars()
        .map(|symbol| Marker::from_symbol(symbol).unwrap())
        .collect()
}

#[test]
fn get_markers_for_guess_correct() -> Result<(), WordleError> {
    let result = get_markers_for_guess("abcbd", "abcbd")?;

    assert_eq!(result.markers(), &[Marker::Correct; WORD_LENGTH]);
    assert!(result.is_solved());
    assert_eq!(result.word(), "abcbd");
    Ok(())
}

#[test]
fn get_markers_for_guess_partial() -> Result<(), WordleError> {
    let result = get_markers_for_guess("mesas", "sassy")?;
    assert_eq!(result.markers().to_vec(), markers("**+--"));

    let result = get_markers_for_guess("cobia", "crane")?;
    assert_eq!(result.to_string(), "c+r-a*n-e-");

    // The second guessed 'e' uses up the only unmatched one.
    let result = get_markers_for_guess("ember", "eerie")?;
    assert_eq!(result.markers().to_vec(), markers("+**--"));

    // Greens take priority over earlier yellows.
    let result = get_markers_for_guess("abbey", "babes")?;
    assert_eq!(result.markers().to_vec(), markers("**++-"));
    Ok(())
}

#[test]
fn get_markers_for_guess_none_match() -> Result<(), WordleError> {
    let result = get_markers_for_guess("abcde", "fghij")?;

    assert_eq!(result.markers(), &[Marker::Absent; WORD_LENGTH]);
    Ok(())
}

#[test]
fn get_markers_for_guess_invalid_length() {
    assert_matches!(
        get_markers_for_guess("goal", "guess"),
        Err(WordleError::WordLength(4))
    );
    assert_matches!(
        get_markers_for_guess("guess", "guesses"),
        Err(WordleError::WordLength(7))
    );
}

#[test]
fn get_markers_for_guess_unsupported_character() {
    assert_matches!(
        get_markers_for_guess("gu3ss", "guess"),
        Err(WordleError::UnsupportedCharacter('3'))
    );
    assert_matches!(
        get_markers_for_guess("guess", "Guess"),
        Err(WordleError::UnsupportedCharacter('G'))
    );
}

#[test]
fn word_length_error_message() {
    let error = get_markers_for_guess("goal", "guess").unwrap_err();

    assert_eq!(error.to_string(), "words must have 5 letters, but got 4");
}

#[test]
fn format_error_message_mentions_guess() {
    let error = "crane".parse::<Guess>().unwrap_err();

    assert!(error.to_string().contains("\"crane\""));
}
