#![feature(test)]

extern crate test;

use wordle_assistant::*;
use test::Bencher;

#[bench]
fn bench_get_markers_for_guess_correct(b: &mut Bencher) {
    b.iter(|| get_markers_for_guess("abcbd", "abcbd"))
}

#[bench]
fn bench_get_markers_for_guess_partial(b: &mut Bencher) {
    b.iter(|| get_markers_for_guess("mesas", "sassy"))
}

#[bench]
fn bench_parse_guess(b: &mut Bencher) {
    b.iter(|| "c+r-a*n-e-".parse::<Guess>())
}

#[bench]
fn bench_state_update_mixed(b: &mut Bencher) -> Result<(), WordleError> {
    let guess = get_markers_for_guess("abcbd", "blkda")?;

    b.iter(|| {
        let mut state = ConstraintState::new();
        state.update(&guess);
        state
    });
    Ok(())
}

#[bench]
fn bench_is_consistent_correct(b: &mut Bencher) -> Result<(), WordleError> {
    let mut state = ConstraintState::new();
    state.update(&get_markers_for_guess("abcbd", "abcbd")?);

    b.iter(|| state.is_consistent("abcbd"));
    Ok(())
}

#[bench]
fn bench_is_consistent_mixed(b: &mut Bencher) -> Result<(), WordleError> {
    let mut state = ConstraintState::new();
    state.update(&get_markers_for_guess("abcbd", "blkba")?);

    b.iter(|| {
        state.is_consistent("abcef")
            | state.is_consistent("abcbd")
            | state.is_consistent("accbd")
            | state.is_consistent("blkba")
            | state.is_consistent("zzzzz")
    });
    Ok(())
}

#[bench]
fn bench_is_consistent_not_present(b: &mut Bencher) -> Result<(), WordleError> {
    let mut state = ConstraintState::new();
    state.update(&get_markers_for_guess("abcbd", "zywxv")?);

    b.iter(|| state.is_consistent("zywxv"));
    Ok(())
}
