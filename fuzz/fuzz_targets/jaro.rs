#![no_main]

use arbitrary::Arbitrary;
use jarowinkler::distance::jaro;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let sim = jaro::similarity(texts.s1.chars(), texts.s2.chars(), None);
    assert!((0.0..=1.0).contains(&sim));

    let cached = jaro::CachedJaro::new(texts.s1.chars());
    let cached_sim = cached.similarity(texts.s2.chars(), None);
    assert!((sim - cached_sim).abs() < 1e-9);
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
