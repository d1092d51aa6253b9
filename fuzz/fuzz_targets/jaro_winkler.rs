#![no_main]

use arbitrary::Arbitrary;
use jarowinkler::distance::jaro_winkler;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
    pub weight: u8,
}

fn fuzz(texts: Texts) {
    // any weight inside the accepted [0, 0.25] range
    let prefix_weight = f64::from(texts.weight % 26) / 100.0;

    let sim =
        jaro_winkler::similarity(texts.s1.chars(), texts.s2.chars(), prefix_weight, None)
            .expect("weight is always valid");
    assert!((0.0..=1.0).contains(&sim));

    let cached = jaro_winkler::CachedJaroWinkler::new(texts.s1.chars(), prefix_weight)
        .expect("weight is always valid");
    let cached_sim = cached.similarity(texts.s2.chars(), None);
    assert!((sim - cached_sim).abs() < 1e-9);
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
