use crate::debug_log;
use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffles tried before giving up and returning the word as-is.
pub const MAX_JUMBLE_ATTEMPTS: usize = 10;

pub fn jumble_word(word: &str) -> String {
    jumble_word_with_rng(word, &mut rand::rng())
}

/// Returns the first shuffle of `word` that differs from it, or `word`
/// unchanged if none turned up within `MAX_JUMBLE_ATTEMPTS` tries.
pub fn jumble_word_with_rng<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let original: Vec<char> = word.chars().collect();
    if original.len() <= 1 {
        return word.to_string();
    }

    let mut shuffled = original.clone();
    for attempt in 1..=MAX_JUMBLE_ATTEMPTS {
        shuffled.shuffle(rng);
        if shuffled != original {
            debug_log!("jumble_word() - '{}' jumbled on attempt {}", word, attempt);
            return shuffled.into_iter().collect();
        }
    }

    debug_log!("jumble_word() - no distinct permutation of '{}' found", word);
    word.to_string()
}
