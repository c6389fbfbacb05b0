use crate::error::JumbleError;
use crate::jumble::jumble_word_with_rng;
use crate::{debug_log, info_log};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;

pub const POINTS_PER_CORRECT: u32 = 10;
/// Guesses allowed for each word before it is revealed.
pub const MAX_ATTEMPTS: u32 = 2;

/// Score and word bookkeeping for one game run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub score: u32,
    pub word_list: Vec<String>,
    pub used_words: HashSet<String>,
}

impl GameState {
    pub fn new(word_list: Vec<String>) -> Self {
        Self {
            score: 0,
            word_list,
            used_words: HashSet::new(),
        }
    }

    pub fn pick_new_word(&mut self) -> Result<String, JumbleError> {
        self.pick_new_word_with_rng(&mut rand::rng())
    }

    /// Picks uniformly among the words not yet used and marks the pick as used.
    pub fn pick_new_word_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<String, JumbleError> {
        let available: Vec<&String> = self
            .word_list
            .iter()
            .filter(|word| !self.used_words.contains(*word))
            .collect();

        let word = available
            .choose(rng)
            .map(|word| (*word).clone())
            .ok_or(JumbleError::WordsExhausted)?;

        debug_log!(
            "pick_new_word() - picked '{}' from {} available",
            word,
            available.len()
        );
        self.used_words.insert(word.clone());
        Ok(word)
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Number of distinct words still available.
    pub fn remaining(&self) -> usize {
        self.word_list
            .iter()
            .filter(|word| !self.used_words.contains(*word))
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn distinct_words(&self) -> usize {
        self.word_list.iter().collect::<HashSet<_>>().len()
    }
}

/// Snapshot of the puzzle a front-end should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInfo {
    pub jumbled: String,
    pub attempts_left: u32,
    pub score: u32,
    pub round: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Skip,
    Exit,
}

/// Input/output seam between the game loop and a front-end.
pub trait GameInterface {
    fn display_welcome(&mut self, word_count: usize);
    fn display_round(&mut self, info: &RoundInfo);
    /// `None` means the input was unusable and the player should be asked again.
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_correct(&mut self, word: &str, score: u32);
    fn display_incorrect(&mut self, attempts_left: u32);
    fn display_reveal(&mut self, word: &str);
    fn display_exhausted(&mut self, score: u32);
    fn display_exit_message(&mut self, score: u32);
}

enum RoundOutcome {
    Solved,
    Revealed,
    Exit,
}

fn is_correct_guess(guess: &str, word: &str) -> bool {
    let guess = guess.trim();
    guess == word || guess.to_lowercase() == word.to_lowercase()
}

pub fn game_loop<I, R>(state: &mut GameState, interface: &mut I, rng: &mut R)
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let total = state.distinct_words();
    interface.display_welcome(total);

    let mut round = 0;
    loop {
        let word = match state.pick_new_word_with_rng(rng) {
            Ok(word) => word,
            Err(e) => {
                info_log!("game_loop() - {}", e);
                interface.display_exhausted(state.score);
                return;
            }
        };
        round += 1;

        let info = RoundInfo {
            jumbled: jumble_word_with_rng(&word, rng),
            attempts_left: MAX_ATTEMPTS,
            score: state.score,
            round,
            total,
        };
        interface.display_round(&info);

        match play_round(state, interface, &word) {
            RoundOutcome::Solved | RoundOutcome::Revealed => {}
            RoundOutcome::Exit => {
                interface.display_exit_message(state.score);
                return;
            }
        }
    }
}

fn play_round<I>(state: &mut GameState, interface: &mut I, word: &str) -> RoundOutcome
where
    I: GameInterface + ?Sized,
{
    let mut attempts_left = MAX_ATTEMPTS;
    loop {
        let Some(action) = interface.read_guess() else {
            continue;
        };

        match action {
            UserAction::Guess(guess) if is_correct_guess(&guess, word) => {
                state.award(POINTS_PER_CORRECT);
                info_log!("play_round() - '{}' solved, score {}", word, state.score);
                interface.display_correct(word, state.score);
                return RoundOutcome::Solved;
            }
            UserAction::Guess(guess) => {
                attempts_left -= 1;
                debug_log!(
                    "play_round() - wrong guess '{}', {} attempts left",
                    guess,
                    attempts_left
                );
                if attempts_left == 0 {
                    interface.display_reveal(word);
                    return RoundOutcome::Revealed;
                }
                interface.display_incorrect(attempts_left);
            }
            UserAction::Skip => {
                interface.display_reveal(word);
                return RoundOutcome::Revealed;
            }
            UserAction::Exit => return RoundOutcome::Exit,
        }
    }
}
