// Library interface for word-jumble
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod jumble;
pub mod logging;
pub mod tui;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use error::JumbleError;
pub use game_state::{
    GameInterface, GameState, MAX_ATTEMPTS, POINTS_PER_CORRECT, RoundInfo, UserAction, game_loop,
};
pub use jumble::{MAX_JUMBLE_ATTEMPTS, jumble_word, jumble_word_with_rng};
pub use wordlist::{load_word_list, load_word_list_from_str, resolve_word_list_path};
