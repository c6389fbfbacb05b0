use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JumbleError {
    #[error("word list file not found at '{}'", .path.display())]
    WordListNotFound { path: PathBuf },

    #[error("error reading word list '{}': {source}", .path.display())]
    WordListRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list '{}' contains no words", .path.display())]
    EmptyWordList { path: PathBuf },

    /// Every word in the session has already been picked.
    #[error("all words have been exhausted")]
    WordsExhausted,
}

impl JumbleError {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, JumbleError::WordsExhausted)
    }
}
