use crate::error::JumbleError;
use crate::info_log;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const DEFAULT_WORD_LIST: &str = "words.txt";
const APP_DIR: &str = "word-jumble";

pub fn load_word_list_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, JumbleError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| read_error(path, e))?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| read_error(path, e))?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    info_log!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

fn read_error(path: &Path, source: io::Error) -> JumbleError {
    if source.kind() == io::ErrorKind::NotFound {
        JumbleError::WordListNotFound {
            path: path.to_path_buf(),
        }
    } else {
        JumbleError::WordListRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Per-user fallback location, e.g. `~/.config/word-jumble/words.txt`.
pub fn get_user_word_list_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(DEFAULT_WORD_LIST))
}

/// Picks the word list to load. An explicit path always wins; otherwise
/// `words.txt` in the working directory, then the per-user copy.
pub fn resolve_word_list_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let local = PathBuf::from(DEFAULT_WORD_LIST);
    if local.exists() {
        return local;
    }

    match get_user_word_list_path() {
        Some(user) if user.exists() => user,
        _ => local,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn test_load_from_str_trims_and_skips_blank_lines() {
        let words = load_word_list_from_str("  apple \n\n\t\nbanana\n   \ncherry");
        assert_eq!(words, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_load_from_str_keeps_order_and_case() {
        let words = load_word_list_from_str("Zebra\napple\nMango\n");
        assert_eq!(words, vec!["Zebra", "apple", "Mango"]);
    }

    #[test]
    fn test_load_from_str_empty_input() {
        assert!(load_word_list_from_str("").is_empty());
        assert!(load_word_list_from_str("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_load_from_str_windows_line_endings() {
        let words = load_word_list_from_str("cat\r\ndog\r\n\r\n");
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("word_jumble_wordlist_unit.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "rust").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "   cargo   ").unwrap();
            writeln!(file, "   ").unwrap();
            writeln!(file, "crate").unwrap();
        }

        let words = load_word_list(&path).unwrap();
        assert_eq!(words, vec!["rust", "cargo", "crate"]);
        assert!(words.iter().all(|w| !w.trim().is_empty()));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("word_jumble_definitely_missing.txt");
        let _ = fs::remove_file(&path);

        match load_word_list(&path) {
            Err(JumbleError::WordListNotFound { path: p }) => assert_eq!(p, path),
            other => panic!("Expected WordListNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = std::env::temp_dir();
        match load_word_list(&dir) {
            Err(JumbleError::WordListRead { .. }) | Err(JumbleError::WordListNotFound { .. }) => {}
            other => panic!("Expected a read error, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let explicit = Path::new("/some/where/custom.txt");
        assert_eq!(resolve_word_list_path(Some(explicit)), explicit.to_path_buf());
    }

    #[test]
    fn test_resolve_without_explicit_path_ends_in_words_txt() {
        let resolved = resolve_word_list_path(None);
        assert_eq!(resolved.file_name().unwrap(), DEFAULT_WORD_LIST);
    }
}
