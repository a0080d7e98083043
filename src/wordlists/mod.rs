//! Word lists for Wordle solving
//!
//! A word list is fetched or read once at startup and is read-only afterwards.

pub mod loader;

use std::fmt;
use std::path::PathBuf;

/// Public list of valid Wordle guesses, one word per line
pub const DEFAULT_WORD_LIST_URL: &str = "https://gist.githubusercontent.com/dracos/dd0668f281e685bad51479e5acaadb93/raw/6bfa15d263d6d5b63840a8e5b64e04b382fdb079/valid-wordle-words.txt";

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    File(PathBuf),
    Url(String),
}

impl WordSource {
    /// Interpret a command-line value: `http://` or `https://` is a URL,
    /// anything else a file path
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::wordlists::WordSource;
    ///
    /// assert!(matches!(WordSource::parse("https://example.com/w.txt"), WordSource::Url(_)));
    /// assert!(matches!(WordSource::parse("data/words.txt"), WordSource::File(_)));
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl Default for WordSource {
    fn default() -> Self {
        Self::Url(DEFAULT_WORD_LIST_URL.to_string())
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_source_is_public_list() {
        assert_eq!(
            WordSource::default(),
            WordSource::Url(DEFAULT_WORD_LIST_URL.to_string())
        );
    }

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            WordSource::parse("http://localhost/words.txt"),
            WordSource::Url("http://localhost/words.txt".to_string())
        );
        assert_eq!(
            WordSource::parse("./words.txt"),
            WordSource::File(PathBuf::from("./words.txt"))
        );
    }

    #[test]
    fn display_shows_location() {
        assert_eq!(
            WordSource::parse("words.txt").to_string(),
            "words.txt".to_string()
        );
    }
}
