//! Word list loading utilities
//!
//! Word lists are newline-delimited text: one word per line, surrounding
//! whitespace trimmed, blank lines ignored. Lines that are not valid 5-letter
//! words are skipped with a warning.

use super::WordSource;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to fetch word list from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("word list request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Parse newline-delimited word list text
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("crane\n  slate \n\nABACK\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["crane", "slate", "aback"]);
/// ```
#[must_use]
pub fn parse_word_list(text: &str) -> Vec<Word> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!(
                        line = index + 1,
                        entry = trimmed,
                        "skipping word list entry: {e}"
                    );
                    None
                }
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_word_list(&content))
}

/// Fetch a word list over HTTP, blocking until the body is read
///
/// # Errors
///
/// Returns `LoadError::Http` on transport failure and `LoadError::Status` for
/// a non-success response.
pub fn fetch_from_url(url: &str) -> Result<Vec<Word>, LoadError> {
    let http_error = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(http_error)?;
    let response = client.get(url).send().map_err(http_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().map_err(http_error)?;
    Ok(parse_word_list(&body))
}

/// Load a word list from a file or URL
///
/// # Errors
///
/// Propagates the `LoadError` of the underlying file read or fetch.
pub fn load(source: &WordSource) -> Result<Vec<Word>, LoadError> {
    let words = match source {
        WordSource::File(path) => load_from_file(path)?,
        WordSource::Url(url) => fetch_from_url(url)?,
    };
    info!(source = %source, count = words.len(), "loaded word list");
    Ok(words)
}

/// Load a word list, falling back to an empty list on failure
///
/// The failure is logged; with an empty list every filter returns no
/// candidates.
#[must_use]
pub fn load_or_empty(source: &WordSource) -> Vec<Word> {
    load(source).unwrap_or_else(|e| {
        error!(source = %source, "word list unavailable, continuing with no words: {e}");
        Vec::new()
    })
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
