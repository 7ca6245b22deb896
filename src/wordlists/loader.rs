//! Word list loading utilities
//!
//! Word lists are plain text, one word per line.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_testbench::wordlists::loader::load_from_file;
///
/// let words = load_from_file("WORDS").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);

    tracing::debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Parse one word per line
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|e| {
                    skipped += 1;
                    tracing::trace!(line, error = %e, "skipping word list entry");
                })
                .ok()
        })
        .collect();

    if skipped > 0 {
        tracing::debug!(skipped, "skipped invalid word list entries");
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_words_handles_blank_lines_and_whitespace() {
        let words = parse_words("crane\r\n\n  slate  \nsh0rt\nIRATE\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_words_keeps_duplicates_in_order() {
        let words = parse_words("crane\nslate\ncrane\n");
        assert_eq!(words.len(), 3);
        assert_eq!(words[2].text(), "crane");
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "crane\nslate\n").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(dir.path().join("WORDS")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
