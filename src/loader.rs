//! Reads the plain-text glossary format into a [`GlossaryStore`].
//!
//! ```text
//! term
//! definition line
//! more definition
//!
//! next term
//! ...
//! ```
//!
//! Definition lines are joined with nothing in between. A blank line where a
//! term is expected stops the load, and running out of input in the middle
//! of a record simply ends that record.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{GlossaryError, Result};
use crate::store::GlossaryStore;

/// A finite sequence of lines that can be read again by reopening it.
pub trait LineSource {
    type Lines: Iterator<Item = io::Result<String>>;

    fn open(&self) -> io::Result<Self::Lines>;

    /// Where the lines come from, for error messages.
    fn location(&self) -> PathBuf;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for FileSource {
    type Lines = io::Lines<BufReader<File>>;

    fn open(&self) -> io::Result<Self::Lines> {
        Ok(BufReader::new(File::open(&self.path)?).lines())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// Glossary text held in memory.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl LineSource for TextSource {
    type Lines = std::vec::IntoIter<io::Result<String>>;

    fn open(&self) -> io::Result<Self::Lines> {
        let lines: Vec<_> = self.text.lines().map(|line| Ok(line.to_string())).collect();
        Ok(lines.into_iter())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("<memory>")
    }
}

/// Replaces the entries of `store` with the records read from `source`.
///
/// Display settings on the store are left alone. Returns the number of
/// records read, counting duplicates that overwrote an earlier term.
///
/// Entries are cleared before reading starts. If the source fails partway
/// the error is returned and the store keeps only the records read so far.
pub fn load<S: LineSource>(store: &mut GlossaryStore, source: &S) -> Result<usize> {
    let location = source.location();
    let read_error = |source: io::Error| GlossaryError::SourceRead {
        path: location.clone(),
        source,
    };

    store.clear_entries();
    let mut lines = source.open().map_err(read_error)?;
    let mut records = 0usize;

    while let Some(term) = lines.next() {
        let term = term.map_err(read_error)?;
        if term.is_empty() {
            break;
        }
        let definition = read_definition(&mut lines).map_err(read_error)?;
        debug!(%term, len = definition.len(), "read glossary record");
        if store.add_entry(term.as_str(), definition)?.is_some() {
            warn!(%term, path = %location.display(), "duplicate term overwrites earlier definition");
        }
        records += 1;
    }

    info!(
        path = %location.display(),
        records,
        terms = store.size(),
        "loaded glossary"
    );
    Ok(records)
}

/// Convenience wrapper around [`load`] for a file on disk.
pub fn load_file(store: &mut GlossaryStore, path: impl AsRef<Path>) -> Result<usize> {
    load(store, &FileSource::new(path.as_ref()))
}

fn read_definition<I>(lines: &mut I) -> io::Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut definition = String::new();
    for line in lines {
        let line = line?;
        if line.is_empty() {
            break;
        }
        definition.push_str(&line);
    }
    Ok(definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RECORDS: &str = "Ohio\nthe state\n\nCleveland\na city\n\n";

    fn load_text(text: &str) -> GlossaryStore {
        let mut store = GlossaryStore::new();
        load(&mut store, &TextSource::new(text)).unwrap();
        store
    }

    #[test]
    fn reads_records_in_order() {
        let store = load_text(TWO_RECORDS);
        assert_eq!(store.size(), 2);
        assert_eq!(store.terms().collect::<Vec<_>>(), vec!["Ohio", "Cleveland"]);
        assert_eq!(store.get_definition("Ohio").unwrap(), "the state");
        assert_eq!(store.get_definition("Cleveland").unwrap(), "a city");
    }

    #[test]
    fn definition_lines_are_concatenated_verbatim() {
        let store = load_text("term\nfirst line\n second line\n\n");
        assert_eq!(store.get_definition("term").unwrap(), "first line second line");
    }

    #[test]
    fn end_of_input_closes_the_last_record() {
        let store = load_text("Ohio\nthe state");
        assert_eq!(store.get_definition("Ohio").unwrap(), "the state");
    }

    #[test]
    fn term_without_definition_lines() {
        let store = load_text("lonely\n\nnext\ndef\n");
        assert_eq!(store.get_definition("lonely").unwrap(), "");
        assert_eq!(store.get_definition("next").unwrap(), "def");

        let store = load_text("trailing");
        assert_eq!(store.get_definition("trailing").unwrap(), "");
    }

    #[test]
    fn blank_line_in_term_position_stops_loading() {
        let store = load_text("a\nalpha\n\n\nb\nbeta\n");
        assert_eq!(store.terms().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn crlf_line_endings() {
        let store = load_text("Ohio\r\nthe state\r\n\r\nCleveland\r\na city\r\n");
        assert_eq!(store.get_definition("Cleveland").unwrap(), "a city");
    }

    #[test]
    fn duplicate_terms_overwrite() {
        let mut store = GlossaryStore::new();
        let records = load(&mut store, &TextSource::new("x\none\n\nx\ntwo\n")).unwrap();
        assert_eq!(records, 2);
        assert_eq!(store.size(), 1);
        assert_eq!(store.get_definition("x").unwrap(), "two");
    }

    #[test]
    fn reload_replaces_entries_and_keeps_settings() {
        let mut store = GlossaryStore::new();
        store.set_title("Kept");
        load(&mut store, &TextSource::new("old\ngone\n")).unwrap();
        load(&mut store, &TextSource::new(TWO_RECORDS)).unwrap();
        assert!(!store.has_term("old"));
        assert_eq!(store.size(), 2);
        assert_eq!(store.title(), "Kept");
    }

    #[test]
    fn loading_twice_gives_equal_stores() {
        assert_eq!(load_text(TWO_RECORDS), load_text(TWO_RECORDS));
    }

    #[test]
    fn empty_input() {
        assert!(load_text("").is_empty());
    }

    struct FailingSource;

    impl LineSource for FailingSource {
        type Lines = std::vec::IntoIter<io::Result<String>>;

        fn open(&self) -> io::Result<Self::Lines> {
            Ok(vec![
                Ok("Ohio".to_string()),
                Ok("the state".to_string()),
                Ok(String::new()),
                Err(io::Error::new(io::ErrorKind::InvalidData, "bad bytes")),
            ]
            .into_iter())
        }

        fn location(&self) -> PathBuf {
            PathBuf::from("broken.txt")
        }
    }

    #[test]
    fn read_failure_keeps_records_read_so_far() {
        let mut store = GlossaryStore::new();
        store.add_entry("stale", "gone").unwrap();
        let err = load(&mut store, &FailingSource).unwrap_err();
        match err {
            GlossaryError::SourceRead { path, .. } => assert_eq!(path, PathBuf::from("broken.txt")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!store.has_term("stale"));
        assert_eq!(store.terms().collect::<Vec<_>>(), vec!["Ohio"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let mut store = GlossaryStore::new();
        let err = load_file(&mut store, "/definitely/not/here.txt").unwrap_err();
        match err {
            GlossaryError::SourceRead { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
