use std::borrow::Cow;
use std::ffi::OsStr;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::string::FromUtf8Error;
use std::time::Instant;

use derive_new::new;
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::wordlist::index::Index;
use crate::wordlist::trie::{Trie, TrieError};

/// Where a word list is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Stdin,
    File(PathBuf),
}

impl From<&OsStr> for WordSource {
    fn from(s: &OsStr) -> Self {
        if s == "-" {
            WordSource::Stdin
        } else {
            WordSource::File(PathBuf::from(s))
        }
    }
}

impl Display for WordSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WordSource::Stdin => write!(f, "<stdin>"),
            WordSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    /// Uppercase each line and drop anything outside the alphabet.
    #[builder(default)]
    normalize: bool,
    /// Count rejected lines instead of failing the load.
    #[builder(default = true)]
    skip_invalid: bool,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    /// `None` for blank lines.
    fn parse_line<'a>(&self, line: &'a str) -> Option<Cow<'a, str>> {
        let line = line.trim();
        if line.is_empty() {
            None
        } else if self.normalize {
            Some(Cow::Owned(normalize(line)))
        } else {
            Some(Cow::Borrowed(line))
        }
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not open {}: {error}", .path.display())]
    Open { path: PathBuf, #[source] error: io::Error },
    #[error("read failed after {lines} lines: {error}")]
    Read { lines: usize, #[source] error: io::Error },
    #[error("line {line} rejected: {error}")]
    Word { line: usize, #[source] error: TrieError },
    #[error("line {line} is not valid UTF-8: {error}")]
    Encoding { line: usize, #[source] error: FromUtf8Error },
}

impl LoadError {
    /// Lines fully handled before the load stopped.
    pub fn lines_processed(&self) -> usize {
        match self {
            LoadError::Open { .. } => 0,
            LoadError::Read { lines, .. } => *lines,
            LoadError::Word { line, .. } | LoadError::Encoding { line, .. } => line - 1,
        }
    }
}

#[derive(new, Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Lines read, blank ones included.
    pub lines: usize,
    pub inserted: usize,
    pub skipped: usize,
}

#[derive(Default, Debug)]
pub struct Wordlist {
    trie: Trie,
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Default::default()
    }

    pub fn load(&mut self, source: &WordSource, format: &FileFormat) -> Result<LoadSummary, LoadError> {
        info!("Reading words from {}", source);
        match source {
            WordSource::Stdin => self.load_reader(io::stdin().lock(), format),
            WordSource::File(path) => {
                let file = File::open(path)
                    .map_err(|error| LoadError::Open { path: path.clone(), error })?;
                self.load_reader(BufReader::new(file), format)
            }
        }
    }

    /// Inserts one word per line of `reader`.
    ///
    /// Words read before a failure stay in the list.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> Result<LoadSummary, LoadError> {
        let start = Instant::now();
        let mut summary = LoadSummary::default();

        for bytes in reader.split(b'\n') {
            let bytes = bytes.map_err(|error| LoadError::Read { lines: summary.lines, error })?;
            summary.lines += 1;

            let line = match String::from_utf8(bytes) {
                Ok(line) => line,
                Err(error) if format.skip_invalid => {
                    debug!("Line #{} - skipping {:?}: {}", summary.lines,
                           String::from_utf8_lossy(error.as_bytes()), error);
                    summary.skipped += 1;
                    continue;
                }
                Err(error) => return Err(LoadError::Encoding { line: summary.lines, error }),
            };

            let word = match format.parse_line(&line) {
                Some(word) => word,
                None => continue,
            };
            match self.trie.add(&word) {
                Ok(()) => summary.inserted += 1,
                Err(error) if format.skip_invalid => {
                    debug!("Line #{} - skipping {:?}: {}", summary.lines, line, error);
                    summary.skipped += 1;
                }
                Err(error) => return Err(LoadError::Word { line: summary.lines, error }),
            }
            if summary.lines % 100000 == 0 {
                info!("{} {}", summary.lines, word);
            }
        }

        let elapsed = start.elapsed();
        info!("Read {} lines in {:.3}s: {} words ({} distinct), {} skipped",
              summary.lines, elapsed.as_secs_f64(), summary.inserted, self.trie.len(), summary.skipped);
        Ok(summary)
    }

    pub fn contains(&self, word: &str) -> Result<bool, TrieError> {
        self.trie.contains(word)
    }

    pub fn words_by_prefix(&self, prefix: &str) -> Result<Vec<String>, TrieError> {
        self.trie.words_by_prefix(prefix)
    }

    pub fn has_prefix(&self, prefix: &str) -> Result<bool, TrieError> {
        self.trie.has_prefix(prefix)
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}
