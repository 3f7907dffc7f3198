//! A movie library indexed by title, backed by a [`Tree`].
//!
//! The library is a thin layer over the tree: lookups build a title-only
//! [`Movie`] to route with and a missing title is reported as `None`.
//!
//! # Examples
//!
//! ```
//! use keyed_bst::library::MovieLibrary;
//!
//! let mut library = MovieLibrary::new();
//! assert!(library.add("Memento", "11/10/2000", 113));
//! assert!(!library.add("Memento", "21/03/2007", 112));
//!
//! let memento = library.search("Memento").unwrap();
//! assert_eq!(memento.full().to_string(), "Memento: 11/10/2000; 113");
//! assert!(library.search("Melody").is_none());
//! ```

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::key::OrderedKey;
use crate::tree::{Iter, Stats, Tree};

/// Everything known about a movie besides its title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Details {
    released: String,
    runtime: u32,
}

impl Details {
    /// Release date, kept as written.
    pub fn released(&self) -> &str {
        &self.released
    }

    /// Running time in minutes.
    pub fn runtime(&self) -> u32 {
        self.runtime
    }
}

impl fmt::Display for Details {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}", self.released, self.runtime)
    }
}

/// A movie, identified by its title.
pub type Movie = OrderedKey<String, Details>;

/// A collection of movies with unique titles, kept in title order.
#[derive(Clone, Debug, Default)]
pub struct MovieLibrary {
    movies: Tree<Movie>,
}

impl MovieLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a movie. Returns `false`, leaving the library unchanged, if a
    /// movie with the same title is already present.
    pub fn add(&mut self, title: impl Into<String>, released: impl Into<String>, runtime: u32) -> bool {
        let details = Details {
            released: released.into(),
            runtime,
        };
        self.movies.insert(Movie::new(title.into(), details))
    }

    /// Finds the movie with exactly this title.
    pub fn search(&self, title: &str) -> Option<&Movie> {
        self.movies.search(&Movie::query(title.to_owned()))
    }

    /// Removes and returns the movie with exactly this title.
    pub fn remove(&mut self, title: &str) -> Option<Movie> {
        self.movies.remove(&Movie::query(title.to_owned()))
    }

    /// Number of movies in the library.
    pub fn size(&self) -> usize {
        self.movies.size()
    }

    /// Height of the underlying tree, `-1` when the library is empty.
    pub fn height(&self) -> isize {
        self.movies.height()
    }

    /// Size and height of the underlying tree.
    pub fn stats(&self) -> Stats {
        self.movies.stats()
    }

    /// The movies in title order.
    pub fn movies(&self) -> Iter<'_, Movie> {
        self.movies.iter()
    }

    /// The titles in order.
    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.movies.iter().map(|movie| movie.key().as_str())
    }

    /// Builds a library from delimiter separated records, one per line:
    /// `title`, `released` and `runtime` (whole minutes). Blank lines are
    /// skipped. Repeated titles keep the first record.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::library::{LoadOptions, MovieLibrary};
    ///
    /// let records = "Memento\t11/10/2000\t113\nMemento\t21/03/2007\t112\n";
    /// let (library, report) = MovieLibrary::load(records.as_bytes(), &LoadOptions::default())?;
    ///
    /// assert_eq!((report.read, report.added), (2, 1));
    /// assert_eq!(library.size(), 1);
    /// # Ok::<(), keyed_bst::library::LoadError>(())
    /// ```
    pub fn load<R: BufRead>(reader: R, options: &LoadOptions) -> Result<(Self, LoadReport), LoadError> {
        let mut library = Self::new();
        let mut report = LoadReport::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let number = index + 1;
            report.read += 1;

            let mut fields = line.split(options.delimiter);
            let mut field = |name: &'static str| {
                fields
                    .next()
                    .filter(|value| !value.trim().is_empty())
                    .ok_or(LoadError::MissingField { line: number, field: name })
            };
            let title = field("title")?;
            let released = field("released")?;
            let runtime = field("runtime")?;
            let runtime = runtime.trim().parse::<u32>().map_err(|_| LoadError::InvalidRuntime {
                line: number,
                value: runtime.to_owned(),
            })?;

            if library.add(title, released, runtime) {
                report.added += 1;
            } else {
                log::debug!("line {}: duplicate title {:?} skipped", number, title);
            }
        }

        log::info!(
            "read {} movies, built a library with {} unique titles ({})",
            report.read,
            report.added,
            library.stats()
        );
        Ok((library, report))
    }

    /// Opens the file at `path` and [`load`][MovieLibrary::load]s it.
    pub fn open<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<(Self, LoadReport), LoadError> {
        let file = File::open(path.as_ref())?;
        log::debug!("loading movies from {}", path.as_ref().display());
        Self::load(BufReader::new(file), options)
    }
}

/// Titles in order, separated by single spaces.
impl fmt::Display for MovieLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, title) in self.titles().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(title)?;
        }
        Ok(())
    }
}

/// How records are laid out for [`MovieLibrary::load`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Separates the fields of a record. Defaults to a tab.
    pub delimiter: char,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: '\t' }
    }
}

/// Counts gathered while loading.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Non-blank lines read.
    pub read: usize,
    /// Records that became a new movie.
    pub added: usize,
}

impl LoadReport {
    /// Records dropped because their title was already present.
    pub fn duplicates(&self) -> usize {
        self.read - self.added
    }
}

/// The error type returned when a library can't be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// Reading the input failed.
    Io(io::Error),
    /// A record lacked one of its fields.
    MissingField {
        /// 1-based line number.
        line: usize,
        /// Name of the absent field.
        field: &'static str,
    },
    /// The runtime field was not a whole number of minutes.
    InvalidRuntime {
        /// 1-based line number.
        line: usize,
        /// The offending text.
        value: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(_) => f.pad("failed to read movie records"),
            Self::MissingField { line, field } => {
                write!(f, "line {}: missing {} field", line, field)
            }
            Self::InvalidRuntime { line, value } => {
                write!(f, "line {}: invalid runtime {:?}", line, value)
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
