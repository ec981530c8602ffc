//! Caller-side search state.
//!
//! The ranking functions are stateless. Interactive front ends still need to
//! remember what was typed, what was last shown and whether the last
//! submission was rejected; [`SearchSession`] holds exactly that, borrowing
//! the palette it searches.

use alloc::string::String;
use alloc::vec::Vec;

use crate::hex::ParseError;
use crate::palette::{Palette, PaletteFault};
use crate::rank::{DEFAULT_LIMIT, ScoredEntry, Search};

/// Query text, last accepted results and last error for one search box.
///
/// A rejected submission sets [`error`](Self::error) and leaves the
/// previous results in place.
///
/// ```
/// use colorrank::{Palette, PaletteEntry, SearchSession};
///
/// let palette = Palette::from(vec![PaletteEntry::new("red", "#ff0000")]);
/// let mut session = SearchSession::new(&palette);
///
/// session.set_query("#f00");
/// session.submit().unwrap();
/// assert_eq!(session.results()[0].name(), "red");
///
/// session.set_query("red");
/// assert!(session.submit().is_err());
/// assert!(session.error().is_some());
/// assert_eq!(session.results().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct SearchSession<'p> {
    palette: &'p Palette,
    limit: usize,
    query: String,
    results: Vec<ScoredEntry<'p>>,
    skipped: Vec<PaletteFault>,
    error: Option<ParseError>,
}

impl<'p> SearchSession<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self {
            palette,
            limit: DEFAULT_LIMIT,
            query: String::new(),
            results: Vec::new(),
            skipped: Vec::new(),
            error: None,
        }
    }

    /// Maximum number of results per submission.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Replace the query text. Clears any error from the last submission.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.error = None;
    }

    /// Search for the current query text.
    ///
    /// On success the results are replaced and the error cleared. On failure
    /// the error is recorded and returned; results are untouched.
    pub fn submit(&mut self) -> Result<(), ParseError> {
        match Search::parse(&self.query) {
            Ok(search) => {
                let result = search.limit(self.limit).rank(self.palette);
                self.skipped = result.skipped().to_vec();
                self.results = result.into_entries();
                self.error = None;
                Ok(())
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(query = %self.query, "rejected search query");
                self.error = Some(e);
                Err(e)
            }
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results of the last accepted submission.
    pub fn results(&self) -> &[ScoredEntry<'p>] {
        &self.results
    }

    /// Palette entries skipped by the last accepted submission.
    pub fn skipped(&self) -> &[PaletteFault] {
        &self.skipped
    }

    /// Error from the last submission, if it was rejected.
    pub fn error(&self) -> Option<ParseError> {
        self.error
    }

    pub fn palette(&self) -> &'p Palette {
        self.palette
    }
}
