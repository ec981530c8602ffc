//! Linear-scan ranking with bounded top-K selection.
//!
//! Every palette entry is decoded and scored against the query. Matches are
//! ordered by ascending distance; entries at equal distance keep their
//! palette order. Selection is keyed by `(distance², palette index)`, which
//! is a total order, so partially selecting the first K and sorting only
//! those gives exactly the prefix of a stable full sort.
//!
//! # Example
//!
//! ```
//! use colorrank::{Palette, PaletteEntry, Rgb, Search};
//!
//! let palette: Palette = [("black", "#000000"), ("navy", "#000080"), ("ink", "#000")]
//!     .into_iter()
//!     .map(|(name, hex)| PaletteEntry::new(name, hex))
//!     .collect();
//!
//! let result = Search::new(Rgb::BLACK).limit(2).rank(&palette);
//!
//! // "black" and "ink" are both exact matches; palette order breaks the tie.
//! let names: Vec<_> = result.iter().map(|m| m.name()).collect();
//! assert_eq!(names, ["black", "ink"]);
//! assert_eq!(result.entries()[0].distance(), 0.0);
//! ```

use alloc::vec::Vec;

use num_traits::Float;

use crate::distance::distance_squared;
use crate::hex::{ParseError, Rgb, parse_hex};
use crate::palette::{FaultReason, Palette, PaletteEntry, PaletteFault};

/// Number of matches returned when no limit is given.
pub const DEFAULT_LIMIT: usize = 100;

/// A palette entry scored against a query.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScoredEntry<'p> {
    entry: &'p PaletteEntry,
    index: usize,
    rgb: Rgb,
    distance_squared: u32,
}

impl<'p> ScoredEntry<'p> {
    pub(crate) fn new(entry: &'p PaletteEntry, index: usize, rgb: Rgb, query: Rgb) -> Self {
        Self {
            entry,
            index,
            rgb,
            distance_squared: distance_squared(query, rgb),
        }
    }

    /// The palette entry this score belongs to.
    pub fn entry(&self) -> &'p PaletteEntry {
        self.entry
    }

    pub fn name(&self) -> &'p str {
        &self.entry.name
    }

    /// The entry's hex code as it appears in the palette.
    pub fn hex(&self) -> &'p str {
        &self.entry.hex
    }

    /// Decoded color, for drawing a swatch.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Position of the entry in the palette.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Euclidean distance to the query.
    pub fn distance(&self) -> f64 {
        Float::sqrt(f64::from(self.distance_squared))
    }

    pub fn distance_squared(&self) -> u32 {
        self.distance_squared
    }

    fn sort_key(&self) -> (u32, usize) {
        (self.distance_squared, self.index)
    }
}

/// Ranked matches for one query, closest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<'p> {
    query: Rgb,
    entries: Vec<ScoredEntry<'p>>,
    skipped: Vec<PaletteFault>,
}

impl<'p> SearchResult<'p> {
    pub(crate) fn new(
        query: Rgb,
        entries: Vec<ScoredEntry<'p>>,
        skipped: Vec<PaletteFault>,
    ) -> Self {
        Self {
            query,
            entries,
            skipped,
        }
    }

    /// The color that was searched for.
    pub fn query(&self) -> Rgb {
        self.query
    }

    /// Matches in ascending distance order.
    pub fn entries(&self) -> &[ScoredEntry<'p>] {
        &self.entries
    }

    /// Palette entries left out because their hex code did not decode,
    /// in palette order.
    pub fn skipped(&self) -> &[PaletteFault] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ScoredEntry<'p>> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<ScoredEntry<'p>> {
        self.entries
    }
}

impl<'a, 'p> IntoIterator for &'a SearchResult<'p> {
    type Item = &'a ScoredEntry<'p>;
    type IntoIter = core::slice::Iter<'a, ScoredEntry<'p>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A search request: a query color and a result limit.
///
/// The palette is supplied per call and only borrowed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Search {
    query: Rgb,
    limit: usize,
}

impl Search {
    /// Search for `query`, returning up to [`DEFAULT_LIMIT`] matches.
    pub fn new(query: Rgb) -> Self {
        Self {
            query,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Parse a `#rgb` / `#rrggbb` query.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse_hex(text).map(Self::new)
    }

    /// Maximum number of matches. Zero yields an empty result.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn query(&self) -> Rgb {
        self.query
    }

    pub fn max_results(&self) -> usize {
        self.limit
    }

    /// Score every palette entry and keep the closest.
    pub fn rank<'p>(&self, palette: &'p Palette) -> SearchResult<'p> {
        let mut scored = Vec::with_capacity(palette.len());
        let mut skipped = Vec::new();

        for (index, entry) in palette.iter().enumerate() {
            match entry.rgb() {
                Ok(rgb) => scored.push(ScoredEntry::new(entry, index, rgb, self.query)),
                Err(_) => skipped.push(PaletteFault::new(index, FaultReason::InvalidHex)),
            }
        }

        report_skipped(&skipped, palette.len());
        select_top_k(&mut scored, self.limit);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            query = %self.query,
            limit = self.limit,
            palette = palette.len(),
            matches = scored.len(),
            "ranked palette"
        );

        SearchResult::new(self.query, scored, skipped)
    }
}

/// Rank `palette` by distance to `query`, keeping at most `limit` matches.
pub fn rank(palette: &Palette, query: Rgb, limit: usize) -> SearchResult<'_> {
    Search::new(query).limit(limit).rank(palette)
}

/// Parse `text` as a hex color and rank `palette` against it.
///
/// A malformed query fails with [`ParseError::InvalidFormat`] before any
/// ranking happens.
pub fn search<'p>(
    palette: &'p Palette,
    text: &str,
    limit: usize,
) -> Result<SearchResult<'p>, ParseError> {
    Ok(Search::parse(text)?.limit(limit).rank(palette))
}

/// Reduce `scored` to its `limit` smallest entries, sorted.
pub(crate) fn select_top_k(scored: &mut Vec<ScoredEntry<'_>>, limit: usize) {
    if limit == 0 {
        scored.clear();
        return;
    }
    if scored.len() > limit {
        scored.select_nth_unstable_by_key(limit - 1, |m| m.sort_key());
        scored.truncate(limit);
    }
    scored.sort_unstable_by_key(|m| m.sort_key());
}

#[cfg(feature = "tracing")]
pub(crate) fn report_skipped(skipped: &[PaletteFault], palette_len: usize) {
    if let Some(first) = skipped.first() {
        tracing::warn!(
            skipped = skipped.len(),
            palette = palette_len,
            first_index = first.index,
            "skipped palette entries with undecodable hex codes"
        );
    }
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn report_skipped(_skipped: &[PaletteFault], _palette_len: usize) {}
