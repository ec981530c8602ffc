//! Grid-partitioned palette for repeated searches.
//!
//! [`PaletteIndex`] decodes a palette once and buckets the entries into an
//! 8×8×8 grid over RGB space, 32 levels per cell per channel. A query visits
//! cells in rings of growing Chebyshev radius around its own cell and stops
//! once the K-th best candidate is strictly closer than anything in an
//! unvisited cell could be.
//!
//! Results are identical to [`rank`](crate::rank::rank): same entries, same
//! order, same palette-order tie-break, same skipped report.
//!
//! ```
//! use colorrank::{Palette, PaletteEntry, PaletteIndex, Rgb, rank};
//!
//! let palette: Palette = (0..=255u8)
//!     .map(|v| PaletteEntry::new("gray", format!("#{v:02x}{v:02x}{v:02x}")))
//!     .collect();
//! let index = PaletteIndex::new(&palette);
//!
//! let query = Rgb::new(40, 90, 10);
//! assert_eq!(index.rank(query, 5), rank(&palette, query, 5));
//! ```

use alloc::vec::Vec;

use crate::hex::{ParseError, Rgb, parse_hex};
use crate::palette::{FaultReason, Palette, PaletteFault};
use crate::rank::{ScoredEntry, SearchResult, report_skipped, select_top_k};

/// log2 of the channel levels covered by one cell.
const CELL_SHIFT: u32 = 5;
/// Channel levels per cell.
const CELL_SIZE: i32 = 1 << CELL_SHIFT;
/// Cells per axis.
const GRID: i32 = 256 / CELL_SIZE;

/// A palette decoded once and bucketed for nearest-color queries.
#[derive(Clone, Debug)]
pub struct PaletteIndex<'p> {
    palette: &'p Palette,
    /// `GRID³` buckets of `(palette index, color)`, each in palette order.
    cells: Vec<Vec<(usize, Rgb)>>,
    skipped: Vec<PaletteFault>,
}

impl<'p> PaletteIndex<'p> {
    /// Decode and bucket every entry of `palette`.
    ///
    /// Undecodable entries are recorded once here and attached to every
    /// result, as the linear scan would.
    pub fn new(palette: &'p Palette) -> Self {
        let mut cells = Vec::new();
        cells.resize_with((GRID * GRID * GRID) as usize, Vec::new);
        let mut skipped = Vec::new();

        for (index, entry) in palette.iter().enumerate() {
            match entry.rgb() {
                Ok(rgb) => cells[cell_slot(cell_of(rgb))].push((index, rgb)),
                Err(_) => skipped.push(PaletteFault::new(index, FaultReason::InvalidHex)),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            palette = palette.len(),
            skipped = skipped.len(),
            occupied = cells.iter().filter(|c| !c.is_empty()).count(),
            "built palette index"
        );

        Self {
            palette,
            cells,
            skipped,
        }
    }

    pub fn palette(&self) -> &'p Palette {
        self.palette
    }

    /// Entries that could not be decoded.
    pub fn skipped(&self) -> &[PaletteFault] {
        &self.skipped
    }

    /// Number of decoded, searchable entries.
    pub fn len(&self) -> usize {
        self.palette.len() - self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Closest `limit` entries to `query`.
    pub fn rank(&self, query: Rgb, limit: usize) -> SearchResult<'p> {
        report_skipped(&self.skipped, self.palette.len());

        let mut found = Vec::new();
        if limit > 0 {
            let home = cell_of(query);
            for radius in 0..GRID {
                self.collect_ring(home, radius, query, &mut found);
                if found.len() >= limit {
                    select_top_k(&mut found, limit);
                }
                let Some(bound) = unvisited_bound(query, home, radius) else {
                    break;
                };
                if found.len() >= limit
                    && found
                        .last()
                        .is_some_and(|kth| u64::from(kth.distance_squared()) < bound)
                {
                    break;
                }
            }
            select_top_k(&mut found, limit);
        }

        SearchResult::new(query, found, self.skipped.clone())
    }

    /// Parse `text` and rank against it.
    pub fn search(&self, text: &str, limit: usize) -> Result<SearchResult<'p>, ParseError> {
        Ok(self.rank(parse_hex(text)?, limit))
    }

    fn collect_ring(
        &self,
        home: [i32; 3],
        radius: i32,
        query: Rgb,
        found: &mut Vec<ScoredEntry<'p>>,
    ) {
        let span = |c: i32| (c - radius).max(0)..=(c + radius).min(GRID - 1);
        for x in span(home[0]) {
            for y in span(home[1]) {
                for z in span(home[2]) {
                    let cell = [x, y, z];
                    let chebyshev = (0..3).map(|a| (cell[a] - home[a]).abs()).max();
                    if chebyshev != Some(radius) {
                        continue;
                    }
                    let entries = self.palette.entries();
                    found.extend(
                        self.cells[cell_slot(cell)]
                            .iter()
                            .map(|&(i, rgb)| ScoredEntry::new(&entries[i], i, rgb, query)),
                    );
                }
            }
        }
    }
}

fn cell_of(rgb: Rgb) -> [i32; 3] {
    rgb.to_array().map(|c| i32::from(c >> CELL_SHIFT))
}

fn cell_slot([x, y, z]: [i32; 3]) -> usize {
    ((x * GRID + y) * GRID + z) as usize
}

/// Smallest squared distance from `query` to any cell outside the cube of
/// `radius` around `home`, or `None` when that cube already covers the grid.
fn unvisited_bound(query: Rgb, home: [i32; 3], radius: i32) -> Option<u64> {
    let next = radius + 1;
    let mut gap: Option<i32> = None;
    for (axis, q) in query.to_array().into_iter().enumerate() {
        let q = i32::from(q);
        let c = home[axis];
        if c + next < GRID {
            let up = (c + next) * CELL_SIZE - q;
            gap = Some(gap.map_or(up, |g| g.min(up)));
        }
        if c - next >= 0 {
            let down = q - ((c - next) * CELL_SIZE + CELL_SIZE - 1);
            gap = Some(gap.map_or(down, |g| g.min(down)));
        }
    }
    gap.map(|g| {
        let g = g as u64;
        g * g
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteEntry;
    use crate::rank::rank;
    use alloc::format;

    fn cube(step: usize) -> Palette {
        let mut palette = Palette::new();
        for r in (0..=255).step_by(step) {
            for g in (0..=255).step_by(step) {
                for b in (0..=255).step_by(step) {
                    palette.push(PaletteEntry::new(
                        format!("{r}/{g}/{b}"),
                        format!("#{r:02x}{g:02x}{b:02x}"),
                    ));
                }
            }
        }
        palette
    }

    #[test]
    fn grid_covers_channel_range() {
        assert_eq!(GRID, 8);
        assert_eq!(cell_of(Rgb::BLACK), [0, 0, 0]);
        assert_eq!(cell_of(Rgb::WHITE), [7, 7, 7]);
        assert_eq!(cell_slot([7, 7, 7]), 511);
    }

    #[test]
    fn bound_is_gap_to_nearest_unvisited_cell() {
        // Query at 40 sits in cell 1 ([32, 63]); cell 2 starts at 64, cell 0 ends at 31.
        let q = Rgb::new(40, 40, 40);
        assert_eq!(unvisited_bound(q, cell_of(q), 0), Some(9 * 9));
        assert_eq!(unvisited_bound(q, cell_of(q), 1), Some(56 * 56));
        assert_eq!(unvisited_bound(q, cell_of(q), 5), Some(184 * 184));
        assert_eq!(unvisited_bound(q, cell_of(q), 6), None);
    }

    #[test]
    fn matches_linear_scan_on_cube() {
        let palette = cube(17);
        let index = PaletteIndex::new(&palette);
        for query in [
            Rgb::BLACK,
            Rgb::WHITE,
            Rgb::new(8, 8, 8),
            Rgb::new(127, 128, 129),
            Rgb::new(255, 0, 77),
        ] {
            for limit in [0, 1, 5, 64, 1000, 10_000] {
                assert_eq!(
                    index.rank(query, limit),
                    rank(&palette, query, limit),
                    "{query} limit {limit}"
                );
            }
        }
    }

    #[test]
    fn sparse_palette_far_from_query() {
        let palette = Palette::from(alloc::vec![
            PaletteEntry::new("white", "#ffffff"),
            PaletteEntry::new("also white", "#fff"),
            PaletteEntry::new("gray", "#808080"),
        ]);
        let index = PaletteIndex::new(&palette);
        assert_eq!(index.rank(Rgb::BLACK, 2), rank(&palette, Rgb::BLACK, 2));
        assert_eq!(index.rank(Rgb::BLACK, 2).entries()[0].name(), "gray");
    }

    #[test]
    fn skipped_entries_match_linear_scan() {
        let palette = Palette::from(alloc::vec![
            PaletteEntry::new("bad", "#12345"),
            PaletteEntry::new("red", "#ff0000"),
            PaletteEntry::new("worse", "red"),
        ]);
        let index = PaletteIndex::new(&palette);
        assert_eq!(index.len(), 1);
        assert_eq!(index.skipped().len(), 2);
        assert_eq!(index.rank(Rgb::BLACK, 10), rank(&palette, Rgb::BLACK, 10));
        assert_eq!(index.rank(Rgb::BLACK, 0), rank(&palette, Rgb::BLACK, 0));
    }

    #[test]
    fn empty_palette() {
        let palette = Palette::new();
        let index = PaletteIndex::new(&palette);
        assert!(index.is_empty());
        assert!(index.rank(Rgb::WHITE, 100).is_empty());
        assert_eq!(index.search("nope", 1), Err(ParseError::InvalidFormat));
    }
}
