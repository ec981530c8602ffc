//! Named-color palettes.
//!
//! A [`Palette`] is loaded by the caller (file, network, compiled-in table)
//! and borrowed read-only by every search. Entries keep their hex text as
//! supplied; decoding happens during ranking, where an undecodable entry is
//! skipped and reported as a [`PaletteFault`] rather than failing the search.
//!
//! With the `json` feature, [`Palette::from_json`] reads both a bare array
//! of entries and the `{"colors": [{"color": ..., "hex": ...}]}` document
//! shape used by the xkcd color survey dumps.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::hex::{Rgb, parse_hex};

/// A display name paired with a hex color code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteEntry {
    /// Display name, e.g. `"cloudy blue"`.
    #[cfg_attr(feature = "serde", serde(alias = "color"))]
    pub name: String,
    /// Hex code, canonically `#rrggbb`.
    pub hex: String,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }

    /// Decode this entry's hex code.
    pub fn rgb(&self) -> Result<Rgb, crate::hex::ParseError> {
        parse_hex(&self.hex)
    }
}

/// An ordered sequence of palette entries.
///
/// Order does not affect which entries match, only how equal-distance
/// matches are ordered: earlier entries rank first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: PaletteEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> core::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Check every entry for an empty name or an undecodable hex code.
    ///
    /// Ranking tolerates both; this is for loaders that want to report
    /// data problems up front.
    pub fn validate(&self) -> Vec<PaletteFault> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                if entry.rgb().is_err() {
                    Some(PaletteFault::new(index, FaultReason::InvalidHex))
                } else if entry.name.is_empty() {
                    Some(PaletteFault::new(index, FaultReason::EmptyName))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Load a palette from JSON.
    ///
    /// Accepts `[{"name": ..., "hex": ...}, ...]` or
    /// `{"colors": [{"color": ..., "hex": ...}, ...]}`, picked by the first
    /// non-whitespace character. Unknown fields are ignored; entries are not
    /// validated. Errors carry the line and column of the offending entry.
    ///
    /// ```
    /// # #[cfg(feature = "json")] {
    /// use colorrank::Palette;
    ///
    /// let palette = Palette::from_json(
    ///     r##"{"colors": [{"color": "cloudy blue", "hex": "#acc2d9"}]}"##,
    /// ).unwrap();
    /// assert_eq!(palette.entries()[0].name, "cloudy blue");
    /// # }
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        #[derive(serde::Deserialize)]
        struct Wrapped {
            colors: Vec<PaletteEntry>,
        }

        let entries = if text.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<PaletteEntry>>(text)?
        } else {
            serde_json::from_str::<Wrapped>(text)?.colors
        };
        Ok(Self { entries })
    }
}

impl From<Vec<PaletteEntry>> for Palette {
    fn from(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<PaletteEntry> for Palette {
    fn from_iter<I: IntoIterator<Item = PaletteEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = core::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Why a palette entry is unusable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FaultReason {
    /// The hex code does not decode.
    InvalidHex,
    /// The display name is empty.
    EmptyName,
}

/// A palette entry that failed validation or decoding.
///
/// Entry-scoped and non-fatal: ranking skips the entry and keeps going.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaletteFault {
    /// Position of the entry in its palette.
    pub index: usize,
    pub reason: FaultReason,
}

impl PaletteFault {
    pub const fn new(index: usize, reason: FaultReason) -> Self {
        Self { index, reason }
    }
}

impl fmt::Display for PaletteFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.reason {
            FaultReason::InvalidHex => "hex code is not #rgb or #rrggbb",
            FaultReason::EmptyName => "name is empty",
        };
        write!(f, "palette entry {}: {what}", self.index)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PaletteFault {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn entry_decodes_hex() {
        let entry = PaletteEntry::new("cloudy blue", "#acc2d9");
        assert_eq!(entry.rgb(), Ok(Rgb::new(0xac, 0xc2, 0xd9)));
    }

    #[test]
    fn validate_reports_each_bad_entry() {
        let palette = Palette::from(vec![
            PaletteEntry::new("red", "#ff0000"),
            PaletteEntry::new("broken", "ff0000"),
            PaletteEntry::new("", "#00ff00"),
            PaletteEntry::new("", "#nothex"),
        ]);
        assert_eq!(
            palette.validate(),
            vec![
                PaletteFault::new(1, FaultReason::InvalidHex),
                PaletteFault::new(2, FaultReason::EmptyName),
                PaletteFault::new(3, FaultReason::InvalidHex),
            ]
        );
    }

    #[test]
    fn validate_clean_palette() {
        let palette: Palette = [("a", "#000"), ("b", "#FFFFFF")]
            .into_iter()
            .map(|(n, h)| PaletteEntry::new(n, h))
            .collect();
        assert!(palette.validate().is_empty());
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(1).map(|e| e.name.as_str()), Some("b"));
    }

    #[test]
    fn fault_display() {
        let fault = PaletteFault::new(7, FaultReason::InvalidHex);
        assert_eq!(
            fault.to_string(),
            "palette entry 7: hex code is not #rgb or #rrggbb"
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_wrapped_document() {
        let palette = Palette::from_json(
            r##"{"colors": [
                {"color": "cloudy blue", "hex": "#acc2d9"},
                {"color": "dark pastel green", "hex": "#56ae57"}
            ]}"##,
        )
        .unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.entries()[1], PaletteEntry::new("dark pastel green", "#56ae57"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_bare_array() {
        let palette =
            Palette::from_json(r##"[{"name": "red", "hex": "#ff0000", "extra": 1}]"##).unwrap();
        assert_eq!(palette.entries(), &[PaletteEntry::new("red", "#ff0000")]);
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_malformed_is_error() {
        assert!(Palette::from_json(r#"{"colors": [{"color": "x"}]}"#).is_err());
        assert!(Palette::from_json("not json").is_err());
        assert!(Palette::from_json(r#"{"palette": []}"#).is_err());
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_error_points_at_bad_entry() {
        let e = Palette::from_json(
            "{\"colors\": [\n  {\"color\": \"a\", \"hex\": \"#000000\"},\n  {\"color\": \"b\"}\n]}",
        )
        .unwrap_err();
        assert!(e.to_string().contains("missing field `hex`"), "{e}");
        assert_eq!(e.line(), 3);
        assert!(e.column() >= 3, "{e}");

        let e = Palette::from_json("[\n  {\"name\": \"a\", \"hex\": 7}\n]").unwrap_err();
        assert_eq!(e.line(), 2);
        assert!(e.is_data(), "{e}");
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_color_and_name_together_is_duplicate() {
        let e = Palette::from_json(r##"{"colors":[{"color":"x","name":"y","hex":"#000000"}]}"##)
            .unwrap_err();
        assert!(e.to_string().contains("duplicate field `name`"), "{e}");
        assert_eq!(e.line(), 1);
        assert!(e.column() > 11, "{e}");
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_leading_whitespace_bare_array() {
        let palette = Palette::from_json("\n  [ ]").unwrap();
        assert!(palette.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_bare_array() {
        let palette = Palette::from(vec![PaletteEntry::new("red", "#ff0000")]);
        let text = serde_json::to_string(&palette).unwrap();
        assert_eq!(text, r##"[{"name":"red","hex":"#ff0000"}]"##);
    }
}
