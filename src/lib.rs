//! Rank a named-color palette by similarity to a hex color.
//!
//! Pure and synchronous: parse a `#rgb` / `#rrggbb` query, score every
//! palette entry by Euclidean RGB distance, return the closest matches in
//! a stable order.
//!
//! # Modules
//!
//! - [`hex`] — hex color parsing and validation
//! - [`distance`] — Euclidean distance in RGB space
//! - [`palette`] — palette entries, validation, JSON loading (`json` feature)
//! - [`rank`] — linear-scan ranking with bounded top-K selection
//! - [`index`] — grid-partitioned palette with identical ranking order
//! - [`session`] — caller-side search state (query, results, error)
//! - [`svg`] — swatch table rendering (`svg` feature)
//!
//! Loader, serde and SVG tests are feature-gated; run the full suite with
//! `cargo test --all-features`.
//!
//! # Example
//!
//! ```
//! use colorrank::{Palette, PaletteEntry, search};
//!
//! let palette = Palette::from(vec![
//!     PaletteEntry::new("red", "#ff0000"),
//!     PaletteEntry::new("black", "#000000"),
//!     PaletteEntry::new("white", "#ffffff"),
//! ]);
//!
//! let result = search(&palette, "#fe0101", 2).unwrap();
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.entries()[0].name(), "red");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod distance;
pub mod hex;
#[cfg(feature = "alloc")]
pub mod index;
#[cfg(feature = "alloc")]
pub mod palette;
#[cfg(feature = "alloc")]
pub mod rank;
#[cfg(feature = "alloc")]
pub mod session;
#[cfg(feature = "svg")]
pub mod svg;

pub use distance::{MAX_DISTANCE, distance, distance_squared};
pub use hex::{ParseError, Rgb, parse_hex};
#[cfg(feature = "alloc")]
pub use index::PaletteIndex;
#[cfg(feature = "alloc")]
pub use palette::{FaultReason, Palette, PaletteEntry, PaletteFault};
#[cfg(feature = "alloc")]
pub use rank::{DEFAULT_LIMIT, ScoredEntry, Search, SearchResult, rank, search};
#[cfg(feature = "alloc")]
pub use session::SearchSession;
