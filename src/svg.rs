//! SVG rendering of search results as a swatch table.
//!
//! One row per match: a filled swatch, the color name, its hex code and the
//! distance to the query. The query color itself is shown in the header.
//!
//! # Example
//!
//! ```
//! use colorrank::{Palette, PaletteEntry, search, svg::render_results_svg};
//!
//! let palette = Palette::from(vec![
//!     PaletteEntry::new("red", "#ff0000"),
//!     PaletteEntry::new("black", "#000000"),
//! ]);
//! let result = search(&palette, "#fe0101", 10).unwrap();
//!
//! let svg = render_results_svg(&result);
//! assert!(svg.contains("#ff0000"));
//! // svg is a complete SVG document string
//! ```

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::rank::{ScoredEntry, SearchResult};

/// Margin around the table.
const MARGIN: f64 = 20.0;
/// Height of every row, header included.
const ROW_H: f64 = 28.0;
/// Swatch edge length.
const SWATCH: f64 = 20.0;
/// Left edge of each column, relative to the margin.
const COL_SWATCH: f64 = 0.0;
const COL_NAME: f64 = 60.0;
const COL_HEX: f64 = 300.0;
const COL_DISTANCE: f64 = 400.0;
/// Table width, relative to the margin.
const TABLE_W: f64 = 480.0;

/// Render a complete SVG document for `result`.
pub fn render_results_svg(result: &SearchResult<'_>) -> String {
    let rows = result.len() + 1;
    let total_w = TABLE_W + 2.0 * MARGIN;
    let total_h = rows as f64 * ROW_H + 2.0 * MARGIN;

    let mut svg = String::with_capacity(1024 + 256 * result.len());

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; font-size: 13px; fill: #333; }
  .head { font-weight: bold; }
  .rule { stroke: #999; stroke-width: 1; }
  .swatch { stroke: #666; stroke-width: 1; }
  .distance { fill: #666; }
  @media (prefers-color-scheme: dark) {
    text { fill: #e0e0e0; }
    .rule { stroke: #555; }
    .swatch { stroke: #aaa; }
    .distance { fill: #aaa; }
  }
</style>
"##,
    );

    let baseline = |row: usize| MARGIN + row as f64 * ROW_H + ROW_H / 2.0 + 4.0;

    // Header, with the query swatch in the color column.
    let y = baseline(0);
    svg.push_str(&swatch(MARGIN + COL_SWATCH, MARGIN, &format!("{}", result.query())));
    for (x, title) in [
        (COL_NAME, "Name"),
        (COL_HEX, "Hex Code"),
        (COL_DISTANCE, "Distance"),
    ] {
        svg.push_str(&format!(
            r#"<text x="{}" y="{y}" class="head">{title}</text>"#,
            MARGIN + x
        ));
        svg.push('\n');
    }
    let rule_y = MARGIN + ROW_H;
    svg.push_str(&format!(
        r#"<line x1="{MARGIN}" y1="{rule_y}" x2="{}" y2="{rule_y}" class="rule"/>"#,
        MARGIN + TABLE_W
    ));
    svg.push('\n');

    for (i, m) in result.iter().enumerate() {
        svg.push_str(&render_row(m, i + 1, baseline(i + 1)));
    }

    svg.push_str("</svg>\n");
    svg
}

fn render_row(m: &ScoredEntry<'_>, row: usize, y: f64) -> String {
    let top = MARGIN + row as f64 * ROW_H;
    let mut out = swatch(MARGIN + COL_SWATCH, top, &format!("{}", m.rgb()));
    out.push_str(&format!(
        r#"<text x="{}" y="{y}">{}</text>"#,
        MARGIN + COL_NAME,
        escape_xml(m.name())
    ));
    out.push_str(&format!(
        r#"<text x="{}" y="{y}">{}</text>"#,
        MARGIN + COL_HEX,
        escape_xml(m.hex())
    ));
    out.push_str(&format!(
        r#"<text x="{}" y="{y}" class="distance">{:.2}</text>"#,
        MARGIN + COL_DISTANCE,
        m.distance()
    ));
    out.push('\n');
    out
}

/// A swatch square vertically centered in the row starting at `top`.
fn swatch(x: f64, top: f64, fill: &str) -> String {
    let y = top + (ROW_H - SWATCH) / 2.0;
    format!(
        r#"<rect x="{x}" y="{y}" width="{SWATCH}" height="{SWATCH}" fill="{fill}" class="swatch"/>"#
    )
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
