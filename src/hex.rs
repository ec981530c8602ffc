//! Hex color parsing: `#RGB` and `#RRGGBB`, case-insensitive.
//!
//! The leading `#` is required and no surrounding whitespace is accepted.
//! Three-digit shorthand is expanded by doubling each digit, so `#0af`
//! decodes the same as `#00aaff`.

use core::fmt;
use core::str::FromStr;

/// An sRGB color with 8-bit channels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Canonical lowercase `#rrggbb` form.
    #[cfg(feature = "alloc")]
    pub fn to_hex(self) -> alloc::string::String {
        alloc::format!("{self}")
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_hex(value)
    }
}

/// Hex color parse error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Input is not `#` followed by exactly 3 or 6 hex digits.
    InvalidFormat,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => {
                f.write_str("Invalid color format. Please use a valid hex color code.")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Parse `#RGB` or `#RRGGBB` into an [`Rgb`].
///
/// ```
/// use colorrank::{ParseError, Rgb, parse_hex};
///
/// assert_eq!(parse_hex("#FF8000"), Ok(Rgb::new(255, 128, 0)));
/// assert_eq!(parse_hex("#0af"), Ok(Rgb::new(0, 170, 255)));
/// assert_eq!(parse_hex("ff8000"), Err(ParseError::InvalidFormat));
/// ```
pub fn parse_hex(text: &str) -> Result<Rgb, ParseError> {
    let digits = text
        .strip_prefix('#')
        .ok_or(ParseError::InvalidFormat)?
        .as_bytes();

    match *digits {
        [r, g, b] => Ok(Rgb::new(
            expand_nibble(r)?,
            expand_nibble(g)?,
            expand_nibble(b)?,
        )),
        [r1, r0, g1, g0, b1, b0] => Ok(Rgb::new(
            parse_byte(r1, r0)?,
            parse_byte(g1, g0)?,
            parse_byte(b1, b0)?,
        )),
        _ => Err(ParseError::InvalidFormat),
    }
}

/// Expand a single hex nibble: 'f' → 0xFF, 'a' → 0xAA.
fn expand_nibble(ch: u8) -> Result<u8, ParseError> {
    let n = hex_val(ch)?;
    Ok(n << 4 | n)
}

fn parse_byte(hi: u8, lo: u8) -> Result<u8, ParseError> {
    Ok(hex_val(hi)? << 4 | hex_val(lo)?)
}

fn hex_val(ch: u8) -> Result<u8, ParseError> {
    match ch {
        b'0'..=b'9' => Ok(ch - b'0'),
        b'a'..=b'f' => Ok(ch - b'a' + 10),
        b'A'..=b'F' => Ok(ch - b'A' + 10),
        _ => Err(ParseError::InvalidFormat),
    }
}
