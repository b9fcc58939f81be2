use std::fmt;

use thiserror::Error;

use crate::utils::svg::{Element, SvgDocument, SvgError};

pub const ICON_GLYPH: &str = "⚡";
pub const ICON_BACKGROUND: &str = "#ffffff";
pub const ICON_FOREGROUND: &str = "#000000";
pub const ICON_FONT_FAMILY: &str = "system-ui, -apple-system, sans-serif";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IconError {
    #[error("Invalid size: {0:?}")]
    InvalidSize(String),
}

/// Pixel edge length of a generated icon, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconSize(u32);

impl IconSize {
    pub const MIN: u32 = 16;
    pub const MAX: u32 = 1024;
    pub const DEFAULT: IconSize = IconSize(192);

    pub fn new(px: i64) -> Result<Self, IconError> {
        if px < Self::MIN as i64 || px > Self::MAX as i64 {
            return Err(IconError::InvalidSize(px.to_string()));
        }
        Ok(Self(px as u32))
    }

    /// Parses the raw `size` query value. A missing or empty value means the
    /// default; otherwise the leading integer is used and anything after it
    /// is ignored ("64px" is 64). A `0x` prefix reads the digits as hex.
    pub fn parse(raw: Option<&str>) -> Result<Self, IconError> {
        let raw = match raw {
            None | Some("") => return Ok(Self::DEFAULT),
            Some(raw) => raw,
        };
        let px = leading_integer(raw).ok_or_else(|| IconError::InvalidSize(raw.to_string()))?;
        Self::new(px).map_err(|_| IconError::InvalidSize(raw.to_string()))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for IconSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, body) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };
    let digits: Vec<i64> = body
        .chars()
        .map_while(|c| c.to_digit(radix))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }
    // Saturate: anything this large is out of range anyway.
    let magnitude = digits.iter().fold(0i64, |acc, &d| {
        acc.saturating_mul(radix as i64).saturating_add(d)
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Renders the square site icon: a solid background with the glyph centred
/// horizontally and placed at 75% of the height.
pub fn generate_icon_svg(size: IconSize) -> Result<String, SvgError> {
    let px = size.get();
    let edge = px as f64;

    SvgDocument::square(px)
        .push(
            Element::new("rect")
                .attr("width", px)
                .attr("height", px)
                .attr("fill", ICON_BACKGROUND),
        )
        .push(
            Element::new("text")
                .attr("x", edge / 2.0)
                .attr("y", edge * 0.75)
                .attr("font-size", edge * 0.65)
                .attr("text-anchor", "middle")
                .attr("dominant-baseline", "middle")
                .attr("fill", ICON_FOREGROUND)
                .attr("font-family", ICON_FONT_FAMILY)
                .text(ICON_GLYPH),
        )
        .render()
}
