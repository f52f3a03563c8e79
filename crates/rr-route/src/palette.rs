//! Fixed per-rank route colours.

use std::fmt;

/// An sRGB colour, 8 bits per channel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RouteColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#FF5733`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RouteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Ten visually distinct line colours, assigned by rank and cycled.
pub const ROUTE_PALETTE: [RouteColor; 10] = [
    RouteColor::rgb(0xFF, 0x57, 0x33), // red-orange
    RouteColor::rgb(0x33, 0xA1, 0xFF), // blue
    RouteColor::rgb(0x33, 0xFF, 0x57), // green
    RouteColor::rgb(0xFF, 0x33, 0xA1), // pink
    RouteColor::rgb(0xA1, 0x33, 0xFF), // purple
    RouteColor::rgb(0xFF, 0xD7, 0x00), // gold
    RouteColor::rgb(0x00, 0xCE, 0xD1), // turquoise
    RouteColor::rgb(0xFF, 0x63, 0x47), // tomato
    RouteColor::rgb(0x7B, 0x68, 0xEE), // medium slate blue
    RouteColor::rgb(0x32, 0xCD, 0x32), // lime green
];

/// Palette colour for `rank`, wrapping after the tenth route.
#[inline]
pub fn color_for_rank(rank: usize) -> RouteColor {
    ROUTE_PALETTE[rank % ROUTE_PALETTE.len()]
}
