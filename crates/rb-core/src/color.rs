//! RGB paint for robot parts.

use std::fmt;

/// An opaque 24-bit RGB color.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK:  Color = Color::rgb(0, 0, 0);
    pub const WHITE:  Color = Color::rgb(255, 255, 255);
    pub const RED:    Color = Color::rgb(255, 0, 0);
    pub const GREEN:  Color = Color::rgb(0, 255, 0);
    pub const BLUE:   Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
