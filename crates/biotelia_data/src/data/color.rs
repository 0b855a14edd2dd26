use serde::{Deserialize, Serialize};
use std::fmt;

/// A 24-bit RGB color.
///
/// Equality is exact byte comparison. Color mismatch between a carried color
/// and a structure color is what triggers a pollination dance, so there is no
/// tolerance here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    #[must_use]
    pub fn r(self) -> u8 {
        self.0[0]
    }

    #[must_use]
    pub fn g(self) -> u8 {
        self.0[1]
    }

    #[must_use]
    pub fn b(self) -> u8 {
        self.0[2]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self([r, g, b])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}
