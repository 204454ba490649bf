use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::CubeError;

/// The color of a single facelet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StickerColor {
    Red,
    White,
    Green,
    Orange,
    Yellow,
    Blue,
}

impl StickerColor {
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::White,
        Self::Green,
        Self::Orange,
        Self::Yellow,
        Self::Blue,
    ];

    /// The lowercase single letter code used when printing sides
    pub fn letter(self) -> char {
        match self {
            StickerColor::Red => 'r',
            StickerColor::White => 'w',
            StickerColor::Green => 'g',
            StickerColor::Orange => 'o',
            StickerColor::Yellow => 'y',
            StickerColor::Blue => 'b',
        }
    }
}

impl fmt::Display for StickerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The position tag of a side. The discriminants follow the order in which a cube stores
/// its sides.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    U,
    F,
    D,
    B,
    R,
    L,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, F, D, B, R, L];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::F => 'F',
            Face::D => 'D',
            Face::B => 'B',
            Face::R => 'R',
            Face::L => 'L',
        }
    }

    /// The color every facelet of this side has on a solved cube
    pub fn solved_color(self) -> StickerColor {
        match self {
            Face::U => StickerColor::Red,
            Face::F => StickerColor::White,
            Face::D => StickerColor::Orange,
            Face::B => StickerColor::Yellow,
            Face::R => StickerColor::Green,
            Face::L => StickerColor::Blue,
        }
    }
}

impl TryFrom<char> for Face {
    type Error = CubeError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Face::ALL
            .into_iter()
            .find(|face| face.letter() == value)
            .ok_or_else(|| CubeError::InvalidState(format!("{value:?} is not a side position")))
    }
}

impl FromStr for Face {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Face::try_from(c),
            _ => Err(CubeError::InvalidState(format!(
                "{s:?} is not a side position"
            ))),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
