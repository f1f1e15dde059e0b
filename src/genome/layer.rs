//! Layer and seed pattern types

use std::fmt;
use std::str::FromStr;

use super::{Error, FillMode, FlipMode, Result, SkipMode};
use crate::grid::grid_size;

/// Largest value a nibble field can carry
pub const NIBBLE_MAX: u8 = 0x0F;

/// 8-cell automaton seed, bit `i` of the byte is cell `i`
///
/// The textual form lists cells least-significant bit first, so `"10000000"`
/// is the byte `0x01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pattern(u8);

impl Pattern {
    /// Create from raw byte
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// Raw byte
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// State of seed cell `index` (0..8)
    #[must_use]
    pub const fn bit(self, index: usize) -> bool {
        index < 8 && (self.0 >> index) & 1 == 1
    }

    /// Seed cells in order
    #[must_use]
    pub fn bits(self) -> [bool; 8] {
        std::array::from_fn(|i| self.bit(i))
    }
}

impl From<u8> for Pattern {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl From<Pattern> for u8 {
    fn from(pattern: Pattern) -> Self {
        pattern.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPattern {
            pattern: s.to_owned(),
        };
        if s.len() != 8 {
            return Err(invalid());
        }
        let mut byte = 0u8;
        for (i, c) in s.bytes().enumerate() {
            match c {
                b'0' => {}
                b'1' => byte |= 1 << i,
                _ => return Err(invalid()),
            }
        }
        Ok(Self(byte))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Pattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Pattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One pattern-generation layer of a genome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer {
    /// Layer is drawn at all
    pub visible: bool,
    /// Palette indices `[colorA, colorB]` for on and off bits, 0 is transparent
    pub colors: [u8; 2],
    /// Grid size table indices `[columns, rows]`
    pub dimensions: [u8; 2],
    /// Automaton seed
    pub pattern: Pattern,
    /// Elementary automaton rule number
    pub rule: u8,
    /// Generation width as a multiple of the column count, 0 means 8 cells
    pub scale: u8,
    /// Grid size table index of the jump size
    pub skip: u8,
    /// Jump threshold selection
    pub skip_mode: SkipMode,
    /// Seed placement
    pub fill: FillMode,
    /// Coordinate mirroring
    pub flip: FlipMode,
    /// Automaton neighbourhood wraps at the row edges
    pub wrap: bool,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            visible: true,
            colors: [1, 0],
            dimensions: [0, 0],
            pattern: Pattern::from_byte(0x01),
            rule: 90,
            scale: 1,
            skip: 0,
            skip_mode: SkipMode::Binary,
            fill: FillMode::Repeat,
            flip: FlipMode::None,
            wrap: true,
        }
    }
}

impl Layer {
    /// Whether the layer can never produce a cell
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        !self.visible || (self.colors[0] == 0 && self.colors[1] == 0)
    }

    /// Grid column count
    #[must_use]
    pub fn columns(&self) -> usize {
        grid_size(self.dimensions[0])
    }

    /// Grid row count
    #[must_use]
    pub fn rows(&self) -> usize {
        grid_size(self.dimensions[1])
    }

    /// Check every nibble field fits in four bits
    pub fn validate(&self) -> Result<()> {
        let nibbles = [
            ("colors[0]", self.colors[0]),
            ("colors[1]", self.colors[1]),
            ("dimensions[0]", self.dimensions[0]),
            ("dimensions[1]", self.dimensions[1]),
            ("scale", self.scale),
            ("skip", self.skip),
        ];
        for (field, value) in nibbles {
            if value > NIBBLE_MAX {
                return Err(Error::FieldOutOfRange {
                    field,
                    value: u32::from(value),
                    max: u32::from(NIBBLE_MAX),
                });
            }
        }
        Ok(())
    }
}
