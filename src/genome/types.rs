//! Layer mode enums carried in the flags byte

use std::fmt;

/// How many consecutive steps pass before the scan index jumps ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SkipMode {
    /// Jump after every 8 steps
    #[default]
    Binary = 0x00,
    /// Jump after every grid row
    Columns = 0x01,
    /// Jump after every automaton generation
    ScaledColumns = 0x02,
    /// Jump after as many steps as the jump size
    Equal = 0x03,
}

/// Mirroring applied to cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FlipMode {
    /// Leave coordinates unchanged
    #[default]
    None = 0x00,
    /// Mirror across the vertical axis
    Horizontal = 0x01,
    /// Mirror across the horizontal axis
    Vertical = 0x02,
    /// Mirror both axes
    Both = 0x03,
}

/// Placement of the 8-bit seed within the first automaton generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FillMode {
    /// Tile the seed across the whole generation
    #[default]
    Repeat = 0x00,
    /// Seed at the left edge, zeros elsewhere
    Left = 0x01,
    /// Seed centred, zeros elsewhere
    Center = 0x02,
    /// Seed at the right edge, zeros elsewhere
    Right = 0x03,
}

macro_rules! two_bit_mode {
    ($ty:ident { $($value:literal => $variant:ident),+ $(,)? }) => {
        impl $ty {
            /// Convert from byte
            #[must_use]
            pub const fn from_u8(value: u8) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Convert from the low two bits of a byte
            #[must_use]
            pub const fn from_bits(bits: u8) -> Self {
                match bits & 0b11 {
                    $($value => Self::$variant,)+
                    _ => unreachable!(),
                }
            }

            /// Convert to byte
            #[must_use]
            pub const fn as_u8(self) -> u8 {
                self as u8
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let name = match self {
                    $(Self::$variant => stringify!($variant),)+
                };
                write!(f, "{name}")
            }
        }
    };
}

two_bit_mode!(SkipMode { 0 => Binary, 1 => Columns, 2 => ScaledColumns, 3 => Equal });
two_bit_mode!(FlipMode { 0 => None, 1 => Horizontal, 2 => Vertical, 3 => Both });
two_bit_mode!(FillMode { 0 => Repeat, 1 => Left, 2 => Center, 3 => Right });

impl FlipMode {
    /// Whether x coordinates are mirrored
    #[must_use]
    pub const fn flips_x(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    /// Whether y coordinates are mirrored
    #[must_use]
    pub const fn flips_y(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_roundtrip() {
        for bits in 0..4u8 {
            assert_eq!(SkipMode::from_bits(bits).as_u8(), bits);
            assert_eq!(FlipMode::from_bits(bits).as_u8(), bits);
            assert_eq!(FillMode::from_bits(bits).as_u8(), bits);
            assert_eq!(SkipMode::from_u8(bits), Some(SkipMode::from_bits(bits)));
        }
        assert_eq!(FlipMode::from_u8(4), None);
    }

    #[test]
    fn test_from_bits_ignores_high_bits() {
        assert_eq!(SkipMode::from_bits(0b1111_1110), SkipMode::ScaledColumns);
    }

    #[test]
    fn test_flip_axes() {
        assert!(FlipMode::Both.flips_x() && FlipMode::Both.flips_y());
        assert!(FlipMode::Horizontal.flips_x() && !FlipMode::Horizontal.flips_y());
        assert!(!FlipMode::None.flips_x() && !FlipMode::None.flips_y());
        assert_eq!(SkipMode::ScaledColumns.to_string(), "ScaledColumns");
    }
}
