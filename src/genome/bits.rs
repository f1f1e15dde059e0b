//! Byte-level bit-field and nibble packing
//!
//! Fields are laid out least-significant bit first: the first field of a list
//! occupies the lowest bits of the byte. Field order is always given as an
//! explicit list so the layout never depends on struct ordering.

/// Pack `(value, bit_width)` pairs into a single byte, low bits first.
///
/// Values wider than their field are masked to `bit_width` bits.
#[must_use]
pub fn pack_bits(fields: &[(u8, u32)]) -> u8 {
    let mut byte = 0u8;
    let mut shift = 0u32;
    for &(value, width) in fields {
        debug_assert!(shift + width <= 8, "bit fields overflow a byte");
        byte |= (value & mask(width)) << shift;
        shift += width;
    }
    byte
}

/// Unpack a byte into `N` fields of the given widths, low bits first.
#[must_use]
pub fn unpack_bits<const N: usize>(byte: u8, widths: [u32; N]) -> [u8; N] {
    let mut out = [0u8; N];
    let mut shift = 0u32;
    for (slot, width) in out.iter_mut().zip(widths) {
        debug_assert!(shift + width <= 8, "bit fields overflow a byte");
        *slot = (byte >> shift) & mask(width);
        shift += width;
    }
    out
}

/// Pack two 4-bit values, `[low, high]`.
#[must_use]
pub const fn pack_nibbles(nibbles: [u8; 2]) -> u8 {
    (nibbles[0] & 0x0F) | ((nibbles[1] & 0x0F) << 4)
}

/// Unpack a byte into `[low, high]` nibbles.
#[must_use]
pub const fn unpack_nibbles(byte: u8) -> [u8; 2] {
    [byte & 0x0F, byte >> 4]
}

const fn mask(width: u32) -> u8 {
    if width >= 8 { 0xFF } else { (1u8 << width) - 1 }
}
