//! Grid size lookup table
//!
//! Four-bit dimension and skip indices resolve to cell counts through a fixed
//! table: the first 16 divisors of 768 in ascending order.

/// Number the table is built from
pub const GRID_SIZE_BASE: usize = 768;

/// Number of table entries, one per nibble value
pub const GRID_SIZE_COUNT: usize = 16;

/// The first 16 divisors of 768
pub const GRID_SIZES: [usize; GRID_SIZE_COUNT] = build_table();

const fn build_table() -> [usize; GRID_SIZE_COUNT] {
    let mut table = [0usize; GRID_SIZE_COUNT];
    let mut found = 0;
    let mut candidate = 1;
    while found < GRID_SIZE_COUNT && candidate <= GRID_SIZE_BASE / 2 {
        if GRID_SIZE_BASE % candidate == 0 {
            table[found] = candidate;
            found += 1;
        }
        candidate += 1;
    }
    assert!(found == GRID_SIZE_COUNT, "768 has fewer than 16 divisors");
    table
}

/// Resolve a four-bit table index to a cell count.
///
/// Only the low nibble of `index` is used, matching what the wire format can
/// carry.
#[must_use]
pub const fn grid_size(index: u8) -> usize {
    GRID_SIZES[(index & 0x0F) as usize]
}

/// Copy of the full table
#[must_use]
pub const fn grid_sizes() -> [usize; GRID_SIZE_COUNT] {
    GRID_SIZES
}

/// Divisors of `num` scanned upward from 1 through `num / 2`, stopping after `len`.
#[must_use]
pub fn factors_of(num: usize, len: usize) -> Vec<usize> {
    (1..=num / 2)
        .filter(|candidate| num % candidate == 0)
        .take(len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_contents() {
        assert_eq!(
            GRID_SIZES,
            [1, 2, 3, 4, 6, 8, 12, 16, 24, 32, 48, 64, 96, 128, 192, 256]
        );
    }

    #[test]
    fn test_table_matches_factor_scan() {
        assert_eq!(factors_of(GRID_SIZE_BASE, GRID_SIZE_COUNT), GRID_SIZES.to_vec());
    }

    #[test]
    fn test_factors_of_stops_at_half() {
        assert_eq!(factors_of(12, 16), vec![1, 2, 3, 4, 6]);
        assert_eq!(factors_of(12, 2), vec![1, 2]);
        assert!(factors_of(1, 4).is_empty());
    }

    #[test]
    fn test_grid_size_masks_index() {
        assert_eq!(grid_size(0), 1);
        assert_eq!(grid_size(15), 256);
        assert_eq!(grid_size(0x10), 1);
    }
}
