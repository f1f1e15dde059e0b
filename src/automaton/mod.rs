//! Elementary cellular automaton bit source
//!
//! Cell construction pulls one bit per step from a [`BitSource`]. The default
//! source, [`Eca`], lays an 8-cell seed into a row of `width` cells and then
//! walks the row left to right, evolving it under a Wolfram rule every time
//! the row is exhausted.

use std::fmt;

use tracing::trace;

pub use crate::genome::FillMode;
use crate::genome::Pattern;

/// Stateful producer of one bit per call
pub trait BitSource {
    /// Next bit in the stream
    fn next_bit(&mut self) -> bool;
}

impl<F> BitSource for F
where
    F: FnMut() -> bool,
{
    fn next_bit(&mut self) -> bool {
        self()
    }
}

/// Commonly used rule numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StandardRule {
    /// Chaotic
    Rule30 = 30,
    /// Chaotic, denser than rule 30
    Rule45 = 45,
    /// Stripes and tiles
    Rule73 = 73,
    /// Sierpinski triangle
    Rule90 = 90,
    /// Turing-complete
    Rule110 = 110,
    /// Additive, three-way xor
    Rule150 = 150,
    /// Traffic flow
    Rule184 = 184,
}

impl StandardRule {
    /// All standard rules in ascending order
    pub const ALL: [Self; 7] = [
        Self::Rule30,
        Self::Rule45,
        Self::Rule73,
        Self::Rule90,
        Self::Rule110,
        Self::Rule150,
        Self::Rule184,
    ];

    /// Rule number
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<StandardRule> for u8 {
    fn from(rule: StandardRule) -> Self {
        rule.as_u8()
    }
}

impl fmt::Display for StandardRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule {}", self.as_u8())
    }
}

/// One-dimensional elementary cellular automaton, yielding its cells one by one
#[derive(Debug, Clone)]
pub struct Eca {
    row: Vec<bool>,
    scratch: Vec<bool>,
    cursor: usize,
    rule: u8,
    wrap: bool,
    generation: u64,
}

impl Eca {
    /// Create an automaton with `width` cells per generation (at least one)
    #[must_use]
    pub fn new(pattern: Pattern, rule: u8, width: usize, wrap: bool, fill: FillMode) -> Self {
        let width = width.max(1);
        let row = seed_row(pattern, width, fill);
        trace!(width, rule, wrap, %fill, "seeded automaton");
        Self {
            scratch: vec![false; width],
            row,
            cursor: 0,
            rule,
            wrap,
            generation: 0,
        }
    }

    /// Cells per generation
    #[must_use]
    pub fn width(&self) -> usize {
        self.row.len()
    }

    /// Index of the generation currently being read
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Current generation
    #[must_use]
    pub fn row(&self) -> &[bool] {
        &self.row
    }

    fn step(&mut self) {
        let width = self.row.len();
        for i in 0..width {
            let left = if i > 0 {
                self.row[i - 1]
            } else {
                self.wrap && self.row[width - 1]
            };
            let right = if i + 1 < width {
                self.row[i + 1]
            } else {
                self.wrap && self.row[0]
            };
            self.scratch[i] = apply_rule(self.rule, left, self.row[i], right);
        }
        std::mem::swap(&mut self.row, &mut self.scratch);
        self.generation += 1;
    }
}

impl BitSource for Eca {
    fn next_bit(&mut self) -> bool {
        if self.cursor == self.row.len() {
            self.step();
            self.cursor = 0;
        }
        let bit = self.row[self.cursor];
        self.cursor += 1;
        bit
    }
}

impl Iterator for Eca {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        Some(self.next_bit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Wolfram rule lookup for one neighbourhood
#[must_use]
pub const fn apply_rule(rule: u8, left: bool, center: bool, right: bool) -> bool {
    let index = ((left as u8) << 2) | ((center as u8) << 1) | (right as u8);
    (rule >> index) & 1 == 1
}

/// Build generation zero from the seed
fn seed_row(pattern: Pattern, width: usize, fill: FillMode) -> Vec<bool> {
    let bits = pattern.bits();
    // position of seed cell 0 within the row; may be negative when the row is narrower than the seed
    let offset: isize = match fill {
        FillMode::Repeat => return (0..width).map(|i| bits[i % 8]).collect(),
        FillMode::Left => 0,
        FillMode::Center => (width as isize - 8).div_euclid(2),
        FillMode::Right => width as isize - 8,
    };
    (0..width as isize)
        .map(|i| {
            let seed_index = i - offset;
            (0..8).contains(&seed_index) && bits[seed_index as usize]
        })
        .collect()
}
