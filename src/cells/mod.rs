//! Deterministic cell stream for a single layer
//!
//! A layer's grid is scanned in row-major order. Every scan step draws one
//! bit from the layer's automaton, picks colour A for an on bit and colour B
//! for an off bit, and emits the cell unless that colour is transparent.
//! Every `threshold` steps the scan jumps ahead by the layer's skip size
//! instead of one cell. Emitted coordinates are mirrored per the flip mode and
//! then shifted circularly by the frame offset.

use std::iter::FusedIterator;

use tracing::trace;

use crate::automaton::{BitSource, Eca};
use crate::genome::{FlipMode, Layer, SkipMode};
use crate::grid::grid_size;

/// Seed width used when a layer's scale is zero
pub const DEFAULT_PATTERN_COLUMNS: usize = 8;

/// Steps between jumps in [`SkipMode::Binary`]
pub const BINARY_SKIP_THRESHOLD: usize = 8;

/// A coloured grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Column, `0..columns`
    pub x: usize,
    /// Row, `0..rows`
    pub y: usize,
    /// Palette index, never 0
    pub color: u8,
    /// Automaton bit that selected the colour
    pub bit: bool,
}

/// Parameters for a construction pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstructOptions {
    /// Circular shift applied to every cell, in row-major steps
    pub frame: u8,
    /// Stop after this many cells
    pub max_cells: Option<usize>,
}

impl ConstructOptions {
    /// Default options at the given frame
    #[must_use]
    pub const fn new(frame: u8) -> Self {
        Self {
            frame,
            max_cells: None,
        }
    }

    /// Set the frame offset
    #[must_use]
    pub const fn with_frame(mut self, frame: u8) -> Self {
        self.frame = frame;
        self
    }

    /// Bound the number of emitted cells
    #[must_use]
    pub const fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }
}

/// Resolved grid geometry of a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerGeometry {
    /// Grid columns
    pub columns: usize,
    /// Grid rows
    pub rows: usize,
    /// Automaton generation width
    pub pattern_columns: usize,
    /// Scan jump size
    pub cell_skip: usize,
    /// Steps between jumps
    pub skip_threshold: usize,
}

impl LayerGeometry {
    /// Resolve table indices and modes of a layer into cell counts
    #[must_use]
    pub fn of(layer: &Layer) -> Self {
        let columns = grid_size(layer.dimensions[0]);
        let rows = grid_size(layer.dimensions[1]);
        let pattern_columns = if layer.scale == 0 {
            DEFAULT_PATTERN_COLUMNS
        } else {
            columns * usize::from(layer.scale)
        };
        let cell_skip = grid_size(layer.skip);
        let skip_threshold = match layer.skip_mode {
            SkipMode::Binary => BINARY_SKIP_THRESHOLD,
            SkipMode::Columns => columns,
            SkipMode::ScaledColumns => pattern_columns,
            SkipMode::Equal => cell_skip,
        };
        Self {
            columns,
            rows,
            pattern_columns,
            cell_skip,
            skip_threshold,
        }
    }

    /// Total grid cells
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.columns * self.rows
    }
}

/// Lazy, single-pass stream of a layer's cells
///
/// Created by [`construct`], [`construct_with_options`] or [`construct_with`].
/// The stream owns its bit source; to replay a layer, construct it again.
#[derive(Debug, Clone)]
pub struct Cells<S = Eca> {
    source: Option<S>,
    geometry: LayerGeometry,
    colors: [u8; 2],
    flip: FlipMode,
    frame: usize,
    max_cells: Option<usize>,
    index: usize,
    pointer: usize,
    emitted: usize,
}

impl<S: BitSource> Cells<S> {
    fn new(layer: &Layer, options: ConstructOptions, source: Option<S>) -> Self {
        let geometry = LayerGeometry::of(layer);
        let source = if layer.is_hidden() { None } else { source };
        trace!(
            columns = geometry.columns,
            rows = geometry.rows,
            pattern_columns = geometry.pattern_columns,
            cell_skip = geometry.cell_skip,
            skip_threshold = geometry.skip_threshold,
            frame = options.frame,
            hidden = source.is_none(),
            "constructing layer"
        );
        Self {
            source,
            geometry,
            colors: layer.colors,
            flip: layer.flip,
            frame: usize::from(options.frame),
            max_cells: options.max_cells,
            index: 0,
            pointer: 0,
            emitted: 0,
        }
    }

    /// Geometry the stream scans
    #[must_use]
    pub const fn geometry(&self) -> &LayerGeometry {
        &self.geometry
    }

    /// Cells emitted so far
    #[must_use]
    pub const fn emitted(&self) -> usize {
        self.emitted
    }

    fn exhausted(&self) -> bool {
        self.index >= self.geometry.cell_count()
            || self.max_cells.is_some_and(|max| self.emitted >= max)
    }

    /// Mirror, then rotate by the frame offset through the flattened grid
    fn place(&self, mut x: usize, mut y: usize) -> (usize, usize) {
        let LayerGeometry { columns, rows, .. } = self.geometry;
        if self.flip.flips_x() {
            x = columns - 1 - x;
        }
        if self.flip.flips_y() {
            y = rows - 1 - y;
        }
        let shifted = (x + y * columns + self.frame) % self.geometry.cell_count();
        (shifted % columns, shifted / columns)
    }
}

impl<S: BitSource> Iterator for Cells<S> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        loop {
            if self.exhausted() {
                return None;
            }
            let source = self.source.as_mut()?;

            let columns = self.geometry.columns;
            let (x, y) = (self.index % columns, self.index / columns);

            // one bit per step, including steps that land on a jump
            let bit = source.next_bit();

            self.pointer += 1;
            let increment = if self.pointer >= self.geometry.skip_threshold {
                self.pointer = 0;
                self.geometry.cell_skip
            } else {
                1
            };
            self.index += increment;

            let color = if bit { self.colors[0] } else { self.colors[1] };
            if color == 0 {
                continue;
            }

            let (x, y) = self.place(x, y);
            self.emitted += 1;
            return Some(Cell { x, y, color, bit });
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.source.is_none() || self.exhausted() {
            return (0, Some(0));
        }
        let remaining = self.geometry.cell_count() - self.index;
        let upper = match self.max_cells {
            Some(max) => remaining.min(max - self.emitted),
            None => remaining,
        };
        (0, Some(upper))
    }
}

impl<S: BitSource> FusedIterator for Cells<S> {}

/// Stream a layer's cells at the given frame
#[must_use]
pub fn construct(layer: &Layer, frame: u8) -> Cells<Eca> {
    construct_with_options(layer, ConstructOptions::new(frame))
}

/// Stream a layer's cells with explicit options
#[must_use]
pub fn construct_with_options(layer: &Layer, options: ConstructOptions) -> Cells<Eca> {
    // hidden layers never touch the automaton
    let source = (!layer.is_hidden()).then(|| {
        let geometry = LayerGeometry::of(layer);
        Eca::new(
            layer.pattern,
            layer.rule,
            geometry.pattern_columns,
            layer.wrap,
            layer.fill,
        )
    });
    Cells::new(layer, options, source)
}

/// Stream a layer's cells, drawing bits from a caller-supplied source
#[must_use]
pub fn construct_with<S: BitSource>(layer: &Layer, options: ConstructOptions, source: S) -> Cells<S> {
    Cells::new(layer, options, Some(source))
}

/// Collect every cell of a layer at the given frame
#[must_use]
pub fn construct_cells(layer: &Layer, frame: u8) -> Vec<Cell> {
    construct(layer, frame).collect()
}
