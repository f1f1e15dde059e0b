//! Deterministic genome codec and cell stream for layered cellular-automaton artwork
//!
//! An artwork is described by a 32-byte [`Encoding`]: a version byte, a frame
//! offset, and five fixed-size layer records. Each layer drives an elementary
//! cellular automaton across a small grid and colours the cells it visits.
//! This crate converts encodings to and from structured [`Document`]s and
//! turns each layer into the exact, ordered stream of coloured cells that a
//! renderer draws.
//!
//! # Quick Start
//!
//! ```rust
//! use eca_genome::{Encoding, construct};
//!
//! let encoding: Encoding =
//!     "0000810100015a01000000000000000000000000000000000000000000000000".parse()?;
//! let doc = encoding.decode()?;
//!
//! for (index, layer) in doc.visible_layers() {
//!     for cell in construct(layer, doc.frame) {
//!         println!("layer {index}: ({}, {}) colour {}", cell.x, cell.y, cell.color);
//!     }
//! }
//! # Ok::<(), eca_genome::Error>(())
//! ```
//!
//! # Features
//!
//! - **Bit-exact codec** - fixed 32-byte layout, version guard, hex form
//! - **Lazy cell streams** - one automaton per layer, bounded by `max_cells`
//! - **Pluggable bit sources** - any [`BitSource`] can stand in for the automaton
//! - **`serde`** (optional) - serialization for documents, layers and cells

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod automaton;
pub mod cells;
pub mod genome;
pub mod grid;

pub use automaton::{BitSource, Eca, StandardRule};
pub use cells::{
    Cell, Cells, ConstructOptions, LayerGeometry, construct, construct_cells, construct_with,
    construct_with_options,
};
pub use genome::{
    Document, ENCODING_SIZE, Encoding, Error, FORMAT_VERSION, FillMode, FlipMode, LAYER_COUNT,
    Layer, Pattern, Result, SkipMode, decode, encode, encoding_to_hex, hex_to_encoding, short_hex,
};
pub use grid::{GRID_SIZES, factors_of, grid_size, grid_sizes};
