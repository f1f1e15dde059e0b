//! Genome wire format
//!
//! This module provides the 32-byte encoding, its structured document form,
//! and the codec between them.

pub mod bits;
mod codec;
mod document;
mod encoding;
mod error;
mod layer;
mod types;

pub use codec::{decode, encode};
pub use document::Document;
pub use encoding::{Encoding, encoding_to_hex, hex_to_encoding, short_hex};
pub use error::{Error, Result};
pub use layer::{Layer, NIBBLE_MAX, Pattern};
pub use types::{FillMode, FlipMode, SkipMode};

/// Only supported format version, carried in byte 0
pub const FORMAT_VERSION: u8 = 0;

/// Encoding size in bytes
pub const ENCODING_SIZE: usize = 32;

/// Bytes preceding the layer records (version, frame)
pub const PREAMBLE_SIZE: usize = 2;

/// Size of one layer record in bytes
pub const LAYER_RECORD_SIZE: usize = 6;

/// Number of layers in every encoding
pub const LAYER_COUNT: usize = 5;

/// Length of the hexadecimal form
pub const HEX_SIZE: usize = ENCODING_SIZE * 2;

const _: () = assert!(PREAMBLE_SIZE + LAYER_COUNT * LAYER_RECORD_SIZE == ENCODING_SIZE);
