//! Genome codec (encode/decode)
//!
//! # Wire Format
//!
//! ```text
//! +---------+-------+-----------+-----------+-----------+-----------+-----------+
//! | version | frame |  layer 0  |  layer 1  |  layer 2  |  layer 3  |  layer 4  |
//! |   (1)   |  (1)  |    (6)    |    (6)    |    (6)    |    (6)    |    (6)    |
//! +---------+-------+-----------+-----------+-----------+-----------+-----------+
//! ```
//!
//! Each layer record:
//!
//! ```text
//!  byte 0  flags     visible:1 | skip_mode:2 | fill:2 | flip:2 | wrap:1   (low bits first)
//!  byte 1  colors    colorA (low nibble) | colorB (high nibble)
//!  byte 2  dims      columns index (low nibble) | rows index (high nibble)
//!  byte 3  pattern   seed cells, bit 0 first
//!  byte 4  rule      automaton rule number
//!  byte 5  scale     scale (low nibble) | skip index (high nibble)
//! ```

use bytes::{Buf, BufMut};
use tracing::{debug, instrument, trace};

use super::bits::{pack_bits, pack_nibbles, unpack_bits, unpack_nibbles};
use super::{
    Document, ENCODING_SIZE, Encoding, Error, FORMAT_VERSION, FillMode, FlipMode, LAYER_COUNT,
    Layer, Pattern, Result, SkipMode,
};

/// Flag field widths in wire order: visible, `skip_mode`, fill, flip, wrap
const FLAG_WIDTHS: [u32; 5] = [1, 2, 2, 2, 1];

/// Encode a document to its 32-byte form
///
/// # Errors
///
/// Returns [`Error::FieldOutOfRange`] if a nibble field exceeds 15.
#[instrument(level = "trace", skip_all, fields(frame = doc.frame))]
pub fn encode(doc: &Document) -> Result<Encoding> {
    if let Err(err) = doc.validate() {
        debug!(error = %err, "rejecting document");
        return Err(err);
    }

    let mut bytes = [0u8; ENCODING_SIZE];
    let mut out = &mut bytes[..];

    out.put_u8(FORMAT_VERSION);
    out.put_u8(doc.frame);
    for layer in &doc.layers {
        write_layer(&mut out, layer);
    }
    debug_assert!(out.is_empty(), "layer records must fill the encoding");

    trace!(layers = LAYER_COUNT, "encoded document");
    Ok(Encoding::from_bytes(bytes))
}

/// Decode a document from bytes
///
/// Only the first 32 bytes are read; anything after them is ignored.
///
/// # Errors
///
/// Returns an error if:
/// - Buffer is shorter than 32 bytes
/// - Version byte is not 0
#[instrument(level = "trace", skip_all, fields(len = bytes.len()))]
pub fn decode(bytes: &[u8]) -> Result<Document> {
    if bytes.len() < ENCODING_SIZE {
        debug!(got = bytes.len(), "encoding too short");
        return Err(Error::BufferTooSmall {
            needed: ENCODING_SIZE,
            got: bytes.len(),
        });
    }

    let mut buf = &bytes[..ENCODING_SIZE];

    let version = buf.get_u8();
    if version != FORMAT_VERSION {
        debug!(version, "unsupported encoding version");
        return Err(Error::UnsupportedVersion { found: version });
    }

    let frame = buf.get_u8();
    let layers: [Layer; LAYER_COUNT] = std::array::from_fn(|_| read_layer(&mut buf));

    trace!(frame, layers = LAYER_COUNT, "decoded document");
    Ok(Document { layers, frame })
}

fn write_layer(out: &mut impl BufMut, layer: &Layer) {
    out.put_u8(pack_bits(&[
        (u8::from(layer.visible), FLAG_WIDTHS[0]),
        (layer.skip_mode.as_u8(), FLAG_WIDTHS[1]),
        (layer.fill.as_u8(), FLAG_WIDTHS[2]),
        (layer.flip.as_u8(), FLAG_WIDTHS[3]),
        (u8::from(layer.wrap), FLAG_WIDTHS[4]),
    ]));
    out.put_u8(pack_nibbles(layer.colors));
    out.put_u8(pack_nibbles(layer.dimensions));
    out.put_u8(layer.pattern.as_byte());
    out.put_u8(layer.rule);
    out.put_u8(pack_nibbles([layer.scale, layer.skip]));
}

fn read_layer(buf: &mut impl Buf) -> Layer {
    let [visible, skip_mode, fill, flip, wrap] = unpack_bits(buf.get_u8(), FLAG_WIDTHS);
    let colors = unpack_nibbles(buf.get_u8());
    let dimensions = unpack_nibbles(buf.get_u8());
    let pattern = Pattern::from_byte(buf.get_u8());
    let rule = buf.get_u8();
    let [scale, skip] = unpack_nibbles(buf.get_u8());

    Layer {
        visible: visible == 1,
        colors,
        dimensions,
        pattern,
        rule,
        scale,
        skip,
        skip_mode: SkipMode::from_bits(skip_mode),
        fill: FillMode::from_bits(fill),
        flip: FlipMode::from_bits(flip),
        wrap: wrap == 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{LAYER_RECORD_SIZE, PREAMBLE_SIZE};

    fn sample_document() -> Document {
        let mut doc = Document::default();
        doc.frame = 42;
        doc.layers[0] = Layer {
            visible: true,
            colors: [1, 0],
            dimensions: [0, 0],
            pattern: "10000000".parse().unwrap(),
            rule: 90,
            scale: 1,
            skip: 0,
            skip_mode: SkipMode::Binary,
            fill: FillMode::Repeat,
            flip: FlipMode::None,
            wrap: true,
        };
        doc.layers[1] = Layer {
            visible: false,
            colors: [15, 7],
            dimensions: [12, 3],
            pattern: Pattern::from_byte(0xA5),
            rule: 30,
            scale: 0,
            skip: 9,
            skip_mode: SkipMode::Equal,
            fill: FillMode::Center,
            flip: FlipMode::Both,
            wrap: false,
        };
        doc
    }

    #[test]
    fn test_encode_layout() {
        let bytes = encode(&sample_document()).unwrap();
        let bytes = bytes.as_bytes();

        assert_eq!(bytes[0], FORMAT_VERSION);
        assert_eq!(bytes[1], 42);

        // layer 0: visible | wrap
        let l0 = &bytes[PREAMBLE_SIZE..PREAMBLE_SIZE + LAYER_RECORD_SIZE];
        assert_eq!(l0, &[0b1000_0001, 0x01, 0x00, 0x01, 90, 0x01]);

        // layer 1: skip_mode=3 fill=2 flip=3, hidden, no wrap
        let l1 = &bytes[PREAMBLE_SIZE + LAYER_RECORD_SIZE..PREAMBLE_SIZE + 2 * LAYER_RECORD_SIZE];
        assert_eq!(l1, &[0b0111_0110, 0x7F, 0x3C, 0xA5, 30, 0x90]);
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let original = sample_document();
        let encoded = encode(&original).unwrap();
        let decoded = decode(encoded.as_bytes()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_decode_buffer_too_small() {
        let result = decode(&[0u8; 31]);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall { needed: 32, got: 31 })
        ));
    }

    #[test]
    fn test_decode_invalid_version() {
        let mut bytes = [0u8; ENCODING_SIZE];
        bytes[0] = 1;
        assert_eq!(decode(&bytes), Err(Error::UnsupportedVersion { found: 1 }));
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let encoded = encode(&sample_document()).unwrap();
        let mut bytes = encoded.as_bytes().to_vec();
        bytes.extend_from_slice(&[0xFF; 12]);
        assert_eq!(decode(&bytes).unwrap(), sample_document());
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        let mut doc = sample_document();
        doc.layers[4].dimensions = [16, 0];
        assert!(matches!(
            encode(&doc),
            Err(Error::FieldOutOfRange {
                field: "dimensions[0]",
                ..
            })
        ));
    }

    #[test]
    fn test_zeroed_encoding_decodes() {
        let doc = decode(&[0u8; ENCODING_SIZE]).unwrap();
        assert_eq!(doc.frame, 0);
        for layer in &doc.layers {
            assert!(!layer.visible);
            assert!(layer.is_hidden());
            assert_eq!(layer.pattern.to_string(), "00000000");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every version-0 encoding survives decode then encode
            #[test]
            fn prop_bytes_roundtrip(tail in prop::array::uniform31(any::<u8>())) {
                let mut bytes = [0u8; ENCODING_SIZE];
                bytes[1..].copy_from_slice(&tail);

                let doc = decode(&bytes).unwrap();
                let encoded = encode(&doc).unwrap();
                prop_assert_eq!(encoded.as_bytes(), &bytes);
            }

            /// Property: any non-zero version byte is rejected
            #[test]
            fn prop_bad_version_rejected(version in 1u8..=255, frame in any::<u8>()) {
                let mut bytes = [0u8; ENCODING_SIZE];
                bytes[0] = version;
                bytes[1] = frame;
                prop_assert_eq!(decode(&bytes), Err(Error::UnsupportedVersion { found: version }));
            }

            /// Property: short buffers are rejected
            #[test]
            fn prop_short_buffer_rejected(bytes in prop::collection::vec(Just(0u8), 0..ENCODING_SIZE)) {
                let rejected = matches!(decode(&bytes), Err(Error::BufferTooSmall { .. }));
                prop_assert!(rejected);
            }
        }
    }
}
