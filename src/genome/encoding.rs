//! Fixed-size encoding and its hexadecimal form

use std::fmt;
use std::str::FromStr;

use super::{Document, ENCODING_SIZE, Error, HEX_SIZE, PREAMBLE_SIZE, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// The 32-byte canonical genome of one artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoding([u8; ENCODING_SIZE]);

impl Encoding {
    /// Wrap raw bytes
    ///
    /// No validation happens here; the version byte is checked by [`Encoding::decode`].
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ENCODING_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ENCODING_SIZE] {
        &self.0
    }

    /// Consume into raw bytes
    #[must_use]
    pub const fn into_bytes(self) -> [u8; ENCODING_SIZE] {
        self.0
    }

    /// Frame offset byte
    #[must_use]
    pub const fn frame(&self) -> u8 {
        self.0[1]
    }

    /// Same encoding at another frame
    #[must_use]
    pub const fn with_frame(mut self, frame: u8) -> Self {
        self.0[1] = frame;
        self
    }

    /// Decode into a document
    pub fn decode(&self) -> Result<Document> {
        super::decode(&self.0)
    }

    /// Encode a document
    pub fn encode(doc: &Document) -> Result<Self> {
        super::encode(doc)
    }

    /// Lowercase 64-character hex form
    #[must_use]
    pub fn to_hex(&self) -> String {
        encoding_to_hex(&self.0)
    }

    /// Parse the hex form, accepting either case
    pub fn from_hex(hex: &str) -> Result<Self> {
        hex_to_encoding(hex)
    }

    /// Abbreviated hex form: first and last four digits
    #[must_use]
    pub fn short_hex(&self) -> String {
        short_hex(&self.to_hex())
    }

    /// Hex of the layer records only, stable across frames
    #[must_use]
    pub fn seed_hex(&self) -> String {
        to_hex(&self.0[PREAMBLE_SIZE..])
    }
}

impl From<[u8; ENCODING_SIZE]> for Encoding {
    fn from(bytes: [u8; ENCODING_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Encoding {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; ENCODING_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: ENCODING_SIZE,
            got: bytes.len(),
        })?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Encoding {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_encoding(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Encoding {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Encoding {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Lowercase hex form of a 32-byte encoding
#[must_use]
pub fn encoding_to_hex(bytes: &[u8; ENCODING_SIZE]) -> String {
    to_hex(bytes)
}

/// Parse a hex string into an encoding
///
/// # Errors
///
/// Returns an error if:
/// - Length is odd
/// - A character is not a hex digit
/// - The decoded length is not 32 bytes
pub fn hex_to_encoding(hex: &str) -> Result<Encoding> {
    let raw = hex.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(Error::InvalidHex {
            reason: "odd number of digits",
        });
    }
    if !raw.iter().all(u8::is_ascii_hexdigit) {
        return Err(Error::InvalidHex {
            reason: "non-hexadecimal character",
        });
    }
    if raw.len() != HEX_SIZE {
        return Err(Error::InvalidLength {
            expected: ENCODING_SIZE,
            got: raw.len() / 2,
        });
    }

    let mut bytes = [0u8; ENCODING_SIZE];
    for (byte, pair) in bytes.iter_mut().zip(raw.chunks_exact(2)) {
        *byte = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
    }
    Ok(Encoding(bytes))
}

/// First four and last four characters of a hex string, joined by `...`
#[must_use]
pub fn short_hex(hex: &str) -> String {
    if hex.len() <= 8 || !hex.is_ascii() {
        return hex.to_owned();
    }
    format!("{}...{}", &hex[..4], &hex[hex.len() - 4..])
}

fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
        out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
    }
    out
}

const fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HEX: &str = "002a810100015a010000000000000000000000000000000000000000000000ff";

    #[test]
    fn test_hex_roundtrip() {
        let encoding = hex_to_encoding(SAMPLE_HEX).unwrap();
        assert_eq!(encoding.frame(), 0x2a);
        assert_eq!(encoding.as_bytes()[31], 0xff);
        assert_eq!(encoding.to_hex(), SAMPLE_HEX);
        assert_eq!(encoding.to_string().len(), HEX_SIZE);
    }

    #[test]
    fn test_hex_accepts_uppercase_emits_lowercase() {
        let encoding: Encoding = SAMPLE_HEX.to_uppercase().parse().unwrap();
        assert_eq!(encoding.to_hex(), SAMPLE_HEX);
    }

    #[test]
    fn test_hex_errors() {
        assert!(matches!(
            hex_to_encoding("abc"),
            Err(Error::InvalidHex { .. })
        ));
        assert!(matches!(
            hex_to_encoding(&"zz".repeat(32)),
            Err(Error::InvalidHex { .. })
        ));
        assert_eq!(
            hex_to_encoding("00ff"),
            Err(Error::InvalidLength {
                expected: 32,
                got: 2
            })
        );
    }

    #[test]
    fn test_short_and_seed_hex() {
        let encoding = hex_to_encoding(SAMPLE_HEX).unwrap();
        assert_eq!(encoding.short_hex(), "002a...00ff");
        assert_eq!(encoding.seed_hex(), &SAMPLE_HEX[4..]);
        assert_eq!(
            encoding.with_frame(9).seed_hex(),
            encoding.seed_hex(),
            "seed ignores the frame byte"
        );
        assert_eq!(short_hex("abcd"), "abcd");
    }

    #[test]
    fn test_try_from_slice_requires_exact_size() {
        assert!(Encoding::try_from(&[0u8; 32][..]).is_ok());
        assert_eq!(
            Encoding::try_from(&[0u8; 33][..]),
            Err(Error::InvalidLength {
                expected: 32,
                got: 33
            })
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: hex form round-trips any 32 bytes and is always 64 lowercase digits
            #[test]
            fn prop_hex_roundtrip(bytes in prop::array::uniform32(any::<u8>())) {
                let hex = encoding_to_hex(&bytes);
                prop_assert_eq!(hex.len(), HEX_SIZE);
                prop_assert!(hex.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')));
                prop_assert_eq!(hex_to_encoding(&hex).unwrap().into_bytes(), bytes);
            }
        }
    }
}
