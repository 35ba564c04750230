//! Binary record and textual forms of [`Vector4`].

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use super::{Vector4, Vector4Ops};
use crate::format::DecimalFormat;
use crate::{VectorError, VectorResult};

/// Size of the binary record in bytes.
pub const RECORD_BYTES: usize = 16;

impl Vector4 {
    /// Flat record: `x, y, z, w` as little-endian `f32`s.
    pub fn to_le_bytes(&self) -> [u8; RECORD_BYTES] {
        let mut out = [0; RECORD_BYTES];
        for (chunk, value) in out.chunks_exact_mut(4).zip(self.to_array()) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        out
    }

    pub fn from_le_bytes(bytes: [u8; RECORD_BYTES]) -> Self {
        Self::from_array(std::array::from_fn(|i| {
            f32::from_le_bytes([bytes[i * 4], bytes[i * 4 + 1], bytes[i * 4 + 2], bytes[i * 4 + 3]])
        }))
    }

    pub fn write_record<W: Write + ?Sized>(&self, writer: &mut W) -> VectorResult<()> {
        writer.write_all(&self.to_le_bytes())?;
        Ok(())
    }

    /// Replace all four components with a record read from `reader`.
    pub fn read_record<R: Read + ?Sized>(&mut self, reader: &mut R) -> VectorResult<&mut Self> {
        let mut bytes = [0; RECORD_BYTES];
        reader.read_exact(&mut bytes)?;
        *self = Self::from_le_bytes(bytes);
        Ok(self)
    }
}

/// `(x y z w)` in [`DecimalFormat::default`], or fixed notation when a
/// precision is given (`{:.2}`).
impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = match f.precision() {
            Some(precision) => DecimalFormat::fixed(precision),
            None => DecimalFormat::default(),
        };
        f.write_str(&self.to_string_with(&format))
    }
}

impl FromStr for Vector4 {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = |reason: &'static str| {
            tracing::debug!(input = s, reason, "failed to parse vector");
            VectorError::Parse {
                input: s.to_owned(),
                reason,
            }
        };

        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| parse_error("expected parentheses around components"))?;

        let mut values = [0.0; 4];
        let mut parts = inner.split_whitespace();
        for slot in &mut values {
            let part = parts
                .next()
                .ok_or_else(|| parse_error("expected four components"))?;
            *slot = part
                .parse()
                .map_err(|_| parse_error("component is not a number"))?;
        }
        if parts.next().is_some() {
            return Err(parse_error("expected four components"));
        }
        Ok(Self::from_array(values))
    }
}
