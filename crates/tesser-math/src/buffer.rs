//! Position-addressable buffers that vectors can be read from and stored to.
//!
//! A buffer carries a cursor (`position`) but vector reads and writes never
//! advance it. Callers either address the current position or pass an
//! absolute index in the buffer's own unit: bytes for [`ByteBuffer`],
//! elements for [`FloatBuffer`].
//!
//! # Example
//!
//! ```
//! use tesser_math::{ByteBuffer, FloatBuffer, Vector4, Vector4Ops};
//!
//! let mut bytes = ByteBuffer::new(32);
//! Vector4::new(1.5, -2.25, 3.0, 0.5).store_at(16, &mut bytes).unwrap();
//!
//! let floats = FloatBuffer::from_bytes(bytes.as_bytes());
//! let v = Vector4::from_buffer_at(4, &floats).unwrap();
//! assert_eq!(v, Vector4::new(1.5, -2.25, 3.0, 0.5));
//! ```

use crate::{VectorError, VectorResult};

/// Number of bytes one vector occupies in a buffer.
pub const VECTOR4_BYTES: usize = 16;

/// Source and sink of four consecutive 4-byte floats.
pub trait VectorBuffer {
    /// Current cursor, in the buffer's own unit.
    fn position(&self) -> usize;

    /// Read `x, y, z, w` starting at `index`.
    fn read_f32x4(&self, index: usize) -> VectorResult<[f32; 4]>;

    /// Write `x, y, z, w` starting at `index`.
    fn write_f32x4(&mut self, index: usize, values: [f32; 4]) -> VectorResult<()>;
}

impl<B: VectorBuffer + ?Sized> VectorBuffer for &mut B {
    fn position(&self) -> usize {
        (**self).position()
    }

    fn read_f32x4(&self, index: usize) -> VectorResult<[f32; 4]> {
        (**self).read_f32x4(index)
    }

    fn write_f32x4(&mut self, index: usize, values: [f32; 4]) -> VectorResult<()> {
        (**self).write_f32x4(index, values)
    }
}

fn check_range(index: usize, len: usize, capacity: usize) -> VectorResult<()> {
    match index.checked_add(len) {
        Some(end) if end <= capacity => Ok(()),
        _ => {
            tracing::debug!(index, len, capacity, "vector buffer access out of range");
            Err(VectorError::BufferOverflow {
                index,
                len,
                capacity,
            })
        }
    }
}

/// Byte order used by a [`ByteBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// Byte order of the host.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    pub fn is_native(self) -> bool {
        self == Self::native()
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::native()
    }
}

/// Fixed-size byte storage with a cursor. The capacity is set at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
    position: usize,
    order: ByteOrder,
}

impl ByteBuffer {
    /// Zero-filled buffer of `capacity` bytes in native byte order.
    pub fn new(capacity: usize) -> Self {
        Self::from_vec(vec![0; capacity])
    }

    /// Wrap existing bytes in native byte order.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self {
            data,
            position: 0,
            order: ByteOrder::native(),
        }
    }

    /// Use `order` for all subsequent float reads and writes.
    pub fn with_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Move the cursor. Positions past the end are rejected.
    pub fn set_position(&mut self, position: usize) -> VectorResult<()> {
        check_range(position, 0, self.data.len())?;
        self.position = position;
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl VectorBuffer for ByteBuffer {
    fn position(&self) -> usize {
        self.position
    }

    fn read_f32x4(&self, index: usize) -> VectorResult<[f32; 4]> {
        check_range(index, VECTOR4_BYTES, self.data.len())?;
        let bytes = &self.data[index..index + VECTOR4_BYTES];
        let values = match self.order {
            order if order.is_native() => bytemuck::pod_read_unaligned::<[f32; 4]>(bytes),
            ByteOrder::LittleEndian => {
                std::array::from_fn(|i| f32::from_le_bytes(word(bytes, i)))
            }
            ByteOrder::BigEndian => std::array::from_fn(|i| f32::from_be_bytes(word(bytes, i))),
        };
        Ok(values)
    }

    fn write_f32x4(&mut self, index: usize, values: [f32; 4]) -> VectorResult<()> {
        check_range(index, VECTOR4_BYTES, self.data.len())?;
        let bytes = &mut self.data[index..index + VECTOR4_BYTES];
        match self.order {
            order if order.is_native() => bytes.copy_from_slice(bytemuck::bytes_of(&values)),
            ByteOrder::LittleEndian => {
                for (chunk, value) in bytes.chunks_exact_mut(4).zip(values) {
                    chunk.copy_from_slice(&value.to_le_bytes());
                }
            }
            ByteOrder::BigEndian => {
                for (chunk, value) in bytes.chunks_exact_mut(4).zip(values) {
                    chunk.copy_from_slice(&value.to_be_bytes());
                }
            }
        }
        Ok(())
    }
}

fn word(bytes: &[u8], i: usize) -> [u8; 4] {
    let mut out = [0; 4];
    out.copy_from_slice(&bytes[i * 4..i * 4 + 4]);
    out
}

/// Fixed-size `f32` storage with a cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatBuffer {
    data: Vec<f32>,
    position: usize,
}

impl FloatBuffer {
    /// Zero-filled buffer of `capacity` floats.
    pub fn new(capacity: usize) -> Self {
        Self::from_vec(vec![0.0; capacity])
    }

    pub fn from_vec(data: Vec<f32>) -> Self {
        Self { data, position: 0 }
    }

    /// Reinterpret native-order bytes as floats. Trailing bytes that do not
    /// fill a whole float are dropped.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let whole = bytes.len() - bytes.len() % 4;
        Self::from_vec(bytemuck::pod_collect_to_vec(&bytes[..whole]))
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Move the cursor. Positions past the end are rejected.
    pub fn set_position(&mut self, position: usize) -> VectorResult<()> {
        check_range(position, 0, self.data.len())?;
        self.position = position;
        Ok(())
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Native-order view of the storage.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

impl VectorBuffer for FloatBuffer {
    fn position(&self) -> usize {
        self.position
    }

    fn read_f32x4(&self, index: usize) -> VectorResult<[f32; 4]> {
        check_range(index, 4, self.data.len())?;
        let mut values = [0.0; 4];
        values.copy_from_slice(&self.data[index..index + 4]);
        Ok(values)
    }

    fn write_f32x4(&mut self, index: usize, values: [f32; 4]) -> VectorResult<()> {
        check_range(index, 4, self.data.len())?;
        self.data[index..index + 4].copy_from_slice(&values);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [f32; 4] = [1.5, -2.25, 3.0, 0.5];

    #[test]
    fn test_byte_buffer_native_roundtrip() {
        let mut buffer = ByteBuffer::new(20);
        buffer.write_f32x4(3, VALUES).unwrap();
        assert_eq!(buffer.read_f32x4(3).unwrap(), VALUES);
        assert_eq!(buffer.position(), 0);
    }

    #[test]
    fn test_byte_buffer_explicit_orders() {
        let mut le = ByteBuffer::new(16).with_order(ByteOrder::LittleEndian);
        le.write_f32x4(0, VALUES).unwrap();
        assert_eq!(&le.as_bytes()[0..4], &1.5f32.to_le_bytes());
        assert_eq!(le.read_f32x4(0).unwrap(), VALUES);

        let mut be = ByteBuffer::new(16).with_order(ByteOrder::BigEndian);
        be.write_f32x4(0, VALUES).unwrap();
        assert_eq!(&be.as_bytes()[12..16], &0.5f32.to_be_bytes());
        assert_eq!(be.read_f32x4(0).unwrap(), VALUES);
    }

    #[test]
    fn test_byte_buffer_overflow() {
        let mut buffer = ByteBuffer::new(16);
        assert!(matches!(
            buffer.read_f32x4(1),
            Err(VectorError::BufferOverflow {
                index: 1,
                len: 16,
                capacity: 16
            })
        ));
        assert!(buffer.write_f32x4(usize::MAX, VALUES).is_err());
        assert!(buffer.set_position(17).is_err());
        assert!(buffer.set_position(16).is_ok());
    }

    #[test]
    fn test_float_buffer_roundtrip_and_bytes() {
        let mut floats = FloatBuffer::new(8);
        floats.write_f32x4(4, VALUES).unwrap();
        assert_eq!(floats.read_f32x4(4).unwrap(), VALUES);
        assert!(floats.read_f32x4(5).is_err());

        let bytes = ByteBuffer::from_vec(floats.as_bytes().to_vec());
        assert_eq!(bytes.read_f32x4(16).unwrap(), VALUES);
    }

    #[test]
    fn test_float_buffer_from_bytes_drops_tail() {
        let floats = FloatBuffer::from_bytes(&[0u8; 19]);
        assert_eq!(floats.capacity(), 4);
    }

    #[test]
    fn test_float_buffer_from_bytes_keeps_values() {
        let mut bytes = bytemuck::bytes_of(&VALUES).to_vec();
        bytes.push(0xff);
        let floats = FloatBuffer::from_bytes(&bytes);
        assert_eq!(floats.as_slice(), &VALUES);
    }
}
