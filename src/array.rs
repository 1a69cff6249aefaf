//! Growable byte array with endianness-aware typed access.

use bytes::Bytes;

use crate::endian::Endianness;
use crate::error::BytrError;
use crate::numeric::{
    INT8, INT16, INT32, NumericType, UINT8, UINT16, UINT32, XINT8, XINT16, XINT32,
};

/// Initial allocation for a new [`ByteArray`], in bytes.
const DEFAULT_CAPACITY: usize = 8;

/// Generates one family of per-type convenience accessors, each delegating
/// to the generic [`ByteArray::get`]/[`ByteArray::set`]/[`ByteArray::push`]
/// operations with the named descriptor.
macro_rules! typed_accessors {
    ($ty:ident: $get:ident, $set:ident, $set_many:ident, $push:ident, $push_many:ident) => {
        pub fn $get(&self, byte_offset: usize) -> Result<i64, BytrError> {
            self.get(&$ty, byte_offset)
        }

        pub fn $set(&mut self, byte_offset: usize, value: i64) -> Result<(), BytrError> {
            self.set(&$ty, byte_offset, value)
        }

        pub fn $set_many(&mut self, byte_offset: usize, values: &[i64]) -> Result<(), BytrError> {
            self.set_many(&$ty, byte_offset, values)
        }

        pub fn $push(&mut self, value: i64) -> Result<(), BytrError> {
            self.push(&$ty, value)
        }

        pub fn $push_many(&mut self, values: &[i64]) -> Result<(), BytrError> {
            self.push_many(&$ty, values)
        }
    };
}

/// A dynamically sized array of bytes with typed, bounds-checked integer
/// access.
///
/// Storage grows by doubling, or by exactly the shortfall when one request
/// exceeds a whole doubling; it never shrinks. The exact allocation is
/// observable through [`ByteArray::byte_capacity`].
#[derive(Debug, Clone)]
pub struct ByteArray {
    /// Byte order applied by every subsequent typed read and write.
    ///
    /// Reassigning it moves no bytes; existing contents are reinterpreted
    /// under the new order on the next access.
    pub endianness: Endianness,
    buf: Box<[u8]>,
    len: usize,
}

impl ByteArray {
    /// Creates an empty array with the default 8-byte capacity.
    pub fn new(endianness: Endianness) -> Self {
        Self {
            endianness,
            buf: vec![0; DEFAULT_CAPACITY].into_boxed_slice(),
            len: 0,
        }
    }

    /// Logical length in bytes.
    pub fn byte_length(&self) -> usize {
        self.len
    }

    /// Allocated length in bytes. Informational: capacity never affects
    /// results, only when reallocation happens.
    pub fn byte_capacity(&self) -> usize {
        self.buf.len()
    }

    /// Reads one `ty` value at `byte_offset` under the current byte order.
    pub fn get(&self, ty: &NumericType, byte_offset: usize) -> Result<i64, BytrError> {
        self.check_bounds(byte_offset, ty.byte_size())?;
        Ok(ty.read(&self.buf, byte_offset, self.endianness))
    }

    /// Validates `value` and writes it at `byte_offset`.
    pub fn set(
        &mut self,
        ty: &NumericType,
        byte_offset: usize,
        value: i64,
    ) -> Result<(), BytrError> {
        self.check_bounds(byte_offset, ty.byte_size())?;
        ty.ensure(value)?;
        ty.write(&mut self.buf, byte_offset, value, self.endianness);
        Ok(())
    }

    /// Validates and writes a run of values at increasing offsets from
    /// `byte_offset`.
    ///
    /// An empty slice fails with [`BytrError::EmptyValues`]: overwriting
    /// nothing is treated as a likely caller bug, unlike appending nothing
    /// via [`ByteArray::push_many`]. Every value is validated before the
    /// first byte changes, so a failure leaves the array untouched.
    pub fn set_many(
        &mut self,
        ty: &NumericType,
        byte_offset: usize,
        values: &[i64],
    ) -> Result<(), BytrError> {
        if values.is_empty() {
            return Err(BytrError::EmptyValues);
        }
        let size = ty.byte_size();
        let span = size
            .checked_mul(values.len())
            .ok_or(BytrError::OutOfBounds)?;
        self.check_bounds(byte_offset, span)?;
        for &value in values {
            ty.ensure(value)?;
        }
        let mut offset = byte_offset;
        for &value in values {
            ty.write(&mut self.buf, offset, value, self.endianness);
            offset += size;
        }
        Ok(())
    }

    /// Validates `value` and appends it, growing capacity as needed.
    ///
    /// Capacity is reserved before the value is validated, so a rejected
    /// push can leave the allocation enlarged; length and contents never
    /// change on failure.
    pub fn push(&mut self, ty: &NumericType, value: i64) -> Result<(), BytrError> {
        self.ensure_capacity(ty.byte_size());
        ty.ensure(value)?;
        ty.write(&mut self.buf, self.len, value, self.endianness);
        self.len += ty.byte_size();
        Ok(())
    }

    /// Validates and appends a run of values. An empty slice appends
    /// nothing and succeeds.
    ///
    /// Values are validated as they are laid down past the logical end, and
    /// the length is committed only after the last one: a failure part way
    /// through changes nothing observable, though capacity may already have
    /// grown.
    pub fn push_many(&mut self, ty: &NumericType, values: &[i64]) -> Result<(), BytrError> {
        if values.is_empty() {
            return Ok(());
        }
        let size = ty.byte_size();
        let span = size
            .checked_mul(values.len())
            .ok_or(BytrError::OutOfBounds)?;
        self.ensure_capacity(span);
        let mut offset = self.len;
        for &value in values {
            ty.ensure(value)?;
            ty.write(&mut self.buf, offset, value, self.endianness);
            offset += size;
        }
        self.len = offset;
        Ok(())
    }

    /// Removes `delete_count` bytes at `start` and inserts `inserted` in
    /// their place, shifting the suffix.
    ///
    /// The inserted bytes are raw and never validated against a descriptor.
    /// The deleted range must lie within the logical length.
    pub fn splice(
        &mut self,
        start: usize,
        delete_count: usize,
        inserted: &[u8],
    ) -> Result<(), BytrError> {
        self.check_bounds(start, delete_count)?;

        let suffix_start = start + delete_count;
        let new_len = self.len - delete_count + inserted.len();
        let increase = if inserted.len() > delete_count {
            self.capacity_increase(inserted.len() - delete_count)
        } else {
            0
        };

        if increase > 0 {
            let old = self.grow(increase);
            self.buf[..start].copy_from_slice(&old[..start]);
            self.buf[start..start + inserted.len()].copy_from_slice(inserted);
            self.buf[start + inserted.len()..new_len]
                .copy_from_slice(&old[suffix_start..self.len]);
        } else {
            // Shift the preserved suffix first; copy_within handles the
            // overlap in either direction.
            self.buf
                .copy_within(suffix_start..self.len, start + inserted.len());
            self.buf[start..start + inserted.len()].copy_from_slice(inserted);
        }

        self.len = new_len;
        Ok(())
    }

    /// Borrows the logical contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Copies the logical contents into an independent snapshot; later
    /// mutation of the array never affects it.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_slice())
    }

    /// Copies `length` bytes starting at `start` into an independent
    /// snapshot.
    pub fn to_bytes_at(&self, start: usize, length: usize) -> Result<Bytes, BytrError> {
        self.check_bounds(start, length)?;
        Ok(Bytes::copy_from_slice(&self.buf[start..start + length]))
    }

    fn check_bounds(&self, byte_offset: usize, byte_size: usize) -> Result<(), BytrError> {
        match byte_offset.checked_add(byte_size) {
            Some(end) if end <= self.len => Ok(()),
            _ => Err(BytrError::OutOfBounds),
        }
    }

    /// Extra bytes the allocation must gain to fit `bytes_needed` more:
    /// zero when they already fit, the current capacity (a doubling) for a
    /// small shortfall, or the exact shortfall when one request exceeds a
    /// whole doubling.
    fn capacity_increase(&self, bytes_needed: usize) -> usize {
        let capacity = self.buf.len();
        let available = capacity - self.len;
        if bytes_needed <= available {
            return 0;
        }
        let shortfall = bytes_needed - available;
        if shortfall < capacity { capacity } else { shortfall }
    }

    fn ensure_capacity(&mut self, bytes_needed: usize) {
        let increase = self.capacity_increase(bytes_needed);
        if increase == 0 {
            return;
        }
        let old = self.grow(increase);
        self.buf[..self.len].copy_from_slice(&old[..self.len]);
    }

    /// Swaps in a zeroed allocation `increase` bytes larger and returns the
    /// old storage so callers can copy over the parts they keep.
    fn grow(&mut self, increase: usize) -> Box<[u8]> {
        let new_capacity = self.buf.len() + increase;
        tracing::trace!(
            old_capacity = self.buf.len(),
            new_capacity,
            byte_length = self.len,
            "growing ByteArray storage"
        );
        std::mem::replace(&mut self.buf, vec![0; new_capacity].into_boxed_slice())
    }
}

impl ByteArray {
    // One accessor family per descriptor, delegating to the generic
    // get/set/push operations above.
    typed_accessors!(INT8: get_int8, set_int8, set_int8_many, push_int8, push_int8_many);
    typed_accessors!(INT16: get_int16, set_int16, set_int16_many, push_int16, push_int16_many);
    typed_accessors!(INT32: get_int32, set_int32, set_int32_many, push_int32, push_int32_many);
    typed_accessors!(UINT8: get_uint8, set_uint8, set_uint8_many, push_uint8, push_uint8_many);
    typed_accessors!(UINT16: get_uint16, set_uint16, set_uint16_many, push_uint16, push_uint16_many);
    typed_accessors!(UINT32: get_uint32, set_uint32, set_uint32_many, push_uint32, push_uint32_many);
    typed_accessors!(XINT8: get_xint8, set_xint8, set_xint8_many, push_xint8, push_xint8_many);
    typed_accessors!(XINT16: get_xint16, set_xint16, set_xint16_many, push_xint16, push_xint16_many);
    typed_accessors!(XINT32: get_xint32, set_xint32, set_xint32_many, push_xint32, push_xint32_many);
}
