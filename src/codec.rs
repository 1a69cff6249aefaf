//! Free functions for integer truncation, range tests, and little-endian
//! slice access.
//!
//! This is the unvalidated counterpart to the [`NumericType`] descriptors:
//! nothing here allocates or range-checks, and offsets are trusted — an
//! out-of-range offset panics like any slice index. Use a [`ByteArray`] when
//! bounds and value checking matter.
//!
//! [`NumericType`]: crate::numeric::NumericType
//! [`ByteArray`]: crate::array::ByteArray

// -- Truncation --

/// Reinterprets the low 8 bits of `value` as signed, matching
/// two's-complement hardware truncation.
pub fn to_int8(value: i64) -> i8 {
    value as i8
}

pub fn to_int16(value: i64) -> i16 {
    value as i16
}

pub fn to_int32(value: i64) -> i32 {
    value as i32
}

/// Reinterprets the low 8 bits of `value` as unsigned.
pub fn to_uint8(value: i64) -> u8 {
    value as u8
}

pub fn to_uint16(value: i64) -> u16 {
    value as u16
}

pub fn to_uint32(value: i64) -> u32 {
    value as u32
}

// -- Range tests --

/// `true` when `value` is exactly representable as a signed 8-bit integer.
pub fn is_int8(value: i64) -> bool {
    i64::from(i8::MIN) <= value && value <= i64::from(i8::MAX)
}

pub fn is_int16(value: i64) -> bool {
    i64::from(i16::MIN) <= value && value <= i64::from(i16::MAX)
}

pub fn is_int32(value: i64) -> bool {
    i64::from(i32::MIN) <= value && value <= i64::from(i32::MAX)
}

pub fn is_uint8(value: i64) -> bool {
    0 <= value && value <= i64::from(u8::MAX)
}

pub fn is_uint16(value: i64) -> bool {
    0 <= value && value <= i64::from(u16::MAX)
}

pub fn is_uint32(value: i64) -> bool {
    0 <= value && value <= i64::from(u32::MAX)
}

/// `true` when `value` fits 8 bits under either sign interpretation.
pub fn is_xint8(value: i64) -> bool {
    i64::from(i8::MIN) <= value && value <= i64::from(u8::MAX)
}

pub fn is_xint16(value: i64) -> bool {
    i64::from(i16::MIN) <= value && value <= i64::from(u16::MAX)
}

pub fn is_xint32(value: i64) -> bool {
    i64::from(i32::MIN) <= value && value <= i64::from(u32::MAX)
}

// -- Little-endian reads --

/// Reads the signed byte at `offset`.
pub fn read_int8(bytes: &[u8], offset: usize) -> i8 {
    bytes[offset] as i8
}

pub fn read_uint8(bytes: &[u8], offset: usize) -> u8 {
    bytes[offset]
}

/// Reads a little-endian signed 16-bit integer at `offset`.
pub fn read_int16_le(bytes: &[u8], offset: usize) -> i16 {
    read_uint16_le(bytes, offset) as i16
}

pub fn read_uint16_le(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

pub fn read_int32_le(bytes: &[u8], offset: usize) -> i32 {
    read_uint32_le(bytes, offset) as i32
}

pub fn read_uint32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

// -- Sign-agnostic little-endian writes --

/// Stores the low 8 bits of `value` at `offset`. Only the bit pattern is
/// kept; the sign of `value` is irrelevant.
pub fn write_xint8(bytes: &mut [u8], offset: usize, value: i64) {
    bytes[offset] = value as u8;
}

/// Stores the low 16 bits of `value` at `offset`, least significant byte
/// first.
pub fn write_xint16_le(bytes: &mut [u8], offset: usize, value: i64) {
    bytes[offset..offset + 2].copy_from_slice(&(value as u16).to_le_bytes());
}

/// Stores the low 32 bits of `value` at `offset`, least significant byte
/// first.
pub fn write_xint32_le(bytes: &mut [u8], offset: usize, value: i64) {
    bytes[offset..offset + 4].copy_from_slice(&(value as u32).to_le_bytes());
}
