//! Numeric type descriptors: signed, unsigned, and sign-agnostic integers
//! of 8, 16, and 32 bits.

use bytes::BufMut;

use crate::codec;
use crate::endian::Endianness;
use crate::error::BytrError;

/// Whether a numeric type treats its top bit as a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
    /// No inherent sign: negative values truncate as signed, non-negative
    /// ones as unsigned.
    Agnostic,
}

/// Immutable description of one integer representation: its width, range,
/// and signedness, plus the codec operations bound to them.
///
/// The nine constants [`INT8`] through [`XINT32`] are the only values of
/// this type; operations dispatch on width and signedness with a closed
/// `match` rather than any runtime table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericType {
    name: &'static str,
    signedness: Signedness,
    bit_size: u32,
    min: i64,
    max: i64,
    mask: u64,
}

/// Sign-agnostic 8-bit integer.
pub const XINT8: NumericType = NumericType {
    name: "Xint8",
    signedness: Signedness::Agnostic,
    bit_size: 8,
    min: i8::MIN as i64,
    max: u8::MAX as i64,
    mask: 0xFF,
};

/// Sign-agnostic 16-bit integer.
pub const XINT16: NumericType = NumericType {
    name: "Xint16",
    signedness: Signedness::Agnostic,
    bit_size: 16,
    min: i16::MIN as i64,
    max: u16::MAX as i64,
    mask: 0xFFFF,
};

/// Sign-agnostic 32-bit integer.
pub const XINT32: NumericType = NumericType {
    name: "Xint32",
    signedness: Signedness::Agnostic,
    bit_size: 32,
    min: i32::MIN as i64,
    max: u32::MAX as i64,
    mask: 0xFFFF_FFFF,
};

/// Signed 8-bit integer.
pub const INT8: NumericType = NumericType {
    name: "Int8",
    signedness: Signedness::Signed,
    bit_size: 8,
    min: i8::MIN as i64,
    max: i8::MAX as i64,
    mask: 0xFF,
};

/// Signed 16-bit integer.
pub const INT16: NumericType = NumericType {
    name: "Int16",
    signedness: Signedness::Signed,
    bit_size: 16,
    min: i16::MIN as i64,
    max: i16::MAX as i64,
    mask: 0xFFFF,
};

/// Signed 32-bit integer.
pub const INT32: NumericType = NumericType {
    name: "Int32",
    signedness: Signedness::Signed,
    bit_size: 32,
    min: i32::MIN as i64,
    max: i32::MAX as i64,
    mask: 0xFFFF_FFFF,
};

/// Unsigned 8-bit integer.
pub const UINT8: NumericType = NumericType {
    name: "Uint8",
    signedness: Signedness::Unsigned,
    bit_size: 8,
    min: 0,
    max: u8::MAX as i64,
    mask: 0xFF,
};

/// Unsigned 16-bit integer.
pub const UINT16: NumericType = NumericType {
    name: "Uint16",
    signedness: Signedness::Unsigned,
    bit_size: 16,
    min: 0,
    max: u16::MAX as i64,
    mask: 0xFFFF,
};

/// Unsigned 32-bit integer.
pub const UINT32: NumericType = NumericType {
    name: "Uint32",
    signedness: Signedness::Unsigned,
    bit_size: 32,
    min: 0,
    max: u32::MAX as i64,
    mask: 0xFFFF_FFFF,
};

impl NumericType {
    /// Name used in error messages, e.g. `"Uint16"`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn signedness(&self) -> Signedness {
        self.signedness
    }

    /// Width in bits: 8, 16, or 32.
    pub const fn bit_size(&self) -> u32 {
        self.bit_size
    }

    /// Bytes required to store one value of this type.
    pub const fn byte_size(&self) -> usize {
        (self.bit_size / 8) as usize
    }

    /// Smallest representable value.
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Largest representable value.
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Mask covering the low `bit_size` bits.
    pub const fn mask(&self) -> u64 {
        self.mask
    }

    /// The sign-agnostic type of the same width (itself for the `XINT`
    /// constants).
    pub const fn agnostic(&self) -> &'static NumericType {
        match self.bit_size {
            8 => &XINT8,
            16 => &XINT16,
            _ => &XINT32,
        }
    }

    /// Reinterprets the low `bit_size` bits of `value` under this type's
    /// signedness, matching two's-complement hardware truncation exactly.
    /// Never fails; out-of-range input wraps.
    pub fn truncate(&self, value: i64) -> i64 {
        match self.signedness {
            Signedness::Signed => self.truncate_signed(value),
            Signedness::Unsigned => self.truncate_unsigned(value),
            Signedness::Agnostic => {
                if value < 0 {
                    self.truncate_signed(value)
                } else {
                    self.truncate_unsigned(value)
                }
            }
        }
    }

    fn truncate_signed(&self, value: i64) -> i64 {
        match self.bit_size {
            8 => i64::from(codec::to_int8(value)),
            16 => i64::from(codec::to_int16(value)),
            _ => i64::from(codec::to_int32(value)),
        }
    }

    fn truncate_unsigned(&self, value: i64) -> i64 {
        match self.bit_size {
            8 => i64::from(codec::to_uint8(value)),
            16 => i64::from(codec::to_uint16(value)),
            _ => i64::from(codec::to_uint32(value)),
        }
    }

    /// `true` when `value` is exactly representable by this type.
    pub fn test(&self, value: i64) -> bool {
        self.truncate(value) == value
    }

    /// Fails with [`BytrError::InvalidValue`] unless `value` is exactly
    /// representable by this type. The single validation gate in front of
    /// every checked write.
    pub fn ensure(&self, value: i64) -> Result<(), BytrError> {
        if self.test(value) {
            return Ok(());
        }
        Err(BytrError::InvalidValue {
            type_name: self.name,
            value,
        })
    }

    /// Reinterprets a raw bit pattern as this type: `INT8.from_bits(0xFF)`
    /// is `Ok(-1)`.
    ///
    /// The pattern is validated against the sign-agnostic type of the same
    /// width, so anything either interpretation accepts is allowed.
    pub fn from_bits(&self, value: i64) -> Result<i64, BytrError> {
        self.agnostic().ensure(value)?;
        Ok(self.truncate(value))
    }

    /// Formats `value` as zero-padded lowercase hex, two digits per byte:
    /// `INT16.hex(11)` is `Ok("000b")`.
    ///
    /// Negative input renders as its two's-complement bit pattern.
    pub fn hex(&self, value: i64) -> Result<String, BytrError> {
        self.ensure(value)?;
        let bits = (value as u64) & self.mask;
        Ok(format!("{bits:0width$x}", width = self.byte_size() * 2))
    }

    /// Validates `value` and encodes it as `byte_size` bytes in the given
    /// byte order.
    pub fn to_bytes(&self, value: i64, endianness: Endianness) -> Result<Vec<u8>, BytrError> {
        self.ensure(value)?;
        let mut bytes = vec![0u8; self.byte_size()];
        self.write(&mut bytes, 0, value, endianness);
        Ok(bytes)
    }

    /// Validates `value` and appends its encoding to `buf`.
    pub fn put(
        &self,
        buf: &mut impl BufMut,
        value: i64,
        endianness: Endianness,
    ) -> Result<(), BytrError> {
        self.ensure(value)?;
        let bits = (value as u64) & self.mask;
        match self.bit_size {
            8 => buf.put_u8(bits as u8),
            16 => match endianness {
                Endianness::Big => buf.put_u16(bits as u16),
                Endianness::Little => buf.put_u16_le(bits as u16),
            },
            _ => match endianness {
                Endianness::Big => buf.put_u32(bits as u32),
                Endianness::Little => buf.put_u32_le(bits as u32),
            },
        }
        Ok(())
    }

    /// Reads a value of this type from `bytes` at `byte_offset`.
    ///
    /// Sign-agnostic types read as unsigned. The offset is trusted: reading
    /// past the end of the slice panics like any slice index. Callers that
    /// need a checked read go through [`ByteArray::get`].
    ///
    /// [`ByteArray::get`]: crate::array::ByteArray::get
    pub fn read(&self, bytes: &[u8], byte_offset: usize, endianness: Endianness) -> i64 {
        let raw = match self.bit_size {
            8 => u32::from(bytes[byte_offset]),
            16 => {
                let pair = [bytes[byte_offset], bytes[byte_offset + 1]];
                u32::from(match endianness {
                    Endianness::Big => u16::from_be_bytes(pair),
                    Endianness::Little => u16::from_le_bytes(pair),
                })
            }
            _ => {
                let quad = [
                    bytes[byte_offset],
                    bytes[byte_offset + 1],
                    bytes[byte_offset + 2],
                    bytes[byte_offset + 3],
                ];
                match endianness {
                    Endianness::Big => u32::from_be_bytes(quad),
                    Endianness::Little => u32::from_le_bytes(quad),
                }
            }
        };
        match self.signedness {
            Signedness::Signed => match self.bit_size {
                8 => i64::from(raw as i8),
                16 => i64::from(raw as i16),
                _ => i64::from(raw as i32),
            },
            Signedness::Unsigned | Signedness::Agnostic => i64::from(raw),
        }
    }

    /// Stores the low bits of `value` at `byte_offset` without validating
    /// its range; pair with [`NumericType::ensure`] when range errors
    /// matter. The offset is trusted, as in [`NumericType::read`].
    pub fn write(&self, bytes: &mut [u8], byte_offset: usize, value: i64, endianness: Endianness) {
        let bits = (value as u64) & self.mask;
        match self.bit_size {
            8 => bytes[byte_offset] = bits as u8,
            16 => {
                let pair = match endianness {
                    Endianness::Big => (bits as u16).to_be_bytes(),
                    Endianness::Little => (bits as u16).to_le_bytes(),
                };
                bytes[byte_offset..byte_offset + 2].copy_from_slice(&pair);
            }
            _ => {
                let quad = match endianness {
                    Endianness::Big => (bits as u32).to_be_bytes(),
                    Endianness::Little => (bits as u32).to_le_bytes(),
                };
                bytes[byte_offset..byte_offset + 4].copy_from_slice(&quad);
            }
        }
    }
}
