//! bytr — Typed, bounds-checked integer codecs over a growable byte array.
//!
//! This crate models the nine 8/16/32-bit integer interpretations (signed,
//! unsigned, and sign-agnostic) as value descriptors, and builds a growable
//! [`ByteArray`] on top of them that validates every value and offset before
//! touching memory. All values travel as `i64`; each descriptor narrows that
//! domain to its own range.
//!
//! # Architecture
//!
//! - **`numeric`** — [`NumericType`] descriptors (ranges, truncation, hex, encode/decode)
//! - **`codec`** — Free-function primitives (truncation, range tests, little-endian access)
//! - **`array`** — [`ByteArray`], a growable byte array with typed accessors
//! - **`memory`** — [`Memory`], a byte buffer with cached wider-word views
//! - **`endian`** — Byte-order selection
//! - **`error`** — Crate error type
//!
//! # Example
//!
//! ```
//! use bytr::{ByteArray, Endianness, INT8};
//!
//! assert_eq!(INT8.min(), -128);
//! assert_eq!(INT8.hex(11)?, "0b");
//!
//! let mut array = ByteArray::new(Endianness::Big);
//! array.push_int8(1)?;
//! array.push_uint8_many(&[2, 3, 4])?;
//! assert_eq!(array.get_uint32(0)?, 0x0102_0304);
//!
//! // Reassigning the byte order reinterprets the same bytes.
//! array.endianness = Endianness::Little;
//! assert_eq!(array.get_uint32(0)?, 0x0403_0201);
//! # Ok::<(), bytr::BytrError>(())
//! ```

pub mod array;
pub mod codec;
pub mod endian;
pub mod error;
pub mod memory;
pub mod numeric;

pub use array::ByteArray;
pub use codec::*;
pub use endian::Endianness;
pub use error::BytrError;
pub use memory::Memory;
pub use numeric::{
    INT8, INT16, INT32, NumericType, Signedness, UINT8, UINT16, UINT32, XINT8, XINT16, XINT32,
};
