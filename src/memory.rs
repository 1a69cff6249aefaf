//! Byte buffer with cached wider-word views.

use std::sync::OnceLock;

/// An owned byte buffer that can also be viewed as native-endian 16-bit or
/// 32-bit words.
///
/// Word views are decoded on first access and cached; trailing bytes that do
/// not fill a whole word are excluded. [`Memory::resize`] drops both caches,
/// so a view can never go stale against the bytes it was decoded from.
#[derive(Debug, Clone)]
pub struct Memory {
    bytes: Box<[u8]>,
    x16: OnceLock<Box<[u16]>>,
    x32: OnceLock<Box<[u32]>>,
}

impl Memory {
    pub fn new(bytes: Box<[u8]>) -> Self {
        Self {
            bytes,
            x16: OnceLock::new(),
            x32: OnceLock::new(),
        }
    }

    /// The raw bytes.
    pub fn x8(&self) -> &[u8] {
        &self.bytes
    }

    /// The bytes as 16-bit words, excluding a trailing odd byte.
    pub fn x16(&self) -> &[u16] {
        self.x16.get_or_init(|| {
            self.bytes
                .chunks_exact(2)
                .map(|pair| u16::from_ne_bytes([pair[0], pair[1]]))
                .collect()
        })
    }

    /// The bytes as 32-bit words, excluding up to three trailing bytes.
    pub fn x32(&self) -> &[u32] {
        self.x32.get_or_init(|| {
            self.bytes
                .chunks_exact(4)
                .map(|quad| u32::from_ne_bytes([quad[0], quad[1], quad[2], quad[3]]))
                .collect()
        })
    }

    /// Reallocates to `new_capacity` bytes, keeping the common prefix and
    /// zero-filling any extension. Both word caches are dropped and rebuilt
    /// from the resized bytes on next access.
    pub fn resize(&mut self, new_capacity: usize) {
        let old_capacity = self.bytes.len();
        tracing::trace!(old_capacity, new_capacity, "resizing Memory");
        let old = std::mem::replace(&mut self.bytes, vec![0; new_capacity].into_boxed_slice());
        let keep = old_capacity.min(new_capacity);
        self.bytes[..keep].copy_from_slice(&old[..keep]);
        self.x16.take();
        self.x32.take();
    }
}

impl From<Vec<u8>> for Memory {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes.into_boxed_slice())
    }
}
