//! Typed access to the guest's linear memory.
//!
//! Guest pointers are plain 32-bit offsets into a single contiguous byte
//! region. This layer performs no bounds validation of its own: the guest
//! program, not the accessor, is responsible for passing pointers that lie
//! inside its own allocations, mirroring the real WASI trust boundary. An
//! out-of-range offset panics on the slice index and aborts the run.

/// A borrowed view of the guest's linear memory.
///
/// Constructed from the byte slice of the instance's `memory` export inside
/// a host call, or from any `&mut [u8]` in tests. All multi-byte values use
/// little-endian encoding, the wasm byte order.
pub struct GuestMem<'a> {
    data: &'a mut [u8],
}

impl<'a> GuestMem<'a> {
    /// Wrap a linear-memory byte slice.
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data }
    }

    /// Size of the backing region in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the backing region is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read the byte at `offset`.
    pub fn read_u8(&self, offset: u32) -> u8 {
        self.data[offset as usize]
    }

    /// Read a little-endian u32 at `offset`.
    pub fn read_u32(&self, offset: u32) -> u32 {
        let off = offset as usize;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&self.data[off..off + 4]);
        u32::from_le_bytes(buf)
    }

    /// Read a little-endian u64 at `offset`.
    pub fn read_u64(&self, offset: u32) -> u64 {
        let off = offset as usize;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&self.data[off..off + 8]);
        u64::from_le_bytes(buf)
    }

    /// Write a byte at `offset`.
    pub fn write_u8(&mut self, offset: u32, value: u8) {
        self.data[offset as usize] = value;
    }

    /// Write a little-endian u32 at `offset`.
    pub fn write_u32(&mut self, offset: u32, value: u32) {
        let off = offset as usize;
        self.data[off..off + 4].copy_from_slice(&value.to_le_bytes());
    }

    /// Write a little-endian u64 at `offset`.
    pub fn write_u64(&mut self, offset: u32, value: u64) {
        let off = offset as usize;
        self.data[off..off + 8].copy_from_slice(&value.to_le_bytes());
    }

    /// Borrow `len` bytes starting at `offset`.
    pub fn read_bytes(&self, offset: u32, len: u32) -> &[u8] {
        let off = offset as usize;
        &self.data[off..off + len as usize]
    }

    /// Copy `bytes` into guest memory starting at `offset`.
    pub fn write_bytes(&mut self, offset: u32, bytes: &[u8]) {
        let off = offset as usize;
        self.data[off..off + bytes.len()].copy_from_slice(bytes);
    }

    /// Extract a fixed-length span as text, replacing invalid UTF-8.
    pub fn read_str(&self, offset: u32, len: u32) -> String {
        String::from_utf8_lossy(self.read_bytes(offset, len)).into_owned()
    }
}

impl std::fmt::Debug for GuestMem<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuestMem")
            .field("len", &self.data.len())
            .finish()
    }
}
