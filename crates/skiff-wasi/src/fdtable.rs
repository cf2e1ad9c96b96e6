//! The file descriptor table.
//!
//! Descriptor numbering contract, preserved bit-exactly: 0 = stdin,
//! 1 = stdout, 2 = stderr, 3 = the sole preopened directory ("."), and
//! 100 upward = host files opened by the guest, in insertion order.
//!
//! Entries are arena-style slots keyed by stable index: a closed entry would
//! become a tombstone rather than shifting its neighbors. No `fd_close` path
//! exists today, so opened files live for the remainder of the process: a
//! known limitation carried over from the behavior being emulated.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

/// Standard input.
pub const FD_STDIN: i32 = 0;
/// Standard output.
pub const FD_STDOUT: i32 = 1;
/// Standard error.
pub const FD_STDERR: i32 = 2;
/// The single preopened directory handle, representing ".".
pub const FD_PREOPEN_CWD: i32 = 3;

/// First descriptor number handed out for opened files. Chosen so the
/// dynamic range can never collide with the reserved ids above.
pub const FD_FILE_BASE: i32 = 100;

/// Ordered collection of host files opened on behalf of the guest.
///
/// Entry at local index `i` corresponds to guest-visible descriptor
/// `FD_FILE_BASE + i`.
#[derive(Debug, Default)]
pub struct FdTable {
    files: Vec<Option<File>>,
}

impl FdTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots, including tombstones.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no file has ever been opened.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Open an existing host file read-only and append it to the table.
    ///
    /// Returns the guest-visible descriptor number.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the path cannot be opened.
    pub fn open(&mut self, path: &Path) -> io::Result<i32> {
        let file = File::open(path)?;
        self.files.push(Some(file));
        let fd = FD_FILE_BASE + (self.files.len() as i32 - 1);
        debug!(fd, path = %path.display(), "Opened file");
        Ok(fd)
    }

    /// Check that `fd` maps to an in-range, non-tombstoned slot.
    pub fn contains(&self, fd: i32) -> bool {
        self.index(fd)
            .and_then(|i| self.files.get(i))
            .is_some_and(|slot| slot.is_some())
    }

    /// Read up to `buf.len()` bytes from the file at its current position,
    /// advancing the position.
    ///
    /// Short reads are expected: fewer bytes than requested may be returned,
    /// including zero at end-of-file.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidInput` if `fd` does not name a live slot.
    pub fn read(&mut self, fd: i32, buf: &mut [u8]) -> io::Result<usize> {
        let file = self
            .index(fd)
            .and_then(|i| self.files.get_mut(i))
            .and_then(|slot| slot.as_mut())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "bad file descriptor"))?;
        file.read(buf)
    }

    fn index(&self, fd: i32) -> Option<usize> {
        if fd < FD_FILE_BASE {
            None
        } else {
            Some((fd - FD_FILE_BASE) as usize)
        }
    }
}
