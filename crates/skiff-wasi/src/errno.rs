//! Errno-style result codes returned to the guest.
//!
//! Only a small subset of the POSIX error space is actually distinguished:
//! everything that is not emulated, and every internal host failure, is
//! collapsed to [`UNSUPPORTED`] before crossing back into guest execution.

/// The call completed and its results were written to guest memory.
pub const SUCCESS: i32 = 0;

/// Generic failure: functionality the host does not emulate, or a host-side
/// I/O error (including a `path_open` on a nonexistent path).
pub const UNSUPPORTED: i32 = 1;

/// EBADF: a descriptor outside the reserved/implemented ranges.
pub const BADF: i32 = 8;
