//! Skiff WASI - the host side of a minimal WASI preview1 implementation
//!
//! This crate implements the system-call surface a WASI guest imports:
//! argument/environment retrieval, clocks, randomness, and a small read-only
//! file I/O subset. Each call reads its arguments from and writes its results
//! into the guest's linear memory, and reports success or failure through an
//! errno-style integer instead of host exceptions.
//!
//! The pieces:
//!
//! - [`GuestMem`]: typed reads/writes at guest-relative offsets into the
//!   linear memory
//! - [`FdTable`]: numeric descriptors for host files opened by the guest
//! - [`WasiCtx`]: per-run state (argv, descriptors, stdio) passed into every
//!   call
//! - [`preview1`]: the call implementations, one free function per syscall
//! - [`WasiLinker`]: the name-to-implementation registry handed to the
//!   engine, registered under both the `wasi_snapshot_preview1` and legacy
//!   `wasi_unstable` import namespaces
//! - [`run`](run::run): wires registry, memory export and argv into a single
//!   guest execution
//!
//! # Example
//!
//! ```ignore
//! use skiff_core::prelude::*;
//! use skiff_wasi::run;
//!
//! let engine = SkiffEngine::default_engine()?.into_shared();
//! let module = ModuleLoader::new(engine.clone()).load_file(path)?;
//! let exit_code = run::run(&engine, &module, vec!["input.txt".into()])?;
//! ```

pub mod ctx;
pub mod errno;
pub mod error;
pub mod fdtable;
pub mod linker;
pub mod memory;
pub mod preview1;
pub mod run;

// Re-export main types
pub use ctx::WasiCtx;
pub use error::{ProcExit, WasiError, WasiResult};
pub use fdtable::FdTable;
pub use linker::{RegisteredCall, WasiLinker, LEGACY_MODULE, SNAPSHOT_MODULE};
pub use memory::GuestMem;
pub use run::{run, run_with_ctx, ENTRY_POINT, MEMORY_EXPORT};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::ctx::WasiCtx;
    pub use crate::error::{ProcExit, WasiError, WasiResult};
    pub use crate::fdtable::FdTable;
    pub use crate::linker::WasiLinker;
    pub use crate::memory::GuestMem;
    pub use crate::run::{run, run_with_ctx};
}
