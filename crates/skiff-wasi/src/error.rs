//! Error types for the WASI host layer.
//!
//! Failures inside individual calls never surface here: they are translated
//! to errno values before crossing back into the guest. These types cover
//! the registry and the run loop, plus the one sanctioned way out of guest
//! execution, [`ProcExit`].

use thiserror::Error;

/// Errors from the host-function registry and the run loop.
#[derive(Debug, Error)]
pub enum WasiError {
    /// The instance does not export a linear memory under `memory`.
    #[error("Memory export 'memory' not found")]
    MemoryNotFound,

    /// The instance does not export the `_start` entry point.
    #[error("Entry point '_start' not found or has the wrong signature")]
    NoEntryPoint,

    /// Function registration failed.
    #[error("Failed to register '{module}::{name}': {reason}")]
    Registration {
        /// The import namespace.
        module: String,
        /// The function name.
        name: String,
        /// The reason for failure.
        reason: String,
    },

    /// Function already registered.
    #[error("Function already registered: {module}::{name}")]
    AlreadyRegistered {
        /// The import namespace.
        module: String,
        /// The function name.
        name: String,
    },

    /// Underlying Wasmtime error, including guest traps.
    #[error("Wasmtime error: {0}")]
    Wasmtime(#[from] wasmtime::Error),
}

/// Result type for WASI host operations.
pub type WasiResult<T> = std::result::Result<T, WasiError>;

/// Raised by the `proc_exit` call to unwind guest execution immediately.
///
/// This never returns control to the guest: it propagates out of the entry
/// point as a trap, and the run loop converts it into the host process exit
/// code the guest requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcExit(pub i32);

impl ProcExit {
    /// The exit code the guest requested.
    pub fn code(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ProcExit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "guest exited with code {}", self.0)
    }
}

impl std::error::Error for ProcExit {}
