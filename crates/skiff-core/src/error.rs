//! Core error types for Skiff.
//!
//! Errors are categorized by their origin: engine creation and configuration
//! on one side, module loading and validation on the other. Execution-time
//! failures are owned by `skiff-wasi`.

use thiserror::Error;

/// Top-level error type for Skiff core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Error during engine creation or configuration.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Error during module loading or validation.
    #[error("Module error: {0}")]
    Module(#[from] ModuleError),
}

/// Errors during engine creation and configuration.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Invalid engine configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Underlying Wasmtime error.
    #[error("Wasmtime error: {0}")]
    Wasmtime(#[from] wasmtime::Error),
}

/// Errors during module loading and validation.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// The WASM module is invalid or malformed.
    #[error("Invalid WASM module: {0}")]
    Invalid(String),

    /// IO error reading the module.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The module does not export the entry point the runner needs.
    #[error("Missing export: '{0}'")]
    MissingExport(String),

    /// Underlying Wasmtime error.
    #[error("Wasmtime error: {0}")]
    Wasmtime(#[from] wasmtime::Error),
}

/// Result type alias for Skiff core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Result type alias for engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Result type alias for module operations.
pub type ModuleResult<T> = std::result::Result<T, ModuleError>;
