//! Skiff Core - engine and module loading
//!
//! This crate provides the execution-engine side of the Skiff WASI runner.
//! It includes:
//!
//! - [`SkiffEngine`]: a thin wrapper around the Wasmtime engine
//! - [`ModuleLoader`]: loading and validating WASM binary images
//! - Metadata types describing a loaded image's imports, exports and memory
//!
//! The WASI call surface itself lives in `skiff-wasi`; this crate only knows
//! how to turn bytes into a validated, instantiable module.
//!
//! # Quick Start
//!
//! ```ignore
//! use skiff_core::prelude::*;
//!
//! let engine = SkiffEngine::default_engine()?.into_shared();
//! let loader = ModuleLoader::new(engine.clone());
//! let module = loader.load_file(Path::new("program.wasm"))?;
//! assert!(module.has_export("_start"));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod module;

// Re-export main types at crate root
pub use config::EngineConfig;
pub use engine::{IntoShared, SharedEngine, SkiffEngine};
pub use error::{CoreError, EngineError, EngineResult, ModuleError, ModuleResult, Result};
pub use module::{
    ExportInfo, ExportKind, ImportInfo, ImportKind, LoadedModule, MemoryInfo, ModuleLoader,
    ModuleMetadata,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::engine::{IntoShared, SharedEngine, SkiffEngine};
    pub use crate::error::{CoreError, ModuleError, Result};
    pub use crate::module::{LoadedModule, ModuleLoader};
}
