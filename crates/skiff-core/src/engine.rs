//! Wasmtime engine wrapper for Skiff.

use std::sync::Arc;

use tracing::info;
use wasmtime::{Config, Engine};

use crate::config::EngineConfig;
use crate::error::EngineResult;

/// The core Skiff engine that wraps Wasmtime.
///
/// `SkiffEngine` is responsible for configuring the underlying Wasmtime
/// engine and providing a shared instance for module compilation. Execution
/// is synchronous and single-threaded: one guest runs to completion on the
/// calling thread.
///
/// # Example
///
/// ```
/// use skiff_core::{EngineConfig, SkiffEngine};
///
/// let engine = SkiffEngine::new(EngineConfig::default()).unwrap();
/// ```
pub struct SkiffEngine {
    /// The underlying Wasmtime engine.
    inner: Engine,
    /// Configuration used to create this engine.
    config: EngineConfig,
}

impl SkiffEngine {
    /// Create a new Skiff engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the Wasmtime engine cannot be created with
    /// the given configuration.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        let mut wasmtime_config = Config::new();

        wasmtime_config.max_wasm_stack(config.max_wasm_stack);
        wasmtime_config.debug_info(config.debug_info);

        // Standard WASM feature set
        wasmtime_config.wasm_bulk_memory(true);
        wasmtime_config.wasm_multi_value(true);
        wasmtime_config.wasm_reference_types(true);
        wasmtime_config.wasm_simd(true);

        let inner = Engine::new(&wasmtime_config)?;

        info!(
            max_wasm_stack = config.max_wasm_stack,
            debug_info = config.debug_info,
            "Created Skiff engine"
        );

        Ok(Self { inner, config })
    }

    /// Create a new engine with default configuration.
    pub fn default_engine() -> EngineResult<Self> {
        Self::new(EngineConfig::default())
    }

    /// Get a reference to the underlying Wasmtime engine.
    pub fn inner(&self) -> &Engine {
        &self.inner
    }

    /// Get the configuration used to create this engine.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl std::fmt::Debug for SkiffEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkiffEngine")
            .field("config", &self.config)
            .finish()
    }
}

/// A shared reference to a Skiff engine.
///
/// The engine is created once at startup and shared between the module
/// loader and the run loop.
pub type SharedEngine = Arc<SkiffEngine>;

/// Extension trait for creating shared engines.
pub trait IntoShared {
    /// Convert into a shared engine reference.
    fn into_shared(self) -> SharedEngine;
}

impl IntoShared for SkiffEngine {
    fn into_shared(self) -> SharedEngine {
        Arc::new(self)
    }
}
