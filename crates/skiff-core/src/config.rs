//! Configuration for the Skiff engine.

/// Configuration for the Skiff engine.
///
/// This controls how the underlying Wasmtime engine is configured. Skiff runs
/// one guest at a time on the calling thread, so there is no fuel metering,
/// epoch interruption or async support to configure.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum WASM stack size in bytes.
    ///
    /// Defaults to 1MB.
    pub max_wasm_stack: usize,

    /// Enable debug information in compiled code.
    ///
    /// This increases compilation time and memory usage but provides
    /// better error messages and backtraces.
    pub debug_info: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_wasm_stack: 1024 * 1024, // 1MB
            debug_info: false,
        }
    }
}

impl EngineConfig {
    /// Create a new engine configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum WASM stack size.
    pub fn with_max_wasm_stack(mut self, bytes: usize) -> Self {
        self.max_wasm_stack = bytes;
        self
    }

    /// Enable debug information.
    pub fn with_debug_info(mut self, enabled: bool) -> Self {
        self.debug_info = enabled;
        self
    }
}
