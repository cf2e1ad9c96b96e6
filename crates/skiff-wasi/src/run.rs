//! Wiring a single guest execution.
//!
//! `run` builds the per-run context and the host-function registry, lets the
//! engine resolve the guest's imports, locates the linear-memory export, and
//! invokes the entry point. Execution is synchronous: every host call runs
//! to completion on the calling thread before the guest resumes.

use tracing::{debug, info};
use wasmtime::Store;

use skiff_core::engine::SharedEngine;
use skiff_core::module::LoadedModule;

use crate::ctx::WasiCtx;
use crate::error::{ProcExit, WasiError, WasiResult};
use crate::linker::WasiLinker;

/// Name of the linear-memory export every guest must provide.
pub const MEMORY_EXPORT: &str = "memory";

/// Name of the entry-point export.
pub const ENTRY_POINT: &str = "_start";

/// Run a loaded module with the given guest argument vector.
///
/// Returns the process exit code the run produced: 0 on normal completion,
/// 1 if any call reported a missing file path, or whatever the guest passed
/// to `proc_exit`.
///
/// # Errors
///
/// Fails if the module's imports cannot be resolved, if it lacks the memory
/// or entry-point export, or if the guest traps for any reason other than
/// `proc_exit`.
pub fn run(engine: &SharedEngine, module: &LoadedModule, argv: Vec<String>) -> WasiResult<i32> {
    run_with_ctx(engine, module, WasiCtx::new(argv))
}

/// Like [`run`], but with a caller-built context (custom stdio, typically).
pub fn run_with_ctx(
    engine: &SharedEngine,
    module: &LoadedModule,
    ctx: WasiCtx,
) -> WasiResult<i32> {
    let mut linker = WasiLinker::new(engine.inner());
    linker.add_wasi()?;

    let mut store = Store::new(engine.inner(), ctx);
    let instance = linker.inner().instantiate(&mut store, module.inner())?;

    let memory = instance
        .get_memory(&mut store, MEMORY_EXPORT)
        .ok_or(WasiError::MemoryNotFound)?;
    debug!(pages = memory.size(&store), "Resolved guest linear memory");

    let start = instance
        .get_typed_func::<(), ()>(&mut store, ENTRY_POINT)
        .map_err(|_| WasiError::NoEntryPoint)?;

    info!("Invoking guest entry point");
    match start.call(&mut store, ()) {
        Ok(()) => {
            let code = if store.data().missing_path() { 1 } else { 0 };
            debug!(code, "Guest entry point returned");
            Ok(code)
        }
        Err(err) => match err.downcast_ref::<ProcExit>() {
            Some(exit) => {
                debug!(code = exit.code(), "Guest requested process exit");
                Ok(exit.code())
            }
            None => Err(WasiError::Wasmtime(err)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::SharedSink;
    use skiff_core::engine::{IntoShared, SkiffEngine};
    use skiff_core::module::ModuleLoader;

    fn load(wat: &str) -> (SharedEngine, LoadedModule) {
        let engine = SkiffEngine::default_engine().unwrap().into_shared();
        let module = ModuleLoader::new(engine.clone()).load_wat(wat).unwrap();
        (engine, module)
    }

    #[test]
    fn test_end_to_end_fd_write_and_proc_exit() {
        let (engine, module) = load(
            r#"
            (module
                (import "wasi_snapshot_preview1" "fd_write"
                    (func $fd_write (param i32 i32 i32 i32) (result i32)))
                (import "wasi_unstable" "proc_exit" (func $exit (param i32)))
                (memory (export "memory") 1)
                (data (i32.const 16) "hi")
                (func (export "_start")
                    ;; iov[0] = { ptr = 16, len = 2 }
                    (i32.store (i32.const 0) (i32.const 16))
                    (i32.store (i32.const 4) (i32.const 2))
                    (drop (call $fd_write
                        (i32.const 1) (i32.const 0) (i32.const 1) (i32.const 8)))
                    (call $exit (i32.const 7))
                )
            )
        "#,
        );

        let sink = SharedSink::new();
        let ctx = WasiCtx::new(vec![]).with_stdout(Box::new(sink.clone()));
        let code = run_with_ctx(&engine, &module, ctx).unwrap();

        assert_eq!(code, 7);
        assert_eq!(sink.contents(), b"hi");
    }

    #[test]
    fn test_argc_visible_through_either_namespace() {
        for ns in ["wasi_snapshot_preview1", "wasi_unstable"] {
            let (engine, module) = load(&format!(
                r#"
                (module
                    (import "{ns}" "args_sizes_get"
                        (func $sizes (param i32 i32) (result i32)))
                    (import "{ns}" "proc_exit" (func $exit (param i32)))
                    (memory (export "memory") 1)
                    (func (export "_start")
                        (drop (call $sizes (i32.const 0) (i32.const 4)))
                        (call $exit (i32.load (i32.const 0)))
                    )
                )
            "#
            ));

            let argv = vec!["a".to_string(), "b".to_string(), "c".to_string()];
            let code = run(&engine, &module, argv).unwrap();
            assert_eq!(code, 3, "namespace {ns}");
        }
    }

    #[test]
    fn test_missing_path_turns_normal_completion_into_exit_one() {
        let (engine, module) = load(
            r#"
            (module
                (import "wasi_snapshot_preview1" "path_open"
                    (func $path_open
                        (param i32 i32 i32 i32 i32 i64 i64 i32 i32) (result i32)))
                (memory (export "memory") 1)
                (data (i32.const 16) "/no/such/file/anywhere")
                (func (export "_start")
                    (drop (call $path_open
                        (i32.const 3) (i32.const 0)
                        (i32.const 16) (i32.const 22)
                        (i32.const 0) (i64.const 0) (i64.const 0) (i32.const 0)
                        (i32.const 256)))
                )
            )
        "#,
        );

        // The guest returns normally, but the reported missing path must
        // surface as host exit code 1.
        assert_eq!(run(&engine, &module, vec![]).unwrap(), 1);
    }

    #[test]
    fn test_normal_completion_is_exit_zero() {
        let (engine, module) = load(
            r#"
            (module
                (memory (export "memory") 1)
                (func (export "_start"))
            )
        "#,
        );

        assert_eq!(run(&engine, &module, vec![]).unwrap(), 0);
    }

    #[test]
    fn test_missing_memory_export() {
        let (engine, module) = load(
            r#"
            (module
                (func (export "_start"))
            )
        "#,
        );

        let err = run(&engine, &module, vec![]).unwrap_err();
        assert!(matches!(err, WasiError::MemoryNotFound));
    }

    #[test]
    fn test_missing_entry_point() {
        let (engine, module) = load(
            r#"
            (module
                (memory (export "memory") 1)
                (func (export "helper"))
            )
        "#,
        );

        let err = run(&engine, &module, vec![]).unwrap_err();
        assert!(matches!(err, WasiError::NoEntryPoint));
    }

    #[test]
    fn test_guest_trap_is_an_error() {
        let (engine, module) = load(
            r#"
            (module
                (memory (export "memory") 1)
                (func (export "_start") unreachable)
            )
        "#,
        );

        let err = run(&engine, &module, vec![]).unwrap_err();
        assert!(matches!(err, WasiError::Wasmtime(_)));
    }

    #[test]
    fn test_unsupported_call_returns_fixed_status() {
        let (engine, module) = load(
            r#"
            (module
                (import "wasi_snapshot_preview1" "fd_seek"
                    (func $seek (param i32 i64 i32 i32) (result i32)))
                (import "wasi_snapshot_preview1" "proc_exit" (func $exit (param i32)))
                (memory (export "memory") 1)
                (func (export "_start")
                    (call $exit
                        (call $seek (i32.const 0) (i64.const 0) (i32.const 0) (i32.const 0)))
                )
            )
        "#,
        );

        assert_eq!(run(&engine, &module, vec![]).unwrap(), 1);
    }
}
