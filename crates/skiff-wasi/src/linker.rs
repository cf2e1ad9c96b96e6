//! The host-function registry.
//!
//! `WasiLinker` builds the name-to-implementation table the engine resolves
//! guest imports against. The canonical table is registered once under
//! [`SNAPSHOT_MODULE`] and then aliased wholesale to [`LEGACY_MODULE`], so
//! binaries built against either ABI revision resolve to the same functions
//! with byte-identical semantics.

use tracing::{debug, trace};
use wasmtime::{Caller, Engine, Linker};

use crate::ctx::WasiCtx;
use crate::errno;
use crate::error::{ProcExit, WasiError, WasiResult};
use crate::memory::GuestMem;
use crate::preview1;
use crate::run::MEMORY_EXPORT;

/// The current WASI ABI import namespace.
pub const SNAPSHOT_MODULE: &str = "wasi_snapshot_preview1";

/// The legacy ABI import namespace, aliased to the same table.
pub const LEGACY_MODULE: &str = "wasi_unstable";

/// A (namespace, name) pair recorded at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCall {
    /// The import namespace.
    pub module: String,
    /// The function name.
    pub name: String,
}

/// Wrapper around Wasmtime's `Linker` that tracks the registered call table.
pub struct WasiLinker {
    /// The underlying Wasmtime linker.
    inner: Linker<WasiCtx>,
    /// Registry of registered calls, including namespace aliases.
    registered: Vec<RegisteredCall>,
}

/// Fetch the instance's linear memory and hand the call a [`GuestMem`] view
/// plus the run's [`WasiCtx`].
fn with_memory<R>(
    mut caller: Caller<'_, WasiCtx>,
    f: impl FnOnce(&mut GuestMem<'_>, &mut WasiCtx) -> R,
) -> Result<R, wasmtime::Error> {
    let memory = caller
        .get_export(MEMORY_EXPORT)
        .and_then(|e| e.into_memory())
        .ok_or(WasiError::MemoryNotFound)?;
    let (data, ctx) = memory.data_and_store_mut(&mut caller);
    let mut mem = GuestMem::new(data);
    Ok(f(&mut mem, ctx))
}

impl WasiLinker {
    /// Create an empty linker for the given engine.
    pub fn new(engine: &Engine) -> Self {
        Self {
            inner: Linker::new(engine),
            registered: Vec::new(),
        }
    }

    /// Get a reference to the underlying Wasmtime linker.
    pub fn inner(&self) -> &Linker<WasiCtx> {
        &self.inner
    }

    /// Consume this linker and return the underlying Wasmtime linker.
    pub fn into_inner(self) -> Linker<WasiCtx> {
        self.inner
    }

    /// Get the list of registered calls, aliases included.
    pub fn registered_calls(&self) -> &[RegisteredCall] {
        &self.registered
    }

    /// Check if a call is already registered.
    pub fn is_registered(&self, module: &str, name: &str) -> bool {
        self.registered
            .iter()
            .any(|c| c.module == module && c.name == name)
    }

    /// Register one call in the canonical namespace.
    fn define<Params, Results>(
        &mut self,
        name: &str,
        func: impl wasmtime::IntoFunc<WasiCtx, Params, Results>,
    ) -> WasiResult<()> {
        if self.is_registered(SNAPSHOT_MODULE, name) {
            return Err(WasiError::AlreadyRegistered {
                module: SNAPSHOT_MODULE.to_string(),
                name: name.to_string(),
            });
        }

        self.inner
            .func_wrap(SNAPSHOT_MODULE, name, func)
            .map_err(|e| WasiError::Registration {
                module: SNAPSHOT_MODULE.to_string(),
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        self.registered.push(RegisteredCall {
            module: SNAPSHOT_MODULE.to_string(),
            name: name.to_string(),
        });

        trace!(name, "Registered host function");
        Ok(())
    }

    /// Register the full WASI call table and alias it to the legacy
    /// namespace.
    pub fn add_wasi(&mut self) -> WasiResult<&mut Self> {
        // Unemulated calls share one body: return the fixed failure status
        // with no side effects. The signatures must still match the ABI so
        // import resolution succeeds.
        macro_rules! stub {
            ($name:literal, ($($ty:ty),*)) => {
                self.define($name, |$(_: $ty),*| -> i32 {
                    trace!(call = $name, "unsupported WASI call");
                    errno::UNSUPPORTED
                })?;
            };
        }

        self.define(
            "args_get",
            |caller: Caller<'_, WasiCtx>, argv: i32, argv_buf: i32| {
                with_memory(caller, |mem, ctx| preview1::args_get(mem, ctx, argv, argv_buf))
            },
        )?;
        self.define(
            "args_sizes_get",
            |caller: Caller<'_, WasiCtx>, argc: i32, size: i32| {
                with_memory(caller, |mem, ctx| {
                    preview1::args_sizes_get(mem, ctx, argc, size)
                })
            },
        )?;
        self.define(
            "environ_get",
            |caller: Caller<'_, WasiCtx>, environ: i32, buf: i32| {
                with_memory(caller, |mem, _ctx| preview1::environ_get(mem, environ, buf))
            },
        )?;
        self.define(
            "environ_sizes_get",
            |caller: Caller<'_, WasiCtx>, count: i32, size: i32| {
                with_memory(caller, |mem, _ctx| {
                    preview1::environ_sizes_get(mem, count, size)
                })
            },
        )?;
        stub!("clock_res_get", (i32, i32));
        self.define(
            "clock_time_get",
            |caller: Caller<'_, WasiCtx>, clock_id: i32, precision: i64, result: i32| {
                with_memory(caller, |mem, _ctx| {
                    preview1::clock_time_get(mem, clock_id, precision, result)
                })
            },
        )?;
        stub!("fd_advise", (i32, i64, i64, i32));
        stub!("fd_allocate", (i32, i64, i64));
        stub!("fd_close", (i32));
        stub!("fd_datasync", (i32));
        self.define(
            "fd_fdstat_get",
            |caller: Caller<'_, WasiCtx>, fd: i32, addr: i32| {
                with_memory(caller, |mem, _ctx| preview1::fd_fdstat_get(mem, fd, addr))
            },
        )?;
        stub!("fd_fdstat_set_flags", (i32, i32));
        stub!("fd_fdstat_set_rights", (i32, i64, i64));
        self.define(
            "fd_filestat_get",
            |caller: Caller<'_, WasiCtx>, fd: i32, result: i32| {
                with_memory(caller, |mem, _ctx| {
                    preview1::fd_filestat_get(mem, fd, result)
                })
            },
        )?;
        stub!("fd_filestat_set_size", (i32, i64));
        stub!("fd_filestat_set_times", (i32, i64, i64, i32));
        stub!("fd_pread", (i32, i32, i32, i64, i32));
        self.define(
            "fd_prestat_get",
            |caller: Caller<'_, WasiCtx>, fd: i32, addr: i32| {
                with_memory(caller, |mem, _ctx| preview1::fd_prestat_get(mem, fd, addr))
            },
        )?;
        self.define(
            "fd_prestat_dir_name",
            |caller: Caller<'_, WasiCtx>, fd: i32, path: i32, path_len: i32| {
                with_memory(caller, |mem, _ctx| {
                    preview1::fd_prestat_dir_name(mem, fd, path, path_len)
                })
            },
        )?;
        stub!("fd_pwrite", (i32, i32, i32, i64, i32));
        self.define(
            "fd_read",
            |caller: Caller<'_, WasiCtx>, fd: i32, iovs: i32, iovs_len: i32, nread: i32| {
                with_memory(caller, |mem, ctx| {
                    preview1::fd_read(mem, ctx, fd, iovs, iovs_len, nread)
                })
            },
        )?;
        stub!("fd_readdir", (i32, i32, i32, i64, i32));
        stub!("fd_renumber", (i32, i32));
        stub!("fd_seek", (i32, i64, i32, i32));
        stub!("fd_sync", (i32));
        stub!("fd_tell", (i32, i32));
        self.define(
            "fd_write",
            |caller: Caller<'_, WasiCtx>, fd: i32, iovs: i32, iovs_len: i32, nwritten: i32| {
                with_memory(caller, |mem, ctx| {
                    preview1::fd_write(mem, ctx, fd, iovs, iovs_len, nwritten)
                })
            },
        )?;
        stub!("path_create_directory", (i32, i32, i32));
        stub!("path_filestat_get", (i32, i32, i32, i32, i32));
        stub!("path_filestat_set_times", (i32, i32, i32, i32, i64, i64, i32));
        stub!("path_link", (i32, i32, i32, i32, i32, i32, i32));
        self.define(
            "path_open",
            |caller: Caller<'_, WasiCtx>,
             dir_fd: i32,
             dirflags: i32,
             path: i32,
             path_len: i32,
             oflags: i32,
             fs_rights_base: i64,
             fs_rights_inheriting: i64,
             fs_flags: i32,
             fd_out: i32| {
                with_memory(caller, |mem, ctx| {
                    preview1::path_open(
                        mem,
                        ctx,
                        dir_fd,
                        dirflags,
                        path,
                        path_len,
                        oflags,
                        fs_rights_base,
                        fs_rights_inheriting,
                        fs_flags,
                        fd_out,
                    )
                })
            },
        )?;
        stub!("path_readlink", (i32, i32, i32, i32, i32, i32));
        stub!("path_remove_directory", (i32, i32, i32));
        stub!("path_rename", (i32, i32, i32, i32, i32, i32));
        stub!("path_symlink", (i32, i32, i32, i32, i32));
        stub!("path_unlink_file", (i32, i32, i32));
        stub!("poll_oneoff", (i32, i32, i32, i32));
        self.define("proc_exit", |code: i32| -> Result<(), wasmtime::Error> {
            trace!(code, "proc_exit");
            Err(ProcExit(code).into())
        })?;
        stub!("proc_raise", (i32));
        self.define(
            "random_get",
            |caller: Caller<'_, WasiCtx>, buf: i32, buf_len: i32| {
                with_memory(caller, |mem, _ctx| preview1::random_get(mem, buf, buf_len))
            },
        )?;
        stub!("sched_yield", ());
        stub!("sock_recv", (i32, i32, i32, i32, i32, i32));
        stub!("sock_send", (i32, i32, i32, i32, i32));
        stub!("sock_shutdown", (i32, i32));

        // Legacy ABI revision: same function objects under a second name.
        self.inner
            .alias_module(SNAPSHOT_MODULE, LEGACY_MODULE)
            .map_err(|e| WasiError::Registration {
                module: LEGACY_MODULE.to_string(),
                name: "*".to_string(),
                reason: e.to_string(),
            })?;
        let aliases: Vec<RegisteredCall> = self
            .registered
            .iter()
            .map(|c| RegisteredCall {
                module: LEGACY_MODULE.to_string(),
                name: c.name.clone(),
            })
            .collect();
        self.registered.extend(aliases);

        debug!(calls = self.registered.len(), "Built WASI call table");
        Ok(self)
    }
}

impl std::fmt::Debug for WasiLinker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WasiLinker")
            .field("registered_calls", &self.registered.len())
            .finish()
    }
}
