//! Per-run WASI state.
//!
//! One `WasiCtx` is constructed per guest execution and threaded through
//! every host call as the store's data. Nothing here is process-global: the
//! call surface can be exercised in isolation with a context built around
//! in-memory stdio.

use std::io::{self, Read, Write};

use crate::fdtable::FdTable;

/// State available to every WASI call during a single guest execution.
pub struct WasiCtx {
    /// The guest's argument vector. Immutable for the run; argv[0] is the
    /// first user-supplied argument, not the image path.
    args: Vec<String>,
    /// Host files opened via `path_open`.
    pub(crate) fds: FdTable,
    /// Where `fd_write` output goes.
    pub(crate) stdout: Box<dyn Write + Send>,
    /// Where `fd_read` on descriptor 0 reads from.
    pub(crate) stdin: Box<dyn Read + Send>,
    /// Set when `path_open` reported a nonexistent path; surfaces as host
    /// exit code 1 after an otherwise-normal completion.
    missing_path: bool,
}

impl WasiCtx {
    /// Create a context with the given guest argv, wired to the process's
    /// standard streams.
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            fds: FdTable::new(),
            stdout: Box::new(io::stdout()),
            stdin: Box::new(io::stdin()),
            missing_path: false,
        }
    }

    /// Replace the stdout sink. Used by tests and embedders that capture
    /// guest output.
    pub fn with_stdout(mut self, stdout: Box<dyn Write + Send>) -> Self {
        self.stdout = stdout;
        self
    }

    /// Replace the stdin source.
    pub fn with_stdin(mut self, stdin: Box<dyn Read + Send>) -> Self {
        self.stdin = stdin;
        self
    }

    /// The guest's argument vector.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The file descriptor table.
    pub fn fds(&self) -> &FdTable {
        &self.fds
    }

    /// Whether any call reported a file path that could not be found.
    pub fn missing_path(&self) -> bool {
        self.missing_path
    }

    pub(crate) fn record_missing_path(&mut self) {
        self.missing_path = true;
    }
}

impl std::fmt::Debug for WasiCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WasiCtx")
            .field("args", &self.args)
            .field("fds", &self.fds)
            .field("missing_path", &self.missing_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::SharedSink;

    #[test]
    fn test_ctx_defaults() {
        let ctx = WasiCtx::new(vec!["a".into(), "b".into()]);
        assert_eq!(ctx.args(), ["a", "b"]);
        assert!(ctx.fds().is_empty());
        assert!(!ctx.missing_path());
    }

    #[test]
    fn test_injected_stdout() {
        let sink = SharedSink::new();
        let mut ctx = WasiCtx::new(vec![]).with_stdout(Box::new(sink.clone()));

        ctx.stdout.write_all(b"probe").unwrap();
        assert_eq!(sink.contents(), b"probe");
    }
}
