//! The WASI preview1 call surface.
//!
//! One free function per emulated syscall, operating on a [`GuestMem`] view
//! and the per-run [`WasiCtx`]. Every function returns a raw errno (`i32`),
//! never a host error: internal failures are translated to the
//! nearest-matching code before crossing back into guest execution. Calls
//! the host chooses not to emulate are registered directly as stubs by the
//! linker and do not appear here.
//!
//! Keeping the functions free of any engine types means the whole surface is
//! unit-testable against a `Vec<u8>` standing in for linear memory.

use std::io::{Read as _, Write as _};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::RngCore;
use tracing::{trace, warn};

use crate::ctx::WasiCtx;
use crate::errno;
use crate::fdtable::{FD_FILE_BASE, FD_PREOPEN_CWD, FD_STDERR, FD_STDIN};
use crate::memory::GuestMem;

/// Filetype word written by `fd_fdstat_get` for the standard streams
/// (WASI `filetype::character_device`).
const FILETYPE_CHARACTER_DEVICE: u64 = 2;

/// Preopen kind written by `fd_prestat_get` (WASI `preopentype::dir`).
const PREOPENTYPE_DIR: u64 = 0;

/// Compatibility quirk, preserved verbatim from the behavior being emulated:
/// when the last I/O vector segment of an `fd_read` is exactly this long,
/// the read is clamped to a single byte. Its origin is undocumented; do not
/// generalize or remove it.
pub const LEGACY_LINE_BUF_CLAMP: u32 = 1024;

/// Write the argument count and the packed buffer size (each argument's
/// bytes plus one NUL each) the guest must allocate for `args_get`.
pub fn args_sizes_get(mem: &mut GuestMem<'_>, ctx: &WasiCtx, argc: i32, argv_buf_size: i32) -> i32 {
    trace!(argc_ptr = argc, size_ptr = argv_buf_size, "args_sizes_get");
    mem.write_u32(argc as u32, ctx.args().len() as u32);
    let total: usize = ctx.args().iter().map(|a| a.len() + 1).sum();
    mem.write_u32(argv_buf_size as u32, total as u32);
    errno::SUCCESS
}

/// Pack each argument NUL-terminated into `argv_buf`, writing one guest
/// pointer per argument into the `argv` array.
pub fn args_get(mem: &mut GuestMem<'_>, ctx: &WasiCtx, argv: i32, argv_buf: i32) -> i32 {
    trace!(argv_ptr = argv, buf_ptr = argv_buf, "args_get");
    let mut step = 0u32;
    for (i, arg) in ctx.args().iter().enumerate() {
        mem.write_u32(argv as u32 + 4 * i as u32, argv_buf as u32 + step);
        mem.write_bytes(argv_buf as u32 + step, arg.as_bytes());
        mem.write_u8(argv_buf as u32 + step + arg.len() as u32, 0);
        step += arg.len() as u32 + 1;
    }
    errno::SUCCESS
}

/// Report zero environment variables. Environment emulation is not
/// implemented.
pub fn environ_sizes_get(mem: &mut GuestMem<'_>, environ_count: i32, environ_buf_size: i32) -> i32 {
    trace!(count_ptr = environ_count, size_ptr = environ_buf_size, "environ_sizes_get");
    mem.write_u32(environ_count as u32, 0);
    mem.write_u32(environ_buf_size as u32, 0);
    errno::SUCCESS
}

/// Succeed without writing anything; `environ_sizes_get` reported zero
/// entries, so the guest has nothing to read back.
pub fn environ_get(_mem: &mut GuestMem<'_>, environ: i32, environ_buf: i32) -> i32 {
    trace!(environ_ptr = environ, buf_ptr = environ_buf, "environ_get");
    errno::SUCCESS
}

/// Write the current wall-clock time as nanoseconds since 1970-01-01,
/// regardless of the requested clock id or precision.
pub fn clock_time_get(mem: &mut GuestMem<'_>, clock_id: i32, precision: i64, result: i32) -> i32 {
    trace!(clock_id, precision, result_ptr = result, "clock_time_get");
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    mem.write_u64(result as u32, nanos);
    errno::SUCCESS
}

/// Fill the guest buffer with host-sourced pseudorandom bytes.
pub fn random_get(mem: &mut GuestMem<'_>, buf: i32, buf_len: i32) -> i32 {
    trace!(buf_ptr = buf, buf_len, "random_get");
    let mut bytes = vec![0u8; buf_len as usize];
    rand::thread_rng().fill_bytes(&mut bytes);
    mem.write_bytes(buf as u32, &bytes);
    errno::SUCCESS
}

/// For the standard streams, write a fixed character-device descriptor
/// status (type word plus zeroed flags/rights fields). Other descriptors
/// succeed without writing meaningful data; this case is not faithfully
/// emulated.
pub fn fd_fdstat_get(mem: &mut GuestMem<'_>, fd: i32, addr: i32) -> i32 {
    trace!(fd, addr, "fd_fdstat_get");
    if fd <= FD_STDERR {
        mem.write_u64(addr as u32, FILETYPE_CHARACTER_DEVICE);
        mem.write_u64(addr as u32 + 8, 0); // flags
        mem.write_u64(addr as u32 + 16, 0); // rights base
        mem.write_u64(addr as u32 + 24, 0); // rights inheriting
    }
    errno::SUCCESS
}

/// Gather the I/O vector segments, decode them as text, write the text to
/// the stdout sink, and record the total byte count.
pub fn fd_write(
    mem: &mut GuestMem<'_>,
    ctx: &mut WasiCtx,
    fd: i32,
    iovs: i32,
    iovs_len: i32,
    nwritten: i32,
) -> i32 {
    trace!(fd, iovs_ptr = iovs, iovs_len, nwritten_ptr = nwritten, "fd_write");
    let mut gathered = Vec::new();
    // A negative segment count is invalid input; treat it as zero segments
    // rather than wrapping into a huge unsigned loop.
    for i in 0..iovs_len.max(0) as u32 {
        let addr = mem.read_u32(iovs as u32 + i * 8);
        let len = mem.read_u32(iovs as u32 + i * 8 + 4);
        if len > 0 {
            gathered.extend_from_slice(mem.read_bytes(addr, len));
        }
    }
    let text = String::from_utf8_lossy(&gathered);
    if ctx.stdout.write_all(text.as_bytes()).is_err() || ctx.stdout.flush().is_err() {
        return errno::UNSUPPORTED;
    }
    mem.write_u32(nwritten as u32, gathered.len() as u32);
    errno::SUCCESS
}

/// Scatter a read across the I/O vector segments.
///
/// Descriptor 0 reads from the stdin source; descriptors at `FD_FILE_BASE`
/// and above read from the file table; 1-99 fail immediately. Each segment
/// is filled in order with whatever the host read returns; short reads end
/// the stream naturally via subsequent zero-byte reads.
pub fn fd_read(
    mem: &mut GuestMem<'_>,
    ctx: &mut WasiCtx,
    fd: i32,
    iovs: i32,
    iovs_len: i32,
    nread: i32,
) -> i32 {
    trace!(fd, iovs_ptr = iovs, iovs_len, nread_ptr = nread, "fd_read");
    if fd < FD_STDIN || (fd > FD_STDIN && fd < FD_FILE_BASE) {
        return errno::UNSUPPORTED;
    }
    if fd >= FD_FILE_BASE && !ctx.fds.contains(fd) {
        // No such descriptor, or tombstoned
        return errno::UNSUPPORTED;
    }

    let iovs_len = iovs_len.max(0) as u32;
    let mut total = 0u32;
    for i in 0..iovs_len {
        let addr = mem.read_u32(iovs as u32 + i * 8);
        let mut len = mem.read_u32(iovs as u32 + i * 8 + 4);
        if i + 1 == iovs_len && len == LEGACY_LINE_BUF_CLAMP {
            len = 1;
        }
        let mut buf = vec![0u8; len as usize];
        let got = if fd == FD_STDIN {
            ctx.stdin.read(&mut buf)
        } else {
            ctx.fds.read(fd, &mut buf)
        };
        let got = match got {
            Ok(n) => n,
            Err(_) => return errno::UNSUPPORTED,
        };
        mem.write_bytes(addr, &buf[..got]);
        total += got as u32;
    }
    mem.write_u32(nread as u32, total);
    errno::SUCCESS
}

/// Recognize descriptor 3 as the sole preopened directory, with a name
/// length of 1.
pub fn fd_prestat_get(mem: &mut GuestMem<'_>, fd: i32, addr: i32) -> i32 {
    trace!(fd, addr, "fd_prestat_get");
    if fd == FD_PREOPEN_CWD {
        mem.write_u64(addr as u32, PREOPENTYPE_DIR);
        mem.write_u64(addr as u32 + 8, 1); // name length
        errno::SUCCESS
    } else {
        errno::BADF
    }
}

/// Write "." as the name of the preopened directory.
pub fn fd_prestat_dir_name(mem: &mut GuestMem<'_>, fd: i32, path: i32, path_len: i32) -> i32 {
    trace!(fd, path_ptr = path, path_len, "fd_prestat_dir_name");
    if fd == FD_PREOPEN_CWD {
        mem.write_u8(path as u32, b'.');
        errno::SUCCESS
    } else {
        errno::BADF
    }
}

/// Stat is not emulated for any descriptor.
pub fn fd_filestat_get(_mem: &mut GuestMem<'_>, fd: i32, result: i32) -> i32 {
    trace!(fd, result_ptr = result, "fd_filestat_get");
    errno::BADF
}

/// Decode the path from guest memory and open it read-only through the file
/// descriptor table, writing the new descriptor to the output slot.
///
/// On a missing path the output slot is still written (with zero) even
/// though the call reports failure: guests have been observed to inspect
/// the slot regardless of status, so both signals are kept.
#[allow(clippy::too_many_arguments)]
pub fn path_open(
    mem: &mut GuestMem<'_>,
    ctx: &mut WasiCtx,
    dir_fd: i32,
    dirflags: i32,
    path: i32,
    path_len: i32,
    oflags: i32,
    fs_rights_base: i64,
    fs_rights_inheriting: i64,
    fs_flags: i32,
    fd_out: i32,
) -> i32 {
    trace!(
        dir_fd,
        dirflags,
        path_ptr = path,
        path_len,
        oflags,
        fs_rights_base,
        fs_rights_inheriting,
        fs_flags,
        fd_out_ptr = fd_out,
        "path_open"
    );
    let pathname = mem.read_str(path as u32, path_len as u32);
    let host_path = Path::new(&pathname);
    if host_path.is_file() {
        match ctx.fds.open(host_path) {
            Ok(fd) => {
                mem.write_u64(fd_out as u32, fd as u64);
                return errno::SUCCESS;
            }
            Err(err) => {
                warn!(path = %pathname, %err, "Failed to open path");
            }
        }
    } else {
        warn!(path = %pathname, "Path does not exist");
    }
    ctx.record_missing_path();
    mem.write_u64(fd_out as u32, 0);
    errno::UNSUPPORTED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::SharedSink;

    const MEM_SIZE: usize = 64 * 1024;

    fn ctx_with(args: &[&str]) -> WasiCtx {
        WasiCtx::new(args.iter().map(|s| s.to_string()).collect())
    }

    fn fixture(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents).unwrap();
        f.flush().unwrap();
        f
    }

    /// Open `file` through path_open with the path staged at guest offset
    /// `path_at` and the descriptor slot at `fd_out`. Returns the errno.
    fn open_via_guest(
        mem: &mut GuestMem<'_>,
        ctx: &mut WasiCtx,
        path_str: &str,
        path_at: u32,
        fd_out: i32,
    ) -> i32 {
        mem.write_bytes(path_at, path_str.as_bytes());
        path_open(
            mem,
            ctx,
            FD_PREOPEN_CWD,
            0,
            path_at as i32,
            path_str.len() as i32,
            0,
            0,
            0,
            0,
            fd_out,
        )
    }

    #[test]
    fn test_args_sizes_and_pack_round_trip() {
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);
        let ctx = ctx_with(&["alpha", "b", "gamma!"]);

        assert_eq!(args_sizes_get(&mut mem, &ctx, 0, 4), errno::SUCCESS);
        let argc = mem.read_u32(0);
        let buf_size = mem.read_u32(4);
        assert_eq!(argc, 3);
        assert_eq!(buf_size as usize, "alpha".len() + "b".len() + "gamma!".len() + 3);

        assert_eq!(args_get(&mut mem, &ctx, 100, 200), errno::SUCCESS);

        // Follow the pointer array and reconstruct the vector
        let mut rebuilt = Vec::new();
        let mut consumed = 0u32;
        for i in 0..argc {
            let ptr = mem.read_u32(100 + 4 * i);
            let mut end = ptr;
            while mem.read_u8(end) != 0 {
                end += 1;
            }
            rebuilt.push(mem.read_str(ptr, end - ptr));
            consumed += end - ptr + 1;
        }
        assert_eq!(rebuilt, ["alpha", "b", "gamma!"]);
        assert_eq!(consumed, buf_size);
    }

    #[test]
    fn test_args_empty_vector() {
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);
        let ctx = ctx_with(&[]);

        assert_eq!(args_sizes_get(&mut mem, &ctx, 0, 4), errno::SUCCESS);
        assert_eq!(mem.read_u32(0), 0);
        assert_eq!(mem.read_u32(4), 0);
        assert_eq!(args_get(&mut mem, &ctx, 8, 16), errno::SUCCESS);
    }

    #[test]
    fn test_environ_reports_zero() {
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);

        mem.write_u32(0, 0xFFFF_FFFF);
        mem.write_u32(4, 0xFFFF_FFFF);
        assert_eq!(environ_sizes_get(&mut mem, 0, 4), errno::SUCCESS);
        assert_eq!(mem.read_u32(0), 0);
        assert_eq!(mem.read_u32(4), 0);
        assert_eq!(environ_get(&mut mem, 8, 16), errno::SUCCESS);
    }

    #[test]
    fn test_clock_monotone_non_decreasing() {
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);

        assert_eq!(clock_time_get(&mut mem, 0, 0, 0), errno::SUCCESS);
        let first = mem.read_u64(0);
        assert_eq!(clock_time_get(&mut mem, 1, 1000, 8), errno::SUCCESS);
        let second = mem.read_u64(8);
        assert!(first > 0);
        assert!(second >= first);
    }

    #[test]
    fn test_random_fills_exactly_and_varies() {
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);

        // Sentinel byte just past the buffer must survive
        mem.write_u8(32, 0xAB);
        assert_eq!(random_get(&mut mem, 0, 32), errno::SUCCESS);
        let first = mem.read_bytes(0, 32).to_vec();
        assert_eq!(mem.read_u8(32), 0xAB);

        assert_eq!(random_get(&mut mem, 0, 32), errno::SUCCESS);
        let second = mem.read_bytes(0, 32).to_vec();
        assert_ne!(first, second);
    }

    #[test]
    fn test_fdstat_standard_streams() {
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);

        for fd in 0..=2 {
            assert_eq!(fd_fdstat_get(&mut mem, fd, 0), errno::SUCCESS);
            assert_eq!(mem.read_u64(0), FILETYPE_CHARACTER_DEVICE);
            assert_eq!(mem.read_u64(8), 0);
            assert_eq!(mem.read_u64(16), 0);
            assert_eq!(mem.read_u64(24), 0);
        }

        // Other descriptors succeed but write nothing
        mem.write_u64(0, u64::MAX);
        assert_eq!(fd_fdstat_get(&mut mem, 42, 0), errno::SUCCESS);
        assert_eq!(mem.read_u64(0), u64::MAX);
    }

    #[test]
    fn test_fd_write_gathers_iovs_to_stdout() {
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);
        let sink = SharedSink::new();
        let mut ctx = ctx_with(&[]).with_stdout(Box::new(sink.clone()));

        // Two segments: "hi" at 512, " there" at 600
        mem.write_bytes(512, b"hi");
        mem.write_bytes(600, b" there");
        mem.write_u32(0, 512);
        mem.write_u32(4, 2);
        mem.write_u32(8, 600);
        mem.write_u32(12, 6);

        assert_eq!(fd_write(&mut mem, &mut ctx, 1, 0, 2, 64), errno::SUCCESS);
        assert_eq!(mem.read_u32(64), 8);
        assert_eq!(sink.contents(), b"hi there");
    }

    #[test]
    fn test_fd_write_single_iov_property() {
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);
        let sink = SharedSink::new();
        let mut ctx = ctx_with(&[]).with_stdout(Box::new(sink.clone()));

        mem.write_bytes(256, b"hi");
        mem.write_u32(0, 256);
        mem.write_u32(4, 2);

        assert_eq!(fd_write(&mut mem, &mut ctx, 1, 0, 1, 32), errno::SUCCESS);
        assert_eq!(mem.read_u32(32), 2);
        assert_eq!(sink.contents(), b"hi");
    }

    #[test]
    fn test_fd_read_from_stdin() {
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);
        let mut ctx = ctx_with(&[]).with_stdin(Box::new(&b"piped input"[..]));

        mem.write_u32(0, 512);
        mem.write_u32(4, 11);
        assert_eq!(fd_read(&mut mem, &mut ctx, 0, 0, 1, 64), errno::SUCCESS);
        assert_eq!(mem.read_u32(64), 11);
        assert_eq!(mem.read_bytes(512, 11), b"piped input");
    }

    #[test]
    fn test_fd_read_rejects_stream_range() {
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);
        let mut ctx = ctx_with(&[]);

        for fd in [1, 2, 50, 99, -1] {
            assert_eq!(fd_read(&mut mem, &mut ctx, fd, 0, 0, 64), errno::UNSUPPORTED);
        }
        // Unopened table descriptor
        assert_eq!(fd_read(&mut mem, &mut ctx, 100, 0, 0, 64), errno::UNSUPPORTED);
    }

    #[test]
    fn test_path_open_then_read_advances() {
        let file = fixture(b"0123456789");
        let path_str = file.path().to_str().unwrap().to_owned();
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);
        let mut ctx = ctx_with(&[]);

        assert_eq!(
            open_via_guest(&mut mem, &mut ctx, &path_str, 1024, 64),
            errno::SUCCESS
        );
        assert_eq!(mem.read_u64(64), 100);
        assert!(!ctx.missing_path());

        // First read: 4 bytes
        mem.write_u32(0, 2048);
        mem.write_u32(4, 4);
        assert_eq!(fd_read(&mut mem, &mut ctx, 100, 0, 1, 72), errno::SUCCESS);
        assert_eq!(mem.read_u32(72), 4);
        assert_eq!(mem.read_bytes(2048, 4), b"0123");

        // Second read continues where the first stopped
        assert_eq!(fd_read(&mut mem, &mut ctx, 100, 0, 1, 72), errno::SUCCESS);
        assert_eq!(mem.read_u32(72), 4);
        assert_eq!(mem.read_bytes(2048, 4), b"4567");

        // Ask for more than remains: short read, then EOF
        mem.write_u32(4, 100);
        assert_eq!(fd_read(&mut mem, &mut ctx, 100, 0, 1, 72), errno::SUCCESS);
        assert_eq!(mem.read_u32(72), 2);
        assert_eq!(fd_read(&mut mem, &mut ctx, 100, 0, 1, 72), errno::SUCCESS);
        assert_eq!(mem.read_u32(72), 0);
    }

    #[test]
    fn test_fd_read_last_iov_clamp() {
        let contents = vec![b'x'; 2000];
        let file = fixture(&contents);
        let path_str = file.path().to_str().unwrap().to_owned();
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);
        let mut ctx = ctx_with(&[]);

        assert_eq!(
            open_via_guest(&mut mem, &mut ctx, &path_str, 1024, 64),
            errno::SUCCESS
        );

        // A single 1024-byte segment is the last segment: clamped to 1 byte
        mem.write_u32(0, 4096);
        mem.write_u32(4, LEGACY_LINE_BUF_CLAMP);
        assert_eq!(fd_read(&mut mem, &mut ctx, 100, 0, 1, 72), errno::SUCCESS);
        assert_eq!(mem.read_u32(72), 1);

        // A 1024-byte segment that is not last is read in full
        mem.write_u32(0, 4096);
        mem.write_u32(4, LEGACY_LINE_BUF_CLAMP);
        mem.write_u32(8, 8192);
        mem.write_u32(12, 8);
        assert_eq!(fd_read(&mut mem, &mut ctx, 100, 0, 2, 72), errno::SUCCESS);
        assert_eq!(mem.read_u32(72), 1024 + 8);
    }

    #[test]
    fn test_negative_iov_count_is_a_no_op() {
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);

        let sink = SharedSink::new();
        let mut ctx = ctx_with(&[]).with_stdout(Box::new(sink.clone()));
        assert_eq!(fd_write(&mut mem, &mut ctx, 1, 0, -3, 64), errno::SUCCESS);
        assert_eq!(mem.read_u32(64), 0);
        assert!(sink.contents().is_empty());

        let mut ctx = ctx_with(&[]).with_stdin(Box::new(&b"data"[..]));
        assert_eq!(fd_read(&mut mem, &mut ctx, 0, 0, -3, 72), errno::SUCCESS);
        assert_eq!(mem.read_u32(72), 0);
    }

    #[test]
    fn test_path_open_missing_path() {
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);
        let mut ctx = ctx_with(&[]);

        mem.write_u64(64, u64::MAX);
        assert_eq!(
            open_via_guest(&mut mem, &mut ctx, "/no/such/file/anywhere", 1024, 64),
            errno::UNSUPPORTED
        );
        // Failure is double-signaled: status 1 and a zeroed descriptor slot
        assert_eq!(mem.read_u64(64), 0);
        assert!(ctx.missing_path());
        assert!(ctx.fds().is_empty());

        // The not-created descriptor 100 must stay invalid
        assert_eq!(fd_read(&mut mem, &mut ctx, 100, 0, 0, 72), errno::UNSUPPORTED);
    }

    #[test]
    fn test_prestat_preopened_cwd() {
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);

        assert_eq!(fd_prestat_get(&mut mem, FD_PREOPEN_CWD, 0), errno::SUCCESS);
        assert_eq!(mem.read_u64(0), PREOPENTYPE_DIR);
        assert_eq!(mem.read_u64(8), 1);

        assert_eq!(
            fd_prestat_dir_name(&mut mem, FD_PREOPEN_CWD, 32, 1),
            errno::SUCCESS
        );
        assert_eq!(mem.read_str(32, 1), ".");

        for fd in [0, 1, 2, 4, 100] {
            assert_eq!(fd_prestat_get(&mut mem, fd, 0), errno::BADF);
            assert_eq!(fd_prestat_dir_name(&mut mem, fd, 32, 1), errno::BADF);
        }
    }

    #[test]
    fn test_fd_filestat_get_never_emulated() {
        let mut backing = vec![0u8; MEM_SIZE];
        let mut mem = GuestMem::new(&mut backing);

        for fd in [0, 3, 100] {
            assert_eq!(fd_filestat_get(&mut mem, fd, 0), errno::BADF);
        }
    }
}
