//! Command-line driver.
//!
//! `checksum [-h|--help]` lists the registered methods;
//! `checksum <method> <file|->` digests one file (or stdin for `-`) and
//! prints the result as `0x` plus lowercase hex.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;

use log::{debug, warn};

use crate::digest::registry::{self, Method, METHODS};
use crate::digest::{Checksum, Context, DigestAlgorithm};
use crate::error::{Error, Result};

/// Read size used for methods that accept chunks of any length.
pub const DEFAULT_BUFFER_SIZE: usize = 256 * 1024;

/// Writes the usage text and the method list to `out`.
pub fn usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Usage: checksum [options] [method] file")?;
    writeln!(out, "Options:")?;
    writeln!(out, "  -h, --help   Display this information")?;
    writeln!(out)?;
    writeln!(out, "Methods:")?;
    for method in METHODS.iter() {
        writeln!(out, "  {:<10.10}   {}", method.selector, method.name)?;
    }
    writeln!(out, "When file is '-', read standard input.")
}

/// Fills `buf` from `input`, stopping early only at end of input.
fn read_chunk(input: &mut dyn Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Runs one complete digest computation over `input`.
///
/// Input is fed in buffers of the method's chunk size (or
/// [`DEFAULT_BUFFER_SIZE`]); only the final buffer may be short. On a read
/// error the context is dropped without being finished.
pub fn checksum_reader(method: &'static Method, input: &mut dyn Read, from: &'static str) -> Result<Checksum> {
    let mut ctx = Context::init(method)?;

    let buf_size = if method.chunk_size == 0 { DEFAULT_BUFFER_SIZE } else { method.chunk_size };
    let mut buf = Vec::new();
    buf.try_reserve_exact(buf_size).map_err(|_| Error::AllocationFailed)?;
    buf.resize(buf_size, 0);
    debug!("reading {} in chunks of {} bytes", from, buf_size);

    loop {
        let n = read_chunk(input, &mut buf).map_err(|source| Error::ReadFailed { from, source })?;
        ctx.process(&buf[..n]).map_err(|e| match e {
            Error::ProcessingFailed(_) => e,
            e => Error::ProcessingFailed(e.to_string()),
        })?;
        if n < buf_size {
            break;
        }
    }

    ctx.finish().map_err(|e| match e {
        Error::FinalizationFailed(_) => e,
        e => Error::FinalizationFailed(e.to_string()),
    })
}

/// Digests the file at `path`, or `stdin` when `path` is `-`.
pub fn checksum_path(method: &'static Method, path: &Path, stdin: &mut dyn Read) -> Result<Checksum> {
    if path.as_os_str() == "-" {
        return checksum_reader(method, stdin, "stdin");
    }
    let mut file = File::open(path).map_err(|source| Error::InputUnavailable {
        path: path.display().to_string(),
        source,
    })?;
    checksum_reader(method, &mut file, "input file")
}

/// Runs the utility with `args` (program name excluded) and returns the
/// process exit code.
pub fn run<I, T>(args: I, stdin: &mut dyn Read, stdout: &mut impl Write, stderr: &mut impl Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let first = match args.first() {
        Some(first) => first,
        None => {
            let _ = usage(stderr);
            return 1;
        }
    };
    if let Some("-h") | Some("--help") = first.to_str() {
        return match usage(stdout) {
            Ok(()) => 0,
            Err(e) => {
                warn!("unable to write usage: {}", e);
                1
            }
        };
    }

    let selector = first.to_string_lossy();
    let method = match registry::find(&selector) {
        Ok(method) => method,
        Err(e) => {
            let _ = writeln!(stderr, "{}", e);
            let _ = usage(stderr);
            return 1;
        }
    };

    let path = match args.get(1) {
        Some(path) => Path::new(path),
        None => {
            let _ = writeln!(stderr, "No input file specified");
            return 1;
        }
    };

    let checksum = match checksum_path(method, path, stdin) {
        Ok(checksum) => checksum,
        Err(e) => {
            debug!("{} failed: {:?}", method.name, e);
            let _ = writeln!(stderr, "{}", e);
            return 1;
        }
    };

    match writeln!(stdout, "{}", checksum).and_then(|()| stdout.flush()) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(stderr, "Error writing output: {}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    // Yields its data one byte per call, then fails or reports end of input
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        fail_at_end: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos < self.data.len() {
                buf[0] = self.data[self.pos];
                self.pos += 1;
                return Ok(1);
            }
            if self.fail_at_end {
                return Err(io::Error::new(ErrorKind::Other, "device gone"));
            }
            Ok(0)
        }
    }

    #[test]
    fn short_reads_are_accumulated() {
        let method = registry::find("-sha256").unwrap();
        let mut trickle = Trickle { data: b"abc".to_vec(), pos: 0, fail_at_end: false };
        let checksum = checksum_reader(method, &mut trickle, "stdin").unwrap();
        assert_eq!(
            checksum.to_string(),
            "0xba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn read_error_is_reported() {
        let method = registry::find("-8").unwrap();
        let mut trickle = Trickle { data: b"abc".to_vec(), pos: 0, fail_at_end: true };
        match checksum_reader(method, &mut trickle, "stdin") {
            Err(Error::ReadFailed { from, .. }) => assert_eq!(from, "stdin"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn input_larger_than_buffer() {
        let method = registry::find("-32").unwrap();
        let data = vec![1u8; DEFAULT_BUFFER_SIZE * 2 + 5];
        let checksum = checksum_reader(method, &mut Cursor::new(data), "stdin").unwrap();
        assert_eq!(checksum.to_string(), format!("0x{:08x}", DEFAULT_BUFFER_SIZE * 2 + 5));
    }

    #[test]
    fn usage_lists_methods_in_order() {
        let mut out = Vec::new();
        usage(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Usage: checksum [options] [method] file");
        assert_eq!(lines[5], "  -8           8-bit sum");
        assert_eq!(lines[9], "  -sha256      SHA-256 hash");
        assert_eq!(lines[10], "When file is '-', read standard input.");
    }
}
