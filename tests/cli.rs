use std::io::{Cursor, Write};

use pretty_assertions::assert_eq;

use checksum::cli::run;

struct Outcome {
    code: i32,
    stdout: String,
    stderr: String,
}

fn invoke(args: &[&str], stdin: &[u8]) -> Outcome {
    let mut input = Cursor::new(stdin.to_vec());
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run(args.iter().copied(), &mut input, &mut stdout, &mut stderr);
    Outcome {
        code,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

#[test]
fn help_goes_to_stdout() {
    for flag in ["-h", "--help"] {
        let outcome = invoke(&[flag], b"");
        assert_eq!(outcome.code, 0);
        assert!(outcome.stdout.starts_with("Usage: checksum [options] [method] file\n"));
        assert!(outcome.stdout.contains("  -sha256      SHA-256 hash\n"));
        assert!(outcome.stdout.ends_with("When file is '-', read standard input.\n"));
        assert_eq!(outcome.stderr, "");
    }
}

#[test]
fn bare_invocation_prints_usage_to_stderr() {
    let outcome = invoke(&[], b"");
    assert_eq!(outcome.code, 1);
    assert_eq!(outcome.stdout, "");
    assert!(outcome.stderr.starts_with("Usage: checksum"));
}

#[test]
fn unsupported_selector() {
    let outcome = invoke(&["-md5", "-"], b"abc");
    assert_eq!(outcome.code, 1);
    assert_eq!(outcome.stdout, "");
    assert!(outcome.stderr.starts_with("Unsupported argument: -md5\nUsage: checksum"));
}

#[test]
fn missing_file_argument() {
    let outcome = invoke(&["-sha256"], b"abc");
    assert_eq!(outcome.code, 1);
    assert_eq!(outcome.stdout, "");
    assert_eq!(outcome.stderr, "No input file specified\n");
}

#[test]
fn unopenable_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.bin");
    let missing = missing.to_str().unwrap();

    let outcome = invoke(&["-32", missing], b"");
    assert_eq!(outcome.code, 1);
    assert_eq!(outcome.stdout, "");
    assert_eq!(outcome.stderr, format!("Unable to open file '{}'\n", missing));
}

#[test]
fn digests_stdin() {
    let outcome = invoke(&["-sha256", "-"], b"abc");
    assert_eq!(outcome.code, 0);
    assert_eq!(outcome.stdout, "0xba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n");
    assert_eq!(outcome.stderr, "");

    let outcome = invoke(&["-sha256", "-"], b"");
    assert_eq!(outcome.stdout, "0xe3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\n");
}

#[test]
fn sums_are_zero_padded() {
    let input = [0x01, 0x02, 0xff, 0xff];
    assert_eq!(invoke(&["-8", "-"], &input).stdout, "0x01\n");
    assert_eq!(invoke(&["-16", "-"], &input).stdout, "0x0201\n");
    assert_eq!(invoke(&["-32", "-"], &input).stdout, "0x00000201\n");
    assert_eq!(invoke(&["-64", "-"], &input).stdout, "0x0000000000000201\n");
}

#[test]
fn digests_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"The quick brown fox jumps over the lazy dog").unwrap();
    file.flush().unwrap();
    let path = file.path().to_str().unwrap();

    let outcome = invoke(&["-sha256", path], b"ignored");
    assert_eq!(outcome.code, 0);
    assert_eq!(outcome.stdout, "0xd7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592\n");

    // 43 bytes of ASCII summing to 0xfd9
    let outcome = invoke(&["-16", path], b"");
    assert_eq!(outcome.stdout, "0x0fd9\n");
}

#[test]
fn extra_arguments_are_ignored() {
    let outcome = invoke(&["-8", "-", "unused"], b"\x10\x20");
    assert_eq!(outcome.code, 0);
    assert_eq!(outcome.stdout, "0x30\n");
}
