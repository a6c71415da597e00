use icetower_dump::{dump, FloorError, FloorReader, ReportOptions};
use proptest::prelude::*;
use std::io::Write;
use std::process::{Command, Stdio};

const SIG: &[u8; 12] = b"IceTower\r\n\x1a\0";
const FLOOR_BYTES: usize = 280;

fn header(comment: &[u8], version: i32, floor_count: i32) -> Vec<u8> {
    let mut out = SIG.to_vec();
    let mut field = comment.to_vec();
    field.resize(108, 0);
    out.extend_from_slice(&field);
    out.extend_from_slice(&version.to_le_bytes());
    out.extend_from_slice(&floor_count.to_le_bytes());
    assert_eq!(out.len(), 128);
    out
}

fn floor_file(floors: &[[u8; FLOOR_BYTES]], trailing: &[u8]) -> Vec<u8> {
    let mut out = header(b"test", 1, floors.len() as i32);
    for floor in floors {
        out.extend_from_slice(floor);
    }
    out.extend_from_slice(trailing);
    out
}

fn run(bytes: &[u8]) -> (icetower_dump::Result<icetower_dump::DumpSummary>, String) {
    let mut out = Vec::new();
    let result = dump(bytes, &mut out, &ReportOptions::default());
    (result, String::from_utf8(out).expect("report is utf-8"))
}

#[test]
fn dispenser_floor_is_suppressed() {
    let (result, text) = run(&floor_file(&[[0x08; FLOOR_BYTES]], &[]));
    let summary = result.expect("decode ok");
    assert_eq!(summary.floors_suppressed, 1);
    assert_eq!(
        text,
        "Version: 1\nComment: test\nFloor count: 1\n---- Floor #  1 ----\n\n"
    );
    assert!(!text.contains("Difficulty"));
}

#[test]
fn empty_floor_prints_full_grid() {
    let (result, text) = run(&floor_file(&[[0x00; FLOOR_BYTES]], &[]));
    result.expect("decode ok");

    let mut expected = String::from("Version: 1\nComment: test\nFloor count: 1\n---- Floor #  1 ----\n\n");
    for _ in 0..14 {
        expected.push_str(&" ".repeat(20));
        expected.push('\n');
    }
    expected.push_str("\nDifficulty = 0\n\n");
    assert_eq!(text, expected);
}

#[test]
fn trailing_bytes_are_reported() {
    let (result, text) = run(&floor_file(&[[0x01; FLOOR_BYTES]], &[0xde, 0xad, 0x00]));
    let summary = result.expect("trailing data is not fatal");
    assert_eq!(summary.trailing_bytes, 3);
    assert!(text.ends_with("Trailing (?): 3 bytes b\"\\xde\\xad\\x00\"\n"));
}

#[test]
fn exact_length_file_has_no_trailer() {
    let floors = [[0x02; FLOOR_BYTES], [0x0a; FLOOR_BYTES], [0x09; FLOOR_BYTES]];
    let (result, text) = run(&floor_file(&floors, &[]));
    let summary = result.expect("decode ok");
    assert_eq!(summary.floors_decoded, 3);
    assert_eq!(summary.trailing_bytes, 0);
    assert!(!text.contains("Trailing"));
    assert!(text.contains("Difficulty = 1\n"));
    assert!(text.contains("Difficulty = 3\n"));
    assert!(text.contains("Difficulty = 2\n"));
}

#[test]
fn missing_signature_is_rejected() {
    let samples: [&[u8]; 3] = [
        b"IceTowel\r\n\x1a\0",
        b"\0IceTower\r\n\x1a",
        b"icetower\r\n\x1a\0",
    ];
    for sig in samples {
        let mut bytes = header(b"", 1, 0);
        bytes[..12].copy_from_slice(sig);
        let (result, text) = run(&bytes);
        assert!(matches!(result, Err(FloorError::BadSignature(_))));
        assert!(text.is_empty(), "nothing is printed for a bad header");
    }
}

#[test]
fn other_versions_are_rejected() {
    for (version, count, comment) in [(0, 0, &b""[..]), (2, 1, &b"hello"[..]), (-7, -1, &b"x"[..])] {
        let (result, text) = run(&header(comment, version, count));
        match result {
            Err(FloorError::UnsupportedVersion(v)) => assert_eq!(v, version),
            other => panic!("expected UnsupportedVersion, got {:?}", other),
        }
        assert!(text.is_empty());
    }
}

#[test]
fn truncated_header_is_rejected() {
    let bytes = header(b"", 1, 0);
    let (result, _) = run(&bytes[..127]);
    assert!(matches!(
        result,
        Err(FloorError::TruncatedInput { expected: 128, found: 127, .. })
    ));
}

#[test]
fn truncation_fails_at_first_incomplete_record() {
    let mut bytes = header(b"", 1, 4);
    bytes.extend_from_slice(&[0u8; FLOOR_BYTES * 2 + 279]);
    let (result, text) = run(&bytes);
    match result {
        Err(FloorError::TruncatedInput { context, expected, found }) => {
            assert_eq!(context, "floor #3");
            assert_eq!(expected, FLOOR_BYTES);
            assert_eq!(found, 279);
        }
        other => panic!("expected TruncatedInput, got {:?}", other),
    }
    assert!(text.contains("---- Floor #  2 ----"));
    assert!(!text.contains("---- Floor #  3 ----"));
}

#[test]
fn output_is_deterministic() {
    let mut floor = [0u8; FLOOR_BYTES];
    for (i, cell) in floor.iter_mut().enumerate() {
        *cell = (i % 17) as u8;
    }
    let bytes = floor_file(&[floor, [0xff; FLOOR_BYTES]], b"tail");
    let (first, first_text) = run(&bytes);
    let (second, second_text) = run(&bytes);
    assert_eq!(first.expect("ok"), second.expect("ok"));
    assert_eq!(first_text, second_text);
}

#[test]
fn reader_opens_files_on_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(&floor_file(&[[0x03; FLOOR_BYTES]], b"!"))
        .expect("write fixture");

    let mut reader = FloorReader::open(file.path()).expect("open floor file");
    assert_eq!(reader.header().comment, b"test");
    let floors: Vec<_> = reader
        .floors()
        .expect("count ok")
        .map(|f| f.expect("floor ok"))
        .collect();
    assert_eq!(floors.len(), 1);
    assert_eq!(floors[0].difficulty, 1);
    assert_eq!(reader.read_trailing().expect("read ok"), b"!");
}

#[test]
fn cli_reports_usage_without_path() {
    let output = Command::new(env!("CARGO_BIN_EXE_icetower-dump"))
        .output()
        .expect("run binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn cli_dumps_file_and_fails_on_bad_header() {
    let mut good = tempfile::NamedTempFile::new().expect("temp file");
    good.write_all(&floor_file(&[[0x00; FLOOR_BYTES]], &[]))
        .expect("write fixture");
    let output = Command::new(env!("CARGO_BIN_EXE_icetower-dump"))
        .arg(good.path())
        .output()
        .expect("run binary");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Difficulty = 0"));

    let mut bad = tempfile::NamedTempFile::new().expect("temp file");
    bad.write_all(&header(b"", 3, 0)).expect("write fixture");
    let output = Command::new(env!("CARGO_BIN_EXE_icetower-dump"))
        .arg(bad.path())
        .output()
        .expect("run binary");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.trim_end().lines().count(), 1, "stderr: {stderr}");
    assert!(stderr.contains("Unsupported floor file version: 3"));
}

#[test]
fn cli_reads_standard_input() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_icetower-dump"))
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn binary");
    {
        let mut stdin = child.stdin.take().expect("child stdin");
        stdin
            .write_all(&floor_file(&[[0x02; FLOOR_BYTES]], &[]))
            .expect("write fixture to stdin");
    }
    let output = child.wait_with_output().expect("wait for binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Comment: test\n"), "stdout: {stdout}");
    assert!(stdout.contains("Difficulty = 1\n"), "stdout: {stdout}");
}

#[test]
fn cli_accepts_negative_threshold() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(&floor_file(&[[0x00; FLOOR_BYTES]], &[]))
        .expect("write fixture");
    let output = Command::new(env!("CARGO_BIN_EXE_icetower-dump"))
        .args(["--threshold", "-1"])
        .arg(file.path())
        .output()
        .expect("run binary");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("---- Floor #  1 ----"));
    assert!(!stdout.contains("Difficulty"), "difficulty 0 >= -1 suppresses the map");
}

#[test]
fn cli_logs_run_summary() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(&floor_file(&[[0x00; FLOOR_BYTES], [0x08; FLOOR_BYTES]], b"xy"))
        .expect("write fixture");
    let output = Command::new(env!("CARGO_BIN_EXE_icetower-dump"))
        .env("RUST_LOG", "info")
        .arg(file.path())
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("2 floors decoded, 1 suppressed, 2 trailing bytes"),
        "stderr: {stderr}"
    );
}

/// Comment bytes and floor count for a header.
fn comment_and_count() -> impl Strategy<Value = (Vec<u8>, i32)> {
    (prop::collection::vec(any::<u8>(), 0..=108), any::<i32>())
}

proptest! {
    #[test]
    fn any_wrong_signature_is_rejected(
        sig in prop::array::uniform12(any::<u8>()),
        rest in prop::collection::vec(any::<u8>(), 116..600),
    ) {
        prop_assume!(&sig != SIG);
        let mut bytes = sig.to_vec();
        bytes.extend_from_slice(&rest);
        let (result, text) = run(&bytes);
        prop_assert!(matches!(result, Err(FloorError::BadSignature(found)) if found == sig));
        prop_assert!(text.is_empty());
    }

    #[test]
    fn any_other_version_is_rejected(
        version in any::<i32>(),
        (comment, count) in comment_and_count(),
        body in prop::collection::vec(any::<u8>(), 0..600),
    ) {
        prop_assume!(version != 1);
        let mut bytes = header(&comment, version, count);
        bytes.extend_from_slice(&body);
        let (result, text) = run(&bytes);
        prop_assert!(matches!(result, Err(FloorError::UnsupportedVersion(v)) if v == version));
        prop_assert!(text.is_empty());
    }

    #[test]
    fn decoding_twice_gives_identical_reports(
        use_magic in any::<bool>(),
        (comment, count) in comment_and_count(),
        count_cap in 0i32..4,
        body in prop::collection::vec(any::<u8>(), 0..1200),
    ) {
        let bytes = if use_magic {
            let mut bytes = header(&comment, 1, count.rem_euclid(count_cap + 1));
            bytes.extend_from_slice(&body);
            bytes
        } else {
            body
        };
        let (first, first_text) = run(&bytes);
        let (second, second_text) = run(&bytes);
        prop_assert_eq!(first_text, second_text);
        prop_assert_eq!(format!("{:?}", first), format!("{:?}", second));
    }
}
