use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_chel-matches");

#[test]
fn test_missing_argument_prints_usage() {
    let output = Command::new(BIN).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("{\"error\": \"Usage: chel-matches"), "{}", stderr);
    assert!(stderr.ends_with(" <club_id>\"}\n"), "{}", stderr);
}

#[test]
fn test_extra_argument_prints_usage() {
    let output = Command::new(BIN).args(&["1", "2"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("Usage: "));
}

#[test]
fn test_empty_club_id() {
    let output = Command::new(BIN).arg("").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(output.stderr, b"{\"error\": \"Invalid club_id\"}\n");
}

#[cfg(unix)]
#[test]
fn test_club_id_not_utf8() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = Command::new(BIN).arg(OsStr::from_bytes(b"23\xff08")).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(output.stderr, b"{\"error\": \"Invalid club_id\"}\n");
}
