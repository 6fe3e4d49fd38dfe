use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use genid_lib::token::{ALPHABET, TOKEN_LEN, TokenGenerator};

const WARNING: &str = "Warning: needs wl-copy to copy to clipboard";

fn is_token(s: &str) -> bool {
    s.len() == TOKEN_LEN && s.chars().all(|c| ALPHABET.contains(c))
}

/// Run the binary with `PATH` limited to `path_dir`.
fn run_genid(path_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_genid"))
        .args(args)
        .env("PATH", path_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("run genid")
}

/// A directory whose `wl-copy` is a symlink to `target` (e.g. `true`).
#[cfg(unix)]
fn fake_wl_copy(target: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let bin = ["/bin", "/usr/bin"]
        .iter()
        .map(|d| PathBuf::from(d).join(target))
        .find(|p| p.exists())
        .expect("coreutils binary");
    std::os::unix::fs::symlink(bin, dir.path().join("wl-copy")).expect("symlink");
    dir
}

#[test]
fn integration_generate_many_tokens() {
    let mut generator = TokenGenerator::new();
    let tokens: Vec<_> = (0..10_000).map(|_| generator.generate()).collect();
    assert!(tokens.iter().all(|t| is_token(t.as_str())));
    assert!(tokens.iter().any(|t| t != &tokens[0]));
}

#[test]
fn integration_missing_helper_warns_and_exits_zero() {
    let empty = tempfile::tempdir().expect("tempdir");
    let out = run_genid(empty.path(), &[]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(is_token(lines[0]), "bad token: {}", lines[0]);
    assert_eq!(lines[1], WARNING);
}

#[cfg(unix)]
#[test]
fn integration_failing_helper_warns_and_exits_zero() {
    let dir = fake_wl_copy("false");
    let out = run_genid(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().last(), Some(WARNING));
}

#[cfg(unix)]
#[test]
fn integration_succeeding_helper_prints_token_only() {
    let dir = fake_wl_copy("true");
    let out = run_genid(dir.path(), &[]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(!stdout.contains(WARNING));
    assert_eq!(stdout.lines().count(), 1);
    assert!(is_token(stdout.trim_end()));
}

#[test]
fn integration_no_copy_and_count() {
    let empty = tempfile::tempdir().expect("tempdir");
    let out = run_genid(empty.path(), &["--no-copy", "--count", "4"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| is_token(l)));
}
