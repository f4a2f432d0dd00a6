mod common;

use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shiftbreak"))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = binary()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn shiftbreak");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    child.wait_with_output().expect("Failed to wait for shiftbreak")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

struct TestContext {
    _dir: TempDir,
    cipher_path: PathBuf,
    reference_path: PathBuf,
    config_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let cipher_path = dir.path().join("cipher.txt");
        let reference_path = dir.path().join("reference.csv");
        let config_path = dir.path().join("config.json");

        let mut cipher = File::create(&cipher_path).unwrap();
        write!(cipher, "{}", common::encrypted_corpus(3)).unwrap();

        let mut reference = File::create(&reference_path).unwrap();
        writeln!(reference, "letter,percentage").unwrap();
        for (i, p) in shiftbreak::reference::ENGLISH_LETTER_FREQUENCIES
            .iter()
            .enumerate()
        {
            writeln!(reference, "{},{}", (b'A' + i as u8) as char, p).unwrap();
        }

        let mut config = File::create(&config_path).unwrap();
        write!(config, r#"{{ "candidates": 4, "format": "json" }}"#).unwrap();

        Self {
            _dir: dir,
            cipher_path,
            reference_path,
            config_path,
        }
    }
}

#[test]
fn test_decode_file() {
    let ctx = TestContext::new();
    let output = binary()
        .args(["decode", ctx.cipher_path.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Estimated Shift-Key: -3"), "{}", stdout);
    assert!(stdout.contains("IT WAS THE BEST OF TIMES"), "{}", stdout);

    assert!(stdout.contains("following keys: -7, 11"), "{}", stdout);

    // Rank, key, mod 26 and vote count of the winning row.
    let top_row = Regex::new(r"\|\s*1\s*\|\s*-3\s*\|\s*23\s*\|\s*242\s*\|").unwrap();
    assert!(top_row.is_match(&stdout), "{}", stdout);
}

#[test]
fn test_decode_inline_text_json() {
    let output = binary()
        .args(["decode", "--text", "KHOOR ZRUOG", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["best_key"], -10);
    assert_eq!(json["ciphertext"], "KHOOR ZRUOG");
}

#[test]
fn test_decode_from_stdin_with_frequencies() {
    let output = run_with_stdin(&["decode", "--frequencies"], &common::encrypted_corpus(3));

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Letter frequencies"), "{}", stdout);
    assert!(stdout.contains("12.702"), "{}", stdout);
}

#[test]
fn test_decode_with_reference_and_config() {
    let ctx = TestContext::new();
    let output = binary()
        .args([
            "decode",
            ctx.cipher_path.to_str().unwrap(),
            "--reference",
            ctx.reference_path.to_str().unwrap(),
            "--config",
            ctx.config_path.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["best_key"], -3);
    assert_eq!(json["candidates"]["ranked"].as_array().unwrap().len(), 4);
}

#[test]
fn test_decode_without_letters_fails() {
    let output = binary()
        .args(["decode", "--text", "1234!!!"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no letters"), "{}", stderr);
}

#[test]
fn test_invalid_candidate_count_fails() {
    let output = binary()
        .args(["decode", "--text", "KHOOR ZRUOG", "--candidates", "2"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_command_line_overrides_invalid_config_value() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(&config_path, r#"{ "candidates": 2 }"#).unwrap();

    let output = binary()
        .args([
            "decode",
            "--text",
            "KHOOR ZRUOG",
            "--config",
            config_path.to_str().unwrap(),
            "--candidates",
            "3",
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert!(stdout_of(&output).contains("Estimated Shift-Key: -10"));

    let output = binary()
        .args([
            "decode",
            "--text",
            "KHOOR ZRUOG",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_session_json_errors_stay_json() {
    let output = run_with_stdin(&["session", "--format", "json"], "new \"1234\"\nq\n");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let start = stdout.find('{').expect("no JSON object in output");
    let end = stdout.rfind('}').unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout[start..=end]).unwrap();
    assert!(json["error"].as_str().unwrap().contains("no letters"), "{}", stdout);
}

#[test]
fn test_shift_command() {
    let output = binary()
        .args(["shift", "--key", "-3", "--text", "Khoor, Zruog!"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Hello, World!\n");
}

#[test]
fn test_session_script() {
    let script = "new \"KHOOR ZRUOG\"\nshift -3\nshift abc\nbogus\nquit\n";
    let output = run_with_stdin(&["session"], script);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Estimated Shift-Key: -10"), "{}", stdout);
    assert!(stdout.contains("HELLO WORLD"), "{}", stdout);
    assert!(stdout.contains("Invalid shift amount 'abc'"), "{}", stdout);
    assert!(stdout.contains("Commands:"), "{}", stdout);
}

#[test]
fn test_session_loads_file_and_exits_on_eof() {
    let ctx = TestContext::new();
    let output = run_with_stdin(&["session", ctx.cipher_path.to_str().unwrap()], "shift 3\n");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Estimated Shift-Key: -3"), "{}", stdout);
    // `shift 3` re-encrypts the stored ciphertext once more.
    let double = common::encrypted_corpus(6);
    assert!(stdout.contains(&double[..40]), "{}", stdout);
}

#[test]
fn test_session_unreadable_file_still_prompts() {
    let output = run_with_stdin(&["session", "/definitely/not/here.txt"], "q\n");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Error reading file."), "{}", stdout);
    assert!(stdout.contains("> "), "{}", stdout);
}

#[test]
fn test_no_subcommand_starts_session() {
    let output = run_with_stdin(&[], "help\nq\n");

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("shift <N>"));
}
