//! Tests for configuration precedence: defaults < file < environment.
//!
//! These tests mutate process environment variables, so they run serially.

use serial_test::serial;
use std::io::Write as _;

fn clear_env() {
    std::env::remove_var("FLOPCORE_CONFIG");
    std::env::remove_var("FLOPCORE_SEED");
    std::env::remove_var("FLOPCORE_POLICY");
    std::env::remove_var("FLOPCORE_LOG");
}

fn run_cfg() -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = flopcore_cli::run(vec!["flopcore", "cfg"], &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn test_cfg_defaults() {
    clear_env();
    let (code, out, _err) = run_cfg();
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(v["seed"]["value"], serde_json::Value::Null);
    assert_eq!(v["seed"]["source"], "default");
    assert_eq!(v["policy"]["value"], "upgrade");
}

#[test]
#[serial]
fn test_cfg_env_overrides_default() {
    clear_env();
    std::env::set_var("FLOPCORE_SEED", "42");
    let (code, out, _err) = run_cfg();
    clear_env();

    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["seed"]["value"], 42);
    assert_eq!(v["seed"]["source"], "env");
}

#[test]
#[serial]
fn test_cfg_file_values_marked_as_file() {
    clear_env();
    let mut path = std::path::PathBuf::from("target");
    path.push(format!("cfg_test_{}.toml", std::process::id()));
    {
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "seed = 7").unwrap();
        writeln!(f, "policy = \"any\"").unwrap();
    }
    std::env::set_var("FLOPCORE_CONFIG", &path);
    let (code, out, _err) = run_cfg();
    clear_env();
    let _ = std::fs::remove_file(&path);

    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["seed"]["value"], 7);
    assert_eq!(v["seed"]["source"], "file");
    assert_eq!(v["policy"]["value"], "any");
    assert_eq!(v["policy"]["source"], "file");
}

#[test]
#[serial]
fn test_cfg_env_overrides_file() {
    clear_env();
    let mut path = std::path::PathBuf::from("target");
    path.push(format!("cfg_test_env_{}.toml", std::process::id()));
    {
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "policy = \"any\"").unwrap();
    }
    std::env::set_var("FLOPCORE_CONFIG", &path);
    std::env::set_var("FLOPCORE_POLICY", "upgrade");
    let (code, out, _err) = run_cfg();
    clear_env();
    let _ = std::fs::remove_file(&path);

    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["policy"]["value"], "upgrade");
    assert_eq!(v["policy"]["source"], "env");
}

#[test]
#[serial]
fn test_cfg_invalid_policy_fails() {
    clear_env();
    std::env::set_var("FLOPCORE_POLICY", "loose");
    let (code, _out, err) = run_cfg();
    clear_env();

    assert_eq!(code, 2);
    assert!(err.contains("Invalid configuration"));
}

#[test]
#[serial]
fn test_cfg_invalid_seed_fails() {
    clear_env();
    std::env::set_var("FLOPCORE_SEED", "not-a-number");
    let (code, _out, err) = run_cfg();
    clear_env();

    assert_eq!(code, 2);
    assert!(!err.is_empty());
}

#[test]
#[serial]
fn test_deal_uses_configured_seed() {
    clear_env();
    std::env::set_var("FLOPCORE_SEED", "1234");
    let mut out1 = Vec::new();
    let mut err1 = Vec::new();
    let code = flopcore_cli::run(vec!["flopcore", "deal"], &mut out1, &mut err1);
    clear_env();

    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err1));
    let output = String::from_utf8(out1).unwrap();
    assert!(output.contains("Seed: 1234"), "got: {}", output);
}
