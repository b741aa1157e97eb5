use std::io::Write;

use cli::commands::calc::{calc, Op};
use cli::commands::show::show;
use cli::config::{CliConfig, OutputFormat};
use tempfile::NamedTempFile;

fn write_temp_config(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::with_suffix(".toml").unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn decimal() -> CliConfig {
    CliConfig::default()
}

// ======================================================================
// calc
// ======================================================================

#[test]
fn calc_arithmetic_decimal() {
    let cfg = decimal();
    assert_eq!(calc("999999999999999999", Op::Add, "1", &cfg).unwrap(), "1000000000000000000");
    assert_eq!(calc("5", Op::Sub, "7", &cfg).unwrap(), "-2");
    assert_eq!(calc("123456789", Op::Mul, "987654321", &cfg).unwrap(), "121932631112635269");
    assert_eq!(calc("-17", Op::Div, "5", &cfg).unwrap(), "-3");
    assert_eq!(calc("-17", Op::Rem, "5", &cfg).unwrap(), "-2");
    assert_eq!(calc("17", Op::Divrem, "5", &cfg).unwrap(), "3 2");
}

#[test]
fn calc_cmp() {
    let cfg = decimal();
    assert_eq!(calc("-1", Op::Cmp, "0", &cfg).unwrap(), "-1");
    assert_eq!(calc("+0", Op::Cmp, "-0", &cfg).unwrap(), "0");
    assert_eq!(calc("100000000000000000000", Op::Cmp, "99", &cfg).unwrap(), "1");
}

#[test]
fn calc_division_by_zero_is_error() {
    let err = calc("7", Op::Div, "0", &decimal()).unwrap_err();
    assert!(
        format!("{err:#}").contains("division by zero"),
        "expected division error, got: {err:#}"
    );
}

#[test]
fn calc_bad_operand_is_error() {
    let err = calc("12x", Op::Add, "1", &decimal()).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("Invalid left operand"), "got: {msg}");
    assert!(msg.contains("invalid decimal digit"), "got: {msg}");
}

#[test]
fn calc_hex_and_chunk_formats() {
    let hex = CliConfig::default().with_overrides(None, Some(OutputFormat::Hex));
    assert_eq!(calc("0", Op::Sub, "255", &hex).unwrap(), "-0xff");

    let chunks = CliConfig::default().with_overrides(Some(2), Some(OutputFormat::Chunks));
    assert_eq!(calc("255", Op::Add, "1", &chunks).unwrap(), "[01 00]");
}

#[test]
fn calc_rejects_zero_chunk_width() {
    let cfg = CliConfig::default().with_overrides(Some(0), None);
    let err = calc("1", Op::Add, "1", &cfg).unwrap_err();
    assert!(format!("{err:#}").contains("chunk width"), "got: {err:#}");
}

// ======================================================================
// show
// ======================================================================

#[test]
fn show_describes_value() {
    let cfg = CliConfig::default().with_overrides(Some(2), None);
    let out = show("-255", &cfg).unwrap();
    assert!(out.contains("sign:    negative"), "{out}");
    assert!(out.contains("decimal: -255"), "{out}");
    assert!(out.contains("hex:     ff"), "{out}");
    assert!(out.contains("chunks:  [ff] (width 2, 1 chunks)"), "{out}");
    assert!(out.contains("bits:    8"), "{out}");
}

// ======================================================================
// config
// ======================================================================

#[test]
fn config_defaults_without_file() {
    let cfg = CliConfig::load(None).unwrap();
    assert_eq!(cfg.chunk_width, 8);
    assert_eq!(cfg.format, OutputFormat::Decimal);
}

#[test]
fn config_from_file_and_overrides() {
    let f = write_temp_config("chunk_width = 4\nformat = \"chunks\"\n");
    let cfg = CliConfig::load(f.path().to_str()).unwrap();
    assert_eq!(cfg.chunk_width, 4);
    assert_eq!(cfg.format, OutputFormat::Chunks);
    assert_eq!(calc("65536", Op::Mul, "1", &cfg).unwrap(), "[0001 0000]");

    let cfg = cfg.with_overrides(None, Some(OutputFormat::Decimal));
    assert_eq!(cfg.chunk_width, 4);
    assert_eq!(calc("65536", Op::Mul, "1", &cfg).unwrap(), "65536");
}

#[test]
fn config_partial_file_keeps_defaults() {
    let f = write_temp_config("format = \"hex\"\n");
    let cfg = CliConfig::load(f.path().to_str()).unwrap();
    assert_eq!(cfg.chunk_width, 8);
    assert_eq!(cfg.format, OutputFormat::Hex);
}

#[test]
fn config_invalid_file_is_error() {
    let f = write_temp_config("chunk_width = \"wide\"\n");
    let err = CliConfig::load(f.path().to_str()).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid config"), "got: {err:#}");

    let f = write_temp_config("colour = \"red\"\n");
    assert!(CliConfig::load(f.path().to_str()).is_err());
}

#[test]
fn config_missing_file_is_error() {
    let err = CliConfig::load(Some("/nonexistent/fatnum.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read config"), "got: {err:#}");
}
