// CLI integration tests for doxystub

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary with an isolated user config directory
fn doxystub(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_doxystub"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .current_dir(config_home)
        .output()
        .expect("Failed to execute command")
}

fn write_source(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_help_flag_shows_subcommands() {
    let dir = TempDir::new().unwrap();
    let output = doxystub(dir.path(), &["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Help should exit with success");
    assert!(stdout.contains("generate"), "Got: {stdout}");
    assert!(stdout.contains("config"), "Got: {stdout}");
}

#[test]
fn test_generate_prints_snippet() {
    let dir = TempDir::new().unwrap();
    let file = write_source(&dir, "compute.cpp", "int compute();\n");

    let output = doxystub(dir.path(), &["generate", &file, "--line", "1", "--column", "4"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "/// \\\\brief ${1:compute}",
            "/// ",
            "/// $0",
            "/// ",
            "/// \\\\return ${2:int}",
        ]
    );
}

#[test]
fn test_generate_json_output() {
    let dir = TempDir::new().unwrap();
    let file = write_source(&dir, "widget.hpp", "\n  class Widget {};\n");

    let output = doxystub(
        dir.path(),
        &["generate", &file, "--line", "2", "--column", "8", "--format", "json"],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["line"], 2);
    assert_eq!(json["lines"][0], "  /// \\\\brief ${1:Widget}");
    assert_eq!(json["lines"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_generate_write_inserts_plain_comment() {
    let dir = TempDir::new().unwrap();
    let file = write_source(&dir, "greet.cpp", "#include <cstdio>\n\nvoid greet(int times);\n");

    let output = doxystub(
        dir.path(),
        &["generate", &file, "--line", "3", "--column", "5", "--write"],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let written = std::fs::read_to_string(&file).unwrap();
    assert_eq!(
        written,
        "#include <cstdio>\n\n/// \\brief greet\n/// \n/// \n/// \n/// \\param times times\nvoid greet(int times);\n"
    );
}

#[test]
fn test_generate_write_keeps_crlf_line_endings() {
    let dir = TempDir::new().unwrap();
    let file = write_source(&dir, "crlf.cpp", "int a;\r\nint compute();\r\n");

    let output = doxystub(
        dir.path(),
        &["generate", &file, "--line", "2", "--column", "4", "--write"],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let written = std::fs::read_to_string(&file).unwrap();
    assert_eq!(
        written,
        "int a;\r\n/// \\brief compute\r\n/// \r\n/// \r\n/// \r\n/// \\return int\r\nint compute();\r\n"
    );
}

#[test]
fn test_generate_failure_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let source = "#include <vector>\nint value = 3;\n";
    let file = write_source(&dir, "value.cpp", source);

    let output = doxystub(
        dir.path(),
        &["generate", &file, "--line", "1", "--column", "0", "--write"],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("No supported declaration found"), "Got: {stderr}");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), source);
}

#[test]
fn test_project_config_changes_style() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("doxystub.toml"),
        "[comment]\ntagBrief = \"@brief \"\n",
    )
    .unwrap();
    let file = write_source(&dir, "area.cpp", "double area();\n");

    let output = doxystub(
        dir.path(),
        &["generate", &file, "--line", "1", "--column", "7", "--format", "plain"],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout.lines().next(), Some("/// @brief area"));
}

#[test]
fn test_unloadable_grammar_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(
        &config,
        "[languages.objc]\nlibrary = \"/nonexistent/objc.so\"\n",
    )
    .unwrap();
    let file = write_source(&dir, "view.m", "@interface View\n@end\n");
    let config = config.to_string_lossy().into_owned();

    let output = doxystub(
        dir.path(),
        &["generate", &file, "--line", "1", "--config", &config],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Parser unavailable for language 'objc'"), "Got: {stderr}");
}

#[test]
fn test_config_init_prints_defaults() {
    let dir = TempDir::new().unwrap();
    let output = doxystub(dir.path(), &["config", "init"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("[comment]"), "Got: {stdout}");
    assert!(stdout.contains("tagParam"), "Got: {stdout}");
}
