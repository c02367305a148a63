//! Tests for loading source files into a session

use std::fs;
use std::path::{Path, PathBuf};

use lispy::{Interpreter, Value};
use tempfile::{tempdir, TempDir};

/// Writes `contents` to `name` inside `dir`
fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Path as a lispy string literal
fn quoted(path: &Path) -> String {
    format!("\"{}\"", path.display())
}

#[test]
fn test_load_defines_into_session() {
    let dir = tempdir().unwrap();
    let path = write_source(
        &dir,
        "defines.lspy",
        r#"
        ; library
        (def {square} (fn {x} {* x x}))
        (def {answer} 42)
        "#,
    );

    let interp = Interpreter::new();
    assert_eq!(interp.load_file(&path.to_string_lossy()), Value::EvalList(vec![]));
    assert_eq!(interp.lookup("answer"), Value::Number(42.0));

    let results = interp.eval_source("(square 12)").unwrap();
    assert_eq!(results[0], Value::Number(144.0));
}

#[test]
fn test_load_builtin_from_source() {
    let dir = tempdir().unwrap();
    let path = write_source(&dir, "builtin.lspy", "(def {loaded} {yes})");

    let interp = Interpreter::new();
    let results = interp
        .eval_source(&format!("(load {}) loaded", quoted(&path)))
        .unwrap();

    assert_eq!(results[0], Value::EvalList(vec![]));
    assert_eq!(results[1].to_string(), "{yes}");
}

#[test]
fn test_load_continues_after_failing_form() {
    let dir = tempdir().unwrap();
    let path = write_source(
        &dir,
        "partial.lspy",
        r#"
        (def {before} 1)
        (/ 1 0)
        (head {})
        (def {after} 2)
        "#,
    );

    let interp = Interpreter::new();
    assert_eq!(interp.load_file(&path.to_string_lossy()), Value::EvalList(vec![]));
    assert_eq!(interp.lookup("before"), Value::Number(1.0));
    assert_eq!(interp.lookup("after"), Value::Number(2.0));
}

#[test]
fn test_load_into_caller_environment() {
    let dir = tempdir().unwrap();
    let path = write_source(&dir, "local.lspy", "(= {inner} 5)");

    let interp = Interpreter::new();
    let source = format!(
        "(def {{loader}} (fn {{}} {{list (load {}) inner}})) (loader) inner",
        quoted(&path)
    );
    let results = interp.eval_source(&source).unwrap();

    assert_eq!(results[1].to_string(), "{() 5}");
    assert_eq!(results[2], Value::Error("Unbound Symbol".to_string()));
}

#[test]
fn test_nested_load() {
    let dir = tempdir().unwrap();
    let inner = write_source(&dir, "inner.lspy", "(def {depth} 2)");
    let outer = write_source(
        &dir,
        "outer.lspy",
        &format!("(load {}) (def {{outer}} depth)", quoted(&inner)),
    );

    let interp = Interpreter::new();
    interp.load_file(&outer.to_string_lossy());
    assert_eq!(interp.lookup("outer"), Value::Number(2.0));
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("not_here.lspy");

    let interp = Interpreter::new();
    let result = interp.load_file(&missing.to_string_lossy());

    match result {
        Value::Error(message) => {
            let prefix = format!("Could not load {}: ", missing.display());
            assert!(message.starts_with(&prefix));
        }
        other => panic!("expected error, got {}", other),
    }
}

#[test]
fn test_load_unparseable_file() {
    let dir = tempdir().unwrap();
    let path = write_source(&dir, "broken.lspy", "(def {x} 1) (+ 1");

    let interp = Interpreter::new();
    let result = interp.load_file(&path.to_string_lossy());

    assert!(result.is_error());
    assert!(result.to_string().contains("Unexpected end of file"));
    assert_eq!(interp.lookup("x"), Value::Error("Unbound Symbol".to_string()));
}

#[cfg(unix)]
#[test]
fn test_load_path_with_backslash() {
    let dir = tempdir().unwrap();
    let path = write_source(&dir, "back\\slash.lspy", "(def {slashed} 1)");

    let interp = Interpreter::new();
    let results = interp
        .eval_source(&format!("(load {}) slashed", quoted(&path)))
        .unwrap();

    assert_eq!(results[1], Value::Number(1.0));
}

#[test]
fn test_load_argument_errors() {
    let interp = Interpreter::new();
    let results = interp.eval_source("(load 5) (load \"a\" \"b\")").unwrap();
    assert!(results[0].is_error());
    assert!(results[1].is_error());
}
