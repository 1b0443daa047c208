//! The rule fixture tests.
//!
//! This test looks for directories in `tests/rules`.
//!
//! Each directory is named after a registered rule (for example
//! `img-element` or `list-element-error`) and is expected to contain:
//!
//! * `source.json` - the serialized tree to lint.
//! * `source.errors` - the expected diagnostics of that rule, one per line.
//!
//! Only the family registering the rule runs, and only the diagnostics of the
//! named variant are compared.
//!
//! The `source.errors` file may be automatically generated or updated by
//! setting the `BLESS` environment variable when running this test.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use a11yinspect_ast::Diagnostic;
use a11yinspect_ast::Document;
use a11yinspect_lint::Config;
use a11yinspect_lint::Linter;
use a11yinspect_lint::rules;
use colored::Colorize;
use pretty_assertions::StrComparison;

/// Finds tests for this package.
fn find_tests() -> Vec<PathBuf> {
    // Check for filter arguments consisting of test names
    let mut filter = HashSet::new();
    for arg in std::env::args().skip_while(|a| a != "--").skip(1) {
        if !arg.starts_with('-') {
            filter.insert(arg);
        }
    }

    let mut tests: Vec<PathBuf> = Vec::new();
    for entry in Path::new("tests/rules").read_dir().unwrap() {
        let entry = entry.expect("failed to read directory");
        let path = entry.path();
        if !path.is_dir()
            || (!filter.is_empty()
                && !filter.contains(entry.file_name().to_str().expect("name should be UTF-8")))
        {
            continue;
        }

        tests.push(path);
    }

    tests.sort();
    tests
}

/// Formats the diagnostics of a rule.
fn format_diagnostics(diagnostics: &[Diagnostic], document: &Document, rule: &str) -> String {
    let mut result = String::new();
    for diagnostic in diagnostics.iter().filter(|d| d.rule() == Some(rule)) {
        result.push_str(&format!(
            "{location}: {severity}[{rule}] {key}: {message}\n",
            location = document.describe(diagnostic.location()),
            severity = diagnostic.severity(),
            key = diagnostic.key().unwrap_or_default(),
            message = diagnostic.message(),
        ));
    }

    result
}

/// Compares a test result.
fn compare_result(path: &Path, result: &str) -> Result<(), String> {
    if env::var_os("BLESS").is_some() {
        fs::write(path, result).map_err(|e| {
            format!(
                "failed to write result file `{path}`: {e}",
                path = path.display()
            )
        })?;
        return Ok(());
    }

    let expected = fs::read_to_string(path)
        .map_err(|e| {
            format!(
                "failed to read result file `{path}`: {e}",
                path = path.display()
            )
        })?
        .replace("\r\n", "\n");

    if expected != result {
        return Err(format!(
            "result from `{path}` is not as expected:\n{diff}",
            path = path.display(),
            diff = StrComparison::new(&expected, result),
        ));
    }

    Ok(())
}

/// Creates a linter running only the family that registers the given rule.
fn linter_for(rule: &str) -> Result<Linter, String> {
    let family: Vec<_> = rules(&Config::default())
        .into_iter()
        .filter(|r| r.variants().iter().any(|v| v.name(r.id()) == rule))
        .collect();

    if family.is_empty() {
        return Err(format!("no rule is registered as `{rule}`"));
    }

    Ok(Linter::new(family))
}

/// Runs a single test.
fn run_test(test: &Path, rule: &str) -> Result<(), String> {
    let linter = linter_for(rule)?;
    let document = Document::load(test.join("source.json")).map_err(|e| e.to_string())?;
    let diagnostics = linter.lint(&document);
    compare_result(
        &test.join("source.errors"),
        &format_diagnostics(&diagnostics, &document, rule),
    )
}

fn main() {
    let tests = find_tests();
    println!("\nrunning {} tests\n", tests.len());

    let mut errors = Vec::new();
    for test in &tests {
        let test_name = test
            .file_name()
            .and_then(|n| n.to_str())
            .expect("test name should be UTF-8");

        match run_test(test, test_name) {
            Ok(()) => {
                println!("test {test_name} ... {ok}", ok = "ok".green());
            }
            Err(e) => {
                println!("test {test_name} ... {failed}", failed = "failed".red());
                errors.push((test_name, e));
            }
        }
    }

    if !errors.is_empty() {
        eprintln!(
            "\n{count} test(s) {failed}:",
            count = errors.len(),
            failed = "failed".red()
        );

        for (name, msg) in errors.iter() {
            eprintln!("{name}: {msg}", msg = msg.red());
        }

        std::process::exit(1);
    }

    println!("\ntest result: ok. {count} passed\n", count = tests.len());
}
