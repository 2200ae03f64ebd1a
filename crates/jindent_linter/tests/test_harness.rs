//! Shared helpers for the indentation tests.
//!
//! Fixtures annotate lines the way checkstyle's own test inputs do:
//! `//indent:6 exp:8 warn` marks a line expected to be reported.

#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use jindent_diagnostics::Diagnostic;
use jindent_linter::rules::Indentation;
use jindent_linter::{FromConfig, Rule, lint_source};

/// Result of comparing expected vs actual violation lines.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub expected: BTreeSet<usize>,
    pub actual: BTreeSet<usize>,
    /// Expected but not reported.
    pub missing: Vec<usize>,
    /// Reported but not expected.
    pub false_positives: Vec<usize>,
}

impl TestResult {
    pub fn compare(expected: BTreeSet<usize>, actual: BTreeSet<usize>) -> Self {
        let missing = expected.difference(&actual).copied().collect();
        let false_positives = actual.difference(&expected).copied().collect();
        Self {
            expected,
            actual,
            missing,
            false_positives,
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.missing.is_empty() && self.false_positives.is_empty()
    }

    pub fn assert_perfect(&self, fixture: &str) {
        assert!(
            self.is_perfect(),
            "{fixture}: missing lines {:?}, false positives {:?}",
            self.missing,
            self.false_positives
        );
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("cannot read fixture {name}: {e}"))
}

/// Lines carrying a `//indent:N exp:M warn` annotation.
pub fn parse_expected_violations(source: &str) -> BTreeSet<usize> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            line.find("//indent:")
                .is_some_and(|start| line[start..].contains(" warn"))
        })
        .map(|(index, _)| index + 1)
        .collect()
}

/// Runs the indentation check with the given properties.
pub fn check_with_config(source: &str, properties: &[(&str, &str)]) -> Vec<Diagnostic> {
    let properties: HashMap<&str, &str> = properties.iter().copied().collect();
    let rules: Vec<Box<dyn Rule>> = vec![Box::new(Indentation::from_config(&properties))];
    lint_source(source, &rules)
        .expect("source should parse")
        .diagnostics
}

pub fn check(source: &str) -> Vec<Diagnostic> {
    check_with_config(source, &[])
}

pub fn violation_lines(diagnostics: &[Diagnostic]) -> BTreeSet<usize> {
    diagnostics.iter().map(Diagnostic::line).collect()
}

/// Checks an annotated fixture and compares the reported lines with the
/// annotations.
pub fn check_fixture(name: &str, properties: &[(&str, &str)]) -> TestResult {
    let source = load_fixture(name);
    let diagnostics = check_with_config(&source, properties);
    for diagnostic in &diagnostics {
        eprintln!("{name}:{}: {}", diagnostic.location, diagnostic.kind.body);
    }
    TestResult::compare(
        parse_expected_violations(&source),
        violation_lines(&diagnostics),
    )
}
