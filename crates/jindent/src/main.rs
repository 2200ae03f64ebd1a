//! jindent - checks the indentation of Java sources against checkstyle rules.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use jindent_checkstyle::{ConfigLoader, ConfiguredRule, MergedConfig};
use jindent_diagnostics::Diagnostic;
use jindent_java_ast::Ast;
use jindent_linter::{CheckContext, Rule, RuleRegistry};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "jindent")]
#[command(about = "Checks Java indentation the way checkstyle does", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check files for violations
    Check {
        /// Paths to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Path to checkstyle.xml config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// A violation found by one rule.
struct Reported {
    rule: &'static str,
    diagnostic: Diagnostic,
}

/// Result of checking one file.
struct FileReport {
    path: PathBuf,
    violations: Vec<Reported>,
    parsed: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { paths, config } => run_check(&paths, config.as_deref()),
    }
}

/// Run the check command.
fn run_check(paths: &[PathBuf], config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let rules = load_rules(&config);

    if rules.is_empty() {
        eprintln!("{}", "Warning: No rules configured".yellow());
        return Ok(());
    }
    let rule_names: Vec<_> = rules.iter().map(|r| r.name()).collect();
    eprintln!(
        "Checking with {} rule(s): {}",
        rule_names.len(),
        rule_names.join(", ")
    );

    let files = collect_java_files(paths);
    log::debug!("checking {} file(s)", files.len());

    let reports = files
        .par_iter()
        .map(|path| check_file(path, &rules))
        .collect::<Result<Vec<_>>>()?;

    let mut total_violations = 0;
    for report in &reports {
        if !report.parsed {
            eprintln!("{}: Failed to parse", report.path.display());
            continue;
        }
        for reported in &report.violations {
            let location = reported.diagnostic.location;
            println!(
                "{}:{}:{}: {} {}",
                report.path.display(),
                location.line,
                location.column,
                format!("[{}]", reported.rule).blue(),
                reported.diagnostic.kind.body
            );
        }
        total_violations += report.violations.len();
    }

    if total_violations > 0 {
        println!(
            "\nFound {} violations in {} file(s)",
            total_violations.to_string().red(),
            reports.iter().filter(|r| !r.violations.is_empty()).count()
        );
        std::process::exit(1);
    } else {
        println!("{}", "No violations found".green());
    }

    Ok(())
}

/// Loads checkstyle.xml and jindent.toml, from `config_path` or the usual
/// places in the working directory.
fn load_config(config_path: Option<&Path>) -> Result<MergedConfig> {
    let mut loader = ConfigLoader::new().find_jindent(".").find_checkstyle(".");
    if let Some(path) = config_path {
        loader = loader.checkstyle(path);
    }
    loader.load().context("Failed to load configuration")
}

fn load_rules(config: &MergedConfig) -> Vec<Box<dyn Rule>> {
    let registry = RuleRegistry::builtin();
    config
        .rules
        .iter()
        .filter_map(|configured_rule| create_rule_from_config(&registry, configured_rule))
        .collect()
}

/// Create a rule from configuration using the registry. Checks other than
/// indentation are skipped quietly.
fn create_rule_from_config(
    registry: &RuleRegistry,
    configured_rule: &ConfiguredRule,
) -> Option<Box<dyn Rule>> {
    let rule = registry.create_configured(configured_rule);
    if rule.is_none() {
        log::info!("skipping unsupported module '{}'", configured_rule.name);
    }
    rule
}

fn collect_java_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() && path.extension().is_some_and(|e| e == "java") {
            files.push(path.clone());
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(Result::ok)
                .filter(|e| e.path().extension().is_some_and(|ext| ext == "java"))
            {
                files.push(entry.path().to_path_buf());
            }
        } else {
            eprintln!(
                "{}: {} is not a Java file or directory, skipping",
                "Warning".yellow(),
                path.display()
            );
        }
    }
    files
}

fn check_file(path: &Path, rules: &[Box<dyn Rule>]) -> Result<FileReport> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let Some(ast) = Ast::parse(&source) else {
        return Ok(FileReport {
            path: path.to_path_buf(),
            violations: Vec::new(),
            parsed: false,
        });
    };

    let ctx = CheckContext::new(&source);
    let mut violations = Vec::new();
    for node in ast.preorder() {
        for rule in rules {
            violations.extend(rule.check(&ctx, &node).into_iter().map(|diagnostic| Reported {
                rule: rule.name(),
                diagnostic,
            }));
        }
    }
    violations.sort_by_key(|reported| reported.diagnostic.location);

    Ok(FileReport {
        path: path.to_path_buf(),
        violations,
        parsed: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_java_files_walks_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/pkg")).unwrap();
        fs::write(dir.path().join("src/pkg/B.java"), "class B {}\n").unwrap();
        fs::write(dir.path().join("src/A.java"), "class A {}\n").unwrap();
        fs::write(dir.path().join("src/notes.txt"), "not java\n").unwrap();

        let files = collect_java_files(&[dir.path().to_path_buf()]);
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["A.java", "B.java"]);
    }

    #[test]
    fn test_check_file_reports_rule_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Foo.java");
        fs::write(&path, "class Foo {\n  int x;\n}\n").unwrap();

        let rules = load_rules(&MergedConfig::indentation_only(None));
        let report = check_file(&path, &rules).unwrap();
        assert!(report.parsed);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, "Indentation");
        assert_eq!(report.violations[0].diagnostic.line(), 2);
    }

    #[test]
    fn test_check_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let rules = load_rules(&MergedConfig::indentation_only(None));
        assert!(check_file(&dir.path().join("Missing.java"), &rules).is_err());
    }
}
