use clap::Args;
use colored::Colorize;
use regex::Regex;
use std::path::PathBuf;

use crate::builder::resolve_authors;
use crate::cmds::generate::{resolve_input, ManifestOverrides};
use crate::errors::HytaleError;
use crate::types::dependency::duplicate_names;
use crate::types::manifest_input::ManifestInput;

const CLASS_NAME_PATTERN: &str = r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$";

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Path to the project (default: current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Configuration file (default: <PATH>/plugin.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: ManifestOverrides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One finding about the resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    /// config key the issue is about (e.g. "main", "dependencies[2]")
    pub field: String,
    pub message: String,
}

impl Issue {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Issue { severity: Severity::Error, field: field.into(), message: message.into() }
    }
    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Issue { severity: Severity::Warning, field: field.into(), message: message.into() }
    }
}

/// Inspect resolved input without building or writing anything.
pub fn check_input(input: &ManifestInput) -> Result<Vec<Issue>, HytaleError> {
    let mut issues = Vec::new();

    match input.main.as_deref() {
        None => issues.push(Issue::error("main", "missing required field")),
        Some("") => issues.push(Issue::warning("main", "is empty and will be omitted")),
        Some(main) => {
            let re = Regex::new(CLASS_NAME_PATTERN)?;
            if !re.is_match(main) {
                issues.push(Issue::warning("main", format!("'{}' is not a fully qualified class name", main)));
            }
        }
    }

    let strings = [
        ("group", &input.group),
        ("name", &input.name),
        ("version", &input.version),
    ];
    for (field, value) in strings {
        if value.as_deref().is_none_or(str::is_empty) {
            issues.push(Issue::warning(field, "is not set and will be omitted"));
        }
    }

    if input.server_version.as_deref() == Some("") {
        issues.push(Issue::warning("server_version", "is empty and will be omitted"));
    }

    if resolve_authors(&input.authors, &input.developers, &input.contributors).is_empty() {
        issues.push(Issue::warning("authors", "none configured and no developers or contributors found"));
    }

    for (list, specs) in input.dependency_lists() {
        for (index, spec) in specs.iter().enumerate() {
            if spec.name.is_empty() {
                issues.push(Issue::error(format!("{}[{}]", list, index), "dependency name is empty"));
            }
        }
        for name in duplicate_names(specs) {
            issues.push(Issue::warning(list, format!("'{}' is listed more than once, the last version wins", name)));
        }
    }

    Ok(issues)
}

/// Run the check command
pub fn run(args: CheckArgs) -> Result<(), HytaleError> {
    println!("{} Checking plugin configuration...", "→".cyan());

    let (_, input) = resolve_input(&args.path, args.config.as_deref(), &args.overrides)?;
    let issues = check_input(&input)?;

    if issues.is_empty() {
        println!("{} No issues found.", "✓".green());
        return Ok(());
    }

    for issue in &issues {
        let tag = match issue.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow(),
        };
        println!("  {} {}: {}", tag, issue.field.bold(), issue.message);
    }

    let errors = issues.iter().filter(|i| i.severity == Severity::Error).count();
    let warnings = issues.len() - errors;
    println!("{} {} errors, {} warnings.", "Summary:".yellow(), errors, warnings);

    if errors > 0 {
        return Err(HytaleError::InvalidConfig(format!("{} error(s) in plugin configuration", errors)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::author::AuthorInfo;
    use crate::types::dependency::DependencySpec;

    fn valid() -> ManifestInput {
        ManifestInput {
            group: Some("io.example".to_string()),
            name: Some("Plugin".to_string()),
            version: Some("1.0".to_string()),
            main: Some("com.example.Main".to_string()),
            authors: vec![AuthorInfo::named("Jane")],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_input_has_no_issues() {
        assert!(check_input(&valid()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_main_is_error() {
        let input = ManifestInput { main: None, ..valid() };
        let issues = check_input(&input).unwrap();
        assert_eq!(issues, vec![Issue::error("main", "missing required field")]);
    }

    #[test]
    fn test_main_class_name() {
        for ok in ["Main", "com.example.Main", "a.b$Inner", "_x.y1"] {
            let input = ManifestInput { main: Some(ok.to_string()), ..valid() };
            assert!(check_input(&input).unwrap().is_empty(), "{} should pass", ok);
        }
        for bad in ["com..Main", "1com.Main", "com.example.", "com example"] {
            let input = ManifestInput { main: Some(bad.to_string()), ..valid() };
            let issues = check_input(&input).unwrap();
            assert_eq!(issues.len(), 1, "{} should warn", bad);
            assert_eq!(issues[0].severity, Severity::Warning);
        }
    }

    #[test]
    fn test_empty_server_version_warns() {
        let input = ManifestInput { server_version: Some(String::new()), ..valid() };
        let issues = check_input(&input).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "server_version");
    }

    #[test]
    fn test_no_authors_warns() {
        let input = ManifestInput { authors: Vec::new(), ..valid() };
        let issues = check_input(&input).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "authors");
    }

    #[test]
    fn test_unset_metadata_warns() {
        let input = ManifestInput { group: None, version: Some(String::new()), ..valid() };
        let fields: Vec<String> = check_input(&input).unwrap().into_iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["group", "version"]);
    }

    #[test]
    fn test_dependency_issues() {
        let input = ManifestInput {
            dependencies: vec![
                DependencySpec::new("core", "1.0"),
                DependencySpec::new("", "1.0"),
                DependencySpec::new("core", "2.0"),
            ],
            ..valid()
        };
        let issues = check_input(&input).unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0], Issue::error("dependencies[1]", "dependency name is empty"));
        assert_eq!(issues[1].severity, Severity::Warning);
        assert!(issues[1].message.contains("'core'"));
    }
}
