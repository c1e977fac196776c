//! Forbidden color utilities and the matching logic
//!
//! Components must style with semantic tokens (`bg-primary`,
//! `text-muted-foreground`, `border-info`). Arbitrary values, raw Aurora
//! variables and the stock Tailwind color scale are reported.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

use super::types::{Advisory, Violation};
use crate::config::CustomPattern;
use crate::error::ToolError;

/// Utility prefixes that take a color
const PREFIXES: &str = "(?:bg|text|border|ring|outline|shadow|from|to|via)";

lazy_static! {
    static ref FORBIDDEN_PATTERNS: Vec<ForbiddenPattern> = vec![
        ForbiddenPattern::builtin(
            r"-\[#[0-9A-Fa-f]{6}\]",
            "Arbitrary hex color (e.g., bg-[#FFFFFF])",
        ),
        ForbiddenPattern::builtin(
            r"-\[rgba?\([^\]]+\)\]",
            "Arbitrary RGB color (e.g., bg-[rgb(255,255,255)])",
        ),
        ForbiddenPattern::builtin(
            r"-\[hsla?\([^\]]+\)\]",
            "Arbitrary HSL color (e.g., bg-[hsl(0,0%,100%)])",
        ),
        ForbiddenPattern::builtin(
            r"-\[oklch\([^\]]+\)\]",
            "Arbitrary OKLCH color (e.g., bg-[oklch(1 0 0)])",
        ),
        ForbiddenPattern::builtin(
            r"-\[--aurora-[^\]]+\]",
            "Direct Aurora variable (use semantic tokens like bg-primary instead)",
        ),
        ForbiddenPattern::builtin(
            r"-(?:slate|gray|zinc|neutral|stone|red|orange|amber|yellow|lime|green|emerald|teal|cyan|sky|blue|indigo|violet|purple|fuchsia|pink|rose)-(?:50|100|200|300|400|500|600|700|800|900|950)\b",
            "Standard Tailwind color (e.g., bg-green-500, text-blue-100) - use semantic tokens instead",
        ),
    ];
}

/// Substring checks for the advisory pass: (usage, unless line contains, suggestion)
const ADVISORIES: &[(&str, Option<&str>, &str)] = &[
    ("bg-white", Some("bg-white-"), "Consider using bg-background instead"),
    ("text-black", None, "Consider using text-foreground instead"),
];

/// A disallowed color usage
#[derive(Debug, Clone)]
pub struct ForbiddenPattern {
    pub regex: Regex,
    pub description: String,
}

impl ForbiddenPattern {
    pub fn new(pattern: &str, description: impl Into<String>) -> Result<Self, ToolError> {
        let regex = Regex::new(pattern).map_err(|e| ToolError::pattern_error(format!("{}: {}", pattern, e)))?;
        Ok(Self {
            regex,
            description: description.into(),
        })
    }

    fn builtin(suffix: &str, description: &str) -> Self {
        Self {
            regex: Regex::new(&format!("{PREFIXES}{suffix}")).expect("Invalid regex pattern"),
            description: description.to_string(),
        }
    }
}

/// The built-in forbidden pattern table, in report order
pub fn forbidden_patterns() -> &'static [ForbiddenPattern] {
    &FORBIDDEN_PATTERNS
}

/// Built-in table followed by the configured extras
pub fn pattern_table(extra: &[CustomPattern]) -> Result<Vec<ForbiddenPattern>, ToolError> {
    let mut table = forbidden_patterns().to_vec();
    for custom in extra {
        table.push(ForbiddenPattern::new(&custom.pattern, custom.description.as_str())?);
    }
    Ok(table)
}

/// Report every match of every pattern in `content`, pattern by pattern
pub fn find_violations(content: &str, file: &Path, patterns: &[ForbiddenPattern]) -> Vec<Violation> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut violations = Vec::new();

    for pattern in patterns {
        for m in pattern.regex.find_iter(content) {
            let (line, column) = locate(content, &lines, m.start());
            violations.push(Violation {
                file: file.to_path_buf(),
                line,
                column,
                matched: m.as_str().to_string(),
                description: pattern.description.clone(),
                context: lines[line - 1].trim().to_string(),
            });
        }
    }

    violations
}

/// 1-based line and column of a byte offset. Each line counts its newline.
fn locate(content: &str, lines: &[&str], offset: usize) -> (usize, usize) {
    let mut line_start = 0;
    for (idx, line) in lines.iter().enumerate() {
        let next = line_start + line.len() + 1;
        if next > offset {
            let column = content[line_start..offset].chars().count() + 1;
            return (idx + 1, column);
        }
        line_start = next;
    }
    // split('\n') always covers the whole text
    (lines.len(), 1)
}

/// Flag `bg-white` / `text-black`. Informational only.
pub fn advise(content: &str, file: &Path) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    for (idx, line) in content.split('\n').enumerate() {
        for &(usage, unless, suggestion) in ADVISORIES {
            if line.contains(usage) && !unless.is_some_and(|u| line.contains(u)) {
                advisories.push(Advisory {
                    file: file.to_path_buf(),
                    line: idx + 1,
                    usage,
                    suggestion,
                });
            }
        }
    }

    advisories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &str) -> Vec<Violation> {
        find_violations(content, Path::new("Button.tsx"), forbidden_patterns())
    }

    #[test]
    fn test_arbitrary_hex() {
        let violations = check(r#"<div className="bg-[#FFFFFF]" />"#);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].matched, "bg-[#FFFFFF]");
        assert!(violations[0].description.starts_with("Arbitrary hex color"));
        assert_eq!((violations[0].line, violations[0].column), (1, 17));
    }

    #[test]
    fn test_each_category() {
        let content = [
            "text-[rgb(255,0,0)]",
            "border-[rgba(0,0,0,0.5)]",
            "ring-[hsl(0,0%,100%)]",
            "shadow-[oklch(1 0 0)]",
            "bg-[--aurora-blue-3]",
            "from-green-500 to-blue-100",
        ]
        .join(" ");
        let descriptions: Vec<String> = check(&content).into_iter().map(|v| v.description).collect();

        assert_eq!(descriptions.len(), 7);
        assert!(descriptions[0].starts_with("Arbitrary RGB"));
        assert!(descriptions[1].starts_with("Arbitrary RGB"));
        assert!(descriptions[2].starts_with("Arbitrary HSL"));
        assert!(descriptions[3].starts_with("Arbitrary OKLCH"));
        assert!(descriptions[4].starts_with("Direct Aurora variable"));
        assert!(descriptions[5].starts_with("Standard Tailwind color"));
        assert!(descriptions[6].starts_with("Standard Tailwind color"));
    }

    #[test]
    fn test_semantic_tokens_are_clean() {
        assert!(check(r#"<p className="bg-primary text-muted-foreground border-info">"#).is_empty());
        assert!(check("bg-red-5000 text-blue-1000").is_empty());
    }

    #[test]
    fn test_all_matches_are_reported() {
        let violations = check("bg-red-500 bg-red-500\ntext-red-500");
        assert_eq!(violations.len(), 3);
        assert_eq!((violations[1].line, violations[1].column), (1, 12));
        assert_eq!((violations[2].line, violations[2].column), (2, 1));
    }

    #[test]
    fn test_line_and_column() {
        let content = "import React from 'react'\n\nconst a = 'text-[#123456]'\nexport {}\n// end";
        let violations = check(content);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 3);
        assert_eq!(violations[0].column, 12);

        let content = "one\ntwo\n  <a  bg-[#AABBCC]>\nfour\nfive";
        let violations = check(content);
        assert_eq!((violations[0].line, violations[0].column), (3, 7));

        let content = "1\n2\n123456789bg-amber-950 x\n4\n5";
        let violations = check(content);
        assert_eq!((violations[0].line, violations[0].column), (3, 10));
        assert_eq!(violations[0].context, "123456789bg-amber-950 x");
    }

    #[test]
    fn test_context_is_trimmed() {
        let violations = check("  \t<div className=\"via-[#000000]\">  \n");
        assert_eq!(violations[0].context, "<div className=\"via-[#000000]\">");
    }

    #[test]
    fn test_configured_patterns_follow_builtins() {
        let extra = vec![CustomPattern {
            pattern: r"fill-\[#[0-9a-f]{3}\]".to_string(),
            description: "Short hex fill".to_string(),
        }];
        let table = pattern_table(&extra).unwrap();
        assert_eq!(table.len(), forbidden_patterns().len() + 1);

        let violations = find_violations("fill-[#fff] bg-red-500", Path::new("Icon.tsx"), &table);
        assert_eq!(violations.len(), 2);
        assert!(violations[0].description.starts_with("Standard Tailwind color"));
        assert_eq!(violations[1].description, "Short hex fill");
        assert_eq!(violations[1].column, 1);
    }

    #[test]
    fn test_invalid_configured_pattern() {
        let extra = vec![CustomPattern {
            pattern: "bg-[".to_string(),
            description: "broken".to_string(),
        }];
        assert!(matches!(pattern_table(&extra), Err(ToolError::InvalidPattern(_))));
        assert_eq!(pattern_table(&[]).unwrap().len(), forbidden_patterns().len());
    }

    #[test]
    fn test_advisories() {
        let content = "<div className=\"bg-white\">\n<div className=\"bg-white-soft\">\n<span className=\"text-black\">";
        let advisories = advise(content, Path::new("Card.tsx"));

        assert_eq!(advisories.len(), 2);
        assert_eq!((advisories[0].line, advisories[0].usage), (1, "bg-white"));
        assert_eq!((advisories[1].line, advisories[1].usage), (3, "text-black"));
        assert_eq!(advisories[1].suggestion, "Consider using text-foreground instead");
    }
}
