use colored::Colorize;

use crate::diff::{ChangeKind, StylesheetDiff};
use crate::scanner::{Advisory, ScanReport, Violation};
use crate::sync::SyncReport;

// Catppuccin Mocha accents
const RED: (u8, u8, u8) = (243, 139, 168);
const YELLOW: (u8, u8, u8) = (249, 226, 175);
const GREEN: (u8, u8, u8) = (166, 227, 161);
const SAPPHIRE: (u8, u8, u8) = (116, 199, 236);
const OVERLAY0: (u8, u8, u8) = (108, 112, 134);

const RULE_WIDTH: usize = 80;

trait Paint {
    fn paint(&self, color: (u8, u8, u8)) -> colored::ColoredString;
}

impl Paint for str {
    fn paint(&self, color: (u8, u8, u8)) -> colored::ColoredString {
        self.truecolor(color.0, color.1, color.2)
    }
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ️".paint(SAPPHIRE), message.paint(SAPPHIRE));
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".paint(GREEN), message.paint(GREEN));
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠️".paint(YELLOW), message.paint(YELLOW));
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".paint(RED), message.paint(RED));
}

/// Print the result of a single conversion
pub fn print_conversion(hex: &str, css: &str) {
    println!("{} {} {}", hex, "→".paint(OVERLAY0), css);
}

/// Summarize a sync run
pub fn print_sync_report(report: &SyncReport) {
    if report.written {
        print_success("Synced Aurora colors to the stylesheet");
    } else if report.changed {
        print_warning(&format!("Stylesheet is out of date ({})", report.diff.summary()));
    } else {
        print_success("Stylesheet already up to date");
    }
    print_info(&format!(
        "Processed {} color families, {} variables",
        report.families, report.variables
    ));

    println!("\n{}", "Sample variables generated:".paint(OVERLAY0));
    for line in &report.sample {
        println!("{}", line);
    }
}

/// Print the added and removed lines of a pending sync
pub fn print_diff(diff: &StylesheetDiff) {
    if diff.is_empty() {
        return;
    }
    println!();
    for change in &diff.changes {
        let line = format!("{:>5}", change.line);
        match change.kind {
            ChangeKind::Added => println!("{} {}", line.paint(OVERLAY0), format!("+ {}", change.content).paint(GREEN)),
            ChangeKind::Removed => println!("{} {}", line.paint(OVERLAY0), format!("- {}", change.content).paint(RED)),
        }
    }
}

fn format_violation(index: usize, v: &Violation) -> String {
    format!(
        "{}. {}:{}:{}\n   Problem: {}\n   Found: {}\n   Context: {}\n",
        index + 1,
        v.file.display(),
        v.line,
        v.column,
        v.description,
        v.matched,
        v.context
    )
}

/// Human-readable violation report with remediation guidance
pub fn format_violation_report(violations: &[Violation]) -> String {
    let rule = "─".repeat(RULE_WIDTH);
    let entries: Vec<String> = violations
        .iter()
        .enumerate()
        .map(|(i, v)| format_violation(i, v))
        .collect();

    [
        "❌ Color Palette Violations Found".to_string(),
        rule.clone(),
        String::new(),
        entries.join("\n"),
        rule,
        String::new(),
        "💡 How to fix:".to_string(),
        "   • Use semantic tokens: bg-primary, text-muted-foreground, border-info".to_string(),
        "   • Or use Aurora variables: var(--aurora-blue-3)".to_string(),
        "   • See AGENTS.md for approved color system".to_string(),
        String::new(),
        format!("Total violations: {}", violations.len()),
    ]
    .join("\n")
}

fn format_advisory(a: &Advisory) -> String {
    format!("   {}:{} - {} → {}", a.file.display(), a.line, a.usage, a.suggestion)
}

/// Print the scan outcome; advisories only when `show_advice` is set
pub fn print_scan_report(report: &ScanReport, show_advice: bool) {
    if show_advice && !report.advisories.is_empty() {
        println!("\n{}", "⚠️  Suggestions for semantic token usage:".paint(YELLOW));
        for advisory in &report.advisories {
            println!("{}", format_advisory(advisory).paint(YELLOW));
        }
        println!();
    }

    if report.passed() {
        print_success(&format!(
            "Checked {} files - no color violations found!",
            report.files_checked
        ));
    } else {
        eprintln!("\n{}", format_violation_report(&report.violations));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn violation() -> Violation {
        Violation {
            file: PathBuf::from("src/components/Button.tsx"),
            line: 3,
            column: 10,
            matched: "bg-[#FFFFFF]".to_string(),
            description: "Arbitrary hex color (e.g., bg-[#FFFFFF])".to_string(),
            context: "<button className=\"bg-[#FFFFFF]\">".to_string(),
        }
    }

    #[test]
    fn test_violation_entry() {
        let report = format_violation_report(&[violation()]);

        assert!(report.contains("1. src/components/Button.tsx:3:10\n"));
        assert!(report.contains("   Problem: Arbitrary hex color (e.g., bg-[#FFFFFF])\n"));
        assert!(report.contains("   Found: bg-[#FFFFFF]\n"));
        assert!(report.contains("   Context: <button className=\"bg-[#FFFFFF]\">\n"));
        assert!(report.ends_with("Total violations: 1"));
    }

    #[test]
    fn test_entries_are_numbered() {
        let report = format_violation_report(&[violation(), violation()]);
        assert!(report.contains("\n1. src/"));
        assert!(report.contains("\n2. src/"));
        assert!(report.contains("Use semantic tokens: bg-primary"));
        assert!(report.ends_with("Total violations: 2"));
    }

    #[test]
    fn test_advisory_line() {
        let advisory = Advisory {
            file: PathBuf::from("src/components/Card.tsx"),
            line: 7,
            usage: "bg-white",
            suggestion: "Consider using bg-background instead",
        };
        assert_eq!(
            format_advisory(&advisory),
            "   src/components/Card.tsx:7 - bg-white → Consider using bg-background instead"
        );
    }
}
