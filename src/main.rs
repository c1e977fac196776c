use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

mod config;
mod diff;
mod error;
mod oklch;
mod palette;
mod scanner;
mod stylesheet;
mod sync;
mod terminal;

use config::Config;
use scanner::ScanOptions;
use sync::SyncOptions;

/// aurora-colors - Aurora design-token sync and palette enforcement
#[derive(Parser, Debug)]
#[command(name = "aurora-colors")]
#[command(about = "Sync Aurora colors into the Propeller stylesheet and check components for raw colors")]
struct Args {
    /// Config file (default: ./aurora-colors.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sync all colors from Aurora into the stylesheet (default)
    #[command(visible_aliases = ["generate", "update"])]
    Sync(SyncArgs),

    /// Convert a single hex color to oklch
    Convert {
        /// Color as #RRGGBB
        hex: String,
    },

    /// Check component sources for colors that bypass the design tokens
    Scan {
        /// Directory to scan (default from config: src)
        root: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Hide bg-white / text-black suggestions
        #[arg(long)]
        no_advice: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
struct SyncArgs {
    /// Aurora colors.yml
    #[arg(long)]
    source: Option<PathBuf>,

    /// Stylesheet containing the :root block
    #[arg(long)]
    stylesheet: Option<PathBuf>,

    /// Custom property prefix
    #[arg(long)]
    prefix: Option<String>,

    /// Show the changes without writing the stylesheet
    #[arg(long)]
    dry_run: bool,

    /// Exit with status 1 if the stylesheet is out of date (implies --dry-run)
    #[arg(long)]
    check: bool,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

fn run_sync(config: &Config, args: SyncArgs) -> Result<i32> {
    let options = SyncOptions {
        source: args.source.unwrap_or_else(|| config.source.clone()),
        stylesheet: args.stylesheet.unwrap_or_else(|| config.stylesheet.clone()),
        prefix: args.prefix.unwrap_or_else(|| config.prefix.clone()),
        dry_run: args.dry_run || args.check,
    };

    let report = sync::sync(&options)?;
    terminal::print_sync_report(&report);

    if options.dry_run {
        terminal::print_diff(&report.diff);
    }

    Ok(if args.check && report.changed { 1 } else { 0 })
}

fn run_convert(hex: &str) -> Result<i32> {
    let color = oklch::hex_to_oklch(hex)?;
    terminal::print_conversion(hex, &oklch::format_oklch(&color));
    Ok(0)
}

fn run_scan(config: &Config, root: Option<PathBuf>, json: bool, no_advice: bool) -> Result<i32> {
    let mut options = ScanOptions::from(&config.scan);
    if let Some(root) = root {
        options.root = root;
    }

    let patterns = scanner::pattern_table(&config.scan.patterns)?;
    let report = scanner::scan(options, &patterns)?;

    if json {
        let output = serde_json::to_string_pretty(&report).context("Failed to serialize scan report")?;
        println!("{}", output);
    } else {
        terminal::print_scan_report(&report, !no_advice);
    }

    Ok(if report.passed() { 0 } else { 1 })
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = Config::load(args.config.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|config| match args.command {
            None => run_sync(&config, SyncArgs::default()),
            Some(Command::Sync(sync_args)) => run_sync(&config, sync_args),
            Some(Command::Convert { hex }) => run_convert(&hex),
            Some(Command::Scan {
                root,
                json,
                no_advice,
            }) => run_scan(&config, root, json, no_advice),
        });

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            terminal::print_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_sync() {
        let args = Args::try_parse_from(["aurora-colors"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_sync_aliases() {
        for alias in ["sync", "generate", "update"] {
            let args = Args::try_parse_from(["aurora-colors", alias, "--check"]).unwrap();
            assert!(matches!(args.command, Some(Command::Sync(SyncArgs { check: true, .. }))));
        }
    }

    #[test]
    fn test_convert_takes_hex() {
        let args = Args::try_parse_from(["aurora-colors", "convert", "#FDEDF0"]).unwrap();
        assert!(matches!(args.command, Some(Command::Convert { ref hex }) if hex == "#FDEDF0"));
        assert!(Args::try_parse_from(["aurora-colors", "convert"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Args::try_parse_from(["aurora-colors", "frobnicate"]).is_err());
    }

    #[test]
    fn test_scan_args() {
        let args = Args::try_parse_from(["aurora-colors", "scan", "src/components", "--json", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Some(Command::Scan { root, json, no_advice }) => {
                assert_eq!(root, Some(PathBuf::from("src/components")));
                assert!(json);
                assert!(!no_advice);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), LevelFilter::WARN);
        assert_eq!(log_level(1), LevelFilter::INFO);
        assert_eq!(log_level(5), LevelFilter::DEBUG);
    }
}
