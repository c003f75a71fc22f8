// SPDX-License-Identifier: PMPL-1.0-or-later
//! wcag-catalog CLI - browse, search and export the WCAG 2.2 criteria catalog

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wcag_catalog::audit::audit;
use wcag_catalog::checklist::{Checklist, ChecklistFilter, Column};
use wcag_catalog::config::{default_config_path, load_config, write_default_config, Config};
use wcag_catalog::guideline::aggregate;
use wcag_catalog::principle::{principle_info, principles};
use wcag_catalog::report::{
    render_checklist, render_criteria, render_criterion, render_findings, render_principles,
    render_search, OutputFormat,
};
use wcag_catalog::{guidelines, registry, search, Principle, WcagLevel};

/// Query the WCAG 2.2 success criteria catalog
#[derive(Parser)]
#[command(name = "wcag-catalog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output format (overrides the config file)
    #[arg(long, global = true)]
    format: Option<FormatArg>,

    /// Config file
    #[arg(long, global = true, env = "WCAG_CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List criteria, optionally filtered
    List {
        /// Principle key (perceivable, operable, understandable, robust)
        #[arg(long)]
        principle: Option<Principle>,

        /// Conformance target; AA lists A and AA criteria
        #[arg(long)]
        level: Option<WcagLevel>,

        /// Only criteria added in WCAG 2.2
        #[arg(long)]
        new: bool,
    },

    /// Show one criterion by id (2-1-1) or number (2.1.1)
    Show {
        key: String,
    },

    /// Ranked free-text search
    Search {
        query: String,

        /// Maximum results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Describe the four principles, or one of them
    Principles {
        key: Option<String>,
    },

    /// Export a conformance checklist
    Checklist {
        /// Levels to include (repeatable); exact membership
        #[arg(long = "level")]
        levels: Vec<WcagLevel>,

        /// Principles to include (repeatable)
        #[arg(long = "principle")]
        principles: Vec<Principle>,

        /// Only criteria added in WCAG 2.2
        #[arg(long)]
        new_only: bool,

        /// Include every criterion, overriding `new_only` from the config
        #[arg(long, conflicts_with = "new_only")]
        all: bool,

        /// Comma-separated column keys
        #[arg(long, value_delimiter = ',')]
        columns: Vec<Column>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Audit the embedded catalog
    Validate,

    /// Write a default config file
    InitConfig {
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// Markdown tables
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

/// Filter directive for a verbosity count; `fallback` applies at zero
fn log_directive(verbose: u8, fallback: &str) -> String {
    let level = match verbose {
        0 => fallback,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("wcag_catalog={}", level)
}

fn log_filter(verbose: u8, fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_directive(verbose, fallback)))
}

fn init_logging(verbose: u8, config_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, config_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Until the config is read only RUST_LOG and -v apply
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, "warn"))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || load_config(&config_path))
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    init_logging(cli.verbose, &config.log.level);
    debug!(path = %config_path.display(), "Using configuration");

    let format = cli.format.map(OutputFormat::from).unwrap_or(config.defaults.format);

    match cli.command {
        Commands::List { principle, level, new } => {
            let level = level.unwrap_or(config.defaults.level);
            let criteria: Vec<_> = registry()
                .by_level(level)
                .into_iter()
                .filter(|c| principle.map_or(true, |p| c.principle == p))
                .filter(|c| !new || c.is_new)
                .collect();
            println!("{}", render_criteria(&criteria, format));
        }

        Commands::Show { key } => {
            let Some(criterion) = registry().resolve(&key) else {
                eprintln!("No success criterion matches '{}'", key);
                std::process::exit(1);
            };
            let related = registry().related(criterion);
            println!("{}", render_criterion(criterion, &related, format));
        }

        Commands::Search { query, limit } => {
            let limit = limit.unwrap_or(config.search.limit);
            let mut results = search::search(registry(), &query);
            results.truncate(limit);
            println!("{}", render_search(&results, format));
        }

        Commands::Principles { key } => {
            let selected: Vec<_> = match key {
                Some(key) => match principle_info(&key.to_lowercase()) {
                    Some(info) => vec![info],
                    None => bail!("Unknown principle: {}", key),
                },
                None => principles().iter().collect(),
            };
            println!("{}", render_principles(&selected, format));
        }

        Commands::Checklist { levels, principles, new_only, all, columns, output } => {
            let filter = checklist_filter(&config, levels, principles, new_only, all);
            let columns = if columns.is_empty() {
                config.checklist.columns.clone()
            } else {
                columns
            };
            let checklist = Checklist::build(registry(), &filter, &columns);
            write_output(&render_checklist(&checklist, format), output.as_deref())?;
        }

        Commands::Validate => {
            let per_principle = Principle::ALL
                .iter()
                .map(|p| guidelines::criteria_for(*p))
                .collect::<wcag_catalog::Result<Vec<_>>>()
                .context("Failed to load guideline payloads")?;
            let findings = audit(&aggregate(per_principle));
            println!("{}", render_findings(&findings, format));

            if findings.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::InitConfig { path, force } => {
            let path = path.unwrap_or_else(default_config_path);
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            write_default_config(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Default config written to {}", path.display());
        }
    }

    Ok(())
}

/// CLI filter flags replace the configured ones field by field; `all` clears `new_only`
fn checklist_filter(
    config: &Config,
    levels: Vec<WcagLevel>,
    principles: Vec<Principle>,
    new_only: bool,
    all: bool,
) -> ChecklistFilter {
    let configured = &config.checklist.filter;
    ChecklistFilter {
        levels: if levels.is_empty() {
            configured.levels.clone()
        } else {
            levels
        },
        principles: if principles.is_empty() {
            configured.principles.clone()
        } else {
            principles
        },
        new_only: !all && (new_only || configured.new_only),
    }
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content).with_context(|| format!("Failed to write {}", p.display()))?;
            eprintln!("Checklist written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_new_only() -> Config {
        let mut config = Config::default();
        config.checklist.filter.new_only = true;
        config.checklist.filter.levels = vec![WcagLevel::AAA];
        config
    }

    #[test]
    fn test_log_directive() {
        assert_eq!(log_directive(0, "warn"), "wcag_catalog=warn");
        assert_eq!(log_directive(0, "error"), "wcag_catalog=error");
        assert_eq!(log_directive(1, "error"), "wcag_catalog=info");
        assert_eq!(log_directive(2, "warn"), "wcag_catalog=debug");
        assert_eq!(log_directive(7, "warn"), "wcag_catalog=trace");
    }

    #[test]
    fn test_checklist_filter_inherits_config() {
        let filter = checklist_filter(&config_with_new_only(), vec![], vec![], false, false);
        assert!(filter.new_only);
        assert_eq!(filter.levels, vec![WcagLevel::AAA]);
    }

    #[test]
    fn test_checklist_all_overrides_config_new_only() {
        let filter = checklist_filter(&config_with_new_only(), vec![WcagLevel::A], vec![], false, true);
        assert!(!filter.new_only);
        assert_eq!(filter.levels, vec![WcagLevel::A]);
    }

    #[test]
    fn test_all_conflicts_with_new_only() {
        assert!(Cli::try_parse_from(["wcag-catalog", "checklist", "--all", "--new-only"]).is_err());
        assert!(Cli::try_parse_from(["wcag-catalog", "checklist", "--all"]).is_ok());
    }
}
