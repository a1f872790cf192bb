use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;
use strata_core::report::{self, ReportFormat};
use tracing::info;

/// Expand `~` in a user-supplied path.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Parse one `--site` value of the form `LABEL=PATH`.
pub fn parse_site_argument(raw: &str) -> Option<(String, PathBuf)> {
    let (label, path) = raw.split_once('=')?;
    let label = label.trim();
    let path = path.trim();
    if label.is_empty() || path.is_empty() {
        return None;
    }
    Some((label.to_string(), expand_path(path)))
}

/// Collect `--site` values into a label -> dataset map.
pub fn load_sites(values: &[&str]) -> Result<BTreeMap<String, PathBuf>> {
    let mut sites = BTreeMap::new();
    for raw in values {
        match parse_site_argument(raw) {
            Some((label, path)) => {
                sites.insert(label, path);
            }
            None => bail!("Invalid --site value '{raw}', expected LABEL=PATH"),
        }
    }
    if sites.is_empty() {
        bail!("At least one --site LABEL=PATH is required");
    }
    Ok(sites)
}

pub fn handle_analyze(args: &ArgMatches) -> Result<()> {
    tracing_subscriber::fmt::init();

    let dataset = args.get_one::<String>("dataset").unwrap();
    let format = ReportFormat::from_str(args.get_one::<String>("format").unwrap())
        .unwrap_or(ReportFormat::Text);
    let output = args.get_one::<PathBuf>("output");

    let dataset_path = expand_path(dataset);
    println!(
        "{} Analyzing {}",
        "→".blue(),
        dataset_path.display().to_string().bright_white()
    );

    let analysis = strata_core::analyze_dataset(&dataset_path)
        .with_context(|| format!("Failed to analyze {}", dataset_path.display()))?;
    info!(
        "Analysis complete: {} pages",
        analysis.metrics.total_pages
    );

    let content = match format {
        ReportFormat::Text => report::generate_text_report(&analysis),
        ReportFormat::Json => report::generate_json_report(&analysis)
            .context("Failed to serialize JSON report")?,
    };

    write_or_print(&content, output)
}

pub fn handle_compare(args: &ArgMatches) -> Result<()> {
    tracing_subscriber::fmt::init();

    let raw_sites: Vec<&str> = args
        .get_many::<String>("site")
        .unwrap()
        .map(String::as_str)
        .collect();
    let sites = load_sites(&raw_sites)?;
    let format = ReportFormat::from_str(args.get_one::<String>("format").unwrap())
        .unwrap_or(ReportFormat::Text);
    let output = args.get_one::<PathBuf>("output");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Comparing {} sites...", sites.len()));

    let comparison = strata_core::compare_sites(&sites);
    spinner.finish_and_clear();

    println!(
        "{} Compared {} of {} sites",
        "✓".green().bold(),
        comparison.sites.len(),
        sites.len()
    );

    let content = match format {
        ReportFormat::Text => report::generate_comparison_text(&comparison),
        ReportFormat::Json => report::generate_comparison_json(&comparison)
            .context("Failed to serialize JSON report")?,
    };

    write_or_print(&content, output)
}

fn write_or_print(content: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            report::save_report(content, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!(
                "{} Report saved to {}",
                "✓".green().bold(),
                path.display().to_string().bright_white()
            );
        }
        None => print!("{content}"),
    }
    Ok(())
}
