//! docs-a11y command line
//!
//! Post-processes a built documentation site, writes the Lighthouse CI
//! configuration and inspects live pages in Chrome.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use docs_a11y::site::{PageReport, SiteMode};
use docs_a11y::{AuditConfig, BrowserSession, EnhanceReport, LaunchOptions, MemorySink, Normalizer, NormalizerConfig};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docs-a11y")]
#[command(version)]
#[command(about = "Accessibility normalizer for MkDocs Material sites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Patch every page of a built site
    Normalize {
        /// Site build directory
        #[arg(default_value = "site")]
        dir: PathBuf,

        /// Report pages that need changes without rewriting them; exits non-zero if any do
        #[arg(long)]
        check: bool,

        /// Normalizer configuration (JSON)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Write the Lighthouse CI configuration
    AuditConfig {
        /// Output file (default: stdout)
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the JSON schema of the Lighthouse CI configuration
    Schema,

    /// Load pages in Chrome and report what the normalizer would change
    Inspect {
        /// Page to inspect; repeatable (default: the audit config's urls)
        #[arg(long, value_name = "URL")]
        url: Vec<String>,

        /// Lighthouse CI configuration supplying urls and Chrome flags
        #[arg(long, value_name = "FILE")]
        audit_config: Option<PathBuf>,

        /// Launch browser in headed mode
        #[arg(long, short = 'H')]
        headed: bool,

        /// Print reports as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct InspectedPage {
    url: String,
    report: EnhanceReport,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Normalize { dir, check, config } => normalize(dir, check, config),
        Command::AuditConfig { output } => audit_config(output),
        Command::Schema => {
            println!("{}", AuditConfig::json_schema()?);
            Ok(())
        }
        Command::Inspect {
            url,
            audit_config,
            headed,
            json,
        } => inspect(url, audit_config, headed, json),
    }
}

fn load_normalizer(config: Option<PathBuf>) -> anyhow::Result<Normalizer> {
    let config = match config {
        Some(path) => NormalizerConfig::load(&path)?,
        None => NormalizerConfig::default(),
    };
    Ok(Normalizer::new(&config)?)
}

fn normalize(dir: PathBuf, check: bool, config: Option<PathBuf>) -> anyhow::Result<()> {
    let normalizer = load_normalizer(config)?;
    let mode = if check { SiteMode::Check } else { SiteMode::Write };

    let summary = docs_a11y::process_site(&dir, &normalizer, mode)
        .with_context(|| format!("Failed to process {}", dir.display()))?;

    for page in summary.pages.iter().filter(|p| p.needs_changes()) {
        print_page(page, check);
    }

    println!(
        "{} pages scanned, {} {}, {} heading warnings",
        summary.pages_scanned(),
        summary.pages_needing_changes(),
        if check { "need changes" } else { "rewritten" },
        summary.warning_count()
    );

    if check && summary.pages_needing_changes() > 0 {
        bail!("{} pages need accessibility fixes", summary.pages_needing_changes());
    }

    Ok(())
}

fn print_page(page: &PageReport, check: bool) {
    println!("{}{}", page.path.display(), if check { "" } else { " (rewritten)" });
    for change in page.report.changes.iter().filter(|c| c.is_structural()) {
        println!("  {}", change);
    }
}

fn audit_config(output: Option<PathBuf>) -> anyhow::Result<()> {
    let config = AuditConfig::default();

    match output {
        Some(path) => {
            config.save(&path)?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", config.to_json()?),
    }

    Ok(())
}

fn inspect(urls: Vec<String>, audit_config: Option<PathBuf>, headed: bool, json: bool) -> anyhow::Result<()> {
    let config = match audit_config {
        Some(path) => AuditConfig::load(&path)?,
        None => AuditConfig::default(),
    };

    let urls = if urls.is_empty() { config.ci.collect.url.clone() } else { urls };

    let mut options = LaunchOptions::from_chrome_flags(&config.chrome_flags());
    if headed {
        options = options.headless(false);
    }

    eprintln!(
        "Browser mode: {}",
        if options.headless { "headless" } else { "headed" }
    );

    let session = BrowserSession::launch(&options).context("Failed to launch browser")?;
    let normalizer = Normalizer::new(&NormalizerConfig::default())?;
    let mut pages = Vec::with_capacity(urls.len());

    for url in urls {
        session.navigate(&url)?;
        let mut doc = session.extract_document()?;
        let report = normalizer.run(&mut doc, &mut MemorySink::new());
        pages.push(InspectedPage { url, report });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&pages)?);
        return Ok(());
    }

    for page in &pages {
        println!("{}", page.url);
        for change in &page.report.changes {
            println!("  {}", change);
        }
        for warning in page.report.warnings() {
            println!("  warning: {}", warning);
        }
    }

    Ok(())
}
