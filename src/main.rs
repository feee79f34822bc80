//! Diagnostic CLI for the CEK schedule extractor
//!
//! One-shot mode fetches (or reads) the announcement page, prints the
//! intermediate extraction results for manual verification against the
//! live page, and renders the schedule summary. Watch mode re-fetches on
//! an interval, falling back to the last successful report when a fetch
//! fails.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local, Timelike};
use clap::Parser;

use cek_outage::report::{OutageReport, ScheduleSource, extract, overrides, text};
use cek_outage::{config, fetch, report, timeline};

#[derive(Parser)]
#[command(name = "cek-outage", version, about = "CEK load-shedding schedule tracker")]
struct Cli {
    /// Queue identifier to extract, e.g. "6.2"
    #[arg(short, long)]
    queue: Option<String>,

    /// Announcement page URL
    #[arg(long)]
    url: Option<String>,

    /// Parse a saved HTML file instead of fetching
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the SVG timeline to this path
    #[arg(long, value_name = "FILE")]
    svg: Option<PathBuf>,

    /// Keep re-fetching on the configured interval
    #[arg(long, conflicts_with = "file")]
    watch: bool,

    /// Poll interval in minutes for --watch (clamped to 5..=120)
    #[arg(long, value_name = "MINUTES")]
    interval: Option<u64>,

    /// Verbose extraction diagnostics
    #[arg(short, long)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if cli.verbose { "debug" } else { "info" },
    ))
    .init();

    let mut config = config::load_config();
    if let Some(queue) = &cli.queue {
        config.queue = queue.clone();
    }
    if let Some(url) = &cli.url {
        config.url = url.clone();
    }
    if let Some(interval) = cli.interval {
        config.update_interval = interval;
    }

    if cli.watch {
        run_watch(&cli, &config)
    } else {
        run_once(&cli, &config)
    }
}

fn run_once(cli: &Cli, config: &config::Config) -> Result<()> {
    let html = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => fetch::fetch_page(&config.url)?,
    };

    let now = Local::now().fixed_offset();
    let report = report::extract_report(&html, &config.queue, now);

    emit(cli, config, &html, &report, now)
}

fn run_watch(cli: &Cli, config: &config::Config) -> Result<()> {
    let interval = std::time::Duration::from_secs(config.clamped_interval() * 60);
    let mut last_good: Option<OutageReport> = None;

    loop {
        let now = Local::now().fixed_offset();
        match fetch::fetch_page(&config.url) {
            Ok(html) => {
                let report = report::extract_report(&html, &config.queue, now);
                emit(cli, config, &html, &report, now)?;
                last_good = Some(report);
            }
            Err(err) => match &last_good {
                // The cached report is reused read-only; the next successful
                // cycle replaces it wholesale
                Some(report) => {
                    log::warn!("fetch failed, reusing last good report: {err}");
                    match cli.format {
                        OutputFormat::Text => print_report(config, report, true),
                        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
                    }
                }
                None => return Err(err).context("fetch failed with no cached report"),
            },
        }

        log::info!(
            "next refresh in {} minute(s)",
            config.clamped_interval()
        );
        std::thread::sleep(interval);
    }
}

fn emit(
    cli: &Cli,
    config: &config::Config,
    html: &str,
    report: &OutageReport,
    now: DateTime<FixedOffset>,
) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            if cli.verbose {
                print_diagnostics(config, html);
            }
            print_report(config, report, false);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }

    if let Some(path) = &cli.svg {
        let svg = timeline::svg_timeline(&report.schedule, Some(minute_of_day(now)));
        std::fs::write(path, svg)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote SVG timeline to {}", path.display());
    }

    Ok(())
}

/// Intermediate extraction results, for checking against the live page.
fn print_diagnostics(config: &config::Config, html: &str) {
    let lines = text::extract_text_lines(html);
    println!("--- extraction diagnostics ---");
    println!("text lines: {}", lines.len());

    let primary = extract::extract_queue_schedule(html, &config.queue);
    println!("primary block ranges: {:?}", fmt_ranges(&primary));

    match overrides::extract_override_schedule(html, &config.queue) {
        Some(ranges) => println!("override section: present, ranges {:?}", fmt_ranges(&ranges)),
        None => println!("override section: absent"),
    }
    println!("------------------------------");
}

fn print_report(config: &config::Config, report: &OutageReport, cached: bool) {
    println!("Queue {} ({})", report.queue, config.url);

    match &report.date {
        Some(date) => println!("Date: {date}"),
        None => println!("Date: not found"),
    }

    if report.has_update {
        println!("Schedule update detected!");
        if let Some(update) = &report.update_announcement {
            println!("  {update}");
        }
    }

    let source = match report.source {
        ScheduleSource::Primary => "primary announcement",
        ScheduleSource::Override => "update section",
    };
    println!("Schedule ({source}):");

    if report.schedule.is_empty() {
        println!("  no outages found");
    } else {
        for range in &report.schedule {
            println!("  {range}");
        }
        println!(
            "Total outage: {:.1} hours ({:.1}% of day)",
            timeline::outage_hours(&report.schedule),
            timeline::outage_percentage(&report.schedule),
        );
        println!("  {}", timeline::ascii_timeline(&report.schedule));
        println!("  00    03    06    09    12    15    18    21    24");
    }

    match report.next_outage {
        Some(next) => println!("Next outage: {}", next.format("%Y-%m-%d %H:%M")),
        None => println!("Next outage: unknown"),
    }
    println!(
        "Outage active now: {}",
        if report.is_active { "yes" } else { "no" }
    );

    if cached {
        println!("(showing last successfully fetched report)");
    }
}

fn fmt_ranges(ranges: &[report::TimeRange]) -> Vec<String> {
    ranges.iter().map(|range| range.to_string()).collect()
}

fn minute_of_day(now: DateTime<FixedOffset>) -> u16 {
    (now.hour() * 60 + now.minute()) as u16
}
