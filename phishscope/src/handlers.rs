use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use phishscope_core::report::{self, ReportFormat};
use phishscope_core::{
    AnalysisResult, Analyzer, BatchOptions, PhishingClassifier, TokenModel, analyze_batch,
    normalize_url,
};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Load and parse URLs from a file
pub fn load_urls_from_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read hosts file {}", path.display()))?;

    let urls: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(parse_url_line)
        .collect();

    if urls.is_empty() {
        bail!("No valid URLs found in {}", path.display());
    }

    Ok(urls)
}

/// Parse a single line as a URL, adding https:// if needed
pub fn parse_url_line(line: &str) -> Option<String> {
    let url = normalize_url(line);
    match Url::parse(&url) {
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => Some(url),
        _ => {
            warn!("Skipping invalid URL '{}'", line);
            None
        }
    }
}

/// Load the optional classifier. A missing or broken model is not an
/// error; analysis continues with the heuristics alone.
pub fn load_classifier(path: Option<&String>) -> Option<Arc<dyn PhishingClassifier>> {
    let path = path?;
    let expanded = shellexpand::tilde(path);
    match TokenModel::load(Path::new(expanded.as_ref())) {
        Ok(model) => Some(Arc::new(model)),
        Err(e) => {
            warn!("Failed to load model {}: {}; using heuristics only", path, e);
            None
        }
    }
}

fn build_analyzer(args: &ArgMatches) -> Result<Analyzer> {
    let timeout = *args.get_one::<u64>("timeout").unwrap_or(&10);
    let trusted: Vec<String> = args
        .get_many::<String>("trust")
        .map(|domains| domains.cloned().collect())
        .unwrap_or_default();

    let mut builder = Analyzer::builder()
        .timeout(Duration::from_secs(timeout))
        .trusted_domains(trusted);
    if let Some(classifier) = load_classifier(args.get_one::<String>("model")) {
        builder = builder.classifier(classifier);
    }

    builder.build().context("Failed to initialize the analyzer")
}

fn report_format(args: &ArgMatches) -> ReportFormat {
    args.get_one::<String>("format")
        .and_then(|f| ReportFormat::parse(f))
        .unwrap_or(ReportFormat::Text)
}

fn prompt_for_url() -> Result<String> {
    print!("{} ", "Enter the site URL:".bright_cyan().bold());
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin()
        .read_line(&mut response)
        .context("Failed to read URL from stdin")?;
    Ok(response.trim().to_string())
}

fn emit(results: &[AnalysisResult], format: ReportFormat, output: Option<&PathBuf>) -> Result<()> {
    let rendered = report::render(results, format).context("Failed to render report")?;

    match output {
        Some(path) => {
            report::save_report(&rendered, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("{} Report saved to {}", "✓".green().bold(), path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    pb
}

pub async fn handle_check(args: &ArgMatches, quiet: bool) -> Result<()> {
    let url = match args.get_one::<String>("URL") {
        Some(url) => url.clone(),
        None => prompt_for_url()?,
    };

    let analyzer = build_analyzer(args)?;
    let format = report_format(args);

    let pb = (!quiet && format == ReportFormat::Text)
        .then(|| spinner("Analyzing site, please wait..."));
    let result = analyzer.analyze(&url).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    info!("{} -> {}", result.url, result.verdict);
    emit(&[result], format, args.get_one::<PathBuf>("output"))
}

pub async fn handle_batch(args: &ArgMatches, quiet: bool) -> Result<()> {
    let hosts_file = args
        .get_one::<PathBuf>("hosts-file")
        .context("--hosts-file is required")?;
    let threads = *args.get_one::<usize>("threads").unwrap_or(&10);

    let urls = load_urls_from_file(hosts_file)?;
    let analyzer = build_analyzer(args)?;
    let format = report_format(args);

    if !quiet {
        eprintln!(
            "\n{} Checking {} URL(s) with {} worker(s)\n",
            "→".blue(),
            urls.len(),
            threads
        );
    }

    let options = BatchOptions {
        concurrency: threads,
        show_progress: !quiet,
    };
    let results = analyze_batch(&analyzer, &urls, options, None).await;

    emit(&results, format, args.get_one::<PathBuf>("output"))
}
