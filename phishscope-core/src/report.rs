// Report generation for analysis results

use crate::analyzer::{AnalysisResult, ScoreSource};
use crate::verdict::Verdict;
use colored::Colorize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

pub fn render(results: &[AnalysisResult], format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(results.iter().map(render_text).collect()),
        ReportFormat::Json => render_json(results),
    }
}

pub fn render_text(result: &AnalysisResult) -> String {
    let mut report = String::new();

    report.push_str(RULE);
    report.push_str("\n\n");
    report.push_str(&format!("Analysis result: {}", colored_verdict(result.verdict)));
    match result.scorer {
        ScoreSource::Allowlist => report.push_str(" (allow-list)"),
        ScoreSource::Model => report.push_str(" (model)"),
        ScoreSource::Heuristic | ScoreSource::Unscored => {}
    }
    report.push('\n');

    report.push_str(&format!("URL:     {}\n", result.url));
    match result.score {
        Some(score) => report.push_str(&format!("Score:   {}/100\n", score)),
        None => report.push_str("Score:   n/a\n"),
    }
    if let Some(p) = result.model_probability {
        report.push_str(&format!("Phishing probability (model): {:.2}\n", p));
    }

    if !result.spoofed_brands.is_empty() {
        report.push_str(&format!(
            "\n{}\n",
            "⚠ Known brand impersonation attempts:".yellow().bold()
        ));
        for spoof in &result.spoofed_brands {
            report.push_str(&format!("  • {}\n", spoof));
        }
    }

    if let Some(ref features) = result.features {
        let flagged = features.flagged();
        if !flagged.is_empty() {
            report.push_str(&format!(
                "\nRisk indicators ({}/{}):\n",
                flagged.len(),
                features.len()
            ));
            for feature in flagged {
                report.push_str(&format!("  - {}\n", feature.description()));
            }
        }
    }

    if let Some(ref error) = result.error {
        report.push_str(&format!(
            "\n{} {}\n",
            "Could not inspect site content:".red(),
            error
        ));
    } else if let Some(ref page) = result.content_features {
        report.push_str("\nSite content:\n");
        report.push_str(&checklist_line("Input forms", page.forms, "detected", "not detected"));
        report.push_str(&checklist_line("Password fields", page.password_fields, "present", "absent"));
        report.push_str(&checklist_line("External scripts", page.external_scripts, "detected", "not detected"));
        report.push_str(&checklist_line("Hidden elements", page.hidden_elements, "present", "absent"));
        report.push_str(&checklist_line("Suspicious redirects", page.suspicious_redirects, "detected", "not detected"));
    } else if result.scorer == ScoreSource::Heuristic {
        report.push_str("\nSite content was not checked.\n");
    }

    report.push('\n');
    report
}

pub fn render_json(results: &[AnalysisResult]) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "Phishscope",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            },
            "summary": {
                "total": results.len(),
                "safe": count_verdict(results, Verdict::Safe),
                "suspicious": count_verdict(results, Verdict::Suspicious),
                "phishing": count_verdict(results, Verdict::Phishing)
            },
            "results": results
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

fn colored_verdict(verdict: Verdict) -> String {
    match verdict {
        Verdict::Safe => format!("✅ {}", verdict.label()).green().bold().to_string(),
        Verdict::Suspicious => format!("⚠ {}", verdict.label()).yellow().bold().to_string(),
        Verdict::Phishing => format!("❌ {}", verdict.label()).red().bold().to_string(),
    }
}

fn checklist_line(name: &str, present: bool, yes: &str, no: &str) -> String {
    format!("  ✓ {}: {}\n", name, if present { yes } else { no })
}

fn count_verdict(results: &[AnalysisResult], verdict: Verdict) -> usize {
    results.iter().filter(|r| r.verdict == verdict).count()
}
