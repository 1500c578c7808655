use crate::analyzer::{AnalysisResult, Analyzer};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tracing::info;

/// Options for analyzing a list of URLs
pub struct BatchOptions {
    /// Maximum analyses in flight at once
    pub concurrency: usize,
    pub show_progress: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            concurrency: 10,
            show_progress: false,
        }
    }
}

/// Called once per finished URL with its position in the input
pub type BatchProgressCallback = Arc<dyn Fn(usize, &AnalysisResult) + Send + Sync>;

/// Analyze every URL, at most `concurrency` at a time. Results come back
/// in input order. Duplicate URLs are analyzed independently.
pub async fn analyze_batch(
    analyzer: &Analyzer,
    urls: &[String],
    options: BatchOptions,
    progress_callback: Option<BatchProgressCallback>,
) -> Vec<AnalysisResult> {
    let BatchOptions {
        concurrency,
        show_progress,
    } = options;

    let progress_bar = if show_progress {
        let pb = ProgressBar::new(urls.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style);
        }
        pb.set_message("Analyzing...");
        Some(pb)
    } else {
        None
    };

    info!(
        "Analyzing {} URL(s) with concurrency {}",
        urls.len(),
        concurrency
    );

    let pb = progress_bar.as_ref();
    let callback = progress_callback.as_ref();
    let results: Vec<AnalysisResult> = stream::iter(urls.iter().enumerate())
        .map(|(idx, url)| async move {
            let result = analyzer.analyze(url).await;
            if let Some(pb) = pb {
                pb.set_message(result.url.clone());
                pb.inc(1);
            }
            if let Some(callback) = callback {
                callback(idx, &result);
            }
            result
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    if let Some(pb) = progress_bar {
        pb.finish_with_message(format!("Analysis complete! {} URLs checked", results.len()));
    }

    results
}
