use crate::classifier::{ModelOutcome, PhishingClassifier, consult};
use crate::features::FeatureVector;
use crate::lexical::LexicalFeatures;
use crate::normalize::{hostname, normalize_url};
use crate::spoof::{SpoofFinding, find_spoofs};
use crate::trust::TrustList;
use crate::verdict::Verdict;
use phishscope_scanner::{
    BROWSER_USER_AGENT, ContentFeatures, ContentReport, DEFAULT_TIMEOUT_SECS, PageFetcher,
    ScanError,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Which stage produced the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    Allowlist,
    Model,
    Heuristic,
    Unscored,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub url: String,
    pub verdict: Verdict,
    pub score: Option<u8>,
    pub trusted: bool,
    pub spoofed_brands: Vec<SpoofFinding>,
    pub content_features: Option<ContentFeatures>,
    pub features: Option<FeatureVector>,
    pub error: Option<String>,
    pub model_probability: Option<f64>,
    pub scorer: ScoreSource,
}

impl AnalysisResult {
    pub fn trusted(url: String) -> Self {
        Self {
            url,
            verdict: Verdict::Safe,
            score: Some(100),
            trusted: true,
            spoofed_brands: Vec::new(),
            content_features: None,
            features: None,
            error: None,
            model_probability: None,
            scorer: ScoreSource::Allowlist,
        }
    }

    /// No usable input to score; fails toward caution.
    pub fn unscored(url: String, error: impl Into<String>) -> Self {
        Self {
            url,
            verdict: Verdict::from_score(None),
            score: None,
            trusted: false,
            spoofed_brands: Vec::new(),
            content_features: None,
            features: None,
            error: Some(error.into()),
            model_probability: None,
            scorer: ScoreSource::Unscored,
        }
    }

    pub fn from_model(
        url: String,
        spoofed_brands: Vec<SpoofFinding>,
        score: u8,
        probability: f64,
    ) -> Self {
        Self {
            url,
            verdict: Verdict::from_score(Some(score)),
            score: Some(score),
            trusted: false,
            spoofed_brands,
            content_features: None,
            features: None,
            error: None,
            model_probability: Some(probability),
            scorer: ScoreSource::Model,
        }
    }

    /// Deterministic scoring from the extracted features.
    ///
    /// With page content the verdict follows the score. Without it the
    /// verdict is at least `Suspicious` and the lexical indicator count can
    /// only raise it: five or more URL indicators give `Phishing` even when
    /// the page could not be read, so an unreachable look-alike is not
    /// softened to `Suspicious`.
    pub fn from_heuristics(
        url: String,
        spoofed_brands: Vec<SpoofFinding>,
        lexical: LexicalFeatures,
        content: ContentReport,
    ) -> Self {
        let features = FeatureVector::aggregate(lexical, &content);
        let score = features.score();

        let (verdict, content_features, error) = match content {
            ContentReport::Fetched(page) => (Verdict::from_score(score), Some(page), None),
            ContentReport::Failed { error } => {
                let lexical_verdict = Verdict::from_feature_count(lexical.count());
                (Verdict::Suspicious.max(lexical_verdict), None, Some(error))
            }
        };

        Self {
            url,
            verdict,
            score,
            trusted: false,
            spoofed_brands,
            content_features,
            features: Some(features),
            error,
            model_probability: None,
            scorer: ScoreSource::Heuristic,
        }
    }
}

pub struct AnalyzerBuilder {
    timeout: Duration,
    user_agent: String,
    extra_trusted: Vec<String>,
    classifier: Option<Arc<dyn PhishingClassifier>>,
}

impl AnalyzerBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn trusted_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_trusted.extend(domains.into_iter().map(Into::into));
        self
    }

    pub fn classifier(mut self, classifier: Arc<dyn PhishingClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn build(self) -> Result<Analyzer, ScanError> {
        Ok(Analyzer {
            trust: TrustList::new().with_extra(self.extra_trusted),
            fetcher: PageFetcher::with_options(self.timeout, &self.user_agent)?,
            classifier: self.classifier,
        })
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: BROWSER_USER_AGENT.to_string(),
            extra_trusted: Vec::new(),
            classifier: None,
        }
    }
}

/// The analysis pipeline. Holds no per-request state, so one instance can
/// serve any number of concurrent `analyze` calls.
#[derive(Clone)]
pub struct Analyzer {
    trust: TrustList,
    fetcher: PageFetcher,
    classifier: Option<Arc<dyn PhishingClassifier>>,
}

impl Analyzer {
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    pub fn new() -> Result<Self, ScanError> {
        Self::builder().build()
    }

    pub fn trust_list(&self) -> &TrustList {
        &self.trust
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.fetcher.timeout()
    }

    /// Allow-list, then the classifier if one is loaded, then heuristics.
    /// Every failure degrades the verdict instead of returning an error.
    pub async fn analyze(&self, input: &str) -> AnalysisResult {
        let url = normalize_url(input);
        let host = hostname(&url);

        if host.is_empty() {
            info!("No host in {:?}, skipping analysis", input);
            return AnalysisResult::unscored(url, "URL has no host");
        }

        if self.trust.is_trusted(&host) {
            info!("{} is on the allow-list", host);
            return AnalysisResult::trusted(url);
        }

        let spoofs = find_spoofs(&host);
        if !spoofs.is_empty() {
            debug!("Brand spoofing in {}: {:?}", host, spoofs);
        }

        match consult(self.classifier.as_deref(), &url) {
            ModelOutcome::Scored { score, probability } => {
                info!("Model scored {} at {}/100 (p={:.2})", url, score, probability);
                return AnalysisResult::from_model(url, spoofs, score, probability);
            }
            ModelOutcome::Unavailable => {}
            ModelOutcome::Failed(e) => {
                debug!("Model scoring failed for {}, using heuristics: {}", url, e);
            }
        }

        let lexical = LexicalFeatures::extract(&url, &spoofs);
        let content = self.fetcher.fetch(&url).await;
        let result = AnalysisResult::from_heuristics(url, spoofs, lexical, content);

        info!(
            "Heuristic verdict for {}: {} ({:?}/100)",
            result.url, result.verdict, result.score
        );
        result
    }
}
