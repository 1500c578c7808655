pub mod analyzer;
pub mod batch;
pub mod classifier;
pub mod features;
pub mod lexical;
pub mod normalize;
pub mod report;
pub mod spoof;
pub mod trust;
pub mod verdict;

pub use analyzer::{AnalysisResult, Analyzer, AnalyzerBuilder, ScoreSource};
pub use batch::{BatchOptions, BatchProgressCallback, analyze_batch};
pub use classifier::{ModelError, ModelOutcome, PhishingClassifier, TokenModel};
pub use features::{Feature, FeatureVector};
pub use lexical::LexicalFeatures;
pub use normalize::{hostname, normalize_host, normalize_url};
pub use spoof::{SpoofFinding, find_spoofs};
pub use trust::{TrustList, is_trusted};
pub use verdict::Verdict;

pub use phishscope_scanner::{ContentFeatures, ContentReport, ScanError};
