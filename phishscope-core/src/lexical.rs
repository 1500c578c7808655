use crate::features::Feature;
use crate::normalize::hostname;
use crate::spoof::SpoofFinding;

pub const LONG_URL_THRESHOLD: usize = 70;

pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "login", "verify", "update", "secure", "account", "free", "bonus",
];

/// The six URL-only risk bits, indexed by [`Feature::LEXICAL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexicalFeatures {
    bits: [bool; 6],
}

impl LexicalFeatures {
    /// Derive the bits from a scheme-qualified URL. `spoofs` are the brand
    /// findings for the same URL's hostname.
    pub fn extract(url: &str, spoofs: &[SpoofFinding]) -> Self {
        let lower = url.to_lowercase();
        let host = hostname(url);

        Self {
            bits: [
                !lower.starts_with("https"),
                url.chars().count() > LONG_URL_THRESHOLD,
                url.contains('@') || url.contains('-'),
                SUSPICIOUS_KEYWORDS.iter().any(|kw| lower.contains(kw)),
                host.chars().any(|c| c.is_ascii_digit()),
                !spoofs.is_empty(),
            ],
        }
    }

    pub fn from_bits(bits: [bool; 6]) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> [bool; 6] {
        self.bits
    }

    /// `None` for content features.
    pub fn get(&self, feature: Feature) -> Option<bool> {
        Feature::LEXICAL
            .iter()
            .position(|f| *f == feature)
            .map(|idx| self.bits[idx])
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }
}
