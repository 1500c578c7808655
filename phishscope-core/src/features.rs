use crate::lexical::LexicalFeatures;
use crate::verdict::heuristic_score;
use phishscope_scanner::ContentReport;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Feature slots in scoring order. Lexical slots are always present; the
/// content slots only when the page fetch succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    InsecureScheme,
    LongUrl,
    SuspiciousCharacters,
    SuspiciousKeyword,
    DigitsInHost,
    BrandSpoof,
    CredentialForm,
    ExternalScripts,
    HiddenElements,
    MetaRefresh,
}

impl Feature {
    pub const LEXICAL: [Feature; 6] = [
        Feature::InsecureScheme,
        Feature::LongUrl,
        Feature::SuspiciousCharacters,
        Feature::SuspiciousKeyword,
        Feature::DigitsInHost,
        Feature::BrandSpoof,
    ];

    pub const CONTENT: [Feature; 4] = [
        Feature::CredentialForm,
        Feature::ExternalScripts,
        Feature::HiddenElements,
        Feature::MetaRefresh,
    ];

    pub fn description(self) -> &'static str {
        match self {
            Feature::InsecureScheme => "not served over HTTPS",
            Feature::LongUrl => "unusually long URL",
            Feature::SuspiciousCharacters => "contains '@' or '-'",
            Feature::SuspiciousKeyword => "contains a lure keyword",
            Feature::DigitsInHost => "digits in the host name",
            Feature::BrandSpoof => "imitates a known brand",
            Feature::CredentialForm => "form asking for a password",
            Feature::ExternalScripts => "loads off-origin scripts",
            Feature::HiddenElements => "hidden page elements",
            Feature::MetaRefresh => "meta refresh redirect",
        }
    }
}

/// Fixed-order binary risk indicators: 6 slots, or 10 when page content
/// was available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureVector {
    lexical: LexicalFeatures,
    content: Option<[bool; 4]>,
}

impl FeatureVector {
    /// Merge the lexical bits with the content bits of a successful fetch.
    /// A failed fetch leaves the vector at its six lexical slots.
    pub fn aggregate(lexical: LexicalFeatures, content: &ContentReport) -> Self {
        let content = content.features().map(|page| {
            [
                page.has_credential_form(),
                page.external_scripts,
                page.hidden_elements,
                page.suspicious_redirects,
            ]
        });
        Self { lexical, content }
    }

    pub fn lexical(&self) -> LexicalFeatures {
        self.lexical
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    pub fn len(&self) -> usize {
        Feature::LEXICAL.len() + self.content.map_or(0, |c| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sum(&self) -> usize {
        self.bits().iter().filter(|b| **b).count()
    }

    pub fn bits(&self) -> Vec<bool> {
        let mut bits = self.lexical.bits().to_vec();
        if let Some(content) = self.content {
            bits.extend_from_slice(&content);
        }
        bits
    }

    pub fn get(&self, feature: Feature) -> Option<bool> {
        if let Some(bit) = self.lexical.get(feature) {
            return Some(bit);
        }
        let content = self.content?;
        Feature::CONTENT
            .iter()
            .position(|f| *f == feature)
            .map(|idx| content[idx])
    }

    /// Slots that are set, in slot order.
    pub fn flagged(&self) -> Vec<Feature> {
        Feature::LEXICAL
            .iter()
            .chain(Feature::CONTENT.iter())
            .copied()
            .filter(|f| self.get(*f) == Some(true))
            .collect()
    }

    /// Deterministic safety score: share of unset slots, as a percentage.
    pub fn score(&self) -> Option<u8> {
        heuristic_score(self.sum(), self.len())
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let bits: Vec<u8> = self.bits().into_iter().map(u8::from).collect();
        let mut state = serializer.serialize_struct("FeatureVector", 2)?;
        state.serialize_field("bits", &bits)?;
        state.serialize_field("flagged", &self.flagged())?;
        state.end()
    }
}
