use serde::{Deserialize, Serialize};

/// Markup signals observed on a fetched page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFeatures {
    pub forms: bool,
    pub password_fields: bool,
    pub external_scripts: bool,
    pub hidden_elements: bool,
    pub suspicious_redirects: bool,
}

impl ContentFeatures {
    /// A form that asks for a password, the classic credential harvester.
    pub fn has_credential_form(&self) -> bool {
        self.forms && self.password_fields
    }
}

/// Outcome of a single page fetch. A failed fetch means the content is
/// unknown, not that it is harmless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentReport {
    Fetched(ContentFeatures),
    Failed { error: String },
}

impl ContentReport {
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn features(&self) -> Option<&ContentFeatures> {
        match self {
            Self::Fetched(features) => Some(features),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Fetched(_) => None,
            Self::Failed { error } => Some(error),
        }
    }
}
