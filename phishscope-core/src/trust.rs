use crate::normalize::normalize_host;

/// Hosts (and their subdomains) that bypass analysis entirely.
pub const TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "youtube.com",
    "qalan.kz",
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "github.com",
    "wikipedia.org",
    "amazon.com",
    "microsoft.com",
];

#[derive(Debug, Clone)]
pub struct TrustList {
    domains: Vec<String>,
}

impl TrustList {
    pub fn new() -> Self {
        Self {
            domains: TRUSTED_DOMAINS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Add extra allow-list entries. Entries are normalized like hostnames;
    /// empty and duplicate entries are ignored.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for domain in extra {
            let domain = normalize_host(domain.as_ref());
            let domain = domain.trim_matches('.').to_string();
            if !domain.is_empty() && !self.domains.contains(&domain) {
                self.domains.push(domain);
            }
        }
        self
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    /// Exact or subdomain match on a label boundary: `mail.google.com`
    /// matches `google.com`, `evilgoogle.com` does not.
    pub fn is_trusted(&self, hostname: &str) -> bool {
        let host = normalize_host(hostname);
        if host.is_empty() {
            return false;
        }

        self.domains.iter().any(|trusted| {
            host == *trusted
                || host
                    .strip_suffix(trusted.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}

impl Default for TrustList {
    fn default() -> Self {
        Self::new()
    }
}

/// Check against the built-in allow-list.
pub fn is_trusted(hostname: &str) -> bool {
    TrustList::default().is_trusted(hostname)
}
