use serde::{Deserialize, Serialize};
use std::fmt;

/// Well-known brands and the misspellings used to impersonate them.
pub const BRAND_VARIANTS: &[(&str, &[&str])] = &[
    ("google", &["g00gle", "googie", "g0ogle", "gooogle"]),
    ("facebook", &["faceb00k", "faccebook", "faceboook", "facebock"]),
    ("amazon", &["amaz0n", "amazzon", "amazonn", "ammazon"]),
    ("paypal", &["paypa1", "paypai", "payp@l", "payppal"]),
    ("microsoft", &["micros0ft", "mikrosoft", "micrrosoft", "micro$oft"]),
    ("apple", &["app1e", "appl3", "@pple", "appple"]),
    ("netflix", &["netf1ix", "netfflix", "netfl1x", "netflix-"]),
    ("twitter", &["tw1tter", "twiter", "twltter", "tvvitter"]),
    ("instagram", &["1nstagram", "instagramm", "lnstagram", "instagrram"]),
    ("roblox", &["rob1ox", "robl0x", "robllox", "roblux"]),
    ("youtube", &["yout00be", "youutube", "y0utube", "youtubee"]),
    ("whatsapp", &["whatsaap", "whats@pp", "whatsapp-", "whatsapp1"]),
    ("telegram", &["te1egram", "telegramm", "teiegram", "tel3gram"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpoofFinding {
    pub brand: String,
    pub variant: String,
}

impl SpoofFinding {
    pub fn new(brand: &str, variant: &str) -> Self {
        Self {
            brand: brand.to_string(),
            variant: variant.to_string(),
        }
    }
}

impl fmt::Display for SpoofFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.brand, self.variant)
    }
}

/// Substring scan of `hostname` for brand misspellings, in table order.
///
/// A brand whose genuine name appears without any of its variants is
/// skipped. Matching is plain substring search, so coincidental
/// substrings do produce findings.
pub fn find_spoofs(hostname: &str) -> Vec<SpoofFinding> {
    let host = hostname.to_lowercase();
    let mut findings = Vec::new();

    for (brand, variants) in BRAND_VARIANTS {
        let any_variant = variants.iter().any(|v| host.contains(v));
        if host.contains(brand) && !any_variant {
            continue;
        }

        findings.extend(
            variants
                .iter()
                .filter(|v| host.contains(*v))
                .map(|v| SpoofFinding::new(brand, v)),
        );
    }

    findings
}
