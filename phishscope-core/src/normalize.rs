// URL and hostname normalization shared by every pipeline stage

use phishscope_scanner::authority;

/// Prefix `https://` unless the input already carries an http(s) scheme.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Lower-case, drop a trailing `:port` and a leading `www.`.
pub fn normalize_host(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    let without_port = strip_port(&lower);
    without_port
        .strip_prefix("www.")
        .unwrap_or(without_port)
        .to_string()
}

/// Hostname of a scheme-qualified URL, normalized for matching.
pub fn hostname(url: &str) -> String {
    normalize_host(authority(url))
}

fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}
