// Tests for brand spoofing detection

use phishscope_core::spoof::{SpoofFinding, find_spoofs};

#[test]
fn test_google_zero_substitution() {
    let findings = find_spoofs("g00gle-login.com");
    assert!(findings.contains(&SpoofFinding::new("google", "g00gle")));
}

#[test]
fn test_genuine_brand_is_skipped() {
    assert!(find_spoofs("google.com").is_empty());
    assert!(find_spoofs("paypal.com").is_empty());
    assert!(find_spoofs("example.com").is_empty());
}

#[test]
fn test_genuine_name_with_variant_still_flags() {
    let findings = find_spoofs("google.gooogle.com");
    assert_eq!(findings, vec![SpoofFinding::new("google", "gooogle")]);
}

#[test]
fn test_variant_that_contains_the_brand() {
    let findings = find_spoofs("netflix-account.com");
    assert_eq!(findings, vec![SpoofFinding::new("netflix", "netflix-")]);

    let findings = find_spoofs("instagramm.com");
    assert_eq!(findings, vec![SpoofFinding::new("instagram", "instagramm")]);
}

#[test]
fn test_multiple_variants_follow_table_order() {
    let findings = find_spoofs("paypai-paypa1.net");
    assert_eq!(
        findings,
        vec![
            SpoofFinding::new("paypal", "paypa1"),
            SpoofFinding::new("paypal", "paypai"),
        ]
    );
}

#[test]
fn test_multiple_brands_follow_table_order() {
    let findings = find_spoofs("app1e-amaz0n.shop");
    assert_eq!(
        findings,
        vec![
            SpoofFinding::new("amazon", "amaz0n"),
            SpoofFinding::new("apple", "app1e"),
        ]
    );
}

#[test]
fn test_case_insensitive() {
    let findings = find_spoofs("PAYPA1.COM");
    assert_eq!(findings, vec![SpoofFinding::new("paypal", "paypa1")]);
}

#[test]
fn test_symbol_variants() {
    let findings = find_spoofs("payp@l.com");
    assert_eq!(findings, vec![SpoofFinding::new("paypal", "payp@l")]);

    let findings = find_spoofs("micro$oft-support.com");
    assert_eq!(findings, vec![SpoofFinding::new("microsoft", "micro$oft")]);
}

#[test]
fn test_display_format() {
    assert_eq!(
        SpoofFinding::new("paypal", "paypa1").to_string(),
        "paypal -> paypa1"
    );
}
