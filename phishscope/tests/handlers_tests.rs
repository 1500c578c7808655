use phishscope::command_argument_builder;
use phishscope::handlers::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_parse_url_line_with_scheme() {
    let result = parse_url_line("http://example.com");
    assert_eq!(result, Some("http://example.com".to_string()));
}

#[test]
fn test_parse_url_line_without_scheme() {
    let result = parse_url_line("example.com");
    assert_eq!(result, Some("https://example.com".to_string()));
}

#[test]
fn test_parse_url_line_invalid() {
    assert_eq!(parse_url_line("not a valid url!!!"), None);
    assert_eq!(parse_url_line("https://"), None);
}

#[test]
fn test_load_urls_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "https://example.com")?;
    writeln!(temp_file, "paypa1-login.com")?;
    writeln!(temp_file)?; // Empty line
    writeln!(temp_file, "# reported by a user")?;
    writeln!(temp_file, "  http://api.example.com  ")?;

    let path = PathBuf::from(temp_file.path());
    let urls = load_urls_from_file(&path)?;

    assert_eq!(
        urls,
        vec![
            "https://example.com".to_string(),
            "https://paypa1-login.com".to_string(),
            "http://api.example.com".to_string(),
        ]
    );

    Ok(())
}

#[test]
fn test_load_urls_from_file_empty() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file).unwrap();
    writeln!(temp_file, "   ").unwrap();
    writeln!(temp_file, "# only a comment").unwrap();

    let result = load_urls_from_file(temp_file.path());

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("No valid URLs"));
}

#[test]
fn test_load_urls_from_missing_file() {
    let result = load_urls_from_file(std::path::Path::new("/nonexistent/urls.txt"));
    assert!(result.unwrap_err().to_string().contains("Failed to read hosts file"));
}

#[test]
fn test_load_classifier_without_path() {
    assert!(load_classifier(None).is_none());
}

#[test]
fn test_load_classifier_bad_file_is_ignored() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{{ broken").unwrap();
    let path = temp_file.path().display().to_string();

    assert!(load_classifier(Some(&path)).is_none());
    assert!(load_classifier(Some(&"/nonexistent/model.json".to_string())).is_none());
}

#[test]
fn test_load_classifier_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, r#"{{ "bias": 2.0, "weights": {{}} }}"#).unwrap();
    let path = temp_file.path().display().to_string();

    let model = load_classifier(Some(&path)).expect("model should load");
    let p = model.predict_probability("https://example.com").unwrap();
    assert!(p > 0.8);
}

#[test]
fn test_check_command_parsing() {
    let matches = command_argument_builder()
        .try_get_matches_from([
            "phishscope",
            "check",
            "qalan.kz",
            "--trust",
            "corp.example",
            "--trust",
            "intranet.example",
            "-f",
            "json",
        ])
        .unwrap();

    let (name, sub) = matches.subcommand().unwrap();
    assert_eq!(name, "check");
    assert_eq!(sub.get_one::<String>("URL").unwrap(), "qalan.kz");
    assert_eq!(sub.get_one::<String>("format").unwrap(), "json");
    assert_eq!(*sub.get_one::<u64>("timeout").unwrap(), 10);
    let trusted: Vec<&String> = sub.get_many::<String>("trust").unwrap().collect();
    assert_eq!(trusted.len(), 2);
}

#[test]
fn test_check_command_rejects_zero_timeout() {
    let result = command_argument_builder().try_get_matches_from([
        "phishscope",
        "check",
        "example.com",
        "--timeout",
        "0",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_batch_command_requires_hosts_file() {
    let result = command_argument_builder().try_get_matches_from(["phishscope", "batch"]);
    assert!(result.is_err());

    let matches = command_argument_builder()
        .try_get_matches_from(["phishscope", "batch", "-H", "urls.txt", "-t", "4"])
        .unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    assert_eq!(*sub.get_one::<usize>("threads").unwrap(), 4);
}
