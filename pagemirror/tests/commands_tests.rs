use pagemirror::commands::command_argument_builder;
use std::path::PathBuf;
use url::Url;

#[test]
fn test_parse_url_only() {
    let matches = command_argument_builder()
        .try_get_matches_from(["pagemirror", "https://ru.hexlet.io/courses"])
        .unwrap();

    let url = matches.get_one::<Url>("URL").unwrap();
    assert_eq!(url.as_str(), "https://ru.hexlet.io/courses");
    assert!(matches.get_one::<PathBuf>("output").is_none());
    assert_eq!(*matches.get_one::<u64>("timeout").unwrap(), 30);
    assert!(!matches.get_flag("quiet"));
}

#[test]
fn test_parse_output_directory() {
    let matches = command_argument_builder()
        .try_get_matches_from(["pagemirror", "https://example.com", "-o", "/tmp/pages"])
        .unwrap();

    assert_eq!(
        matches.get_one::<PathBuf>("output").unwrap(),
        &PathBuf::from("/tmp/pages")
    );
}

#[test]
fn test_parse_timeout_and_quiet() {
    let matches = command_argument_builder()
        .try_get_matches_from(["pagemirror", "https://example.com", "-t", "5", "-q"])
        .unwrap();

    assert_eq!(*matches.get_one::<u64>("timeout").unwrap(), 5);
    assert!(matches.get_flag("quiet"));
}

#[test]
fn test_url_is_required() {
    let result = command_argument_builder().try_get_matches_from(["pagemirror"]);
    assert!(result.is_err());
}

#[test]
fn test_rejects_invalid_url() {
    let result =
        command_argument_builder().try_get_matches_from(["pagemirror", "not a url"]);
    assert!(result.is_err());
}

#[test]
fn test_rejects_non_numeric_timeout() {
    let result = command_argument_builder().try_get_matches_from([
        "pagemirror",
        "https://example.com",
        "--timeout",
        "soon",
    ]);
    assert!(result.is_err());
}
