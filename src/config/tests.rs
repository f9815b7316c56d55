//! Unit tests for configuration loading and lookup.

use camino::{Utf8Path, Utf8PathBuf};
use rstest::rstest;
use tempfile::TempDir;

use super::{
    CONFIG_FILE_NAME, ConfigError, DEFAULT_SOURCEGRAPH_URL, SgConfig, SourcegraphInstance,
    config_path, resolve_config_path,
};
use crate::local::{HostRegistry, RepositoryIdentifier};

fn utf8_temp_dir(temp_dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).expect("temp dir should be UTF-8")
}

fn sample_config() -> SgConfig {
    SgConfig {
        sourcegraphs: vec![
            SourcegraphInstance {
                url: "https://sg.internal.example.com/".to_owned(),
                repos: vec!["github.com/acme/private".to_owned()],
            },
            SourcegraphInstance {
                url: "https://sg.other.example.com".to_owned(),
                repos: vec![
                    "github.com/acme/private".to_owned(),
                    "github.com/acme/tools".to_owned(),
                ],
            },
        ],
        hosts: Vec::new(),
    }
}

#[rstest]
#[case::first_listing_wins("github.com/acme/private", "https://sg.internal.example.com")]
#[case::second_instance("github.com/acme/tools", "https://sg.other.example.com")]
#[case::unlisted("github.com/acme/public", DEFAULT_SOURCEGRAPH_URL)]
fn base_url_lookup(#[case] repository: &str, #[case] expected: &str) {
    let config = sample_config();

    assert_eq!(
        config.base_url_for(&RepositoryIdentifier::from(repository)),
        expected
    );
}

#[test]
fn empty_config_uses_public_instance() {
    let config = SgConfig::default();

    assert_eq!(
        config.base_url_for(&RepositoryIdentifier::from("github.com/acme/widgets")),
        DEFAULT_SOURCEGRAPH_URL
    );
    assert_eq!(config.host_registry(), HostRegistry::default());
}

#[test]
fn parses_full_document() {
    let json = r#"{
        "sourcegraphs": [{"url": "https://sg.example.com", "repos": ["github.com/a/b"]}],
        "hosts": ["github.com", "gitlab.example.com"]
    }"#;

    let config = SgConfig::from_json(json, Utf8Path::new("cfg.json")).expect("should parse");

    assert_eq!(config.sourcegraphs.len(), 1);
    assert_eq!(config.hosts, vec!["github.com", "gitlab.example.com"]);
    assert_eq!(
        config.host_registry().supported_hosts(),
        "github.com, gitlab.example.com"
    );
}

#[test]
fn missing_keys_default_to_empty() {
    let config = SgConfig::from_json("{}", Utf8Path::new("cfg.json")).expect("should parse");

    assert_eq!(config, SgConfig::default());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let result = SgConfig::from_json("{\"sourcegraphs\": [", Utf8Path::new("cfg.json"));

    assert!(
        matches!(result, Err(ConfigError::Parse { ref path, .. }) if path == "cfg.json"),
        "expected Parse error, got {result:?}"
    );
}

#[test]
fn load_missing_file_yields_empty_config() {
    let temp_dir = TempDir::new().expect("should create temp directory");
    let path = utf8_temp_dir(&temp_dir).join(CONFIG_FILE_NAME);

    let config = SgConfig::load(&path).expect("missing file should not fail");

    assert_eq!(config, SgConfig::default());
}

#[test]
fn load_missing_directory_yields_empty_config() {
    let temp_dir = TempDir::new().expect("should create temp directory");
    let path = utf8_temp_dir(&temp_dir).join("nowhere").join(CONFIG_FILE_NAME);

    let config = SgConfig::load(&path).expect("missing directory should not fail");

    assert_eq!(config, SgConfig::default());
}

#[test]
fn load_reads_file_from_disk() {
    let temp_dir = TempDir::new().expect("should create temp directory");
    let path = utf8_temp_dir(&temp_dir).join(CONFIG_FILE_NAME);
    let expected = sample_config();
    std::fs::write(
        &path,
        serde_json::to_string(&expected).expect("should serialise config"),
    )
    .expect("should write config");

    let config = SgConfig::load(&path).expect("should load config");

    assert_eq!(config, expected);
}

#[test]
fn load_malformed_file_is_a_parse_error() {
    let temp_dir = TempDir::new().expect("should create temp directory");
    let path = utf8_temp_dir(&temp_dir).join(CONFIG_FILE_NAME);
    std::fs::write(&path, "not json").expect("should write config");

    let result = SgConfig::load(&path);

    assert!(
        matches!(result, Err(ConfigError::Parse { .. })),
        "expected Parse error, got {result:?}"
    );
}

#[rstest]
#[case::explicit_wins(Some("/etc/sg.json"), Some("/home/dev"), Some("/etc/sg.json"))]
#[case::explicit_without_home(Some("/etc/sg.json"), None, Some("/etc/sg.json"))]
#[case::home_default(None, Some("/home/dev"), Some("/home/dev/.sg-config"))]
#[case::nothing(None, None, None)]
fn config_path_resolution(
    #[case] explicit: Option<&str>,
    #[case] home: Option<&str>,
    #[case] expected: Option<&str>,
) {
    let result = resolve_config_path(explicit.map(Utf8Path::new), home);

    assert_eq!(result, expected.map(Utf8PathBuf::from));
}

#[test]
fn config_path_reads_home_from_environment() {
    let _guard = env_lock::lock_env([("HOME", Some("/home/tester"))]);

    let path = config_path(None).expect("HOME is set");

    assert_eq!(path, Utf8PathBuf::from("/home/tester/.sg-config"));
}

#[test]
fn unset_home_loads_empty_config() {
    let _guard = env_lock::lock_env([("HOME", None::<&str>)]);

    let path = config_path(None);
    let config = SgConfig::load_or_default(path.as_deref()).expect("should fall back to defaults");

    assert_eq!(path, None);
    assert_eq!(config, SgConfig::default());
}
