//! End-to-end pipeline tests against a real directory tree

use std::fs;
use std::path::Path;
use svctab::{CatalogConfig, Generator, RealFileSystem};
use tempfile::TempDir;

const SERVICES_DIR: &str = "StreamingCommunity/Api/Service";
const OUTPUT_FILE: &str = ".github/doc/site.md";

fn add_service(base: &Path, name: &str, declaration: &str) {
    let dir = base.join(SERVICES_DIR).join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("__init__.py"), declaration).unwrap();
}

fn generator() -> Generator<RealFileSystem> {
    Generator::new(RealFileSystem::new())
}

fn read_output(base: &Path) -> String {
    fs::read_to_string(base.join(OUTPUT_FILE)).unwrap()
}

fn without_timestamp(document: &str) -> Vec<&str> {
    document
        .lines()
        .filter(|line| !line.starts_with("*Last updated:"))
        .collect()
}

#[test]
fn test_deprecated_service_is_excluded() {
    let temp = TempDir::new().unwrap();
    add_service(
        temp.path(),
        "amazon_prime",
        r#"
_stream_type = "HLS"
_drm = True
_deprecate = False
_maxResolution = "1080p"
_region = "IT"
"#,
    );
    add_service(temp.path(), "old_service", "_deprecate = True\n");

    let summary = generator().generate(temp.path()).unwrap();

    assert_eq!(summary.discovered, 2);
    assert_eq!(summary.deprecated_excluded, 1);
    assert_eq!(summary.rows, 1);

    let output = read_output(temp.path());
    let data_rows: Vec<&str> = output
        .lines()
        .skip(4)
        .take_while(|line| line.starts_with('|'))
        .collect();
    assert_eq!(data_rows.len(), 1);
    assert!(data_rows[0].contains("Amazon Prime"));
    assert!(data_rows[0].contains("✅"));
    assert!(data_rows[0].contains("1080p"));
    assert!(data_rows[0].contains("IT"));
    assert!(!output.contains("old_service"));
    assert!(!output.contains("Old Service"));
}

#[test]
fn test_declaration_without_attributes_yields_placeholder_row() {
    let temp = TempDir::new().unwrap();
    add_service(
        temp.path(),
        "mystery_site",
        "import os\n\nclass Service:\n    pass\n",
    );

    let summary = generator().generate(temp.path()).unwrap();

    assert_eq!(summary.rows, 1);
    let output = read_output(temp.path());
    assert!(output.contains("Mystery Site"));
    assert!(output.contains("N/A"));
    assert!(output.contains("❌"));
}

#[test]
fn test_zero_services_writes_no_output() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(SERVICES_DIR)).unwrap();

    let summary = generator().generate(temp.path()).unwrap();

    assert_eq!(summary.discovered, 0);
    assert_eq!(summary.output, None);
    assert!(!temp.path().join(OUTPUT_FILE).exists());
}

#[test]
fn test_missing_services_directory_writes_no_output() {
    let temp = TempDir::new().unwrap();

    let summary = generator().generate(temp.path()).unwrap();

    assert_eq!(summary.discovered, 0);
    assert!(!temp.path().join(OUTPUT_FILE).exists());
}

#[test]
fn test_reserved_prefix_directories_are_ignored() {
    let temp = TempDir::new().unwrap();
    add_service(temp.path(), "__pycache__", "_stream_type = \"HLS\"\n");
    add_service(temp.path(), "real_site", "_stream_type = \"HLS\"\n");

    let summary = generator().generate(temp.path()).unwrap();

    assert_eq!(summary.discovered, 1);
    assert_eq!(summary.rows, 1);
}

#[test]
fn test_repeated_runs_are_identical_modulo_timestamp() {
    let temp = TempDir::new().unwrap();
    add_service(temp.path(), "alpha", "_stream_type = \"HLS\"\n");
    add_service(temp.path(), "beta", "_region = \"EU\"\n");

    generator().generate(temp.path()).unwrap();
    let first = read_output(temp.path());

    generator().generate(temp.path()).unwrap();
    let second = read_output(temp.path());

    assert_eq!(without_timestamp(&first), without_timestamp(&second));
}

#[test]
fn test_rows_sorted_case_insensitively() {
    let temp = TempDir::new().unwrap();
    add_service(temp.path(), "Zebra", "_stream_type = \"HLS\"\n");
    add_service(temp.path(), "alpha", "_stream_type = \"HLS\"\n");
    add_service(temp.path(), "Midway", "_stream_type = \"HLS\"\n");

    generator().generate(temp.path()).unwrap();
    let output = read_output(temp.path());

    let alpha = output.find("Alpha").unwrap();
    let midway = output.find("Midway").unwrap();
    let zebra = output.find("Zebra").unwrap();
    assert!(alpha < midway);
    assert!(midway < zebra);
}

#[test]
fn test_table_lines_share_one_width() {
    let temp = TempDir::new().unwrap();
    add_service(
        temp.path(),
        "a_service_with_a_rather_long_name",
        "_maxResolution = \"4K Ultra HD\"\n_region = \"Worldwide\"\n",
    );
    add_service(temp.path(), "tiny", "_stream_type = \"MP4\"\n");

    generator().generate(temp.path()).unwrap();
    let output = read_output(temp.path());

    let widths: Vec<usize> = output
        .lines()
        .filter(|line| line.starts_with('|'))
        .map(|line| line.chars().count())
        .collect();
    assert!(widths.len() >= 4);
    assert!(widths.iter().all(|w| *w == widths[0]));
}

#[test]
fn test_timestamp_format() {
    let temp = TempDir::new().unwrap();
    add_service(temp.path(), "svc", "_stream_type = \"HLS\"\n");

    generator().generate(temp.path()).unwrap();
    let output = read_output(temp.path());

    let timestamp_line = output
        .lines()
        .find(|line| line.starts_with("*Last updated:"))
        .unwrap();
    // *Last updated: YYYY-MM-DD HH:MM:SS*
    let value = timestamp_line
        .strip_prefix("*Last updated: ")
        .unwrap()
        .strip_suffix('*')
        .unwrap();
    assert_eq!(value.len(), 19);
    assert_eq!(&value[4..5], "-");
    assert_eq!(&value[7..8], "-");
    assert_eq!(&value[10..11], " ");
    assert_eq!(&value[13..14], ":");
    assert_eq!(&value[16..17], ":");
}

#[test]
fn test_check_mode_drift_lifecycle() {
    let temp = TempDir::new().unwrap();
    add_service(temp.path(), "svc", "_stream_type = \"HLS\"\n");

    // Nothing committed yet
    let summary = generator().check(temp.path()).unwrap();
    assert!(summary.drift);
    assert!(!temp.path().join(OUTPUT_FILE).exists());

    // Freshly generated table is up to date
    generator().generate(temp.path()).unwrap();
    let summary = generator().check(temp.path()).unwrap();
    assert!(!summary.drift);

    // Catalog change makes the committed table stale
    add_service(temp.path(), "newcomer", "_stream_type = \"DASH\"\n");
    let summary = generator().check(temp.path()).unwrap();
    assert!(summary.drift);
}

#[test]
fn test_custom_output_path() {
    let temp = TempDir::new().unwrap();
    add_service(temp.path(), "svc", "_stream_type = \"HLS\"\n");

    let mut config = CatalogConfig::default();
    config.output_path = "docs/overview.md".into();
    let generator = Generator::with_config(RealFileSystem::new(), config);

    let summary = generator.generate(temp.path()).unwrap();

    assert_eq!(
        summary.output,
        Some(temp.path().join("docs/overview.md"))
    );
    assert!(temp.path().join("docs/overview.md").is_file());
}
