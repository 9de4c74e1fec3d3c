use std::fs;
use std::path::Path;

use tagnamer::{run, Config, Error};

fn config(files: &[&Path], output_dir: &Path, tags: &[&str]) -> Config {
    Config {
        files: files.iter().map(|p| p.to_path_buf()).collect(),
        output_dir: output_dir.to_path_buf(),
        tags_to_treat: tags.iter().map(|t| t.to_string()).collect(),
        treat_tags_without_name_attribute: true,
        start_counting_from: 1,
    }
}

#[test]
fn test_run_writes_converted_copies() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.xml");
    fs::write(&input, r#"<root><image/><image/></root>"#).unwrap();
    let output_dir = dir.path().join("out");

    run(&config(&[&input], &output_dir, &["image"])).unwrap();

    assert_eq!(
        fs::read_to_string(output_dir.join("report.xml")).unwrap(),
        r#"<root><image name="image 1"/><image name="image 2"/></root>"#
    );
    // the input file is untouched
    assert_eq!(
        fs::read_to_string(&input).unwrap(),
        r#"<root><image/><image/></root>"#
    );
}

#[test]
fn test_run_counters_reset_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.xml");
    let second = dir.path().join("second.xml");
    fs::write(&first, r#"<root><image/></root>"#).unwrap();
    fs::write(&second, r#"<root><image/></root>"#).unwrap();
    let output_dir = dir.path().join("out");

    run(&config(&[&first, &second], &output_dir, &["image"])).unwrap();

    for name in ["first.xml", "second.xml"] {
        assert_eq!(
            fs::read_to_string(output_dir.join(name)).unwrap(),
            r#"<root><image name="image 1"/></root>"#
        );
    }
}

#[test]
fn test_run_creates_nested_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.xml");
    fs::write(&input, r#"<root/>"#).unwrap();
    let output_dir = dir.path().join("deeply").join("nested").join("out");

    run(&config(&[&input], &output_dir, &["image"])).unwrap();
    assert!(output_dir.join("a.xml").exists());
}

#[test]
fn test_run_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.xml");
    fs::write(&input, r#"<root><image/></root>"#).unwrap();
    let output_dir = dir.path().join("out");
    fs::create_dir_all(&output_dir).unwrap();
    fs::write(output_dir.join("a.xml"), "stale").unwrap();

    run(&config(&[&input], &output_dir, &["image"])).unwrap();
    assert_eq!(
        fs::read_to_string(output_dir.join("a.xml")).unwrap(),
        r#"<root><image name="image 1"/></root>"#
    );
}

#[test]
fn test_run_aborts_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.xml");
    let after = dir.path().join("after.xml");
    fs::write(&after, r#"<root/>"#).unwrap();
    let output_dir = dir.path().join("out");

    let err = run(&config(&[&missing, &after], &output_dir, &["image"])).unwrap_err();
    match err {
        Error::File { path, source } => {
            assert_eq!(path, missing);
            assert!(matches!(*source, Error::Io(_)));
        }
        _ => unreachable!(),
    }
    // the run stopped before the second file
    assert!(!output_dir.join("after.xml").exists());
}

#[test]
fn test_run_aborts_on_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.xml");
    fs::write(&bad, r#"<root><unclosed>"#).unwrap();
    let output_dir = dir.path().join("out");

    let err = run(&config(&[&bad], &output_dir, &["image"])).unwrap_err();
    match err {
        Error::File { path, .. } => assert_eq!(path, bad),
        _ => unreachable!(),
    }
}

#[test]
fn test_run_error_message_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.xml");
    let output_dir = dir.path().join("out");

    let err = run(&config(&[&missing], &output_dir, &["image"])).unwrap_err();
    assert!(err.to_string().contains("missing.xml"));
}

#[test]
fn test_config_from_toml() {
    let toml = r#"
        files = ["a.xml", "b.xml"]
        output_dir = "out"
        tags_to_treat = ["crosstab", "image"]
    "#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.files.len(), 2);
    assert!(!config.treat_tags_without_name_attribute);
    assert_eq!(config.start_counting_from, 1);
}
