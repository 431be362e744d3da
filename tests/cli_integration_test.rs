use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

const BIB: &str = r#"@inproceedings{doe2023,
  title = {A Short Title},
  author = {Doe, Jane},
  booktitle = {ICML},
  year = {2023}
}

@article{old2015,
  title = {An Old Paper},
  author = {Roe, Richard},
  journal = {ICML},
  year = {2015}
}
"#;

#[test]
fn test_cli_writes_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("all_publications.bib");
    let venues = dir.path().join("venue_code.yaml");
    let output = dir.path().join("page.html");
    fs::write(&input, BIB).unwrap();
    fs::write(&venues, "ICML: ICML\n").unwrap();

    let mut cmd = Command::cargo_bin("bibhtml").unwrap();
    cmd.arg("-i").arg(&input).arg("-c").arg(&venues).arg("-o").arg(&output);
    cmd.assert().success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("[ICML]"));
    assert!(html.contains("A Short Title"));
    assert!(!html.contains("An Old Paper"));
}

#[test]
fn test_cli_min_year() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("all_publications.bib");
    let venues = dir.path().join("venue_code.yaml");
    let output = dir.path().join("page.html");
    fs::write(&input, BIB).unwrap();
    fs::write(&venues, "ICML: ICML\n").unwrap();

    let mut cmd = Command::cargo_bin("bibhtml").unwrap();
    cmd.arg("--input")
        .arg(&input)
        .arg("--venues")
        .arg(&venues)
        .arg("--output")
        .arg(&output)
        .arg("--min-year")
        .arg("2010");
    cmd.assert().success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("An Old Paper"));
    assert!(html.find("<h2>2023</h2>").unwrap() < html.find("<h2>2015</h2>").unwrap());
}

#[test]
fn test_cli_missing_venue_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("all_publications.bib");
    fs::write(&input, BIB).unwrap();

    let mut cmd = Command::cargo_bin("bibhtml").unwrap();
    cmd.arg("-i").arg(&input).arg("-c").arg(dir.path().join("missing.yaml"));
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Failed to load venue codes"));
}
