use bibhtml::bibtex::parser::InputFormat;
use bibhtml::error::BibHtmlError;
use bibhtml::venue::VenueCodes;
use bibhtml::{convert_bib_to_html, ConvertOptions};
use std::fs;
use tempfile::tempdir;

const BIB: &str = r#"@inproceedings{doe2023,
  title = {A Short Title},
  author = {Doe, Jane and Smith, John Q.},
  booktitle = {ICML},
  year = {2023}
}
"#;

fn icml_options() -> ConvertOptions {
    ConvertOptions::new([("ICML", "ICML")].into_iter().collect::<VenueCodes>())
}

#[test]
fn test_convert_bib_to_html_writes_page() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("all_publications.bib");
    let output = dir.path().join("publications.html");
    fs::write(&input, BIB).unwrap();

    convert_bib_to_html(&input, InputFormat::Bibtex, &output, &icml_options()).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<h2>2023</h2>"));
    assert!(html.contains("Doe J, Smith J Q"));
}

#[test]
fn test_convert_json_records() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("records.json");
    let output = dir.path().join("publications.html");
    fs::write(
        &input,
        r#"[{"ENTRYTYPE": "inproceedings", "ID": "j1", "title": "From JSON",
             "booktitle": "ICML", "year": 2024}]"#,
    )
    .unwrap();

    convert_bib_to_html(&input, InputFormat::Json, &output, &icml_options()).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<h2>2024</h2>"));
    assert!(html.contains("From JSON"));
}

#[test]
fn test_invalid_author_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("records.json");
    let output = dir.path().join("publications.html");
    fs::write(
        &input,
        r#"[{"ID": "j1", "author": ["Doe, Jane"], "booktitle": "ICML", "year": "2024"}]"#,
    )
    .unwrap();

    let result = convert_bib_to_html(&input, InputFormat::Json, &output, &icml_options());

    assert!(matches!(result, Err(BibHtmlError::InvalidField { .. })));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = tempdir().unwrap();
    let result = convert_bib_to_html(
        &dir.path().join("missing.bib"),
        InputFormat::Bibtex,
        &dir.path().join("out.html"),
        &icml_options(),
    );
    assert!(matches!(result, Err(BibHtmlError::Io(_))));
}
