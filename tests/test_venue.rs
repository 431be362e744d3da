use bibhtml::error::BibHtmlError;
use bibhtml::venue::{VenueCodes, VenuePriority, SKIP_CODE};

#[test]
fn test_venue_codes_from_yaml() {
    let yaml = r#"
ICML: ICML
"Advances in Neural Information Processing Systems": NeurIPS
"Some Workshop": skip
"#;
    let codes = VenueCodes::from_yaml_str(yaml).unwrap();

    assert_eq!(codes.lookup("ICML"), "ICML");
    assert_eq!(codes.lookup("Advances in Neural Information Processing Systems"), "NeurIPS");
    assert_eq!(codes.lookup("Some Workshop"), SKIP_CODE);
    assert_eq!(codes.lookup("Not Listed"), SKIP_CODE);

    let mut known: Vec<&str> = codes.codes().collect();
    known.sort();
    assert_eq!(known, vec!["ICML", "NeurIPS"]);
}

#[test]
fn test_empty_yaml_is_empty_mapping() {
    let codes = VenueCodes::from_yaml_str("").unwrap();
    assert_eq!(codes, VenueCodes::default());
    assert_eq!(codes.lookup("ICML"), SKIP_CODE);
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let result = VenueCodes::from_yaml_str("- just\n- a list\n");
    assert!(matches!(result, Err(BibHtmlError::Config(_))));
}

#[test]
fn test_priority_rank() {
    let priority: VenuePriority = ["NeurIPS", "ICML"].into_iter().collect();
    assert_eq!(priority.rank("NeurIPS"), 0);
    assert_eq!(priority.rank("ICML"), 1);
    assert_eq!(priority.rank("WS"), 2);
    assert_eq!(priority.rank("Other"), 2);
}

#[test]
fn test_default_priority_orders_neurips_before_icml() {
    let priority = VenuePriority::default();
    assert!(priority.rank("NeurIPS") < priority.rank("ICML"));
    assert_eq!(priority.rank("Unlisted"), priority.codes().count());
}
