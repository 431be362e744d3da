use once_cell::sync::Lazy;
use regex::Regex;

pub mod bibliography;
pub mod latex;
pub mod parser;

pub use bibliography::{BibEntry, BibEntryBuilder, Bibliography, FieldValue};
pub use latex::decode_latex;

// Commonly used regex patterns compiled once
pub(crate) static BIBTEX_ENTRY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)@(\w+)\{(.*?),\s*(.*?)\n\}").expect("Invalid BibTeX entry regex pattern")
});
// A value is a brace group with one nested level or a quoted string with escapes (group 2),
// or a bare token that ends the field (group 3)
pub(crate) static BIBTEX_FIELD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        concat!(
            r#"(?s)(\w+)\s*=\s*"#,
            r#"(?:(\{(?:[^{}]|\{[^{}]*\})*\}|"(?:[^"\\]|\\.)*")|([\w.:/-]+)\s*(?:,|\z))"#,
        ),
    )
    .expect("Invalid BibTeX field regex pattern")
});

/// Month macros accepted as bare field values
const MONTH_MACROS: [(&str, &str); 12] = [
    ("jan", "January"),
    ("feb", "February"),
    ("mar", "March"),
    ("apr", "April"),
    ("may", "May"),
    ("jun", "June"),
    ("jul", "July"),
    ("aug", "August"),
    ("sep", "September"),
    ("oct", "October"),
    ("nov", "November"),
    ("dec", "December"),
];

/// Remove exactly one pair of enclosing braces or quotes from a raw field value.
/// Bare values are returned untouched, except month macros which are expanded.
pub fn strip_delimiters(value: &str) -> String {
    if value.len() >= 2 {
        if value.starts_with('{') && value.ends_with('}') {
            return value[1..value.len() - 1].to_string();
        }
        if value.starts_with('"') && value.ends_with('"') {
            return value[1..value.len() - 1].to_string();
        }
    }
    expand_month_macro(value)
}

fn expand_month_macro(value: &str) -> String {
    let lower = value.to_lowercase();
    MONTH_MACROS
        .iter()
        .find(|(macro_name, _)| *macro_name == lower)
        .map(|(_, month)| month.to_string())
        .unwrap_or_else(|| value.to_string())
}
