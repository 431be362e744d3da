use crate::bibtex::{decode_latex, BibEntry, FieldValue};
use crate::error::{BibHtmlError, Result};

/// Character budget for one display line of a title or author list
pub const LINE_WIDTH: usize = 100;

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// One source in a fallback chain for a display field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Field(&'static str),
    Literal(&'static str),
}

pub const TITLE_SOURCES: &[Fallback] = &[Fallback::Field("title"), Fallback::Literal("Untitled")];

/// Name used to look up the venue code
pub const VENUE_NAME_SOURCES: &[Fallback] = &[
    Fallback::Field("booktitle"),
    Fallback::Field("journal"),
    Fallback::Literal("Unknown Venue"),
];

/// Name shown to the reader
pub const VENUE_LONG_NAME_SOURCES: &[Fallback] = &[
    Fallback::Field("journal"),
    Fallback::Field("booktitle"),
    Fallback::Literal("Unknown Venue"),
];

/// Evaluate a fallback chain left to right; the first present text value wins
pub fn resolve<'a>(entry: &'a BibEntry, sources: &[Fallback]) -> Option<&'a str> {
    sources.iter().find_map(|source| match *source {
        Fallback::Field(name) => entry.get(name),
        Fallback::Literal(text) => Some(text),
    })
}

/// Display title with LaTeX markup decoded
pub fn format_title(entry: &BibEntry) -> String {
    resolve(entry, TITLE_SOURCES).map(decode_latex).unwrap_or_default()
}

/// Display author list for an entry, e.g. `"Doe J, Smith J Q"`.
///
/// Fails when the author field exists but is not a plain string.
pub fn format_entry_authors(entry: &BibEntry) -> Result<String> {
    match entry.get_value("author") {
        None => Ok(UNKNOWN_AUTHOR.to_string()),
        Some(FieldValue::Text(authors)) => Ok(format_authors(&decode_latex(authors))),
        Some(FieldValue::Structured(_)) => Err(BibHtmlError::InvalidField {
            key: entry.key.clone(),
            field: "author".to_string(),
        }),
    }
}

/// Format an `and`-separated author list, keeping the original order
pub fn format_authors(authors: &str) -> String {
    authors
        .split(" and ")
        .map(format_author)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Turn `"Last, First Middle"` into `"Last F M"`; any other shape is returned trimmed
pub fn format_author(author: &str) -> String {
    let author = author.trim();
    let parts: Vec<&str> = author.split(", ").collect();

    match parts.as_slice() {
        [last, given] => {
            let mut name = last.trim().to_string();
            for initial in given.split_whitespace().filter_map(|word| word.chars().next()) {
                name.push(' ');
                name.push(initial);
            }
            name
        }
        _ => author.to_string(),
    }
}

/// Greedily pack whole words into chunks of at most `width` characters.
///
/// Words are never split, so a word longer than `width` gets a chunk of its own.
pub fn wrap_text(text: &str, width: usize) -> Result<Vec<String>> {
    if width == 0 {
        return Err(BibHtmlError::InvalidWrapWidth);
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    Ok(chunks)
}
