use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::bibtex::{
    strip_delimiters, BibEntryBuilder, Bibliography, BIBTEX_ENTRY_REGEX, BIBTEX_FIELD_REGEX,
};
use crate::error::{BibHtmlError, Result};

/// Serialization of the bibliography input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// BibTeX source (`@type{key, ...}` entries)
    Bibtex,
    /// JSON array of record objects with `ENTRYTYPE` and `ID` keys
    Json,
}

impl InputFormat {
    /// Guess the format from a file extension, defaulting to BibTeX
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Bibtex,
        }
    }
}

impl Bibliography {
    /// Parse BibTeX text into a Bibliography.
    ///
    /// Entries are recognised by their `@type{key,` header and a closing brace at
    /// the start of a line. Fields that do not match `name = value` are skipped.
    pub fn parse_bibtex(content: &str) -> Self {
        let mut bibliography = Self::new();

        for entry_caps in BIBTEX_ENTRY_REGEX.captures_iter(content) {
            let entry_type = &entry_caps[1];
            let key = entry_caps[2].trim();
            let body = &entry_caps[3];

            let mut builder = BibEntryBuilder::new(key, entry_type);
            for field_caps in BIBTEX_FIELD_REGEX.captures_iter(body) {
                let Some(value) = field_caps.get(2).or_else(|| field_caps.get(3)) else {
                    continue;
                };
                builder = builder.field(&field_caps[1], strip_delimiters(value.as_str()));
            }

            let entry = builder.build();
            debug!(
                "Parsed {} entry '{}' with {} fields",
                entry.entry_type,
                entry.key,
                entry.fields.len()
            );
            bibliography.push(entry);
        }

        bibliography
    }

    /// Parse a JSON array of record objects into a Bibliography.
    ///
    /// `ENTRYTYPE` and `ID` hold the entry type and key; every other member
    /// becomes a field. Non-string members are kept as structured values.
    pub fn parse_json(content: &str) -> Result<Self> {
        let records: Vec<Value> = serde_json::from_str(content)?;
        let mut bibliography = Self::new();

        for (index, record) in records.into_iter().enumerate() {
            let Value::Object(mut members) = record else {
                return Err(BibHtmlError::InvalidRecord {
                    index,
                    reason: "expected a JSON object".to_string(),
                });
            };

            let entry_type =
                take_string(&mut members, "ENTRYTYPE").unwrap_or_else(|| "misc".to_string());
            let key = take_string(&mut members, "ID").ok_or_else(|| BibHtmlError::InvalidRecord {
                index,
                reason: "missing string member 'ID'".to_string(),
            })?;

            bibliography.push(BibEntryBuilder::new(key, entry_type).fields(members).build());
        }

        Ok(bibliography)
    }

    /// Read and parse a bibliography file in the given format
    pub fn parse_file(path: &Path, format: InputFormat) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let bibliography = match format {
            InputFormat::Bibtex => Self::parse_bibtex(&content),
            InputFormat::Json => Self::parse_json(&content)?,
        };
        info!("Parsed {} entries from {:?}", bibliography.len(), path);
        Ok(bibliography)
    }
}

fn take_string(members: &mut serde_json::Map<String, Value>, name: &str) -> Option<String> {
    match members.remove(name) {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}
