use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Value of a single bibliography field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Plain string, the only kind the BibTeX extractor produces
    Text(String),
    /// Non-string value coming from structured (JSON) record input
    Structured(Value),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Structured(_) => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => FieldValue::Text(text),
            Value::Number(number) => FieldValue::Text(number.to_string()),
            Value::Bool(flag) => FieldValue::Text(flag.to_string()),
            other => FieldValue::Structured(other),
        }
    }
}

/// A single bibliography record: entry type, citation key and its fields
#[derive(Debug, Clone, PartialEq)]
pub struct BibEntry {
    pub key: String,
    pub entry_type: String,
    pub fields: HashMap<String, FieldValue>,
}

/// Builder for BibEntry to allow for cleaner creation
pub struct BibEntryBuilder {
    key: String,
    entry_type: String,
    fields: HashMap<String, FieldValue>,
}

impl BibEntryBuilder {
    /// Create a new BibEntryBuilder with the required key and entry type
    pub fn new(key: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entry_type: entry_type.into(),
            fields: HashMap::new(),
        }
    }

    /// Add a field to the BibEntry. Field names are stored lowercase.
    pub fn field(mut self, field: impl AsRef<str>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.as_ref().to_lowercase(), value.into());
        self
    }

    /// Add multiple fields from an iterator of (field, value) pairs
    pub fn fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        for (field, value) in fields {
            self = self.field(field, value);
        }
        self
    }

    /// Build the BibEntry
    pub fn build(self) -> BibEntry {
        BibEntry {
            key: self.key,
            entry_type: self.entry_type,
            fields: self.fields,
        }
    }
}

impl BibEntry {
    /// Create a new BibEntry using the builder pattern
    pub fn builder(key: impl Into<String>, entry_type: impl Into<String>) -> BibEntryBuilder {
        BibEntryBuilder::new(key, entry_type)
    }

    /// Text value of a field. Structured values are not text and yield `None`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(FieldValue::as_text)
    }

    pub fn get_value(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }
}

/// Bibliography collection, kept in source order
#[derive(Default, Clone)]
pub struct Bibliography {
    entries: Vec<BibEntry>,
}

impl fmt::Debug for Bibliography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bibliography")
            .field("entries_count", &self.entries.len())
            .field("entries", &self.entries)
            .finish()
    }
}

impl Bibliography {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn push(&mut self, entry: BibEntry) {
        self.entries.push(entry);
    }

    /// First entry with the given citation key
    pub fn get(&self, key: &str) -> Option<&BibEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BibEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<BibEntry> for Bibliography {
    fn from_iter<T: IntoIterator<Item = BibEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
