use log::info;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Code returned for venues missing from the mapping; such entries are not rendered
pub const SKIP_CODE: &str = "skip";

/// Default venue order used when the caller does not supply one
pub const DEFAULT_VENUE_PRIORITY: &[&str] = &[
    "NeurIPS", "ICML", "ICLR", "ACL", "EMNLP", "NAACL", "CVPR", "ICCV", "ECCV", "AAAI",
    "IJCAI", "KDD", "TACL", "JMLR", "TMLR", "TPAMI", "Nature", "Science", "arXiv",
];

/// Mapping from venue display name to its short code
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueCodes {
    codes: HashMap<String, String>,
}

impl VenueCodes {
    pub fn new(codes: HashMap<String, String>) -> Self {
        Self { codes }
    }

    /// Parse a YAML document mapping venue names to codes
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let codes: Option<HashMap<String, String>> = serde_yaml::from_str(content)?;
        Ok(Self::new(codes.unwrap_or_default()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let venue_codes = Self::from_yaml_str(&content)?;
        info!("Loaded {} venue codes from {:?}", venue_codes.codes.len(), path);
        Ok(venue_codes)
    }

    /// Code for a venue display name, or [`SKIP_CODE`] when it is not mapped
    pub fn lookup(&self, venue_name: &str) -> &str {
        self.codes.get(venue_name).map(String::as_str).unwrap_or(SKIP_CODE)
    }

    /// Every code an entry can be tagged with
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.values().map(String::as_str).filter(|code| *code != SKIP_CODE)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VenueCodes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(|(name, code)| (name.into(), code.into())).collect())
    }
}

/// Ordered list of venue codes; earlier codes sort first within a year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenuePriority {
    codes: Vec<String>,
}

impl VenuePriority {
    pub fn new(codes: Vec<String>) -> Self {
        Self { codes }
    }

    /// Sort rank of a code. Unlisted codes share the rank after the last listed one.
    pub fn rank(&self, code: &str) -> usize {
        self.codes.iter().position(|listed| listed == code).unwrap_or(self.codes.len())
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl Default for VenuePriority {
    fn default() -> Self {
        DEFAULT_VENUE_PRIORITY.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for VenuePriority {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
