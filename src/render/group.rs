use log::{debug, warn};
use std::collections::BTreeMap;

use crate::bibtex::{BibEntry, Bibliography};
use crate::error::Result;
use crate::format::{
    format_entry_authors, format_title, resolve, VENUE_LONG_NAME_SOURCES, VENUE_NAME_SOURCES,
};
use crate::venue::{VenueCodes, VenuePriority, SKIP_CODE};

/// Year key for entries without a `year` field
pub const UNKNOWN_YEAR: &str = "Unknown";

/// An entry together with its resolved venue
#[derive(Debug, Clone, PartialEq)]
pub struct Publication<'a> {
    pub entry: &'a BibEntry,
    /// Name matched against the venue mapping
    pub venue_name: &'a str,
    /// Name shown to the reader
    pub venue_long_name: &'a str,
    pub code: &'a str,
}

impl<'a> Publication<'a> {
    pub fn from_entry(entry: &'a BibEntry, venue_codes: &'a VenueCodes) -> Self {
        let venue_name = resolve(entry, VENUE_NAME_SOURCES).unwrap_or_default();
        let venue_long_name = resolve(entry, VENUE_LONG_NAME_SOURCES).unwrap_or_default();
        Self {
            entry,
            venue_name,
            venue_long_name,
            code: venue_codes.lookup(venue_name),
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.code == SKIP_CODE
    }
}

/// Publications of one year that passed the year floor
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup<'a> {
    pub year: i32,
    pub publications: Vec<Publication<'a>>,
}

/// Bucket key: the parsed year, or the trimmed text when it is not a number
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum YearKey {
    Year(i32),
    Other(String),
}

impl YearKey {
    /// Key for a `year` field value; a missing year becomes [`UNKNOWN_YEAR`]
    pub fn parse(year: Option<&str>) -> Self {
        let year = year.map(str::trim).unwrap_or(UNKNOWN_YEAR);
        match year.parse::<i32>() {
            Ok(number) => YearKey::Year(number),
            Err(_) => YearKey::Other(year.to_string()),
        }
    }
}

/// Bucket entries by year, keeping input order inside each bucket.
///
/// Spellings of the same number ("2023", "02023") share one bucket.
pub fn group_by_year<'a>(
    bibliography: &'a Bibliography,
    venue_codes: &'a VenueCodes,
) -> BTreeMap<YearKey, Vec<Publication<'a>>> {
    let mut buckets: BTreeMap<YearKey, Vec<Publication<'a>>> = BTreeMap::new();
    for entry in bibliography.iter() {
        buckets
            .entry(YearKey::parse(entry.get("year")))
            .or_default()
            .push(Publication::from_entry(entry, venue_codes));
    }
    buckets
}

/// Keep the numeric years at or above `min_year`, newest first.
///
/// Non-numeric buckets (including [`UNKNOWN_YEAR`]) are dropped with a warning.
pub fn select_years<'a>(
    buckets: BTreeMap<YearKey, Vec<Publication<'a>>>,
    min_year: i32,
) -> Vec<YearGroup<'a>> {
    buckets
        .into_iter()
        .rev()
        .filter_map(|(key, publications)| match key {
            YearKey::Year(year) if year >= min_year => Some(YearGroup { year, publications }),
            YearKey::Year(year) => {
                let count = publications.len();
                debug!("Omitting {} entries from {} (before {})", count, year, min_year);
                None
            }
            YearKey::Other(text) => {
                warn!("Omitting {} entries with non-numeric year '{}'", publications.len(), text);
                None
            }
        })
        .collect()
}

/// Stable sort by the rank of each venue code in the priority list
pub fn sort_by_priority(publications: &mut [Publication<'_>], priority: &VenuePriority) {
    publications.sort_by_key(|publication| priority.rank(publication.code));
}

/// Drop publications whose venue has no code, logging each one.
///
/// Authors are validated for every publication, skipped or not.
pub fn retain_rendered<'a>(publications: Vec<Publication<'a>>) -> Result<Vec<Publication<'a>>> {
    let mut rendered = Vec::with_capacity(publications.len());
    for publication in publications {
        let authors = format_entry_authors(publication.entry)?;
        if publication.is_skipped() {
            warn!(
                "Skipping entry '{}' at venue '{}': title '{}', authors '{}'",
                publication.entry.key,
                publication.venue_name,
                format_title(publication.entry),
                authors,
            );
        } else {
            rendered.push(publication);
        }
    }
    Ok(rendered)
}
