use log::debug;

pub mod group;
pub mod html;

pub use group::{
    group_by_year, retain_rendered, select_years, sort_by_priority, Publication, YearGroup, YearKey,
};
pub use html::{escape_html, render_entry, Layout, PageBuilder};

use crate::bibtex::Bibliography;
use crate::error::Result;
use crate::venue::{VenueCodes, VenuePriority};

/// Earliest year rendered when the caller does not choose one
pub const DEFAULT_MIN_YEAR: i32 = 2020;

/// Everything that controls how a bibliography becomes a page
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub venue_codes: VenueCodes,
    pub priority: VenuePriority,
    pub min_year: i32,
}

impl ConvertOptions {
    pub fn new(venue_codes: VenueCodes) -> Self {
        Self {
            venue_codes,
            priority: VenuePriority::default(),
            min_year: DEFAULT_MIN_YEAR,
        }
    }

    pub fn with_priority(mut self, priority: VenuePriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_min_year(mut self, min_year: i32) -> Self {
        self.min_year = min_year;
        self
    }

    /// Layout wide enough for every code in the priority list and the mapping
    pub fn layout(&self) -> Layout {
        Layout::new(self.priority.codes().chain(self.venue_codes.codes()))
    }
}

/// Render a bibliography as an HTML publication list: group, sort, filter, render
pub fn render_publications(
    bibliography: &Bibliography,
    options: &ConvertOptions,
) -> Result<String> {
    let layout = options.layout();
    let buckets = group_by_year(bibliography, &options.venue_codes);
    let mut page = PageBuilder::new();
    let mut rendered = 0;

    for mut group in select_years(buckets, options.min_year) {
        sort_by_priority(&mut group.publications, &options.priority);
        let entries = retain_rendered(group.publications)?
            .iter()
            .map(|publication| render_entry(publication, &layout))
            .collect::<Result<Vec<_>>>()?;
        rendered += entries.len();
        page = page.year_section(group.year, entries);
    }

    debug!("Rendered {} of {} entries", rendered, bibliography.len());
    Ok(page.build())
}
