pub mod bibtex;
pub mod error;
pub mod format;
pub mod render;
pub mod venue;

use log::info;
use std::fs;
use std::path::Path;

use bibtex::parser::InputFormat;
use bibtex::Bibliography;
use error::Result;
pub use render::{render_publications, ConvertOptions, DEFAULT_MIN_YEAR};

/// Output file used when the caller does not name one
pub const DEFAULT_OUTPUT_FILE: &str = "publications.html";

/// Convert BibTeX source text to the HTML publication page
pub fn convert_bib_str(content: &str, options: &ConvertOptions) -> Result<String> {
    render_publications(&Bibliography::parse_bibtex(content), options)
}

/// Read a bibliography file, render it and write the page to `output_file`.
///
/// Nothing is written when rendering fails.
pub fn convert_bib_to_html(
    bib_file: &Path,
    format: InputFormat,
    output_file: &Path,
    options: &ConvertOptions,
) -> Result<()> {
    let bibliography = Bibliography::parse_file(bib_file, format)?;
    let html = render_publications(&bibliography, options)?;
    fs::write(output_file, html)?;
    info!("HTML publication list saved to {:?}", output_file);
    Ok(())
}
