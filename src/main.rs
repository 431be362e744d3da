use anyhow::{Context, Result};
use bibhtml::bibtex::parser::InputFormat;
use bibhtml::venue::{VenueCodes, VenuePriority};
use bibhtml::{convert_bib_to_html, ConvertOptions, DEFAULT_MIN_YEAR, DEFAULT_OUTPUT_FILE};
use clap::Parser;
use log::debug;
use std::path::PathBuf;

/// CLI app for turning a BibTeX bibliography into an HTML publication list
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bibliography file (BibTeX, or JSON records)
    #[arg(short, long, default_value = "all_publications.bib")]
    input: PathBuf,
    /// YAML file mapping venue names to short codes
    #[arg(short = 'c', long, default_value = "venue_code.yaml")]
    venues: PathBuf,
    /// Output HTML file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
    /// Earliest publication year to include
    #[arg(short, long, default_value_t = DEFAULT_MIN_YEAR)]
    min_year: i32,
    /// Venue codes in display order within a year (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    priority: Vec<String>,
    /// Input format (guessed from the file extension by default)
    #[arg(short, long, value_enum)]
    format: Option<InputFormat>,
    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Configure logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let venue_codes = VenueCodes::load(&args.venues)
        .with_context(|| format!("Failed to load venue codes from {:?}", args.venues))?;

    let mut options = ConvertOptions::new(venue_codes).with_min_year(args.min_year);
    if !args.priority.is_empty() {
        let priority: VenuePriority = args.priority.iter().map(|code| code.trim()).collect();
        options = options.with_priority(priority);
    }
    debug!("Venue priority: {:?}", options.priority);

    let format = args.format.unwrap_or_else(|| InputFormat::from_path(&args.input));
    convert_bib_to_html(&args.input, format, &args.output, &options)
        .with_context(|| format!("Failed to convert {:?} to {:?}", args.input, args.output))?;

    Ok(())
}
