use crate::error::Result;
use crate::format::{format_entry_authors, format_title, wrap_text, LINE_WIDTH};
use crate::render::group::Publication;

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Publications</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; }
        h1 { text-align: left; }
        code { font-family: monospace; }
        strong { font-weight: bold; }
        em { font-style: italic; }
        a { margin-right: 10px; text-decoration: none; color: blue; }
    </style>
</head>
<body>
"#;

const DOCUMENT_TAIL: &str = "</body>\n</html>";

const NBSP: &str = "&nbsp;";

/// Link fields rendered below an entry, in display order
const LINK_FIELDS: [(&str, &str); 3] = [("url", "PAPER"), ("arxiv", "ARXIV"), ("code", "CODE")];

/// Escape text for use in HTML content and single- or double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Column layout shared by every entry on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Length of the longest known venue code
    pub code_width: usize,
}

impl Layout {
    pub fn new<'a>(known_codes: impl IntoIterator<Item = &'a str>) -> Self {
        let code_width = known_codes
            .into_iter()
            .map(|code| code.chars().count())
            .max()
            .unwrap_or(0);
        Self { code_width }
    }

    /// `[CODE]` padded so that every tag occupies the same monospace width
    pub fn tag(&self, code: &str) -> String {
        let padding = self.code_width.saturating_sub(code.chars().count()) + 1;
        format!("<code>[{}]{}</code>", escape_html(code), NBSP.repeat(padding))
    }

    /// Blank prefix aligning continuation lines with the text after the tag
    pub fn spacer(&self) -> String {
        format!("<code>{}</code>", NBSP.repeat(self.code_width + 3))
    }
}

/// Render the block for a single publication
pub fn render_entry(publication: &Publication<'_>, layout: &Layout) -> Result<String> {
    let entry = publication.entry;
    let title_lines = wrap_text(&format_title(entry), LINE_WIDTH)?;
    let author_lines = wrap_text(&format_entry_authors(entry)?, LINE_WIDTH)?;
    let spacer = layout.spacer();

    let mut lines = vec![format!(
        "    {}<strong>{}</strong><br>\n",
        layout.tag(publication.code),
        escape_html(title_lines.first().map(String::as_str).unwrap_or_default())
    )];
    if let Some(second) = title_lines.get(1) {
        lines.push(format!("    {}<strong>{}</strong><br>\n", spacer, escape_html(second)));
    }

    for author_line in author_lines.iter().take(2) {
        lines.push(format!("    {}{}<br>\n", spacer, escape_html(author_line)));
    }

    let month = entry.get("month").unwrap_or_default();
    let date = format!("{} {}", month, entry.get("year").unwrap_or_default());
    lines.push(format!(
        "    {}<em>{} {}</em><br>\n",
        spacer,
        escape_html(publication.venue_long_name),
        escape_html(date.trim())
    ));

    let links: Vec<String> = LINK_FIELDS
        .iter()
        .filter_map(|(field, label)| {
            let href = entry.get(field).map(str::trim).filter(|href| !href.is_empty())?;
            Some(format!("<a href='{}' target='_blank'>{}</a>", escape_html(href), label))
        })
        .collect();
    if !links.is_empty() {
        lines.push(format!("    {}{}<br>\n", spacer, links.join(" | ")));
    }

    Ok(format!("<div style='margin-bottom: 5px;'>\n{}</div>\n", lines.concat()))
}

/// Assembles the page from independently rendered fragments
#[derive(Debug, Clone)]
pub struct PageBuilder {
    fragments: Vec<String>,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            fragments: vec![DOCUMENT_HEAD.to_string()],
        }
    }

    /// Append a year header followed by its entry blocks. Years without entries are left out.
    pub fn year_section(mut self, year: i32, entries: Vec<String>) -> Self {
        if entries.is_empty() {
            return self;
        }
        self.fragments
            .push(format!("<div style='margin-bottom: 10px;'> <h2>{}</h2></div>\n", year));
        self.fragments.extend(entries);
        self
    }

    pub fn build(mut self) -> String {
        self.fragments.push(DOCUMENT_TAIL.to_string());
        self.fragments.concat()
    }
}
