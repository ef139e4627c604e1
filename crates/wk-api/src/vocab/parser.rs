//! Upload text parser.
//!
//! Uploads are plain text, one entry per line:
//!
//! ```text
//! gehen - to walk - হাঁটা
//! essen - to eat - খাওয়া - Kapitel 3
//! ```
//!
//! Fields are separated by `" - "` (space, hyphen, space), so hyphenated
//! words like "Auto-Bahn" pass through intact. A fourth field names the
//! entry's section and overrides the batch default. Malformed lines are
//! skipped, not rejected.

use wk_db::models::NewVocabEntry;

/// Parse one upload batch. `default_section` applies to lines that do not
/// carry their own section field.
pub fn parse_upload(text: &str, default_section: Option<&str>) -> Vec<NewVocabEntry> {
    text.lines()
        .filter_map(|line| parse_line(line, default_section))
        .collect()
}

fn parse_line(line: &str, default_section: Option<&str>) -> Option<NewVocabEntry> {
    let fields: Vec<&str> = line.split(" - ").map(str::trim).collect();

    if fields.iter().any(|f| f.is_empty()) {
        return None;
    }

    match fields.as_slice() {
        [german, english, bengali] => Some(NewVocabEntry {
            german: (*german).to_string(),
            english: (*english).to_string(),
            bengali: (*bengali).to_string(),
            section: default_section.map(str::to_string),
        }),
        [german, english, bengali, section] => Some(NewVocabEntry {
            german: (*german).to_string(),
            english: (*english).to_string(),
            bengali: (*bengali).to_string(),
            section: Some((*section).to_string()),
        }),
        _ => None,
    }
}
