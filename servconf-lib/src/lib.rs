mod builders;
pub mod models;
pub mod normalize;

use regex::Regex;
use thiserror::Error;

pub use crate::builders::{IniDocumentBuilder, IniSectionBuilder};
use crate::models::{IniDocument, IniEntry, IniSection, KeyFold};

pub const ENTRY_KEY_GROUP_NAME: &str = "key";
pub const ENTRY_VALUE_GROUP_NAME: &str = "value";
pub const SECTION_NAME_GROUP_NAME: &str = "section_name";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Regex compilation error: {0}")]
    RegexCompilationError(#[from] regex::Error),
    #[error("The group {0} was not found in the provided regex")]
    RegexCaptureGroupNotFound(&'static str),
    #[error("line {line}: key-value pair found before any section header")]
    MissingSectionHeader { line: usize },
    #[error("line {line}: duplicate section [{name}]")]
    DuplicateSection { name: String, line: usize },
    #[error("line {line}: duplicate key {key:?} in section [{section}]")]
    DuplicateKey {
        section: String,
        key: String,
        line: usize,
    },
    #[error("line {line}: expected a section header or key=value pair, got {text:?}")]
    UnrecognizedLine { line: usize, text: String },
}

/// Parses INI text into a document. Lines are trimmed before classification,
/// so keys and values carry no surrounding whitespace. Blank lines and lines
/// starting with `#` or `;` are skipped; every key-value line must sit below
/// a section header.
pub fn parse(content: &str, key_fold: KeyFold) -> Result<IniDocument, ParseError> {
    let entry_regex = Regex::new(&format!(
        r"^(?P<{ENTRY_KEY_GROUP_NAME}>[^=]+?)\s*=\s*(?P<{ENTRY_VALUE_GROUP_NAME}>.*)$"
    ))?;
    let header_regex = Regex::new(&format!(r"^\[(?P<{SECTION_NAME_GROUP_NAME}>.+)\]$"))?;

    let mut document = IniDocument::new();
    let mut current: Option<IniSection> = None;

    for (index, line) in content.lines().map(str::trim).enumerate() {
        let line_number = index + 1;
        log::debug!("Parsing line {line_number}: {line}");

        if line.is_empty() || line.starts_with(['#', ';']) {
            continue;
        }

        // Headers are tried before key-value pairs: a bracketed name may
        // itself contain '='.
        if let Some(header_captures) = header_regex.captures(line) {
            let name = header_captures
                .name(SECTION_NAME_GROUP_NAME)
                .ok_or(ParseError::RegexCaptureGroupNotFound(SECTION_NAME_GROUP_NAME))?
                .as_str();

            if let Some(finished) = current.take() {
                log::debug!("Closing section [{}]", finished.name());
                document.push_section(finished);
            }

            if document.section(name).is_some() {
                return Err(ParseError::DuplicateSection {
                    name: name.to_owned(),
                    line: line_number,
                });
            }

            log::debug!("Opening section [{name}]");
            current = Some(IniSection::new(name, key_fold));
            continue;
        }

        if let Some(entry_captures) = entry_regex.captures(line) {
            let entry = IniEntry::try_from(entry_captures)?;

            let Some(section) = current.as_mut() else {
                return Err(ParseError::MissingSectionHeader { line: line_number });
            };

            if section.contains_key(&entry.key) {
                return Err(ParseError::DuplicateKey {
                    section: section.name().to_owned(),
                    key: entry.key,
                    line: line_number,
                });
            }

            section.push_entry(entry);
            continue;
        }

        return Err(ParseError::UnrecognizedLine {
            line: line_number,
            text: line.to_owned(),
        });
    }

    if let Some(finished) = current.take() {
        log::debug!("End of content reached. Closing section [{}]", finished.name());
        document.push_section(finished);
    }

    Ok(document)
}
