/// Outcome of the header pass: the content as given, or a corrected copy
/// with the header line inserted. The caller decides whether the corrected
/// form needs to be written back to disk.
#[derive(Debug, PartialEq, Eq)]
pub enum Normalized<'content> {
    Intact(&'content str),
    Repaired(String),
}

impl Normalized<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Normalized::Intact(content) => content,
            Normalized::Repaired(content) => content,
        }
    }

    pub fn was_repaired(&self) -> bool {
        matches!(self, Normalized::Repaired(_))
    }
}

/// Guarantees the content opens with the line `[section_name]`.
///
/// The check is exact. A first line that differs in whitespace, case, or
/// line ending does not count as the header and gets a fresh header line
/// inserted above it, leaving the original content byte-for-byte intact
/// below. Empty content is repaired to the bare header line.
pub fn ensure_header<'content>(content: &'content str, section_name: &str) -> Normalized<'content> {
    let header_line = format!("[{section_name}]\n");

    if content.starts_with(&header_line) {
        return Normalized::Intact(content);
    }

    log::debug!("Content does not start with [{section_name}], inserting the header line");

    Normalized::Repaired(format!("{header_line}{content}"))
}

#[cfg(test)]
mod tests {
    use crate::normalize::{Normalized, ensure_header};

    #[test]
    fn content_with_header_is_intact() {
        let content = "[ServerConfig]\nPort=16261\n";

        let normalized = ensure_header(content, "ServerConfig");

        assert!(!normalized.was_repaired());
        assert_eq!(normalized.as_str(), content);
    }

    #[test]
    fn missing_header_is_inserted_above_original_content() {
        let normalized = ensure_header("Foo=Bar\n", "ServerConfig");

        assert!(normalized.was_repaired());
        assert_eq!(normalized.as_str(), "[ServerConfig]\nFoo=Bar\n");
    }

    #[test]
    fn second_pass_changes_nothing() {
        let first = ensure_header("Port=16261\n", "ServerConfig");
        let repaired = first.as_str().to_owned();

        let second = ensure_header(&repaired, "ServerConfig");

        assert_eq!(second, Normalized::Intact(repaired.as_str()));
    }

    #[test]
    fn empty_content_becomes_the_bare_header() {
        let normalized = ensure_header("", "ServerConfig");

        assert!(normalized.was_repaired());
        assert_eq!(normalized.as_str(), "[ServerConfig]\n");
    }

    #[test]
    fn indented_header_does_not_count() {
        let normalized = ensure_header(" [ServerConfig]\nPort=1\n", "ServerConfig");

        assert_eq!(normalized.as_str(), "[ServerConfig]\n [ServerConfig]\nPort=1\n");
    }

    #[test]
    fn crlf_header_does_not_count() {
        let normalized = ensure_header("[ServerConfig]\r\nPort=1\r\n", "ServerConfig");

        assert!(normalized.was_repaired());
    }

    #[test]
    fn header_without_trailing_newline_does_not_count() {
        let normalized = ensure_header("[ServerConfig]", "ServerConfig");

        assert_eq!(normalized.as_str(), "[ServerConfig]\n[ServerConfig]");
    }
}
