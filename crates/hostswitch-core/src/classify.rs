//! Line classification: annotation extraction and enabled/disabled state.

use std::sync::LazyLock;

use regex::Regex;

use hostswitch_model::Annotation;

/// Comment marker used by hosts files.
pub const COMMENT_MARKER: char = '#';

/// Trailing `# [project/serverGroup]` tag. Project text excludes `/`,
/// server-group text excludes `]`; the tag may sit anywhere in the line.
static ANNOTATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\s*\[([^/]+)/([^\]]+)\]").expect("invalid annotation regex"));

/// Extracts the `(project, serverGroup)` annotation from a line, if present.
///
/// Both names are trimmed of surrounding whitespace. A line without a
/// well-formed tag yields `None` and is outside the switcher's concern;
/// malformed tags are not an error.
pub fn parse_annotation(line: &str) -> Option<Annotation> {
    ANNOTATION_REGEX
        .captures(line)
        .map(|caps| Annotation::new(caps[1].trim(), caps[2].trim()))
}

/// True iff the line's first non-whitespace character is the comment marker.
///
/// Distinct from the marker that introduces the bracketed tag: a line can
/// carry an annotation and still be enabled when the tag is not at the very
/// start of the line.
pub fn is_disabled(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trailing_annotation() {
        let annotation = parse_annotation("1.2.3.4 host1 # [Acme/Prod]").unwrap();
        assert_eq!(annotation.project, "Acme");
        assert_eq!(annotation.server_group, "Prod");
    }

    #[test]
    fn trims_names() {
        let annotation = parse_annotation("1.2.3.4 host1 #[ Acme / Prod ]").unwrap();
        assert_eq!(annotation.project, "Acme");
        assert_eq!(annotation.server_group, "Prod");
    }

    #[test]
    fn annotation_on_disabled_line() {
        let annotation = parse_annotation("# 1.2.3.4 host1 # [Acme/Prod]").unwrap();
        assert_eq!(annotation.project, "Acme");
    }

    #[test]
    fn malformed_tags_yield_none() {
        assert!(parse_annotation("1.2.3.4 host1").is_none());
        assert!(parse_annotation("1.2.3.4 host1 # [AcmeProd]").is_none());
        assert!(parse_annotation("1.2.3.4 host1 # [Acme/Prod").is_none());
        assert!(parse_annotation("1.2.3.4 host1 [Acme/Prod]").is_none());
    }

    #[test]
    fn disabled_checks_first_nonblank_character() {
        assert!(is_disabled("# 1.2.3.4 host1"));
        assert!(is_disabled("   # indented comment"));
        assert!(is_disabled("#[Acme/Prod]"));
        assert!(!is_disabled("1.2.3.4 host1 # [Acme/Prod]"));
        assert!(!is_disabled(""));
        assert!(!is_disabled("   "));
    }
}
