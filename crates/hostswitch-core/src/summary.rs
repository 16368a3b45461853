//! Length-bounded status summary derived from the association structure.

use hostswitch_model::Associations;

/// Hard limit imposed by the display surface.
pub const MAX_SUMMARY_LEN: usize = 63;

/// Placeholder shown when no project has a fully-active group.
pub const NO_ACTIVE_SERVERS: &str = "No Active Servers!";

const ELLIPSIS: &str = "...";

/// Formats the status summary with the default length bound.
pub fn format_summary(associations: &Associations, total_line_count: usize) -> String {
    bounded_summary(associations, total_line_count, MAX_SUMMARY_LEN)
}

/// Formats the status summary, truncated to at most `max_len` characters.
///
/// One line per project with at least one active group, `"{project}:
/// {active groups, comma-joined}"`, followed by a `"{active} of {total}
/// lines"` trailer. Projects and group names come out sorted because the
/// association structure iterates in name order.
pub fn bounded_summary(
    associations: &Associations,
    total_line_count: usize,
    max_len: usize,
) -> String {
    let active_text = associations
        .projects
        .values()
        .filter_map(|project| {
            let names = project.active_group_names();
            if names.is_empty() {
                None
            } else {
                Some(format!("{}: {}", project.name, names.join(", ")))
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = if active_text.is_empty() {
        NO_ACTIVE_SERVERS
    } else {
        &active_text
    };
    let text = format!(
        "{body}\n{active} of {total} lines",
        active = associations.active_line_count(),
        total = total_line_count,
    );
    truncate_summary(&text, max_len)
}

/// Applies the length contract: a summary of `max_len` characters or more is
/// cut to `max_len - 3` and extended with `"..."`, yielding exactly `max_len`
/// characters.
pub fn truncate_summary(text: &str, max_len: usize) -> String {
    if text.chars().count() >= max_len {
        let head: String = text
            .chars()
            .take(max_len.saturating_sub(ELLIPSIS.len()))
            .collect();
        format!("{head}{ELLIPSIS}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::associations::build_associations;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn single_active_project() {
        let lines = lines(&[
            "# 1.2.3.4 host1 # [Acme/Prod]",
            "# 1.2.3.5 host2 # [Acme/Prod]",
            "1.2.3.6 host3 # [Acme/Staging]",
        ]);
        let associations = build_associations(&lines);
        let summary = format_summary(&associations, lines.len());
        assert_eq!(summary, "Acme: Staging\n1 of 3 lines");
    }

    #[test]
    fn placeholder_when_nothing_active() {
        let lines = lines(&[
            "1.2.3.4 host1 # [Acme/Prod]",
            "# 1.2.3.5 host2 # [Acme/Prod]",
        ]);
        let associations = build_associations(&lines);
        let summary = format_summary(&associations, lines.len());
        assert_eq!(summary, "No Active Servers!\n1 of 2 lines");
    }

    #[test]
    fn empty_input_uses_placeholder() {
        let associations = build_associations(&[]);
        let summary = format_summary(&associations, 0);
        assert_eq!(summary, "No Active Servers!\n0 of 0 lines");
    }

    #[test]
    fn multiple_projects_and_groups_sorted() {
        let lines = lines(&[
            "1.2.3.4 a # [Zeta/One]",
            "1.2.3.5 b # [Acme/Staging]",
            "1.2.3.6 c # [Acme/Dev]",
        ]);
        let associations = build_associations(&lines);
        let summary = format_summary(&associations, lines.len());
        insta::assert_snapshot!(summary, @r"
        Acme: Dev, Staging
        Zeta: One
        3 of 3 lines
        ");
    }

    #[test]
    fn truncation_boundary() {
        let just_under: String = "x".repeat(62);
        assert_eq!(truncate_summary(&just_under, 63), just_under);

        let at_limit: String = "x".repeat(63);
        let truncated = truncate_summary(&at_limit, 63);
        assert_eq!(truncated.chars().count(), 63);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated, format!("{}...", "x".repeat(60)));

        let over: String = "x".repeat(64);
        let truncated = truncate_summary(&over, 63);
        assert_eq!(truncated.chars().count(), 63);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn long_summary_is_truncated() {
        let lines = lines(&[
            "1.2.3.4 a # [VeryLongProjectNameIndeed/EquallyLongServerGroupName]",
            "1.2.3.5 b # [VeryLongProjectNameIndeed/EquallyLongServerGroupName]",
        ]);
        let associations = build_associations(&lines);
        let summary = format_summary(&associations, lines.len());
        assert_eq!(summary.chars().count(), MAX_SUMMARY_LEN);
        assert!(summary.ends_with("..."));
    }
}
