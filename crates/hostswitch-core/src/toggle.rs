//! Toggle engine: activates one server group and deactivates its siblings.

use std::sync::LazyLock;

use regex::Regex;

use crate::associations::build_associations;
use crate::classify::{is_disabled, parse_annotation};
use crate::error::{Result, ToggleError};

/// Leading comment marker plus at most one following space, keeping any
/// leading whitespace intact.
static UNCOMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)# ?").expect("invalid uncomment regex"));

/// Returns the enabled form of a line.
///
/// Strips a single leading marker plus one following space if present. A line
/// whose leading marker is also the delimiter of its own annotation (a tag
/// with no host content before it) is returned unchanged, since stripping
/// would destroy the annotation itself.
pub fn enable_line(line: &str) -> String {
    if !is_disabled(line) {
        return line.to_string();
    }
    let stripped = UNCOMMENT_REGEX.replace(line, "$1");
    if parse_annotation(&stripped).is_none() {
        return line.to_string();
    }
    stripped.into_owned()
}

/// Returns the disabled form of a line: `"# "` prepended unless the line is
/// already disabled.
pub fn disable_line(line: &str) -> String {
    if is_disabled(line) {
        line.to_string()
    } else {
        format!("# {line}")
    }
}

/// Computes the line-set mutation that activates `target_server_group` within
/// `target_project` and deactivates the project's other groups.
///
/// Lines outside `target_project`, and lines with no annotation, are returned
/// unchanged. The result satisfies: within the target project, the target
/// group has no disabled lines and every sibling group has no enabled lines.
/// Re-applying the same toggle is a no-op. Persistence is the caller's job.
pub fn toggle(lines: &[String], target_project: &str, target_server_group: &str) -> Vec<String> {
    let toggled: Vec<String> = lines
        .iter()
        .map(|line| match parse_annotation(line) {
            Some(annotation) if annotation.project == target_project => {
                if annotation.server_group == target_server_group {
                    enable_line(line)
                } else {
                    disable_line(line)
                }
            }
            _ => line.clone(),
        })
        .collect();
    tracing::debug!(
        project = target_project,
        server_group = target_server_group,
        lines = toggled.len(),
        "computed toggle"
    );
    toggled
}

/// Like [`toggle`], but fails when the target project or server group does
/// not occur anywhere in the given lines.
pub fn toggle_checked(
    lines: &[String],
    target_project: &str,
    target_server_group: &str,
) -> Result<Vec<String>> {
    let associations = build_associations(lines);
    let Some(project) = associations.project(target_project) else {
        return Err(ToggleError::UnknownProject {
            name: target_project.to_string(),
        });
    };
    if project.group(target_server_group).is_none() {
        return Err(ToggleError::UnknownServerGroup {
            project: target_project.to_string(),
            name: target_server_group.to_string(),
        });
    }
    Ok(toggle(lines, target_project, target_server_group))
}
