//! Aggregation of classified lines into projects and server groups.

use std::collections::BTreeMap;

use hostswitch_model::{Annotation, Associations, Project, ServerGroup};

use crate::classify::{is_disabled, parse_annotation};

/// Builds the Project -> ServerGroup structure from the full line sequence.
///
/// Non-annotated lines are skipped; multiple lines with the same annotation
/// accumulate into one group's counts. The structure is recomputed from
/// scratch on every call, so it always reflects the given lines exactly.
pub fn build_associations(lines: &[String]) -> Associations {
    let mut projects: BTreeMap<String, Project> = BTreeMap::new();

    for line in lines {
        let Some(Annotation {
            project,
            server_group,
        }) = parse_annotation(line)
        else {
            continue;
        };

        let group = projects
            .entry(project.clone())
            .or_insert_with(|| Project::new(project))
            .groups
            .entry(server_group.clone())
            .or_insert_with(|| ServerGroup::new(server_group));

        if is_disabled(line) {
            group.disabled_count += 1;
        } else {
            group.enabled_count += 1;
        }
    }

    let associations = Associations { projects };
    tracing::debug!(
        projects = associations.projects.len(),
        groups = associations.group_count(),
        "built associations"
    );
    associations
}
