use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Display state derived from a group's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupState {
    /// Every line in the group is enabled.
    Active,
    /// The group has both enabled and disabled lines.
    Mixed,
    /// Every line in the group is disabled.
    Disabled,
}

/// Aggregate over all lines sharing one `(project, serverGroup)` annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerGroup {
    pub name: String,
    pub enabled_count: usize,
    pub disabled_count: usize,
}

impl ServerGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled_count: 0,
            disabled_count: 0,
        }
    }

    /// Total number of lines carrying this group's annotation.
    pub fn line_count(&self) -> usize {
        self.enabled_count + self.disabled_count
    }

    /// A group is active iff every one of its lines is enabled.
    pub fn is_active(&self) -> bool {
        self.enabled_count > 0 && self.disabled_count == 0
    }

    pub fn state(&self) -> GroupState {
        if self.is_active() {
            GroupState::Active
        } else if self.enabled_count == 0 {
            GroupState::Disabled
        } else {
            GroupState::Mixed
        }
    }
}

/// A named collection of mutually-exclusive server groups.
///
/// Group keys are unique; `BTreeMap` gives the lexicographic display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub groups: BTreeMap<String, ServerGroup>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: BTreeMap::new(),
        }
    }

    pub fn group(&self, name: &str) -> Option<&ServerGroup> {
        self.groups.get(name)
    }

    /// Names of active groups, in lexicographic order.
    pub fn active_group_names(&self) -> Vec<&str> {
        self.groups
            .values()
            .filter(|group| group.is_active())
            .map(|group| group.name.as_str())
            .collect()
    }
}

/// The full Project -> ServerGroup structure rebuilt on every read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Associations {
    pub projects: BTreeMap<String, Project>,
}

impl Associations {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    pub fn contains_group(&self, project: &str, server_group: &str) -> bool {
        self.project(project)
            .is_some_and(|p| p.groups.contains_key(server_group))
    }

    /// Sum of `enabled_count` over all groups in all projects.
    pub fn active_line_count(&self) -> usize {
        self.projects
            .values()
            .flat_map(|project| project.groups.values())
            .map(|group| group.enabled_count)
            .sum()
    }

    pub fn group_count(&self) -> usize {
        self.projects.values().map(|p| p.groups.len()).sum()
    }
}
