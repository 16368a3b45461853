use serde::{Deserialize, Serialize};

/// The trailing `[project/serverGroup]` tag carried by a managed line.
///
/// Both fields are stored trimmed of surrounding whitespace; the parser is
/// responsible for trimming before construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Annotation {
    /// Project name (e.g., "Acme").
    pub project: String,
    /// Server group name within the project (e.g., "Staging").
    pub server_group: String,
}

impl Annotation {
    pub fn new(project: impl Into<String>, server_group: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            server_group: server_group.into(),
        }
    }
}
