use serde::{Deserialize, Serialize};

/// Enabled/disabled status of a detail-view record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Enabled,
    Disabled,
}

impl RecordStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordStatus::Enabled => "enabled",
            RecordStatus::Disabled => "disabled",
        }
    }
}

/// One row of the tabular detail view.
///
/// A projection over lines matching the strict server-record pattern; never
/// persisted back to the hosts file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    /// IP address token, kept opaque (no address semantics).
    pub ip_address: String,
    /// Hostname token.
    pub host_name: String,
    /// Project name from the annotation.
    pub project: String,
    /// Server group name from the annotation.
    pub server_group: String,
    pub status: RecordStatus,
}

/// Column keys for ordering the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    IpAddress,
    HostName,
    Project,
    ServerGroup,
    Status,
}
