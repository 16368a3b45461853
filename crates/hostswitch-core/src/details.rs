//! Strict server-record extraction for the tabular detail view.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use hostswitch_model::{RecordStatus, ServerRecord, SortKey};

/// Full record shape: optional leading marker, IPv4-shaped token, hostname
/// token, then the usual bracketed annotation.
static SERVER_RECORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(#?)\s*((?:\d+\.){3}\d+)\s+(\S+)\s+#\s*\[([^/]+)/([^\]]+)\]")
        .expect("invalid server record regex")
});

/// Projects the lines matching the strict record pattern into `ServerRecord`s.
///
/// Non-matching lines are dropped from the view only; they stay untouched in
/// storage. Input order is preserved.
pub fn extract_records(lines: &[String]) -> Vec<ServerRecord> {
    lines.iter().filter_map(|line| parse_record(line)).collect()
}

fn parse_record(line: &str) -> Option<ServerRecord> {
    let caps = SERVER_RECORD_REGEX.captures(line)?;
    let status = if &caps[1] == "#" {
        RecordStatus::Disabled
    } else {
        RecordStatus::Enabled
    };
    Some(ServerRecord {
        ip_address: caps[2].to_string(),
        host_name: caps[3].to_string(),
        project: caps[4].trim().to_string(),
        server_group: caps[5].trim().to_string(),
        status,
    })
}

/// Orders records by one enumerated column key. Stable, so equal keys keep
/// their input order. IP addresses compare as opaque strings.
pub fn sort_records(records: &mut [ServerRecord], key: SortKey, descending: bool) {
    records.sort_by(|a, b| {
        let ordering = compare_records(a, b, key);
        if descending { ordering.reverse() } else { ordering }
    });
}

fn compare_records(a: &ServerRecord, b: &ServerRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::IpAddress => a.ip_address.cmp(&b.ip_address),
        SortKey::HostName => a.host_name.cmp(&b.host_name),
        SortKey::Project => a.project.cmp(&b.project),
        SortKey::ServerGroup => a.server_group.cmp(&b.server_group),
        SortKey::Status => a.status.cmp(&b.status),
    }
}
