pub mod associations;
pub mod classify;
pub mod details;
pub mod error;
pub mod summary;
pub mod toggle;

pub use associations::build_associations;
pub use classify::{COMMENT_MARKER, is_disabled, parse_annotation};
pub use details::{extract_records, sort_records};
pub use error::{Result, ToggleError};
pub use summary::{MAX_SUMMARY_LEN, NO_ACTIVE_SERVERS, bounded_summary, format_summary};
pub use toggle::{disable_line, enable_line, toggle, toggle_checked};
