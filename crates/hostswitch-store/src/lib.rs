pub mod config;
pub mod error;
pub mod hosts;

pub use config::{Config, DEFAULT_SUMMARY_MAX_LEN};
pub use error::{Result, StoreError};
pub use hosts::{HostsFile, default_hosts_path};
