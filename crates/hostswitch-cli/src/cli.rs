//! CLI argument definitions for the hosts switcher.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hostswitch",
    version,
    about = "Hosts switcher - flip annotated hosts file lines between server groups",
    long_about = "Switch a machine between named server groups within named projects by\n\
                  commenting and uncommenting annotated hosts file lines.\n\n\
                  Managed lines carry a trailing `# [project/serverGroup]` tag; everything\n\
                  else in the file is left untouched."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Hosts file to operate on (overrides configuration and platform default).
    #[arg(long = "hosts", value_name = "PATH", global = true)]
    pub hosts: Option<PathBuf>,

    /// Configuration file location.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the active server group summary.
    Status,

    /// List projects and server groups with their line counts.
    List,

    /// Show per-line server records as a table.
    Details(DetailsArgs),

    /// Activate one server group and deactivate its siblings.
    Switch(SwitchArgs),
}

#[derive(Parser)]
pub struct DetailsArgs {
    /// Column to sort by.
    #[arg(long = "sort-by", value_enum, default_value = "project")]
    pub sort_by: SortKeyArg,

    /// Sort in descending order.
    #[arg(long = "desc")]
    pub desc: bool,
}

#[derive(Parser)]
pub struct SwitchArgs {
    /// Project whose server groups are toggled.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Server group to activate within the project.
    #[arg(value_name = "SERVER_GROUP")]
    pub server_group: String,
}

/// Detail view sort column choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SortKeyArg {
    Ip,
    Host,
    Project,
    Group,
    Status,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_switch_arguments() {
        let cli = Cli::try_parse_from(["hostswitch", "switch", "Acme", "Staging"]).unwrap();
        match cli.command {
            Command::Switch(args) => {
                assert_eq!(args.project, "Acme");
                assert_eq!(args.server_group, "Staging");
            }
            _ => panic!("expected switch command"),
        }
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli =
            Cli::try_parse_from(["hostswitch", "status", "--hosts", "/tmp/hosts"]).unwrap();
        assert_eq!(cli.hosts.as_deref(), Some(std::path::Path::new("/tmp/hosts")));
    }

    #[test]
    fn details_defaults_to_project_sort() {
        let cli = Cli::try_parse_from(["hostswitch", "details"]).unwrap();
        match cli.command {
            Command::Details(args) => {
                assert!(matches!(args.sort_by, SortKeyArg::Project));
                assert!(!args.desc);
            }
            _ => panic!("expected details command"),
        }
    }
}
