//! Command implementations.

use anyhow::Context;

use hostswitch_core::{
    bounded_summary, build_associations, extract_records, sort_records, toggle_checked,
};
use hostswitch_model::SortKey;
use hostswitch_store::{Config, HostsFile};

use crate::cli::{Cli, DetailsArgs, SortKeyArg, SwitchArgs};
use crate::tables::{print_groups_table, print_records_table};

/// Resolves configuration and the hosts file to operate on.
///
/// Precedence for the hosts path: `--hosts` flag, then the configured path,
/// then the platform default.
fn resolve(cli: &Cli) -> (Config, HostsFile) {
    let config = match &cli.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    let hosts = match &cli.hosts {
        Some(path) => HostsFile::with_path(path),
        None => config.hosts_file(),
    };
    (config, hosts)
}

fn read_lines(hosts: &HostsFile) -> anyhow::Result<Vec<String>> {
    hosts
        .read_lines()
        .with_context(|| format!("reading {}", hosts.path().display()))
}

pub fn run_status(cli: &Cli) -> anyhow::Result<()> {
    let _span = tracing::info_span!("status").entered();
    let (config, hosts) = resolve(cli);
    let lines = read_lines(&hosts)?;
    let associations = build_associations(&lines);
    let summary = bounded_summary(&associations, lines.len(), config.summary_max_len);
    println!("{summary}");
    Ok(())
}

pub fn run_list(cli: &Cli) -> anyhow::Result<()> {
    let _span = tracing::info_span!("list").entered();
    let (_, hosts) = resolve(cli);
    let lines = read_lines(&hosts)?;
    let associations = build_associations(&lines);
    if associations.is_empty() {
        println!("No annotated lines in {}", hosts.path().display());
        return Ok(());
    }
    print_groups_table(&associations);
    Ok(())
}

pub fn run_details(cli: &Cli, args: &DetailsArgs) -> anyhow::Result<()> {
    let _span = tracing::info_span!("details").entered();
    let (_, hosts) = resolve(cli);
    let lines = read_lines(&hosts)?;
    let mut records = extract_records(&lines);
    if records.is_empty() {
        println!("No server records in {}", hosts.path().display());
        return Ok(());
    }
    sort_records(&mut records, sort_key(args.sort_by), args.desc);
    print_records_table(&records);
    Ok(())
}

/// Strictly ordered switch flow: read, toggle, persist, re-read, rebuild,
/// report. The refreshed summary reflects what actually landed on disk.
pub fn run_switch(cli: &Cli, args: &SwitchArgs) -> anyhow::Result<()> {
    let _span = tracing::info_span!(
        "switch",
        project = %args.project,
        server_group = %args.server_group
    )
    .entered();
    let (config, hosts) = resolve(cli);
    let lines = read_lines(&hosts)?;

    let toggled = toggle_checked(&lines, &args.project, &args.server_group)?;
    hosts
        .write_lines(&toggled)
        .with_context(|| format!("writing {}", hosts.path().display()))?;

    let refreshed = read_lines(&hosts)?;
    let associations = build_associations(&refreshed);
    println!("Hosts switched: {} => {}", args.project, args.server_group);
    println!(
        "{}",
        bounded_summary(&associations, refreshed.len(), config.summary_max_len)
    );
    Ok(())
}

fn sort_key(arg: SortKeyArg) -> SortKey {
    match arg {
        SortKeyArg::Ip => SortKey::IpAddress,
        SortKeyArg::Host => SortKey::HostName,
        SortKeyArg::Project => SortKey::Project,
        SortKeyArg::Group => SortKey::ServerGroup,
        SortKeyArg::Status => SortKey::Status,
    }
}
