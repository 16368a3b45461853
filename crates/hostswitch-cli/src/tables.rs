//! Table rendering for the list and details views.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hostswitch_model::{Associations, GroupState, RecordStatus, ServerRecord};

pub fn print_groups_table(associations: &Associations) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Project"),
        header_cell("Group"),
        header_cell("Enabled"),
        header_cell("Disabled"),
        header_cell("State"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for project in associations.projects.values() {
        for group in project.groups.values() {
            table.add_row(vec![
                Cell::new(&project.name)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(&group.name),
                count_cell(group.enabled_count, Color::Green),
                count_cell(group.disabled_count, Color::Red),
                state_cell(group.state()),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_records_table(records: &[ServerRecord]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("IP Address"),
        header_cell("Host"),
        header_cell("Project"),
        header_cell("Group"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.ip_address),
            Cell::new(&record.host_name),
            Cell::new(&record.project)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&record.server_group),
            status_cell(record.status),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

// Signal scheme: green fully enabled, yellow mixed, red fully disabled.
fn state_cell(state: GroupState) -> Cell {
    match state {
        GroupState::Active => Cell::new("ACTIVE")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        GroupState::Mixed => Cell::new("MIXED").fg(Color::Yellow),
        GroupState::Disabled => Cell::new("DISABLED").fg(Color::Red),
    }
}

fn status_cell(status: RecordStatus) -> Cell {
    match status {
        RecordStatus::Enabled => Cell::new(status.as_str()).fg(Color::Green),
        RecordStatus::Disabled => dim_cell(status.as_str()),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
