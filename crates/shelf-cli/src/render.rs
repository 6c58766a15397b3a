//! Terminal rendering of catalog views.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use shelf_client::AdminCommand;
use shelf_model::{Record, SortField, SortOrder, SortSpec};
use shelf_query::{ListStatus, ViewSnapshot};

/// Direction marker for a column header.
pub fn sort_indicator(sort: SortSpec, field: SortField) -> &'static str {
    match sort.order_for(field) {
        Some(SortOrder::Asc) => " ▲",
        Some(SortOrder::Desc) => " ▼",
        None => "",
    }
}

/// Page buttons with the active page in brackets, e.g. `Page: 1 [2] 3`.
///
/// Empty when there are no pages.
pub fn page_bar(snapshot: &ViewSnapshot) -> String {
    let buttons: Vec<String> = snapshot
        .page_numbers()
        .map(|n| {
            if n == snapshot.page {
                format!("[{n}]")
            } else {
                n.to_string()
            }
        })
        .collect();

    if buttons.is_empty() {
        String::new()
    } else {
        format!("Page: {}", buttons.join(" "))
    }
}

/// Message shown in place of the table, if the list has no rows to show.
pub fn status_message(snapshot: &ViewSnapshot) -> Option<&'static str> {
    match snapshot.status {
        ListStatus::Loading => Some("Loading..."),
        ListStatus::Empty => Some("No books match your search."),
        ListStatus::NoData => Some("No data."),
        ListStatus::Ready => None,
    }
}

/// The full view: error banner, table or status message, page bar.
pub fn render_snapshot(snapshot: &ViewSnapshot) -> String {
    let mut sections = Vec::new();

    if let Some(error) = &snapshot.error {
        sections.push(format!("! {error}"));
    }

    match status_message(snapshot) {
        Some(message) => sections.push(message.to_string()),
        None => sections.push(record_table(snapshot.sort, &snapshot.items).to_string()),
    }

    let pages = page_bar(snapshot);
    if !pages.is_empty() {
        sections.push(pages);
    }

    sections.join("\n")
}

/// Whether the rendered parts of two views match. Raw input is not rendered.
pub fn same_view(shown: Option<&ViewSnapshot>, next: &ViewSnapshot) -> bool {
    shown.is_some_and(|shown| {
        shown.search == next.search
            && shown.sort == next.sort
            && shown.page == next.page
            && shown.total_pages == next.total_pages
            && shown.items == next.items
            && shown.error == next.error
            && shown.status == next.status
    })
}

/// Table of records with sort markers on the header.
pub fn record_table(sort: SortSpec, records: &[Record]) -> Table {
    let mut table = Table::new();
    table.set_header(
        SortField::ALL
            .iter()
            .map(|&field| header_cell(&format!("{}{}", field.label(), sort_indicator(sort, field))))
            .chain(std::iter::once(header_cell("Available")))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);

    for record in records {
        table.add_row(vec![
            Cell::new(&record.title),
            Cell::new(&record.author),
            Cell::new(&record.publisher),
            Cell::new(record.year).set_alignment(CellAlignment::Right),
            availability_cell(record.available),
        ]);
    }
    table
}

/// Admin commands and the endpoints they are sent to.
pub fn endpoints_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Command"),
        header_cell("Method"),
        header_cell("Path"),
        header_cell("Required fields"),
    ]);
    apply_table_style(&mut table);

    for command in AdminCommand::ALL {
        let endpoint = command.endpoint();
        table.add_row(vec![
            Cell::new(command.label()),
            Cell::new(endpoint.method),
            Cell::new(endpoint.path),
            Cell::new(command.required_fields().join(", ")),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn availability_cell(available: bool) -> Cell {
    if available {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").fg(Color::Red)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let sort = SortSpec::new(SortField::Year, SortOrder::Desc);
        assert_eq!(sort_indicator(sort, SortField::Year), " ▼");
        assert_eq!(sort_indicator(sort, SortField::Title), "");
        assert_eq!(sort_indicator(SortSpec::default(), SortField::Title), " ▲");
    }
}
