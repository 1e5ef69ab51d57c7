use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use signalfx_provider::MutingFilter;

pub fn build_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan).add_attribute(Attribute::Bold))
        .collect();
    table.set_header(cells);
    table
}

/// Generic filters followed by one row per detector.
pub fn filters_table(filters: &[MutingFilter], detectors: &[String]) -> Table {
    let mut table = build_table(&["Property", "Value", "Negated"]);
    for f in filters {
        let negated = if f.negated {
            Cell::new("yes").fg(Color::Yellow)
        } else {
            Cell::new("no")
        };
        table.add_row(vec![Cell::new(&f.property), Cell::new(&f.property_value), negated]);
    }
    for d in detectors {
        table.add_row(vec![
            Cell::new("detector").fg(Color::Magenta),
            Cell::new(d),
            Cell::new("no"),
        ]);
    }
    table
}
