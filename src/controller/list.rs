use comfy_table::{Cell, CellAlignment, Table, TableComponent};

use crate::controller::format_amount;
use crate::ledger::Ledger;

/// Print the full collection as a table, in insertion order.
pub(crate) fn run_list(ledger: &Ledger) {
    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);
    table.set_header(vec!["ID", "Category", "Amount", "Description"]);

    for t in ledger.transactions() {
        table.add_row(vec![
            Cell::new(t.id()).set_alignment(CellAlignment::Right),
            Cell::new(t.category()),
            Cell::new(format_amount(t.amount())).set_alignment(CellAlignment::Right),
            Cell::new(t.description()),
        ]);
    }

    println!("{table}");
}
