use comfy_table::{Cell, CellAlignment, Table, TableComponent};

use crate::controller::format_amount;
use crate::ledger::Ledger;

/// Print income and expense totals and the net flow.
pub(crate) fn run_summary(ledger: &Ledger) {
    let summary = ledger.summarize();

    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);
    table.set_header(vec!["Total income", "Total expenses", "Net flow"]);
    table.add_row(vec![
        Cell::new(format_amount(summary.income_total)).set_alignment(CellAlignment::Right),
        Cell::new(format_amount(summary.expense_total)).set_alignment(CellAlignment::Right),
        Cell::new(format_amount(summary.net_flow())).set_alignment(CellAlignment::Right),
    ]);

    println!("{table}");
}
