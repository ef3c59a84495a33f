use comfy_table::{Cell, CellAlignment, Table, TableComponent};
use crate::controller::Output;
use crate::transaction::Transaction;
use crate::util::{format_amount, format_date, month_name};

/// Render a command output as a table
pub(crate) fn render(output: &Output) -> Table {
    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);

    match output {
        Output::Transactions(transactions) => transactions_table(transactions, &mut table),
        Output::Amount(label, amount) => {
            table.set_header(vec![*label]);
            table.add_row(vec![Cell::new(format_amount(*amount)).set_alignment(CellAlignment::Right)]);
        }
        Output::Month(month_count) => {
            table.set_header(vec!["Month", "Count"]);
            table.add_row(vec![
                Cell::new(format!("{} ({})", month_count.month, month_name(month_count.month))),
                Cell::new(month_count.count).set_alignment(CellAlignment::Right),
            ]);
        }
        Output::Types(types) => {
            table.set_header(vec!["Type"]);
            for t in types {
                table.add_row(vec![t.as_str()]);
            }
        }
        Output::Dominant(dominant) => {
            table.set_header(vec!["Dominant type"]);
            table.add_row(vec![dominant.to_string()]);
        }
        Output::Descriptions(descriptions) => {
            table.set_header(vec!["Description"]);
            for d in descriptions {
                table.add_row(vec![d.as_str()]);
            }
        }
        Output::Inserted(count) => {
            table.set_header(vec!["Inserted"]);
            table.add_row(vec![Cell::new(count).set_alignment(CellAlignment::Right)]);
        }
        Output::NotFound(id) => {
            table.set_header(vec!["Not found"]);
            table.add_row(vec![format!("No transaction with id '{}'", id)]);
        }
    }

    table
}

fn transactions_table(transactions: &[Transaction], table: &mut Table) {
    table.set_header(vec!["ID", "Date", "Amount", "Type", "Description", "Merchant"]);

    for t in transactions {
        table.add_row(vec![
            Cell::new(t.id.as_str()).set_alignment(CellAlignment::Right),
            Cell::new(format_date(t.date).as_str()),
            Cell::new(format_amount(t.amount).as_str()).set_alignment(CellAlignment::Right),
            Cell::new(t.transaction_type.as_str()),
            Cell::new(t.description.as_str()),
            Cell::new(t.merchant_name.as_str()),
        ]);
    }
}
