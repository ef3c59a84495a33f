mod output;

use log::{debug, info};
use crate::analyser::{Analyser, MonthCount};
use crate::common::Error;
use crate::parser;
use crate::parser::Command;
use crate::transaction::{DominantType, Transaction};

pub(crate) use output::render;

/// Result of running one command against the analyser
#[derive(Debug, PartialEq)]
pub(crate) enum Output {
    Transactions(Vec<Transaction>),
    /// Labelled amount, e.g. ("Total", 170.0)
    Amount(&'static str, f64),
    Month(MonthCount),
    Types(Vec<String>),
    Dominant(DominantType),
    Descriptions(Vec<String>),
    Inserted(usize),
    NotFound(String),
}

/// Parse a statement, run it and print the result
pub(crate) fn parse_and_run_command(analyser: &mut Analyser, statement: &str) -> Result<(), Error> {
    let command = parser::parse(statement)?;
    debug!("{:?}", command);

    let output = execute(analyser, command);
    println!("{}", render(&output));
    Ok(())
}

pub(crate) fn execute(analyser: &mut Analyser, command: Command) -> Output {
    match command {
        Command::All => Output::Transactions(analyser.all().to_vec()),
        Command::Types => Output::Types(analyser.unique_types().into_iter().map(str::to_string).collect()),
        Command::Total => Output::Amount("Total", analyser.total_amount()),
        Command::TotalOn(c) => Output::Amount("Total", analyser.total_amount_on_date(c.year, c.month, c.day)),
        Command::TotalDebit => Output::Amount("Total debit", analyser.total_debit_amount()),
        Command::Average => Output::Amount("Average", analyser.average_amount()),
        Command::Type(transaction_type) => owned(analyser.by_type(&transaction_type)),
        Command::Merchant(merchant_name) => owned(analyser.by_merchant(&merchant_name)),
        Command::Between(start, end) => owned(analyser.in_date_range(start, end)),
        Command::Before(date) => owned(analyser.before(date)),
        Command::AmountBetween(min, max) => owned(analyser.by_amount_range(min, max)),
        Command::BusiestMonth => Output::Month(analyser.month_with_most_transactions()),
        Command::BusiestDebitMonth => Output::Month(analyser.month_with_most_debit_transactions()),
        Command::DominantType => Output::Dominant(analyser.dominant_type()),
        Command::Find(id) => match analyser.find_by_id(&id) {
            Some(t) => Output::Transactions(vec![t.clone()]),
            None => Output::NotFound(id),
        },
        Command::Descriptions => Output::Descriptions(analyser.descriptions().into_iter().map(str::to_string).collect()),
        Command::Insert(transactions) => {
            let count = transactions.len();
            for t in transactions {
                analyser.append(t);
            }
            info!("{count} transactions inserted.");
            Output::Inserted(count)
        }
    }
}

fn owned(transactions: Vec<&Transaction>) -> Output {
    Output::Transactions(transactions.into_iter().cloned().collect())
}
