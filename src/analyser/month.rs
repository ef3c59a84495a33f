use chrono::Datelike;
use crate::analyser::Analyser;
use crate::transaction::{Transaction, TransactionType};

/// Number of transactions in a calendar month. Month is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MonthCount {
    pub(crate) month: u32,
    pub(crate) count: usize,
}

impl Analyser {
    /// Month with the most transactions, years merged. Ties go to the earliest month.
    /// Returns January with a count of 0 when there is nothing to count.
    pub(crate) fn month_with_most_transactions(&self) -> MonthCount {
        busiest_month(self.transactions.iter())
    }

    /// Same as [`Analyser::month_with_most_transactions`] but only counting debit transactions
    pub(crate) fn month_with_most_debit_transactions(&self) -> MonthCount {
        busiest_month(self.transactions.iter().filter(|t| t.is(TransactionType::Debit)))
    }
}

fn busiest_month<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> MonthCount {
    let mut counts = [0usize; 12];
    for t in transactions {
        counts[t.date.month0() as usize] += 1;
    }

    let mut busiest = MonthCount { month: 1, count: counts[0] };
    for (i, count) in counts.iter().enumerate().skip(1) {
        // Strictly greater so the lowest month keeps a tie
        if *count > busiest.count {
            busiest = MonthCount { month: i as u32 + 1, count: *count };
        }
    }

    busiest
}
