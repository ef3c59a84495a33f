mod aggregate;
mod month;

use std::collections::BTreeSet;
use chrono::NaiveDateTime;
use log::debug;

use crate::transaction::Transaction;

pub(crate) use month::MonthCount;

/// In-memory transaction collection. Holds transactions in insertion order and answers queries over them.
///
/// Every query is a linear scan over the current contents, nothing is cached. The only mutation is
/// [`Analyser::append`].
#[derive(Debug, Default)]
pub(crate) struct Analyser {
    transactions: Vec<Transaction>,
}

impl From<Vec<Transaction>> for Analyser {
    fn from(transactions: Vec<Transaction>) -> Self {
        Analyser::new(transactions)
    }
}

impl Analyser {
    pub(crate) fn new(transactions: Vec<Transaction>) -> Analyser {
        Analyser { transactions }
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Add a transaction to the end of the collection. No validation is performed.
    pub(crate) fn append(&mut self, t: Transaction) {
        debug!("Appending transaction {}", t.id);
        self.transactions.push(t);
    }

    pub(crate) fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Distinct transaction types seen in the collection
    pub(crate) fn unique_types(&self) -> BTreeSet<&str> {
        self.transactions.iter().map(|t| t.transaction_type.as_str()).collect()
    }

    pub(crate) fn by_type(&self, transaction_type: &str) -> Vec<&Transaction> {
        self.filter(|t| t.transaction_type == transaction_type)
    }

    /// Transactions dated within [start, end], both ends inclusive
    pub(crate) fn in_date_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<&Transaction> {
        self.filter(|t| t.date >= start && t.date <= end)
    }

    pub(crate) fn by_merchant(&self, merchant_name: &str) -> Vec<&Transaction> {
        self.filter(|t| t.merchant_name == merchant_name)
    }

    /// Transactions with amount within [min, max], both ends inclusive
    pub(crate) fn by_amount_range(&self, min: f64, max: f64) -> Vec<&Transaction> {
        self.filter(|t| t.amount >= min && t.amount <= max)
    }

    /// Transactions dated strictly earlier than `date`
    pub(crate) fn before(&self, date: NaiveDateTime) -> Vec<&Transaction> {
        self.filter(|t| t.date < date)
    }

    /// First transaction with the given id, in insertion order
    pub(crate) fn find_by_id(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub(crate) fn descriptions(&self) -> Vec<&str> {
        self.transactions.iter().map(|t| t.description.as_str()).collect()
    }

    fn filter<P>(&self, predicate: P) -> Vec<&Transaction>
        where
            P: Fn(&Transaction) -> bool,
    {
        self.transactions.iter().filter(|&t| predicate(t)).collect()
    }
}

/// Build a transaction from short literals, date in `YYYY-MM-DD` format
#[cfg(test)]
pub(crate) fn txn(id: &str, date: &str, amount: f64, transaction_type: &str) -> Transaction {
    let date = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap().and_hms_opt(0, 0, 0).unwrap();
    Transaction::new(id, date, amount, transaction_type, &format!("txn {id}"), &format!("merchant {id}"))
}
