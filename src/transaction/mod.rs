use std::fmt;
use chrono::NaiveDateTime;

/// A single financial transaction held by the analyser
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    pub(crate) id: String,
    pub(crate) date: NaiveDateTime,
    pub(crate) amount: f64,
    /// Open-ended category. "debit" and "credit" are the conventional values but any string is kept as is.
    pub(crate) transaction_type: String,
    pub(crate) description: String,
    pub(crate) merchant_name: String,
}

impl Transaction {
    pub(crate) fn new(id: &str, date: NaiveDateTime, amount: f64, transaction_type: &str, description: &str, merchant_name: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            date,
            amount,
            transaction_type: transaction_type.to_string(),
            description: description.to_string(),
            merchant_name: merchant_name.to_string(),
        }
    }

    /// Exact, case-sensitive check against one of the two recognised types
    pub(crate) fn is(&self, transaction_type: TransactionType) -> bool {
        self.transaction_type == transaction_type.as_str()
    }
}

/// The only two types that aggregates single out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransactionType {
    Debit,
    Credit,
}

impl TransactionType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Debit => "debit",
            TransactionType::Credit => "credit",
        }
    }
}

/// Outcome of comparing debit count against credit count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DominantType {
    Debit,
    Credit,
    Equal,
}

impl fmt::Display for DominantType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            DominantType::Debit => "debit",
            DominantType::Credit => "credit",
            DominantType::Equal => "equal",
        };
        write!(f, "{}", s)
    }
}
