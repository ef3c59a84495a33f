use chrono::Datelike;
use crate::analyser::Analyser;
use crate::transaction::{DominantType, Transaction, TransactionType};

impl Analyser {
    /// Sum of all amounts. 0 for an empty collection. A NaN amount makes the sum NaN.
    pub(crate) fn total_amount(&self) -> f64 {
        sum(self.transactions.iter())
    }

    /// Sum of amounts for transactions whose date matches every given component. Month is 1-based.
    /// A component given as `None` matches any value.
    pub(crate) fn total_amount_on_date(&self, year: Option<i32>, month: Option<u32>, day: Option<u32>) -> f64 {
        sum(self.transactions.iter().filter(|t| {
            year.map_or(true, |y| t.date.year() == y)
                && month.map_or(true, |m| t.date.month() == m)
                && day.map_or(true, |d| t.date.day() == d)
        }))
    }

    /// Mean amount. NaN for an empty collection.
    pub(crate) fn average_amount(&self) -> f64 {
        // 0.0 / 0.0 is NaN, no special case needed
        self.total_amount() / self.transactions.len() as f64
    }

    pub(crate) fn total_debit_amount(&self) -> f64 {
        sum(self.transactions.iter().filter(|t| t.is(TransactionType::Debit)))
    }

    /// Compare how many transactions are debit vs credit. Every other type is ignored.
    pub(crate) fn dominant_type(&self) -> DominantType {
        let mut debit_count = 0usize;
        let mut credit_count = 0usize;
        for t in &self.transactions {
            if t.is(TransactionType::Debit) {
                debit_count += 1;
            } else if t.is(TransactionType::Credit) {
                credit_count += 1;
            }
        }

        if debit_count > credit_count {
            DominantType::Debit
        } else if credit_count > debit_count {
            DominantType::Credit
        } else {
            DominantType::Equal
        }
    }
}

fn sum<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> f64 {
    transactions.map(|t| t.amount).fold(0.0, |total, amount| total + amount)
}

#[cfg(test)]
mod tests {
    use crate::analyser::{txn, Analyser};
    use crate::transaction::{DominantType, Transaction};

    fn sample() -> Analyser {
        Analyser::new(vec![
            txn("1", "2024-03-05", 100.0, "debit"),
            txn("2", "2024-03-20", 50.0, "credit"),
            txn("3", "2024-04-01", 20.0, "debit"),
        ])
    }

    #[test]
    fn test_total_amount() {
        assert_eq!(sample().total_amount(), 170.0);
        assert_eq!(Analyser::default().total_amount(), 0.0);

        let analyser = Analyser::new(vec![
            txn("1", "2024-01-01", -30.5, "debit"),
            txn("2", "2024-01-02", 10.25, "credit"),
        ]);
        assert_eq!(analyser.total_amount(), -20.25);
    }

    #[test]
    fn test_total_amount_propagates_nan() {
        let mut analyser = sample();
        analyser.append(txn("4", "2024-05-01", f64::NAN, "debit"));
        assert!(analyser.total_amount().is_nan());
        assert!(analyser.average_amount().is_nan());
    }

    #[test]
    fn test_total_amount_on_date() {
        let mut analyser = sample();
        analyser.append(txn("4", "2023-03-05", 7.0, "debit"));

        assert_eq!(analyser.total_amount_on_date(Some(2024), Some(3), None), 150.0);
        assert_eq!(analyser.total_amount_on_date(None, Some(3), None), 157.0);
        assert_eq!(analyser.total_amount_on_date(None, Some(3), Some(5)), 107.0);
        assert_eq!(analyser.total_amount_on_date(Some(2024), None, None), 170.0);
        assert_eq!(analyser.total_amount_on_date(Some(2024), Some(4), Some(1)), 20.0);
        assert_eq!(analyser.total_amount_on_date(None, None, None), 177.0);
        assert_eq!(analyser.total_amount_on_date(Some(2022), None, None), 0.0);
        assert_eq!(analyser.total_amount_on_date(None, Some(12), None), 0.0);
    }

    #[test]
    fn test_average_amount() {
        let analyser = Analyser::new(vec![
            txn("1", "2024-03-05", 100.0, "debit"),
            txn("2", "2024-03-20", 50.0, "credit"),
        ]);
        assert_eq!(analyser.average_amount(), 75.0);
        assert_eq!(sample().average_amount(), sample().total_amount() / 3.0);
    }

    #[test]
    fn test_average_amount_empty_is_nan() {
        assert!(Analyser::default().average_amount().is_nan());
    }

    #[test]
    fn test_total_debit_amount() {
        let mut analyser = sample();
        analyser.append(txn("4", "2024-05-01", 1000.0, "Debit"));
        analyser.append(txn("5", "2024-05-01", 1000.0, "fee"));
        assert_eq!(analyser.total_debit_amount(), 120.0);
        assert_eq!(Analyser::default().total_debit_amount(), 0.0);
    }

    #[test]
    fn test_dominant_type() {
        assert_eq!(sample().dominant_type(), DominantType::Debit);
        assert_eq!(Analyser::default().dominant_type(), DominantType::Equal);

        let analyser = Analyser::new(vec![
            txn("1", "2024-03-05", 1.0, "credit"),
            txn("2", "2024-03-05", 1.0, "credit"),
            txn("3", "2024-03-05", 1.0, "debit"),
            txn("4", "2024-03-05", 1.0, "fee"),
            txn("5", "2024-03-05", 1.0, "fee"),
        ]);
        assert_eq!(analyser.dominant_type(), DominantType::Credit);

        let analyser = Analyser::new(vec![
            txn("1", "2024-03-05", 1.0, "credit"),
            txn("2", "2024-03-05", 1.0, "debit"),
            txn("3", "2024-03-05", 1.0, "transfer"),
        ]);
        assert_eq!(analyser.dominant_type(), DominantType::Equal);
    }

    #[test]
    fn test_dominant_type_symmetric() {
        let swap = |t: &Transaction| {
            let mut t = t.clone();
            t.transaction_type = match t.transaction_type.as_str() {
                "debit" => "credit".to_string(),
                "credit" => "debit".to_string(),
                other => other.to_string(),
            };
            t
        };

        let cases = vec![
            sample(),
            Analyser::default(),
            Analyser::new(vec![txn("1", "2024-01-01", 1.0, "credit"), txn("2", "2024-01-01", 1.0, "debit")]),
            Analyser::new(vec![txn("1", "2024-01-01", 1.0, "credit"), txn("2", "2024-01-01", 1.0, "other")]),
        ];

        for analyser in cases {
            let swapped = Analyser::new(analyser.all().iter().map(swap).collect());
            let expected = match analyser.dominant_type() {
                DominantType::Debit => DominantType::Credit,
                DominantType::Credit => DominantType::Debit,
                DominantType::Equal => DominantType::Equal,
            };
            assert_eq!(swapped.dominant_type(), expected);
        }
    }

    #[test]
    fn test_scenario() {
        let analyser = sample();
        assert_eq!(analyser.total_amount(), 170.0);
        assert_eq!(analyser.by_type("debit").len(), 2);
        assert_eq!(analyser.month_with_most_transactions().month, 3);
        assert_eq!(analyser.dominant_type(), DominantType::Debit);
        assert_eq!(analyser.total_amount_on_date(Some(2024), Some(3), None), 150.0);
    }
}
