use crate::{
    common::{error::BankError, money::Money},
    domain::transaction::{Transaction, labels_match},
};

/// Append-only, ordered record of deposits and withdrawals.
#[derive(Debug, Default)]
pub struct TransactionLog {
    transactions: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }

    /// Appends `transaction` if its type is `Deposit` or `Withdrawal`.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), BankError> {
        if !transaction.is_valid_type() {
            return Err(BankError::InvalidArgument("Invalid or null transaction."));
        }
        tracing::debug!(
            id = transaction.transaction_id(),
            kind = transaction.tx_type(),
            amount = %transaction.amount(),
            "transaction logged"
        );
        self.transactions.push(transaction);
        Ok(())
    }

    /// Returns an owned copy; changes to it never reach the log.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn num_transactions(&self) -> usize {
        self.transactions.len()
    }

    pub fn transaction_details(&self) -> String {
        self.transactions
            .iter()
            .map(Transaction::details)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }

    pub fn total_amount(&self) -> Money {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    pub fn total_amount_by_type(&self, tx_type: &str) -> Money {
        self.transactions
            .iter()
            .filter(|t| labels_match(t.tx_type(), tx_type))
            .map(Transaction::amount)
            .sum()
    }

    /// First transaction carrying `transaction_id`, if any.
    pub fn find_transaction_by_id(&self, transaction_id: &str) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|t| t.transaction_id() == transaction_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: &str, units: i64, kind: &str) -> Transaction {
        Transaction::new(id, Money::from_units(units), kind).unwrap()
    }

    fn seeded() -> TransactionLog {
        let mut log = TransactionLog::new();
        log.add_transaction(tx("TXN123", 500, "Deposit")).unwrap();
        log.add_transaction(tx("TXN124", 200, "Withdrawal")).unwrap();
        log.add_transaction(tx("TXN125", 50, "deposit")).unwrap();
        log
    }

    #[test]
    fn rejects_unknown_types() {
        let mut log = TransactionLog::new();
        let err = log.add_transaction(tx("T1", 10, "Transfer")).unwrap_err();
        assert_eq!(err, BankError::InvalidArgument("Invalid or null transaction."));
        assert_eq!(log.num_transactions(), 0);
    }

    #[test]
    fn accepts_types_in_any_case() {
        let mut log = TransactionLog::new();
        log.add_transaction(tx("T1", 10, "WITHDRAWAL")).unwrap();
        assert_eq!(log.num_transactions(), 1);
    }

    #[test]
    fn returned_transactions_are_independent() {
        let log = seeded();

        let mut copy = log.transactions();
        copy.clear();
        copy.push(tx("X", 1, "Deposit"));

        assert_eq!(log.num_transactions(), 3);
        assert!(log.find_transaction_by_id("X").is_none());
    }

    #[test]
    fn preserves_insertion_order() {
        let ids: Vec<_> = seeded()
            .as_slice()
            .iter()
            .map(|t| t.transaction_id().to_string())
            .collect();
        assert_eq!(ids, ["TXN123", "TXN124", "TXN125"]);
    }

    #[test]
    fn totals() {
        let log = seeded();
        assert_eq!(log.total_amount(), Money::from_units(750));
        assert_eq!(log.total_amount_by_type("DEPOSIT"), Money::from_units(550));
        assert_eq!(log.total_amount_by_type("withdrawal"), Money::from_units(200));
        assert_eq!(log.total_amount_by_type("Refund"), Money::zero());
        assert_eq!(TransactionLog::new().total_amount(), Money::zero());
    }

    #[test]
    fn totals_by_type_fold_non_ascii_case() {
        let mut log = TransactionLog::new();
        log.add_transaction(tx("T1", 40, "wıthdrawal")).unwrap();
        log.add_transaction(tx("T2", 60, "Withdrawal")).unwrap();

        assert_eq!(log.total_amount_by_type("WITHDRAWAL"), Money::from_units(100));
    }

    #[test]
    fn find_by_id() {
        let log = seeded();
        let found = log.find_transaction_by_id("TXN124").expect("logged");
        assert_eq!(found.amount(), Money::from_units(200));
        assert!(log.find_transaction_by_id("txn124").is_none());
        assert!(log.find_transaction_by_id("missing").is_none());
    }

    #[test]
    fn details_are_newline_joined() {
        let mut log = TransactionLog::new();
        assert_eq!(log.transaction_details(), "");

        log.add_transaction(tx("TXN123", 500, "Deposit")).unwrap();
        log.add_transaction(tx("TXN124", 200, "Withdrawal")).unwrap();
        assert_eq!(
            log.transaction_details(),
            "Transaction ID: TXN123, Transaction Type: Deposit, Amount: 500.0000\n\
             Transaction ID: TXN124, Transaction Type: Withdrawal, Amount: 200.0000"
        );
    }
}
