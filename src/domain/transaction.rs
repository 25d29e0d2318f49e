use std::fmt;

use crate::common::{error::BankError, money::Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxType {
    Deposit,
    Withdrawal,
}

/// Character-wise case-insensitive comparison over full Unicode.
///
/// Two characters match when their single-character upper cases agree, or
/// failing that their lower cases do, so `ı` and `ſ` match `I` and `S`.
/// Characters whose case mapping expands to several characters (`ß`) only
/// match themselves.
pub fn labels_match(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            if x == y {
                return true;
            }
            let (ux, uy) = (simple_upper(x), simple_upper(y));
            ux == uy || simple_lower(ux) == simple_lower(uy)
        })
}

fn simple_upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn simple_lower(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

impl TxType {
    /// Case-insensitive match against `Deposit` / `Withdrawal`.
    pub fn from_label(label: &str) -> Option<Self> {
        if labels_match(label, "Deposit") {
            Some(TxType::Deposit)
        } else if labels_match(label, "Withdrawal") {
            Some(TxType::Withdrawal)
        } else {
            None
        }
    }
}

/// A single money movement. The type label is stored as given and only
/// checked when asked via [`Transaction::is_valid_type`].
///
/// Two transactions are equal when their ids match, whatever their amount
/// or type.
#[derive(Debug, Clone)]
pub struct Transaction {
    transaction_id: String,
    amount: Money,
    tx_type: String,
}

impl Transaction {
    pub fn new(
        transaction_id: impl Into<String>,
        amount: Money,
        tx_type: impl Into<String>,
    ) -> Result<Self, BankError> {
        if !amount.is_positive() {
            return Err(BankError::InvalidArgument(
                "Transaction amount must be greater than 0.",
            ));
        }
        Ok(Self {
            transaction_id: transaction_id.into(),
            amount,
            tx_type: tx_type.into(),
        })
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn tx_type(&self) -> &str {
        &self.tx_type
    }

    pub fn kind(&self) -> Option<TxType> {
        TxType::from_label(&self.tx_type)
    }

    pub fn is_deposit(&self) -> bool {
        self.kind() == Some(TxType::Deposit)
    }

    pub fn is_withdrawal(&self) -> bool {
        self.kind() == Some(TxType::Withdrawal)
    }

    pub fn is_valid_type(&self) -> bool {
        self.kind().is_some()
    }

    pub fn reverse_transaction(&self) -> Money {
        -self.amount
    }

    pub fn details(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction ID: {}, Transaction Type: {}, Amount: {}",
            self.transaction_id, self.tx_type, self.amount
        )
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.transaction_id == other.transaction_id
    }
}
impl Eq for Transaction {}
