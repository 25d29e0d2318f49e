use crate::common::{error::BankError, money::Money};

/// A single customer account identified by its account number.
///
/// The opening balance is taken as given, so an account may start out
/// negative; every later movement is guarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    account_number: String,
    balance: Money,
}

impl Account {
    pub fn new(account_number: impl Into<String>, initial_balance: Money) -> Self {
        Self {
            account_number: account_number.into(),
            balance: initial_balance,
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn deposit(&mut self, amount: Money) -> Result<(), BankError> {
        if !amount.is_positive() {
            return Err(BankError::InvalidArgument("Deposit amount must be positive."));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(BankError::InvalidArgument("Deposit would overflow the balance."))?;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<(), BankError> {
        if !amount.is_positive() {
            return Err(BankError::InvalidArgument(
                "Withdrawal amount must be positive.",
            ));
        }
        if amount > self.balance {
            return Err(BankError::InsufficientFunds("Insufficient funds."));
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(BankError::InvalidArgument("Withdrawal would overflow the balance."))?;
        Ok(())
    }

    /// Moves `amount` from this account into `other`. Both balances are left
    /// untouched when the transfer is rejected, including when the recipient
    /// balance would overflow.
    pub fn transfer_to(&mut self, other: &mut Account, amount: Money) -> Result<(), BankError> {
        if !amount.is_positive() {
            return Err(BankError::InvalidArgument("Transfer amount must be positive."));
        }
        if amount > self.balance {
            return Err(BankError::InsufficientFunds(
                "Insufficient funds for transfer.",
            ));
        }
        let debited = self
            .balance
            .checked_sub(amount)
            .ok_or(BankError::InvalidArgument("Transfer would overflow the balance."))?;
        let credited = other
            .balance
            .checked_add(amount)
            .ok_or(BankError::InvalidArgument(
                "Transfer would overflow the recipient balance.",
            ))?;
        self.balance = debited;
        other.balance = credited;
        Ok(())
    }

    pub fn is_overdrawn(&self) -> bool {
        self.balance.is_negative()
    }
}
