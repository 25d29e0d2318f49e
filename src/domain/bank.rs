use std::collections::HashMap;

use crate::{
    common::{error::BankError, money::Money},
    domain::account::Account,
};

/// Directory of accounts keyed by account number.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: HashMap<String, Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    pub fn accounts(&self) -> &HashMap<String, Account> {
        &self.accounts
    }

    /// Opens an account. The initial deposit is not validated, so a negative
    /// opening balance is accepted.
    pub fn create_account(
        &mut self,
        account_number: &str,
        initial_deposit: Money,
    ) -> Result<(), BankError> {
        if self.accounts.contains_key(account_number) {
            return Err(BankError::DuplicateAccount(account_number.to_string()));
        }
        self.accounts.insert(
            account_number.to_string(),
            Account::new(account_number, initial_deposit),
        );
        tracing::debug!(account = account_number, %initial_deposit, "account created");
        Ok(())
    }

    pub fn close_account(&mut self, account_number: &str) -> Result<(), BankError> {
        self.accounts
            .remove(account_number)
            .ok_or_else(|| BankError::AccountNotFound(account_number.to_string()))?;
        tracing::debug!(account = account_number, "account closed");
        Ok(())
    }

    pub fn deposit_to_account(&mut self, account_number: &str, amount: Money) -> Result<(), BankError> {
        self.accounts
            .get_mut(account_number)
            .ok_or_else(|| BankError::AccountNotFound(account_number.to_string()))?
            .deposit(amount)
    }

    pub fn num_accounts(&self) -> usize {
        self.accounts.len()
    }

    pub fn has_account(&self, account_number: &str) -> bool {
        self.accounts.contains_key(account_number)
    }

    pub fn account_balance(&self, account_number: &str) -> Result<Money, BankError> {
        Ok(self.get(account_number)?.balance())
    }

    pub fn account_details(&self, account_number: &str) -> Result<String, BankError> {
        let account = self.get(account_number)?;
        Ok(format!(
            "Account Number: {}, Balance: {}",
            account.account_number(),
            account.balance()
        ))
    }

    fn get(&self, account_number: &str) -> Result<&Account, BankError> {
        self.accounts
            .get(account_number)
            .ok_or_else(|| BankError::AccountNotFound(account_number.to_string()))
    }
}
