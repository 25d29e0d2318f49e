use crate::common::{error::BankError, money::Money};

/// Cash level below which an ATM reports itself as low on cash.
pub const LOW_CASH_THRESHOLD: Money = Money::from_units(1000);

#[derive(Debug, Clone)]
pub struct Atm {
    location: String,
    cash: Money,
}

impl Atm {
    pub fn new(location: impl Into<String>, initial_cash: Money) -> Result<Self, BankError> {
        if initial_cash.is_negative() {
            return Err(BankError::InvalidArgument("Initial cash cannot be negative."));
        }
        Ok(Self {
            location: location.into(),
            cash: initial_cash,
        })
    }

    /// Loads cash into the machine. A zero deposit is accepted.
    pub fn deposit_cash(&mut self, amount: Money) -> Result<(), BankError> {
        if amount.is_negative() {
            return Err(BankError::InvalidArgument("Deposit amount cannot be negative."));
        }
        self.cash = self
            .cash
            .checked_add(amount)
            .ok_or(BankError::InvalidArgument("Deposit would overflow the ATM cash."))?;
        Ok(())
    }

    pub fn withdraw_cash(&mut self, amount: Money) -> Result<(), BankError> {
        if !amount.is_positive() {
            return Err(BankError::InvalidArgument(
                "Withdrawal amount must be greater than zero.",
            ));
        }
        if amount > self.cash {
            return Err(BankError::InsufficientFunds(
                "ATM does not have sufficient cash.",
            ));
        }
        self.cash = self
            .cash
            .checked_sub(amount)
            .ok_or(BankError::InvalidArgument("Withdrawal would overflow the ATM cash."))?;
        Ok(())
    }

    pub fn cash_balance(&self) -> Money {
        self.cash
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn is_low_on_cash(&self) -> bool {
        self.cash < LOW_CASH_THRESHOLD
    }

    pub fn balance_report(&self) -> String {
        format!("The current cash balance is: {}", self.cash)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;
    use crate::common::error::ErrorKind;

    fn atm() -> Atm {
        Atm::new("Downtown", Money::from_units(2000)).unwrap()
    }

    #[test]
    fn rejects_negative_initial_cash() {
        let err = Atm::new("Suburban", Money::from_units(-100)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn keeps_location_and_initial_cash() {
        let atm = Atm::new("Suburban", Money::from_units(100)).unwrap();
        assert_eq!(atm.cash_balance(), Money::from_units(100));
        assert_eq!(atm.location(), "Suburban");
    }

    #[test]
    fn deposits_accumulate() {
        let mut atm = atm();
        atm.deposit_cash(Money::from_units(100)).unwrap();
        atm.deposit_cash(Money::from_units(200)).unwrap();
        atm.deposit_cash(Money::zero()).unwrap();
        assert_eq!(atm.cash_balance(), Money::from_units(2300));
    }

    #[test]
    fn negative_deposit_is_an_argument_error() {
        let mut atm = atm();
        let err = atm.deposit_cash(Money::from_units(-500)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(atm.cash_balance(), Money::from_units(2000));
    }

    #[test]
    fn overflowing_deposit_keeps_cash_unchanged() {
        let mut atm = Atm::new("Vault", Money::MAX).unwrap();
        let err = atm.deposit_cash(Money::new(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(atm.cash_balance(), Money::MAX);
    }

    #[test]
    fn withdraw_just_below_balance() {
        let mut atm = atm();
        atm.withdraw_cash(Money::from_str("1999.99").unwrap())
            .unwrap();
        assert_eq!(atm.cash_balance(), Money::from_str("0.01").unwrap());
    }

    #[test]
    fn withdraw_failures_are_distinct_kinds() {
        let mut atm = atm();

        let zero = atm.withdraw_cash(Money::zero()).unwrap_err();
        assert_eq!(zero.kind(), ErrorKind::InvalidArgument);

        let too_much = atm.withdraw_cash(Money::from_units(2500)).unwrap_err();
        assert_eq!(
            too_much,
            BankError::InsufficientFunds("ATM does not have sufficient cash.")
        );
        assert_eq!(too_much.kind(), ErrorKind::InvalidState);

        assert_eq!(atm.cash_balance(), Money::from_units(2000));
    }

    #[rstest]
    #[case("500", true)]
    #[case("999.9999", true)]
    #[case("1000", false)]
    #[case("1000.01", false)]
    #[case("2000", false)]
    fn low_cash_threshold(#[case] cash: &str, #[case] expected: bool) {
        let atm = Atm::new("Rural", Money::from_str(cash).unwrap()).unwrap();
        assert_eq!(atm.is_low_on_cash(), expected);
    }

    #[test]
    fn low_cash_status_follows_transactions() {
        let mut atm = atm();
        atm.deposit_cash(Money::from_units(1000)).unwrap();
        assert!(!atm.is_low_on_cash());
        atm.withdraw_cash(Money::from_units(2500)).unwrap();
        assert!(atm.is_low_on_cash());
    }

    #[test]
    fn balance_report_prints_cash() {
        assert_eq!(
            atm().balance_report(),
            "The current cash balance is: 2000.0000"
        );
    }
}
