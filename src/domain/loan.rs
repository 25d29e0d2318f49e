use crate::common::error::BankError;

const SHORT_TERM_MAX_YEARS: u32 = 5;
const LONG_TERM_MIN_YEARS: u32 = 10;

/// Fixed-rate amortized monthly payment for a loan quoted at `annual_rate` percent.
///
/// `principal * r / (1 - (1 + r)^-n)` with `r = annual_rate / 12 / 100` and
/// `n = years * 12`.
pub(crate) fn amortized_monthly_payment(principal: f64, annual_rate: f64, years: u32) -> f64 {
    let monthly_rate = annual_rate / 12.0 / 100.0;
    let payments = f64::from(years) * 12.0;
    principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-payments))
}

/// Strictly positive; NaN is rejected.
pub(crate) fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// A fixed-term loan. Interest is quoted as simple interest over the whole
/// term while the monthly payment uses the amortization formula; the two are
/// not reconciled.
#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    amount: f64,
    interest_rate: f64,
    duration: u32,
}

impl Loan {
    /// `interest_rate` is an annual percentage, `duration` is in years.
    pub fn new(amount: f64, interest_rate: f64, duration: u32) -> Result<Self, BankError> {
        if !is_positive(amount) || !is_positive(interest_rate) || duration == 0 {
            return Err(BankError::InvalidArgument(
                "Amount, interest rate, and duration must be greater than 0.",
            ));
        }
        Ok(Self {
            amount,
            interest_rate,
            duration,
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn calculate_interest(&self) -> f64 {
        self.amount * self.interest_rate * f64::from(self.duration) / 100.0
    }

    pub fn total_amount(&self) -> f64 {
        self.amount + self.calculate_interest()
    }

    pub fn calculate_monthly_payment(&self) -> f64 {
        amortized_monthly_payment(self.amount, self.interest_rate, self.duration)
    }

    pub fn is_short_term(&self) -> bool {
        self.duration <= SHORT_TERM_MAX_YEARS
    }

    pub fn is_long_term(&self) -> bool {
        self.duration > LONG_TERM_MIN_YEARS
    }

    pub fn adjust_amount(&mut self, new_amount: f64) -> Result<(), BankError> {
        if !is_positive(new_amount) {
            return Err(BankError::InvalidArgument("New amount must be greater than 0."));
        }
        self.amount = new_amount;
        Ok(())
    }

    pub fn modify_interest_rate(&mut self, new_rate: f64) -> Result<(), BankError> {
        if !is_positive(new_rate) {
            return Err(BankError::InvalidArgument(
                "New interest rate must be greater than 0.",
            ));
        }
        self.interest_rate = new_rate;
        Ok(())
    }
}
