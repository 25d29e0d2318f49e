use crate::{
    common::error::BankError,
    domain::loan::{amortized_monthly_payment, is_positive},
};

const LONG_TERM_MIN_YEARS: u32 = 10;

/// Repayment calculator for a prospective loan.
///
/// Independent of [`crate::domain::loan::Loan`]; both share the amortization
/// formula but this tool also totals the repayment and applies an
/// affordability check.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanAnalysisTool {
    principal: f64,
    annual_interest_rate: f64,
    years: u32,
}

impl LoanAnalysisTool {
    pub fn new(principal: f64, annual_interest_rate: f64, years: u32) -> Result<Self, BankError> {
        if !is_positive(principal) || !is_positive(annual_interest_rate) || years == 0 {
            return Err(BankError::InvalidArgument(
                "Principal, interest rate, and years must be greater than 0.",
            ));
        }
        Ok(Self {
            principal,
            annual_interest_rate,
            years,
        })
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn calculate_monthly_payment(&self) -> f64 {
        amortized_monthly_payment(self.principal, self.annual_interest_rate, self.years)
    }

    pub fn calculate_total_payment(&self) -> f64 {
        self.calculate_monthly_payment() * f64::from(self.years) * 12.0
    }

    pub fn total_interest(&self) -> f64 {
        self.calculate_total_payment() - self.principal
    }

    pub fn loan_details(&self) -> String {
        format!(
            "Principal: {:.2}, Annual Interest Rate: {:.2}%, Years: {}",
            self.principal, self.annual_interest_rate, self.years
        )
    }

    /// Affordable when the monthly payment stays under a tenth of
    /// `principal / 12`.
    pub fn is_affordable(&self) -> bool {
        let threshold = self.principal / 12.0 * 0.1;
        self.calculate_monthly_payment() < threshold
    }

    pub fn adjust_principal(&mut self, new_principal: f64) -> Result<(), BankError> {
        if !is_positive(new_principal) {
            return Err(BankError::InvalidArgument(
                "New principal must be greater than 0.",
            ));
        }
        self.principal = new_principal;
        Ok(())
    }

    pub fn is_long_term(&self) -> bool {
        self.years > LONG_TERM_MIN_YEARS
    }
}
