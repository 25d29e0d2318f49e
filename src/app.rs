use std::{
    io::{BufWriter, Write, stdout},
    path::{Path, PathBuf},
};

use crate::{
    common::{error::AppError, money::Money},
    domain::{
        account::Account, atm::Atm, bank::Bank, branch::Branch, customer::Customer,
        employee::Employee, loan::Loan, loan_analysis::LoanAnalysisTool,
        transaction::Transaction, transaction_log::TransactionLog,
    },
    io::{reader, writer},
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Optional CSV of extra transactions to append to the demo log.
    pub transactions_path: Option<PathBuf>,
}

impl DemoConfig {
    /// Builds the configuration from process arguments, program name first.
    pub fn from_args<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
        match args.as_slice() {
            [] | [_] => Ok(Self::default()),
            [_, path] => Ok(Self {
                transactions_path: Some(PathBuf::from(path)),
            }),
            [_, _, extra, ..] => Err(AppError::UnexpectedArg(extra.clone())),
        }
    }
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = DemoConfig::from_args(args)?;
    tracing::info!(import = ?config.transactions_path, "starting banking demo");

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_demo(&config, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Walks every domain type through a fixed script and reports each step on
/// `out`. Expected rejections are reported, not returned.
pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), AppError> {
    let mut account1 = Account::new("123456789", Money::from_units(1000));
    let mut account2 = Account::new("987654321", Money::from_units(500));
    let mut atm = Atm::new("Main Street", Money::from_units(5000))?;
    let mut bank = Bank::new();
    let mut branch = Branch::new("B001", "New York", 20);
    let mut customer = Customer::new("John Doe", 30);
    let mut employee = Employee::new("Samantha", 101)?;
    let mut loan = Loan::new(10_000.0, 5.0, 5)?;
    let loan_analysis = LoanAnalysisTool::new(20_000.0, 5.0, 5)?;
    let mut log = TransactionLog::new();

    writeln!(out, "\nInitial Customer Details:")?;
    writeln!(out, "{}", customer.details())?;
    customer.update_name("John Smith")?;
    customer.celebrate_birthday();
    writeln!(out, "\nUpdated Customer Details:")?;
    writeln!(out, "{}", customer.details())?;

    writeln!(out, "\nInitial Employee Details:")?;
    writeln!(out, "{}", employee.details())?;
    employee.set_name("Alice Wonderland")?;
    employee.promote();
    writeln!(out, "\nUpdated Employee Details after name change and promotion:")?;
    writeln!(out, "{}", employee.details())?;

    writeln!(out, "\nBefore deposit, Account1 Balance: {}", account1.balance())?;
    account1.deposit(Money::from_units(200))?;
    writeln!(out, "After deposit, Account1 Balance: {}", account1.balance())?;

    writeln!(out, "\nBefore transfer, Account2 Balance: {}", account2.balance())?;
    account1.transfer_to(&mut account2, Money::from_units(200))?;
    writeln!(out, "After transfer, Account1 Balance: {}", account1.balance())?;
    writeln!(out, "After transfer, Account2 Balance: {}", account2.balance())?;

    writeln!(out, "\nATM Operations:")?;
    atm.deposit_cash(Money::from_units(1000))?;
    writeln!(
        out,
        "Deposited 1000 to ATM. New ATM Balance: {}",
        atm.cash_balance()
    )?;
    if let Err(e) = atm.withdraw_cash(Money::from_units(7000)) {
        tracing::debug!(error = %e, "atm withdrawal rejected");
        writeln!(out, "ATM Message: {e}")?;
    }
    writeln!(out, "{}", atm.balance_report())?;

    let opened = bank
        .create_account(account1.account_number(), account1.balance())
        .and_then(|()| bank.create_account(account2.account_number(), account2.balance()));
    match opened {
        Ok(()) => writeln!(out, "Accounts created successfully.")?,
        Err(e) => writeln!(out, "Failed to create account: {e}")?,
    }
    if let Err(e) = bank.create_account(account1.account_number(), Money::zero()) {
        writeln!(out, "Failed to create account: {e}")?;
    }
    writeln!(out, "{}", bank.account_details(account2.account_number())?)?;

    writeln!(out, "\nBranch Operations:")?;
    branch.update_location("Los Angeles")?;
    branch.hire_employees(5)?;
    if let Err(e) = branch.release_employees(30) {
        writeln!(out, "Warning: {e}")?;
    }
    writeln!(out, "{}", branch.details())?;

    writeln!(out, "\nInitial Loan Details:")?;
    writeln!(out, "Loan Interest: {:.2}", loan.calculate_interest())?;
    writeln!(out, "Total Loan Amount: {:.2}", loan.total_amount())?;
    loan.adjust_amount(12_000.0)?;
    loan.modify_interest_rate(6.0)?;
    writeln!(out, "\nAdjusted Loan Details:")?;
    writeln!(out, "Adjusted Loan Interest: {:.2}", loan.calculate_interest())?;
    writeln!(out, "Adjusted Total Loan Amount: {:.2}", loan.total_amount())?;
    writeln!(out, "Is the loan short term? {}", loan.is_short_term())?;
    writeln!(out, "Is the loan long term? {}", loan.is_long_term())?;

    writeln!(out, "\n{}", loan_analysis.loan_details())?;
    writeln!(
        out,
        "Adjusted Monthly Loan Payment: {:.2}",
        loan_analysis.calculate_monthly_payment()
    )?;
    writeln!(
        out,
        "Is the loan considered affordable? {}",
        loan_analysis.is_affordable()
    )?;

    log.add_transaction(Transaction::new("TXN123", Money::from_units(500), "Deposit")?)?;
    log.add_transaction(Transaction::new("TXN124", Money::from_units(200), "Withdrawal")?)?;
    if let Some(path) = &config.transactions_path {
        import_transactions(path, &mut log, out)?;
    }

    writeln!(out, "\nTransaction Log Details:")?;
    writeln!(out, "{}", log.transaction_details())?;
    writeln!(out, "Total Amount: {}", log.total_amount())?;

    writeln!(out, "\nTransaction Log CSV:")?;
    writer::write_transactions(&mut *out, log.as_slice())?;

    Ok(())
}

/// Appends rows from a CSV file to `log`. Rows with an unknown type are
/// skipped and reported; malformed rows abort the import.
fn import_transactions<W: Write>(
    path: &Path,
    log: &mut TransactionLog,
    out: &mut W,
) -> Result<(), AppError> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut imported = 0usize;
    for tx in reader::read_transactions(&mut rdr) {
        let tx = tx.map_err(AppError::Parse)?;
        let id = tx.transaction_id().to_string();
        match log.add_transaction(tx) {
            Ok(()) => imported += 1,
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "skipping imported transaction");
                writeln!(out, "Skipped transaction {id}: {e}")?;
            }
        }
    }
    writeln!(out, "\nImported {imported} transaction(s) from {}", path.display())?;
    Ok(())
}
