pub mod account;
pub mod atm;
pub mod bank;
pub mod branch;
pub mod customer;
pub mod employee;
pub mod loan;
pub mod loan_analysis;
pub mod transaction;
pub mod transaction_log;
