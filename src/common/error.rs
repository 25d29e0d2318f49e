/// Coarse classification of a rejected domain operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value that violates a precondition.
    InvalidArgument,
    /// The value was well-formed but the current state forbids the operation.
    InvalidState,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("{0}")]
    InvalidArgument(&'static str),
    #[error("{0}")]
    InsufficientFunds(&'static str),
    #[error("Account {0} already exists.")]
    DuplicateAccount(String),
    #[error("Account {0} not found.")]
    AccountNotFound(String),
}

impl BankError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BankError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            BankError::InsufficientFunds(_)
            | BankError::DuplicateAccount(_)
            | BankError::AccountNotFound(_) => ErrorKind::InvalidState,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("unexpected argument: {0}. usage: banking-demo [transactions.csv]")]
    UnexpectedArg(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Bank(#[from] BankError),
}
