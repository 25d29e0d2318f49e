use crate::common::error::BankError;

const UNDERSTAFFED_BELOW: u32 = 5;
const LARGE_ABOVE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    branch_code: String,
    location: String,
    number_of_employees: u32,
}

impl Branch {
    pub fn new(
        branch_code: impl Into<String>,
        location: impl Into<String>,
        number_of_employees: u32,
    ) -> Self {
        Self {
            branch_code: branch_code.into(),
            location: location.into(),
            number_of_employees,
        }
    }

    pub fn branch_code(&self) -> &str {
        &self.branch_code
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn number_of_employees(&self) -> u32 {
        self.number_of_employees
    }

    pub fn update_location(&mut self, new_location: &str) -> Result<(), BankError> {
        if new_location.trim().is_empty() {
            return Err(BankError::InvalidArgument("Location cannot be null or empty."));
        }
        self.location = new_location.to_string();
        Ok(())
    }

    pub fn hire_employees(&mut self, number: u32) -> Result<(), BankError> {
        if number < 1 {
            return Err(BankError::InvalidArgument("Must hire at least one employee."));
        }
        self.number_of_employees = self
            .number_of_employees
            .checked_add(number)
            .ok_or(BankError::InvalidArgument("Too many employees to hire."))?;
        Ok(())
    }

    pub fn release_employees(&mut self, number: u32) -> Result<(), BankError> {
        if number < 1 || number > self.number_of_employees {
            return Err(BankError::InvalidArgument(
                "Invalid number of employees to release.",
            ));
        }
        self.number_of_employees -= number;
        Ok(())
    }

    pub fn needs_more_employees(&self) -> bool {
        self.number_of_employees < UNDERSTAFFED_BELOW
    }

    pub fn is_large_branch(&self) -> bool {
        self.number_of_employees > LARGE_ABOVE
    }

    pub fn details(&self) -> String {
        format!(
            "Branch Code: {}, Location: {}, Number of Employees: {}",
            self.branch_code, self.location, self.number_of_employees
        )
    }
}
