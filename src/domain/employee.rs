use crate::common::error::BankError;

pub const RETIREMENT_AGE: u32 = 65;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
    employee_id: u32,
}

impl Employee {
    pub fn new(name: impl Into<String>, employee_id: u32) -> Result<Self, BankError> {
        if employee_id == 0 {
            return Err(BankError::InvalidArgument("Employee ID must be greater than 0."));
        }
        Ok(Self {
            name: name.into(),
            employee_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the name with a trimmed copy of `new_name`.
    pub fn set_name(&mut self, new_name: &str) -> Result<(), BankError> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(BankError::InvalidArgument("Name cannot be null or empty."));
        }
        self.name = trimmed.to_string();
        Ok(())
    }

    pub fn employee_id(&self) -> u32 {
        self.employee_id
    }

    pub fn is_valid_employee(&self) -> bool {
        self.employee_id > 0
    }

    /// Bumps the id by one; an id already at `u32::MAX` stays there.
    pub fn promote(&mut self) {
        self.employee_id = self.employee_id.saturating_add(1);
    }

    pub fn is_eligible_for_retirement(&self, age: u32) -> bool {
        age >= RETIREMENT_AGE
    }

    pub fn details(&self) -> String {
        format!(
            "Employee Name: {}, Employee ID: {}",
            self.name, self.employee_id
        )
    }
}
