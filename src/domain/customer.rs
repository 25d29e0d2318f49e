use crate::common::error::BankError;

pub const ADULT_AGE: u32 = 18;
pub const SENIOR_AGE: u32 = 65;
/// Youth discount applies strictly below this age.
pub const YOUTH_DISCOUNT_LIMIT: u32 = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    age: u32,
}

impl Customer {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn update_name(&mut self, new_name: &str) -> Result<(), BankError> {
        if new_name.trim().is_empty() {
            return Err(BankError::InvalidArgument("Name cannot be null or empty."));
        }
        self.name = new_name.to_string();
        Ok(())
    }

    /// Ages by one year, holding at `u32::MAX`.
    pub fn celebrate_birthday(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    pub fn is_senior(&self) -> bool {
        self.age >= SENIOR_AGE
    }

    pub fn is_eligible_for_youth_discount(&self) -> bool {
        self.age < YOUTH_DISCOUNT_LIMIT
    }

    pub fn details(&self) -> String {
        format!("Customer Name: {}\nCustomer Age: {}", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn update_name_keeps_value_as_given() {
        let mut customer = Customer::new("John Doe", 30);
        customer.update_name(" John Smith").unwrap();
        assert_eq!(customer.name(), " John Smith");
    }

    #[test]
    fn update_name_rejects_blank() {
        let mut customer = Customer::new("John Doe", 30);
        assert!(customer.update_name("").is_err());
        assert!(customer.update_name(" \t").is_err());
        assert_eq!(customer.name(), "John Doe");
    }

    #[test]
    fn birthday_increments_age() {
        let mut customer = Customer::new("Kid", 17);
        assert!(!customer.is_adult());
        customer.celebrate_birthday();
        assert_eq!(customer.age(), 18);
        assert!(customer.is_adult());
    }

    #[test]
    fn birthday_holds_at_max_age() {
        let mut customer = Customer::new("Ancient", u32::MAX);
        customer.celebrate_birthday();
        assert_eq!(customer.age(), u32::MAX);
    }

    #[rstest]
    #[case(0, false, false, true)]
    #[case(18, true, false, true)]
    #[case(24, true, false, true)]
    #[case(25, true, false, false)]
    #[case(64, true, false, false)]
    #[case(65, true, true, false)]
    fn age_predicates(
        #[case] age: u32,
        #[case] adult: bool,
        #[case] senior: bool,
        #[case] youth: bool,
    ) {
        let customer = Customer::new("Someone", age);
        assert_eq!(customer.is_adult(), adult);
        assert_eq!(customer.is_senior(), senior);
        assert_eq!(customer.is_eligible_for_youth_discount(), youth);
    }

    #[test]
    fn details_format() {
        assert_eq!(
            Customer::new("John Doe", 30).details(),
            "Customer Name: John Doe\nCustomer Age: 30"
        );
    }
}
