//! Signup Form
//!
//! Field validation for the signup page. Nothing is stored or sent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    FieldWorker,
    Analyst,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Administrator, Role::FieldWorker, Role::Analyst];

    /// Form value
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::FieldWorker => "field_worker",
            Role::Analyst => "analyst",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::FieldWorker => "Field Worker",
            Role::Analyst => "Data Analyst",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL.into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown role '{}'", s)))
    }
}

/// Raw signup form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub password: String,
    pub role: Option<Role>,
    pub location: String,
}

/// A complete signup submission
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Signup {
    pub name: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    pub location: String,
}

impl fmt::Debug for Signup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signup")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("location", &self.location)
            .finish()
    }
}

fn required(value: &str, field: &str) -> DomainResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::InvalidInput(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

impl SignupForm {
    pub fn validate(&self) -> DomainResult<Signup> {
        let name = required(&self.name, "name")?;
        // Passwords are taken verbatim, only emptiness is checked
        if self.password.is_empty() {
            return Err(DomainError::InvalidInput("password is required".to_string()));
        }
        let role = self.role
            .ok_or_else(|| DomainError::InvalidInput("role is required".to_string()))?;
        let location = required(&self.location, "location")?;

        Ok(Signup {
            name,
            password: self.password.clone(),
            role,
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        SignupForm {
            name: "Asha".to_string(),
            password: "s3cret pass".to_string(),
            role: Some(Role::FieldWorker),
            location: "Jaipur".to_string(),
        }
    }

    #[test]
    fn test_validate_complete_form() {
        let signup = filled().validate().unwrap();
        assert_eq!(signup.name, "Asha");
        assert_eq!(signup.password, "s3cret pass");
        assert_eq!(signup.role, Role::FieldWorker);
        assert_eq!(signup.location, "Jaipur");
    }

    #[test]
    fn test_validate_missing_fields() {
        let mut form = filled();
        form.name = "  ".to_string();
        assert!(form.validate().is_err());

        let mut form = filled();
        form.password.clear();
        assert!(form.validate().is_err());

        let mut form = filled();
        form.role = None;
        assert!(form.validate().is_err());

        let mut form = filled();
        form.location.clear();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let signup = filled().validate().unwrap();
        let printed = format!("{:?}", signup);
        assert!(printed.contains("Asha"));
        assert!(!printed.contains("s3cret"));
    }

    #[test]
    fn test_role_values() {
        assert_eq!("analyst".parse::<Role>(), Ok(Role::Analyst));
        assert_eq!(Role::FieldWorker.label(), "Field Worker");
        assert!("admin".parse::<Role>().is_err());
    }
}
