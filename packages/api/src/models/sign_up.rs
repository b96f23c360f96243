//! # Restaurant sign-up request
//!
//! [`SignUpRequest`] is the payload built from the sign-up form at submission
//! time. It is `Serialize + Deserialize + PartialEq` so it can cross the
//! server/client boundary via Dioxus server functions.
//!
//! Construction goes through [`SignUpRequest::parse`], which trims every field
//! and enforces the form's invariants: the email must have valid email syntax
//! and the remaining three fields must be non-empty. A request deserialized on
//! the server is re-checked with [`SignUpRequest::validate`] before being
//! forwarded.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

/// Validation failure for a sign-up form field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignUpError {
    #[error("Informe um e-mail válido.")]
    InvalidEmail,
    #[error("O campo \"{0}\" é obrigatório.")]
    MissingField(&'static str),
}

/// A new restaurant registration, as collected by the sign-up form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignUpRequest {
    pub email: String,
    pub restaurant_name: String,
    pub phone: String,
    pub manager_name: String,
}

impl SignUpRequest {
    /// Build a request from raw form values, trimming whitespace and
    /// validating every field.
    pub fn parse(
        email: impl Into<String>,
        restaurant_name: impl Into<String>,
        phone: impl Into<String>,
        manager_name: impl Into<String>,
    ) -> Result<Self, SignUpError> {
        let request = Self {
            email: email.into().trim().to_string(),
            restaurant_name: restaurant_name.into().trim().to_string(),
            phone: phone.into().trim().to_string(),
            manager_name: manager_name.into().trim().to_string(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Check the form invariants. Fields are reported in the order they
    /// appear on the form.
    pub fn validate(&self) -> Result<(), SignUpError> {
        if !self.email.validate_email() {
            return Err(SignUpError::InvalidEmail);
        }
        if self.restaurant_name.is_empty() {
            return Err(SignUpError::MissingField("nome do estabelecimento"));
        }
        if self.manager_name.is_empty() {
            return Err(SignUpError::MissingField("seu nome"));
        }
        if self.phone.is_empty() {
            return Err(SignUpError::MissingField("seu celular"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_request() {
        let request =
            SignUpRequest::parse("a@b.com", "Pizza X", "11999999999", "Ana").unwrap();
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.restaurant_name, "Pizza X");
        assert_eq!(request.phone, "11999999999");
        assert_eq!(request.manager_name, "Ana");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let request =
            SignUpRequest::parse(" ana@pizza.com ", "  Pizza X ", " 11999999999", "Ana ")
                .unwrap();
        assert_eq!(request.email, "ana@pizza.com");
        assert_eq!(request.restaurant_name, "Pizza X");
    }

    #[test]
    fn test_parse_rejects_malformed_email() {
        let result = SignUpRequest::parse("not-an-email", "Pizza X", "11999999999", "Ana");
        assert_eq!(result, Err(SignUpError::InvalidEmail));
    }

    #[test]
    fn test_parse_rejects_empty_email() {
        let result = SignUpRequest::parse("", "Pizza X", "11999999999", "Ana");
        assert_eq!(result, Err(SignUpError::InvalidEmail));
    }

    #[test]
    fn test_parse_rejects_missing_restaurant_name() {
        let result = SignUpRequest::parse("a@b.com", "   ", "11999999999", "Ana");
        assert_eq!(
            result,
            Err(SignUpError::MissingField("nome do estabelecimento"))
        );
    }

    #[test]
    fn test_parse_rejects_missing_manager_name() {
        let result = SignUpRequest::parse("a@b.com", "Pizza X", "11999999999", "");
        assert_eq!(result, Err(SignUpError::MissingField("seu nome")));
    }

    #[test]
    fn test_parse_rejects_missing_phone() {
        let result = SignUpRequest::parse("a@b.com", "Pizza X", "", "Ana");
        assert_eq!(result, Err(SignUpError::MissingField("seu celular")));
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            SignUpError::InvalidEmail.to_string(),
            "Informe um e-mail válido."
        );
        assert_eq!(
            SignUpError::MissingField("seu celular").to_string(),
            "O campo \"seu celular\" é obrigatório."
        );
    }
}
