//! Customer documents.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use order_desk_core::CustomerId;

use super::{Required, ValidationError};

/// A stored customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "0b6f1c0e-7f1d-4a55-9a43-2b1d7c6f3a10",
    "name": "John Doe",
    "email": "johndoe@example.com",
    "address": "123 Main St, NY"
}))]
pub struct Customer {
    /// Store-assigned identifier.
    pub id: CustomerId,
    /// The customer's name.
    pub name: String,
    /// The customer's email, unique across customers.
    pub email: String,
    /// The customer's address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Body of `POST /customer`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// A validated customer ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub address: Option<String>,
}

impl CreateCustomer {
    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every missing or empty required field.
    pub fn validate(self) -> Result<NewCustomer, ValidationError> {
        let mut required = Required::new("Customer");
        let name = required.take_str("name", self.name);
        let email = required.take_str("email", self.email);

        match (name, email) {
            (Some(name), Some(email)) => Ok(NewCustomer {
                name,
                email,
                address: self.address,
            }),
            _ => Err(required.into_error()),
        }
    }
}

/// Body of `PATCH /customer/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CustomerChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl CustomerChanges {
    /// Apply the present fields to a customer in place.
    pub fn apply(self, customer: &mut Customer) {
        if let Some(name) = self.name {
            customer.name = name;
        }
        if let Some(email) = self.email {
            customer.email = email;
        }
        if self.address.is_some() {
            customer.address = self.address;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            id: CustomerId::generate(),
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            address: None,
        }
    }

    #[test]
    fn test_validate_accepts_missing_address() {
        let new = CreateCustomer {
            name: Some("Ada".to_string()),
            email: Some("ada@x.com".to_string()),
            address: None,
        }
        .validate()
        .unwrap();
        assert_eq!(new.name, "Ada");
        assert!(new.address.is_none());
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        let err = CreateCustomer::default().validate().unwrap_err();
        assert_eq!(err.missing, vec!["name", "email"]);
    }

    #[test]
    fn test_validate_treats_empty_email_as_missing() {
        let err = CreateCustomer {
            name: Some("Ada".to_string()),
            email: Some(String::new()),
            address: None,
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.missing, vec!["email"]);
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut c = customer();
        CustomerChanges {
            address: Some("X".to_string()),
            ..CustomerChanges::default()
        }
        .apply(&mut c);
        assert_eq!(c.name, "Ada");
        assert_eq!(c.email, "ada@x.com");
        assert_eq!(c.address.as_deref(), Some("X"));
    }

    #[test]
    fn test_serialization_omits_absent_address() {
        let json = serde_json::to_value(customer()).unwrap();
        assert!(json.get("address").is_none());
        assert_eq!(json["name"], "Ada");
    }
}
