//! Document models and request payloads.
//!
//! Documents serialize with camelCase keys. Request payloads keep every
//! field optional so that missing fields are reported with a
//! [`ValidationError`] naming them, rather than a generic JSON error.

pub mod customer;
pub mod order;

use core::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use customer::{CreateCustomer, Customer, CustomerChanges, NewCustomer};
pub use order::{CreateOrder, NewOrder, Order, OrderItem, PaymentReceipt};

/// A `{message}` body, used for confirmations and errors alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Required fields were absent (or empty) in a create payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Model being validated, e.g. `Customer`.
    pub model: &'static str,
    /// Missing field names, in declaration order.
    pub missing: Vec<&'static str>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed: ", self.model)?;
        for (i, field) in self.missing.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: Path `{field}` is required.")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collects missing required fields while a payload is checked.
pub(crate) struct Required {
    model: &'static str,
    missing: Vec<&'static str>,
}

impl Required {
    pub(crate) const fn new(model: &'static str) -> Self {
        Self {
            model,
            missing: Vec::new(),
        }
    }

    /// Take a required value, recording it as missing when absent.
    pub(crate) fn take<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(field);
        }
        value
    }

    /// Like [`Required::take`], but empty strings count as missing.
    pub(crate) fn take_str(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        self.take(field, value.filter(|s| !s.is_empty()))
    }

    /// The error describing every field recorded as missing.
    pub(crate) fn into_error(self) -> ValidationError {
        ValidationError {
            model: self.model,
            missing: self.missing,
        }
    }
}
