//! Customer record and its partial update.

use super::Record;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Caller-supplied customer identifier.
pub type CustomerId = u64;

/// Persisted customer record.
///
/// No uniqueness or email-format validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(customer_id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            customer_id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Overwrites only the fields present in `patch`.
    pub fn apply(&mut self, patch: &CustomerPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(email) = &patch.email {
            self.email.clone_from(email);
        }
    }
}

impl Record for Customer {
    type Id = CustomerId;

    fn id(&self) -> CustomerId {
        self.customer_id
    }
}

impl Display for Customer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Email: {}",
            self.customer_id, self.name, self.email
        )
    }
}

/// Partial update for [`Customer`]; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CustomerPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
