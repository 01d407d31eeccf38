//! Person entity - a single row of the `person` table.

use serde::{Deserialize, Serialize};

use crate::ids::PersonId;

/// A person record with a contact phone and a priced amount.
///
/// `id` is `None` until the store has persisted the record and handed back
/// its key. Records read from the store always carry `Some(id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Option<PersonId>,
    pub full_name: String,
    pub phone: String,
    /// Currency code (e.g. "AUD"); not validated.
    pub currency: String,
    pub price: f64,
}

impl Person {
    /// Create an unsaved person.
    pub fn new(
        full_name: impl Into<String>,
        phone: impl Into<String>,
        currency: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: None,
            full_name: full_name.into(),
            phone: phone.into(),
            currency: currency.into(),
            price,
        }
    }

    /// Attach the id the store assigned.
    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
