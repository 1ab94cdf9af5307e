//! Customer collection store.

use super::collection::JsonCollection;
use super::StoreResult;
use crate::model::customer::{Customer, CustomerId, CustomerPatch};
use log::info;
use std::path::{Path, PathBuf};

const MODULE: &str = "customer_store";

/// Store over one customer collection file.
#[derive(Debug, Clone)]
pub struct CustomerStore {
    collection: JsonCollection<Customer>,
}

impl CustomerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path, MODULE),
        }
    }

    pub fn path(&self) -> &Path {
        self.collection.path()
    }

    /// Appends `customer` to the collection and returns it.
    ///
    /// Existing records with the same id are kept alongside it.
    pub fn create(&self, customer: Customer) -> StoreResult<Customer> {
        let created = self.collection.append(customer)?;
        info!(
            "event=customer_create module={MODULE} status=ok customer_id={}",
            created.customer_id
        );
        Ok(created)
    }

    /// Removes every customer with `customer_id`; returns the removed count.
    pub fn delete(&self, customer_id: CustomerId) -> StoreResult<usize> {
        self.collection.remove_all(customer_id)
    }

    /// Returns the first customer with `customer_id` and logs its description.
    pub fn display(&self, customer_id: CustomerId) -> Option<Customer> {
        let found = self.collection.find(customer_id);
        match &found {
            Some(customer) => info!("event=customer_display module={MODULE} status=found {customer}"),
            None => info!(
                "event=customer_display module={MODULE} status=not_found customer_id={customer_id}"
            ),
        }
        found
    }

    /// Applies `patch` to the first customer with `customer_id`.
    ///
    /// The file is rewritten even when nothing matched. Returns whether a
    /// customer matched.
    pub fn modify(&self, customer_id: CustomerId, patch: &CustomerPatch) -> StoreResult<bool> {
        self.collection
            .update_first(customer_id, |customer| customer.apply(patch))
    }

    pub fn load(&self) -> Vec<Customer> {
        self.collection.load()
    }

    pub fn try_load(&self) -> StoreResult<Vec<Customer>> {
        self.collection.try_load()
    }

    pub fn save(&self, customers: &[Customer]) -> StoreResult<()> {
        self.collection.save(customers)
    }
}
