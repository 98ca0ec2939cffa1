//! Record manager
//!
//! The `RecordManager` owns the live customers and claims for the lifetime of
//! the process and is the only thing that mutates them. Every mutating
//! operation checks its preconditions first, changes memory, then immediately
//! rewrites both collections through the [`RecordStore`].
//!
//! Customers live in a lookup table keyed by [`CustomerKey`] (the normalized
//! full name). Claims refer to their owner by name, so finding a customer's
//! claims or the customers left without claims is a linear scan. The scans
//! are O(customers × claims), which is fine for the few hundred records an
//! office keeps.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info, warn};

use core_kernel::StoreError;
use domain_party::{Customer, CustomerKey};

use crate::claim::{Claim, ClaimUpdate};
use crate::error::ClaimError;
use crate::ports::RecordStore;

/// Owner of the in-memory customer and claim collections
#[derive(Debug)]
pub struct RecordManager<S> {
    store: S,
    customers: BTreeMap<CustomerKey, Customer>,
    claims: Vec<Claim>,
}

impl<S: RecordStore> RecordManager<S> {
    /// Loads both collections from the store and reconciles them
    ///
    /// Reconciliation keeps the first of any customers sharing a name and the
    /// first of any claims sharing an id. A claim whose owner is missing gets
    /// a blank customer record (age 0, empty details) under the owner name,
    /// and customers that no claim references are dropped. Both changes reach
    /// the files on the next save.
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::Persistence` if a file exists but cannot be read.
    pub fn open(store: S) -> Result<Self, ClaimError> {
        let customers = store.load_customers()?;
        let claims = store.load_claims()?;

        info!(
            customers = customers.records.len(),
            claims = claims.records.len(),
            skipped_lines = customers.skipped() + claims.skipped(),
            degraded_lines = customers.diagnostics.len() + claims.diagnostics.len()
                - customers.skipped()
                - claims.skipped(),
            "Records loaded"
        );

        Ok(Self::from_records(store, customers.records, claims.records))
    }

    /// Builds a manager from already loaded records, applying the same
    /// reconciliation as [`RecordManager::open`]
    pub fn from_records(store: S, customers: Vec<Customer>, claims: Vec<Claim>) -> Self {
        let mut table = BTreeMap::new();
        for customer in customers {
            let key = customer.key();
            if table.contains_key(&key) {
                warn!(customer = %customer.full_name, "Duplicate customer name, keeping the first record");
                continue;
            }
            table.insert(key, customer);
        }

        let mut seen = HashSet::new();
        let mut live_claims = Vec::with_capacity(claims.len());
        for claim in claims {
            if !seen.insert(claim.id.clone()) {
                warn!(claim_id = %claim.id, "Duplicate claim id, keeping the first record");
                continue;
            }
            table.entry(claim.owner_key()).or_insert_with(|| {
                warn!(
                    claim_id = %claim.id,
                    customer = %claim.customer_name,
                    "Claim refers to a customer that is not on file, registering a blank record"
                );
                Customer::new(claim.customer_name.clone(), 0, "", "", "")
            });
            live_claims.push(claim);
        }

        let mut manager = Self {
            store,
            customers: table,
            claims: live_claims,
        };
        manager.remove_orphaned_customers();
        manager
    }

    /// Adds a claim for `owner`
    ///
    /// The owner is matched against live customers by full name, ignoring
    /// case. A known customer is reused as stored (the other fields of
    /// `owner` are ignored); an unknown one is registered. The claim's owner
    /// name is set to the stored customer's full name.
    ///
    /// # Errors
    ///
    /// - `ClaimError::DuplicateId` if a live claim has the same id; nothing is
    ///   changed.
    /// - `ClaimError::Persistence` if saving fails; the claim stays added in
    ///   memory.
    pub fn add_claim(&mut self, mut claim: Claim, owner: Customer) -> Result<&Claim, ClaimError> {
        if self.position(claim.id.as_str()).is_some() {
            return Err(ClaimError::DuplicateId(claim.id));
        }

        let stored = self.customers.entry(owner.key()).or_insert_with(|| {
            info!(customer = %owner.full_name, "Registering new customer");
            owner
        });
        debug!(customer = %stored.full_name, claim_id = %claim.id, "Attaching claim to customer");
        claim.customer_name = stored.full_name.clone();

        let index = self.claims.len();
        info!(claim_id = %claim.id, customer = %claim.customer_name, "Claim added");
        self.claims.push(claim);

        self.save_all()?;
        Ok(&self.claims[index])
    }

    /// Replaces every field supplied in `update` on the claim with this id
    ///
    /// # Errors
    ///
    /// - `ClaimError::NotFound` if no live claim has the id.
    /// - `ClaimError::Persistence` if saving fails; the update stays applied
    ///   in memory.
    pub fn update_claim(&mut self, id: &str, update: ClaimUpdate) -> Result<&Claim, ClaimError> {
        let index = self.position(id).ok_or_else(|| ClaimError::NotFound(id.into()))?;

        let touched = self.claims[index].apply(update);
        info!(claim_id = %id, fields = ?touched, "Claim updated");

        self.save_all()?;
        Ok(&self.claims[index])
    }

    /// Removes the claim with this id and any customer left without claims
    ///
    /// Returns the removed claim.
    ///
    /// # Errors
    ///
    /// - `ClaimError::NotFound` if no live claim has the id.
    /// - `ClaimError::Persistence` if saving fails; the removal stays applied
    ///   in memory.
    pub fn delete_claim(&mut self, id: &str) -> Result<Claim, ClaimError> {
        let index = self.position(id).ok_or_else(|| ClaimError::NotFound(id.into()))?;

        let removed = self.claims.remove(index);
        info!(claim_id = %removed.id, "Claim deleted");
        self.remove_orphaned_customers();

        self.save_all()?;
        Ok(removed)
    }

    /// Exact-match lookup by claim id
    pub fn get_claim_by_id(&self, id: &str) -> Option<&Claim> {
        self.claims.iter().find(|claim| claim.id.as_str() == id)
    }

    /// Claims whose owner name matches `full_name`, ignoring case
    pub fn list_claims_for_customer(&self, full_name: &str) -> Vec<&Claim> {
        let key = CustomerKey::from_name(full_name);
        self.claims
            .iter()
            .filter(|claim| claim.owner_key() == key)
            .collect()
    }

    /// Customer lookup by full name, ignoring case
    pub fn get_customer(&self, full_name: &str) -> Option<&Customer> {
        self.customers.get(&CustomerKey::from_name(full_name))
    }

    /// Every live customer (ordered by normalized name) and every live claim
    /// (in insertion order)
    pub fn list_all(&self) -> (Vec<&Customer>, &[Claim]) {
        (self.customers.values().collect(), &self.claims)
    }

    /// Writes both collections, e.g. before exit or to retry a failed save
    pub fn flush(&self) -> Result<(), ClaimError> {
        self.save_all()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.claims.iter().position(|claim| claim.id.as_str() == id)
    }

    /// Cascading delete: drops every customer no live claim refers to
    fn remove_orphaned_customers(&mut self) {
        let orphaned: Vec<CustomerKey> = self
            .customers
            .keys()
            .filter(|key| !self.claims.iter().any(|claim| claim.owner_key() == **key))
            .cloned()
            .collect();

        for key in orphaned {
            if let Some(customer) = self.customers.remove(&key) {
                info!(customer = %customer.full_name, "Customer removed, no claims left");
            }
        }
    }

    /// Rewrites both files; both are attempted even if the first fails
    fn save_all(&self) -> Result<(), ClaimError> {
        let customers: Vec<Customer> = self.customers.values().cloned().collect();

        let customers_result = self.store.save_customers(&customers);
        let claims_result = self.store.save_claims(&self.claims);

        for error in [&customers_result, &claims_result].into_iter().filter_map(|r| r.as_ref().err()) {
            log_save_failure(error);
        }

        customers_result?;
        claims_result?;
        Ok(())
    }
}

fn log_save_failure(error: &StoreError) {
    warn!(error = %error, "Save failed; records on disk may be out of date");
}
