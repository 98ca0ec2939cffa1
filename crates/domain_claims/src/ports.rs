//! Record store port
//!
//! The `RecordStore` trait is everything the record manager needs from
//! persistence. Loads return freshly built collections; saves borrow a
//! snapshot and fully replace what was stored before. Implementations never
//! keep references to the manager's collections.
//!
//! - **File adapter**: `infra_file::FileRecordStore`, two comma-delimited files
//! - **Mock adapter**: [`mock::MockRecordStore`], in memory, for tests

use core_kernel::{Loaded, StoreError};
use domain_party::Customer;

use crate::claim::Claim;

/// Persistence operations for customers and claims
pub trait RecordStore {
    /// Loads every readable customer record
    ///
    /// A missing backing file yields an empty collection.
    fn load_customers(&self) -> Result<Loaded<Customer>, StoreError>;

    /// Loads every readable claim record
    ///
    /// A missing backing file yields an empty collection.
    fn load_claims(&self) -> Result<Loaded<Claim>, StoreError>;

    /// Replaces the stored customers with `customers`
    fn save_customers(&self, customers: &[Customer]) -> Result<(), StoreError>;

    /// Replaces the stored claims with `claims`
    fn save_claims(&self, claims: &[Claim]) -> Result<(), StoreError>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn load_customers(&self) -> Result<Loaded<Customer>, StoreError> {
        (**self).load_customers()
    }

    fn load_claims(&self) -> Result<Loaded<Claim>, StoreError> {
        (**self).load_claims()
    }

    fn save_customers(&self, customers: &[Customer]) -> Result<(), StoreError> {
        (**self).save_customers(customers)
    }

    fn save_claims(&self, claims: &[Claim]) -> Result<(), StoreError> {
        (**self).save_claims(claims)
    }
}

/// Mock implementation for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex, MutexGuard};

    #[derive(Debug, Default)]
    struct MockState {
        customers: Vec<Customer>,
        claims: Vec<Claim>,
        fail_writes: bool,
        saves: usize,
    }

    /// In-memory mock implementation of RecordStore
    ///
    /// Clones share state, so a test can keep a handle after moving the store
    /// into a record manager.
    #[derive(Debug, Clone, Default)]
    pub struct MockRecordStore {
        state: Arc<Mutex<MockState>>,
    }

    impl MockRecordStore {
        /// Creates an empty mock store
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with records for testing
        pub fn with_records(customers: Vec<Customer>, claims: Vec<Claim>) -> Self {
            let store = Self::new();
            {
                let mut state = store.lock();
                state.customers = customers;
                state.claims = claims;
            }
            store
        }

        /// Makes every subsequent save fail (or succeed again)
        pub fn fail_writes(&self, fail: bool) {
            self.lock().fail_writes = fail;
        }

        /// Customers as last saved
        pub fn stored_customers(&self) -> Vec<Customer> {
            self.lock().customers.clone()
        }

        /// Claims as last saved
        pub fn stored_claims(&self) -> Vec<Claim> {
            self.lock().claims.clone()
        }

        /// Number of successful save calls (customers and claims counted separately)
        pub fn save_count(&self) -> usize {
            self.lock().saves
        }

        fn lock(&self) -> MutexGuard<'_, MockState> {
            self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }
    }

    impl RecordStore for MockRecordStore {
        fn load_customers(&self) -> Result<Loaded<Customer>, StoreError> {
            Ok(Loaded {
                records: self.lock().customers.clone(),
                diagnostics: Vec::new(),
            })
        }

        fn load_claims(&self) -> Result<Loaded<Claim>, StoreError> {
            Ok(Loaded {
                records: self.lock().claims.clone(),
                diagnostics: Vec::new(),
            })
        }

        fn save_customers(&self, customers: &[Customer]) -> Result<(), StoreError> {
            let mut state = self.lock();
            if state.fail_writes {
                return Err(StoreError::internal("mock write failure"));
            }
            state.customers = customers.to_vec();
            state.saves += 1;
            Ok(())
        }

        fn save_claims(&self, claims: &[Claim]) -> Result<(), StoreError> {
            let mut state = self.lock();
            if state.fail_writes {
                return Err(StoreError::internal("mock write failure"));
            }
            state.claims = claims.to_vec();
            state.saves += 1;
            Ok(())
        }
    }
}
