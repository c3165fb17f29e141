//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentStateStore` - key-value persistence of a session's answers
//!   and severity ledger between pipeline stages

mod state_store;

pub use state_store::{AssessmentStateStore, StateStoreError};
