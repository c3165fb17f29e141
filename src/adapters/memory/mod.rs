//! In-memory adapter implementations.

mod state_store;

pub use state_store::InMemoryAssessmentStore;
