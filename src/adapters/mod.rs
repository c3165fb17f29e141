//! Adapters - Implementations of the ports.

pub mod memory;

pub use memory::InMemoryAssessmentStore;
