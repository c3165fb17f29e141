//! Application layer - command handlers orchestrating the pipeline.

pub mod handlers;
