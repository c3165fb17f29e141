//! Command handlers, grouped by area.

pub mod assessment;
