//! Command handlers.
//!
//! Vipergen has a single use case, so there is exactly one handler.

pub mod generate;
