//! Record ownership layer.
//!
//! # Responsibility
//! - Own every course and assignment record for the duration of one flow.
//! - Keep lookups and id allocation out of use-case services.
//!
//! # Invariants
//! - No component keeps long-lived references into the store; services take
//!   it by `&`/`&mut` per call.

pub mod record_store;
