//! Typed domain records for courses and assignments.
//!
//! # Responsibility
//! - Define the canonical shapes persisted in the durable store.
//! - Provide boundary validation for raw terminal input.
//!
//! # Invariants
//! - Record ids are positive and never reused within one collection.
//! - A present assignment score always lies in `[0, 100]`.

pub mod assignment;
pub mod course;
pub mod due_date;
pub mod validation;
