//! Use-case services called by the terminal layer.
//!
//! # Responsibility
//! - Validate raw input before touching the record store.
//! - Route every mutation through a [`crate::storage::StateGateway`] save.
//!
//! # Invariants
//! - A failed validation or save leaves the caller's store unchanged.

pub mod assignment_catalog;
pub mod course_registry;
pub mod error;
pub mod grade_service;
