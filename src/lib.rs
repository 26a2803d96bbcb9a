//! Order and payment workflow engine for the rurafood ordering system.
//!
//! The crate orchestrates the order lifecycle against an external backend API:
//! creating orders, requesting payment links, reconciling externally-reported payment
//! outcomes, and applying restaurant-driven status updates. All durable state lives in
//! the backend; the engine validates input, enforces the order-status state machine,
//! and moves JSON across the wire.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod test_support;
