//! Application layer containing the core workflow orchestration.
//!
//! This module defines the `OrderWorkflow`, the primary entry point for the order and
//! payment lifecycle, and the `SessionManager` for the explicit login/logout
//! lifecycle. Both operate over boxed gateway ports and hold no state of their own.

pub mod session;
pub mod workflow;
