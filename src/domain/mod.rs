//! Domain types and invariants: the order status state machine, item normalization,
//! payment payloads and outcome classification, explicit sessions, and the gateway
//! ports the application layer orchestrates over.

pub mod order;
pub mod payment;
pub mod ports;
pub mod session;
