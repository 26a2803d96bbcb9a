//! Gateway implementations: the reqwest-backed client for the real backend and
//! in-memory fakes for tests and offline development.

pub mod http;
pub mod in_memory;
