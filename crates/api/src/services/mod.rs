//! Business services for the FashionCamp API.
//!
//! Services own the operation-level rules (credential checks, session
//! lifecycle, cart invariants) and are constructed per-request over
//! borrowed repositories; they hold no state of their own.

pub mod auth;
pub mod cart;
