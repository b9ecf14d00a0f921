//! Application layer containing the order encoding logic.
//!
//! This module defines the `OrderEncoder` which acts as the primary entry point
//! for building a checkout request. Callers feed it order data through setters
//! and project it onto the gateway field vocabulary with `encode`.

pub mod encoder;
