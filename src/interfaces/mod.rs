//! Inbound and outbound adapters: basket CSV, order JSON and field CSV.

pub mod csv;
pub mod order_file;
