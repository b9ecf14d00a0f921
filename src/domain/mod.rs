//! Domain layer: the order building blocks and the field vocabulary the
//! gateway understands.

pub mod fields;
pub mod line_item;
pub mod numeric;
pub mod order;
pub mod ports;
