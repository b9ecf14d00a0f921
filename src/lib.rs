pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::encoder::OrderEncoder;
pub use domain::fields::{Field, FieldSet};
pub use domain::line_item::LineItem;
pub use error::{CheckoutError, Result};
