use super::fields::is_blank;
use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;

/// A single row of the basket.
///
/// Only `item_name`, `amount` and `quantity` are required by the gateway; every
/// other per-line value defaults to zero, which means "not sent".
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Merchant SKU or reference. Optional.
    pub item_number: Option<String>,
    /// Name shown to the buyer on the gateway.
    pub item_name: String,
    /// Unit price.
    pub amount: Decimal,
    pub quantity: u32,
    pub weight: Decimal,
    pub shipping: Decimal,
    pub handling: Decimal,
    pub discount_amount: Decimal,
    pub discount_rate: Decimal,
    pub tax: Decimal,
}

impl LineItem {
    /// Creates a line item with a quantity of one and all optional values zeroed.
    pub fn new(item_name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            item_number: None,
            item_name: item_name.into(),
            amount,
            quantity: 1,
            weight: Decimal::ZERO,
            shipping: Decimal::ZERO,
            handling: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            discount_rate: Decimal::ZERO,
            tax: Decimal::ZERO,
        }
    }

    pub fn item_number(mut self, item_number: impl Into<String>) -> Self {
        self.item_number = Some(item_number.into());
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn weight(mut self, weight: Decimal) -> Self {
        self.weight = weight;
        self
    }

    pub fn shipping(mut self, shipping: Decimal) -> Self {
        self.shipping = shipping;
        self
    }

    pub fn handling(mut self, handling: Decimal) -> Self {
        self.handling = handling;
        self
    }

    pub fn discount_amount(mut self, discount_amount: Decimal) -> Self {
        self.discount_amount = discount_amount;
        self
    }

    pub fn discount_rate(mut self, discount_rate: Decimal) -> Self {
        self.discount_rate = discount_rate;
        self
    }

    pub fn tax(mut self, tax: Decimal) -> Self {
        self.tax = tax;
        self
    }

    /// Checks the fields the gateway cannot do without.
    ///
    /// A line item needs a non-blank name, a non-zero amount and a non-zero
    /// quantity. Negative amounts are passed through untouched.
    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.item_name) {
            return Err(CheckoutError::InvalidLineItem(
                "item name must not be empty".to_string(),
            ));
        }
        if self.amount.is_zero() {
            return Err(CheckoutError::InvalidLineItem(format!(
                "amount for '{}' must not be zero",
                self.item_name
            )));
        }
        if self.quantity == 0 {
            return Err(CheckoutError::InvalidLineItem(format!(
                "quantity for '{}' must not be zero",
                self.item_name
            )));
        }
        Ok(())
    }
}
