//! JSON order configuration.
//!
//! Everything about an order except its basket can be described in a single
//! JSON document. Each section is optional; a missing section leaves the
//! encoder default in place.
//!
//! ```json
//! {
//!   "merchant": { "recipient": "shop@example.com", "currency_code": "EUR" },
//!   "invoice_number": "INV-1001",
//!   "tax": 1.5,
//!   "shipping": { "weight_units": "lbs", "cart_weight": "2.5", "shipping_cost": 4.99 },
//!   "presentation": { "auto_submit": true }
//! }
//! ```

use crate::application::encoder::OrderEncoder;
use crate::domain::numeric::NumericValue;
use crate::domain::order::DEFAULT_COUNTRY;
use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MerchantSection {
    pub recipient: Option<String>,
    pub currency_code: Option<String>,
    pub notify_url: Option<String>,
    pub return_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CustomerSection {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AddressSection {
    pub line1: String,
    pub line2: String,
    pub town: String,
    pub post_code: String,
    pub country_code: String,
    pub force_use: bool,
}

impl Default for AddressSection {
    fn default() -> Self {
        Self {
            line1: String::new(),
            line2: String::new(),
            town: String::new(),
            post_code: String::new(),
            country_code: DEFAULT_COUNTRY.to_string(),
            force_use: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ShippingSection {
    pub weight_units: String,
    pub cart_weight: Value,
    pub shipping_cost: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DiscountSection {
    pub amount: Value,
    pub rate: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PresentationSection {
    pub button_text: String,
    pub button_class: String,
    pub form_name: String,
    pub form_class: String,
    pub auto_submit: bool,
}

/// An order description loaded from JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OrderFile {
    pub merchant: MerchantSection,
    pub invoice_number: Option<String>,
    pub custom_number: Option<String>,
    pub tax: Option<Value>,
    pub customer: Option<CustomerSection>,
    pub address: Option<AddressSection>,
    pub shipping: Option<ShippingSection>,
    pub discount: Option<DiscountSection>,
    pub presentation: Option<PresentationSection>,
}

impl OrderFile {
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Calls the encoder setters for every section present in the file.
    pub fn apply(&self, encoder: &mut OrderEncoder) {
        let merchant = &self.merchant;
        if let Some(recipient) = &merchant.recipient {
            encoder.set_recipient(recipient.as_str());
        }
        if let Some(currency_code) = &merchant.currency_code {
            encoder.set_currency(currency_code.as_str());
        }
        if let Some(notify_url) = &merchant.notify_url {
            encoder.set_notify_url(notify_url.as_str());
        }
        if let Some(return_url) = &merchant.return_url {
            encoder.set_return_url(return_url.as_str());
        }

        if let Some(invoice_number) = &self.invoice_number {
            encoder.set_invoice_number(invoice_number.as_str());
        }
        if let Some(custom_number) = &self.custom_number {
            encoder.set_custom_number(custom_number.as_str());
        }
        if let Some(tax) = &self.tax {
            encoder.set_tax(numeric_value(tax));
        }

        if let Some(customer) = &self.customer {
            encoder.set_customer_details(
                customer.first_name.as_str(),
                customer.last_name.as_str(),
                customer.email.as_str(),
            );
        }
        if let Some(address) = &self.address {
            encoder.set_address(
                address.line1.as_str(),
                address.line2.as_str(),
                address.town.as_str(),
                address.post_code.as_str(),
                address.country_code.as_str(),
                address.force_use,
            );
        }
        if let Some(shipping) = &self.shipping {
            encoder.set_shipping_details(
                &shipping.weight_units,
                numeric_value(&shipping.cart_weight),
                numeric_value(&shipping.shipping_cost),
            );
        }
        if let Some(discount) = &self.discount {
            encoder.set_discount(numeric_value(&discount.amount), numeric_value(&discount.rate));
        }
        if let Some(presentation) = &self.presentation {
            encoder.configure_presentation(
                &presentation.button_text,
                &presentation.button_class,
                &presentation.form_name,
                &presentation.form_class,
                presentation.auto_submit,
            );
        }
    }
}

/// JSON numbers and numeric strings are accepted; anything else is absent.
/// Strings keep their exact text.
fn numeric_value(value: &Value) -> Option<NumericValue> {
    let parsed = match value {
        Value::Number(number) => NumericValue::parse(&number.to_string()),
        Value::String(raw) => NumericValue::parse(raw),
        _ => None,
    };
    if parsed.is_none() && !value.is_null() {
        debug!(%value, "Ignoring non-numeric order value");
    }
    parsed
}
