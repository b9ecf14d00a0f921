use crate::domain::fields::{FieldSet, is_blank};
use crate::domain::line_item::LineItem;
use crate::domain::numeric::{IntoNumeric, NumericValue};
use crate::domain::order::{
    Address, CustomerDetails, DiscountDetails, MerchantConfig, PresentationOptions,
    ShippingDetails, WeightUnit,
};
use crate::domain::ports::{FormRenderer, PaymentForm};
use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Accumulates an order and encodes it into gateway request fields.
///
/// Setters never fail for business reasons; missing essentials are only
/// reported by [`OrderEncoder::encode`]. The one exception is
/// [`OrderEncoder::append_line_item`], which refuses incomplete rows up front
/// so the basket never holds something the gateway would reject.
#[derive(Debug, Clone, Default)]
pub struct OrderEncoder {
    merchant: MerchantConfig,
    basket: Vec<LineItem>,
    customer: CustomerDetails,
    address: Address,
    shipping: ShippingDetails,
    discount: DiscountDetails,
    tax: Option<NumericValue>,
    invoice_number: String,
    custom_number: String,
    presentation: PresentationOptions,
}

impl OrderEncoder {
    /// Creates an empty encoder with the gateway defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the PayPal business email payments are sent to.
    pub fn set_recipient(&mut self, email: impl Into<String>) -> &mut Self {
        self.merchant.recipient = email.into();
        self
    }

    /// Overrides the IPN URL stored in the merchant account.
    pub fn set_notify_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.merchant.notify_url = url.into();
        self
    }

    pub fn set_return_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.merchant.return_url = url.into();
        self
    }

    pub fn set_currency(&mut self, code: impl Into<String>) -> &mut Self {
        self.merchant.currency_code = code.into();
        self
    }

    /// Adds a row to the basket.
    ///
    /// Rows without a name, amount or quantity are rejected and the basket is
    /// left as it was.
    pub fn append_line_item(&mut self, item: LineItem) -> Result<()> {
        if let Err(e) = item.validate() {
            warn!(item_name = %item.item_name, "Rejected line item: {}", e);
            return Err(e);
        }
        self.basket.push(item);
        Ok(())
    }

    /// Replaces the customer details as a whole.
    pub fn set_customer_details(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> &mut Self {
        self.customer = CustomerDetails {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        };
        self
    }

    /// Replaces the buyer address as a whole.
    pub fn set_address(
        &mut self,
        line1: impl Into<String>,
        line2: impl Into<String>,
        town: impl Into<String>,
        post_code: impl Into<String>,
        country_code: impl Into<String>,
        force_use: bool,
    ) -> &mut Self {
        self.address = Address {
            line1: line1.into(),
            line2: line2.into(),
            town: town.into(),
            post_code: post_code.into(),
            country_code: country_code.into(),
            force_use,
        };
        self
    }

    /// Replaces the shipping details as a whole.
    ///
    /// Unknown weight units become `kgs`; non-numeric weight or cost is dropped.
    pub fn set_shipping_details(
        &mut self,
        weight_units: &str,
        cart_weight: impl IntoNumeric,
        shipping_cost: impl IntoNumeric,
    ) -> &mut Self {
        let weight_units = WeightUnit::normalize(weight_units);
        let cart_weight = cart_weight.into_numeric();
        let shipping_cost = shipping_cost.into_numeric();
        debug!(
            %weight_units,
            cart_weight_present = cart_weight.is_some(),
            shipping_cost_present = shipping_cost.is_some(),
            "Shipping details replaced"
        );
        self.shipping = ShippingDetails {
            weight_units,
            cart_weight,
            shipping_cost,
        };
        self
    }

    /// Replaces the cart-wide discount. Non-numeric values are dropped.
    pub fn set_discount(&mut self, amount: impl IntoNumeric, rate: impl IntoNumeric) -> &mut Self {
        self.discount = DiscountDetails {
            cart_discount_amount: amount.into_numeric(),
            cart_discount_rate: rate.into_numeric(),
        };
        self
    }

    /// Sets the order-level tax. A non-numeric value clears it.
    pub fn set_tax(&mut self, tax: impl IntoNumeric) -> &mut Self {
        self.tax = tax.into_numeric();
        if self.tax.is_none() {
            debug!("Order tax is not numeric, leaving it out");
        }
        self
    }

    /// Sets the invoice number. It must be unique per payment and is shown to
    /// the buyer.
    pub fn set_invoice_number(&mut self, number: impl Into<String>) -> &mut Self {
        self.invoice_number = number.into();
        self
    }

    /// Sets a passthrough value that is never shown to the buyer.
    pub fn set_custom_number(&mut self, number: impl Into<String>) -> &mut Self {
        self.custom_number = number.into();
        self
    }

    pub fn configure_presentation(
        &mut self,
        button_text: &str,
        button_class: &str,
        form_name: &str,
        form_class: &str,
        auto_submit: bool,
    ) -> &mut Self {
        self.presentation
            .apply(button_text, button_class, form_name, form_class, auto_submit);
        self
    }

    pub fn merchant(&self) -> &MerchantConfig {
        &self.merchant
    }

    pub fn basket(&self) -> &[LineItem] {
        &self.basket
    }

    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn shipping(&self) -> &ShippingDetails {
        &self.shipping
    }

    pub fn discount(&self) -> &DiscountDetails {
        &self.discount
    }

    pub fn tax(&self) -> Option<&NumericValue> {
        self.tax.as_ref()
    }

    pub fn presentation(&self) -> &PresentationOptions {
        &self.presentation
    }

    /// Projects the accumulated order onto the gateway field vocabulary.
    ///
    /// Numeric values equal to zero are treated like absent values and left
    /// out. Order-level numbers are sent exactly as the caller wrote them.
    /// Calling this repeatedly without mutation yields the same fields.
    pub fn encode(&self) -> Result<FieldSet> {
        if is_blank(&self.merchant.recipient) {
            return Err(CheckoutError::MissingRecipient);
        }
        if self.basket.is_empty() {
            return Err(CheckoutError::EmptyBasket);
        }

        let mut fields = FieldSet::new();

        fields.push("cmd", "_cart");
        fields.push("upload", "1");
        fields.push("no_note", "1");
        fields.push("charset", "utf-8");

        for (index, item) in self.basket.iter().enumerate() {
            encode_line_item(&mut fields, index + 1, item);
        }

        // Order details
        fields.push("business", self.merchant.recipient.as_str());
        fields.push_non_empty("currency_code", &self.merchant.currency_code);
        fields.push_non_empty("invoice", &self.invoice_number);
        fields.push_non_empty("custom", &self.custom_number);
        fields.push_non_empty("shopping_url", &self.merchant.return_url);
        fields.push_non_empty("notify_url", &self.merchant.notify_url);

        push_numeric(&mut fields, "tax", self.tax.as_ref());

        push_numeric(&mut fields, "shipping", self.shipping.shipping_cost.as_ref());
        fields.push("weight_units", self.shipping.weight_units.as_str());
        push_numeric(&mut fields, "weight_cart", self.shipping.cart_weight.as_ref());

        push_numeric(
            &mut fields,
            "discount_amount_cart",
            self.discount.cart_discount_amount.as_ref(),
        );
        push_numeric(
            &mut fields,
            "discount_rate_cart",
            self.discount.cart_discount_rate.as_ref(),
        );

        fields.push_non_empty("first_name", &self.customer.first_name);
        fields.push_non_empty("last_name", &self.customer.last_name);
        fields.push_non_empty("email", &self.customer.email);

        fields.push_non_empty("address1", &self.address.line1);
        fields.push_non_empty("address2", &self.address.line2);
        fields.push_non_empty("city", &self.address.town);
        fields.push_non_empty("zip", &self.address.post_code);
        fields.push_non_empty("country", &self.address.country_code);
        if self.address.force_use {
            fields.push("address_override", "1");
        }

        debug!(
            items = self.basket.len(),
            fields = fields.len(),
            "Encoded order"
        );
        Ok(fields)
    }

    /// Encodes the order and hands it to `renderer` together with the gateway
    /// endpoint and the presentation options.
    pub fn generate_form(&self, renderer: &dyn FormRenderer) -> Result<String> {
        let fields = self.encode()?;
        let form = PaymentForm {
            action: self.merchant.submit_url(),
            fields: &fields,
            presentation: &self.presentation,
        };
        Ok(renderer.render(&form))
    }
}

fn encode_line_item(fields: &mut FieldSet, i: usize, item: &LineItem) {
    if let Some(item_number) = &item.item_number {
        fields.push_non_empty(format!("item_number_{i}"), item_number);
    }
    fields.push(format!("item_name_{i}"), item.item_name.as_str());
    fields.push(format!("amount_{i}"), item.amount.to_string());
    if item.quantity != 0 {
        fields.push(format!("quantity_{i}"), item.quantity.to_string());
    }
    push_decimal(fields, &format!("weight_{i}"), Some(item.weight));
    push_decimal(fields, &format!("shipping_{i}"), Some(item.shipping));
    push_decimal(fields, &format!("handling_{i}"), Some(item.handling));
    push_decimal(
        fields,
        &format!("discount_amount_{i}"),
        Some(item.discount_amount),
    );
    push_decimal(fields, &format!("discount_rate_{i}"), Some(item.discount_rate));
    push_decimal(fields, &format!("tax_{i}"), Some(item.tax));
}

// Zero is indistinguishable from absent on the wire.
fn push_decimal(fields: &mut FieldSet, name: &str, value: Option<Decimal>) {
    if let Some(value) = value.filter(|v| !v.is_zero()) {
        fields.push(name, value.to_string());
    }
}

fn push_numeric(fields: &mut FieldSet, name: &str, value: Option<&NumericValue>) {
    if let Some(value) = value.filter(|v| !v.is_zero()) {
        fields.push(name, value.as_str());
    }
}
