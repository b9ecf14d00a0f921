use super::fields::is_blank;
use super::numeric::NumericValue;
use std::fmt;

/// Hosted checkout endpoint. Cart uploads are always posted here.
pub const GATEWAY_URL: &str = "https://www.paypal.com/cgi-bin/webscr";
pub const DEFAULT_CURRENCY: &str = "GBP";
pub const DEFAULT_COUNTRY: &str = "GB";
pub const DEFAULT_BUTTON_TEXT: &str = "PayPal Checkout";
/// Form name used when auto-submit needs a target and none was given.
pub const DEFAULT_FORM_NAME: &str = "paypal_standard_payment_form";

/// Who gets paid, in what currency, and where the gateway sends the buyer and
/// the IPN notifications afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantConfig {
    pub recipient: String,
    pub currency_code: String,
    pub notify_url: String,
    pub return_url: String,
}

impl Default for MerchantConfig {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            currency_code: DEFAULT_CURRENCY.to_string(),
            notify_url: String::new(),
            return_url: String::new(),
        }
    }
}

impl MerchantConfig {
    pub fn submit_url(&self) -> &'static str {
        GATEWAY_URL
    }
}

/// Buyer details used to prefill the gateway sign-up page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Buyer postal address.
///
/// `force_use` stops the buyer from changing the address on the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub town: String,
    pub post_code: String,
    /// ISO-3166 alpha-2 code.
    pub country_code: String,
    pub force_use: bool,
}

impl Default for Address {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightUnit {
    Lbs,
    #[default]
    Kgs,
}

impl WeightUnit {
    /// Maps caller input onto a supported unit. Anything other than `lbs` or
    /// `kgs`, including an empty string, falls back to `kgs`.
    pub fn normalize(raw: &str) -> Self {
        match raw {
            "lbs" => WeightUnit::Lbs,
            _ => WeightUnit::Kgs,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Lbs => "lbs",
            WeightUnit::Kgs => "kgs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingDetails {
    pub weight_units: WeightUnit,
    pub cart_weight: Option<NumericValue>,
    pub shipping_cost: Option<NumericValue>,
}

/// Cart-wide discounts, applied by the gateway on top of per-line discounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscountDetails {
    pub cart_discount_amount: Option<NumericValue>,
    pub cart_discount_rate: Option<NumericValue>,
}

/// How the checkout button and its form should look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationOptions {
    pub button_text: String,
    pub button_class: String,
    pub form_name: String,
    pub form_class: String,
    pub auto_submit: bool,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            button_text: DEFAULT_BUTTON_TEXT.to_string(),
            button_class: String::new(),
            form_name: String::new(),
            form_class: String::new(),
            auto_submit: false,
        }
    }
}

impl PresentationOptions {
    /// Overlays the non-blank arguments onto the current options.
    ///
    /// Blank arguments keep whatever was stored before. Auto-submit is set or
    /// cleared on every call, and an auto-submitting form always ends up with
    /// a name so the submit script can address it.
    pub fn apply(
        &mut self,
        button_text: &str,
        button_class: &str,
        form_name: &str,
        form_class: &str,
        auto_submit: bool,
    ) {
        overwrite_if_present(&mut self.button_text, button_text);
        overwrite_if_present(&mut self.button_class, button_class);
        overwrite_if_present(&mut self.form_name, form_name);
        overwrite_if_present(&mut self.form_class, form_class);

        self.auto_submit = auto_submit;
        if auto_submit && is_blank(&self.form_name) {
            self.form_name = DEFAULT_FORM_NAME.to_string();
        }
    }
}

fn overwrite_if_present(slot: &mut String, value: &str) {
    if !is_blank(value) {
        *slot = value.to_string();
    }
}
