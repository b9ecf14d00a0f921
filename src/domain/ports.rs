use super::fields::FieldSet;
use super::order::PresentationOptions;

/// Everything a renderer needs to build the checkout form.
#[derive(Debug, Clone, Copy)]
pub struct PaymentForm<'a> {
    pub action: &'a str,
    pub fields: &'a FieldSet,
    pub presentation: &'a PresentationOptions,
}

/// Turns an encoded order into markup the buyer's browser can submit.
pub trait FormRenderer: Send + Sync {
    fn render(&self, form: &PaymentForm<'_>) -> String;
}
