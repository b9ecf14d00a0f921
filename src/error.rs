use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Missing recipient: no PayPal business email has been set")]
    MissingRecipient,
    #[error("Empty basket: at least one line item is required")]
    EmptyBasket,
    #[error("Invalid line item: {0}")]
    InvalidLineItem(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
