use crate::domain::line_item::LineItem;
use crate::domain::numeric::parse_numeric;
use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// Raw basket row as it appears in the CSV file.
///
/// Numbers are read as text so the scale the merchant typed (`1.50`) survives
/// all the way to the gateway.
#[derive(Debug, Deserialize)]
struct LineItemRecord {
    #[serde(default)]
    item_number: Option<String>,
    item_name: String,
    amount: String,
    #[serde(default)]
    quantity: Option<String>,
    #[serde(default)]
    weight: Option<String>,
    #[serde(default)]
    shipping: Option<String>,
    #[serde(default)]
    handling: Option<String>,
    #[serde(default)]
    discount_amount: Option<String>,
    #[serde(default)]
    discount_rate: Option<String>,
    #[serde(default)]
    tax: Option<String>,
}

impl TryFrom<LineItemRecord> for LineItem {
    type Error = CheckoutError;

    fn try_from(record: LineItemRecord) -> Result<Self> {
        let amount = parse_numeric(&record.amount).ok_or_else(|| {
            CheckoutError::InvalidLineItem(format!(
                "amount '{}' for '{}' is not numeric",
                record.amount, record.item_name
            ))
        })?;
        let quantity = match record.quantity.as_deref() {
            None | Some("") => 1,
            Some(raw) => raw.parse::<u32>().map_err(|_| {
                CheckoutError::InvalidLineItem(format!(
                    "quantity '{}' for '{}' is not a whole number",
                    raw, record.item_name
                ))
            })?,
        };

        let mut item = LineItem::new(record.item_name, amount)
            .quantity(quantity)
            .weight(optional_decimal("weight", record.weight.as_deref())?)
            .shipping(optional_decimal("shipping", record.shipping.as_deref())?)
            .handling(optional_decimal("handling", record.handling.as_deref())?)
            .discount_amount(optional_decimal(
                "discount_amount",
                record.discount_amount.as_deref(),
            )?)
            .discount_rate(optional_decimal(
                "discount_rate",
                record.discount_rate.as_deref(),
            )?)
            .tax(optional_decimal("tax", record.tax.as_deref())?);

        if let Some(item_number) = record.item_number.filter(|n| !n.is_empty()) {
            item = item.item_number(item_number);
        }
        Ok(item)
    }
}

fn optional_decimal(column: &str, raw: Option<&str>) -> Result<Decimal> {
    match raw {
        None | Some("") => Ok(Decimal::ZERO),
        Some(raw) => parse_numeric(raw).ok_or_else(|| {
            CheckoutError::InvalidLineItem(format!("{column} '{raw}' is not numeric"))
        }),
    }
}

/// Reads basket line items from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<LineItem>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct LineItemReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> LineItemReader<R> {
    /// Creates a new `LineItemReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and converts basket rows.
    ///
    /// A bad row produces an error for that row only; the following rows are
    /// still read.
    pub fn line_items(self) -> impl Iterator<Item = Result<LineItem>> {
        self.reader
            .into_deserialize::<LineItemRecord>()
            .map(|result| result.map_err(CheckoutError::from).and_then(LineItem::try_from))
    }
}
