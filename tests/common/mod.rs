use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

pub const BASKET_HEADER: [&str; 10] = [
    "item_number",
    "item_name",
    "amount",
    "quantity",
    "weight",
    "shipping",
    "handling",
    "discount_amount",
    "discount_rate",
    "tax",
];

pub fn generate_basket_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(BASKET_HEADER)?;

    for i in 1..=rows {
        wtr.write_record([
            format!("SKU-{i}").as_str(),
            format!("Item {i}").as_str(),
            "1.00",
            "1",
            "",
            "",
            "",
            "",
            "",
            "",
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[allow(dead_code)]
pub fn write_order_json(path: &Path, json: &str) -> Result<(), Error> {
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())
}
