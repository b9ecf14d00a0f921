use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

const ORDER: &str = r#"{ "merchant": { "recipient": "shop@example.com" } }"#;

fn order_file() -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    common::write_order_json(file.path(), ORDER).unwrap();
    file
}

#[test]
fn test_malformed_rows_are_skipped() {
    let mut basket = NamedTempFile::new().unwrap();
    writeln!(basket, "item_name, amount, quantity").unwrap();
    writeln!(basket, "Widget, 9.99, 1").unwrap();
    writeln!(basket, "Gadget, cheap, 1").unwrap(); // Non-numeric amount
    writeln!(basket, "Gizmo, 5.00, two").unwrap(); // Non-numeric quantity
    writeln!(basket, "Doohickey, 2.50, 3").unwrap();
    let order = order_file();

    let mut cmd = Command::new(cargo_bin!("paypal-checkout"));
    cmd.arg(basket.path())
        .arg("--order")
        .arg(order.path())
        .args(["--format", "fields"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading line item"))
        .stdout(predicate::str::contains("item_name_1,Widget"))
        .stdout(predicate::str::contains("item_name_2,Doohickey"))
        .stdout(predicate::str::contains("quantity_2,3"))
        .stdout(predicate::str::contains("item_name_3").not());
}

#[test]
fn test_invalid_line_items_are_rejected() {
    let mut basket = NamedTempFile::new().unwrap();
    writeln!(basket, "item_name, amount, quantity").unwrap();
    writeln!(basket, ", 9.99, 1").unwrap(); // No name
    writeln!(basket, "Freebie, 0, 1").unwrap(); // Zero amount
    writeln!(basket, "Widget, 9.99, 0").unwrap(); // Zero quantity
    writeln!(basket, "Gadget, 4.00, 1").unwrap();
    let order = order_file();

    let mut cmd = Command::new(cargo_bin!("paypal-checkout"));
    cmd.arg(basket.path())
        .arg("--order")
        .arg(order.path())
        .args(["--format", "fields"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error adding line item"))
        .stdout(predicate::str::contains("item_name_1,Gadget"))
        .stdout(predicate::str::contains("item_name_2").not());
}

#[test]
fn test_missing_recipient_fails() {
    let mut basket = NamedTempFile::new().unwrap();
    writeln!(basket, "item_name, amount").unwrap();
    writeln!(basket, "Widget, 9.99").unwrap();

    let mut cmd = Command::new(cargo_bin!("paypal-checkout"));
    cmd.arg(basket.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing recipient"));
}

#[test]
fn test_empty_basket_fails() {
    let mut basket = NamedTempFile::new().unwrap();
    writeln!(basket, "item_name, amount").unwrap();
    let order = order_file();

    let mut cmd = Command::new(cargo_bin!("paypal-checkout"));
    cmd.arg(basket.path()).arg("--order").arg(order.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Empty basket"));
}

#[test]
fn test_large_generated_basket() {
    let dir = tempfile::tempdir().unwrap();
    let basket = dir.path().join("basket.csv");
    common::generate_basket_csv(&basket, 200).unwrap();
    let order = order_file();

    let mut cmd = Command::new(cargo_bin!("paypal-checkout"));
    cmd.arg(&basket)
        .arg("--order")
        .arg(order.path())
        .args(["--format", "fields"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("item_number_200,SKU-200"))
        .stdout(predicate::str::contains("item_name_201").not());
}
