use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn till_cmd(data_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("till").unwrap();
    cmd.arg("--data-file").arg(data_file);
    cmd
}

#[test]
fn test_full_sale_workflow() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("inventory.json");

    // 1. Add a product
    till_cmd(&data_file)
        .args([
            "add",
            "Coffee Beans",
            "--category",
            "Beverages",
            "--cost",
            "6",
            "--price",
            "10",
            "--quantity",
            "5",
            "--low-stock",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added: Coffee Beans"));

    // 2. It shows up in the listing, in stock
    till_cmd(&data_file)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee Beans"))
        .stdout(predicate::str::contains("In Stock"));

    // 3. Sell two units by name
    till_cmd(&data_file)
        .args(["sell", "Coffee Beans", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sold 2 x Coffee Beans for 20.00"));

    // 4. Stock dropped to 3 (qty column is right-aligned to width 5,
    // followed by the status label)
    till_cmd(&data_file)
        .args(["list", "--search", "coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    3  In Stock"));

    // 5. Today's report carries the totals
    till_cmd(&data_file)
        .args(["report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total sales:  20.00"))
        .stdout(predicate::str::contains("Total profit: 8.00"))
        .stdout(predicate::str::contains("Transactions: 1"));
}

#[test]
fn test_overselling_is_rejected_and_state_is_unchanged() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("inventory.json");

    till_cmd(&data_file)
        .args([
            "add", "Soap", "--cost", "1", "--price", "2", "--quantity", "1",
        ])
        .assert()
        .success();

    till_cmd(&data_file)
        .args(["sell", "Soap", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient stock"));

    // The failed sale left no trace.
    till_cmd(&data_file)
        .args(["report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions: 0"));
}

#[test]
fn test_selling_unknown_product_fails() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("inventory.json");

    till_cmd(&data_file)
        .args(["sell", "ghost", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No product matches"));
}

#[test]
fn test_delete_unknown_product_is_noop() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("inventory.json");

    till_cmd(&data_file)
        .args(["delete", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));
}

#[test]
fn test_category_add_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("inventory.json");

    till_cmd(&data_file)
        .args(["category", "Beverages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category added: Beverages"));

    till_cmd(&data_file)
        .args(["category", "Beverages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_edit_changes_only_given_fields() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("inventory.json");

    till_cmd(&data_file)
        .args([
            "add", "Tea", "--cost", "2", "--price", "4", "--quantity", "7",
        ])
        .assert()
        .success();

    till_cmd(&data_file)
        .args(["edit", "Tea", "--price", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product updated: Tea"));

    till_cmd(&data_file)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5.00"))
        .stdout(predicate::str::contains("7"));
}

// A rejected add must not leave side effects behind: the category named
// on the command line is only saved once the product itself went through.
#[test]
fn test_rejected_add_saves_no_category() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("inventory.json");

    till_cmd(&data_file)
        .args(["add", "   ", "--category", "Snacks", "--cost", "1", "--price", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name must not be empty"));

    let contents = fs::read_to_string(&data_file).unwrap_or_default();
    assert!(!contents.contains("Snacks"));
}

#[test]
fn test_corrupt_data_file_surfaces_error() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("inventory.json");
    fs::write(&data_file, "not json {{{").unwrap();

    till_cmd(&data_file)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));

    // The file was not clobbered with an empty document.
    assert_eq!(fs::read_to_string(&data_file).unwrap(), "not json {{{");
}

// Ids are opaque strings: a hand-authored or foreign data file may use
// multi-byte characters, and listing must render them, not crash.
#[test]
fn test_list_renders_multibyte_product_ids() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("inventory.json");
    fs::write(
        &data_file,
        r#"{
            "products": [{
                "id": "€€€x",
                "name": "Imported",
                "category": "Misc",
                "costPrice": 1.0,
                "sellingPrice": 2.0,
                "quantity": 4,
                "lowStockAlert": 1
            }],
            "categories": ["Misc"]
        }"#,
    )
    .unwrap();

    till_cmd(&data_file)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€€€x"))
        .stdout(predicate::str::contains("Imported"));
}

#[test]
fn test_path_prints_data_file() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("inventory.json");

    till_cmd(&data_file)
        .args(["path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inventory.json"));
}
