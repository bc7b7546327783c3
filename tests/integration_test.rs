use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Result};
use tempfile::NamedTempFile;

const HEADER: &str = "seller_id,name,revenue,profit,sales_count,bonus,top_products";

fn run_binary(path: &Path) -> Result<std::process::Output> {
    let binary_path = env!("CARGO_BIN_EXE_seller-report");

    Ok(Command::new(binary_path).arg(path).output()?)
}

#[test]
fn test_cli_correctly_processes_sample() -> Result<()> {
    let output = run_binary(&Path::new("samples").join("sample.json"))?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some(HEADER));

    let mut previous_profit = f64::MAX;
    let mut rows = 0;

    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields.len(), 7);

        let _: f64 = fields[2].parse()?;
        let profit: f64 = fields[3].parse()?;
        let _: u64 = fields[4].parse()?;
        let _: f64 = fields[5].parse()?;

        assert!(profit <= previous_profit);
        assert!(fields[6].split('|').count() <= 10);

        previous_profit = profit;
        rows += 1;
    }

    assert_eq!(rows, 5);

    Ok(())
}

#[test]
fn test_cli_outputs_correct_seller_report() -> Result<()> {
    let output = run_binary(&Path::new("samples").join("fixed.json"))?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 4);

    let order: Vec<&str> = lines.iter().skip(1).filter_map(|line| line.split(',').next()).collect();

    assert_eq!(order, vec!["S1", "S2", "S3"]);

    let mut results = HashMap::new();

    for line in lines.iter().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        results.insert(fields[0].to_string(), fields[1..].iter().map(|field| field.to_string()).collect::<Vec<_>>());
    }

    let seller_1 = results.get("S1").ok_or_else(|| anyhow!("S1 missing from output"))?;

    assert_eq!(seller_1, &vec!["Ivan Petrov", "130.00", "75.00", "2", "11.25", "B:3|A:2"]);

    let seller_2 = results.get("S2").ok_or_else(|| anyhow!("S2 missing from output"))?;

    assert_eq!(seller_2, &vec!["Maria Sidorova", "45.00", "20.00", "1", "2.00", "B:5"]);

    let seller_3 = results.get("S3").ok_or_else(|| anyhow!("S3 missing from output"))?;

    assert_eq!(seller_3, &vec!["Oleg Smirnov", "10.00", "0.00", "1", "0.00", ""]);

    Ok(())
}

#[test]
fn test_cli_fails_on_empty_sellers() -> Result<()> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, r#"{{"sellers": [], "products": [{{"sku": "A"}}], "purchase_records": [{{"seller_id": "S1"}}]}}"#)?;

    let output = run_binary(file.path())?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_cli_fails_cleanly_on_amount_overflow() -> Result<()> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, r#"{{"sellers": [{{"id": "S1"}}], "products": [{{"sku": "A"}}], "purchase_records": [{{"seller_id": "S1", "items": [{{"sku": "A", "quantity": 4000000000, "sale_price": "100000000000000000000"}}]}}]}}"#)?;

    let output = run_binary(file.path())?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("overflow"));

    Ok(())
}

#[test]
fn test_cli_fails_on_null_document() -> Result<()> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "null")?;

    let output = run_binary(file.path())?;

    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_cli_fails_on_missing_file() -> Result<()> {
    let output = run_binary(Path::new("missing.json"))?;

    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_cli_prints_usage_without_arguments() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_seller-report")).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("Usage"));

    Ok(())
}
