use std::fs;
use std::io::{stderr, stdout, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use seller_report::calculators::AnalysisOptions;
use seller_report::engine::analyze_sales_data;
use seller_report::models::{ReportRow, SalesData};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: seller-report [input].json [log_level:optional] > [output].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let json = fs::read_to_string(path)
        .with_context(|| format!("Could not read sales data at path: {path}"))?;

    let timer = Instant::now();
    let data = SalesData::from_json_str(&json)?;
    let report = analyze_sales_data(&data, &AnalysisOptions::standard())?;
    let duration = timer.elapsed();

    info!("Built seller report in: {duration:?}");

    write_report(stdout().lock(), &report)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report<W: Write>(output: W, report: &[ReportRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["seller_id", "name", "revenue", "profit", "sales_count", "bonus", "top_products"])?;

    for row in report {
        let top_products = row.top_products.iter()
            .map(|product| format!("{}:{}", product.sku, product.quantity))
            .collect::<Vec<_>>()
            .join("|");

        writer.write_record([
            row.seller_id.clone(),
            row.name.clone(),
            row.revenue.to_string(),
            row.profit.to_string(),
            row.sales_count.to_string(),
            row.bonus.to_string(),
            top_products
        ])?;
    }

    writer.flush()?;

    Ok(())
}
