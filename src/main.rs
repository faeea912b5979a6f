//! Command-line front end: fetch one income statement and write the formatted workbook.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use yf_income_export::{FinancialTable, Frequency, RenderResult, YfClient, render_report};

#[derive(Parser)]
#[command(name = "yf-income-export")]
#[command(about = "Export a company's income statement to a formatted Excel file", long_about = None)]
#[command(version)]
struct Cli {
    /// Stock ticker symbol
    ticker: String,

    /// Fetch quarterly instead of annual periods
    #[arg(long)]
    quarterly: bool,

    /// Directory the workbook is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Overall HTTP timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Print the fetched table before writing the file
    #[arg(long)]
    preview: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

async fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let frequency = if cli.quarterly {
        Frequency::Quarterly
    } else {
        Frequency::Annual
    };

    let client = YfClient::builder()
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()?;

    match render_report(&client, &cli.ticker, frequency).await {
        RenderResult::InvalidInput(warning) => {
            eprintln!("{warning}");
            Ok(1)
        }
        RenderResult::NoData(message) => {
            println!("{message}");
            Ok(0)
        }
        RenderResult::Failed(message) => {
            eprintln!("{message}");
            Ok(1)
        }
        RenderResult::Ready(report) => {
            println!("{}", report.message);
            if cli.preview {
                print_table(&report.table);
            }
            println!("Number of line items: {}", report.line_item_count());
            println!("Number of periods: {}", report.period_count());

            let path = cli.out_dir.join(&report.file.file_name);
            std::fs::write(&path, &report.file.bytes)?;
            println!("Wrote {}", path.display());
            Ok(0)
        }
    }
}

fn print_table(table: &FinancialTable) {
    let width = table
        .rows()
        .iter()
        .map(|r| r.label.chars().count())
        .chain(std::iter::once(table.label_field().len()))
        .max()
        .unwrap_or(0);

    print!("{:<width$}", table.label_field());
    for p in table.periods() {
        print!("  {:>18}", p.format("%Y-%m-%d").to_string());
    }
    println!();

    for row in table.rows() {
        print!("{:<width$}", row.label);
        for v in &row.values {
            match v {
                Some(v) => print!("  {v:>18.0}"),
                None => print!("  {:>18}", "-"),
            }
        }
        println!();
    }
}
