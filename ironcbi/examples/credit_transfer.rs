//! Example building a minimal CBI credit-transfer flow.
//!
//! Run with: `cargo run --example credit_transfer`

use anyhow::Result;
use chrono::NaiveDate;
use ironcbi::prelude::*;
use rust_decimal_macros::dec;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let registry = ironcbi::records::registry()?;

    let debtor_iban = "IT86U0760111500000010117463";
    let creditor_iban = "IT84K0380201600000000252035";
    validate_iban(debtor_iban)?;
    if let Err(e) = validate_iban(creditor_iban) {
        println!("creditor IBAN rejected: {e}");
    }

    let execution = NaiveDate::from_ymd_opt(2014, 5, 15).expect("valid date");

    let mut header = registry.instantiate("PC").expect("PC registered");
    header.set("sender", "12345")?;
    header.set("recipient", 7601_i64)?;
    header.set("creation", execution)?;
    header.set("name", "Esempio S.r.l.")?;

    let mut transfer = registry.instantiate("10").expect("10 registered");
    transfer.set("prog_number", 1_i64)?;
    transfer.set("execution_date", execution)?;
    transfer.set("amount", dec!(198.25))?;
    transfer.set("ord_abi", 7601_i64)?;
    transfer.set("ord_cab", 11500_i64)?;

    let mut payer = registry.instantiate("16").expect("16 registered");
    payer.set("prog_number", 1_i64)?;
    payer.set("iban", debtor_iban)?;

    let mut footer = registry.instantiate("EF").expect("EF registered");
    footer.set("sender", "12345")?;
    footer.set("recipient", 7601_i64)?;
    footer.set("creation", execution)?;
    footer.set("orders", 1_i64)?;
    footer.set("positive_amounts", dec!(198.25))?;
    footer.set("records", 4_i64)?;

    let flow: Vec<String> = [header, transfer, payer, footer]
        .iter()
        .map(RecordInstance::format)
        .collect();

    for line in &flow {
        println!("|{line}|");
        assert_eq!(line.len(), RECORD_WIDTH);
    }

    Ok(())
}
