use crate::config::AppConfig;
use crate::types::{CountryGroups, PaymentSystemRecord};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;

/// Country name variants that appear in the dataset, mapped to the spelling
/// used by the coordinate table.
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("United States", "United States of America"),
    ("USA", "United States of America"),
    ("UK", "United Kingdom"),
    ("UAE", "United Arab Emirates"),
    ("South Korea", "Republic of Korea"),
    ("Korea", "Republic of Korea"),
    ("Russia", "Russian Federation"),
];

/// Region-level aggregate rows that are not countries and never render.
const REGIONAL_AGGREGATES: &[&str] = &["Africa", "Asia", "Europe"];

pub fn normalize_country_name(name: &str) -> String {
    let name = name.trim();
    for (alias, canonical) in COUNTRY_ALIASES {
        if *alias == name {
            return (*canonical).to_string();
        }
    }
    name.to_string()
}

pub fn load_payment_data(config: &AppConfig) -> Result<CountryGroups> {
    println!("Loading payment system data...");

    let file = File::open(&config.input.data_csv)
        .with_context(|| format!("Failed to open CSV file: {:?}", config.input.data_csv))?;
    let groups = read_payment_records(file, config.input.filter_active_implemented)?;

    println!(
        "Loaded {} payment systems across {} countries",
        groups.values().map(Vec::len).sum::<usize>(),
        groups.len()
    );

    Ok(groups)
}

/// Parse rows into per-country groups. Loading is best-effort: missing
/// columns default per field, nothing here fails except CSV read errors.
pub fn read_payment_records<R: Read>(
    reader: R,
    filter_active_implemented: bool,
) -> Result<CountryGroups> {
    let mut rdr = ReaderBuilder::new().from_reader(reader);
    let headers = rdr.headers()?.clone();

    // Map column names to indices for faster lookup
    let col_indices: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_string(), i))
        .collect();

    let mut groups = CountryGroups::new();

    for result in rdr.records() {
        let record = result?;
        let field = |column: &str, default: &str| -> String {
            col_indices
                .get(column)
                .and_then(|&idx| record.get(idx))
                .unwrap_or(default)
                .to_string()
        };

        let country = normalize_country_name(&field("Country / Region", ""));
        if country.is_empty() || REGIONAL_AGGREGATES.contains(&country.as_str()) {
            continue;
        }

        if filter_active_implemented {
            let active = field("Active real-time payment system present", "No");
            let status = field("Status of payment system implementation", "NA");
            if active != "Yes" || status != "Implemented" {
                continue;
            }
        }

        let system = PaymentSystemRecord {
            name: field("Payment system name", "Unknown"),
            payment_type: field("Payment system type", "NA"),
            operator: field("Operator", "NA"),
            bank_participation: field("Bank participation", "NA"),
            nonbank_participation: field("Non-bank participation", "NA"),
            status: field("Status of payment system implementation", "NA"),
            national_regional: field("National / Regional", "National"),
            settlement_type: field("Type of settlement system", "NA"),
            qr_code: field("QR code based transactions", "NA"),
            cross_border: field("Cross-border payments", "NA"),
            transactions_supported: field("Types of transactions supported", "NA"),
            active: field("Active real-time payment system present", "No"),
            url: field("URL", ""),
        };

        groups.entry(country).or_default().push(system);
    }

    Ok(groups)
}
