use serde::Serialize;
use std::collections::BTreeMap;

/// One row of the input dataset describing a single payment system.
/// All fields are free-form categorical strings; "NA" marks unknown values.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentSystemRecord {
    pub name: String,
    pub payment_type: String,
    pub operator: String,
    pub bank_participation: String,
    pub nonbank_participation: String,
    pub status: String,
    pub national_regional: String,
    pub settlement_type: String,
    pub qr_code: String,
    pub cross_border: String,
    pub transactions_supported: String,
    pub active: String,
    pub url: String,
}

/// Country name -> payment systems in input row order.
pub type CountryGroups = BTreeMap<String, Vec<PaymentSystemRecord>>;

/// One colored circle on the map for a (country, layer) pair.
#[derive(Debug, Clone, Serialize)]
pub struct LayerMarker {
    pub country: String,
    pub color: String,
    pub value: String,
    pub popup: String,
    pub system_count: usize,
}
