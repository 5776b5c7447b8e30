//! Fixed color tables for each visualized attribute.
//!
//! Every lookup is an exact string match; anything outside a table maps to
//! the shared fallback color, never to an error.

/// Returned for any category value not present in a lookup table.
pub const FALLBACK_COLOR: &str = "#757575";

pub fn payment_type_color(payment_type: &str) -> &'static str {
    match payment_type {
        "Interbank payment system" => "#2E7D32",
        "Cross-domain payment system" => "#1976D2",
        "Mobile money" => "#F57C00",
        "CBDC" => "#7B1FA2",
        "Mobile wallet" => "#C2185B",
        "Interbank payment system, Mobile wallet" => "#00796B",
        "NA" => "#9E9E9E",
        _ => FALLBACK_COLOR,
    }
}

// Note: operator values carry stray whitespace in the source data, so this
// is the one table that trims before lookup.
pub fn operator_color(operator: &str) -> &'static str {
    match operator.trim() {
        "Central bank" => "#1565C0",
        "Bank association" => "#00897B",
        "Commercial bank/Private PSP" => "#6A1B9A",
        "Private PSP" => "#AD1457",
        "Central bank/Bank association" => "#0277BD",
        "Other" => "#F57C00",
        "NA" => "#9E9E9E",
        _ => FALLBACK_COLOR,
    }
}

pub fn status_color(status: &str) -> &'static str {
    match status {
        "Implemented" => "#2E7D32",
        "Planned/Piloted" => "#F9A825",
        "NA" => "#9E9E9E",
        _ => FALLBACK_COLOR,
    }
}

pub fn yes_no_color(value: &str) -> &'static str {
    match value {
        "Yes" => "#2E7D32",
        "No" => "#D32F2F",
        "NA" => "#9E9E9E",
        _ => FALLBACK_COLOR,
    }
}

/// Composite values like "RTGS, DNS" are classified by their first component.
pub fn settlement_color(settlement: &str) -> &'static str {
    let key = if settlement.is_empty() {
        "NA"
    } else {
        settlement.split(',').next().unwrap_or("NA").trim()
    };
    match key {
        "RTGS" => "#1565C0",
        "DNS" => "#00897B",
        "ACH" => "#6A1B9A",
        "MN" => "#F57C00",
        "Distributed settlement" => "#00796B",
        "NA" => "#9E9E9E",
        _ => FALLBACK_COLOR,
    }
}

pub fn national_regional_color(scope: &str) -> &'static str {
    match scope {
        "National" => "#1976D2",
        "Regional" => "#388E3C",
        _ => FALLBACK_COLOR,
    }
}
