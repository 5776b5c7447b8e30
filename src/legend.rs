//! Hand-authored legends, one per layer.
//!
//! Legend entries are a static enumeration matching the color tables, not
//! computed from the data; rare categories fold into an "NA/Other" bucket.

/// (title, ordered [(color, label)]) — serializes to the embedded
/// `[title, [[color, label], ...]]` shape.
pub type Legend = (&'static str, Vec<(&'static str, &'static str)>);

pub fn legend_items(layer_type: &str) -> Legend {
    match layer_type {
        "payment_type" => (
            "Payment System Type",
            vec![
                ("#2E7D32", "Interbank payment system"),
                ("#1976D2", "Cross-domain payment system"),
                ("#F57C00", "Mobile money"),
                ("#7B1FA2", "CBDC"),
                ("#C2185B", "Mobile wallet"),
                ("#9E9E9E", "NA/Other"),
            ],
        ),
        "operator" => (
            "Operator",
            vec![
                ("#1565C0", "Central bank"),
                ("#00897B", "Bank association"),
                ("#6A1B9A", "Commercial bank/Private PSP"),
                ("#AD1457", "Private PSP"),
                ("#9E9E9E", "NA/Other"),
            ],
        ),
        "status" => (
            "Implementation Status",
            vec![
                ("#2E7D32", "Implemented"),
                ("#F9A825", "Planned/Piloted"),
                ("#9E9E9E", "NA"),
            ],
        ),
        "bank_participation" => (
            "Bank Participation",
            vec![
                ("#2E7D32", "Yes"),
                ("#D32F2F", "No"),
                ("#9E9E9E", "NA"),
            ],
        ),
        "nonbank_participation" => (
            "Non-Bank Participation",
            vec![
                ("#2E7D32", "Yes"),
                ("#D32F2F", "No"),
                ("#9E9E9E", "NA"),
            ],
        ),
        "settlement_type" => (
            "Settlement System Type",
            vec![
                ("#1565C0", "RTGS"),
                ("#00897B", "DNS"),
                ("#6A1B9A", "ACH"),
                ("#F57C00", "MN"),
                ("#9E9E9E", "NA/Other"),
            ],
        ),
        "national_regional" => (
            "Scope",
            vec![("#1976D2", "National"), ("#388E3C", "Regional")],
        ),
        "qr_code" => (
            "QR Code Based",
            vec![
                ("#2E7D32", "Yes"),
                ("#D32F2F", "No"),
                ("#9E9E9E", "NA"),
            ],
        ),
        _ => ("Unknown", Vec::new()),
    }
}
