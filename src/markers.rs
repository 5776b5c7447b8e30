use crate::colors;
use crate::types::{CountryGroups, LayerMarker, PaymentSystemRecord};

/// The 8 selectable visualization layers, in control-panel order.
pub const LAYER_TYPES: [&str; 8] = [
    "payment_type",
    "operator",
    "status",
    "bank_participation",
    "nonbank_participation",
    "settlement_type",
    "national_regional",
    "qr_code",
];

/// Popups list at most this many systems before truncating.
const POPUP_SYSTEM_LIMIT: usize = 5;

/// Pick the record that characterizes a country on the map.
///
/// Ordered fallback, ties broken by input row order: first active real-time
/// system, else first implemented system, else the first record outright.
pub fn representative_record(systems: &[PaymentSystemRecord]) -> Option<&PaymentSystemRecord> {
    systems
        .iter()
        .find(|s| s.active == "Yes")
        .or_else(|| systems.iter().find(|s| s.status == "Implemented"))
        .or_else(|| systems.first())
}

/// Marker color and display value for one layer, taken from the
/// representative record. Unrecognized layer names get the fallback color
/// and the literal "Unknown".
pub fn layer_color_and_value(layer_type: &str, system: &PaymentSystemRecord) -> (String, String) {
    match layer_type {
        "payment_type" => (
            colors::payment_type_color(&system.payment_type).to_string(),
            system.payment_type.clone(),
        ),
        "operator" => (
            colors::operator_color(&system.operator).to_string(),
            system.operator.clone(),
        ),
        "status" => (
            colors::status_color(&system.status).to_string(),
            system.status.clone(),
        ),
        "bank_participation" => (
            colors::yes_no_color(&system.bank_participation).to_string(),
            system.bank_participation.clone(),
        ),
        "nonbank_participation" => (
            colors::yes_no_color(&system.nonbank_participation).to_string(),
            system.nonbank_participation.clone(),
        ),
        "settlement_type" => {
            let value = if system.settlement_type.is_empty() {
                "NA".to_string()
            } else {
                system
                    .settlement_type
                    .split(',')
                    .next()
                    .unwrap_or("NA")
                    .trim()
                    .to_string()
            };
            (
                colors::settlement_color(&system.settlement_type).to_string(),
                value,
            )
        }
        "national_regional" => (
            colors::national_regional_color(&system.national_regional).to_string(),
            system.national_regional.clone(),
        ),
        "qr_code" => (
            colors::yes_no_color(&system.qr_code).to_string(),
            system.qr_code.clone(),
        ),
        _ => (colors::FALLBACK_COLOR.to_string(), "Unknown".to_string()),
    }
}

/// Popup body for a country: name, system count, then up to
/// POPUP_SYSTEM_LIMIT systems in input row order.
pub fn build_popup_html(country: &str, systems: &[PaymentSystemRecord]) -> String {
    let mut html = format!("<b>{}</b><br/><br/>", country);
    html.push_str(&format!("<b>Payment Systems: {}</b><br/><br/>", systems.len()));

    for (i, system) in systems.iter().take(POPUP_SYSTEM_LIMIT).enumerate() {
        html.push_str(&format!("<b>{}. {}</b><br/>", i + 1, system.name));
        html.push_str(&format!("Type: {}<br/>", system.payment_type));
        html.push_str(&format!("Operator: {}<br/>", system.operator));
        html.push_str(&format!("Status: {}<br/>", system.status));
        if system.active == "Yes" {
            html.push_str("✓ Active real-time system<br/>");
        }
        html.push_str("<br/>");
    }

    if systems.len() > POPUP_SYSTEM_LIMIT {
        html.push_str(&format!(
            "<i>...and {} more systems</i><br/>",
            systems.len() - POPUP_SYSTEM_LIMIT
        ));
    }

    html
}

/// One marker per country for the given layer.
pub fn generate_layer_markers(groups: &CountryGroups, layer_type: &str) -> Vec<LayerMarker> {
    let mut markers = Vec::new();

    for (country, systems) in groups {
        let Some(primary) = representative_record(systems) else {
            continue;
        };
        let (color, value) = layer_color_and_value(layer_type, primary);

        markers.push(LayerMarker {
            country: country.clone(),
            color,
            value,
            popup: build_popup_html(country, systems),
            system_count: systems.len(),
        });
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn system(name: &str, active: &str, status: &str) -> PaymentSystemRecord {
        PaymentSystemRecord {
            name: name.to_string(),
            payment_type: "Interbank payment system".to_string(),
            operator: "Central bank".to_string(),
            bank_participation: "Yes".to_string(),
            nonbank_participation: "No".to_string(),
            status: status.to_string(),
            national_regional: "National".to_string(),
            settlement_type: "RTGS, DNS".to_string(),
            qr_code: "No".to_string(),
            cross_border: "No".to_string(),
            transactions_supported: "P2P".to_string(),
            active: active.to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn representative_prefers_active_then_implemented_then_first() {
        let systems = vec![
            system("planned", "No", "Planned/Piloted"),
            system("active", "Yes", "Implemented"),
        ];
        assert_eq!(representative_record(&systems).unwrap().name, "active");

        let systems = vec![
            system("planned", "No", "Planned/Piloted"),
            system("implemented", "No", "Implemented"),
        ];
        assert_eq!(representative_record(&systems).unwrap().name, "implemented");

        let systems = vec![
            system("first", "No", "Planned/Piloted"),
            system("second", "No", "NA"),
        ];
        assert_eq!(representative_record(&systems).unwrap().name, "first");

        assert!(representative_record(&[]).is_none());
    }

    #[test]
    fn same_representative_for_every_layer() {
        let systems = vec![
            system("planned", "No", "Planned/Piloted"),
            system("active", "Yes", "Implemented"),
        ];
        let mut groups = CountryGroups::new();
        groups.insert("India".to_string(), systems);

        for layer_type in LAYER_TYPES {
            let markers = generate_layer_markers(&groups, layer_type);
            assert_eq!(markers.len(), 1);
            // The active record is Implemented/RTGS/National, so each layer's
            // value must come from it, not from the planned record.
            match layer_type {
                "status" => assert_eq!(markers[0].value, "Implemented"),
                "settlement_type" => assert_eq!(markers[0].value, "RTGS"),
                _ => {}
            }
        }
    }

    #[test]
    fn settlement_value_truncates_to_first_component() {
        let rec = system("x", "Yes", "Implemented");
        let (color, value) = layer_color_and_value("settlement_type", &rec);
        assert_eq!(color, "#1565C0");
        assert_eq!(value, "RTGS");
    }

    #[test]
    fn unknown_layer_is_gray_unknown() {
        let rec = system("x", "Yes", "Implemented");
        let (color, value) = layer_color_and_value("not_a_layer", &rec);
        assert_eq!(color, colors::FALLBACK_COLOR);
        assert_eq!(value, "Unknown");
    }

    #[test]
    fn popup_lists_five_systems_then_truncates() {
        let systems: Vec<_> = (1..=7)
            .map(|i| system(&format!("sys{i}"), "Yes", "Implemented"))
            .collect();
        let popup = build_popup_html("India", &systems);

        assert!(popup.starts_with("<b>India</b><br/><br/>"));
        assert!(popup.contains("<b>Payment Systems: 7</b><br/><br/>"));
        for i in 1..=5 {
            assert!(popup.contains(&format!("<b>{i}. sys{i}</b><br/>")));
        }
        assert!(!popup.contains("sys6"));
        assert!(popup.contains("<i>...and 2 more systems</i><br/>"));
    }

    #[test]
    fn popup_marks_active_systems_only() {
        let systems = vec![
            system("live", "Yes", "Implemented"),
            system("dormant", "No", "Implemented"),
        ];
        let popup = build_popup_html("Ghana", &systems);
        assert_eq!(popup.matches("✓ Active real-time system<br/>").count(), 1);
        assert!(!popup.contains("<i>...and"));
    }

    #[test]
    fn one_marker_per_country_per_layer() {
        let mut groups = CountryGroups::new();
        groups.insert("Ghana".to_string(), vec![system("a", "Yes", "Implemented")]);
        groups.insert(
            "India".to_string(),
            vec![
                system("b", "Yes", "Implemented"),
                system("c", "Yes", "Implemented"),
            ],
        );

        let markers = generate_layer_markers(&groups, "payment_type");
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].country, "Ghana");
        assert_eq!(markers[0].system_count, 1);
        assert_eq!(markers[1].country, "India");
        assert_eq!(markers[1].system_count, 2);
    }
}
