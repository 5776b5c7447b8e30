use payments_map::config::AppConfig;
use payments_map::{data, render};
use std::fs;

const SAMPLE_CSV: &str = "\
Country / Region,Payment system name,Payment system type,Operator,Bank participation,Non-bank participation,Status of payment system implementation,National / Regional,Type of settlement system,QR code based transactions,Cross-border payments,Types of transactions supported,Active real-time payment system present,URL
India,UPI,Cross-domain payment system,NPCI,Yes,Yes,Implemented,National,DNS,Yes,Yes,\"P2P, P2B\",Yes,https://example.org/upi
India,Paper clearing,Interbank payment system,Central bank,Yes,No,Planned/Piloted,National,DNS,No,No,B2B,No,
Kenya,M-Pesa,Mobile money,Private PSP,No,Yes,Implemented,National,RTGS,Yes,No,P2P,Yes,
USA,FedNow,Interbank payment system,Central bank,Yes,No,Implemented,National,RTGS,No,No,P2P,Yes,
Africa,PAPSS,Interbank payment system,Central bank,Yes,No,Implemented,Regional,RTGS,No,Yes,B2B,Yes,
Atlantis,SeaPay,Mobile wallet,Private PSP,No,Yes,Implemented,National,DNS,Yes,No,P2P,Yes,
";

fn config_for(dir: &std::path::Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.input.data_csv = dir.join("dpi-payments.csv");
    config.output.html_file = dir.join("index.html");
    config
}

#[test]
fn generates_map_from_csv() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("dpi-payments.csv"), SAMPLE_CSV).unwrap();
    let config = config_for(dir.path());

    let groups = data::load_payment_data(&config).unwrap();

    // Regional aggregate dropped, aliases normalized, filter applied.
    assert_eq!(groups.len(), 4);
    assert!(groups.contains_key("United States of America"));
    assert!(!groups.contains_key("Africa"));
    assert_eq!(groups["India"].len(), 1, "planned system filtered out");

    render::generate_map(&config, &groups).unwrap();
    let html = fs::read_to_string(&config.output.html_file).unwrap();

    assert!(html.contains("<div id=\"map\">"));
    assert_eq!(html.matches("<button id=\"btn-").count(), 8);
    assert!(html.contains("var layersData = "));

    // Countries without coordinates still get markers; the client drops
    // them at render time.
    assert!(html.contains("Atlantis"));
}

#[test]
fn unfiltered_load_keeps_planned_systems() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("dpi-payments.csv"), SAMPLE_CSV).unwrap();
    let mut config = config_for(dir.path());
    config.input.filter_active_implemented = false;

    let groups = data::load_payment_data(&config).unwrap();
    assert_eq!(groups["India"].len(), 2);
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("dpi-payments.csv"), SAMPLE_CSV).unwrap();
    let config = config_for(dir.path());

    let groups = data::load_payment_data(&config).unwrap();

    render::generate_map(&config, &groups).unwrap();
    let first = fs::read(&config.output.html_file).unwrap();

    let groups = data::load_payment_data(&config).unwrap();
    render::generate_map(&config, &groups).unwrap();
    let second = fs::read(&config.output.html_file).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    let err = data::load_payment_data(&config).unwrap_err();
    assert!(err.to_string().contains("Failed to open CSV file"));
}
