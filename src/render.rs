//! Assembles the self-contained HTML artifact.
//!
//! All marker sets, legends and the coordinate table are embedded as JSON;
//! the only assets fetched at view time are Leaflet and OSM tiles from
//! their CDNs. Output is byte-identical across reruns on the same input.

use crate::config::AppConfig;
use crate::coords;
use crate::legend::{self, Legend};
use crate::markers::{self, LAYER_TYPES};
use crate::types::{CountryGroups, LayerMarker};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;

pub fn generate_map(config: &AppConfig, groups: &CountryGroups) -> Result<()> {
    let html = render_html(groups)?;

    fs::write(&config.output.html_file, html)
        .with_context(|| format!("Failed to write map to {:?}", config.output.html_file))?;

    println!("Map generated successfully: {}", config.output.html_file.display());
    println!("Total countries mapped: {}", groups.len());
    println!(
        "Total payment systems: {}",
        groups.values().map(Vec::len).sum::<usize>()
    );

    Ok(())
}

pub fn render_html(groups: &CountryGroups) -> Result<String> {
    let layers_data: BTreeMap<&str, Vec<LayerMarker>> = LAYER_TYPES
        .iter()
        .map(|layer_type| (*layer_type, markers::generate_layer_markers(groups, layer_type)))
        .collect();

    let layer_legends: BTreeMap<&str, Legend> = LAYER_TYPES
        .iter()
        .map(|layer_type| (*layer_type, legend::legend_items(layer_type)))
        .collect();

    let coords_json =
        serde_json::to_string(&coords::coords_map()).context("Failed to serialize coordinates")?;
    let layers_json =
        serde_json::to_string(&layers_data).context("Failed to serialize layer markers")?;
    let legends_json =
        serde_json::to_string(&layer_legends).context("Failed to serialize legends")?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Real-Time Payment Systems Map (Implemented)</title>

    <!-- Leaflet CSS -->
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />

    <style>{css}</style>
</head>
<body>
    <div id="map"></div>

    <!-- Leaflet JS -->
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>

    <script>
        var countryCoords = {coords};
        var layersData = {layers};
        var layerLegends = {legends};
    </script>

    <script>{js}</script>
</body>
</html>
"#,
        css = MAP_CSS,
        coords = coords_json,
        layers = layers_json,
        legends = legends_json,
        js = MAP_SCRIPT,
    ))
}

const MAP_CSS: &str = r#"
        body {
            margin: 0;
            padding: 0;
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        }
        #map {
            width: 100%;
            height: 600px;
        }
        .legend {
            background: white;
            padding: 10px;
            border-radius: 5px;
            box-shadow: 0 1px 5px rgba(0,0,0,0.4);
            line-height: 20px;
            color: #555;
            max-height: 500px;
            overflow-y: auto;
        }
        .legend h4 {
            margin: 0 0 8px;
            font-size: 13px;
            font-weight: 600;
        }
        .legend-item {
            margin-bottom: 4px;
            display: flex;
            align-items: center;
            font-size: 12px;
        }
        .legend-color {
            width: 16px;
            height: 16px;
            border-radius: 50%;
            display: inline-block;
            margin-right: 6px;
            border: 1px solid #999;
            flex-shrink: 0;
        }
        .info {
            padding: 6px 8px;
            font: 14px/16px Arial, Helvetica, sans-serif;
            background: white;
            background: rgba(255,255,255,0.9);
            box-shadow: 0 0 15px rgba(0,0,0,0.2);
            border-radius: 5px;
        }
        .info h4 {
            margin: 0 0 5px;
            color: #777;
            font-size: 14px;
        }
        .layer-control {
            background: white;
            padding: 10px;
            border-radius: 5px;
            box-shadow: 0 1px 5px rgba(0,0,0,0.4);
            max-height: 500px;
            overflow-y: auto;
        }
        .layer-control h4 {
            margin: 0 0 8px 0;
            font-size: 13px;
            font-weight: 600;
        }
        .layer-control button {
            display: block;
            width: 100%;
            margin: 4px 0;
            padding: 6px 8px;
            border: 1px solid #ccc;
            background: #f8f9fa;
            cursor: pointer;
            border-radius: 3px;
            font-size: 12px;
            text-align: left;
        }
        .layer-control button.active {
            background: #007bff;
            color: white;
            border-color: #007bff;
            font-weight: 500;
        }
        .layer-control button:hover {
            background: #e9ecef;
        }
        .layer-control button.active:hover {
            background: #0056b3;
        }
"#;

// Client-side state machine: one state variable (currentLayer) plus an
// idempotent re-render from the embedded data. No network calls beyond the
// initial tile and library fetches.
const MAP_SCRIPT: &str = r#"
        // Initialize map
        var map = L.map('map').setView([20, 0], 2);

        // Add tile layer
        L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
            attribution: '© OpenStreetMap contributors',
            maxZoom: 18,
        }).addTo(map);

        // Current layer
        var currentLayer = 'payment_type';
        var currentMarkers = L.layerGroup().addTo(map);

        // Function to update map with current layer
        function updateMap() {
            currentMarkers.clearLayers();

            var markers = layersData[currentLayer];
            markers.forEach(function(marker) {
                var coords = countryCoords[marker.country];
                if (coords) {
                    var circle = L.circleMarker([coords[0], coords[1]], {
                        radius: 6 + (marker.system_count > 1 ? 2 : 0),
                        fillColor: marker.color,
                        color: '#000',
                        weight: 1,
                        opacity: 1,
                        fillOpacity: 0.8
                    });
                    circle.bindPopup(marker.popup);
                    currentMarkers.addLayer(circle);
                }
            });

            updateLegend();
        }

        // Add layer control
        var layerControl = L.control({position: 'topright'});

        layerControl.onAdd = function (map) {
            var div = L.DomUtil.create('div', 'layer-control');
            div.innerHTML = '<h4>Select Layer</h4>' +
                '<button id="btn-payment_type" class="active">Payment System Type</button>' +
                '<button id="btn-operator">Operator</button>' +
                '<button id="btn-status">Implementation Status</button>' +
                '<button id="btn-bank_participation">Bank Participation</button>' +
                '<button id="btn-nonbank_participation">Non-Bank Participation</button>' +
                '<button id="btn-settlement_type">Settlement Type</button>' +
                '<button id="btn-national_regional">National/Regional</button>' +
                '<button id="btn-qr_code">QR Code Support</button>';
            return div;
        };

        layerControl.addTo(map);

        // Add legend
        var legend = L.control({position: 'bottomright'});
        var legendDiv;

        legend.onAdd = function (map) {
            legendDiv = L.DomUtil.create('div', 'legend');
            updateLegend();
            return legendDiv;
        };

        function updateLegend() {
            if (!legendDiv) return;

            var legendInfo = layerLegends[currentLayer];
            var title = legendInfo[0];
            var items = legendInfo[1];

            legendDiv.innerHTML = '<h4>' + title + '</h4>';
            items.forEach(function(item) {
                legendDiv.innerHTML += '<div class="legend-item">' +
                    '<span class="legend-color" style="background:' + item[0] + '"></span>' +
                    '<span>' + item[1] + '</span></div>';
            });
        }

        legend.addTo(map);

        // Layer switching handlers
        setTimeout(function() {
            var layerButtons = [
                'payment_type', 'operator', 'status', 'bank_participation',
                'nonbank_participation', 'settlement_type', 'national_regional', 'qr_code'
            ];

            layerButtons.forEach(function(layerType) {
                document.getElementById('btn-' + layerType).addEventListener('click', function() {
                    if (currentLayer !== layerType) {
                        // Remove active class from all buttons
                        layerButtons.forEach(function(lt) {
                            document.getElementById('btn-' + lt).classList.remove('active');
                        });

                        // Add active class to clicked button
                        this.classList.add('active');

                        // Update current layer and refresh map
                        currentLayer = layerType;
                        updateMap();
                    }
                });
            });
        }, 100);

        // Add info box
        var info = L.control({position: 'topleft'});

        info.onAdd = function (map) {
            this._div = L.DomUtil.create('div', 'info');
            this._div.innerHTML = '<h4>Real-Time Payment Systems (Implemented)</h4>' +
                '<p>Click markers for details. Switch layers to explore different attributes.</p>';
            return this._div;
        };

        info.addTo(map);

        // Initial map render
        updateMap();
"#;
