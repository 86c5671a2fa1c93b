use std::fmt::Write;

use crate::domain::trip::Trip;
use crate::domain::types::GeoPoint;

const TRIP_COLORS: [&str; 6] = ["blue", "green", "purple", "orange", "pink", "gray"];

/// Render a standalone Leaflet page: depot marker, one polyline per trip
/// (depot, stops in order, depot) and a circle marker per stop, colors
/// cycling per trip.
pub fn render_map(trips: &[Trip], depot: GeoPoint) -> String {
    let mut html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Optimized Trips Map</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
    <style>#map {{ height: 500px; }}</style>
</head>
<body>
    <div id="map"></div>
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <script>
        const map = L.map('map').setView([{lat}, {lon}], 12);
        L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
            attribution: '&copy; OpenStreetMap contributors'
        }}).addTo(map);
        L.marker([{lat}, {lon}]).bindPopup('Depot').addTo(map);
"#,
        lat = depot.lat,
        lon = depot.lon
    );

    for (index, trip) in trips.iter().enumerate() {
        let color = TRIP_COLORS[index % TRIP_COLORS.len()];

        let mut coordinates: Vec<[f64; 2]> = Vec::with_capacity(trip.shipments.len() + 2);
        coordinates.push([depot.lat, depot.lon]);
        coordinates.extend(trip.shipments.iter().map(|s| [s.location.lat, s.location.lon]));
        coordinates.push([depot.lat, depot.lon]);
        let path = serde_json::to_string(&coordinates).unwrap_or_else(|_| "[]".to_string());

        let _ = write!(
            html,
            r#"
        L.polyline({path}, {{ color: "{color}" }})
            .bindPopup('Trip {id}')
            .addTo(map);
"#,
            path = path,
            color = color,
            id = trip.id
        );

        for shipment in &trip.shipments {
            let _ = write!(
                html,
                r#"
        L.circleMarker([{lat}, {lon}], {{ color: "{color}", radius: 6 }})
            .bindPopup('Shipment: {id}')
            .addTo(map);
"#,
                lat = shipment.location.lat,
                lon = shipment.location.lon,
                color = color,
                id = shipment.id
            );
        }
    }

    html.push_str(
        r#"
    </script>
</body>
</html>
"#,
    );

    html
}
