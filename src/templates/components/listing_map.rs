use crate::domain::GeocodedListing;
use maud::{html, Markup, PreEscaped};
use serde::Serialize;

#[derive(Serialize)]
struct Marker<'a> {
    lat: f64,
    lon: f64,
    label: &'a str,
    price: &'a str,
    link: &'a str,
}

/// JSON for the inline script. `</` is escaped so a value can't close the tag.
fn markers_json(rows: &[GeocodedListing]) -> String {
    let markers: Vec<Marker> = rows
        .iter()
        .filter_map(|r| {
            Some(Marker {
                lat: r.latitude?,
                lon: r.longitude?,
                label: r.display_address(),
                price: &r.price_text,
                link: &r.link,
            })
        })
        .collect();

    serde_json::to_string(&markers)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/")
}

const MAP_SCRIPT: &str = r#"
(function () {
  var markers = JSON.parse(document.getElementById('map-markers').textContent);
  var map = L.map('map');
  L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
    attribution: '&copy; OpenStreetMap contributors'
  }).addTo(map);
  var bounds = [];
  markers.forEach(function (m) {
    var popup = document.createElement('div');
    var title = document.createElement('strong');
    title.textContent = m.label;
    var link = document.createElement('a');
    link.href = m.link;
    link.target = '_blank';
    link.textContent = m.price;
    popup.appendChild(title);
    popup.appendChild(document.createElement('br'));
    popup.appendChild(link);
    L.marker([m.lat, m.lon]).addTo(map).bindPopup(popup);
    bounds.push([m.lat, m.lon]);
  });
  if (bounds.length) { map.fitBounds(bounds, { maxZoom: 14 }); } else { map.setView([45.4728, -73.6113], 12); }
})();
"#;

pub fn listing_map(rows: &[GeocodedListing]) -> Markup {
    html! {
        div id="map" {}
        script id="map-markers" type="application/json" { (PreEscaped(markers_json(rows))) }
        script { (PreEscaped(MAP_SCRIPT)) }
    }
}
