use askama::Template;
use pof_core::{entities::Coordinate, report::ResolvedRecord};
use std::{fs, io, path::Path};
use thiserror::Error;

const DEFAULT_TITLE: &str = "Para onde foi?";
const ZOOM_MARKERS: u8 = 12;
const ZOOM_WORLD: u8 = 2;

#[derive(Debug, Error)]
pub enum MapError {
    #[error(transparent)]
    Render(#[from] askama::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

struct Marker {
    lat: f64,
    lng: f64,
    label_json: String,
}

impl TryFrom<&ResolvedRecord> for Marker {
    type Error = MapError;

    fn try_from(r: &ResolvedRecord) -> Result<Self, Self::Error> {
        let (lat, lng) = r.coordinate.to_lat_lng_deg();
        Ok(Self {
            lat,
            lng,
            label_json: popup_label(&r.record.full_address())?,
        })
    }
}

// Leaflet puts popup strings into `innerHTML`, so the label is
// HTML-escaped first. No `<` survives that, hence the JSON string
// can never close the surrounding <script>.
fn popup_label(s: &str) -> Result<String, MapError> {
    let html = askama::filters::escape(askama::Html, s)?.to_string();
    Ok(serde_json::Value::from(html).to_string())
}

#[derive(Template)]
#[template(path = "map.html")]
struct MapTemplate<'a> {
    title: &'a str,
    center_lat: f64,
    center_lng: f64,
    zoom: u8,
    markers: Vec<Marker>,
}

/// Renders a Leaflet map with one marker per located record.
pub fn render_map(resolved: &[ResolvedRecord]) -> Result<String, MapError> {
    let coordinates: Vec<_> = resolved.iter().map(|r| r.coordinate).collect();
    let (center, zoom) = match Coordinate::center(&coordinates) {
        Some(center) => (center, ZOOM_MARKERS),
        None => (Coordinate::from_lat_lng_deg(0, 0), ZOOM_WORLD),
    };
    let html = MapTemplate {
        title: DEFAULT_TITLE,
        center_lat: center.lat(),
        center_lng: center.lng(),
        zoom,
        markers: resolved
            .iter()
            .map(Marker::try_from)
            .collect::<Result<_, _>>()?,
    }
    .render()?;
    Ok(html)
}

pub fn write_map<P: AsRef<Path>>(path: P, resolved: &[ResolvedRecord]) -> Result<(), MapError> {
    let html = render_map(resolved)?;
    fs::write(path.as_ref(), html)?;
    log::info!(
        "Wrote map with {} markers to {}",
        resolved.len(),
        path.as_ref().display()
    );
    Ok(())
}
