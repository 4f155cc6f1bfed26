use serde::Deserialize;
use std::collections::HashMap;

use super::{ensure_ok, ProviderError, OVERPASS_TIMEOUT};

/// Search radius around the geocoded point, in metres.
pub const SEARCH_RADIUS_M: u32 = 60;

#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Building ways around a point, tags included.
pub fn building_query(lat: f64, lon: f64) -> String {
    format!(
        "[out:json][timeout:12];(way[\"building\"](around:{SEARCH_RADIUS_M},{lat},{lon}););out body;>;out skel qt;"
    )
}

#[tracing::instrument(skip(client))]
pub async fn buildings_near(
    client: &reqwest::Client,
    base_url: &str,
    lat: f64,
    lon: f64,
) -> Result<Vec<Element>, ProviderError> {
    let url = format!("{}/api/interpreter", base_url);

    let response = client
        .get(&url)
        .query(&[("data", building_query(lat, lon))])
        .timeout(OVERPASS_TIMEOUT)
        .send()
        .await?;

    let body: OverpassResponse = ensure_ok(response)?.json().await?;
    if body.elements.is_empty() {
        return Err(ProviderError::Empty);
    }
    Ok(body.elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_embeds_radius_and_point() {
        assert_eq!(
            building_query(41.8885, -87.6368),
            "[out:json][timeout:12];(way[\"building\"](around:60,41.8885,-87.6368););out body;>;out skel qt;"
        );
    }

    #[test]
    fn nodes_without_tags_decode() {
        let body: OverpassResponse = serde_json::from_str(
            r#"{"version": 0.6, "elements": [
                {"type": "way", "id": 1, "nodes": [1, 2], "tags": {"building": "office"}},
                {"type": "node", "id": 2, "lat": 41.0, "lon": -87.0}
            ]}"#,
        )
        .unwrap();
        assert_eq!(body.elements.len(), 2);
        assert_eq!(body.elements[0].tags["building"], "office");
        assert!(body.elements[1].tags.is_empty());
    }
}
