use serde::Deserialize;
use shared_types::ResolvedLocation;

use super::{ensure_ok, ProviderError, GEOCODE_TIMEOUT};

#[derive(Debug, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub display_name: Option<String>,
    /// Coordinates arrive as decimal strings.
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lon: Option<String>,
    #[serde(default)]
    pub address: PlaceAddress,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaceAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
}

fn parse_coordinate(value: Option<&str>) -> Option<f64> {
    value.and_then(|v| v.trim().parse().ok())
}

impl Place {
    /// `raw_address` stands in for a missing display name.
    pub fn into_location(self, raw_address: &str) -> ResolvedLocation {
        let latitude = parse_coordinate(self.lat.as_deref());
        let longitude = parse_coordinate(self.lon.as_deref());
        let address = self.address;

        ResolvedLocation {
            display_name: self
                .display_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| raw_address.to_string()),
            latitude,
            longitude,
            city: address.city.or(address.town).or(address.village),
            county: address.county,
            state: address.state,
            zip: address.postcode,
            components: None,
            usps: None,
        }
    }
}

/// Free-text geocode, first result only.
#[tracing::instrument(skip(client))]
pub async fn search(
    client: &reqwest::Client,
    base_url: &str,
    address: &str,
) -> Result<Place, ProviderError> {
    let url = format!("{}/search", base_url);

    let response = client
        .get(&url)
        .query(&[
            ("q", address),
            ("format", "json"),
            ("addressdetails", "1"),
            ("limit", "1"),
        ])
        .timeout(GEOCODE_TIMEOUT)
        .send()
        .await?;

    let places: Vec<Place> = ensure_ok(response)?.json().await?;
    places.into_iter().next().ok_or(ProviderError::Empty)
}
