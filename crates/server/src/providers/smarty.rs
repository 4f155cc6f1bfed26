use serde::Deserialize;
use shared_types::{AddressComponents, DpvMatch, ResolvedLocation, UspsMetadata};

use super::{ensure_ok, ProviderError, GEOCODE_TIMEOUT};

/// One candidate from the US Street API `street-address` endpoint.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub delivery_line_1: Option<String>,
    #[serde(default)]
    pub last_line: Option<String>,
    #[serde(default)]
    pub components: AddressComponents,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub analysis: Analysis,
}

#[derive(Debug, Default, Deserialize)]
pub struct Metadata {
    pub record_type: Option<String>,
    pub zip_type: Option<String>,
    pub county_fips: Option<String>,
    pub county_name: Option<String>,
    pub carrier_route: Option<String>,
    pub congressional_district: Option<String>,
    pub building_default_indicator: Option<Flag>,
    pub rdi: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub precision: Option<String>,
    pub time_zone: Option<String>,
    pub utc_offset: Option<f64>,
    pub dst: Option<Flag>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Analysis {
    pub dpv_match_code: Option<String>,
    pub dpv_footnotes: Option<String>,
    pub dpv_cmra: Option<Flag>,
    pub dpv_vacant: Option<Flag>,
    pub dpv_no_stat: Option<Flag>,
    pub active: Option<Flag>,
    pub ews_match: Option<Flag>,
}

/// The API mixes `"Y"`/`"N"` strings and JSON booleans for yes/no fields.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Flag::Bool(b) => Some(*b),
            Flag::Text(s) => match s.trim().to_ascii_uppercase().as_str() {
                "Y" | "TRUE" => Some(true),
                "N" | "FALSE" => Some(false),
                _ => None,
            },
        }
    }
}

fn flag(value: &Option<Flag>) -> Option<bool> {
    value.as_ref().and_then(Flag::as_bool)
}

impl Candidate {
    pub fn dpv_match(&self) -> Option<DpvMatch> {
        self.analysis
            .dpv_match_code
            .as_deref()
            .and_then(DpvMatch::from_code)
    }

    pub fn into_location(self) -> ResolvedLocation {
        let display_name = format!(
            "{}, {}",
            self.delivery_line_1.as_deref().unwrap_or_default(),
            self.last_line.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string();

        let usps = UspsMetadata {
            zip_plus4: self.components.plus4_code.clone(),
            record_type: self.metadata.record_type.clone(),
            zip_type: self.metadata.zip_type.clone(),
            county_fips: self.metadata.county_fips.clone(),
            congressional_district: self.metadata.congressional_district.clone(),
            carrier_route: self.metadata.carrier_route.clone(),
            precision: self.metadata.precision.clone(),
            building_default: flag(&self.metadata.building_default_indicator),
            rdi: self.metadata.rdi.clone(),
            time_zone: self.metadata.time_zone.clone(),
            utc_offset: self.metadata.utc_offset,
            dst: flag(&self.metadata.dst),
            dpv_match: self.dpv_match(),
            dpv_footnotes: self.analysis.dpv_footnotes.clone(),
            dpv_cmra: flag(&self.analysis.dpv_cmra),
            dpv_vacant: flag(&self.analysis.dpv_vacant),
            dpv_no_stat: flag(&self.analysis.dpv_no_stat),
            active: flag(&self.analysis.active),
            ews_match: flag(&self.analysis.ews_match),
        };

        ResolvedLocation {
            display_name,
            latitude: self.metadata.latitude,
            longitude: self.metadata.longitude,
            city: self.components.city_name.clone(),
            county: self.metadata.county_name,
            state: self.components.state_abbreviation.clone(),
            zip: self.components.zipcode.clone(),
            components: Some(self.components),
            usps: Some(usps),
        }
    }
}

/// Validate and standardize one address. An empty candidate list is
/// [`ProviderError::Empty`].
#[tracing::instrument(skip(client, auth_id, auth_token))]
pub async fn validate_address(
    client: &reqwest::Client,
    base_url: &str,
    auth_id: &str,
    auth_token: &str,
    address: &str,
) -> Result<Candidate, ProviderError> {
    let url = format!("{}/street-address", base_url);

    let response = client
        .get(&url)
        .query(&[
            ("street", address),
            ("candidates", "1"),
            ("auth-id", auth_id),
            ("auth-token", auth_token),
        ])
        .header(reqwest::header::ACCEPT, "application/json")
        .timeout(GEOCODE_TIMEOUT)
        .send()
        .await?;

    let candidates: Vec<Candidate> = ensure_ok(response)?.json().await?;
    candidates.into_iter().next().ok_or(ProviderError::Empty)
}
