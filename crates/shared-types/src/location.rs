use serde::{Deserialize, Serialize};

/// USPS Delivery Point Validation outcome for a resolved address.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum DpvMatch {
    /// `Y`: confirmed deliverable, including any unit.
    #[serde(rename = "Y")]
    Valid,
    /// `S`: building confirmed, secondary number dropped or unknown.
    #[serde(rename = "S")]
    Partial,
    /// `D`: building confirmed, secondary number missing.
    #[serde(rename = "D")]
    Default,
    /// `N`: not deliverable.
    #[serde(rename = "N")]
    NotFound,
}

impl DpvMatch {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "Y" => Some(DpvMatch::Valid),
            "S" => Some(DpvMatch::Partial),
            "D" => Some(DpvMatch::Default),
            "N" => Some(DpvMatch::NotFound),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DpvMatch::Valid => "Y",
            DpvMatch::Partial => "S",
            DpvMatch::Default => "D",
            DpvMatch::NotFound => "N",
        }
    }

    /// Only full and partial matches count as a validated address.
    pub fn is_valid(&self) -> bool {
        matches!(self, DpvMatch::Valid | DpvMatch::Partial)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DpvMatch::Valid => "\u{2713} Validated (full match)",
            DpvMatch::Partial => "\u{26a0} Partial match",
            DpvMatch::Default => "\u{26a0} Default match",
            DpvMatch::NotFound => "\u{2717} Not found",
        }
    }
}

/// Which strategy produced a [`ResolvedLocation`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ResolverKind {
    Smarty,
    Nominatim,
}

impl ResolverKind {
    /// Label listed under "data sources" in a lookup result.
    pub fn data_source_label(&self) -> &'static str {
        match self {
            ResolverKind::Smarty => "Smarty US Street Address API (validation & geocoding)",
            ResolverKind::Nominatim => "OpenStreetMap / Nominatim (geocoding fallback)",
        }
    }
}

/// Standardized USPS address parts.
///
/// Field names follow the Smarty `components` object so the provider
/// payload deserializes straight into this type.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AddressComponents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_predirection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_postdirection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_designator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_city_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plus4_code: Option<String>,
}

/// Classification and delivery metadata reported by the validation provider.
///
/// Y/N flags from the provider are normalized to booleans.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UspsMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_plus4: Option<String>,
    /// Single-letter record type code (F, G, H, P, R, S).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county_fips: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congressional_district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_default: Option<bool>,
    /// Residential Delivery Indicator: `Commercial` or `Residential`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rdi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dst: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpv_match: Option<DpvMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpv_footnotes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpv_cmra: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpv_vacant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpv_no_stat: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ews_match: Option<bool>,
}

/// A geocoded, possibly standardized address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResolvedLocation {
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Present only when the validation provider resolved the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<AddressComponents>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usps: Option<UspsMetadata>,
}

impl ResolvedLocation {
    /// Latitude and longitude together, if both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}
