//! Flattens a lookup result into the labelled cells of the property detail grid.

use shared_types::{AddressComponents, LookupResult, UspsMetadata};

pub const NOT_AVAILABLE: &str = "Not available";

#[derive(Debug, Clone, PartialEq)]
pub struct DetailCell {
    pub label: &'static str,
    pub value: Option<String>,
    /// Shown instead of the value when it is missing.
    pub placeholder: &'static str,
}

impl DetailCell {
    fn new(label: &'static str, value: Option<String>) -> Self {
        Self {
            label,
            value: value.filter(|v| !v.trim().is_empty()),
            placeholder: NOT_AVAILABLE,
        }
    }

    fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn display(&self) -> &str {
        self.value.as_deref().unwrap_or(self.placeholder)
    }

    pub fn value_class(&self) -> &'static str {
        if self.value.is_some() {
            "plu-detail-value"
        } else {
            "plu-detail-value not-available"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailSection {
    pub title: &'static str,
    pub cells: Vec<DetailCell>,
}

pub fn record_type_label(code: &str) -> String {
    match code {
        "F" => "Firm".to_string(),
        "G" => "General Delivery".to_string(),
        "H" => "High-rise / Multi-unit".to_string(),
        "P" => "PO Box".to_string(),
        "R" => "Rural Route".to_string(),
        "S" => "Street".to_string(),
        other => other.to_string(),
    }
}

fn yes_no(flag: Option<bool>, yes: &str) -> Option<String> {
    flag.map(|f| if f { yes.to_string() } else { "No".to_string() })
}

pub fn utc_offset_label(offset: f64) -> String {
    let sign = if offset >= 0.0 { "+" } else { "" };
    format!("UTC{sign}{offset}")
}

pub fn zip_label(zip: Option<&str>, plus4: Option<&str>) -> Option<String> {
    match (zip, plus4) {
        (Some(zip), Some(plus4)) if !plus4.is_empty() => Some(format!("{zip}-{plus4}")),
        (Some(zip), _) => Some(zip.to_string()),
        _ => None,
    }
}

/// Builds the five detail sections. Every cell is always present so the grid
/// shape does not depend on which provider answered.
pub fn property_sections(result: &LookupResult) -> Vec<DetailSection> {
    let location = result.location.as_ref();
    let usps = location
        .and_then(|l| l.usps.clone())
        .unwrap_or_default();
    let components = location
        .and_then(|l| l.components.clone())
        .unwrap_or_default();
    let building = result.building.clone().unwrap_or_default();

    let field = |f: fn(&shared_types::ResolvedLocation) -> Option<String>| location.and_then(f);

    let zip = field(|l| l.zip.clone());
    let UspsMetadata {
        zip_plus4,
        record_type,
        zip_type,
        county_fips,
        congressional_district,
        carrier_route,
        precision,
        building_default,
        rdi,
        time_zone,
        utc_offset,
        dst,
        dpv_match,
        dpv_footnotes,
        dpv_cmra,
        dpv_vacant,
        dpv_no_stat,
        active,
        ews_match,
    } = usps;
    let AddressComponents {
        default_city_name, ..
    } = components;

    vec![
        DetailSection {
            title: "Location",
            cells: vec![
                DetailCell::new("City", field(|l| l.city.clone())),
                DetailCell::new("Default City Name", default_city_name),
                DetailCell::new("County", field(|l| l.county.clone())),
                DetailCell::new("County FIPS", county_fips),
                DetailCell::new("State", field(|l| l.state.clone())),
                DetailCell::new("ZIP Code", zip_label(zip.as_deref(), zip_plus4.as_deref())),
                DetailCell::new("Congressional District", congressional_district),
            ],
        },
        DetailSection {
            title: "USPS Classification",
            cells: vec![
                DetailCell::new("Delivery Type", record_type.as_deref().map(record_type_label)),
                DetailCell::new("ZIP Type", zip_type),
                DetailCell::new("Property Class (RDI)", rdi).with_placeholder("Not determined"),
                DetailCell::new("Geocode Precision", precision),
                DetailCell::new("Carrier Route", carrier_route),
                DetailCell::new("Multi-delivery Building", yes_no(building_default, "Yes")),
            ],
        },
        DetailSection {
            title: "Address Validation",
            cells: vec![
                DetailCell::new("Address Status", dpv_match.map(|d| d.label().to_string())),
                DetailCell::new("DPV Footnotes", dpv_footnotes),
                DetailCell::new(
                    "CMRA Address",
                    yes_no(dpv_cmra, "Yes (Commercial Mail Receiving Agency)"),
                ),
                DetailCell::new("Vacant", yes_no(dpv_vacant, "Yes")),
                DetailCell::new(
                    "No-Stat Address",
                    yes_no(dpv_no_stat, "Yes (not currently deliverable)"),
                ),
                DetailCell::new("Active", yes_no(active, "Yes")),
                DetailCell::new("EWS Match", yes_no(ews_match, "Yes (address change pending)")),
            ],
        },
        DetailSection {
            title: "Geocoding",
            cells: vec![
                DetailCell::new("Latitude", location.and_then(|l| l.latitude).map(|v| v.to_string())),
                DetailCell::new("Longitude", location.and_then(|l| l.longitude).map(|v| v.to_string())),
                DetailCell::new("Time Zone", time_zone),
                DetailCell::new("UTC Offset", utc_offset.map(utc_offset_label)),
                DetailCell::new("Daylight Saving", yes_no(dst, "Yes")),
            ],
        },
        DetailSection {
            title: "Building Data",
            cells: vec![
                DetailCell::new("Year Built", building.year_built.map(|y| y.to_string())),
                DetailCell::new("Building Type", building.building_type),
                DetailCell::new("Floors / Levels", building.levels.map(|n| format!("{n} floor(s)"))),
            ],
        },
    ]
}
