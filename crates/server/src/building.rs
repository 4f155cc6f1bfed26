//! Building attributes from the map features around a coordinate.

use async_trait::async_trait;
use shared_types::BuildingAttributes;

use crate::providers::overpass::{self, Element};

#[async_trait]
pub trait BuildingSource: Send + Sync {
    /// `None` when nothing useful is found or the provider fails.
    async fn lookup(&self, lat: f64, lon: f64) -> Option<BuildingAttributes>;
}

pub struct OverpassBuildings {
    client: reqwest::Client,
    base_url: String,
}

impl OverpassBuildings {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl BuildingSource for OverpassBuildings {
    async fn lookup(&self, lat: f64, lon: f64) -> Option<BuildingAttributes> {
        match overpass::buildings_near(&self.client, &self.base_url, lat, lon).await {
            Ok(elements) => select_first_building(&elements),
            Err(e) => {
                tracing::debug!(error = %e, lat, lon, "No building attributes");
                None
            }
        }
    }
}

fn non_empty<'a>(element: &'a Element, key: &str) -> Option<&'a str> {
    element
        .tags
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
}

/// `"2003-06-15"` -> 2003. Anything whose first four characters are not all
/// digits is ignored.
pub fn parse_year(start_date: &str) -> Option<u16> {
    let prefix = start_date.trim().get(..4)?;
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

/// Leading integer of a `building:levels` value; `"3;4"` -> 3.
pub fn parse_levels(value: &str) -> Option<u32> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok().filter(|levels| *levels > 0)
}

/// `"retail_park"` -> `"Retail Park"`.
pub fn humanize(tag: &str) -> String {
    tag.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn attributes_of(element: &Element) -> Option<BuildingAttributes> {
    let building_type = non_empty(element, "building")
        .filter(|b| *b != "yes")
        .or_else(|| non_empty(element, "amenity"))
        .map(humanize);

    let attributes = BuildingAttributes {
        year_built: non_empty(element, "start_date").and_then(parse_year),
        building_type,
        levels: non_empty(element, "building:levels").and_then(parse_levels),
    };

    (!attributes.is_empty()).then_some(attributes)
}

/// Take the first tagged way that yields at least one attribute and stop
/// there, even if a later way carries more detail. Ways whose tags parse to
/// nothing (`building:levels=0`, an undated `start_date`) are skipped.
pub fn select_first_building(elements: &[Element]) -> Option<BuildingAttributes> {
    elements
        .iter()
        .filter(|e| e.kind == "way" && !e.tags.is_empty())
        .find_map(attributes_of)
}
