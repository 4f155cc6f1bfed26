use serde::{Deserialize, Serialize};

use crate::{BuildingAttributes, PermitLink, ResolvedLocation, ResolverKind};

/// Deep links into the listing platforms for one address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListingUrls {
    pub zillow: String,
    pub redfin: String,
    pub loopnet: String,
    /// City-level commercial listings browse page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loopnet_city: Option<String>,
}

/// Everything gathered about a property during one lookup.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LookupResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ResolvedLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<ResolverKind>,
    /// DPV validity; only known when the validation provider resolved the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<BuildingAttributes>,
    #[serde(default)]
    pub permits: Vec<PermitLink>,
    #[serde(default)]
    pub data_sources: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Response of a completed lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LookupResponse {
    /// The address as submitted.
    pub address: String,
    /// Standardized address when available, otherwise the submitted one.
    pub display_address: String,
    pub urls: ListingUrls,
    pub property_data: LookupResult,
}
