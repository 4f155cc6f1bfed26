use serde::{Deserialize, Serialize};

/// Where a permit-research link points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum PermitKind {
    /// A municipal building-records portal.
    CityPortal,
    /// A nationwide aggregator or dataset search.
    National,
    /// A search framed as a public-records request.
    Foia,
}

impl PermitKind {
    /// Badge text shown next to the link.
    pub fn badge(&self) -> &'static str {
        match self {
            PermitKind::CityPortal => "City Portal",
            PermitKind::National => "National",
            PermitKind::Foia => "FOIA / Records",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PermitKind::CityPortal => "city-portal",
            PermitKind::National => "national",
            PermitKind::Foia => "foia",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PermitLink {
    pub label: String,
    pub url: String,
    pub kind: PermitKind,
}
