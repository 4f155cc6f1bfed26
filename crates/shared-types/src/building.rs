use serde::{Deserialize, Serialize};

/// Attributes of the structure found at a resolved coordinate.
///
/// Each field is independent: a map feature may carry a type but no year.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BuildingAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<u32>,
}

impl BuildingAttributes {
    pub fn is_empty(&self) -> bool {
        self.year_built.is_none() && self.building_type.is_none() && self.levels.is_none()
    }
}
