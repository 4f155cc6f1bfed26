use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Commercial Property Lookup";
pub const DEFAULT_INSTRUCTIONS: &str =
    "Enter a full property address to retrieve listing links and publicly available property data.";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_instructions() -> String {
    DEFAULT_INSTRUCTIONS.to_string()
}

/// Administrator-supplied configuration, stored as TOML.
///
/// Every section defaults so that a missing or partial file still yields a
/// usable (if locked) tool. Optional credentials that are absent or blank
/// silently disable the matching integration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub tool: ToolSettings,
    #[serde(default)]
    pub access: AccessSettings,
    #[serde(default)]
    pub smarty: SmartyCredentials,
    #[serde(default)]
    pub google_maps: MapsSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_instructions")]
    pub instructions: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            instructions: default_instructions(),
        }
    }
}

/// Shared team password, kept only as an argon2 PHC string.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AccessSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

/// Smarty US Street API secret key pair. Server-side only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SmartyCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

/// Browser key for Google Maps Places address autocomplete.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MapsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Settings {
    pub fn password_hash(&self) -> Option<&str> {
        non_blank(&self.access.password_hash)
    }

    /// Both halves of the Smarty pair, or `None` if either is missing.
    pub fn smarty_credentials(&self) -> Option<(&str, &str)> {
        Some((
            non_blank(&self.smarty.auth_id)?,
            non_blank(&self.smarty.auth_token)?,
        ))
    }

    pub fn maps_api_key(&self) -> Option<&str> {
        non_blank(&self.google_maps.api_key)
    }

    /// Redacted view safe to hand back to the admin API.
    pub fn view(&self) -> SettingsView {
        SettingsView {
            title: self.tool.title.clone(),
            instructions: self.tool.instructions.clone(),
            password_configured: self.password_hash().is_some(),
            smarty_configured: self.smarty_credentials().is_some(),
            maps_configured: self.maps_api_key().is_some(),
        }
    }
}

/// Settings as reported to administrators. Secrets appear only as flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SettingsView {
    pub title: String,
    pub instructions: String,
    pub password_configured: bool,
    pub smarty_configured: bool,
    pub maps_configured: bool,
}
