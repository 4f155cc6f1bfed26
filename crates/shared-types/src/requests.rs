use serde::{Deserialize, Serialize};
#[cfg(feature = "validation")]
use validator::Validate;

/// Password submitted to unlock the tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct PasswordCheckRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please enter the access password."))
    )]
    pub password: String,
}

/// Address to look up, either as free text or as discrete form fields.
///
/// `address` wins when it is non-blank.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LookupRequest {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

fn trimmed(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}

impl LookupRequest {
    /// The single-line address this request stands for.
    ///
    /// Fields join as `street[, city][, state][ zip]`. A blank street yields
    /// an empty string, since the street portion is the only required part.
    pub fn full_address(&self) -> String {
        let free_text = trimmed(&self.address);
        if !free_text.is_empty() {
            return free_text.to_string();
        }

        let street = trimmed(&self.street);
        if street.is_empty() {
            return String::new();
        }

        let mut joined = street.to_string();
        for part in [trimmed(&self.city), trimmed(&self.state)] {
            if !part.is_empty() {
                joined.push_str(", ");
                joined.push_str(part);
            }
        }
        let zip = trimmed(&self.zip);
        if !zip.is_empty() {
            joined.push(' ');
            joined.push_str(zip);
        }
        joined
    }

    pub fn to_query(&self) -> AddressQuery {
        AddressQuery {
            address: self.full_address(),
        }
    }
}

/// Normalized single-line address, validated before any provider call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct AddressQuery {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please enter a property address."))
    )]
    pub address: String,
}

/// Administrator update of the stored settings.
///
/// Blank secret fields keep the stored value; `clear_*` flags remove it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UpdateSettingsRequest {
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 120, message = "Title must be 1-120 characters"))
    )]
    pub title: Option<String>,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 1000, message = "Instructions must be at most 1000 characters"))
    )]
    pub instructions: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub smarty_auth_id: Option<String>,
    #[serde(default)]
    pub smarty_auth_token: Option<String>,
    #[serde(default)]
    pub maps_api_key: Option<String>,
    #[serde(default)]
    pub clear_smarty: bool,
    #[serde(default)]
    pub clear_maps_api_key: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Current visitor session as seen by a script client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionInfo {
    pub authenticated: bool,
    /// Send back as `x-csrf-token` on state-changing requests.
    pub csrf_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(street: &str, city: &str, state: &str, zip: &str) -> LookupRequest {
        LookupRequest {
            address: None,
            street: Some(street.to_string()),
            city: Some(city.to_string()),
            state: Some(state.to_string()),
            zip: Some(zip.to_string()),
        }
    }

    #[test]
    fn joins_all_fields() {
        let req = fields("350 N Orleans St", "Chicago", "IL", "60654");
        assert_eq!(req.full_address(), "350 N Orleans St, Chicago, IL 60654");
    }

    #[test]
    fn skips_blank_fields() {
        assert_eq!(
            fields("350 N Orleans St", "", "IL", "").full_address(),
            "350 N Orleans St, IL"
        );
        assert_eq!(
            fields(" 1 Main St ", " ", " ", "02110 ").full_address(),
            "1 Main St 02110"
        );
    }

    #[test]
    fn blank_street_yields_empty_address() {
        assert_eq!(fields("  ", "Chicago", "IL", "60654").full_address(), "");
    }

    #[test]
    fn free_text_wins_over_fields() {
        let mut req = fields("ignored", "", "", "");
        req.address = Some("  1600 Pennsylvania Ave NW, Washington, DC ".to_string());
        assert_eq!(
            req.full_address(),
            "1600 Pennsylvania Ave NW, Washington, DC"
        );
    }

    #[test]
    fn lookup_request_accepts_partial_json() {
        let req: LookupRequest =
            serde_json::from_str(r#"{"address":"1 Main St"}"#).unwrap();
        assert_eq!(req.to_query().address, "1 Main St");
        let empty: LookupRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.to_query().address, "");
    }

    #[cfg(feature = "validation")]
    #[test]
    fn empty_address_fails_validation() {
        let query = LookupRequest::default().to_query();
        let errors = query.validate().unwrap_err();
        let err = crate::AppError::from(errors);
        assert_eq!(err.display_message(), "Please enter a property address.");
    }

    #[cfg(feature = "validation")]
    #[test]
    fn empty_password_fails_validation() {
        let req = PasswordCheckRequest {
            password: String::new(),
        };
        assert!(req.validate().is_err());
    }
}
