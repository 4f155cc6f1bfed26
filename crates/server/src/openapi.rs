use shared_types::{
    AddressComponents, AppError, AppErrorKind, BuildingAttributes, DpvMatch, ListingUrls,
    LookupRequest, LookupResponse, LookupResult, MessageResponse, PasswordCheckRequest,
    PermitKind, PermitLink, ResolvedLocation, ResolverKind, SessionInfo, SettingsView,
    UpdateSettingsRequest, UspsMetadata,
};
use utoipa::OpenApi;

use crate::health::{self, HealthResponse};
use crate::rest::{admin, api};

#[derive(OpenApi)]
#[openapi(
    paths(
        api::session,
        api::access,
        api::lookup,
        api::sign_out,
        admin::get_settings,
        admin::update_settings,
        health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        PasswordCheckRequest,
        MessageResponse,
        SessionInfo,
        LookupRequest,
        LookupResponse,
        LookupResult,
        ListingUrls,
        ResolvedLocation,
        ResolverKind,
        AddressComponents,
        UspsMetadata,
        DpvMatch,
        BuildingAttributes,
        PermitLink,
        PermitKind,
        SettingsView,
        UpdateSettingsRequest,
        HealthResponse,
    )),
    tags(
        (name = "session", description = "Access password and session endpoints"),
        (name = "lookup", description = "Commercial property lookup"),
        (name = "admin", description = "Tool settings administration"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Property Lookup API",
        description = "Password-gated commercial property lookup: address validation, building attributes, permit research and listing links",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/session",
            "/api/v1/access",
            "/api/v1/lookup",
            "/api/v1/sign-out",
            "/api/v1/admin/settings",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
