//! The lookup pipeline: resolve, enrich, link, annotate.

use shared_types::{
    messages, AddressQuery, AppError, LookupResponse, LookupResult, ResolverKind,
};

use crate::auth::gate::RequestContext;
use crate::building::BuildingSource;
use crate::error_convert::ValidateRequest;
use crate::resolver::AddressResolver;
use crate::{listing, permits};

pub const OVERPASS_SOURCE: &str = "OpenStreetMap / Overpass API (building attributes)";

pub const NOTE_UNRESOLVED: &str =
    "Could not validate this address. Verify it is complete (street, city, state, ZIP) and try again.";
pub const NOTE_LINKS_STILL_USABLE: &str =
    "Platform links are still generated and can be used for manual research.";
pub const NOTE_NOT_DELIVERABLE: &str =
    "The address validation service could not confirm this address as deliverable. Results may be approximate.";
pub const NOTE_MANUAL_REVIEW: &str =
    "Square footage and tenant data are available via the linked platforms (Zillow, Redfin, LoopNet) for manual review.";
pub const NOTE_API_UPGRADE: &str =
    "An API connection (ATTOM Data, CoStar, etc.) can be added for automated square footage and tenant retrieval.";

/// Run one lookup for an authenticated visitor.
///
/// Provider calls are made one after another. Provider failures never fail
/// the lookup; they only leave parts of the result empty.
#[tracing::instrument(skip_all, fields(session_id = %ctx.session_id))]
pub async fn run_lookup(
    ctx: &RequestContext,
    resolver: &AddressResolver,
    buildings: &dyn BuildingSource,
    query: &AddressQuery,
) -> Result<LookupResponse, AppError> {
    if !ctx.is_authenticated() {
        return Err(AppError::unauthorized(messages::ACCESS_REQUIRED));
    }

    let query = AddressQuery {
        address: query.address.trim().to_string(),
    };
    query.validate_request()?;
    let address = query.address;

    let mut result = LookupResult::default();
    let resolution = resolver.resolve(&address).await;

    match &resolution {
        Some(resolution) => {
            result.resolved_by = Some(resolution.resolved_by);
            result
                .data_sources
                .push(resolution.resolved_by.data_source_label().to_string());

            if resolution.resolved_by == ResolverKind::Smarty {
                result.address_valid = Some(resolution.dpv.is_some_and(|dpv| dpv.is_valid()));
            }

            if let Some((lat, lon)) = resolution.location.coordinates() {
                if let Some(building) = buildings.lookup(lat, lon).await {
                    result.building = Some(building);
                    result.data_sources.push(OVERPASS_SOURCE.to_string());
                }
            }
        }
        None => {
            tracing::info!(address = %address, "Address could not be resolved");
        }
    }

    let location = resolution.as_ref().map(|r| &r.location);
    let city = location.and_then(|l| l.city.as_deref());
    let state = location.and_then(|l| l.state.as_deref());
    result.permits = permits::links_for(
        city,
        state,
        location.and_then(|l| l.county.as_deref()),
        location.and_then(|l| l.zip.as_deref()),
    );

    let components = resolution
        .as_ref()
        .filter(|r| r.resolved_by == ResolverKind::Smarty)
        .and_then(|r| r.location.components.as_ref());
    let browse_state = components
        .and_then(|c| c.state_abbreviation.as_deref())
        .or(state);
    let urls = listing::listing_urls(&address, components, city, browse_state);

    match &resolution {
        None => {
            result.notes.push(NOTE_UNRESOLVED.to_string());
            result.notes.push(NOTE_LINKS_STILL_USABLE.to_string());
        }
        Some(_) => {
            if result.address_valid == Some(false) {
                result.notes.push(NOTE_NOT_DELIVERABLE.to_string());
            }
            result.notes.push(NOTE_MANUAL_REVIEW.to_string());
            result.notes.push(NOTE_API_UPGRADE.to_string());
        }
    }

    let display_address = location
        .map(|l| l.display_name.clone())
        .unwrap_or_else(|| address.clone());
    result.location = resolution.map(|r| r.location);

    tracing::info!(
        resolved_by = ?result.resolved_by,
        building = result.building.is_some(),
        permits = result.permits.len(),
        "Lookup complete"
    );

    Ok(LookupResponse {
        address,
        display_address,
        urls,
        property_data: result,
    })
}
