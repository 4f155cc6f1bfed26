//! Directory of public building-permit research links.

use shared_types::{PermitKind, PermitLink};

/// Curated municipal permit portals, keyed by lower-case city name.
const CITY_PORTALS: &[(&str, &str, &str)] = &[
    // California
    ("los angeles", "LA Department of Building & Safety", "https://www.ladbsservices2.lacity.org/onlineservices/default.aspx"),
    ("san francisco", "SF DBI Permit Search", "https://dbiweb02.sfgov.org/dbipts/default.aspx?page=BuildingPermitSearch"),
    ("san diego", "San Diego Permit Status", "https://www.sandiego.gov/development-services/permits/permit-status"),
    ("sacramento", "Sacramento Building Permits", "https://cityofsacramento.org/Community-Development/Building-Permits"),
    ("san jose", "San José Permit Center", "https://www.sanjoseca.gov/business/permits-licenses/building-permits"),
    // Texas
    ("houston", "Houston Permitting Center", "https://www.houston.permittingcenter.org/"),
    ("dallas", "Develop Dallas", "https://developdallas.dallascityhall.com/"),
    ("austin", "Austin Development Services", "https://austintexas.gov/department/development-services-permits"),
    ("san antonio", "San Antonio Development Services", "https://www.sanantonio.gov/DSD/Permits"),
    // New York
    ("new york", "NYC DOB NOW Build", "https://a810-bisweb.nyc.gov/bisweb/bsqpm01.jsp"),
    ("new york city", "NYC DOB NOW Build", "https://a810-bisweb.nyc.gov/bisweb/bsqpm01.jsp"),
    // Illinois
    ("chicago", "Chicago Building Records", "https://webapps1.chicago.gov/buildingrecords/"),
    // Florida
    ("miami", "Miami-Dade Building Permits", "https://www.miamidade.gov/permits/"),
    ("orlando", "Orlando Building Division", "https://www.orlando.gov/Building-Development/Building-Division/Permits"),
    ("tampa", "Tampa Permits", "https://www.tampagov.net/building-construction/permits"),
    ("jacksonville", "Jacksonville Building Permits", "https://buildingpermits.jacksonvillefl.gov/"),
    // Georgia
    ("atlanta", "Atlanta Office of Buildings", "https://conapps.atlantaga.gov/OccupantServices/permitSearch"),
    // Arizona
    ("phoenix", "Phoenix Planning & Development", "https://phoenix.gov/pdd/permits"),
    ("tucson", "Tucson Development Services", "https://www.tucsonaz.gov/Departments/Development-Services"),
    // Washington
    ("seattle", "Seattle Permit Search", "https://cosaccela.seattle.gov/portal/welcome.aspx"),
    // Colorado
    ("denver", "Denver Development Services", "https://www.denvergov.org/online-services-and-information/online-services/apply-for-a-building-permit"),
    // Nevada
    ("las vegas", "Las Vegas Development Center", "https://lvdcd.com/building-permits"),
    ("henderson", "Henderson Building Permits", "https://www.cityofhenderson.com/city-services/building-development"),
    // Ohio
    ("columbus", "Columbus Permit Center", "https://permits.columbus.gov/"),
    ("cleveland", "Cleveland Building Permits", "https://www.clevelandohio.gov/CityofCleveland/Home/Government/CityAgencies/BuildingandHousing"),
    // Oregon
    ("portland", "Portland Development Services", "https://www.portland.gov/bds/permits"),
    // Michigan
    ("detroit", "Detroit BSEED Permits", "https://www.detroitmi.gov/government/departments-and-agencies/buildings-safety-engineering-and-environmental-department/permits"),
    // North Carolina
    ("charlotte", "Charlotte Online Permit Portal", "https://charlottes-portal.tylerhost.net/NC_Charlotte/"),
    ("raleigh", "Raleigh Online Services", "https://raleighnc.gov/permits-inspections"),
    // Tennessee
    ("nashville", "Nashville Codes Administration", "https://nashville.gov/Government/Agencies/Codes-Administration/Planning-Zones-and-Permits.aspx"),
    // Minnesota
    ("minneapolis", "Minneapolis e-Services", "https://eservices.ci.minneapolis.mn.us/OccupancyPermits/"),
    // Missouri
    ("kansas city", "Kansas City Permits", "https://www.kcmo.gov/city-hall/departments/city-development/permits"),
    ("st. louis", "St. Louis Building Division", "https://www.stlouis-mo.gov/government/departments/building/"),
    // Indiana
    ("indianapolis", "Indianapolis Permit Center", "https://www.indy.gov/agency/department-of-metropolitan-development"),
    // Wisconsin
    ("milwaukee", "Milwaukee DPCED Permits", "https://city.milwaukee.gov/DPCED/permits"),
    // Maryland
    ("baltimore", "Baltimore City Permits", "https://bchd.baltimorecity.gov/permits"),
    // Virginia
    ("virginia beach", "Virginia Beach Permits", "https://www.vbgov.com/government/departments/permits-inspections/"),
];

const NATIONAL_LABEL: &str = "PermitData.com \u{2014} National Permit Search";
const NATIONAL_URL: &str = "https://www.permitdata.com/";
const DATASET_LABEL: &str = "OpenDataSoft \u{2014} Building Permit Datasets";

fn known(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// The curated portal for `city`, matched case-insensitively after trimming.
pub fn city_portal(city: &str) -> Option<PermitLink> {
    let key = city.trim().to_lowercase();
    CITY_PORTALS
        .iter()
        .find(|(name, _, _)| *name == key)
        .map(|(_, label, url)| PermitLink {
            label: label.to_string(),
            url: url.to_string(),
            kind: PermitKind::CityPortal,
        })
}

/// Permit links for a location: the city's own portal when curated, the
/// national aggregator, a dataset search, and (when both city and state are
/// known) a public-records request search.
///
/// County and ZIP are accepted for future county-level portals and do not
/// affect the result yet.
pub fn links_for(
    city: Option<&str>,
    state: Option<&str>,
    _county: Option<&str>,
    _zip: Option<&str>,
) -> Vec<PermitLink> {
    let city = known(city);
    let state = known(state);
    let mut links = Vec::with_capacity(4);

    if let Some(portal) = city.and_then(city_portal) {
        links.push(portal);
    }

    links.push(PermitLink {
        label: NATIONAL_LABEL.to_string(),
        url: NATIONAL_URL.to_string(),
        kind: PermitKind::National,
    });

    let search_term = match city {
        Some(city) => format!("{city} building permits"),
        None => "building permits".to_string(),
    };
    links.push(PermitLink {
        label: DATASET_LABEL.to_string(),
        url: format!(
            "https://public.opendatasoft.com/explore/?q={}&sort=modified",
            urlencoding::encode(&search_term)
        ),
        kind: PermitKind::National,
    });

    if let (Some(city), Some(state)) = (city, state) {
        links.push(PermitLink {
            label: format!("Submit a public records (FOIA) request \u{2014} {city}, {state}"),
            url: format!(
                "https://www.google.com/search?q={}",
                urlencoding::encode(&format!(
                    "{city} {state} building permit public records request"
                ))
            ),
            kind: PermitKind::Foia,
        });
    }

    links
}
