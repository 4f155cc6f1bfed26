//! Search links on the listing platforms. Pure string building.

use shared_types::{AddressComponents, ListingUrls};

/// Lower-case, collapse every run of non-alphanumerics to one hyphen, and
/// trim hyphens from both ends.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;
    for c in value.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

fn join_present(parts: &[&Option<String>]) -> String {
    parts
        .iter()
        .filter_map(|p| p.as_deref().map(str::trim).filter(|v| !v.is_empty()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"350 N Orleans St, Chicago IL 60654"` from standardized parts.
pub fn standardized_address(c: &AddressComponents) -> String {
    let street = join_present(&[
        &c.primary_number,
        &c.street_predirection,
        &c.street_name,
        &c.street_suffix,
        &c.street_postdirection,
        &c.secondary_designator,
        &c.secondary_number,
    ]);
    let city_line = join_present(&[&c.city_name, &c.state_abbreviation, &c.zipcode]);
    format!("{street}, {city_line}")
}

pub fn zillow_url(address: &str, components: Option<&AddressComponents>) -> String {
    let source = match components {
        Some(c) => join_present(&[
            &c.primary_number,
            &c.street_predirection,
            &c.street_name,
            &c.street_suffix,
            &c.secondary_designator,
            &c.secondary_number,
            &c.city_name,
            &c.state_abbreviation,
            &c.zipcode,
        ]),
        None => address.trim().to_string(),
    };
    format!("https://www.zillow.com/homes/{}_rb/", slugify(&source))
}

fn search_query(address: &str, components: Option<&AddressComponents>) -> String {
    match components {
        Some(c) => standardized_address(c),
        None => address.trim().to_string(),
    }
}

pub fn redfin_url(address: &str, components: Option<&AddressComponents>) -> String {
    format!(
        "https://www.redfin.com/search?q={}",
        urlencoding::encode(&search_query(address, components))
    )
}

pub fn loopnet_url(address: &str, components: Option<&AddressComponents>) -> String {
    format!(
        "https://www.loopnet.com/search/?q={}&propertyType=all",
        urlencoding::encode(&search_query(address, components))
    )
}

/// City-wide commercial listings, when the city and a two-letter state
/// code are known. Full state names do not map to a browse page.
pub fn loopnet_city_url(city: &str, state: &str) -> Option<String> {
    let city = city.trim();
    let state = state.trim();
    if city.is_empty() || state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let city_slug = city.split_whitespace().collect::<Vec<_>>().join("-");
    Some(format!(
        "https://www.loopnet.com/search/commercial-real-estate/{}-{}/for-sale/",
        city_slug.to_lowercase(),
        state.to_lowercase()
    ))
}

/// All platform links for one lookup. `components` is only passed when the
/// validating provider resolved the address.
pub fn listing_urls(
    address: &str,
    components: Option<&AddressComponents>,
    city: Option<&str>,
    state: Option<&str>,
) -> ListingUrls {
    ListingUrls {
        zillow: zillow_url(address, components),
        redfin: redfin_url(address, components),
        loopnet: loopnet_url(address, components),
        loopnet_city: match (city, state) {
            (Some(city), Some(state)) => loopnet_city_url(city, state),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn orleans() -> AddressComponents {
        AddressComponents {
            primary_number: Some("350".into()),
            street_predirection: Some("N".into()),
            street_name: Some("Orleans".into()),
            street_suffix: Some("St".into()),
            city_name: Some("Chicago".into()),
            state_abbreviation: Some("IL".into()),
            zipcode: Some("60654".into()),
            ..Default::default()
        }
    }

    #[test]
    fn zillow_from_raw_address() {
        assert_eq!(
            zillow_url("350 N Orleans St, Chicago, IL 60654", None),
            "https://www.zillow.com/homes/350-n-orleans-st-chicago-il-60654_rb/"
        );
    }

    #[test]
    fn zillow_from_components_skips_postdirection() {
        let mut c = orleans();
        c.street_postdirection = Some("W".into());
        c.secondary_designator = Some("Ste".into());
        c.secondary_number = Some("1200".into());
        assert_eq!(
            zillow_url("ignored", Some(&c)),
            "https://www.zillow.com/homes/350-n-orleans-st-ste-1200-chicago-il-60654_rb/"
        );
    }

    #[test]
    fn slug_has_only_single_inner_hyphens() {
        for input in [
            "  --350   N. Orleans St.,, Chicago!! ",
            "#12 / Unit B",
            "Ünïcode Straße 5",
            "---",
        ] {
            let slug = slugify(input);
            assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
        assert_eq!(slugify("  --350   N. Orleans St.,, Chicago!! "), "350-n-orleans-st-chicago");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn redfin_and_loopnet_use_standardized_string_with_components() {
        assert_eq!(
            standardized_address(&orleans()),
            "350 N Orleans St, Chicago IL 60654"
        );
        assert_eq!(
            redfin_url("raw", Some(&orleans())),
            "https://www.redfin.com/search?q=350%20N%20Orleans%20St%2C%20Chicago%20IL%2060654"
        );
        assert_eq!(
            loopnet_url("raw", Some(&orleans())),
            "https://www.loopnet.com/search/?q=350%20N%20Orleans%20St%2C%20Chicago%20IL%2060654&propertyType=all"
        );
    }

    #[test]
    fn redfin_and_loopnet_use_raw_address_without_components() {
        let raw = "350 N Orleans St, Chicago, IL 60654";
        let redfin = redfin_url(raw, None);
        assert_eq!(
            redfin,
            "https://www.redfin.com/search?q=350%20N%20Orleans%20St%2C%20Chicago%2C%20IL%2060654"
        );
        let query = redfin.strip_prefix("https://www.redfin.com/search?q=").unwrap();
        assert_eq!(urlencoding::decode(query).unwrap(), raw);
        assert_ne!(redfin, redfin_url(raw, Some(&orleans())));
    }

    #[test]
    fn loopnet_city_browse_link() {
        assert_eq!(
            loopnet_city_url("Las  Vegas", "NV").as_deref(),
            Some("https://www.loopnet.com/search/commercial-real-estate/las-vegas-nv/for-sale/")
        );
        assert_eq!(loopnet_city_url("", "NV"), None);
        assert_eq!(loopnet_city_url("Chicago", " "), None);
    }

    #[test]
    fn loopnet_city_requires_state_code() {
        assert_eq!(loopnet_city_url("Chicago", "Illinois"), None);
        assert_eq!(loopnet_city_url("Chicago", "I1"), None);
        assert_eq!(
            loopnet_city_url("Chicago", "il").as_deref(),
            Some("https://www.loopnet.com/search/commercial-real-estate/chicago-il/for-sale/")
        );
    }

    #[test]
    fn listing_urls_without_city_has_no_browse_link() {
        let urls = listing_urls("1 Main St", None, None, Some("IL"));
        assert!(urls.loopnet_city.is_none());
        assert_eq!(urls.zillow, "https://www.zillow.com/homes/1-main-st_rb/");
    }
}
