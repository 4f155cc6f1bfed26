use dioxus::prelude::*;
use shared_types::{ListingUrls, LookupResponse, PermitLink};

use super::badge::PermitBadge;
use super::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::detail::{property_sections, DetailSection};

struct Platform {
    label: &'static str,
    class: &'static str,
    tooltip: &'static str,
    url: String,
}

fn platforms(urls: &ListingUrls) -> Vec<Platform> {
    let mut list = vec![
        Platform {
            label: "Zillow",
            class: "zillow",
            tooltip: "Search Zillow for this property",
            url: urls.zillow.clone(),
        },
        Platform {
            label: "Redfin",
            class: "redfin",
            tooltip: "Search Redfin for this property",
            url: urls.redfin.clone(),
        },
        Platform {
            label: "LoopNet",
            class: "loopnet",
            tooltip: "Search LoopNet for this commercial property",
            url: urls.loopnet.clone(),
        },
    ];
    if let Some(city_url) = &urls.loopnet_city {
        list.push(Platform {
            label: "LoopNet (city listings)",
            class: "loopnet",
            tooltip: "Browse commercial listings for sale in this city",
            url: city_url.clone(),
        });
    }
    list
}

/// Everything shown below the search card after a lookup.
#[component]
pub fn ResultsPanel(response: LookupResponse) -> Element {
    let sections = property_sections(&response.property_data);
    let data = &response.property_data;

    rsx! {
        div { id: "plu-results",
            div { class: "plu-address-banner",
                span { "Results for: {response.display_address}" }
            }
            Card {
                CardHeader {
                    CardTitle { "Listing Platform Links" }
                    CardDescription { "Click to open search results for this address on each platform." }
                }
                CardContent {
                    PlatformLinks { urls: response.urls.clone() }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Property Details" }
                }
                CardContent {
                    PropertyDetails { sections }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Square Footage & Available Tenants" }
                }
                CardContent {
                    SquareFootageNotice { loopnet_url: response.urls.loopnet.clone() }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Public Permits & Records" }
                    CardDescription { "Links to official city/county permit portals and national databases." }
                }
                CardContent {
                    PermitList { permits: data.permits.clone() }
                }
            }
            Card { class: "plu-card-muted",
                CardHeader {
                    CardTitle { "Data Sources & Notes" }
                }
                CardContent {
                    NotesPanel {
                        sources: data.data_sources.clone(),
                        notes: data.notes.clone(),
                    }
                }
            }
        }
    }
}

#[component]
pub fn PlatformLinks(urls: ListingUrls) -> Element {
    let list = platforms(&urls);

    rsx! {
        div { class: "plu-platform-grid",
            for platform in list.iter() {
                a {
                    class: "plu-platform-btn {platform.class}",
                    href: "{platform.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    title: "{platform.tooltip}",
                    "{platform.label}"
                }
            }
        }
    }
}

/// Label/value grid, one block per section.
#[component]
pub fn PropertyDetails(sections: Vec<DetailSection>) -> Element {
    rsx! {
        for section in sections.iter() {
            div { class: "plu-detail-section",
                h4 { class: "plu-detail-section-title", "{section.title}" }
                div { class: "plu-detail-grid",
                    for cell in section.cells.iter() {
                        div { class: "plu-detail-cell",
                            div { class: "plu-detail-label", "{cell.label}" }
                            div { class: "{cell.value_class()}", "{cell.display()}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SquareFootageNotice(loopnet_url: String) -> Element {
    rsx! {
        div { class: "plu-api-notice",
            strong { "Square Footage & Available Tenants" }
            " Not available from the address data providers. Review "
            a {
                href: "{loopnet_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "LoopNet"
            }
            " for available units, tenants, and lease rates for this property."
        }
    }
}

#[component]
pub fn PermitList(permits: Vec<PermitLink>) -> Element {
    if permits.is_empty() {
        return rsx! {
            p { class: "plu-empty", "No permit portals found for this location." }
        };
    }

    rsx! {
        ul { class: "plu-permit-list",
            for permit in permits.iter() {
                li {
                    a {
                        class: "plu-permit-link",
                        href: "{permit.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{permit.label}"
                        PermitBadge { kind: permit.kind }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotesPanel(sources: Vec<String>, notes: Vec<String>) -> Element {
    rsx! {
        if !sources.is_empty() {
            div { class: "plu-sources",
                div { class: "plu-sources-title", "Data Retrieved From" }
                div { class: "plu-sources-tags",
                    for source in sources.iter() {
                        span { class: "plu-source-tag", "{source}" }
                    }
                }
            }
        }
        if !notes.is_empty() {
            ul { class: "plu-notes-list",
                for note in notes.iter() {
                    li { "{note}" }
                }
            }
        }
    }
}
