use dioxus::prelude::*;
use shared_types::PermitKind;

/// Inline label naming where a permit link points.
#[component]
pub fn PermitBadge(kind: PermitKind) -> Element {
    rsx! {
        span { class: "plu-permit-badge {kind.as_str()}", "{kind.badge()}" }
    }
}
