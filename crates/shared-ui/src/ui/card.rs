use dioxus::prelude::*;

/// A bordered section container.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "plu-card {class}", {children} }
    }
}

/// Header section of a Card.
#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "plu-section-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "plu-section-title", {children} }
    }
}

/// Muted helper text under a CardTitle.
#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "plu-section-note", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "plu-card-content", {children} }
    }
}
